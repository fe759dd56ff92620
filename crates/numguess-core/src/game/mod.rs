mod scoring;
mod session;
mod tier;

pub use scoring::*;
pub use session::*;
pub use tier::*;
