pub mod offer;
pub mod provider;

pub use offer::*;
pub use provider::*;
