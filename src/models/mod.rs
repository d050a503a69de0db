pub mod feed;
pub mod fifa;

pub use feed::*;
pub use fifa::*;
