pub mod group_stage;
pub mod knockout;
pub mod locale;
pub mod normalize;
pub mod phase;

pub use group_stage::*;
pub use knockout::*;
pub use locale::*;
pub use normalize::*;
pub use phase::*;
