// Operations module - the stash decision engine (pure, no I/O)

pub mod recycle_value;
pub mod quest_holds;
pub mod classifiers;
pub mod optimizer;
pub mod recycle_sources;

pub use recycle_value::*;
pub use quest_holds::*;
pub use classifiers::*;
pub use optimizer::*;
pub use recycle_sources::*;
