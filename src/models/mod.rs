// Models module - catalog, stash and engine output shapes

pub mod item;
pub mod quest;
pub mod stash;
pub mod recommendation;

pub use item::*;
pub use quest::*;
pub use stash::*;
pub use recommendation::*;
