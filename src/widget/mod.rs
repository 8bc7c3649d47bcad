//! Widget system: trait and scrolling.

pub mod scroll;
pub mod traits;

pub use scroll::ScrollState;
pub use traits::Widget;
