//! DOM arena: the live widget tree the inspector mirrors and edits.

pub mod node;
pub mod query;
pub mod tree;

pub use node::{NodeData, NodeId};
pub use tree::{Dom, VisualUpdate};
