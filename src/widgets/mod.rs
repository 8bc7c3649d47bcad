//! Inspector widgets: mirror tree, resize bars, text fields, style viewer,
//! tab headers.

pub mod mirror_tree;
pub mod resize_bar;
pub mod style_viewer;
pub mod tabs;
pub mod text_field;

pub use mirror_tree::{MirrorNode, MirrorNodeId, MirrorTree, NodeLabel, TreeLine};
pub use resize_bar::{DragSession, ResizeBar};
pub use style_viewer::StyleViewer;
pub use tabs::Tabs;
pub use text_field::TextField;
