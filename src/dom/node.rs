//! Node types: NodeId, NodeData.

use slotmap::new_key_type;

use crate::css::model::{declarations_to_css, Declaration};
use crate::css::parser::{parse_declarations, ParseError};
use crate::geometry::Size;

new_key_type! {
    /// Handle to a live widget. Copy, generational: a handle to a removed
    /// widget never resolves to a newer one.
    pub struct NodeId;
}

/// Data associated with a single live widget.
#[derive(Debug, Clone)]
pub struct NodeData {
    /// Widget type name (e.g. "Button", "Container").
    pub widget_type: String,
    /// Optional identifier, unique within the application when present.
    pub id: Option<String>,
    /// Class tags in insertion order, without duplicates.
    pub classes: Vec<String>,
    /// The widget's own inline style declarations (not inherited ones).
    pub styles: Vec<Declaration>,
    /// Current size in cells.
    pub size: Size,
    /// Whether this node can receive focus.
    pub focusable: bool,
}

impl NodeData {
    /// Create a new `NodeData` with the given widget type.
    pub fn new(widget_type: impl Into<String>) -> Self {
        Self {
            widget_type: widget_type.into(),
            id: None,
            classes: Vec::new(),
            styles: Vec::new(),
            size: Size::ZERO,
            focusable: false,
        }
    }

    /// Set the id (builder).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a class (builder).
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.add_class(&class.into());
        self
    }

    /// Add several classes (builder).
    pub fn with_classes(mut self, classes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        for class in classes {
            self.add_class(&class.into());
        }
        self
    }

    /// Set the size (builder).
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.size = Size::new(width, height);
        self
    }

    /// Parse and append inline declarations (builder).
    pub fn with_style(mut self, css: &str) -> Result<Self, ParseError> {
        for declaration in parse_declarations(css)? {
            self.set_declaration(declaration);
        }
        Ok(self)
    }

    /// Set whether this node can receive focus (builder).
    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    /// The identifier, or `""` when absent.
    pub fn id_or_empty(&self) -> &str {
        self.id.as_deref().unwrap_or("")
    }

    /// Check whether this node has a given class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class. Returns `false` if it was already present.
    pub fn add_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            return false;
        }
        self.classes.push(class.to_owned());
        true
    }

    /// Remove a class. Returns `false` if it was not present.
    pub fn remove_class(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        self.classes.len() != before
    }

    /// Replace the whole class set. Duplicates collapse to one entry.
    pub fn set_classes<'a>(&mut self, classes: impl IntoIterator<Item = &'a str>) {
        self.classes.clear();
        for class in classes {
            self.add_class(class);
        }
    }

    /// Space-joined classes, `""` when there are none.
    pub fn classes_joined(&self) -> String {
        self.classes.join(" ")
    }

    /// Insert or replace the declaration for `declaration.property`.
    pub fn set_declaration(&mut self, declaration: Declaration) {
        match self
            .styles
            .iter_mut()
            .find(|d| d.property == declaration.property)
        {
            Some(existing) => *existing = declaration,
            None => self.styles.push(declaration),
        }
    }

    /// The widget's own declarations rendered as CSS text.
    pub fn style_css(&self) -> String {
        declarations_to_css(&self.styles)
    }
}
