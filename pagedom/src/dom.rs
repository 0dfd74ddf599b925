//! Abstract document interface.
//!
//! Widgets talk to a page only through this trait, so they can run against
//! the in-memory [`Document`](crate::Document) or any other tree that can
//! answer class and attribute queries by element id.

use crate::DomError;

pub trait Dom {
    /// Whether the element exists and carries `class`.
    fn has_class(&self, id: &str, class: &str) -> bool;

    /// Attribute value of the element, if both exist.
    fn attribute(&self, id: &str, name: &str) -> Option<&str>;

    /// The element itself or its nearest ancestor carrying `class`.
    fn closest(&self, id: &str, class: &str) -> Option<String>;

    /// First descendant of `scope` (not `scope` itself) carrying `class`,
    /// in document order.
    fn query_selector(&self, scope: &str, class: &str) -> Option<String>;

    /// Every element carrying `class`, in document order.
    fn query_all(&self, class: &str) -> Vec<String>;

    /// Concatenated text of the element's subtree.
    fn text(&self, id: &str) -> Option<String>;

    /// Replace the element's content with a single text run.
    fn set_text(&mut self, id: &str, text: &str) -> Result<(), DomError>;

    /// Flip `class` on the element. Returns true if the class is now present.
    fn toggle_class(&mut self, id: &str, class: &str) -> Result<bool, DomError>;
}
