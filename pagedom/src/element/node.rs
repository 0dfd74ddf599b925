use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: String,

    // Selectors
    /// Class list in insertion order, without duplicates.
    pub classes: Vec<String>,
    /// String attributes (`data-ts`, `title`, ...).
    pub attributes: HashMap<String, String>,

    // Content
    pub content: Content,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: "div".to_string(),
            classes: Vec::new(),
            attributes: HashMap::new(),
            content: Content::None,
        }
    }
}

impl Element {
    /// Create an element with an arbitrary tag name.
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            id: generate_id(&tag),
            tag,
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn span() -> Self {
        Self::new("span")
    }

    pub fn section() -> Self {
        Self::new("section")
    }

    /// Create a button with a text label.
    pub fn button(label: impl Into<String>) -> Self {
        Self::new("button").text(label)
    }

    /// Create a paragraph holding a single text run.
    pub fn paragraph(content: impl Into<String>) -> Self {
        Self::new("p").text(content)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Selectors
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
        self
    }

    pub fn classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for class in classes {
            self = self.class(class);
        }
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Flip `class` on this element. Returns true if the class is now present.
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if let Some(pos) = self.classes.iter().position(|c| c == class) {
            self.classes.remove(pos);
            false
        } else {
            self.classes.push(class.to_string());
            true
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.attributes.insert(name.into(), value.to_string());
        self
    }

    /// Shorthand for a `data-*` attribute: `.data("ts", 1)` sets `data-ts`.
    pub fn data(self, key: &str, value: impl ToString) -> Self {
        self.attr(format!("data-{key}"), value)
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    // Content
    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.content = Content::Text(content.into());
        self
    }

    /// Concatenated text of this element's subtree.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.content.collect_text(&mut out);
        out
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => {
                // Text and empty content are replaced by the child list
                self.content = Content::Children(vec![child]);
            }
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => {
                self.content = Content::Children(new_children.into_iter().collect());
            }
        }
        self
    }

    /// Direct children, empty for text or empty content.
    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }
}
