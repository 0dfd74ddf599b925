use log::trace;

use crate::element::{ancestry, find_element, find_element_mut, walk, Element};
use crate::{Dom, DomError};

/// A write applied to a [`Document`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    SetText { id: String, text: String },
    ToggleClass { id: String, class: String, present: bool },
}

impl Mutation {
    /// Id of the element the write touched.
    pub fn target(&self) -> &str {
        match self {
            Self::SetText { id, .. } | Self::ToggleClass { id, .. } => id,
        }
    }
}

/// In-memory document: an element tree plus a log of every write made to it.
///
/// Element ids are expected to be unique; when they are not, lookups resolve
/// to the first match in document order.
#[derive(Debug, Clone, Default)]
pub struct Document {
    root: Element,
    mutations: Vec<Mutation>,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            mutations: Vec::new(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    /// Every write since creation or the last [`clear_mutations`](Self::clear_mutations).
    pub fn mutations(&self) -> &[Mutation] {
        &self.mutations
    }

    pub fn clear_mutations(&mut self) {
        self.mutations.clear();
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Element, DomError> {
        find_element_mut(&mut self.root, id).ok_or_else(|| DomError::NotFound(id.to_string()))
    }
}

impl Dom for Document {
    fn has_class(&self, id: &str, class: &str) -> bool {
        self.get(id).is_some_and(|el| el.has_class(class))
    }

    fn attribute(&self, id: &str, name: &str) -> Option<&str> {
        self.get(id)?.get_attr(name)
    }

    fn closest(&self, id: &str, class: &str) -> Option<String> {
        ancestry(&self.root, id)?
            .into_iter()
            .rev()
            .find(|el| el.has_class(class))
            .map(|el| el.id.clone())
    }

    fn query_selector(&self, scope: &str, class: &str) -> Option<String> {
        let scope = self.get(scope)?;
        let mut found = None;
        for child in scope.child_elements() {
            walk(child, &mut |el| {
                if found.is_none() && el.has_class(class) {
                    found = Some(el.id.clone());
                }
            });
            if found.is_some() {
                break;
            }
        }
        found
    }

    fn query_all(&self, class: &str) -> Vec<String> {
        let mut ids = Vec::new();
        walk(&self.root, &mut |el| {
            if el.has_class(class) {
                ids.push(el.id.clone());
            }
        });
        ids
    }

    fn text(&self, id: &str) -> Option<String> {
        self.get(id).map(Element::text_content)
    }

    fn set_text(&mut self, id: &str, text: &str) -> Result<(), DomError> {
        let el = self.get_mut(id)?;
        el.content = crate::Content::Text(text.to_string());
        trace!("set_text {id}: {text:?}");
        self.mutations.push(Mutation::SetText {
            id: id.to_string(),
            text: text.to_string(),
        });
        Ok(())
    }

    fn toggle_class(&mut self, id: &str, class: &str) -> Result<bool, DomError> {
        let present = self.get_mut(id)?.toggle_class(class);
        trace!("toggle_class {id}.{class} -> {present}");
        self.mutations.push(Mutation::ToggleClass {
            id: id.to_string(),
            class: class.to_string(),
            present,
        });
        Ok(present)
    }
}
