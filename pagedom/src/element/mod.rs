mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.child_elements() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Chain of elements from `root` down to the element with `id`, inclusive.
/// Returns None if no element has that id.
pub fn ancestry<'a>(root: &'a Element, id: &str) -> Option<Vec<&'a Element>> {
    let mut path = Vec::new();
    if push_ancestry(root, id, &mut path) {
        Some(path)
    } else {
        None
    }
}

fn push_ancestry<'a>(element: &'a Element, id: &str, path: &mut Vec<&'a Element>) -> bool {
    path.push(element);
    if element.id == id {
        return true;
    }

    for child in element.child_elements() {
        if push_ancestry(child, id, path) {
            return true;
        }
    }

    path.pop();
    false
}

/// Visit `element` and all its descendants in document order.
pub fn walk<'a>(element: &'a Element, visit: &mut impl FnMut(&'a Element)) {
    visit(element);
    for child in element.child_elements() {
        walk(child, visit);
    }
}
