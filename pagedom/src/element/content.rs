#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<super::Element>),
}

impl Content {
    /// Append the text of this content and every descendant to `out`,
    /// in document order.
    pub fn collect_text(&self, out: &mut String) {
        match self {
            Self::None => {}
            Self::Text(s) => out.push_str(s),
            Self::Children(children) => {
                for child in children {
                    child.content.collect_text(out);
                }
            }
        }
    }
}
