/// Events delivered to a document by its host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Mouse click. `target` is the innermost element under the pointer,
    /// or `None` when the click landed outside every element.
    Click {
        target: Option<String>,
        button: MouseButton,
    },
}

impl Event {
    /// Left click on the element with the given id.
    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: Some(target.into()),
            button: MouseButton::Left,
        }
    }

    /// The element the event is aimed at, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Click { target, .. } => target.as_deref(),
        }
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}
