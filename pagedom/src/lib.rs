pub mod document;
pub mod dom;
pub mod element;
pub mod error;
pub mod event;

pub use document::{Document, Mutation};
pub use dom::Dom;
pub use element::{ancestry, find_element, find_element_mut, walk, Content, Element};
pub use error::DomError;
pub use event::{Event, MouseButton};
