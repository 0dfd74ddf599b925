//! Live page widgets: a delegated show more / show less toggle and a
//! periodic live-time renderer, both running against a [`pagedom::Dom`].

pub mod clock;
pub mod config;
pub mod error;
pub mod format;
pub mod live_time;
pub mod markup;
pub mod mode;
pub mod page;
pub mod toggle;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{LiveTimeConfig, ToggleConfig};
pub use error::LiveUiError;
pub use format::{PatternFormatter, TimeFormatter};
pub use live_time::{LiveTimeRenderer, PassReport};
pub use mode::{DisplayMode, RelativeDay, UnknownMode, Uptime};
pub use page::{ListenerId, Page};
pub use toggle::{ToggleController, ToggleState};

pub mod prelude {
    pub use crate::clock::{Clock, FixedClock, SystemClock};
    pub use crate::config::{LiveTimeConfig, ToggleConfig};
    pub use crate::error::LiveUiError;
    pub use crate::format::{PatternFormatter, TimeFormatter};
    pub use crate::live_time::LiveTimeRenderer;
    pub use crate::mode::DisplayMode;
    pub use crate::page::Page;
    pub use crate::toggle::ToggleController;

    pub use pagedom::{Document, Dom, Element, Event};
}
