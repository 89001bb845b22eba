//! Prelude module for convenient imports.
//!
//! ```ignore
//! use glimpse::prelude::*;
//! ```

pub use crate::buffer::RecordBuffer;
pub use crate::clock::{RequestClock, REQUEST_TIME_FLOAT};
pub use crate::error::RenderError;
pub use crate::formatter::{Formatter, LineFormatter};
pub use crate::handler::ConsoleHandler;
pub use crate::hooks::Hooks;
pub use crate::http::{Params, Request, Response};
pub use crate::level::Level;
pub use crate::logger::{Handler, Logger};
pub use crate::processors::ProcessorChain;
pub use crate::record::{Context, Record};
pub use crate::render::{ConsoleRenderer, Panel, PanelSet, RenderOptions, RenderState};
