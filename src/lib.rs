//! Glimpse - a request-scoped diagnostic log console for HTML responses
//!
//! Log records emitted while one HTTP request is handled are gated by
//! severity, run through a processor chain, formatted and buffered in arrival
//! order. Just before an HTML response is sent, the buffered records are
//! rendered into a diagnostic console (log entries plus request parameter
//! dumps) and appended to the response body. Non-HTML responses and empty
//! buffers are left alone, and a render failure never breaks the response.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use glimpse::prelude::*;
//!
//! let handler = Arc::new(ConsoleHandler::new(Level::Debug));
//! let mut hooks = Hooks::new();
//! handler.bind(&mut hooks);
//!
//! let mut logger = Logger::new("app");
//! logger.push_handler(Arc::clone(&handler) as Arc<dyn Handler>);
//!
//! // Host pipeline, per request:
//! hooks.fire_before_handle(&request);
//! logger.info("handling request");
//! hooks.fire_before_send(&request, &mut response);
//! ```

pub mod assets;
pub mod buffer;
pub mod clock;
pub mod error;
pub mod escape;
pub mod formatter;
pub mod handler;
pub mod hooks;
pub mod http;
pub mod level;
pub mod logger;
pub mod prelude;
pub mod processors;
pub mod record;
pub mod render;
pub mod server;
