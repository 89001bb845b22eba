//! Diagnostic console rendering.
//!
//! The renderer turns a populated record buffer plus request metadata into an
//! HTML fragment: an extensible panel-building stage followed by fragment
//! assembly. One renderer instance serves exactly one request/response pair;
//! its state machine is `Idle → PanelsBuilding → Assembling → Done`, entered
//! only on the "before send" trigger and terminal at `Done`.

mod options;
mod panels;

pub use options::{Panel, PanelSet, RenderOptions, DEFAULT_SELECTOR, DEFAULT_SPEED};

use chrono::{DateTime, Utc};

use crate::buffer::RecordBuffer;
use crate::error::RenderError;
use crate::escape;
use crate::http::{Request, Response};

/// A callback that pre-populates render options before defaults are applied.
pub type Configurator =
    Box<dyn Fn(&Request, &mut RenderOptions) -> Result<(), RenderError> + Send + Sync>;

/// Render cycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    /// Nothing rendered yet; the gate has not passed.
    Idle,
    /// Configurators are running and panels are being synthesized.
    PanelsBuilding,
    /// Options are being serialized and the fragment assembled.
    Assembling,
    /// Terminal: a render cycle ran (or failed) and will not re-enter.
    Done,
}

/// Renders the diagnostic console fragment for one request.
pub struct ConsoleRenderer {
    configurators: Vec<Configurator>,
    state: RenderState,
}

impl ConsoleRenderer {
    /// Create an idle renderer with no configurators.
    pub fn new() -> Self {
        Self {
            configurators: Vec::new(),
            state: RenderState::Idle,
        }
    }

    /// Current render state.
    pub fn state(&self) -> RenderState {
        self.state
    }

    /// Register a configurator, run in registration order before defaults
    /// are applied. Configurators may set any option field and seed extra
    /// panels; a panel name they claim is kept over the built-in one.
    pub fn push_configurator(
        &mut self,
        configurator: impl Fn(&Request, &mut RenderOptions) -> Result<(), RenderError>
            + Send
            + Sync
            + 'static,
    ) {
        self.configurators.push(Box::new(configurator));
    }

    /// Run one render cycle.
    ///
    /// Returns `Ok(None)` without side effects when the gate does not pass
    /// (empty buffer or non-HTML response) or when a cycle already completed
    /// for this renderer. A failure in states 2–3 also ends the cycle: the
    /// caller suppresses the error and no retry happens.
    pub fn render(
        &mut self,
        request: &Request,
        response: &Response,
        records: &RecordBuffer,
        request_start: DateTime<Utc>,
    ) -> Result<Option<String>, RenderError> {
        if self.state == RenderState::Done {
            return Ok(None);
        }
        if !records.populated() || !response.is_html() {
            return Ok(None);
        }

        self.state = RenderState::PanelsBuilding;
        let result = self.build_and_assemble(request, records, request_start);
        self.state = RenderState::Done;
        result.map(Some)
    }

    fn build_and_assemble(
        &mut self,
        request: &Request,
        records: &RecordBuffer,
        request_start: DateTime<Utc>,
    ) -> Result<String, RenderError> {
        let mut options = RenderOptions::new();

        for configurator in &self.configurators {
            configurator(request, &mut options)?;
        }

        if options.selector().is_none() {
            options.set_selector(DEFAULT_SELECTOR);
        }
        if options.timer().is_none() {
            options.set_timer(panels::elapsed_seconds(request_start, Utc::now()));
        }
        if options.speed().is_none() {
            options.set_speed(DEFAULT_SPEED);
        }

        if !options.panels().has("log") {
            options
                .panels_mut()
                .insert("log", panels::log_panel(records, request_start));
        }
        if !options.panels().has("request") {
            options
                .panels_mut()
                .insert("request", panels::request_panel(request));
        }

        self.state = RenderState::Assembling;
        self.assemble(&options)
    }

    fn assemble(&self, options: &RenderOptions) -> Result<String, RenderError> {
        // Keep a literal `</script>` inside panel content from closing the
        // inline block early.
        let payload = serde_json::to_string(options)?.replace("</", "<\\/");

        let selector = options.selector().unwrap_or(DEFAULT_SELECTOR);
        let container = escape::attr(selector.trim_start_matches('#'));

        Ok(format!(
            "\n<link rel=\"stylesheet\" href=\"/css/glimpse.css\">\n\
             <script src=\"//code.jquery.com/jquery-2.1.0.min.js\"></script>\n\
             <script src=\"/js/glimpse.js\"></script>\n\
             <script>\n\
             jQuery(function () {{\n    new glimpse.Console(jQuery, {payload});\n}});\n\
             </script>\n\
             <div id=\"{container}\"></div>\n"
        ))
    }
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ConsoleRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleRenderer")
            .field("configurators", &self.configurators.len())
            .field("state", &self.state)
            .finish()
    }
}
