//! The console log handler and its lifecycle binding.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::buffer::RecordBuffer;
use crate::clock::{RequestClock, REQUEST_TIME_FLOAT};
use crate::error::RenderError;
use crate::formatter::{Formatter, LineFormatter};
use crate::hooks::Hooks;
use crate::http::{Request, Response};
use crate::level::Level;
use crate::logger::Handler;
use crate::processors::ProcessorChain;
use crate::record::Record;
use crate::render::{ConsoleRenderer, RenderOptions};

/// Buffers qualifying log records for one request and injects the rendered
/// diagnostic console into the outgoing HTML response.
///
/// One handler instance is scoped to exactly one in-flight request. The host
/// enables the console by constructing a handler, pushing it onto the
/// request's logger, and binding it to the request pipeline with
/// [`bind`](ConsoleHandler::bind). Interior state is behind mutexes so the
/// same `Arc<ConsoleHandler>` can serve both roles; there is still a single
/// logical writer per request.
pub struct ConsoleHandler {
    level: Level,
    bubble: bool,
    formatter: Box<dyn Formatter>,
    clock: Mutex<RequestClock>,
    records: Mutex<RecordBuffer>,
    processors: Mutex<ProcessorChain>,
    renderer: Mutex<ConsoleRenderer>,
}

impl ConsoleHandler {
    /// Create a handler accepting records at or above `level`, with
    /// bubbling enabled and the default line formatter.
    pub fn new(level: Level) -> Self {
        Self {
            level,
            bubble: true,
            formatter: Box::new(LineFormatter::new()),
            clock: Mutex::new(RequestClock::new()),
            records: Mutex::new(RecordBuffer::new()),
            processors: Mutex::new(ProcessorChain::new()),
            renderer: Mutex::new(ConsoleRenderer::new()),
        }
    }

    /// Set the bubble flag. When `false` this handler is terminal for every
    /// record it handles.
    pub fn with_bubble(mut self, bubble: bool) -> Self {
        self.bubble = bubble;
        self
    }

    /// Replace the formatter.
    pub fn with_formatter(mut self, formatter: impl Formatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Replace the request clock, e.g. with a fixed start instant in tests.
    pub fn with_clock(self, clock: RequestClock) -> Self {
        *self.clock.lock() = clock;
        self
    }

    /// Supply an externally created record buffer.
    pub fn with_records(self, records: RecordBuffer) -> Self {
        *self.records.lock() = records;
        self
    }

    /// The configured minimum level.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Whether records bubble on to lower-priority handlers.
    pub fn bubble(&self) -> bool {
        self.bubble
    }

    /// Number of buffered records.
    pub fn record_count(&self) -> usize {
        self.records.lock().count()
    }

    /// Append a processor to the chain.
    pub fn push_processor(
        &self,
        processor: impl Fn(Record) -> Record + Send + Sync + 'static,
    ) {
        self.processors.lock().push(processor);
    }

    /// Remove and return the most recently pushed processor.
    pub fn pop_processor(&self) -> Option<crate::processors::Processor> {
        self.processors.lock().pop()
    }

    /// Register a render-options configurator.
    pub fn push_configurator(
        &self,
        configurator: impl Fn(&Request, &mut RenderOptions) -> Result<(), RenderError>
            + Send
            + Sync
            + 'static,
    ) {
        self.renderer.lock().push_configurator(configurator);
    }

    /// Bind this handler to the request pipeline's lifecycle hooks.
    pub fn bind(self: &Arc<Self>, hooks: &mut Hooks) {
        let handler = Arc::clone(self);
        hooks.before_handle(move |request| handler.on_before_handle(request));

        let handler = Arc::clone(self);
        hooks.before_send(move |request, response| handler.on_before_send(request, response));
    }

    /// "Before handle" callback: pin the request-start instant.
    pub fn on_before_handle(&self, request: &Request) {
        self.clock
            .lock()
            .resolve(request.server_param(REQUEST_TIME_FLOAT));
    }

    /// "Before send" callback: render the console and append it to the
    /// response. Failures are suppressed; the response is sent as-is.
    pub fn on_before_send(&self, request: &Request, response: &mut Response) {
        if !self.records.lock().populated() {
            return;
        }
        if !response.is_html() {
            return;
        }

        let result = {
            let records = self.records.lock();
            let request_start = self.clock.lock().request_start();
            self.renderer
                .lock()
                .render(request, response, &records, request_start)
        };

        match result {
            Ok(Some(fragment)) => response.append_body(&fragment),
            Ok(None) => {}
            Err(err) => {
                tracing::debug!(error = %err, "console render failed, response left unmodified");
            }
        }
    }
}

impl Handler for ConsoleHandler {
    fn is_handling(&self, record: &Record) -> bool {
        record.level >= self.level
    }

    fn handle(&self, record: Record) -> bool {
        if !self.is_handling(&record) {
            return false;
        }

        let mut record = self.processors.lock().apply(record);
        record.formatted = Some(self.formatter.format(&record));
        self.records.lock().append(record);

        !self.bubble
    }
}

impl std::fmt::Debug for ConsoleHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleHandler")
            .field("level", &self.level)
            .field("bubble", &self.bubble)
            .field("records", &self.records.lock().count())
            .finish()
    }
}
