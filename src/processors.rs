//! Record processor chain.

use crate::record::Record;

/// A record-transforming callback.
pub type Processor = Box<dyn Fn(Record) -> Record + Send + Sync>;

/// Ordered list of processors applied to every record before buffering.
///
/// Application order is registration order (FIFO); chain editing is LIFO:
/// `pop` removes the most recently pushed processor. Processors may enrich or
/// rewrite a record's message and context but cannot suppress the formatting
/// step, which the handler runs unconditionally after the chain.
#[derive(Default)]
pub struct ProcessorChain {
    processors: Vec<Processor>,
}

impl ProcessorChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a processor to the end of the chain.
    pub fn push(&mut self, processor: impl Fn(Record) -> Record + Send + Sync + 'static) {
        self.processors.push(Box::new(processor));
    }

    /// Remove and return the most recently pushed processor.
    pub fn pop(&mut self) -> Option<Processor> {
        self.processors.pop()
    }

    /// Number of registered processors.
    pub fn len(&self) -> usize {
        self.processors.len()
    }

    /// Whether the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    /// Run the record through every processor in registration order.
    pub fn apply(&self, record: Record) -> Record {
        self.processors
            .iter()
            .fold(record, |record, processor| processor(record))
    }
}

impl std::fmt::Debug for ProcessorChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessorChain")
            .field("len", &self.processors.len())
            .finish()
    }
}
