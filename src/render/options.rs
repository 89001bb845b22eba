//! Console options and the panel set.

use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::Serialize;

/// Default DOM selector the client widget mounts into.
pub const DEFAULT_SELECTOR: &str = "#glimpse-console";

/// Default animation speed for the client widget, in milliseconds.
pub const DEFAULT_SPEED: u32 = 200;

/// A named section of the rendered diagnostic console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Panel {
    /// Display label.
    pub label: String,
    /// Count of interesting items, shown next to the label.
    pub counter: usize,
    /// Pre-rendered HTML content.
    pub content: String,
}

impl Panel {
    /// Create a panel.
    pub fn new(label: impl Into<String>, counter: usize, content: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            counter,
            content: content.into(),
        }
    }
}

/// Insertion-ordered panel collection keyed by name.
///
/// Insertion is first-writer-wins: a panel already present under a name is
/// never replaced, so collaborators that pre-seed a panel before the render
/// fires suppress the built-in one.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct PanelSet {
    panels: IndexMap<String, Panel>,
}

impl PanelSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a panel exists under the given name.
    pub fn has(&self, name: &str) -> bool {
        self.panels.contains_key(name)
    }

    /// Insert a panel unless one already exists under the name.
    ///
    /// Returns `true` if the panel was inserted.
    pub fn insert(&mut self, name: impl Into<String>, panel: Panel) -> bool {
        match self.panels.entry(name.into()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(panel);
                true
            }
        }
    }

    /// Look up a panel by name.
    pub fn get(&self, name: &str) -> Option<&Panel> {
        self.panels.get(name)
    }

    /// Number of panels.
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Iterate panels in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Panel)> {
        self.panels.iter().map(|(name, panel)| (name.as_str(), panel))
    }
}

/// Configuration consumed by the client-side console widget.
///
/// Every field starts unset; configurators may populate any of them before
/// the renderer applies defaults, so a value set early wins over the default.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RenderOptions {
    selector: Option<String>,
    timer: Option<String>,
    panels: PanelSet,
    speed: Option<u32>,
}

impl RenderOptions {
    /// Create options with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// The DOM selector, if set.
    pub fn selector(&self) -> Option<&str> {
        self.selector.as_deref()
    }

    /// Set the DOM selector.
    pub fn set_selector(&mut self, selector: impl Into<String>) {
        self.selector = Some(selector.into());
    }

    /// The elapsed-time display value, if set.
    pub fn timer(&self) -> Option<&str> {
        self.timer.as_deref()
    }

    /// Set the elapsed-time display value.
    pub fn set_timer(&mut self, timer: impl Into<String>) {
        self.timer = Some(timer.into());
    }

    /// The animation speed, if set.
    pub fn speed(&self) -> Option<u32> {
        self.speed
    }

    /// Set the animation speed.
    pub fn set_speed(&mut self, speed: u32) {
        self.speed = Some(speed);
    }

    /// The panel set.
    pub fn panels(&self) -> &PanelSet {
        &self.panels
    }

    /// Mutable access to the panel set.
    pub fn panels_mut(&mut self) -> &mut PanelSet {
        &mut self.panels
    }
}
