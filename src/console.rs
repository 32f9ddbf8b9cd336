use std::sync::{Mutex, PoisonError};

/// Host console method a logger writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Low-visibility diagnostic output (`console.debug`)
    Debug,
    /// Normal visible output (`console.log`)
    Log,
}

impl Channel {
    /// Production builds log quietly, everything else logs visibly
    #[must_use]
    pub const fn for_build(production: bool) -> Self {
        if production {
            Self::Debug
        } else {
            Self::Log
        }
    }
}

/// A console that accepts a variadic list of values per call
pub trait Console {
    type Value: for<'a> From<&'a str>;

    fn write(&self, channel: Channel, values: Vec<Self::Value>);
}

/// In-memory console that keeps every call it receives
#[derive(Debug, Default)]
pub struct Recorder {
    entries: Mutex<Vec<(Channel, Vec<serde_json::Value>)>>,
}

impl Recorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the calls recorded so far, oldest first
    #[must_use]
    pub fn entries(&self) -> Vec<(Channel, Vec<serde_json::Value>)> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Console for Recorder {
    type Value = serde_json::Value;

    fn write(&self, channel: Channel, values: Vec<Self::Value>) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((channel, values));
    }
}
