//! Collector for recovered anomalies.

/// Warnings in the order they were raised.
///
/// Every warning is also emitted through `log::warn!`.
#[derive(Debug, Default)]
pub(crate) struct Warnings {
    messages: Vec<String>,
}

impl Warnings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::warn!("{}", message);
        self.messages.push(message);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.messages
    }
}
