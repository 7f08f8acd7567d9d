use thiserror::Error;

/// Raised before any network call when request parameters break a domain
/// rule. Carries one message per violated field; every applicable rule is
/// evaluated, so a single error can report several violations at once.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid request parameters: {}", .messages.join("; "))]
pub struct ValidationError {
    messages: Vec<String>,
}

impl ValidationError {
    pub fn new(messages: Vec<String>) -> Self {
        Self { messages }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}
