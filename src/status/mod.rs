mod results;


pub use results::Results;

use crate::value::Value;
use serde::{Deserialize, Serialize};

/// Two-state outcome flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Bad = 0,
    #[default]
    Good = 1,
}

impl Status {
    /// `1` is Good, every other raw value is Bad
    pub fn from_raw(raw: i64) -> Self {
        if raw == Status::Good as i64 {
            Status::Good
        } else {
            Status::Bad
        }
    }
}

/// Accumulates a status, messages and results for explicit success/failure
/// reporting
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReturnHelper<T = Value> {
    status: Status,
    messages: Vec<String>,
    results: Vec<T>,
}

impl<T> ReturnHelper<T> {
    /// New helper with status Good and nothing recorded
    pub fn new() -> Self {
        Self {
            status: Status::Good,
            messages: Vec::new(),
            results: Vec::new(),
        }
    }

    pub fn is_good(&self) -> bool {
        self.status == Status::Good
    }

    pub fn is_bad(&self) -> bool {
        self.status == Status::Bad
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn make_good(&mut self) -> &mut Self {
        self.status = Status::Good;
        self
    }

    pub fn make_bad(&mut self) -> &mut Self {
        self.status = Status::Bad;
        self
    }

    /// Set the status from a raw integer (see [`Status::from_raw`])
    pub fn set_status(&mut self, raw: i64) -> &mut Self {
        self.status = Status::from_raw(raw);
        self
    }

    pub fn add_message(&mut self, message: impl Into<String>) -> &mut Self {
        self.messages.push(message.into());
        self
    }

    pub fn add_messages<M: Into<String>>(&mut self, messages: impl IntoIterator<Item = M>) -> &mut Self {
        self.messages.extend(messages.into_iter().map(Into::into));
        self
    }

    pub fn add_result(&mut self, result: T) -> &mut Self {
        self.results.push(result);
        self
    }

    pub fn add_results(&mut self, results: impl IntoIterator<Item = T>) -> &mut Self {
        self.results.extend(results);
        self
    }

    pub fn has_messages(&self) -> bool {
        !self.messages.is_empty()
    }

    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }

    /// Recorded messages in insertion order, `None` when there are none
    pub fn messages(&self) -> Option<&[String]> {
        if self.messages.is_empty() {
            None
        } else {
            Some(&self.messages)
        }
    }

    /// Recorded results, `None` when there are none. A single result comes
    /// back unwrapped as [`Results::Single`].
    pub fn results(&self) -> Option<Results<'_, T>> {
        match self.results.as_slice() {
            [] => None,
            [only] => Some(Results::Single(only)),
            many => Some(Results::Many(many)),
        }
    }
}

impl<T> Default for ReturnHelper<T> {
    fn default() -> Self {
        Self::new()
    }
}
