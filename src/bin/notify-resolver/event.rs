use serde::{Deserialize, Serialize};
use std::fmt;

/// Notification passed in by the AppSync resolver as `ctx.args`.
///
/// Keys missing from the payload decode as empty strings; unknown keys are
/// dropped.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, Default)]
#[serde(default)]
pub struct Event {
    pub from: String,
    pub to: String,
    pub message: String,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "From: {}, To: {}, Message: {}", self.from, self.to, self.message)
    }
}
