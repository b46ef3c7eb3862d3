//! Messages flowing through the debug pipeline.

use serde::Serialize;
use serde_json::Value;
use std::borrow::Cow;

/// A debug message. The pipeline carries `Option<DebugMessage>`; `None` is the absent message.
#[derive(Debug, Clone, PartialEq)]
pub enum DebugMessage {
    /// Plain text line.
    General { text: String },
    /// Request to persist `state_data` as `<state_name>_state.json`. Holds the serialization
    /// error instead when the payload could not be converted; the state-save processor reports it.
    StateSave {
        state_name: String,
        state_data: Result<Value, String>,
    },
}

impl DebugMessage {
    pub fn general(text: impl Into<String>) -> Self {
        DebugMessage::General { text: text.into() }
    }

    /// Builds a state-save message from any serializable payload. A payload that fails to
    /// serialize still enters the pipeline; only the file write is skipped.
    pub fn state_save<T: Serialize + ?Sized>(
        state_name: impl Into<String>,
        state_data: &T,
    ) -> Self {
        DebugMessage::StateSave {
            state_name: state_name.into(),
            state_data: serde_json::to_value(state_data).map_err(|e| e.to_string()),
        }
    }

    pub fn state_save_value(state_name: impl Into<String>, state_data: Value) -> Self {
        DebugMessage::StateSave {
            state_name: state_name.into(),
            state_data: Ok(state_data),
        }
    }

    /// Text written by the console and file processors.
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            DebugMessage::General { text } => Cow::Borrowed(text),
            DebugMessage::StateSave { state_name, .. } => {
                Cow::Owned(format!("Save State: {}", state_name))
            }
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            DebugMessage::General { .. } => "General",
            DebugMessage::StateSave { .. } => "StateSave",
        }
    }
}
