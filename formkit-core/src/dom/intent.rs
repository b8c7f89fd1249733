//! Intents.
//!
//! An intent asks the host's submit pipeline to do something other than a
//! full submit. It travels as the value of a submitter named [`INTENT`],
//! encoded as JSON: `{"type":"validate","payload":"email"}`.

use serde::{Deserialize, Serialize};

use super::event::Submitter;

/// Name of the submitter carrying an intent.
pub const INTENT: &str = "__intent__";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "lowercase")]
pub enum Intent {
    /// Validate the named field only.
    Validate(String),
}

impl Intent {
    pub fn validate(name: impl Into<String>) -> Self {
        Self::Validate(name.into())
    }

    /// Encode for the host's hidden control.
    pub fn encode(&self) -> String {
        match serde_json::to_string(self) {
            Ok(value) => value,
            Err(err) => {
                tracing::error!(%err, "failed to encode intent");
                String::new()
            }
        }
    }

    /// Decode a value produced by [`Intent::encode`].
    pub fn parse(value: &str) -> Option<Self> {
        serde_json::from_str(value).ok()
    }

    /// The intent carried by a submitter, if it is the intent control.
    pub fn from_submitter(submitter: &Submitter) -> Option<Self> {
        if submitter.name.as_deref() != Some(INTENT) {
            return None;
        }

        submitter.value.as_deref().and_then(Self::parse)
    }

    /// The submitter a host should synthesize for this intent.
    pub fn submitter(&self) -> Submitter {
        Submitter {
            form_no_validate: true,
            ..Submitter::button(INTENT, self.encode())
        }
    }
}
