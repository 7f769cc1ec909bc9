use serde::{Deserialize, Serialize};

/// Metadata block at the top of a log file.
///
/// Every field is optional on read: a log written by hand, or by an older
/// client, may carry any subset of them.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrontMatter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl FrontMatter {
    pub fn new(role: impl Into<String>, model: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            role: Some(role.into()),
            model: Some(model.into()),
            timestamp: Some(timestamp.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.role.is_none() && self.model.is_none() && self.timestamp.is_none()
    }
}
