use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a server-side picker session
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate an id with 48 bits of entropy (12 hex chars)
    pub fn generate() -> Self {
        use rand::Rng;
        let high = rand::thread_rng().gen::<u32>();
        let low = rand::thread_rng().gen::<u16>();
        Self(format!("{high:08X}{low:04X}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
