//! Assignment entity model

use serde::{Deserialize, Serialize};

/// Maps one district (`kreis`) to the organization (`org`) covering it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// District code, matches `District::ars` exactly
    pub kreis: String,
    /// Organization identifier
    pub org: String,
}

impl Assignment {
    #[must_use]
    pub fn new(kreis: impl Into<String>, org: impl Into<String>) -> Self {
        Self {
            kreis: kreis.into(),
            org: org.into(),
        }
    }

    /// Two-character state prefix of the district code (Länderschlüssel)
    #[must_use]
    pub fn state_code(&self) -> String {
        self.kreis.chars().take(2).collect()
    }
}
