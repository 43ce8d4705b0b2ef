//! Caller-supplied request labels

use serde::{Deserialize, Serialize};
use std::fmt;

/// Account tier label. Any value is accepted; known tiers only steer phrasing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tier(String);

/// Request severity label. Any value is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Severity(String);

impl Tier {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Upper-cased form used inside prompts, otherwise verbatim
    pub fn label(&self) -> String {
        self.0.to_uppercase()
    }

    /// Premium and Enterprise users get more detailed answers
    pub fn wants_detail(&self) -> bool {
        matches!(self.0.trim().to_uppercase().as_str(), "PREMIUM" | "ENTERPRISE")
    }
}

impl Severity {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Upper-cased form used inside prompts, otherwise verbatim
    pub fn label(&self) -> String {
        self.0.to_uppercase()
    }

    /// High and Critical requests get direct, action-first answers
    pub fn is_urgent(&self) -> bool {
        matches!(self.0.trim().to_uppercase().as_str(), "HIGH" | "CRITICAL")
    }
}

impl Default for Tier {
    fn default() -> Self {
        Self::new("free")
    }
}

impl Default for Severity {
    fn default() -> Self {
        Self::new("low")
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Per-request context steering the system prompt
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    pub tier: Tier,
    pub severity: Severity,
}

impl RequestContext {
    pub fn new(tier: impl Into<String>, severity: impl Into<String>) -> Self {
        Self {
            tier: Tier::new(tier),
            severity: Severity::new(severity),
        }
    }
}
