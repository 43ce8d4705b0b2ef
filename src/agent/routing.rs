//! Decides whether a query should be grounded with a web search

/// Routing decision for a single query
pub trait SearchRouter: Send + Sync {
    fn needs_search(&self, query: &str) -> bool;
}

/// Substring heuristic: search when the query asks "what is" or "who is"
#[derive(Debug, Clone)]
pub struct KeywordRouter {
    triggers: Vec<String>,
}

impl KeywordRouter {
    /// Trigger phrases used by default
    pub const DEFAULT_TRIGGERS: [&'static str; 2] = ["what is", "who is"];

    pub fn new() -> Self {
        Self::with_triggers(Self::DEFAULT_TRIGGERS)
    }

    /// Build a router from custom trigger phrases (matched lower-cased)
    pub fn with_triggers<I, S>(triggers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            triggers: triggers
                .into_iter()
                .map(|t| t.into().to_lowercase())
                .collect(),
        }
    }
}

impl Default for KeywordRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchRouter for KeywordRouter {
    fn needs_search(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.triggers.iter().any(|t| query.contains(t.as_str()))
    }
}

/// Never searches
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSearch;

impl SearchRouter for NoSearch {
    fn needs_search(&self, _query: &str) -> bool {
        false
    }
}
