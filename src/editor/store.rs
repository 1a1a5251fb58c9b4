//! Token persistence boundary
//!
//! The editor reads one token at startup and writes one back after
//! every mutation. Where the token lives (a URL fragment, a file, a
//! clipboard) is the host's business.

/// Storage slot for the share token
pub trait TokenStore {
    /// Read the current token, if any
    fn load(&self) -> Option<String>;

    /// Replace the stored token
    fn store(&mut self, token: &str);
}

/// In-memory store for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Option<String>,
}

impl MemoryTokenStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with a token
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Some(token.to_string()),
        }
    }

    /// Current token contents
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.clone()
    }

    fn store(&mut self, token: &str) {
        self.token = Some(token.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryTokenStore::new();
        assert_eq!(store.load(), None);

        store.store("A/Qh");
        assert_eq!(store.load().as_deref(), Some("A/Qh"));
        assert_eq!(store.token(), Some("A/Qh"));
    }
}
