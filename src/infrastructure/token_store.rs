use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    sync::RwLock,
};

use secrecy::SecretString;

/// File name of the session store inside the data directory
pub const SESSION_FILE: &str = "session.json";

/// Read-only access to named authentication tokens.
///
/// Lookups happen at request time, so a token written after startup is picked
/// up by the next fetch.
pub trait TokenStore: Send + Sync {
    /// Returns `None` when the token is absent or the store is unreadable
    fn get(&self, name: &str) -> Option<SecretString>;
}

/// Tokens kept in a JSON object file, e.g. `{ "jwt_token": "..." }`
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_data_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(SESSION_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> color_eyre::Result<HashMap<String, String>> {
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self, name: &str) -> Option<SecretString> {
        if !self.path.exists() {
            log::debug!("Token store {} does not exist", self.path.display());
            return None;
        }

        match self.read() {
            Ok(mut tokens) => tokens
                .remove(name)
                .filter(|token| !token.is_empty())
                .map(SecretString::from),
            Err(e) => {
                log::warn!("Failed to read token store {}: {e}", self.path.display());
                None
            }
        }
    }
}

/// In-memory store, used by tests and for tokens passed on startup
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: RwLock<HashMap<String, String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&self, name: impl Into<String>, value: impl Into<String>) {
        if let Ok(mut tokens) = self.tokens.write() {
            tokens.insert(name.into(), value.into());
        }
    }

    pub fn remove(&self, name: &str) {
        if let Ok(mut tokens) = self.tokens.write() {
            tokens.remove(name);
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, name: &str) -> Option<SecretString> {
        self.tokens
            .read()
            .ok()
            .and_then(|tokens| tokens.get(name).cloned())
            .filter(|token| !token.is_empty())
            .map(SecretString::from)
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::Result;
    use pretty_assertions::assert_eq;
    use secrecy::ExposeSecret;

    use super::*;

    fn exposed(token: Option<SecretString>) -> Option<String> {
        token.map(|t| t.expose_secret().to_string())
    }

    #[test]
    fn test_file_store_reads_named_token() -> Result<()> {
        let dir = tempfile::tempdir()?;
        fs::write(
            dir.path().join(SESSION_FILE),
            r#"{ "jwt_token": "abc", "other": "xyz" }"#,
        )?;
        let store = FileTokenStore::in_data_dir(dir.path());

        assert_eq!(exposed(store.get("jwt_token")), Some("abc".to_string()));
        assert_eq!(exposed(store.get("missing")), None);
        Ok(())
    }

    #[test]
    fn test_file_store_missing_file_is_absent() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let store = FileTokenStore::in_data_dir(dir.path());
        assert!(store.get("jwt_token").is_none());
        Ok(())
    }

    #[test]
    fn test_file_store_malformed_file_is_absent() -> Result<()> {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join(SESSION_FILE), "jwt_token=abc")?;
        let store = FileTokenStore::in_data_dir(dir.path());
        assert!(store.get("jwt_token").is_none());
        Ok(())
    }

    #[test]
    fn test_file_store_sees_later_writes() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let store = FileTokenStore::in_data_dir(dir.path());
        assert!(store.get("jwt_token").is_none());

        fs::write(store.path(), r#"{ "jwt_token": "fresh" }"#)?;
        assert_eq!(exposed(store.get("jwt_token")), Some("fresh".to_string()));
        Ok(())
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryTokenStore::new().with_token("jwt_token", "abc");
        assert_eq!(exposed(store.get("jwt_token")), Some("abc".to_string()));

        store.set("jwt_token", "");
        assert!(store.get("jwt_token").is_none());

        store.set("jwt_token", "def");
        store.remove("jwt_token");
        assert!(store.get("jwt_token").is_none());
    }
}
