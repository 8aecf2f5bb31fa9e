use crate::error::{self, Error, Result};
use crate::export::Exportable;
use crate::record::{Record, RecordId};
use crate::table::{Column, Tabular};
use chrono::Local;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Prefix of every generated live key.
pub const API_KEY_PREFIX: &str = "sk_live_";

const KEY_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const KEY_SUFFIX_LEN: usize = 9;

/// A secret key for the public API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKey {
    /// Record id.
    pub id: RecordId,
    /// The secret, `sk_live_` followed by nine base-36 characters.
    pub key: String,
    /// Creation date, `YYYY-MM-DD`.
    pub created: String,
}

/// Partial update of an [`ApiKey`].
#[derive(Debug, Clone, Default)]
pub struct ApiKeyPatch {
    /// Replacement secret.
    pub key: Option<String>,
}

impl ApiKey {
    /// Creates a key without an id.
    pub fn new(key: &str, created: &str) -> Self {
        Self {
            id: RecordId::UNASSIGNED,
            key: key.to_string(),
            created: created.to_string(),
        }
    }

    /// Issues a fresh random key dated today.
    pub fn generate<G: Rng + ?Sized>(rng: &mut G) -> Self {
        let suffix: String = (0..KEY_SUFFIX_LEN)
            .map(|_| char::from(KEY_ALPHABET[rng.random_range(0..KEY_ALPHABET.len())]))
            .collect();
        let created = Local::now().format("%Y-%m-%d").to_string();
        Self::new(&format!("{API_KEY_PREFIX}{suffix}"), &created)
    }

    /// The key with everything past the prefix and first four characters
    /// hidden.
    pub fn masked(&self) -> String {
        let visible: String = self.key.chars().take(API_KEY_PREFIX.len() + 4).collect();
        let hidden = self.key.chars().count().saturating_sub(visible.chars().count());
        format!("{visible}{}", "•".repeat(hidden))
    }
}

impl Record for ApiKey {
    type Patch = ApiKeyPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.key.as_str()]
    }

    fn apply_patch(&mut self, patch: ApiKeyPatch) {
        if let Some(key) = patch.key {
            self.key = key;
        }
    }

    fn validate(&self) -> Result<()> {
        error::require("key", &self.key)?;
        if !self.key.starts_with("sk_") {
            return Err(Error::invalid("key", "must start with sk_"));
        }
        Ok(())
    }
}

impl Exportable for ApiKey {
    const FIELDS: &'static [&'static str] = &["id", "key", "created"];
}

impl Tabular for ApiKey {
    fn columns() -> Vec<Column> {
        vec![Column::new("Key"), Column::new("Created").with_width(10)]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.masked(), self.created.clone()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::ListController;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_keys() {
        let mut rng = StdRng::seed_from_u64(3);
        let first = ApiKey::generate(&mut rng);
        let second = ApiKey::generate(&mut rng);

        assert!(first.key.starts_with(API_KEY_PREFIX));
        assert_eq!(first.key.len(), API_KEY_PREFIX.len() + KEY_SUFFIX_LEN);
        assert!(first.key[API_KEY_PREFIX.len()..]
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
        assert_ne!(first.key, second.key);
        assert_eq!(first.created.len(), 10);
        assert!(first.validate().is_ok());
    }

    #[test]
    fn test_issue_and_revoke() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut keys = ListController::new(vec![ApiKey::new("sk_live_123456789", "2025-07-01")]);
        let issued = keys.try_add(ApiKey::generate(&mut rng)).unwrap();
        assert_eq!(keys.len(), 2);

        keys.set_search_term("sk_live_123456789");
        assert_eq!(keys.filtered_count(), 1);

        assert!(keys.remove(issued).is_some());
        assert_eq!(keys.len(), 1);
    }

    #[test]
    fn test_masked() {
        let key = ApiKey::new("sk_live_123456789", "2025-07-01");
        assert_eq!(key.masked(), "sk_live_1234•••••");
        assert_eq!(key.cells()[0], key.masked());
        assert!(ApiKey::new("pk_123", "2025-07-01").validate().is_err());
    }
}
