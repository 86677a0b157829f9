use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Client-local identity of a form row.
///
/// Stable for the lifetime of the page and used for keying and event
/// binding only. It never appears in posted field names: those use the
/// row's position at serialization time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(String);

impl ClientId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of fresh client ids.
pub trait IdSource {
    fn next_id(&mut self) -> ClientId;
}

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&mut self) -> ClientId {
        ClientId::new(Uuid::new_v4().to_string())
    }
}

/// `{prefix}-1`, `{prefix}-2`, ... Deterministic, for tests and snapshots.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> ClientId {
        let id = ClientId::new(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}

const MAX_FRESH_ATTEMPTS: usize = 8;

/// Draws ids from `ids` until one is not taken.
///
/// After a few collisions the candidate is suffixed instead, so a source
/// that keeps repeating itself cannot stall the caller.
pub fn unique_id<I>(ids: &mut I, is_taken: impl Fn(&ClientId) -> bool) -> ClientId
where
    I: IdSource + ?Sized,
{
    let mut candidate = ids.next_id();
    let mut attempt = 1;
    while is_taken(&candidate) {
        log::debug!("client id {} already in use, regenerating", candidate);
        candidate = if attempt < MAX_FRESH_ATTEMPTS {
            ids.next_id()
        } else {
            ClientId::new(format!("{}-{}", candidate, attempt))
        };
        attempt += 1;
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Stuck;

    impl IdSource for Stuck {
        fn next_id(&mut self) -> ClientId {
            ClientId::new("same")
        }
    }

    #[test]
    fn test_sequential_ids() {
        let mut ids = SequentialIds::new("row");
        assert_eq!(ids.next_id().as_str(), "row-1");
        assert_eq!(ids.next_id().as_str(), "row-2");
    }

    #[test]
    fn test_unique_id_skips_taken() {
        let mut ids = SequentialIds::new("row");
        let taken = [ClientId::new("row-1"), ClientId::new("row-2")];
        let id = unique_id(&mut ids, |c| taken.contains(c));
        assert_eq!(id.as_str(), "row-3");
    }

    #[test]
    fn test_unique_id_terminates_on_repeating_source() {
        let id = unique_id(&mut Stuck, |c| c.as_str() == "same");
        assert_ne!(id.as_str(), "same");
        assert!(id.as_str().starts_with("same-"));
    }

    #[test]
    fn test_uuid_ids_differ() {
        let mut ids = UuidIds;
        assert_ne!(ids.next_id(), ids.next_id());
    }
}
