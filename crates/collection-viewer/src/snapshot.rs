//! Snapshot Codec
//!
//! JSON envelope for a persisted collection. The envelope carries the
//! seed version the items were written under so content releases can
//! re-seed deliberately instead of comparing values.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Version assigned to bare-array snapshots written by older page builds
pub const LEGACY_SNAPSHOT_VERSION: u32 = 0;

/// A decoded snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot<T> {
    pub version: u32,
    pub items: Vec<T>,
}

#[derive(Serialize)]
struct SnapshotRef<'a, T> {
    version: u32,
    items: &'a [T],
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredSnapshot<T> {
    Envelope(Snapshot<T>),
    Legacy(Vec<T>),
}

/// Serialize `items` under `version`
pub fn encode<T: Serialize>(version: u32, items: &[T]) -> serde_json::Result<String> {
    serde_json::to_string(&SnapshotRef { version, items })
}

/// Parse a stored snapshot, accepting both the envelope and a bare array
pub fn decode<T: DeserializeOwned>(raw: &str) -> serde_json::Result<Snapshot<T>> {
    match serde_json::from_str::<StoredSnapshot<T>>(raw)? {
        StoredSnapshot::Envelope(snapshot) => Ok(snapshot),
        StoredSnapshot::Legacy(items) => Ok(Snapshot {
            version: LEGACY_SNAPSHOT_VERSION,
            items,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Item;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Track {
        url: String,
        title: String,
    }

    fn track(id: u32, title: &str) -> Item<Track> {
        Item::new(
            id,
            Track {
                url: format!("assets/music/{}.mp3", id),
                title: title.to_string(),
            },
        )
    }

    #[test]
    fn test_envelope_keeps_version() {
        let items = vec![track(1, "Chase"), track(2, "Bubbles")];
        let raw = encode(3, &items).unwrap();

        let snapshot: Snapshot<Item<Track>> = decode(&raw).unwrap();
        assert_eq!(snapshot.version, 3);
        assert_eq!(snapshot.items, items);
    }

    #[test]
    fn test_bare_array_is_legacy() {
        let raw = r#"[{"id":1,"url":"a.mp3","title":"Chase"}]"#;
        let snapshot: Snapshot<Item<Track>> = decode(raw).unwrap();

        assert_eq!(snapshot.version, LEGACY_SNAPSHOT_VERSION);
        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.items[0].payload.title, "Chase");
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(decode::<Item<Track>>("not json").is_err());
        assert!(decode::<Item<Track>>("").is_err());
        assert!(decode::<Item<Track>>(r#"{"version":1}"#).is_err());
        assert!(decode::<Item<Track>>(r#"[{"id":"x"}]"#).is_err());
    }
}
