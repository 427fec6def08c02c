use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::error::TenderError;
use crate::model::Tender;

/// Canonical collection of tenders, persisted as one JSON snapshot.
///
/// Every `put` rewrites the whole snapshot. There is no locking: two
/// processes writing the same snapshot lose updates (last writer wins).
#[derive(Debug)]
pub struct TenderStore {
    path: PathBuf,
    snapshot: Snapshot,
}

/// Id → tender mapping that remembers insertion order.
#[derive(Debug, Default, Clone, PartialEq)]
struct Snapshot {
    tenders: Vec<Tender>,
    index: HashMap<Uuid, usize>,
}

impl Snapshot {
    fn insert(&mut self, tender: Tender) {
        match self.index.get(&tender.id) {
            Some(&pos) => self.tenders[pos] = tender,
            None => {
                self.index.insert(tender.id, self.tenders.len());
                self.tenders.push(tender);
            }
        }
    }

    fn get(&self, id: &Uuid) -> Option<&Tender> {
        self.index.get(id).map(|&pos| &self.tenders[pos])
    }
}

impl Serialize for Snapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.tenders.len()))?;
        for tender in &self.tenders {
            map.serialize_entry(&tender.id, tender)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Snapshot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SnapshotVisitor;

        impl<'de> Visitor<'de> for SnapshotVisitor {
            type Value = Snapshot;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of tender id to tender")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Snapshot, A::Error> {
                let mut snapshot = Snapshot::default();
                while let Some((key, tender)) = access.next_entry::<Uuid, Tender>()? {
                    if key != tender.id {
                        return Err(serde::de::Error::custom(format!(
                            "key {key} does not match tender id {}",
                            tender.id
                        )));
                    }
                    snapshot.insert(tender);
                }
                Ok(snapshot)
            }
        }

        deserializer.deserialize_map(SnapshotVisitor)
    }
}

impl TenderStore {
    /// Load the snapshot at `path`.
    ///
    /// A missing file starts an empty store; an unreadable or malformed one is
    /// a `SnapshotCorrupt` error.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, TenderError> {
        let path = path.into();

        let snapshot = match fs::read(&path) {
            Ok(bytes) => {
                serde_json::from_slice(&bytes).map_err(|e| TenderError::SnapshotCorrupt {
                    path: path.clone(),
                    reason: e.to_string(),
                })?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "no tender snapshot yet, starting empty");
                Snapshot::default()
            }
            Err(e) => {
                return Err(TenderError::SnapshotCorrupt {
                    path,
                    reason: e.to_string(),
                })
            }
        };

        tracing::debug!(path = %path.display(), count = snapshot.tenders.len(), "tender snapshot loaded");
        Ok(TenderStore { path, snapshot })
    }

    /// Insert or overwrite `tender` and write the full snapshot.
    ///
    /// The in-memory mapping only changes once the write has succeeded.
    pub fn put(&mut self, tender: Tender) -> Result<(), TenderError> {
        tracing::info!(id = %tender.id, filename = %tender.filename, "storing tender");
        let mut candidate = self.snapshot.clone();
        candidate.insert(tender);
        self.save(&candidate)?;
        self.snapshot = candidate;
        Ok(())
    }

    pub fn get(&self, id: &Uuid) -> Option<&Tender> {
        self.snapshot.get(id)
    }

    /// All tenders, newest first. Equal timestamps keep insertion order.
    pub fn list(&self) -> Vec<&Tender> {
        let mut tenders: Vec<&Tender> = self.snapshot.tenders.iter().collect();
        tenders.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
        tenders
    }

    pub fn len(&self) -> usize {
        self.snapshot.tenders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.tenders.is_empty()
    }

    /// Write `snapshot` through a temp file in the same directory.
    fn save(&self, snapshot: &Snapshot) -> Result<(), TenderError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let json = serde_json::to_vec_pretty(snapshot)?;
        let mut tmpfile = tempfile::NamedTempFile::new_in(&dir)?;
        tmpfile.write_all(&json)?;
        tmpfile.persist(&self.path).map_err(|e| e.error)?;

        tracing::debug!(path = %self.path.display(), count = snapshot.tenders.len(), "tender snapshot saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn tender(name: &str, ts: i64) -> Tender {
        Tender {
            id: Uuid::new_v4(),
            filename: name.to_string(),
            stored_path: PathBuf::from(format!("uploads/{name}")),
            full_text: "EMD Rs 100".into(),
            table_rows: vec![vec!["a".into(), String::new()]],
            summary: "EMD Rs 100".into(),
            deposit_amount: "Rs 100".into(),
            due_date: String::new(),
            eligibility_excerpt: "EMD Rs 100".into(),
            uploaded_at: Utc.timestamp_opt(ts, 0).unwrap(),
        }
    }

    #[test]
    fn test_missing_snapshot_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = TenderStore::load(dir.path().join("tenders.json")).unwrap();
        assert!(store.is_empty());
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_corrupt_snapshot_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tenders.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            TenderStore::load(&path).unwrap_err(),
            TenderError::SnapshotCorrupt { .. }
        ));
    }

    #[test]
    fn test_put_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = TenderStore::load(dir.path().join("tenders.json")).unwrap();
        let t = tender("a.pdf", 100);
        store.put(t.clone()).unwrap();
        assert_eq!(store.get(&t.id), Some(&t));
        assert_eq!(store.get(&Uuid::new_v4()), None);
    }

    #[test]
    fn test_put_overwrites_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = TenderStore::load(dir.path().join("tenders.json")).unwrap();
        let mut t = tender("a.pdf", 100);
        store.put(t.clone()).unwrap();
        t.summary = "changed".into();
        store.put(t.clone()).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&t.id).unwrap().summary, "changed");
    }

    #[test]
    fn test_failed_write_leaves_store_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        let mut store = TenderStore::load(blocker.join("tenders.json")).unwrap();
        let kept = tender("kept.pdf", 100);
        store.put(kept.clone()).unwrap();

        // A regular file where the snapshot directory should be
        fs::remove_dir_all(&blocker).unwrap();
        fs::write(&blocker, "not a directory").unwrap();

        let lost = tender("lost.pdf", 200);
        assert!(store.put(lost.clone()).is_err());
        assert_eq!(store.get(&lost.id), None);
        assert_eq!(store.len(), 1);
        assert_eq!(store.list(), vec![&kept]);
    }

    #[test]
    fn test_reload_reproduces_mapping() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("tenders.json");
        let mut store = TenderStore::load(&path).unwrap();
        let a = tender("a.pdf", 100);
        let b = tender("b.docx", 200);
        store.put(a.clone()).unwrap();
        store.put(b.clone()).unwrap();

        let reloaded = TenderStore::load(&path).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.get(&a.id), Some(&a));
        assert_eq!(reloaded.get(&b.id), Some(&b));
        assert_eq!(reloaded.snapshot, store.snapshot);
    }

    #[test]
    fn test_list_newest_first_with_stable_ties() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tenders.json");
        let mut store = TenderStore::load(&path).unwrap();
        let old = tender("old.pdf", 100);
        let tie_first = tender("tie1.pdf", 300);
        let tie_second = tender("tie2.pdf", 300);
        let mid = tender("mid.pdf", 200);
        for t in [&old, &tie_first, &tie_second, &mid] {
            store.put((*t).clone()).unwrap();
        }

        let names = |s: &TenderStore| -> Vec<String> {
            s.list().iter().map(|t| t.filename.clone()).collect()
        };
        let expected = vec!["tie1.pdf", "tie2.pdf", "mid.pdf", "old.pdf"];
        assert_eq!(names(&store), expected);

        // Ties survive a reload
        let reloaded = TenderStore::load(&path).unwrap();
        assert_eq!(names(&reloaded), expected);
    }

    #[test]
    fn test_snapshot_key_mismatch_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tenders.json");
        let t = tender("a.pdf", 100);
        let mut map = serde_json::Map::new();
        map.insert(Uuid::new_v4().to_string(), serde_json::to_value(&t).unwrap());
        fs::write(&path, serde_json::Value::Object(map).to_string()).unwrap();
        assert!(matches!(
            TenderStore::load(&path).unwrap_err(),
            TenderError::SnapshotCorrupt { .. }
        ));
    }
}
