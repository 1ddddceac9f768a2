//! JSON file formats for load-order input and patch output.

use std::fs;
use std::path::Path;

use kye_core::{ModKey, PatchSummary, Record};
use serde::{Deserialize, Serialize};

use crate::error::{Result, RuntimeError};

/// One plugin of the load order with the records it defines or overrides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plugin {
    pub key: ModKey,
    #[serde(default)]
    pub records: Vec<Record>,
}

impl Plugin {
    pub fn new(key: impl Into<ModKey>) -> Self {
        Self {
            key: key.into(),
            records: Vec::new(),
        }
    }

    pub fn with_record(mut self, record: impl Into<Record>) -> Self {
        self.records.push(record.into());
        self
    }
}

/// Active plugins in load order, lowest priority first.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadOrderSnapshot {
    pub plugins: Vec<Plugin>,
}

impl LoadOrderSnapshot {
    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| RuntimeError::io(path, e))?;
        let snapshot: Self =
            serde_json::from_str(&content).map_err(|e| RuntimeError::json(path, e))?;

        tracing::debug!(
            "Loaded {} plugins from {}",
            snapshot.plugins.len(),
            path.display()
        );
        Ok(snapshot)
    }
}

/// The patch plugin produced by a run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PatchOutput {
    /// Name of the patch plugin.
    pub plugin: ModKey,
    /// Plugins whose records the patch overrides, in load order.
    pub masters: Vec<ModKey>,
    /// Overlays in commit order.
    pub records: Vec<Record>,
    pub summary: PatchSummary,
}

impl PatchOutput {
    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| RuntimeError::io(path, e))?;
        serde_json::from_str(&content).map_err(|e| RuntimeError::json(path, e))
    }

    /// Writes the patch as pretty JSON, replacing `path` atomically.
    pub fn write(&self, path: &Path) -> Result<()> {
        let temp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self).map_err(|e| RuntimeError::json(path, e))?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| RuntimeError::io(parent, e))?;
        }
        fs::write(&temp_path, json).map_err(|e| RuntimeError::io(&temp_path, e))?;
        fs::rename(&temp_path, path).map_err(|e| RuntimeError::io(path, e))?;

        tracing::debug!("Saved {} records to {}", self.records.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use kye_core::{FormKey, Keyword};

    use super::*;

    #[test]
    fn snapshot_json_uses_tagged_records() {
        let json = r#"{
            "plugins": [
                { "key": "Skyrim.esm", "records": [
                    { "kind": "keyword", "key": "0D205E:Skyrim.esm", "editor_id": "ActorTypeGhost" }
                ] },
                { "key": "know_your_enemy.esp" }
            ]
        }"#;
        let snapshot: LoadOrderSnapshot = serde_json::from_str(json).unwrap();

        assert_eq!(snapshot.plugins.len(), 2);
        assert!(snapshot.plugins[1].records.is_empty());
        assert_eq!(
            snapshot.plugins[0].records[0],
            Record::Keyword(Keyword {
                key: FormKey::new("Skyrim.esm", 0x0D205E),
                editor_id: Some("ActorTypeGhost".into()),
            })
        );
    }

    #[test]
    fn output_is_replaced_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("patch.json");
        let mut output = PatchOutput {
            plugin: ModKey::new("patch.esp"),
            masters: Vec::new(),
            records: Vec::new(),
            summary: PatchSummary::default(),
        };

        output.write(&path).unwrap();
        output.summary.traits = 3;
        output.write(&path).unwrap();

        assert_eq!(PatchOutput::read(&path).unwrap(), output);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn missing_snapshot_reports_the_path() {
        let err = LoadOrderSnapshot::read(Path::new("/nonexistent/load_order.json")).unwrap_err();
        assert!(matches!(err, RuntimeError::Io { ref path, .. } if path.ends_with("load_order.json")));
    }
}
