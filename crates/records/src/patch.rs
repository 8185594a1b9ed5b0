use crate::error::{RecordsError, Result};
use crate::source::OverrideSink;
use crate::types::FormKey;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// New display name for one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameOverride {
    pub form_key: FormKey,
    pub name: String,
}

/// Serialized patch document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchFile {
    pub plugin: String,
    pub overrides: Vec<NameOverride>,
}

/// Buffers name overrides until the whole pass is done
///
/// Nothing touches disk before [`PatchWriter::save`], so an aborted run leaves
/// no partial patch behind.
#[derive(Debug, Clone)]
pub struct PatchWriter {
    plugin: String,
    overrides: Vec<NameOverride>,
    positions: HashMap<FormKey, usize>,
}

impl PatchWriter {
    pub fn new(plugin: impl Into<String>) -> Self {
        Self {
            plugin: plugin.into(),
            overrides: Vec::new(),
            positions: HashMap::new(),
        }
    }

    #[must_use]
    pub fn overrides(&self) -> &[NameOverride] {
        &self.overrides
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    #[must_use]
    pub fn to_patch_file(&self) -> PatchFile {
        PatchFile {
            plugin: self.plugin.clone(),
            overrides: self.overrides.clone(),
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.to_patch_file())
            .map_err(|err| RecordsError::Other(format!("Failed to encode patch: {err}")))?;
        std::fs::write(path, json)?;
        log::info!(
            "Wrote {} overrides to {}",
            self.overrides.len(),
            path.display()
        );
        Ok(())
    }
}

impl OverrideSink for PatchWriter {
    fn write_name(&mut self, form_key: &FormKey, name: &str) -> Result<()> {
        let entry = NameOverride {
            form_key: form_key.clone(),
            name: name.to_string(),
        };
        if let Some(&idx) = self.positions.get(form_key) {
            self.overrides[idx] = entry;
        } else {
            self.positions.insert(form_key.clone(), self.overrides.len());
            self.overrides.push(entry);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn key(raw: &str) -> FormKey {
        FormKey::new(raw).unwrap()
    }

    #[test]
    fn repeated_writes_replace_in_place() {
        let mut writer = PatchWriter::new("Booktag.esp");
        writer.write_name(&key("000001:A.esp"), "first").unwrap();
        writer.write_name(&key("000002:A.esp"), "second").unwrap();
        writer.write_name(&key("000001:A.esp"), "again").unwrap();

        let names: Vec<_> = writer.overrides().iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["again", "second"]);
    }

    #[test]
    fn save_writes_json_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out/patch.json");

        let mut writer = PatchWriter::new("Booktag.esp");
        writer
            .write_name(&key("000001:A.esp"), "[Dest] Tome of Flames")
            .unwrap();
        writer.save(&path).unwrap();

        let saved: PatchFile = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(saved, writer.to_patch_file());
        assert_eq!(saved.overrides[0].form_key.as_str(), "000001:A.esp");
    }
}
