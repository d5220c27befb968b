//! Internal implementation for manifest module

use anyhow::{anyhow, Context, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

use super::{LINT_STAGED_KEY, LINT_STAGED_RULE, MANIFEST_FILE, SCRIPTS};
use crate::log::log_debug;

pub fn merge_scripts(project_root: &Path) -> Result<PathBuf> {
    let path = project_root.join(MANIFEST_FILE);

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let mut manifest: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    apply(&mut manifest).with_context(|| format!("Invalid manifest: {}", path.display()))?;

    let updated = serde_json::to_string_pretty(&manifest)?;
    fs::write(&path, updated).with_context(|| format!("Failed to write {}", path.display()))?;
    log_debug("manifest", &format!("merged scripts into {}", path.display()));

    Ok(path)
}

pub fn apply(manifest: &mut Value) -> Result<()> {
    let root = manifest
        .as_object_mut()
        .ok_or_else(|| anyhow!("{} must contain a JSON object", MANIFEST_FILE))?;

    // Assigning through the entry keeps "scripts" at its original position
    let scripts = root
        .entry("scripts")
        .or_insert_with(|| Value::Object(Map::new()));
    if !scripts.is_object() {
        log_debug("manifest", "replacing non-object scripts value");
        *scripts = Value::Object(Map::new());
    }
    if let Value::Object(scripts) = scripts {
        for (name, command) in SCRIPTS {
            scripts.insert(name.to_string(), Value::String(command.to_string()));
        }
    }

    let mut rule = Map::new();
    rule.insert(
        LINT_STAGED_RULE.0.to_string(),
        Value::String(LINT_STAGED_RULE.1.to_string()),
    );
    root.insert(LINT_STAGED_KEY.to_string(), Value::Object(rule));

    Ok(())
}
