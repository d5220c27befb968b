//! Internal implementation for configs module

use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};

use super::ConfigKind;
use crate::config::EslintFlavor;
use crate::log::log_debug;

const FLAT_ESLINT_CONFIG: &str = include_str!("templates/eslint.config.mjs");

fn eslint_document() -> Value {
    json!({
        "env": {
            "browser": true,
            "es6": true,
            "jest": true
        },
        "extends": ["eslint:recommended", "plugin:react/recommended", "prettier"],
        "parserOptions": {
            "ecmaFeatures": {
                "jsx": true
            },
            "ecmaVersion": 12,
            "sourceType": "module"
        },
        "plugins": ["react", "prettier"],
        "rules": {
            "prettier/prettier": "error",
            "react/prop-types": "off"
        }
    })
}

fn prettier_document() -> Value {
    json!({
        "singleQuote": true,
        "semi": false,
        "trailingComma": "es5"
    })
}

fn jest_document() -> Value {
    json!({
        "setupFilesAfterEnv": ["@testing-library/jest-dom/extend-expect"]
    })
}

pub fn render(kind: ConfigKind, eslint: EslintFlavor) -> Result<String> {
    let document = match (kind, eslint) {
        (ConfigKind::Lint, EslintFlavor::Flat) => return Ok(FLAT_ESLINT_CONFIG.to_string()),
        (ConfigKind::Lint, EslintFlavor::Legacy) => eslint_document(),
        (ConfigKind::Format, _) => prettier_document(),
        (ConfigKind::Test, _) => jest_document(),
    };

    // 2-space indent, no trailing newline
    serde_json::to_string_pretty(&document)
        .with_context(|| format!("Failed to serialize {} config", kind.label()))
}

pub fn write_config(project_root: &Path, kind: ConfigKind, eslint: EslintFlavor) -> Result<PathBuf> {
    let path = project_root.join(kind.file_name(eslint));
    let content = render(kind, eslint)?;

    fs::write(&path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    log_debug("configs", &format!("wrote {}", path.display()));

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prettier_text() {
        let text = render(ConfigKind::Format, EslintFlavor::Legacy).unwrap();
        assert_eq!(
            text,
            "{\n  \"singleQuote\": true,\n  \"semi\": false,\n  \"trailingComma\": \"es5\"\n}"
        );
    }

    #[test]
    fn test_jest_text() {
        let text = render(ConfigKind::Test, EslintFlavor::Legacy).unwrap();
        assert_eq!(
            text,
            "{\n  \"setupFilesAfterEnv\": [\n    \"@testing-library/jest-dom/extend-expect\"\n  ]\n}"
        );
    }

    #[test]
    fn test_eslint_document_keys_in_order() {
        let text = render(ConfigKind::Lint, EslintFlavor::Legacy).unwrap();
        let parsed: Value = serde_json::from_str(&text).unwrap();
        let keys: Vec<&str> = parsed
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();

        assert_eq!(keys, ["env", "extends", "parserOptions", "plugins", "rules"]);
        assert_eq!(parsed["parserOptions"]["ecmaVersion"], 12);
        assert_eq!(parsed["rules"]["prettier/prettier"], "error");
        assert_eq!(parsed["env"]["jest"], true);
        assert!(!text.ends_with('\n'));
    }
}
