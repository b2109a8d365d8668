use std::path::Path;

use anyhow::{Context, Result, bail};
use megapass::{Mode, ProgressFields, ProgressRecord, Variant};
use serde::Deserialize;

/// Password request read from a YAML or JSON file.
///
/// ```yaml
/// game: v
/// mode: authentic
/// record:
///   bosses: [true, true, false, false, false, false, false, false]
///   p_chips: 120
///   extra_lives: 2
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PasswordRequest {
    #[serde(default)]
    pub game: Option<Variant>,
    #[serde(default)]
    pub mode: Option<Mode>,
    #[serde(default)]
    pub record: Option<ProgressFields>,
}

impl PasswordRequest {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load by extension: `.json` is JSON, anything else is YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read request file {}", path.display()))?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&text)
                .with_context(|| format!("invalid JSON request {}", path.display()))
        } else {
            Self::from_yaml_str(&text)
                .with_context(|| format!("invalid YAML request {}", path.display()))
        }
    }
}

/// Parse a packed record: `0x` hex, `0b` binary, or decimal.
pub fn parse_record(text: &str) -> Result<ProgressRecord> {
    let cleaned: String = text.trim().chars().filter(|&c| c != '_').collect();
    if cleaned.is_empty() {
        bail!("record must not be empty");
    }
    let (digits, radix) = if let Some(hex) = strip_prefix_ci(&cleaned, "0x") {
        (hex, 16)
    } else if let Some(bin) = strip_prefix_ci(&cleaned, "0b") {
        (bin, 2)
    } else {
        (cleaned.as_str(), 10)
    };
    let raw = u64::from_str_radix(digits, radix)
        .with_context(|| format!("`{text}` is not a base-{radix} number"))?;
    Ok(ProgressRecord::from_raw(raw)?)
}

fn strip_prefix_ci<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &text[prefix.len()..])
}
