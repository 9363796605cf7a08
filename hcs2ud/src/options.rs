//! Configuration of a conversion run.

use fs_err as fs;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{types::Label, Error};

/// Options for converting a corpus export to the sequence tagging format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// The tag written after each word.
    pub label: Label,
    /// Whether to remove bracketed, word-specific annotations from the MSD before deriving tags.
    pub strip_msd: bool,
    /// Whether to keep sentences containing words without a UPOS tag.
    pub keep_untagged: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            label: Label::Pos,
            strip_msd: false,
            keep_untagged: false,
        }
    }
}

impl ConvertOptions {
    /// Reads options from a JSON file. Missing fields take their default value.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let content = fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let options: ConvertOptions = serde_json::from_str(r#"{"label": "ud-morph"}"#).unwrap();

        assert_eq!(
            options,
            ConvertOptions {
                label: Label::UdMorph,
                ..ConvertOptions::default()
            }
        );
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert!(serde_json::from_str::<ConvertOptions>(r#"{"label": "gloss"}"#).is_err());
    }
}
