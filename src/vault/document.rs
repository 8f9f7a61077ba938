//! Export file format
//!
//! An export is a small JSON document, `{ "encrypted": "<envelope>" }`.
//! Older exports used `payload` or `data` for the same field, so import
//! accepts any of the three.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{VaultError, VaultResult};

/// Field names checked on import, in priority order
pub const ENVELOPE_FIELDS: [&str; 3] = ["encrypted", "payload", "data"];

/// Document written by export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub encrypted: String,
}

impl ExportDocument {
    pub fn new(envelope: impl Into<String>) -> Self {
        Self {
            encrypted: envelope.into(),
        }
    }

    /// Pretty-printed JSON text of the document
    pub fn to_json(&self) -> VaultResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Pull the envelope string out of an export document
pub fn extract_envelope(text: &str) -> VaultResult<String> {
    let document: Value = serde_json::from_str(text)
        .map_err(|e| VaultError::Import(format!("File is not valid JSON: {}", e)))?;

    ENVELOPE_FIELDS
        .iter()
        .find_map(|field| {
            document
                .get(field)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
        })
        .map(str::to_string)
        .ok_or_else(|| {
            VaultError::Import(
                "File does not contain an encrypted payload under `encrypted`/`payload`/`data`"
                    .to_string(),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_json_shape() {
        let doc = ExportDocument::new("a:b:c");
        assert_eq!(doc.to_json().unwrap(), "{\n  \"encrypted\": \"a:b:c\"\n}");
    }

    #[test]
    fn test_extract_each_field_name() {
        for field in ENVELOPE_FIELDS {
            let text = format!("{{\"{}\": \"s:n:c\"}}", field);
            assert_eq!(extract_envelope(&text).unwrap(), "s:n:c");
        }
    }

    #[test]
    fn test_encrypted_takes_priority() {
        let text = r#"{"data": "old", "encrypted": "new"}"#;
        assert_eq!(extract_envelope(text).unwrap(), "new");
    }

    #[test]
    fn test_empty_field_falls_through() {
        let text = r#"{"encrypted": "", "payload": "p"}"#;
        assert_eq!(extract_envelope(text).unwrap(), "p");
    }

    #[test]
    fn test_missing_payload_is_import_error() {
        let err = extract_envelope(r#"{"cipher": "x"}"#).unwrap_err();
        assert!(matches!(err, VaultError::Import(_)));

        let err = extract_envelope("not json").unwrap_err();
        assert!(matches!(err, VaultError::Import(_)));
    }
}
