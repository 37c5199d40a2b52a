//! JSON codec for the config file.
//!
//! Reading: an empty (or whitespace-only) file means "no data yet" and
//! decodes to a new [`Config`].  Anything else must be a valid JSON object.
//!
//! Writing: the config is written as indented JSON.  The layout follows the
//! familiar prefix + indent convention: every line after the first starts
//! with `prefix`, followed by one copy of `indent` per nesting level.

use serde::ser::Error as _;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::domain::config::Config;

/// Indentation style used when writing the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonStyle {
    /// Written at the start of every line after the first.
    pub prefix: String,
    /// Written once per nesting level.
    pub indent: String,
}

impl Default for JsonStyle {
    /// No prefix, two-space indent.
    fn default() -> Self {
        Self {
            prefix: String::new(),
            indent: "  ".to_string(),
        }
    }
}

/// Decodes config file content.
///
/// # Errors
///
/// Returns the underlying [`serde_json::Error`] if non-empty `content` is not
/// a valid config document.
pub fn decode_config(content: &str) -> Result<Config, serde_json::Error> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }
    serde_json::from_str(content)
}

/// Encodes `config` as indented JSON text using `style`.
///
/// # Errors
///
/// Returns a [`serde_json::Error`] if serialization fails.
pub fn encode_config(config: &Config, style: &JsonStyle) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(style.indent.as_bytes());
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    config.serialize(&mut ser)?;

    let text = String::from_utf8(buf).map_err(serde_json::Error::custom)?;
    if style.prefix.is_empty() {
        return Ok(text);
    }
    Ok(text.replace('\n', &format!("\n{}", style.prefix)))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn sample() -> Config {
        Config {
            snippets_file: PathBuf::from("/home/me/.corgi/snippets.json"),
            snippets_dir: PathBuf::from("/home/me/.corgi/snippets"),
            editor: "/usr/bin/vim".to_string(),
            filter_cmd: String::new(),
        }
    }

    #[test]
    fn test_decode_empty_content_is_new_config() {
        let cfg = decode_config("").expect("empty content is valid");
        assert!(cfg.is_new());
    }

    #[test]
    fn test_decode_whitespace_only_content_is_new_config() {
        let cfg = decode_config("  \n\t\n").expect("blank content is valid");
        assert!(cfg.is_new());
    }

    #[test]
    fn test_decode_full_document() {
        let cfg = decode_config(
            r#"{"snippets_file":"/a","snippets_dir":"/b","editor":"/c","filter_cmd":"/d"}"#,
        )
        .expect("valid document");

        assert_eq!(cfg.snippets_file, PathBuf::from("/a"));
        assert_eq!(cfg.snippets_dir, PathBuf::from("/b"));
        assert_eq!(cfg.editor, "/c");
        assert_eq!(cfg.filter_cmd, "/d");
    }

    #[test]
    fn test_decode_truncated_document_is_error() {
        assert!(decode_config(r#"{"snippets_file":"#).is_err());
    }

    #[test]
    fn test_decode_wrong_field_type_is_error() {
        assert!(decode_config(r#"{"editor": 42}"#).is_err());
    }

    #[test]
    fn test_encode_default_style_uses_two_space_indent() {
        let text = encode_config(&sample(), &JsonStyle::default()).expect("encode");

        assert!(text.starts_with("{\n  \"snippets_file\": "));
        assert!(text.ends_with("\n}"));
        assert!(text.contains("\"filter_cmd\": \"\""));
    }

    #[test]
    fn test_encode_applies_prefix_to_every_line_after_first() {
        let style = JsonStyle {
            prefix: "> ".to_string(),
            indent: "\t".to_string(),
        };

        let text = encode_config(&sample(), &style).expect("encode");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "{");
        assert_eq!(lines[1], "> \t\"snippets_file\": \"/home/me/.corgi/snippets.json\",");
        assert_eq!(*lines.last().expect("at least one line"), "> }");
    }

    #[test]
    fn test_encoded_text_decodes_back_to_same_config() {
        let style = JsonStyle {
            prefix: "   ".to_string(),
            indent: "    ".to_string(),
        };

        let text = encode_config(&sample(), &style).expect("encode");
        let restored = decode_config(&text).expect("decode");

        assert_eq!(restored, sample());
    }
}
