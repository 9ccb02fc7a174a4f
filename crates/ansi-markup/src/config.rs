//! Structured style configuration.
//!
//! [`StyleConfig`] is the serde-friendly counterpart of the assignment
//! fragment accepted by [`StyleTable::parse`]. It is convenient when styles
//! live in a YAML file next to the rest of an application's settings:
//!
//! ```rust
//! use ansi_markup::StyleConfig;
//!
//! let config = StyleConfig::from_yaml(r#"
//! begin_token: "<<|"
//! end_token: "|>>"
//! styles:
//!   WarningStyle: red,bold
//!   KeyStyle: [white, underline]
//! "#).unwrap();
//!
//! let table = config.into_table().unwrap();
//! assert_eq!(table.begin_token(), "<<|");
//! assert_eq!(table.len(), 2);
//! ```
//!
//! Unlike fragment parsing, structured configuration has no warning tier:
//! every problem is an error.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::code::StyleCode;
use crate::error::Result;
use crate::table::StyleTable;

/// Code list of a named style: either `"bold,red"` or `[bold, red]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CodeList {
    Joined(String),
    List(Vec<String>),
}

impl CodeList {
    /// The individual code names, trimmed. Empty entries are kept so that
    /// they fail resolution.
    pub fn names(&self) -> Vec<&str> {
        match self {
            CodeList::Joined(s) => s.split(',').map(str::trim).collect(),
            CodeList::List(items) => items.iter().map(|item| item.trim()).collect(),
        }
    }
}

/// Delimiters and named styles, as loaded from a settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Replaces the default `@|` begin delimiter.
    pub begin_token: Option<String>,
    /// Replaces the default `|@` end delimiter.
    pub end_token: Option<String>,
    /// Named styles. Names are case-sensitive.
    pub styles: BTreeMap<String, CodeList>,
}

impl StyleConfig {
    /// Parses a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Resolves every code and builds the table.
    ///
    /// # Errors
    ///
    /// Fails on unknown code names, styles without codes, and empty
    /// delimiters.
    pub fn into_table(self) -> Result<StyleTable> {
        let mut builder = StyleTable::builder();

        if let Some(token) = self.begin_token {
            builder = builder.begin_token(token);
        }
        if let Some(token) = self.end_token {
            builder = builder.end_token(token);
        }

        for (name, list) in &self.styles {
            let codes = list
                .names()
                .into_iter()
                .map(StyleCode::from_name)
                .collect::<Result<Vec<_>>>()?;
            builder = builder.style(name.as_str(), codes);
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MarkupError;
    use console::{Attribute, Color};

    #[test]
    fn test_empty_document_is_default() {
        let config = StyleConfig::from_yaml("{}").unwrap();
        assert_eq!(config, StyleConfig::default());
        let table = config.into_table().unwrap();
        assert_eq!(table.begin_token(), "@|");
        assert!(table.is_empty());
    }

    #[test]
    fn test_joined_and_list_forms_agree() {
        let config = StyleConfig::from_yaml(
            r#"
styles:
  A: "bold, red"
  B: [bold, red]
"#,
        )
        .unwrap();
        let table = config.into_table().unwrap();
        let expected = [
            StyleCode::Attribute(Attribute::Bold),
            StyleCode::Foreground(Color::Red),
        ];
        assert_eq!(table.resolve("A"), Some(&expected[..]));
        assert_eq!(table.resolve("B"), Some(&expected[..]));
    }

    #[test]
    fn test_unknown_code_fails() {
        let config = StyleConfig::from_yaml("styles:\n  A: mauve\n").unwrap();
        assert_eq!(
            config.into_table(),
            Err(MarkupError::UnknownCode {
                name: "mauve".to_string()
            })
        );
    }

    #[test]
    fn test_empty_code_entry_fails() {
        for yaml in ["styles:\n  S: \"red,,bold\"\n", "styles:\n  S: [red, \"\", bold]\n"] {
            let config = StyleConfig::from_yaml(yaml).unwrap();
            assert_eq!(
                config.into_table(),
                Err(MarkupError::UnknownCode {
                    name: String::new()
                })
            );
        }
    }

    #[test]
    fn test_empty_style_fails() {
        let config = StyleConfig::from_yaml("styles:\n  A: []\n").unwrap();
        assert!(matches!(
            config.into_table(),
            Err(MarkupError::EmptyStyle { .. })
        ));
    }

    #[test]
    fn test_empty_delimiter_fails() {
        let config = StyleConfig::from_yaml("end_token: \"\"\n").unwrap();
        assert!(matches!(
            config.into_table(),
            Err(MarkupError::EmptyDelimiter { which: "EndToken" })
        ));
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(matches!(
            StyleConfig::from_yaml("styles: [unclosed"),
            Err(MarkupError::Config(_))
        ));
    }
}
