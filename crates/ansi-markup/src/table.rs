//! Named styles and delimiter configuration.
//!
//! A [`StyleTable`] is built once from a configuration fragment of
//! space-separated `Name=Code(,Code)*` assignments:
//!
//! ```text
//! WarningStyle=red,bold KeyStyle=white ValueStyle=blue
//! ```
//!
//! Two names are reserved. `BeginToken` and `EndToken` replace the default
//! `@|` and `|@` delimiters instead of defining a style:
//!
//! ```text
//! BeginToken=<<| EndToken=|>>
//! ```
//!
//! Malformed assignments are reported as warnings and skipped. Unknown code
//! names fail the whole construction.

use std::collections::HashMap;
use std::fmt;

use crate::code::StyleCode;
use crate::diagnostics::{Diagnostics, LogDiagnostics};
use crate::error::{MarkupError, Result};
use crate::util::split_fields;

/// Default begin delimiter.
pub const DEFAULT_BEGIN_TOKEN: &str = "@|";

/// Default end delimiter.
pub const DEFAULT_END_TOKEN: &str = "|@";

const BEGIN_TOKEN_KEY: &str = "BeginToken";
const END_TOKEN_KEY: &str = "EndToken";

/// A configuration assignment that was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// The assignment exactly as it appeared in the fragment.
    pub assignment: String,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "parsing style \"{}\", expected format: StyleName=Code(,Code)*",
            self.assignment
        )
    }
}

/// Resolved named styles plus the begin/end delimiters.
///
/// Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTable {
    begin_token: String,
    end_token: String,
    styles: HashMap<String, Vec<StyleCode>>,
    warnings: Vec<ConfigWarning>,
}

impl Default for StyleTable {
    fn default() -> Self {
        Self {
            begin_token: DEFAULT_BEGIN_TOKEN.to_string(),
            end_token: DEFAULT_END_TOKEN.to_string(),
            styles: HashMap::new(),
            warnings: Vec::new(),
        }
    }
}

impl StyleTable {
    /// Starts a programmatic table definition.
    pub fn builder() -> StyleTableBuilder {
        StyleTableBuilder::default()
    }

    /// Builds a table from positional configuration fragments, logging
    /// warnings through the `log` facade.
    ///
    /// Fragment 0 is ignored; fragment 1, when present, holds the style
    /// assignments.
    pub fn from_formats(formats: &[&str]) -> Result<Self> {
        Self::from_formats_with(formats, &LogDiagnostics)
    }

    /// Like [`from_formats`](Self::from_formats) with an explicit warning sink.
    pub fn from_formats_with(formats: &[&str], diagnostics: &dyn Diagnostics) -> Result<Self> {
        match formats.get(1) {
            Some(fragment) => Self::parse_with(fragment, diagnostics),
            None => Ok(Self::default()),
        }
    }

    /// Parses a single assignment fragment.
    pub fn parse(fragment: &str) -> Result<Self> {
        Self::parse_with(fragment, &LogDiagnostics)
    }

    /// Parses a single assignment fragment with an explicit warning sink.
    pub fn parse_with(fragment: &str, diagnostics: &dyn Diagnostics) -> Result<Self> {
        let mut builder = StyleTable::builder();
        let mut warnings = Vec::new();

        for assignment in split_fields(fragment, ' ') {
            let parts = split_fields(assignment, '=');
            let (name, code_list) = match parts.as_slice() {
                [name, code_list] => (*name, *code_list),
                _ => {
                    warnings.push(skip(assignment, diagnostics));
                    continue;
                }
            };

            let code_names = split_fields(code_list, ',');
            let Some(first) = code_names.first() else {
                warnings.push(skip(assignment, diagnostics));
                continue;
            };

            builder = match name {
                BEGIN_TOKEN_KEY => builder.begin_token(*first),
                END_TOKEN_KEY => builder.end_token(*first),
                _ => {
                    let codes = code_names
                        .iter()
                        .map(|code| StyleCode::from_name(code))
                        .collect::<Result<Vec<_>>>()?;
                    builder.style(name, codes)
                }
            };
        }

        let mut table = builder.build()?;
        table.warnings = warnings;
        Ok(table)
    }

    /// Looks up a named style.
    pub fn resolve(&self, name: &str) -> Option<&[StyleCode]> {
        self.styles.get(name).map(Vec::as_slice)
    }

    pub fn begin_token(&self) -> &str {
        &self.begin_token
    }

    pub fn end_token(&self) -> &str {
        &self.end_token
    }

    /// Number of named styles.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Names of all configured styles, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    /// Assignments skipped while parsing.
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }
}

fn skip(assignment: &str, diagnostics: &dyn Diagnostics) -> ConfigWarning {
    let warning = ConfigWarning {
        assignment: assignment.to_string(),
    };
    diagnostics.warn(&warning.to_string());
    warning
}

/// Builder for [`StyleTable`].
#[derive(Debug, Clone, Default)]
pub struct StyleTableBuilder {
    begin_token: Option<String>,
    end_token: Option<String>,
    styles: HashMap<String, Vec<StyleCode>>,
}

impl StyleTableBuilder {
    /// Defines (or replaces) a named style.
    pub fn style(mut self, name: impl Into<String>, codes: Vec<StyleCode>) -> Self {
        self.styles.insert(name.into(), codes);
        self
    }

    pub fn begin_token(mut self, token: impl Into<String>) -> Self {
        self.begin_token = Some(token.into());
        self
    }

    pub fn end_token(mut self, token: impl Into<String>) -> Self {
        self.end_token = Some(token.into());
        self
    }

    /// Validates and freezes the table.
    ///
    /// # Errors
    ///
    /// Fails if a delimiter is empty or a style has no codes.
    pub fn build(self) -> Result<StyleTable> {
        let begin_token = self
            .begin_token
            .unwrap_or_else(|| DEFAULT_BEGIN_TOKEN.to_string());
        let end_token = self
            .end_token
            .unwrap_or_else(|| DEFAULT_END_TOKEN.to_string());

        if begin_token.is_empty() {
            return Err(MarkupError::EmptyDelimiter {
                which: BEGIN_TOKEN_KEY,
            });
        }
        if end_token.is_empty() {
            return Err(MarkupError::EmptyDelimiter {
                which: END_TOKEN_KEY,
            });
        }
        if let Some((name, _)) = self.styles.iter().find(|(_, codes)| codes.is_empty()) {
            return Err(MarkupError::EmptyStyle { name: name.clone() });
        }

        Ok(StyleTable {
            begin_token,
            end_token,
            styles: self.styles,
            warnings: Vec::new(),
        })
    }
}
