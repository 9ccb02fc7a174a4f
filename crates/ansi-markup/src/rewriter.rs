//! Token rewriting.

use crate::code::{style_from_codes, StyleCode};
use crate::error::Result;
use crate::table::StyleTable;
use crate::token::{Scanner, Segment, Token};

/// Full style reset.
pub const RESET: &str = "\x1b[0m";

/// How to transform tokens in the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TokenTransform {
    /// Replace tokens with ANSI-styled text followed by a reset.
    #[default]
    Apply,

    /// Replace tokens with their text only.
    /// Used for plain-text sinks such as log files.
    Remove,

    /// Keep tokens as-is in the output.
    /// Used to debug markup at call sites.
    Keep,
}

/// Renders a message into an output buffer.
pub trait MessageRenderer {
    /// Appends the rendered form of `input` to `output`.
    ///
    /// On error `output` is left as it was before the call.
    fn render_into(&self, input: &str, output: &mut String) -> Result<()>;

    /// Renders `input` into a new string.
    fn render(&self, input: &str) -> Result<String> {
        let mut output = String::with_capacity(input.len());
        self.render_into(input, &mut output)?;
        Ok(output)
    }
}

/// Rewrites `@|code(,code)* text|@` tokens into styled text.
///
/// Each code is looked up in the [`StyleTable`] first; names that are not
/// configured styles are resolved as built-in codes.
///
/// A token without an end delimiter, or without text after its code list,
/// makes the whole input pass through unchanged. An unknown code name fails
/// the call.
#[derive(Debug, Clone, Default)]
pub struct TokenRewriter {
    table: StyleTable,
    transform: TokenTransform,
}

impl TokenRewriter {
    pub fn new(table: StyleTable) -> Self {
        Self {
            table,
            transform: TokenTransform::default(),
        }
    }

    /// Builds a rewriter from positional configuration fragments.
    ///
    /// See [`StyleTable::from_formats`].
    pub fn from_formats(formats: &[&str]) -> Result<Self> {
        Ok(Self::new(StyleTable::from_formats(formats)?))
    }

    /// Sets the output transform.
    pub fn transform(mut self, transform: TokenTransform) -> Self {
        self.transform = transform;
        self
    }

    pub fn table(&self) -> &StyleTable {
        &self.table
    }

    /// Resolves a token's code list into a flat, ordered list of codes.
    fn resolve_codes(&self, token: &Token<'_>) -> Result<Vec<StyleCode>> {
        let mut codes = Vec::new();
        for name in token.names() {
            match self.table.resolve(name) {
                Some(named) => codes.extend_from_slice(named),
                None => codes.push(StyleCode::from_name(name)?),
            }
        }
        Ok(codes)
    }

    fn emit_token(&self, output: &mut String, raw: &str, token: &Token<'_>) -> Result<()> {
        let codes = self.resolve_codes(token)?;

        match self.transform {
            TokenTransform::Apply => {
                let styled = style_from_codes(&codes).apply_to(token.text).to_string();
                output.push_str(&styled);
                // console only resets when it emitted something
                if codes.is_empty() {
                    output.push_str(RESET);
                }
            }
            TokenTransform::Remove => output.push_str(token.text),
            TokenTransform::Keep => output.push_str(raw),
        }
        Ok(())
    }
}

impl MessageRenderer for TokenRewriter {
    fn render_into(&self, input: &str, output: &mut String) -> Result<()> {
        let mark = output.len();
        let scanner = Scanner::new(input, self.table.begin_token(), self.table.end_token());

        for segment in scanner {
            match segment {
                Segment::Text(text) => output.push_str(text),
                Segment::Token { raw, token } => {
                    if let Err(err) = self.emit_token(output, raw, &token) {
                        output.truncate(mark);
                        return Err(err);
                    }
                }
                Segment::Malformed => {
                    output.truncate(mark);
                    output.push_str(input);
                    return Ok(());
                }
            }
        }

        Ok(())
    }
}

/// Renders `input` with the default delimiters and no named styles.
pub fn render(input: &str) -> Result<String> {
    TokenRewriter::default().render(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::CollectDiagnostics;
    use crate::error::MarkupError;

    fn rewriter(fragment: &str) -> TokenRewriter {
        TokenRewriter::from_formats(&["ansi", fragment]).unwrap()
    }

    mod apply_mode {
        use super::*;

        #[test]
        fn plain_text_unchanged() {
            assert_eq!(render("no tokens here").unwrap(), "no tokens here");
        }

        #[test]
        fn empty_input() {
            assert_eq!(render("").unwrap(), "");
        }

        #[test]
        fn builtin_code() {
            assert_eq!(render("@|green Hello|@").unwrap(), "\x1b[32mHello\x1b[0m");
        }

        #[test]
        fn multiple_codes() {
            let out = render("@|bold,red Warning!|@").unwrap();
            assert!(out.contains("\x1b[31m"));
            assert!(out.contains("\x1b[1m"));
            assert!(out.ends_with("Warning!\x1b[0m"));
        }

        #[test]
        fn surrounding_text_untouched() {
            let out = render("before @|blue x|@ after").unwrap();
            assert_eq!(out, "before \x1b[34mx\x1b[0m after");
        }

        #[test]
        fn adjacent_tokens() {
            let out = render("@|red a|@@|green b|@").unwrap();
            assert_eq!(out, "\x1b[31ma\x1b[0m\x1b[32mb\x1b[0m");
        }

        #[test]
        fn named_styles() {
            let r = rewriter("KeyStyle=white ValueStyle=blue");
            assert_eq!(
                r.render("@|KeyStyle name|@ = @|ValueStyle 5|@").unwrap(),
                "\x1b[37mname\x1b[0m = \x1b[34m5\x1b[0m"
            );
        }

        #[test]
        fn named_style_matches_inline_codes() {
            let r = rewriter("Style=bold,red");
            assert_eq!(
                r.render("@|Style text|@").unwrap(),
                r.render("@|bold,red text|@").unwrap()
            );
        }

        #[test]
        fn named_style_shadows_builtin_code() {
            let r = rewriter("red=blue");
            assert_eq!(r.render("@|red x|@").unwrap(), "\x1b[34mx\x1b[0m");
        }

        #[test]
        fn named_and_builtin_mixed() {
            let r = rewriter("Loud=bold");
            assert_eq!(
                r.render("@|Loud,bg_yellow x|@").unwrap(),
                r.render("@|bold,bg_yellow x|@").unwrap()
            );
        }

        #[test]
        fn text_keeps_inner_spaces() {
            let out = render("@|red a b  c|@").unwrap();
            assert_eq!(out, "\x1b[31ma b  c\x1b[0m");
        }

        #[test]
        fn no_codes_still_resets() {
            assert_eq!(render("@|, text|@").unwrap(), "text\x1b[0m");
        }

        #[test]
        fn custom_delimiters() {
            let r = rewriter("BeginToken=<<| EndToken=|>>");
            assert_eq!(r.render("<<|red x|>>").unwrap(), "\x1b[31mx\x1b[0m");
            assert_eq!(r.render("@|red x|@").unwrap(), "@|red x|@");
        }
    }

    mod fallback {
        use super::*;

        #[test]
        fn missing_end_token() {
            let input = "@|bold,red Warning!";
            assert_eq!(render(input).unwrap(), input);
        }

        #[test]
        fn missing_end_after_valid_token() {
            let input = "@|red ok|@ then @|blue broken";
            assert_eq!(render(input).unwrap(), input);
        }

        #[test]
        fn missing_text() {
            let input = "prefix @|red|@ suffix";
            assert_eq!(render(input).unwrap(), input);
        }

        #[test]
        fn overlapping_delimiters() {
            let input = "@|@ x";
            assert_eq!(render(input).unwrap(), input);
        }

        #[test]
        fn end_token_alone_is_text() {
            assert_eq!(render("a |@ b").unwrap(), "a |@ b");
        }

        #[test]
        fn output_prefix_preserved() {
            let mut output = String::from("[INFO] ");
            TokenRewriter::default()
                .render_into("@|red ok|@ @|blue broken", &mut output)
                .unwrap();
            assert_eq!(output, "[INFO] @|red ok|@ @|blue broken");
        }
    }

    mod errors {
        use super::*;

        #[test]
        fn unknown_code() {
            assert_eq!(
                render("@|purple x|@"),
                Err(MarkupError::UnknownCode {
                    name: "purple".to_string()
                })
            );
        }

        #[test]
        fn empty_code_name() {
            assert!(render("@| x|@").is_err());
        }

        #[test]
        fn error_leaves_output_untouched() {
            let mut output = String::from("keep");
            let result =
                TokenRewriter::default().render_into("a @|red b|@ @|nope c|@", &mut output);
            assert!(result.is_err());
            assert_eq!(output, "keep");
        }
    }

    mod remove_mode {
        use super::*;

        #[test]
        fn strips_tokens() {
            let r = rewriter("KeyStyle=white").transform(TokenTransform::Remove);
            assert_eq!(
                r.render("@|KeyStyle name|@ = @|blue 5|@").unwrap(),
                "name = 5"
            );
        }

        #[test]
        fn still_validates_codes() {
            let r = TokenRewriter::default().transform(TokenTransform::Remove);
            assert!(r.render("@|purple x|@").is_err());
        }

        #[test]
        fn malformed_passthrough() {
            let r = TokenRewriter::default().transform(TokenTransform::Remove);
            assert_eq!(r.render("@|red x").unwrap(), "@|red x");
        }
    }

    mod keep_mode {
        use super::*;

        #[test]
        fn tokens_preserved() {
            let r = TokenRewriter::default().transform(TokenTransform::Keep);
            let input = "a @|bold,red b|@ c";
            assert_eq!(r.render(input).unwrap(), input);
        }

        #[test]
        fn still_validates_codes() {
            let r = TokenRewriter::default().transform(TokenTransform::Keep);
            assert!(r.render("@|purple x|@").is_err());
        }
    }

    #[test]
    fn table_warnings_survive() {
        let sink = CollectDiagnostics::new();
        let table = StyleTable::from_formats_with(&["ansi", "Broken Ok=red"], &sink).unwrap();
        let r = TokenRewriter::new(table);
        assert_eq!(r.table().warnings().len(), 1);
        assert_eq!(sink.messages().len(), 1);
    }

    #[test]
    fn rewriter_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TokenRewriter>();
    }
}
