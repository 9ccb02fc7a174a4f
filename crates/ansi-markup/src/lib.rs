//! Inline `@|code text|@` markup renderer for terminal-styled log messages.
//!
//! Log call sites embed style tokens in their messages:
//!
//! ```text
//! @|code(,code)* text|@
//! ```
//!
//! and the renderer rewrites each token into ANSI escape sequences wrapping
//! the text, followed by a reset.
//!
//! # Example
//!
//! ```rust
//! use ansi_markup::{MessageRenderer, TokenRewriter};
//!
//! // Built-in codes
//! let rewriter = TokenRewriter::default();
//! let output = rewriter.render("@|green Hello|@").unwrap();
//! assert_eq!(output, "\x1b[32mHello\x1b[0m");
//!
//! // Named styles, configured once
//! let rewriter = TokenRewriter::from_formats(&["ansi", "KeyStyle=white ValueStyle=blue"]).unwrap();
//! let output = rewriter.render("@|KeyStyle name|@ = @|ValueStyle 5|@").unwrap();
//! assert_eq!(output, "\x1b[37mname\x1b[0m = \x1b[34m5\x1b[0m");
//! ```
//!
//! # Output Modes
//!
//! ```rust
//! use ansi_markup::{MessageRenderer, TokenRewriter, TokenTransform};
//!
//! // Strip tokens (plain text sinks)
//! let rewriter = TokenRewriter::default().transform(TokenTransform::Remove);
//! assert_eq!(rewriter.render("@|bold,red Warning!|@ disk full").unwrap(), "Warning! disk full");
//!
//! // Keep tokens visible (debug mode)
//! let rewriter = TokenRewriter::default().transform(TokenTransform::Keep);
//! assert_eq!(rewriter.render("@|bold,red Warning!|@").unwrap(), "@|bold,red Warning!|@");
//! ```
//!
//! # Malformed Tokens
//!
//! A token that is never closed, or that has no text after its code list,
//! leaves the entire message unchanged:
//!
//! ```rust
//! use ansi_markup::render;
//!
//! assert_eq!(render("@|bold,red Warning!").unwrap(), "@|bold,red Warning!");
//! ```
//!
//! Unknown code names are errors, see [`MarkupError`].

mod code;
mod config;
mod diagnostics;
mod error;
mod rewriter;
mod table;
mod token;
mod util;

pub use code::{style_from_codes, StyleCode};
pub use config::{CodeList, StyleConfig};
pub use diagnostics::{CollectDiagnostics, Diagnostics, LogDiagnostics};
pub use error::{MarkupError, Result};
pub use rewriter::{render, MessageRenderer, TokenRewriter, TokenTransform, RESET};
pub use table::{
    ConfigWarning, StyleTable, StyleTableBuilder, DEFAULT_BEGIN_TOKEN, DEFAULT_END_TOKEN,
};
pub use token::{Scanner, Segment, Token, CODE_TEXT_SEPARATOR};
