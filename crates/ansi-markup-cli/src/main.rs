//! `ansi-render`: renders `@|code text|@` markup line by line.
//!
//! Reads stdin, writes stdout. Each line is rendered as one message.
//!
//! ```text
//! $ echo '@|KeyStyle user|@ = @|ValueStyle 42|@' | ansi-render --styles 'KeyStyle=white ValueStyle=blue'
//! ```

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use ansi_markup::{
    Diagnostics, MessageRenderer, StyleConfig, StyleTable, TokenRewriter, TokenTransform,
};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

/// Render inline @|code text|@ style markup as ANSI escape sequences.
#[derive(Debug, Parser)]
#[command(name = "ansi-render")]
#[command(version)]
struct Cli {
    /// Style assignments, e.g. "KeyStyle=white,bold ValueStyle=blue"
    #[arg(short, long)]
    styles: Option<String>,

    /// YAML file with begin_token, end_token and styles
    #[arg(short, long, conflicts_with = "styles")]
    config: Option<PathBuf>,

    /// What to do with tokens
    #[arg(short, long, value_enum, default_value_t = Mode::Apply)]
    mode: Mode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Emit ANSI escape sequences
    Apply,
    /// Emit the token text only
    Remove,
    /// Leave tokens untouched
    Keep,
}

impl From<Mode> for TokenTransform {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Apply => TokenTransform::Apply,
            Mode::Remove => TokenTransform::Remove,
            Mode::Keep => TokenTransform::Keep,
        }
    }
}

/// Prints configuration warnings to stderr.
struct StderrDiagnostics;

impl Diagnostics for StderrDiagnostics {
    fn warn(&self, message: &str) {
        eprintln!("warning: {}", message);
    }
}

fn build_rewriter(cli: &Cli, diagnostics: &dyn Diagnostics) -> Result<TokenRewriter> {
    let table = if let Some(path) = &cli.config {
        let yaml = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        StyleConfig::from_yaml(&yaml)
            .and_then(StyleConfig::into_table)
            .with_context(|| format!("invalid style configuration in {}", path.display()))?
    } else if let Some(styles) = &cli.styles {
        StyleTable::parse_with(styles, diagnostics).context("invalid --styles")?
    } else {
        StyleTable::default()
    };

    Ok(TokenRewriter::new(table).transform(cli.mode.into()))
}

fn run<R: BufRead, W: Write>(rewriter: &TokenRewriter, input: R, mut output: W) -> Result<()> {
    let mut rendered = String::new();
    for (index, line) in input.lines().enumerate() {
        let line = line.context("failed to read input")?;
        rendered.clear();
        rewriter
            .render_into(&line, &mut rendered)
            .with_context(|| format!("line {}", index + 1))?;
        writeln!(output, "{}", rendered)?;
    }
    output.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let rewriter = build_rewriter(&cli, &StderrDiagnostics)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&rewriter, stdin.lock(), stdout.lock())
}
