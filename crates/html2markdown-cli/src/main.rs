//! CLI binary for html2markdown.
//!
//! A thin shim over the library crate that maps CLI flags
//! to `MarkdownOptions`, picks a scheme, and prints results.

use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use html2markdown::{
    CodeBlockStyle, Converter, GithubFlavored, HeadingStyle, Markdown, MarkdownOptions,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

// ── CLI definition ───────────────────────────────────────────────────────────

/// Convert HTML to Markdown.
///
/// Reads the given files (or stdin when none are given) and writes the
/// Markdown to stdout. With --in-place, converts every .html file in a
/// directory into a sibling .markdown file and deletes the original.
#[derive(Debug, Parser)]
#[command(name = "html2md", version, about)]
struct Cli {
    /// HTML files to convert
    #[arg(value_name = "FILE", conflicts_with = "in_place")]
    files: Vec<PathBuf>,

    /// Convert all .html files in DIR to .markdown files, removing the sources
    #[arg(long, value_name = "DIR")]
    in_place: Option<PathBuf>,

    /// Markdown dialect
    #[arg(long, value_enum, default_value_t = SchemeArg::Markdown)]
    scheme: SchemeArg,

    /// Code block style (defaults to the scheme's own choice)
    #[arg(long, value_enum)]
    code_block_style: Option<CodeBlockArg>,

    /// Heading style
    #[arg(long, value_enum, default_value_t = HeadingArg::Atx)]
    heading_style: HeadingArg,

    /// Bullet list marker
    #[arg(long, value_name = "CHAR", default_value_t = '-')]
    bullet: char,

    /// Emit LF line endings instead of CRLF
    #[arg(long)]
    lf: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SchemeArg {
    Markdown,
    Github,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CodeBlockArg {
    Indented,
    Fenced,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HeadingArg {
    Atx,
    Setext,
}

// ── Flag mapping ─────────────────────────────────────────────────────────────

impl Cli {
    fn options(&self) -> MarkdownOptions {
        let default_code_blocks = match self.scheme {
            SchemeArg::Markdown => CodeBlockStyle::Indented,
            SchemeArg::Github => CodeBlockStyle::Fenced,
        };
        MarkdownOptions {
            heading_style: match self.heading_style {
                HeadingArg::Atx => HeadingStyle::Atx,
                HeadingArg::Setext => HeadingStyle::Setext,
            },
            bullet_list_marker: self.bullet,
            code_block_style: match self.code_block_style {
                Some(CodeBlockArg::Indented) => CodeBlockStyle::Indented,
                Some(CodeBlockArg::Fenced) => CodeBlockStyle::Fenced,
                None => default_code_blocks,
            },
            ..Default::default()
        }
    }

    fn converter(&self) -> Result<Converter> {
        let options = self.options();
        let converter = match self.scheme {
            SchemeArg::Markdown => Converter::with_scheme(&Markdown::with_options(options)),
            SchemeArg::Github => Converter::with_scheme(&GithubFlavored::with_options(options)),
        };
        converter.context("Failed to build converter")
    }

    fn finish(&self, markdown: String) -> String {
        if self.lf {
            markdown.replace("\r\n", "\n")
        } else {
            markdown
        }
    }
}

// ── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let converter = cli.converter()?;
    debug!("Using {:?} scheme with {} replacers", cli.scheme, converter.replacer_count());

    if let Some(dir) = &cli.in_place {
        let written = converter
            .convert_files_in_place(dir)
            .with_context(|| format!("Failed to convert files in {}", dir.display()))?;
        for path in written {
            eprintln!("{}", path.display());
        }
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.files.is_empty() {
        let mut html = String::new();
        io::stdin()
            .read_to_string(&mut html)
            .context("Failed to read HTML from stdin")?;
        writeln!(out, "{}", cli.finish(converter.convert(&html)))?;
        return Ok(());
    }

    for path in &cli.files {
        let markdown = converter
            .convert_file(path)
            .with_context(|| format!("Failed to convert {}", path.display()))?;
        writeln!(out, "{}", cli.finish(markdown))?;
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
