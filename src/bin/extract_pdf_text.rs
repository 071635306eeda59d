//! CLI binary for pdf2txt.
//!
//! A thin shim over the library crate: pairs up positional paths into jobs,
//! maps flags to `ExtractionConfig` and reports progress.
//!
//! Exit codes: 0 on success, 2 on malformed arguments, 1 when a document
//! cannot be opened or an output cannot be written.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use pdf2txt::{
    parse_jobs, run_batch, BatchReport, ExtractionConfig, ExtractionProgressCallback,
    PageSelection, PageSeparator, PdfiumTextSource, ProgressCallback,
};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn red(s: &str) -> String {
    format!("\x1b[31m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}
fn cyan(s: &str) -> String {
    format!("\x1b[36m{s}\x1b[0m")
}

const TICKS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"];

// ── CLI progress callback using indicatif ────────────────────────────────────

/// Terminal progress callback: one bar per document, plus a log line for
/// each failed page and each finished document.
struct CliProgressCallback {
    bar: ProgressBar,
}

impl CliProgressCallback {
    fn new() -> Arc<Self> {
        let bar = ProgressBar::new(0);
        let spinner_style = ProgressStyle::with_template("{spinner:.cyan} {prefix:.bold}  {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(TICKS);

        bar.set_style(spinner_style);
        bar.set_prefix("Preparing");
        bar.set_message("Opening PDF…");
        bar.enable_steady_tick(Duration::from_millis(80));

        Arc::new(Self { bar })
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

impl ExtractionProgressCallback for CliProgressCallback {
    fn on_batch_start(&self, total_jobs: usize) {
        self.bar.println(format!(
            "{} {}",
            cyan("◆"),
            bold(&format!("Extracting text from {total_jobs} document(s)…"))
        ));
    }

    fn on_document_start(&self, input: &Path, total_pages: usize) {
        let progress_style = ProgressStyle::with_template(
            "{spinner:.cyan} {prefix:.bold}  \
             [{bar:42.green/238}] {pos:>3}/{len} pages  ⏱ {elapsed_precise}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏  ")
        .tick_strings(TICKS);

        self.bar.set_style(progress_style);
        self.bar.set_length(total_pages as u64);
        self.bar.set_position(0);
        self.bar.set_prefix(display_name(input));
        self.bar.set_message("");
    }

    fn on_page_complete(&self, _page_num: usize, _total_pages: usize, _text_len: usize) {
        self.bar.inc(1);
    }

    fn on_page_error(&self, page_num: usize, total_pages: usize, error: &str) {
        // Truncate very long error messages to keep output tidy.
        let msg = if error.chars().count() > 80 {
            format!("{}\u{2026}", error.chars().take(79).collect::<String>())
        } else {
            error.to_string()
        };

        self.bar.println(format!(
            "  {} Page {:>3}/{:<3}  {}",
            red("✗"),
            page_num,
            total_pages,
            red(&msg),
        ));
        self.bar.inc(1);
    }

    fn on_document_complete(&self, input: &Path, extracted: usize, total_pages: usize) {
        let mark = if extracted == total_pages {
            green("✓")
        } else {
            cyan("⚠")
        };
        self.bar.println(format!(
            "  {} {}  {}",
            mark,
            display_name(input),
            dim(&format!("{extracted}/{total_pages} pages")),
        ));
    }
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # One document
  extract_pdf_text report.pdf report.txt

  # Several documents in one run, processed in order
  extract_pdf_text a.pdf out/a.txt b.pdf out/b.txt

  # First ten pages of an encrypted file
  extract_pdf_text --pages 1-10 --password secret locked.pdf locked.txt

  # Machine-readable summary
  extract_pdf_text --json a.pdf a.txt > report.json

  # Paths that start with a dash go after "--"
  extract_pdf_text -- -draft.pdf -draft.txt

OUTPUT:
  UTF-8 text, pages joined by "\n\n\f\n\n". A page whose text cannot be
  extracted is replaced by "[Page N: text extraction failed: <error>]".
  Existing output files are overwritten; missing directories are created.

EXIT CODES:
  0  every document was processed
  2  malformed arguments (paths must come in <IN> <OUT> pairs)
  1  a document could not be opened or an output could not be written;
     documents before it keep their output, later ones are not processed

ENVIRONMENT VARIABLES:
  PDFIUM_LIB_PATH   Path to libpdfium; otherwise ./ and the system path are searched
  RUST_LOG          Overrides the log filter (e.g. pdf2txt=debug)
"#;

/// Extract embedded text from PDF files into plain-text files.
#[derive(Parser, Debug)]
#[command(
    name = "extract_pdf_text",
    version,
    about = "Extract embedded text from PDF files into plain-text files",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Input PDF and output text file pairs: <IN> <OUT> [<IN> <OUT> ...].
    /// Put paths starting with '-' after `--`.
    #[arg(value_name = "PATH", required = true, num_args = 1..)]
    paths: Vec<PathBuf>,

    /// PDF user password, applied to every input.
    #[arg(long, env = "EXTRACT_PDF_TEXT_PASSWORD")]
    password: Option<String>,

    /// Page selection: all, 5, 3-15, or 1,3,5,7.
    #[arg(long, env = "EXTRACT_PDF_TEXT_PAGES", default_value = "all")]
    pages: String,

    /// Page separator: formfeed (default) or a custom string; \n \t \f escapes are honoured.
    #[arg(long, env = "EXTRACT_PDF_TEXT_SEPARATOR", default_value = "formfeed")]
    separator: String,

    /// Print a JSON batch report to stdout.
    #[arg(long, env = "EXTRACT_PDF_TEXT_JSON")]
    json: bool,

    /// Disable progress bar.
    #[arg(long, env = "EXTRACT_PDF_TEXT_NO_PROGRESS")]
    no_progress: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "EXTRACT_PDF_TEXT_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "EXTRACT_PDF_TEXT_QUIET")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let jobs = match parse_jobs(cli.paths.clone()) {
        Ok(jobs) => jobs,
        Err(e) => Cli::command()
            .error(ErrorKind::WrongNumberOfValues, e.to_string())
            .exit(),
    };

    // Flag values are checked before the engine is loaded, so a bad
    // --pages or --separator is a usage error like a bad path count.
    let mut config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => Cli::command()
            .error(ErrorKind::ValueValidation, format!("{e:#}"))
            .exit(),
    };

    // ── Logging setup ────────────────────────────────────────────────────
    // Suppress INFO-level library logs when the progress bar is active;
    // the bar provides all the feedback that matters to the user.
    let show_progress = !cli.quiet && !cli.no_progress && !cli.json;
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet || show_progress {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    let source = PdfiumTextSource::bind().context("Failed to load the PDF engine")?;

    let progress = show_progress.then(CliProgressCallback::new);
    config.progress_callback = progress.clone().map(|p| p as ProgressCallback);

    let result = run_batch(&source, &jobs, &config);
    if let Some(ref p) = progress {
        p.finish();
    }
    let report = result.context("Extraction failed")?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialise report")?
        );
    } else if !cli.quiet {
        print_summary(&report);
    }

    Ok(())
}

fn print_summary(report: &BatchReport) {
    let failed = report.failed_pages();
    eprintln!(
        "{}  {} document(s)  {} pages  {}ms",
        if failed == 0 { green("✔") } else { cyan("⚠") },
        bold(&report.jobs.len().to_string()),
        report.extracted_pages(),
        report.total_duration_ms,
    );
    if failed > 0 {
        eprintln!(
            "   {} page(s) replaced by placeholders",
            red(&failed.to_string())
        );
    }
}

/// Map CLI args to `ExtractionConfig`. The progress callback is attached later.
fn build_config(cli: &Cli) -> Result<ExtractionConfig> {
    let mut builder = ExtractionConfig::builder()
        .pages(parse_pages(&cli.pages)?)
        .page_separator(parse_separator(&cli.separator));

    if let Some(ref pwd) = cli.password {
        builder = builder.password(pwd.clone());
    }
    builder.build().context("Invalid configuration")
}

/// Parse `--pages` string into `PageSelection`.
fn parse_pages(s: &str) -> Result<PageSelection> {
    let s = s.trim().to_lowercase();

    if s == "all" {
        return Ok(PageSelection::All);
    }

    if let Some((start, end)) = s.split_once('-') {
        let start: usize = start
            .trim()
            .parse()
            .context("Invalid start page in range")?;
        let end: usize = end.trim().parse().context("Invalid end page in range")?;
        return Ok(PageSelection::Range(start, end));
    }

    if s.contains(',') {
        let pages = s
            .split(',')
            .map(|p| {
                p.trim()
                    .parse::<usize>()
                    .with_context(|| format!("Invalid page number: '{}'", p.trim()))
            })
            .collect::<Result<Vec<_>>>()?;
        return Ok(PageSelection::Set(pages));
    }

    let page: usize = s.parse().context("Invalid page number")?;
    Ok(PageSelection::Single(page))
}

/// Parse `--separator` string into `PageSeparator`.
fn parse_separator(s: &str) -> PageSeparator {
    match s.to_lowercase().as_str() {
        "formfeed" | "ff" => PageSeparator::FormFeed,
        _ => PageSeparator::Custom(unescape(s)),
    }
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('f') => out.push('\x0c'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
