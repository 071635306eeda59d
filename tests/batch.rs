//! Integration tests for extraction and batch runs.
//!
//! A scripted [`TextSource`] stands in for pdfium so every page outcome is
//! controlled by the test. Input files still have to exist on disk because
//! the extractor checks the path before opening the document.

use pdf2txt::{
    extract, extract_text, parse_jobs, run_batch, ExtractionConfig, ExtractionProgressCallback,
    PageSelection, PageSeparator, Pdf2TxtError, TextDocument, TextSource,
};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

// ── Test helpers ─────────────────────────────────────────────────────────────

type Script = Vec<Result<String, String>>;

#[derive(Default)]
struct ScriptedSource {
    docs: HashMap<PathBuf, Script>,
    password: Option<String>,
}

struct ScriptedDocument<'a> {
    pages: &'a [Result<String, String>],
}

impl TextSource for ScriptedSource {
    fn open<'a>(
        &'a self,
        path: &Path,
        password: Option<&'a str>,
    ) -> Result<Box<dyn TextDocument + 'a>, Pdf2TxtError> {
        if let Some(ref expected) = self.password {
            match password {
                None => {
                    return Err(Pdf2TxtError::PasswordRequired {
                        path: path.to_path_buf(),
                    })
                }
                Some(p) if p != expected.as_str() => {
                    return Err(Pdf2TxtError::WrongPassword {
                        path: path.to_path_buf(),
                    })
                }
                Some(_) => {}
            }
        }
        match self.docs.get(path) {
            Some(pages) => Ok(Box::new(ScriptedDocument { pages })),
            None => Err(Pdf2TxtError::CorruptPdf {
                path: path.to_path_buf(),
                detail: "FormatError".into(),
            }),
        }
    }
}

impl TextDocument for ScriptedDocument<'_> {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, index: usize) -> Result<String, String> {
        self.pages[index].clone()
    }
}

struct Fixture {
    dir: TempDir,
    source: ScriptedSource,
}

impl Fixture {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
            source: ScriptedSource::default(),
        }
    }

    /// Create an input file and script its pages.
    fn pdf(&mut self, name: &str, pages: &[Result<&str, &str>]) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, b"%PDF-1.7\n").unwrap();
        let script = pages
            .iter()
            .map(|p| (*p).map(str::to_string).map_err(str::to_string))
            .collect();
        self.source.docs.insert(path.clone(), script);
        path
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

// ── extract ──────────────────────────────────────────────────────────────────

#[test]
fn multi_page_document_is_joined_with_form_feed() {
    let mut fx = Fixture::new();
    let input = fx.pdf("doc.pdf", &[Ok("alpha"), Ok("beta"), Ok("gamma")]);
    let output = fx.path("doc.txt");

    let stats = extract(&fx.source, &input, &output, &ExtractionConfig::default()).unwrap();

    assert_eq!(read(&output), "alpha\n\n\x0c\n\nbeta\n\n\x0c\n\ngamma");
    assert_eq!(stats.total_pages, 3);
    assert_eq!(stats.extracted_pages, 3);
    assert_eq!(stats.failed_pages, 0);
}

#[test]
fn failing_middle_page_becomes_placeholder() {
    let mut fx = Fixture::new();
    let input = fx.pdf(
        "doc.pdf",
        &[Ok("first"), Err("invalid content stream"), Ok("third")],
    );
    let output = fx.path("doc.txt");

    let stats = extract(&fx.source, &input, &output, &ExtractionConfig::default()).unwrap();

    let parts: Vec<String> = read(&output)
        .split("\n\n\x0c\n\n")
        .map(str::to_string)
        .collect();
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0], "first");
    assert!(parts[1].contains("Page 2"), "got: {}", parts[1]);
    assert!(parts[1].contains("invalid content stream"), "got: {}", parts[1]);
    assert_eq!(parts[2], "third");
    assert_eq!(stats.failed_pages, 1);
    assert_eq!(stats.extracted_pages, 2);
}

#[test]
fn every_page_failing_still_writes_output() {
    let mut fx = Fixture::new();
    let input = fx.pdf("doc.pdf", &[Err("e1"), Err("e2")]);
    let output = fx.path("doc.txt");

    extract(&fx.source, &input, &output, &ExtractionConfig::default()).unwrap();

    let text = read(&output);
    assert!(text.contains("Page 1") && text.contains("e1"));
    assert!(text.contains("Page 2") && text.contains("e2"));
}

#[test]
fn empty_document_writes_empty_file() {
    let mut fx = Fixture::new();
    let input = fx.pdf("empty.pdf", &[]);
    let output = fx.path("empty.txt");

    let stats = extract(&fx.source, &input, &output, &ExtractionConfig::default()).unwrap();

    assert!(output.exists());
    assert_eq!(read(&output), "");
    assert_eq!(stats.total_pages, 0);
}

#[test]
fn second_extract_overwrites_output() {
    let mut fx = Fixture::new();
    let long = fx.pdf("long.pdf", &[Ok("a much longer first document text")]);
    let short = fx.pdf("short.pdf", &[Ok("short")]);
    let output = fx.path("out.txt");
    let config = ExtractionConfig::default();

    extract(&fx.source, &long, &output, &config).unwrap();
    extract(&fx.source, &short, &output, &config).unwrap();

    assert_eq!(read(&output), "short");
}

#[test]
fn output_directories_are_created() {
    let mut fx = Fixture::new();
    let input = fx.pdf("doc.pdf", &[Ok("x")]);
    let output = fx.path("nested/deeper/doc.txt");

    extract(&fx.source, &input, &output, &ExtractionConfig::default()).unwrap();

    assert_eq!(read(&output), "x");
}

#[test]
fn missing_input_is_fatal_and_writes_nothing() {
    let fx = Fixture::new();
    let output = fx.path("out.txt");

    let err = extract(
        &fx.source,
        fx.path("missing.pdf"),
        &output,
        &ExtractionConfig::default(),
    )
    .unwrap_err();

    assert!(matches!(err, Pdf2TxtError::FileNotFound { .. }));
    assert!(!output.exists());
}

#[test]
fn unopenable_document_is_fatal_and_writes_nothing() {
    let fx = Fixture::new();
    let input = fx.path("garbage.pdf");
    std::fs::write(&input, b"not a pdf").unwrap();
    let output = fx.path("out.txt");

    let err = extract(&fx.source, &input, &output, &ExtractionConfig::default()).unwrap_err();

    assert!(matches!(err, Pdf2TxtError::CorruptPdf { .. }));
    assert!(!output.exists());
}

#[test]
fn password_is_forwarded_to_source() {
    let mut fx = Fixture::new();
    fx.source.password = Some("s3cret".into());
    let input = fx.pdf("locked.pdf", &[Ok("classified")]);

    let err = extract_text(&fx.source, &input, &ExtractionConfig::default()).unwrap_err();
    assert!(matches!(err, Pdf2TxtError::PasswordRequired { .. }));

    let wrong = ExtractionConfig::builder().password("nope").build().unwrap();
    let err = extract_text(&fx.source, &input, &wrong).unwrap_err();
    assert!(matches!(err, Pdf2TxtError::WrongPassword { .. }));

    let right = ExtractionConfig::builder().password("s3cret").build().unwrap();
    assert_eq!(extract_text(&fx.source, &input, &right).unwrap().text, "classified");
}

#[test]
fn page_selection_limits_pages_and_counts_skipped() {
    let mut fx = Fixture::new();
    let input = fx.pdf("doc.pdf", &[Ok("p1"), Ok("p2"), Ok("p3"), Ok("p4")]);
    let config = ExtractionConfig::builder()
        .pages(PageSelection::Set(vec![4, 2, 9]))
        .build()
        .unwrap();

    let out = extract_text(&fx.source, &input, &config).unwrap();

    assert_eq!(out.text, "p2\n\n\x0c\n\np4");
    assert_eq!(
        out.pages.iter().map(|p| p.page_num).collect::<Vec<_>>(),
        vec![2, 4]
    );
    assert_eq!(out.stats.skipped_pages, 1);
    assert_eq!(out.stats.total_pages, 4);
}

#[test]
fn custom_separator_is_used() {
    let mut fx = Fixture::new();
    let input = fx.pdf("doc.pdf", &[Ok("a"), Ok("b")]);
    let config = ExtractionConfig::builder()
        .page_separator(PageSeparator::Custom("\n---\n".into()))
        .build()
        .unwrap();

    assert_eq!(extract_text(&fx.source, &input, &config).unwrap().text, "a\n---\nb");
}

#[test]
fn progress_events_arrive_in_order() {
    #[derive(Default)]
    struct Recorder(Mutex<Vec<String>>);

    impl ExtractionProgressCallback for Recorder {
        fn on_batch_start(&self, total_jobs: usize) {
            self.0.lock().unwrap().push(format!("batch {total_jobs}"));
        }
        fn on_document_start(&self, _input: &Path, total_pages: usize) {
            self.0.lock().unwrap().push(format!("doc {total_pages}"));
        }
        fn on_page_complete(&self, page_num: usize, _total: usize, _len: usize) {
            self.0.lock().unwrap().push(format!("ok {page_num}"));
        }
        fn on_page_error(&self, page_num: usize, _total: usize, _error: &str) {
            self.0.lock().unwrap().push(format!("err {page_num}"));
        }
        fn on_document_complete(&self, _input: &Path, extracted: usize, total: usize) {
            self.0.lock().unwrap().push(format!("done {extracted}/{total}"));
        }
    }

    let mut fx = Fixture::new();
    let input = fx.pdf("doc.pdf", &[Ok("a"), Err("bad")]);
    let recorder = Arc::new(Recorder::default());
    let config = ExtractionConfig::builder()
        .progress_callback(recorder.clone())
        .build()
        .unwrap();
    let jobs = parse_jobs([input, fx.path("doc.txt")]).unwrap();

    run_batch(&fx.source, &jobs, &config).unwrap();

    assert_eq!(
        *recorder.0.lock().unwrap(),
        vec!["batch 1", "doc 2", "ok 1", "err 2", "done 1/2"]
    );
}

// ── run_batch ────────────────────────────────────────────────────────────────

#[test]
fn batch_processes_pairs_in_order() {
    let mut fx = Fixture::new();
    let a = fx.pdf("a.pdf", &[Ok("A1"), Ok("A2")]);
    let b = fx.pdf("b.pdf", &[Ok("B1")]);
    let jobs = parse_jobs([a, fx.path("a.txt"), b, fx.path("out/b.txt")]).unwrap();

    let report = run_batch(&fx.source, &jobs, &ExtractionConfig::default()).unwrap();

    assert_eq!(read(&fx.path("a.txt")), "A1\n\n\x0c\n\nA2");
    assert_eq!(read(&fx.path("out/b.txt")), "B1");
    assert_eq!(report.jobs.len(), 2);
    assert_eq!(report.jobs[1].output, fx.path("out/b.txt"));
    assert_eq!(report.extracted_pages(), 3);
}

#[test]
fn batch_stops_at_first_unopenable_document() {
    let mut fx = Fixture::new();
    let first = fx.pdf("first.pdf", &[Ok("kept")]);
    let last = fx.pdf("last.pdf", &[Ok("never")]);
    let jobs = parse_jobs([
        first,
        fx.path("first.txt"),
        fx.path("missing.pdf"),
        fx.path("missing.txt"),
        last,
        fx.path("last.txt"),
    ])
    .unwrap();

    let err = run_batch(&fx.source, &jobs, &ExtractionConfig::default()).unwrap_err();

    assert!(matches!(err, Pdf2TxtError::FileNotFound { .. }));
    assert_eq!(read(&fx.path("first.txt")), "kept");
    assert!(!fx.path("missing.txt").exists());
    assert!(!fx.path("last.txt").exists());
}
