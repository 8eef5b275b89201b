//! Reflow a fragment document into annotated plain text
//!
//! Reads per-page text fragments (e.g. a pdf.js `getTextContent()` dump) as
//! JSON, reconstructs lines, columns and paragraphs, and writes the result.
//!
//! Usage:
//!   cargo run --release --bin reflow_text -- fragments.json
//!   cargo run --release --bin reflow_text -- fragments.json --config layout.json --output out.txt
//!   cargo run --release --bin reflow_text -- fragments.json --json
//!   cargo run --release --bin reflow_text -- fragments.json --page 2

use pdf_reflow::converters::{JsonConverter, OutputConverter, PlainTextConverter};
use pdf_reflow::document::FragmentDocument;
use pdf_reflow::pipeline::{LayoutConfig, LayoutPipeline};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

struct ReflowArgs {
    input: PathBuf,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
    page: Option<usize>,
    json: bool,
    verbose: bool,
}

impl ReflowArgs {
    fn from_args() -> Option<Self> {
        let args: Vec<String> = std::env::args().collect();
        let mut input = None;
        let mut config = None;
        let mut output = None;
        let mut page = None;
        let mut json = false;
        let mut verbose = false;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--config" => {
                    i += 1;
                    if i < args.len() {
                        config = Some(PathBuf::from(&args[i]));
                    }
                },
                "--output" | "-o" => {
                    i += 1;
                    if i < args.len() {
                        output = Some(PathBuf::from(&args[i]));
                    }
                },
                "--page" | "-p" => {
                    i += 1;
                    if i < args.len() {
                        page = args[i].parse().ok();
                        if page.is_none() {
                            eprintln!("Invalid page number: {}", args[i]);
                            return None;
                        }
                    }
                },
                "--json" => {
                    json = true;
                },
                "--verbose" | "-v" => {
                    verbose = true;
                },
                other => {
                    if input.is_none() && !other.starts_with('-') {
                        input = Some(PathBuf::from(other));
                    } else {
                        eprintln!("Ignoring unknown argument: {}", other);
                    }
                },
            }
            i += 1;
        }

        Some(Self {
            input: input?,
            config,
            output,
            page,
            json,
            verbose,
        })
    }
}

fn print_usage() {
    eprintln!("Usage: reflow_text <fragments.json> [--config <layout.json>] [--output <file>] [--page <n>] [--json] [--verbose]");
}

fn run(args: &ReflowArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => LayoutConfig::from_path(path)?,
        None => LayoutConfig::default(),
    };

    let start = Instant::now();
    let document = FragmentDocument::open(&args.input)?;
    let pipeline = LayoutPipeline::with_config(config);
    let pages = match args.page {
        Some(number) => vec![pipeline.process_page(number, document.page(number)?)],
        None => pipeline.process_document(&document),
    };

    let converter: Box<dyn OutputConverter> = if args.json {
        Box::new(JsonConverter::pretty())
    } else {
        Box::new(PlainTextConverter::new())
    };
    let rendered = converter.convert(&pages)?;

    match &args.output {
        Some(path) => {
            let mut file = File::create(path)?;
            file.write_all(rendered.as_bytes())?;
        },
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(rendered.as_bytes())?;
            handle.write_all(b"\n")?;
        },
    }

    if args.verbose {
        let paragraphs: usize = pages.iter().map(|p| p.paragraph_count()).sum();
        eprintln!(
            "{}: {} page(s), {} paragraph(s), {} output via {} in {:.1}ms",
            args.input.display(),
            pages.len(),
            paragraphs,
            rendered.len(),
            converter.name(),
            start.elapsed().as_secs_f64() * 1000.0
        );
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let Some(args) = ReflowArgs::from_args() else {
        print_usage();
        std::process::exit(2);
    };

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
