//! Command-line interface for enumchron
//! Parses enumeration/chronology captions, one per line, and writes one record per caption.
//!
//! Usage:
//!   enumchron [`<path>`] [--format `<format>`] [--config `<file>`]   - Parse captions from a file or stdin
//!   enumchron --list-formats                                         - List the output formats

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use clap::{Arg, ArgAction, Command};
use enumchron::formats::{render, CaptionRecord, OutputFormat};
use enumchron::settings::{Loader, Settings};
use enumchron::CaptionParser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const LOCAL_CONFIG: &str = "enumchron.toml";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let matches = Command::new("enumchron")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse enumeration/chronology captions from serial holdings")
        .arg(
            Arg::new("path")
                .help("File with one caption per line (reads stdin when absent or '-')")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: json, yaml or tag (overrides the configuration)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults and ./enumchron.toml"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let settings = load_settings(
        matches.get_one::<String>("config").map(String::as_str),
        matches.get_one::<String>("format").map(String::as_str),
    )
    .unwrap_or_else(|e| {
        eprintln!("Configuration error: {e}");
        std::process::exit(1);
    });

    let path = matches.get_one::<String>("path").map(String::as_str);
    if let Err(e) = handle_parse_command(path, &settings) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn load_settings(config: Option<&str>, format: Option<&str>) -> Result<Settings, String> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(config) = config {
        loader = loader.with_file(config);
    }
    if let Some(format) = format {
        let format: OutputFormat = format.parse().map_err(|e| format!("{e}"))?;
        loader = loader
            .set_override("output.format", format.name())
            .map_err(|e| e.to_string())?;
    }
    loader.build().map_err(|e| e.to_string())
}

/// Parse every caption of the input and write the records to stdout
fn handle_parse_command(path: Option<&str>, settings: &Settings) -> io::Result<()> {
    let input: Box<dyn BufRead> = match path {
        None | Some("-") => Box::new(BufReader::new(io::stdin())),
        Some(path) => Box::new(BufReader::new(File::open(Path::new(path)).map_err(|e| {
            io::Error::new(e.kind(), format!("cannot open {path}: {e}"))
        })?)),
    };

    let parser = CaptionParser::new();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let (mut parsed, mut failed) = (0usize, 0usize);

    for line in input.lines() {
        let line = line?;
        if settings.input.skip_blank_lines && line.trim().is_empty() {
            continue;
        }

        let record = CaptionRecord::parse(&parser, &line);
        if record.is_parsed() {
            parsed += 1;
        } else {
            failed += 1;
            if !settings.output.include_failures {
                warn!(
                    caption = %record.caption,
                    error = record.error.as_deref().unwrap_or_default(),
                    "caption did not parse"
                );
                continue;
            }
        }

        let rendered = render(&record, settings.output.format, settings.output.pretty)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        out.write_all(rendered.as_bytes())?;
    }

    debug!(parsed, failed, "finished");
    out.flush()
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available output formats:\n");
    for format in OutputFormat::ALL {
        println!("  {format}");
    }
}
