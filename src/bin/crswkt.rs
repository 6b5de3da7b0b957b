//! Command-line interface for crswkt
//! Parses a file holding one WKT coordinate system definition and prints it in an export format.
//!
//! Usage:
//!   crswkt `<path>` [--format `<format>`] [--lax] [--log-level `<level>`]  - Parse and print
//!   crswkt `<path>` --tokens                                             - Print the token stream
//!   crswkt --list-formats                                                - List output formats

use clap::{Arg, ArgAction, Command};
use crswkt::diagnostics::{DiagnosticSink, Diagnostics, TracingSink};
use crswkt::formats::FormatRegistry;
use crswkt::lexing::tokenize_with_positions;
use crswkt::{ParserOptions, WktParser};
use std::process;
use std::str::FromStr;
use std::sync::Arc;
use tracing::Level;

fn main() {
    let matches = Command::new("crswkt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse OGC WKT coordinate reference system definitions")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the WKT file")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (see --list-formats)")
                .default_value("json-pretty"),
        )
        .arg(
            Arg::new("lax")
                .long("lax")
                .help("Allow '#' comments running to the end of the line")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .help("Most verbose diagnostics written to stderr (error, warn, info, debug, trace)")
                .default_value("warn"),
        )
        .arg(
            Arg::new("tokens")
                .long("tokens")
                .help("Print the token stream as JSON instead of the parsed tree")
                .action(ArgAction::SetTrue),
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

    let level_name = matches
        .get_one::<String>("log-level")
        .map(String::as_str)
        .unwrap_or("warn");
    let level = Level::from_str(level_name).unwrap_or_else(|_| {
        eprintln!("Invalid log level '{}'", level_name);
        process::exit(1);
    });
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let Some(path) = matches.get_one::<String>("path") else {
        eprintln!("A path to a WKT file is required");
        process::exit(1);
    };
    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading '{}': {}", path, e);
        process::exit(1);
    });

    let strict = !matches.get_flag("lax");
    if matches.get_flag("tokens") {
        handle_tokens_command(&source, strict);
        return;
    }

    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("json-pretty");
    handle_parse_command(&source, strict, format);
}

/// Parse the source and print it in the requested format
fn handle_parse_command(source: &str, strict: bool, format: &str) {
    let registry = FormatRegistry::with_defaults();
    if !registry.has(format) {
        eprintln!("Format '{}' not found", format);
        eprintln!("Available formats: {}", registry.list_formats().join(", "));
        process::exit(1);
    }

    let options = ParserOptions::new()
        .strict(strict)
        .diagnostics(Arc::new(TracingSink));
    let cs = WktParser::with_options(options)
        .parse(source)
        .unwrap_or_else(|e| {
            eprintln!("Parse error: {}", e);
            process::exit(1);
        });

    let output = registry.serialize(&cs, format).unwrap_or_else(|e| {
        eprintln!("Error formatting output: {}", e);
        process::exit(1);
    });
    println!("{}", output.trim_end());
}

/// Print the token stream, as the parser would see it
fn handle_tokens_command(source: &str, strict: bool) {
    let sink: Arc<dyn DiagnosticSink> = Arc::new(TracingSink);
    let diagnostics = Diagnostics::new(Some(sink));
    let tokens = tokenize_with_positions(source, strict, &diagnostics).unwrap_or_else(|e| {
        eprintln!("Parse error: {}", e);
        process::exit(1);
    });
    let json = serde_json::to_string_pretty(&tokens).unwrap_or_else(|e| {
        eprintln!("Error formatting tokens: {}", e);
        process::exit(1);
    });
    println!("{}", json);
}

fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available output formats:\n");

    for name in registry.list_formats() {
        println!("  {}", name);
        if let Some(formatter) = registry.get(&name) {
            println!("    {}", formatter.description());
        }
        println!();
    }
}
