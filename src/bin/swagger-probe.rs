//! Swagger Probe CLI
//!
//! Command-line interface for querying Swagger documents: base URL,
//! operation lookup, example extraction, and document linting.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use swagger_probe::{lint, load_api_auto, Api, FileStatus};

#[derive(Parser)]
#[command(name = "swagger-probe")]
#[command(about = "Look up Swagger operations and example payloads")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the base URL (scheme + host) a document declares
    Domain {
        /// Document source: file path or URL (http:// or https://)
        spec: String,
    },

    /// Find the operation registered for a method and request path
    Search {
        /// Document source: file path or URL
        spec: String,

        /// HTTP method (any case)
        method: String,

        /// Concrete request path, e.g. /pets/42
        uri: String,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Print the example bodies attached to an operation's parameters
    Examples {
        /// Document source: file path or URL
        spec: String,

        /// HTTP method (any case)
        method: String,

        /// Concrete request path, e.g. /pets/42
        uri: String,

        /// Output a JSON array instead of one body per line
        #[arg(long)]
        json: bool,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Lint document files for errors (syntax, broken refs, missing examples)
    Lint {
        /// File or directory to lint
        path: PathBuf,

        /// Output format: text (default) or json
        #[arg(long, default_value = "text")]
        format: String,

        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,

        /// Suppress progress output, only show errors
        #[arg(long, short)]
        quiet: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Domain { spec } => run_domain(&spec),

        Commands::Search {
            spec,
            method,
            uri,
            pretty,
        } => run_search(&spec, &method, &uri, pretty),

        Commands::Examples {
            spec,
            method,
            uri,
            json,
            output,
        } => run_examples(&spec, &method, &uri, json, output),

        Commands::Lint {
            path,
            format,
            strict,
            quiet,
        } => run_lint(&path, &format, strict, quiet),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => ExitCode::from(code),
    }
}

fn load(spec_source: &str) -> Result<Api, u8> {
    load_api_auto(spec_source).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })
}

fn run_domain(spec_source: &str) -> Result<(), u8> {
    let api = load(spec_source)?;
    println!("{}", api.domain());
    Ok(())
}

fn run_search(spec_source: &str, method: &str, uri: &str, pretty: bool) -> Result<(), u8> {
    let api = load(spec_source)?;

    let operation = api.search(method, uri).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    let json_output = if pretty {
        serde_json::to_string_pretty(&operation)
    } else {
        serde_json::to_string(&operation)
    }
    .map_err(|e| {
        eprintln!("Error serializing output: {}", e);
        2u8
    })?;

    println!("{}", json_output);
    Ok(())
}

fn run_examples(
    spec_source: &str,
    method: &str,
    uri: &str,
    json: bool,
    output: Option<PathBuf>,
) -> Result<(), u8> {
    let api = load(spec_source)?;

    let bodies = api.examples(method, uri).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    let rendered = if json {
        serde_json::to_string(&bodies).map_err(|e| {
            eprintln!("Error serializing output: {}", e);
            2u8
        })?
    } else {
        bodies.join("\n")
    };

    match output {
        Some(path) => {
            std::fs::write(&path, &rendered).map_err(|e| {
                eprintln!("Error writing to {}: {}", path.display(), e);
                3u8
            })?;
        }
        None => {
            println!("{}", rendered);
        }
    }

    Ok(())
}

fn run_lint(path: &Path, format: &str, strict: bool, quiet: bool) -> Result<(), u8> {
    use swagger_probe::Severity;

    if !path.exists() {
        eprintln!("Error: path not found: {}", path.display());
        return Err(2);
    }

    let result = lint(path, strict);

    if format == "json" {
        match serde_json::to_string_pretty(&result) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("Error serializing output: {}", e);
                return Err(2);
            }
        }
    } else {
        // Text output
        if !quiet {
            println!("Linting {} ...\n", path.display());
        }

        for file_result in &result.results {
            let status_icon = match file_result.status {
                FileStatus::Ok => "\x1b[32m✓\x1b[0m",
                FileStatus::Warning => "\x1b[33m⚠\x1b[0m",
                FileStatus::Error => "\x1b[31m✗\x1b[0m",
            };

            if !quiet || file_result.status != FileStatus::Ok {
                println!("  {} {}", status_icon, file_result.file.display());
            }

            for diag in &file_result.diagnostics {
                let color = match diag.severity {
                    Severity::Error => "\x1b[31m",
                    Severity::Warning => "\x1b[33m",
                };
                if !quiet || diag.severity == Severity::Error {
                    println!(
                        "    {}{}[{}]\x1b[0m: {} - {}",
                        color,
                        match diag.severity {
                            Severity::Error => "error",
                            Severity::Warning => "warning",
                        },
                        diag.code,
                        diag.path,
                        diag.message
                    );
                }
            }
        }

        println!();
        if result.is_ok() && (!strict || result.warnings == 0) {
            println!(
                "\x1b[32m✓ {} files checked, all passed\x1b[0m",
                result.files_checked
            );
        } else {
            println!(
                "\x1b[31m✗ {} files checked: {} passed, {} failed ({} errors, {} warnings)\x1b[0m",
                result.files_checked, result.passed, result.failed, result.errors, result.warnings
            );
        }
    }

    if result.is_ok() && (!strict || result.warnings == 0) {
        Ok(())
    } else {
        Err(1)
    }
}
