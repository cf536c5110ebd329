//! bankform CLI - bankruptcy form parsing tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use bankform::{
    render, FormClassifier, FormParser, JsonFormat, LineBuilder, ParseResult, SchemaRegistry,
    TokenDump,
};

#[derive(Parser)]
#[command(name = "bankform")]
#[command(version)]
#[command(about = "Parse bankruptcy form token dumps to JSON", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse one token dump to JSON
    Parse {
        /// Input token dump (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Skip classification and parse as this form (e.g. 106D)
        #[arg(long, value_name = "ID")]
        form: Option<String>,

        /// Split a multi-form packet and parse every form in it
        #[arg(long, conflicts_with = "form")]
        packet: bool,

        /// Schema registry file to use instead of the built-in forms
        #[arg(long, value_name = "FILE", env = "BANKFORM_SCHEMAS")]
        schemas: Option<PathBuf>,
    },

    /// Parse many token dumps in parallel
    Batch {
        /// Input token dumps (JSON)
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: PathBuf,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Schema registry file to use instead of the built-in forms
        #[arg(long, value_name = "FILE", env = "BANKFORM_SCHEMAS")]
        schemas: Option<PathBuf>,
    },

    /// Show which form each page of a token dump belongs to
    Classify {
        /// Input token dump (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Schema registry file to use instead of the built-in forms
        #[arg(long, value_name = "FILE", env = "BANKFORM_SCHEMAS")]
        schemas: Option<PathBuf>,
    },

    /// List the forms a registry knows
    Forms {
        /// Schema registry file to use instead of the built-in forms
        #[arg(long, value_name = "FILE", env = "BANKFORM_SCHEMAS")]
        schemas: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            input,
            output,
            compact,
            form,
            packet,
            schemas,
        } => cmd_parse(
            &input,
            output.as_deref(),
            compact,
            form.as_deref(),
            packet,
            schemas.as_deref(),
        ),
        Commands::Batch {
            inputs,
            output,
            compact,
            schemas,
        } => cmd_batch(&inputs, &output, compact, schemas.as_deref()),
        Commands::Classify { input, schemas } => cmd_classify(&input, schemas.as_deref()),
        Commands::Forms { schemas } => cmd_forms(schemas.as_deref()),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Load a custom registry, if one was given.
fn load_registry(schemas: Option<&Path>) -> bankform::Result<Option<SchemaRegistry>> {
    let registry = schemas.map(SchemaRegistry::load).transpose()?;
    if let (Some(path), Some(registry)) = (schemas, &registry) {
        log::debug!("Loaded {} schemas from {}", registry.len(), path.display());
    }
    Ok(registry)
}

fn parser_for(registry: Option<&SchemaRegistry>) -> FormParser<'_> {
    match registry {
        Some(registry) => FormParser::with_registry(registry),
        None => FormParser::new(),
    }
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

fn report_warnings(label: &str, result: &ParseResult) {
    for warning in &result.warnings {
        eprintln!("{} {}: {}", "Warning".yellow(), label, warning);
    }
    if !result.fully_matched {
        eprintln!(
            "{} {}: required fields or totals were not found",
            "Partial".yellow().bold(),
            label
        );
    }
}

fn write_output(output: Option<&Path>, json: &str) -> CliResult {
    if let Some(path) = output {
        fs::write(path, json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }
    Ok(())
}

fn cmd_parse(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    form: Option<&str>,
    packet: bool,
    schemas: Option<&Path>,
) -> CliResult {
    let registry = load_registry(schemas)?;
    let parser = parser_for(registry.as_ref());
    let dump = TokenDump::load(input)?;

    let json = if packet {
        let packet = parser.parse_packet(&dump)?;
        for result in &packet.forms {
            report_warnings(&result.form_type, result);
        }
        if !packet.unclassified_pages.is_empty() {
            eprintln!(
                "{} pages {:?} matched no known form",
                "Skipped".yellow(),
                packet.unclassified_pages
            );
        }
        render::packet_to_json(&packet, json_format(compact))?
    } else {
        let result = match form {
            Some(id) => parser.parse_as(&dump, id)?,
            None => parser.parse(&dump)?,
        };
        report_warnings(&result.form_type, &result);
        render::to_json(&result, json_format(compact))?
    };

    write_output(output, &json)
}

fn cmd_batch(inputs: &[PathBuf], output: &Path, compact: bool, schemas: Option<&Path>) -> CliResult {
    let registry = load_registry(schemas)?;
    let parser = parser_for(registry.as_ref());

    fs::create_dir_all(output)?;

    let pb = ProgressBar::new(inputs.len() as u64 * 2);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    pb.set_message("Loading token dumps...");
    let mut dumps = Vec::with_capacity(inputs.len());
    let mut failed = Vec::new();
    let mut names = Vec::with_capacity(inputs.len());
    for input in inputs {
        match TokenDump::load(input) {
            Ok(dump) => {
                dumps.push(dump);
                names.push(input);
            }
            Err(e) => failed.push(format!("{}: {}", input.display(), e)),
        }
        pb.inc(1);
    }

    pb.set_message("Parsing forms...");
    let results = parser.parse_batch(&dumps);

    let mut saved = Vec::new();
    for (input, result) in names.into_iter().zip(results) {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        match result {
            Ok(result) => {
                let path = output.join(format!("{}.json", stem));
                fs::write(&path, render::to_json(&result, json_format(compact))?)?;
                saved.push((path, result));
            }
            Err(e) => failed.push(format!("{}: {}", input.display(), e)),
        }
        pb.inc(1);
    }
    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    for (path, result) in &saved {
        let status = if result.fully_matched && !result.has_warnings() {
            "ok".green()
        } else {
            format!("{} warnings", result.warnings.len()).as_str().yellow()
        };
        println!(
            "  {} {} ({}, {})",
            "├─".dimmed(),
            path.display(),
            result.form_type,
            status
        );
    }
    for failure in &failed {
        eprintln!("  {} {}", "✗".red(), failure);
    }

    println!(
        "\n{} {} parsed, {} failed",
        "Done!".green().bold(),
        saved.len(),
        failed.len()
    );

    Ok(())
}

fn cmd_classify(input: &Path, schemas: Option<&Path>) -> CliResult {
    let registry = load_registry(schemas)?;
    let parser = parser_for(registry.as_ref());
    let dump = TokenDump::load(input)?;

    let lines = LineBuilder::new(parser.options()).build(&dump)?;
    let classifier = FormClassifier::new(parser.registry());

    println!("{}", "Page Classification".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for (page, schema) in classifier.classify_pages(&lines) {
        match schema {
            Some(schema) => println!("{} {}: {} ({})", "Page".bold(), page, schema.id, schema.title),
            None => println!("{} {}: {}", "Page".bold(), page, "unclassified".dimmed()),
        }
    }

    Ok(())
}

fn cmd_forms(schemas: Option<&Path>) -> CliResult {
    let registry = load_registry(schemas)?;
    let registry = registry.as_ref().unwrap_or_else(|| SchemaRegistry::builtin());

    println!("{}", "Known Forms".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for schema in registry.schemas() {
        println!(
            "{}: {} {}",
            schema.id.bold(),
            schema.title,
            format!("(v{})", schema.version).as_str().dimmed()
        );
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "bankform".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Bankruptcy form layout parser");
    println!();
    println!("Library: {}", bankform::version());
    println!("License: MIT");
}
