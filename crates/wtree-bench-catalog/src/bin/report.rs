//! Catalog report CLI.
//!
//! Prints or writes the parameter catalog, optionally expanding a shorthand
//! code triple first.
//!
//! # Usage
//!
//! ```bash
//! # Print the catalog as JSON
//! cargo run -p wtree-bench-catalog --bin catalog-report -- --format json
//!
//! # Write both formats next to catalog.{json,md}
//! cargo run -p wtree-bench-catalog --bin catalog-report -- --format both --output catalog
//!
//! # Expand a (type, generator, size) shorthand triple
//! cargo run -p wtree-bench-catalog --bin catalog-report -- --expand a,u,m
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use wtree_bench_catalog::reports::{CatalogReport, ReportFormat};
use wtree_bench_catalog::RunPlan;

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    println!("WTREE Benchmark Parameter Catalog");
    println!("=================================\n");

    if let Some((type_code, gen_code, size_code)) = &config.expand {
        match RunPlan::expand(type_code, gen_code, size_code) {
            Ok(plan) => {
                println!("Expanded plan for ({}, {}, {}):", type_code, gen_code, size_code);
                println!("  Key widths: {:?}", plan.key_widths);
                println!("  Generators: {:?}", plan.generator_ids);
                println!("  Size: {}", plan.size);
                println!("  Runs: {}\n", plan.runs().count());
            }
            Err(e) => {
                eprintln!("Expansion failed: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    let report = CatalogReport::new();

    if let Some(output_path) = &config.output {
        println!("Writing catalog report to {:?}...", output_path);
        if let Err(e) = report.write_to_file(config.format, output_path) {
            eprintln!("Failed to write report: {}", e);
            return ExitCode::FAILURE;
        }
        println!("Report written successfully.");
    } else {
        let output = report.generate(config.format);

        if let Some(json) = output.json {
            println!("=== JSON Catalog ===\n");
            println!("{}", json);
        }

        if let Some(md) = output.markdown {
            println!("=== Markdown Catalog ===\n");
            println!("{}", md);
        }
    }

    ExitCode::SUCCESS
}

const USAGE: &str = "Usage: catalog-report [--format json|markdown|both] [--output PATH] [--expand TYPE,GEN,SIZE]";

struct CliConfig {
    format: ReportFormat,
    output: Option<PathBuf>,
    expand: Option<(String, String, String)>,
}

fn parse_args(args: &[String]) -> Result<CliConfig, String> {
    let mut format = ReportFormat::Markdown;
    let mut output: Option<PathBuf> = None;
    let mut expand: Option<(String, String, String)> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--format" => {
                i += 1;
                let value = args.get(i).ok_or("--format requires a value")?;
                format = match value.as_str() {
                    "json" => ReportFormat::Json,
                    "markdown" => ReportFormat::Markdown,
                    "both" => ReportFormat::Both,
                    other => return Err(format!("Unknown format '{}'", other)),
                };
            }
            "--output" => {
                i += 1;
                let value = args.get(i).ok_or("--output requires a value")?;
                output = Some(PathBuf::from(value));
            }
            "--expand" => {
                i += 1;
                let value = args.get(i).ok_or("--expand requires a value")?;
                let parts: Vec<&str> = value.split(',').collect();
                if parts.len() != 3 {
                    return Err(format!(
                        "--expand expects TYPE,GEN,SIZE, got '{}'",
                        value
                    ));
                }
                expand = Some((
                    parts[0].to_string(),
                    parts[1].to_string(),
                    parts[2].to_string(),
                ));
            }
            other => return Err(format!("Unknown argument '{}'", other)),
        }
        i += 1;
    }

    Ok(CliConfig {
        format,
        output,
        expand,
    })
}
