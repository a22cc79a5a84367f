mod cli;

use std::io::{self, BufRead, Write};

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use pathtags::{Path, Render, Resolution, SvgOptions};
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, Format};

/// One path to convert, with the name used in diagnostics
struct Input {
    name: String,
    source: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr; stdout carries the converted output.
    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let inputs = collect_inputs(&args)?;
    tracing::debug!(count = inputs.len(), format = ?args.format, "converting paths");

    let options = args.svg_options();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for input in &inputs {
        let text = convert(input, args.format, &options)?;
        if !text.is_empty() {
            writeln!(out, "{text}").into_diagnostic()?;
        }
    }

    Ok(())
}

fn collect_inputs(args: &Args) -> Result<Vec<Input>> {
    if !args.paths.is_empty() {
        return Ok(args
            .paths
            .iter()
            .enumerate()
            .map(|(i, source)| Input {
                name: format!("<arg {}>", i + 1),
                source: source.clone(),
            })
            .collect());
    }

    let mut inputs = Vec::new();
    for (i, line) in io::stdin().lock().lines().enumerate() {
        let line = line.into_diagnostic()?;
        if line.trim().is_empty() {
            continue;
        }
        inputs.push(Input {
            name: format!("<stdin>:{}", i + 1),
            source: line,
        });
    }
    Ok(inputs)
}

fn convert(input: &Input, format: Format, options: &SvgOptions) -> Result<String> {
    let path = pathtags::parse_named(&input.name, &input.source)?;

    match format {
        Format::Commands => Ok(path.to_string()),
        Format::Tags => Ok(pathtags::render_tags(&resolve(input, &path)?.primitives)),
        Format::Svg => pathtags::render_document(&resolve(input, &path)?.primitives, options),
        Format::Primitives => Ok(resolve(input, &path)?
            .primitives
            .iter()
            .map(|p| p.describe())
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn resolve(input: &Input, path: &Path) -> Result<Resolution> {
    pathtags::resolve(path.commands())
        .map_err(|e| miette::Report::new(e).wrap_err(format!("while resolving {}", input.name)))
}
