// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seqgrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seqgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Seqgrid CLI entrypoint.
//!
//! Compiles each input file (or stdin when none is given) and prints the grids in argument order,
//! separated by a blank line.

use std::error::Error;
use std::io::Read as _;

use rayon::prelude::*;
use seqgrid::render::{canvas_to_html, canvas_to_string, GridDocument};
use seqgrid::{compile_with_options, Canvas, CommentNewline, CompileOptions, OutputFormat};
use tracing::{debug, Level};

const STDIN_NAME: &str = "<stdin>";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [FILE ...] [--format text|html|json] [--keep-comment-newlines] [--output FILE] [--verbose]\n  {program} --help\n\nWith no FILE the diagram is read from stdin.\nSeveral files are compiled independently and printed in argument order, separated by a blank line.\n\n--keep-comment-newlines ends a statement at the line terminator after a `//` comment.\n--verbose logs pipeline stages to stderr."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    files: Vec<String>,
    format: Option<OutputFormat>,
    keep_comment_newlines: bool,
    output: Option<String>,
    verbose: bool,
    help: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => options.help = true,
            "--format" => {
                if options.format.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.format = Some(OutputFormat::parse(&raw).map_err(|_| ())?);
            }
            "--keep-comment-newlines" => {
                if options.keep_comment_newlines {
                    return Err(());
                }
                options.keep_comment_newlines = true;
            }
            "--output" | "-o" => {
                if options.output.is_some() {
                    return Err(());
                }
                options.output = Some(args.next().ok_or(())?);
            }
            "--verbose" | "-v" => {
                if options.verbose {
                    return Err(());
                }
                options.verbose = true;
            }
            "-" => options.files.push(arg),
            _ if arg.starts_with('-') => return Err(()),
            _ => options.files.push(arg),
        }
    }

    Ok(options)
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .try_init();
}

fn read_sources(files: &[String]) -> Result<Vec<(String, String)>, Box<dyn Error>> {
    if files.is_empty() {
        return Ok(vec![(STDIN_NAME.to_owned(), read_stdin()?)]);
    }

    files
        .iter()
        .map(|path| -> Result<(String, String), Box<dyn Error>> {
            let source = if path == "-" {
                read_stdin()?
            } else {
                std::fs::read_to_string(path).map_err(|err| format!("{path}: {err}"))?
            };
            Ok((path.clone(), source))
        })
        .collect()
}

fn read_stdin() -> Result<String, std::io::Error> {
    let mut source = String::new();
    std::io::stdin().read_to_string(&mut source)?;
    Ok(source)
}

fn serialize(canvas: &Canvas, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(canvas_to_string(canvas)),
        OutputFormat::Html => Ok(canvas_to_html(canvas)),
        OutputFormat::Json => GridDocument::from_canvas(canvas).to_json(),
    }
}

fn render_one(
    source: &str,
    compile_options: &CompileOptions,
    format: OutputFormat,
) -> Result<String, String> {
    let canvas = compile_with_options(source, compile_options).map_err(|err| err.to_string())?;
    serialize(&canvas, format).map_err(|err| err.to_string())
}

fn main() {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "seqgrid".to_owned());

    let options = match parse_options(args) {
        Ok(options) => options,
        Err(()) => {
            print_usage(&program);
            std::process::exit(2);
        }
    };

    if options.help {
        print_usage(&program);
        return;
    }

    init_tracing(options.verbose);

    let result = (|| -> Result<(), Box<dyn Error>> {
        let sources = read_sources(&options.files)?;
        let format = options.format.unwrap_or_default();
        let comment_newline = if options.keep_comment_newlines {
            CommentNewline::Keep
        } else {
            CommentNewline::Swallow
        };
        let compile_options = CompileOptions::default().with_comment_newline(comment_newline);
        debug!(inputs = sources.len(), format = format.as_str(), "compiling");

        let rendered = sources
            .par_iter()
            .map(|(_, source)| render_one(source, &compile_options, format))
            .collect::<Vec<_>>();

        let mut outputs = Vec::with_capacity(rendered.len());
        let mut failures = Vec::new();
        for ((name, _), result) in sources.iter().zip(rendered) {
            match result {
                Ok(output) => outputs.push(output),
                Err(err) => failures.push(format!("{name}: {err}")),
            }
        }
        if !failures.is_empty() {
            return Err(failures.join("\n").into());
        }

        let mut document = outputs.join("\n\n");
        document.push('\n');
        match &options.output {
            Some(path) => std::fs::write(path, document).map_err(|err| format!("{path}: {err}"))?,
            None => print!("{document}"),
        }

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("seqgrid: {err}");
        std::process::exit(1);
    }
}
