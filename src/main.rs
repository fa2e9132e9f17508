mod comments;
mod indent;
mod newline;
mod quotes;
mod semicolon;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indent::IndentStyle;
use newline::NewlineStyle;
use quotes::QuoteStyle;
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Parser, Debug)]
#[command(name = "stylesniff", version, about = "Source style convention detector")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Report the detected conventions of each input file
    Detect {
        /// Paths (files or directories) to analyze (defaults to current dir)
        paths: Vec<PathBuf>,
        /// When walking a directory, only analyze files with this extension
        /// (repeatable; every file when omitted)
        #[arg(long)]
        ext: Vec<String>,
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the indent frequency table a detection would decide on
    Stats {
        /// File to inspect
        file: PathBuf,
    },
}

#[derive(Debug, Serialize)]
struct FileReport {
    path: PathBuf,
    indent: Option<IndentStyle>,
    newline: Option<NewlineStyle>,
    semicolons: Option<bool>,
    quotes: Option<QuoteStyle>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Detect { paths, ext, json } => {
            let targets = if paths.is_empty() {
                vec![PathBuf::from(".")]
            } else {
                paths
            };
            let mut files = Vec::new();
            for path in &targets {
                collect_files(path, &ext, &mut files);
            }

            let results: Vec<_> = files.par_iter().map(|path| analyze_file(path)).collect();
            let mut reports = Vec::new();
            for r in results {
                match r {
                    Ok(report) => reports.push(report),
                    Err(e) => eprintln!("{:#}", e),
                }
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                for report in &reports {
                    print_report(report);
                }
            }
        }
        Commands::Stats { file } => {
            stats_file(&file)?;
        }
    }
    Ok(())
}

fn analyze_file(path: &Path) -> Result<FileReport> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(FileReport {
        path: path.to_path_buf(),
        indent: indent::detect_indent(&content),
        newline: newline::detect_newline(&content),
        semicolons: semicolon::detect_semicolon(&content),
        quotes: quotes::detect_quotes(&content),
    })
}

fn print_report(report: &FileReport) {
    println!("===== {} =====", report.path.display());
    match &report.indent {
        Some(style) => println!("indent:     {} x{}", style.kind.as_str(), style.amount),
        None => println!("indent:     undetected"),
    }
    match &report.newline {
        Some(style) => println!("newline:    {}", style.kind.as_str()),
        None => println!("newline:    undetected"),
    }
    match report.semicolons {
        Some(true) => println!("semicolons: yes"),
        Some(false) => println!("semicolons: no"),
        None => println!("semicolons: undetected"),
    }
    match &report.quotes {
        Some(style) => println!("quotes:     {}", style.kind.as_str()),
        None => println!("quotes:     undetected"),
    }
}

fn stats_file(path: &Path) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    // Same two-pass policy as detection: single-space indents are only
    // counted when nothing else is found.
    let mut stats = indent::indent_stats(&content, true);
    if stats.is_empty() {
        stats = indent::indent_stats(&content, false);
    }

    println!("===== {} =====", path.display());
    if stats.is_empty() {
        println!("no indented lines");
        return Ok(());
    }
    for (key, counts) in &stats {
        println!(
            "{} x{}: entered {} time(s), repeated {} time(s)",
            key.kind.as_str(),
            key.amount,
            counts.use_count,
            counts.weight
        );
    }
    match indent::select(&stats) {
        Some(key) => println!("selected: {} x{}", key.kind.as_str(), key.amount),
        None => println!("selected: none (tie)"),
    }
    Ok(())
}

fn collect_files(path: &Path, exts: &[String], out: &mut Vec<PathBuf>) {
    if path.is_file() {
        out.push(path.to_path_buf());
        return;
    }
    for entry in WalkDir::new(path).into_iter().filter_map(|e| e.ok()) {
        let p = entry.path();
        if !p.is_file() {
            continue;
        }
        let wanted = exts.is_empty()
            || p.extension()
                .and_then(|s| s.to_str())
                .is_some_and(|e| exts.iter().any(|want| want == e));
        if wanted {
            out.push(p.to_path_buf());
        }
    }
}
