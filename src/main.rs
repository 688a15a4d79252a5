//! markit: block identifiers and canonical formatting for markit documents.
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use markit::block_id::IdKind;
use markit::commands::{self, Notice};
use markit::edit_plan::{self, EditPlan};
use markit::host::FileHost;
use markit::{assign, block_starts, config, formatter, input, snippet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "markit")]
#[command(about = "Block identifiers and formatting for markit documents", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// File extensions to match when a directory is given
    #[arg(long, short = 'e', value_name = "EXT", global = true)]
    ext: Vec<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Add default identifiers to every block that lacks one
    Ids {
        /// Files or directories to process
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<PathBuf>,

        /// Print the edit plan as JSON
        #[arg(long)]
        json: bool,

        /// Compute the edits without writing them
        #[arg(long)]
        dry_run: bool,
    },

    /// Rewrite documents in canonical layout
    Fmt {
        /// Files or directories to process
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<PathBuf>,

        /// Only report files that would change (exit 1 if any)
        #[arg(long)]
        check: bool,
    },

    /// Propose the next paragraph or footnote identifier
    NextId {
        /// Document to number against
        file: PathBuf,

        /// Number footnotes instead of paragraphs
        #[arg(long)]
        footnote: bool,

        /// Insert the identifier at this byte offset instead of printing it
        #[arg(long, value_name = "OFFSET")]
        at: Option<usize>,
    },

    /// Build a regex matching the start of every content block
    Pattern {
        /// Document to read
        file: PathBuf,

        /// Print the pattern instead of copying it to the clipboard
        #[arg(long)]
        print: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut cfg = config::Config::load();

    // Override config with command line args
    if !args.ext.is_empty() {
        cfg.file_extensions = args.ext;
    }

    let result = match args.command {
        Command::Ids {
            paths,
            json,
            dry_run,
        } => run_ids(paths, &cfg, json, dry_run),
        Command::Fmt { paths, check } => run_fmt(paths, &cfg, check),
        Command::NextId { file, footnote, at } => {
            let kind = if footnote {
                IdKind::Footnote
            } else {
                IdKind::Paragraph
            };
            run_next_id(&file, kind, at)
        }
        Command::Pattern { file, print } => run_pattern(&file, &cfg, print),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}

/// Print a notice for `path`, returning whether it reported success.
fn report(path: &Path, notice: Option<&Notice>) -> bool {
    match notice {
        Some(notice) => {
            eprintln!("{}: {notice}", path.display());
            !notice.is_error()
        }
        None => true,
    }
}

/// List where each edit of `plan` would land, as `path:line:column`.
fn report_plan(path: &Path, text: &str, plan: &EditPlan) {
    for edit in &plan.edits {
        let (start, _) = edit.range();
        let position = edit_plan::position_at(text, start);
        eprintln!(
            "{}:{}:{}: {:?}",
            path.display(),
            position.line + 1,
            position.character + 1,
            edit.text()
        );
    }
    eprintln!("{}: {} block(s) need IDs", path.display(), plan.len());
}

fn run_ids(
    paths: Vec<PathBuf>,
    cfg: &config::Config,
    json: bool,
    dry_run: bool,
) -> markit::Result<bool> {
    let mut ok = true;
    for path in input::find_documents(paths, &cfg.file_extensions)? {
        if json || dry_run {
            let text = fs::read_to_string(&path)?;
            let plan = assign::add_default_block_ids(&text);
            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            }
            if dry_run {
                report_plan(&path, &text, &plan);
                continue;
            }
        }
        let mut host = FileHost::new(&path);
        ok &= report(&path, commands::add_block_ids(&mut host).as_ref());
    }
    Ok(ok)
}

fn run_fmt(paths: Vec<PathBuf>, cfg: &config::Config, check: bool) -> markit::Result<bool> {
    let mut ok = true;
    for path in input::find_documents(paths, &cfg.file_extensions)? {
        if check {
            let text = fs::read_to_string(&path)?;
            if formatter::format_document(&text) != text {
                eprintln!("{}: would reformat", path.display());
                ok = false;
            }
            continue;
        }
        let mut host = FileHost::new(&path);
        ok &= report(&path, commands::format(&mut host).as_ref());
    }
    Ok(ok)
}

fn run_next_id(file: &Path, kind: IdKind, at: Option<usize>) -> markit::Result<bool> {
    let Some(offset) = at else {
        let text = fs::read_to_string(file)?;
        print!("{}", snippet::next_block_id(&text, kind));
        return Ok(true);
    };
    if !file.is_file() {
        return Err(unreadable(file));
    }
    let mut host = FileHost::new(file).with_cursor(offset);
    Ok(report(
        file,
        commands::insert_next_block_id(&mut host, kind).as_ref(),
    ))
}

fn run_pattern(file: &Path, cfg: &config::Config, print: bool) -> markit::Result<bool> {
    if print {
        let text = fs::read_to_string(file)?;
        match block_starts::block_start_pattern(&text, cfg.pattern_prefix_chars) {
            Some(pattern) => println!("{pattern}"),
            None => eprintln!("{}: No paragraph or footnote blocks found", file.display()),
        }
        return Ok(true);
    }
    let mut host = FileHost::new(file);
    let notice = commands::copy_block_start_pattern(&mut host, cfg.pattern_prefix_chars)
        .ok_or_else(|| unreadable(file))?;
    Ok(report(file, Some(&notice)))
}

fn unreadable(file: &Path) -> markit::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("Cannot read {}", file.display()),
    )
    .into()
}
