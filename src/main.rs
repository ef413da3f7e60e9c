use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

/// Type-checking front end for a tiny assignment language
#[derive(Parser, Debug)]
#[command(name = "tinyc", version)]
struct Cli {
    /// The program file to check
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Check a standalone expression instead of a program
    #[arg(short = 'e', long = "expr", value_name = "EXPR", conflicts_with = "file")]
    expr: Option<String>,

    /// Start in interactive REPL mode
    #[arg(short, long)]
    interactive: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Some(expr) = cli.expr {
        if !tinyc::check_expression(&expr) {
            process::exit(1);
        }
    } else if cli.interactive {
        tinyc::start_repl();
    } else if let Some(path) = cli.file {
        run_file(&path);
    } else {
        tinyc::start_repl();
    }
}

fn run_file(path: &Path) {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", path.display(), e);
            process::exit(1);
        }
    };

    let filename = path.display().to_string();
    if !tinyc::check_program(&source, Some(&filename)) {
        process::exit(1);
    }
}
