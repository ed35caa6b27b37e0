//! asminfo CLI: inspect x86 assembly descriptors for a target triple.

mod commands;

use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use asminfo_targets::config::CONFIG_FILE_NAME;
use asminfo_targets::{load_config_toml, AsmInfoConfig, AsmSyntax};

#[derive(Parser)]
#[command(name = "asminfo", version, about = "x86 assembly target descriptors")]
struct Cli {
    /// Choose style of code to emit from the x86 backend (att, intel)
    #[arg(long, global = true, value_parser = parse_syntax)]
    x86_asm_syntax: Option<AsmSyntax>,
    /// Configuration file (default: ./asminfo.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every field of the descriptor for a triple
    Describe {
        /// Target triple (e.g., x86_64-apple-darwin10)
        triple: String,
        /// Output format (text, toml, json)
        #[arg(long)]
        format: Option<String>,
    },
    /// Show which descriptor variant a triple selects
    Select {
        /// Target triple
        triple: String,
    },
    /// Translate inline-asm constraint names to their native spelling
    Constraint {
        /// Constraint names (e.g., {ax} {memory} {dirflag})
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Print the personality-routine reference used in unwind tables
    Personality {
        /// Target triple
        triple: String,
        /// Personality routine symbol
        symbol: String,
    },
    /// Print the non-executable stack marker section
    StackNote {
        /// Target triple
        triple: String,
    },
    /// Print the descriptor's content fingerprint
    Fingerprint {
        /// Target triple
        triple: String,
    },
}

fn parse_syntax(s: &str) -> std::result::Result<AsmSyntax, String> {
    s.parse::<AsmSyntax>().map_err(|e| e.to_string())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = resolve_config(&cwd, cli.config.as_deref(), cli.x86_asm_syntax)?;

    match cli.command {
        Commands::Describe { triple, format } => {
            commands::describe::describe(&triple, &config, format.as_deref())
        }
        Commands::Select { triple } => commands::describe::select(&triple),
        Commands::Constraint { names } => commands::inline_asm::constraint(&names),
        Commands::Personality { triple, symbol } => {
            commands::emit::personality(&triple, &symbol, &config)
        }
        Commands::StackNote { triple } => commands::emit::stack_note(&triple, &config),
        Commands::Fingerprint { triple } => commands::describe::fingerprint(&triple, &config),
    }
}

/// Read configuration once: explicit file, else `asminfo.toml` in `dir` if
/// present, else defaults. A `--x86-asm-syntax` flag wins over the file.
fn resolve_config(
    dir: &Path,
    explicit: Option<&Path>,
    syntax_override: Option<AsmSyntax>,
) -> Result<AsmInfoConfig> {
    let mut config = match explicit {
        Some(path) => load_config_toml(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => {
            let default_path = dir.join(CONFIG_FILE_NAME);
            if default_path.is_file() {
                load_config_toml(&default_path)
                    .with_context(|| format!("failed to load {}", default_path.display()))?
            } else {
                AsmInfoConfig::default()
            }
        }
    };
    if let Some(syntax) = syntax_override {
        config.x86.asm_syntax = syntax;
    }
    log::debug!("x86 asm syntax: {}", config.asm_syntax());
    Ok(config)
}
