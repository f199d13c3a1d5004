use clap::{Parser, Subcommand};
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process;

use tracing_subscriber::EnvFilter;

use biblerefs::config::{load_config, resolve_bible_path, save_config, BibleRefsConfig};
use biblerefs::errors::Result;
use biblerefs::passage::{check_bible_status, JsonPassageStore, PassageStore};
use biblerefs::resolution::ReferenceResolver;
use biblerefs::types::Testament;

/// Resolves free-form Bible citations to canonical references.
#[derive(Parser)]
#[command(
    name = "biblerefs",
    about = "Resolves free-form Bible citations to canonical references"
)]
struct Cli {
    /// Project directory holding `.biblerefs/` (default: current directory)
    #[arg(short, long, global = true)]
    project: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration into the project
    Init,
    /// Normalize citations (reads lines from stdin when none are given)
    Normalize {
        /// Citations such as "sl 23; jo 3:16"
        references: Vec<String>,
    },
    /// Show the structured resolution of a citation as JSON
    Parse {
        /// Citation to resolve
        reference: String,
    },
    /// List the known books and their aliases
    Books {
        /// Only list one testament ("old" or "new")
        #[arg(short, long)]
        testament: Option<String>,
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// Look up passage text for a citation
    Passage {
        /// Citation to look up
        reference: String,
        /// Bible data file (overrides the configured one)
        #[arg(short, long)]
        bible: Option<String>,
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// Report whether the Bible data file is available
    Status {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let project_root = resolve_path(cli.project.clone());

    let config = match load_config(&project_root) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    init_tracing(&config);

    if let Err(e) = run(cli.command, project_root, config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Installs the stderr subscriber; `RUST_LOG` wins over the configured filter.
fn init_tracing(config: &BibleRefsConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(command: Commands, project_root: PathBuf, config: BibleRefsConfig) -> Result<()> {
    let resolver = ReferenceResolver::default();

    match command {
        Commands::Init => {
            save_config(&project_root, &config)?;
            println!("Initialized biblerefs at {}", project_root.display());
        }
        Commands::Normalize { references } => {
            if references.is_empty() {
                for line in io::stdin().lock().lines() {
                    println!("{}", resolver.normalize(&line?));
                }
            } else {
                for reference in &references {
                    println!("{}", resolver.normalize(reference));
                }
            }
        }
        Commands::Parse { reference } => {
            let citations = resolver.resolve(&reference);
            println!("{}", serde_json::to_string_pretty(&citations)?);
        }
        Commands::Books { testament, json } => {
            let filter = testament.as_deref().and_then(Testament::from_str);
            let books: Vec<_> = resolver
                .catalog()
                .iter()
                .filter(|b| filter.map_or(true, |t| b.testament == t))
                .collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&books)?);
            } else {
                for book in &books {
                    let marker = if book.single_chapter { " *" } else { "" };
                    println!(
                        "{:>2}. {}{}: {}",
                        book.position,
                        book.name,
                        marker,
                        book.aliases.join(", ")
                    );
                }
            }
        }
        Commands::Passage {
            reference,
            bible,
            json,
        } => {
            let bible_path = match bible {
                Some(p) => PathBuf::from(p),
                None => resolve_bible_path(&project_root, &config),
            };
            let store = JsonPassageStore::open(&bible_path)?;
            let passage = store.get_passage(&reference)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&passage)?);
            } else {
                println!("{} ({})", passage.reference, store.version());
                println!("{}", passage.text);
            }
        }
        Commands::Status { json } => {
            let status = check_bible_status(&resolve_bible_path(&project_root, &config));
            if json {
                println!("{}", serde_json::to_string_pretty(&status)?);
            } else {
                println!("{}", status.message);
            }
        }
    }
    Ok(())
}

/// Resolves an optional path argument to a `PathBuf`.
///
/// Defaults to the current working directory if no path is provided.
fn resolve_path(path: Option<String>) -> PathBuf {
    match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}
