use anyhow::{Context, Result, bail};
use clap::Parser;
use sane_lists_config::Config;
use sane_lists_engine::{ListConfig, ListParser, snapshot};
use std::{
    io::{self, Read},
    path::PathBuf,
    process,
};

/// Parse Markdown lists with indentation-driven nesting and print the tree
/// outline.
#[derive(Debug, Default, PartialEq, Eq, Parser)]
#[command(name = "sane-lists", version)]
struct Args {
    /// Config file (defaults to ~/.config/sane-lists/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Spaces per nesting level, overriding the config file
    #[arg(long, value_name = "N")]
    indent: Option<usize>,

    /// Merge adjacent lists of the same kind
    #[arg(long)]
    legacy: bool,

    /// Markdown file to parse (reads standard input when omitted)
    input: Option<PathBuf>,
}

fn load_config_file(args: &Args) -> Result<Option<Config>> {
    match &args.config {
        Some(path) => {
            let path = Config::expand_path(path).unwrap_or_else(|| path.clone());
            log::info!("Config path: {}", path.display());
            match Config::load_from_path(&path)? {
                Some(config) => Ok(Some(config)),
                None => bail!("config file '{}' does not exist", path.display()),
            }
        }
        None => {
            log::info!("Config path: {}", Config::config_path().display());
            Ok(Config::load()?)
        }
    }
}

/// Settings from the config file (if any) with command-line overrides applied.
fn resolve_config(file: Option<Config>, args: &Args) -> Result<ListConfig> {
    let mut file = file.unwrap_or_default();
    if let Some(width) = args.indent {
        file.nested_indent = width;
    }
    if args.legacy {
        file.sane = false;
    }
    Ok(file.list_config()?)
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display())),
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("failed to read standard input")?;
            Ok(source)
        }
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let config = resolve_config(load_config_file(&args)?, &args)?;
    let parser = ListParser::new(config)?;

    let source = read_input(args.input.as_ref())?;
    let tree = parser.parse_document(&source);
    log::debug!("parsed {} nodes", tree.node_count());

    println!("{}", snapshot::outline(&tree));
    Ok(())
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
