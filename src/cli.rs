use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the joiner config of a module as JSON
    Build(BuildArgs),
    /// Print the entity -> linkable keys map as JSON
    LinkableMap(LinkableMapArgs),
    /// Render the static entity manifest of a models directory
    Manifest(ManifestArgs),
}

#[derive(Args, Clone)]
pub struct BuildArgs {
    /// Module name, used verbatim as the service name
    pub module: String,
    /// Directory holding the module's model files
    #[arg(long, conflicts_with = "source_file")]
    pub models_dir: Option<PathBuf>,
    /// Source file of the module; the models directory is derived from it
    #[arg(long)]
    pub source_file: Option<PathBuf>,
    /// Explicit entity names (skips discovery)
    #[arg(long = "entity", value_name = "NAME")]
    pub entities: Vec<String>,
    /// Entity appended after the explicit or discovered entities
    #[arg(long)]
    pub main_entity: Option<String>,
    /// Primary keys (defaults to `id`)
    #[arg(long = "primary-key", value_name = "KEY")]
    pub primary_keys: Vec<String>,
    /// Explicit linkable keys, replacing the derived ones
    #[arg(long = "linkable-key", value_name = "KEY=ENTITY", value_parser = parse_linkable_key)]
    pub linkable_keys: Vec<(String, String)>,
    /// Fail when the module ends up without entities
    #[arg(long)]
    pub require_entities: bool,
    /// Emit single-line JSON
    #[arg(long)]
    pub compact: bool,
}

#[derive(Args, Clone)]
pub struct LinkableMapArgs {
    #[arg(long = "linkable-key", value_name = "KEY=ENTITY", value_parser = parse_linkable_key)]
    pub linkable_keys: Vec<(String, String)>,
    /// Read linkable keys from a joiner config JSON file instead
    #[arg(long, conflicts_with = "linkable_keys")]
    pub from_config: Option<PathBuf>,
    #[arg(long)]
    pub compact: bool,
}

#[derive(Args, Clone)]
pub struct ManifestArgs {
    #[arg(long)]
    pub models_dir: PathBuf,
    /// Output file (defaults to stdout)
    #[arg(long)]
    pub out: Option<PathBuf>,
}

fn parse_linkable_key(input: &str) -> Result<(String, String), String> {
    let (key, entity) = input
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=ENTITY, got '{input}'"))?;
    let (key, entity) = (key.trim(), entity.trim());
    if key.is_empty() || entity.is_empty() {
        return Err(format!("key and entity must not be empty in '{input}'"));
    }
    Ok((key.to_string(), entity.to_string()))
}
