mod cli;

use std::{fs, io::Write};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use joiner_config::{
    EntityDescriptor, JoinerConfig, JoinerConfigOptions, LinkableKeys,
    build_entities_name_to_linkable_keys_map,
    config::{DiscoveryConfig, JoinerSettings},
    define_joiner_config,
    logging::init_tracing,
    models::{load_models, render_manifest},
};

use crate::cli::{BuildArgs, Cli, Commands, LinkableMapArgs, ManifestArgs};

fn main() {
    if let Err(err) = run() {
        tracing::error!("joiner-config failed: {err:?}");
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let settings = JoinerSettings::from_env()?;
    init_tracing(&settings.logging, cli.verbose);

    match cli.command {
        Commands::Build(args) => build(args, settings.discovery),
        Commands::LinkableMap(args) => linkable_map(args),
        Commands::Manifest(args) => manifest(args, &settings.discovery),
    }
}

fn build(args: BuildArgs, discovery: DiscoveryConfig) -> Result<()> {
    let options = JoinerConfigOptions {
        main_entity: args.main_entity.map(EntityDescriptor::from),
        public_entity_objects: (!args.entities.is_empty())
            .then(|| args.entities.into_iter().map(EntityDescriptor::from).collect()),
        linkable_keys: (!args.linkable_keys.is_empty())
            .then(|| args.linkable_keys.into_iter().collect()),
        primary_keys: (!args.primary_keys.is_empty()).then_some(args.primary_keys),
        models_dir: args.models_dir,
        source_file: args.source_file,
        require_entities: args.require_entities,
        discovery,
    };

    let config = define_joiner_config(&args.module, options)
        .with_context(|| format!("failed to build joiner config for '{}'", args.module))?;
    print_json(&config, args.compact)
}

fn linkable_map(args: LinkableMapArgs) -> Result<()> {
    let linkable_keys: LinkableKeys = match args.from_config {
        Some(path) => {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let config: JoinerConfig = serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse joiner config {}", path.display()))?;
            config.linkable_keys
        }
        None => args.linkable_keys.into_iter().collect(),
    };

    print_json(
        &build_entities_name_to_linkable_keys_map(&linkable_keys),
        args.compact,
    )
}

fn manifest(args: ManifestArgs, discovery: &DiscoveryConfig) -> Result<()> {
    let entities = load_models(&args.models_dir, discovery)
        .with_context(|| format!("failed to scan {}", args.models_dir.display()))?;
    let rendered = render_manifest(&entities);

    match args.out {
        Some(path) => {
            fs::write(&path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(out = %path.display(), entities = entities.len(), "manifest written");
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let rendered = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
    .context("failed to serialize output")?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{rendered}").context("failed to write output")?;
    Ok(())
}
