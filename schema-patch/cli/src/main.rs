use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use apollo_compiler::ast;
use clap::Parser;
use schema_patch::ErrorPolicy;
use schema_patch::PatchConfig;
use schema_patch::SchemaIndex;
use tracing_subscriber::EnvFilter;

/// CLI arguments. See <https://docs.rs/clap/latest/clap/_derive/index.html>
#[derive(Parser)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Applies a JSON list of schema changes to a schema
    Apply {
        /// The path to the schema file, or `-` for stdin
        schema: PathBuf,
        /// The path to the JSON change list, or `-` for stdin
        changes: PathBuf,
        /// Stop at the first change that cannot be applied
        #[arg(long)]
        strict: bool,
        /// Trace every change before applying it
        #[arg(long)]
        debug: bool,
        /// A JSON patch configuration file. Flags take precedence over it
        #[arg(long)]
        config: Option<PathBuf>,
        /// Where to write the patched schema instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Lists the coordinates of a schema
    Index {
        /// The path to the schema file, or `-` for stdin
        schema: PathBuf,
    },
    /// Prints the JSON schema of the patch configuration file
    ConfigSchema,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match args.command {
        Command::Apply {
            schema,
            changes,
            strict,
            debug,
            config,
            output,
        } => {
            let mut config = match config {
                Some(path) => load_config(&path)?,
                None => PatchConfig::default(),
            };
            if strict {
                config.error_policy = ErrorPolicy::Strict;
            }
            config.debug |= debug;
            let patched = apply(&read_input(&schema)?, &read_input(&changes)?, &config)?;
            match output {
                Some(path) => fs::write(&path, patched)
                    .with_context(|| format!("writing {}", path.display()))?,
                None => print!("{patched}"),
            }
        }
        Command::Index { schema } => {
            let input = read_input(&schema)?;
            let document = ast::Document::parse(input, &schema)
                .map_err(|invalid| anyhow::anyhow!("{}", invalid.errors))?;
            print!("{}", SchemaIndex::new(&document));
        }
        Command::ConfigSchema => {
            let schema = schemars::schema_for!(PatchConfig);
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
    }
    Ok(())
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        io::read_to_string(io::stdin()).context("reading stdin")
    } else {
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
    }
}

fn load_config(path: &Path) -> anyhow::Result<PatchConfig> {
    serde_json::from_str(&read_input(path)?)
        .with_context(|| format!("invalid configuration in {}", path.display()))
}

fn apply(schema: &str, changes: &str, config: &PatchConfig) -> anyhow::Result<String> {
    let changes = schema_patch::parse_changes(changes).context("invalid change list")?;
    tracing::info!(changes = changes.len(), "applying changes");
    Ok(schema_patch::patch_sdl(schema, &changes, config)?)
}
