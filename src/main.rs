//! # Artificer Command Line Entry Point
//!
//! Generates artifacts from a seed, optionally appending them to a save
//! file, and prints the contents of existing save files.

use artificer::{
    read_artifacts_file, ArtifactForge, ArtifactRecord, ArtificerError, ArtificerResult,
    EffectFamily, GenerationConfig, NaturalProperty,
};
use clap::{Parser, Subcommand};
use log::{debug, info};
use std::path::PathBuf;

/// Command line arguments for the artifact generator.
#[derive(Parser, Debug)]
#[command(name = "artificer")]
#[command(about = "Procedural, value-balanced artifact generation")]
#[command(version)]
struct Args {
    /// Random seed; overrides the configuration file
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// JSON generation config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate artifacts and print a summary of each
    Generate {
        /// Number of artifacts; defaults to the configured batch size
        #[arg(short = 'n', long)]
        count: Option<u32>,

        /// Generate natural artifacts instead of forged ones
        #[arg(long)]
        natural: bool,

        /// Natural property to use, e.g. "glowing"
        #[arg(long, requires = "natural")]
        property: Option<String>,

        /// Generate the architect's cube
        #[arg(long, conflicts_with = "natural")]
        debug_cube: bool,

        /// Append the generated artifacts to this save file
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// Print the artifacts stored in a save file
    Show {
        /// Save file to read
        path: PathBuf,
    },
}

fn main() -> ArtificerResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level);
    debug!("Starting Artificer v{}", artificer::VERSION);

    match &args.command {
        Command::Generate {
            count,
            natural,
            property,
            debug_cube,
            save,
        } => {
            let config = load_config(&args)?;
            let property = property.as_deref().map(parse_property).transpose()?;
            let count = count.unwrap_or(config.batch_size);
            run_generate(&config, count, *natural, property, *debug_cube, save.as_ref())
        }
        Command::Show { path } => {
            let records = read_artifacts_file(path)?;
            info!("{} artifacts in {}", records.len(), path.display());
            for record in &records {
                print_record(record);
            }
            Ok(())
        }
    }
}

/// Initializes the logging system based on the specified filter string.
fn initialize_logging(log_level: &str) {
    env_logger::Builder::new()
        .parse_filters(log_level)
        .format_target(false)
        .init();
}

fn load_config(args: &Args) -> ArtificerResult<GenerationConfig> {
    let mut config = match &args.config {
        Some(path) => GenerationConfig::from_json_file(path)?,
        None => GenerationConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    Ok(config)
}

fn parse_property(name: &str) -> ArtificerResult<NaturalProperty> {
    NaturalProperty::from_name(name)
        .ok_or_else(|| ArtificerError::InvalidConfig(format!("unknown natural property `{}`", name)))
}

fn run_generate(
    config: &GenerationConfig,
    count: u32,
    natural: bool,
    property: Option<NaturalProperty>,
    debug_cube: bool,
    save: Option<&PathBuf>,
) -> ArtificerResult<()> {
    let mut forge = ArtifactForge::from_config(config)?;
    if let Some(path) = save {
        forge.load_artifacts(path)?;
    }

    info!("Generating {} artifacts with seed {}", count, config.seed);
    for _ in 0..count {
        let id = if debug_cube {
            forge.generate_fixed_debug_artifact()?
        } else if natural {
            forge.generate_natural_artifact(property)?
        } else {
            forge.generate_random_artifact()?
        };
        if let Some(record) = forge.get(&id) {
            print_record(record);
        }
    }

    if let Some(path) = save {
        if !forge.save_artifacts(path) {
            return Err(ArtificerError::GenerationFailed(format!(
                "could not write {}",
                path.display()
            )));
        }
    }
    Ok(())
}

fn print_record(record: &ArtifactRecord) {
    println!("{} [{}] {}", record.id(), record.type_tag(), record.name());
    for line in record.common().description.lines() {
        println!("    {}", line);
    }
    println!(
        "    power {} over {} effects",
        record.declared_power(),
        record.effect_count()
    );

    match record {
        ArtifactRecord::Tool(tool) => {
            print_effects("wielded", &tool.effects_wielded);
            print_effects("carried", &tool.effects_carried);
            print_effects("activated", &tool.effects_activated);
            if tool.max_charges > 0 {
                println!(
                    "    charges {}/{} ({})",
                    tool.def_charges,
                    tool.max_charges,
                    tool.charge_type.name()
                );
            }
        }
        ArtifactRecord::Armor(armor) => {
            print_effects("worn", &armor.effects_worn);
        }
    }
}

fn print_effects<E: EffectFamily>(label: &str, effects: &[E]) {
    if effects.is_empty() {
        return;
    }
    let names: Vec<&str> = effects.iter().map(|effect| effect.name()).collect();
    println!("    {}: {}", label, names.join(", "));
}
