//! Max Levels - command-line queries over the entity dataset

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use maxlvl_core::data::UPGRADED_FROM_LEVEL;
use maxlvl_core::prelude::*;
use maxlvl_tools::loader::{load_catalog, load_config_from_file, DataLoadResult};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "maxlvl")]
#[command(about = "Query max levels, upgrade costs and unlocks")]
struct Cli {
    /// Path to the entity data file
    #[arg(long, global = true, default_value = "assets/data/entities.json")]
    data: PathBuf,

    /// Path to a RON catalog configuration
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the data file
    Validate,
    #[command(flatten)]
    Query(QueryCommand),
}

#[derive(Subcommand)]
enum QueryCommand {
    /// List every entity name in file order
    Names,
    /// Show everything known about one entity
    Info {
        /// Entity name
        name: String,
        /// Townhall for max level and count
        #[arg(long)]
        townhall: Option<u32>,
    },
    /// Upgrade cost of one level
    Cost {
        /// Entity name
        name: String,
        /// Target level
        level: u32,
        /// Which Builder's Hut is bought (level 1 only)
        #[arg(long, default_value_t = 1)]
        instance: u32,
    },
    /// Upgrade time of one level
    Time {
        /// Entity name
        name: String,
        /// Target level
        level: u32,
    },
    /// Total cost and time to max at a townhall
    Total {
        /// Entity name
        name: String,
        /// Townhall level
        townhall: u32,
    },
    /// First townhall at which an entity can be built
    Unlock {
        /// Entity name
        name: String,
    },
    /// List entities, optionally filtered
    List {
        /// Only entities of this type
        #[arg(long = "type")]
        kind: Option<EntityKind>,
        /// Only entities paid for with this resource
        #[arg(long)]
        uses: Option<ResourceKind>,
        /// Only entities available at this townhall
        #[arg(long)]
        townhall: Option<u32>,
    },
    /// List crafting modes, or one mode's modules
    Modes {
        /// Mode name
        mode: Option<String>,
        /// Townhall for the mode's max level
        #[arg(long)]
        townhall: Option<u32>,
    },
    /// Upgrade cost and time of a crafting module level
    Module {
        /// Mode name
        mode: String,
        /// Module name
        module: String,
        /// Module level
        level: u32,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> DataLoadResult<()> {
    match cli.command {
        Commands::Validate => validate(&cli.data, cli.config.as_deref()),
        Commands::Query(command) => {
            let catalog = load_catalog(&cli.data, cli.config.as_deref())?;
            query(&catalog, command);
            Ok(())
        }
    }
}

fn query(catalog: &Catalog, command: QueryCommand) {
    match command {
        QueryCommand::Names => {
            for name in catalog.entity_names() {
                println!("{name}");
            }
        }
        QueryCommand::Info { name, townhall } => print_info(catalog, &name, townhall),
        QueryCommand::Cost {
            name,
            level,
            instance,
        } => println!("{}", show(catalog.cost_for_instance(&name, level, instance))),
        QueryCommand::Time { name, level } => {
            println!("{}", show(catalog.time(&name, level).map(format_build_time)));
        }
        QueryCommand::Total { name, townhall } => {
            println!("cost: {}", show(catalog.total_cost_to_max(&name, townhall)));
            println!(
                "time: {}",
                show(catalog.total_time_to_max(&name, townhall).map(format_build_time))
            );
        }
        QueryCommand::Unlock { name } => println!("{}", show(catalog.unlock_townhall(&name))),
        QueryCommand::List {
            kind,
            uses,
            townhall,
        } => {
            let names = catalog.entity_names().filter(|name| {
                kind.map_or(true, |kind| catalog.kind(name) == Some(kind))
                    && uses.map_or(true, |uses| catalog.uses(name) == Some(uses))
                    && townhall.map_or(true, |th| catalog.is_available_at_townhall(name, th))
            });
            for name in names {
                println!("{name}");
            }
        }
        QueryCommand::Modes { mode, townhall } => match mode {
            None => {
                for mode in catalog.crafting_modes() {
                    println!("{mode}");
                }
            }
            Some(mode) => {
                if let Some(th) = townhall {
                    println!(
                        "max level at TH{th}: {}",
                        show(catalog.crafting_mode_max_level(&mode, th))
                    );
                }
                for module in catalog.crafting_mode_modules(&mode) {
                    println!("{module}");
                }
            }
        },
        QueryCommand::Module {
            mode,
            module,
            level,
        } => {
            println!(
                "cost: {}",
                show(catalog.module_upgrade_cost(&mode, &module, level))
            );
            println!(
                "time: {}",
                show(catalog.module_upgrade_time(&mode, &module, level).map(format_build_time))
            );
        }
    }
}

fn validate(data: &Path, config: Option<&Path>) -> DataLoadResult<()> {
    let config = match config {
        Some(path) => load_config_from_file(path)?,
        None => CatalogConfig::default(),
    };
    tracing::info!("Validating data file: {}", data.display());
    let count = maxlvl_tools::validate::validate_data_file(data, &config)?;
    tracing::info!("Validation passed for {count} entities");
    Ok(())
}

fn print_info(catalog: &Catalog, name: &str, townhall: Option<u32>) {
    let Some(record) = catalog.entity(name) else {
        println!("unknown entity: {name}");
        return;
    };
    println!("{name} ({})", record.variant_name());
    println!("type: {}", show(catalog.kind(name)));
    println!("uses: {}", show(catalog.uses(name)));
    if record.as_builders_hut().is_some() {
        println!("upgraded type: {}", show(catalog.kind_at(name, UPGRADED_FROM_LEVEL)));
        println!("upgraded uses: {}", show(catalog.uses_at(name, UPGRADED_FROM_LEVEL)));
    }
    println!("unlocks at: TH{}", show(catalog.unlock_townhall(name)));
    if let Some(th) = townhall {
        println!("max level at TH{th}: {}", show(catalog.max_level(name, th)));
        println!("max count at TH{th}: {}", show(catalog.max_count(name, th)));
    }
    if let Some(gear) = catalog.gear_up_data(name) {
        println!(
            "gear up: {} for {} (x{}, from level {})",
            gear.cost,
            format_build_time(gear.time),
            gear.count,
            gear.required_level
        );
    }
}

fn show<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |value| value.to_string())
}
