use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use creational_patterns::{DemoConfig, FactoryError, Line, Showroom, ShowroomError};

#[derive(Parser)]
#[command(name = "creational-demo")]
#[command(about = "Abstract Factory, Factory Method and Builder on toy domains", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML file overriding fallback behaviour
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Furniture factory for a style (Royal, Modern)
    Furniture { style: String },

    /// Theme widgets for a platform (windows, Mac)
    Theme { platform: String },

    /// Canvas shapes for a dimension (2d, 3d)
    Shape { dimension: String },

    /// Car for a manufacturer (BMW, Mercedes) and variant (luxury, mini, micro)
    Car { manufacturer: String, variant: String },

    /// Delivery orders (road, sea, air) and their bill
    Delivery {
        #[arg(required = true)]
        kinds: Vec<String>,
    },

    /// House from a director plan (small, big, mansion)
    House { plan: String },

    /// Run every scenario
    Tour,
}

const EXIT_OK: u8 = 0;
const EXIT_CONFIG: u8 = 1;
const EXIT_FAILURE: u8 = 2;

// =============================================================================
// MAIN
// =============================================================================

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    ExitCode::from(run(cli))
}

fn run(cli: Cli) -> u8 {
    let config = match cli.config.as_deref().map(DemoConfig::load).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(err) => {
            eprintln!("{}: {}", "config error".red().bold(), err);
            return EXIT_CONFIG;
        }
    };
    let showroom = match Showroom::new(&config) {
        Ok(showroom) => showroom,
        Err(err) => {
            eprintln!("{}: {}", "config error".red().bold(), err);
            return EXIT_CONFIG;
        }
    };

    let result = match cli.command {
        Commands::Furniture { style } => showroom.furniture(&style).map(print_lines),
        Commands::Theme { platform } => showroom.theme(&platform).map(print_lines),
        Commands::Shape { dimension } => showroom.shape(&dimension).map(print_lines),
        Commands::Car {
            manufacturer,
            variant,
        } => showroom.car(&manufacturer, &variant).map(print_lines),
        Commands::Delivery { kinds } => showroom.delivery(&kinds).map(print_lines),
        Commands::House { plan } => showroom.house(&plan).map(print_lines),
        Commands::Tour => tour(&showroom),
    };

    match result {
        Ok(()) => EXIT_OK,
        Err(err) => {
            eprintln!("{}: {}", "error".red().bold(), err);
            EXIT_FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_lines(lines: Vec<Line>) {
    for line in lines {
        println!("{} {}", format!("{}:", line.capability).dimmed(), line.value.green());
    }
}

fn heading(title: &str) {
    println!("\n{}", format!("=== {title} ===").bold());
}

// =============================================================================
// Tour
// =============================================================================

/// Prints a scenario that exercises an unknown discriminator. A lookup
/// failure is that scenario's output; anything else is propagated.
fn print_fallback_scenario(result: Result<Vec<Line>, ShowroomError>) -> Result<(), ShowroomError> {
    match result {
        Ok(lines) => print_lines(lines),
        Err(ShowroomError::Factory(err @ FactoryError::UnknownDiscriminator { .. })) => {
            println!("{} {}", "rejected:".dimmed(), err.to_string().yellow());
        }
        Err(err) => return Err(err),
    }
    Ok(())
}

fn tour(showroom: &Showroom) -> Result<(), ShowroomError> {
    for style in ["Royal", "Modern"] {
        heading(&format!("Furniture: {style}"));
        print_lines(showroom.furniture(style)?);
    }
    heading("Furniture: Plain");
    print_fallback_scenario(showroom.furniture("Plain"))?;

    heading("Theme: mac");
    print_fallback_scenario(showroom.theme("mac"))?;
    heading("Theme: windows");
    print_lines(showroom.theme("windows")?);

    for dimension in ["3d", "2d"] {
        heading(&format!("Canvas: {dimension}"));
        print_lines(showroom.shape(dimension)?);
    }

    for (manufacturer, variant) in [("BMW", "luxury"), ("Mercedes", "mini")] {
        heading(&format!("Car: {manufacturer} {variant}"));
        print_lines(showroom.car(manufacturer, variant)?);
    }

    heading("Delivery");
    let kinds = ["road", "sea", "air"].map(String::from);
    print_lines(showroom.delivery(&kinds)?);

    for plan in ["small", "big", "mansion"] {
        heading(&format!("House: {plan}"));
        print_lines(showroom.house(plan)?);
    }

    Ok(())
}
