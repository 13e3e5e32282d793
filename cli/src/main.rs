mod error_formatter;
mod formatter;
mod interactive;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use formatter::Formatter;
use geotutor::{PiMode, Tutor, TutorConfig};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "geotutor")]
#[command(about = "A geometry tutor that explains your mistakes.")]
#[command(
    long_about = "Geotutor computes the area and perimeter of squares, rectangles, triangles and circles.\nWhen your measurements look wrong, it tells you why with a hint."
)]
#[command(version)]
struct Cli {
    /// JSON configuration file (pi mode, hint thresholds, display precision)
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,
    /// Use π = 3.14 as on classroom worksheets
    #[arg(long, global = true)]
    classroom_pi: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate area and perimeter for a shape (try: square side=5)
    ///
    /// Computes area and perimeter from the given measurements, shows the
    /// formulas used, and adds a hint when the input looks like a mistake.
    Calc {
        /// Shape to calculate: square, rectangle, triangle or circle
        shape: Option<String>,
        /// Measurements (format: name=value)
        ///
        /// Examples:
        ///   square    side=5
        ///   rectangle length=4 width=2
        ///   triangle  base=3 height=4 side1=3 side2=4 side3=5
        ///   circle    radius=7
        fields: Vec<String>,
        /// Output JSON instead of tables
        #[arg(short = 'j', long)]
        json: bool,
        /// Show which hint rules were checked
        #[arg(short = 't', long)]
        trace: bool,
    },
    /// Pick a shape and enter measurements step by step
    Interactive {
        /// Show which hint rules were checked
        #[arg(short = 't', long)]
        trace: bool,
    },
    /// List the supported shapes with their fields and formulas
    Shapes,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = load_config(cli.config.as_deref(), cli.classroom_pi).and_then(|config| {
        let tutor = Tutor::with_config(config);
        match &cli.command {
            Commands::Calc {
                shape,
                fields,
                json,
                trace,
            } => calc_command(&tutor, shape.as_deref(), fields, *json, *trace),
            Commands::Interactive { trace } => interactive::run_interactive(&tutor, *trace),
            Commands::Shapes => shapes_command(),
        }
    });

    if let Err(e) = result {
        // Point at the offending argument when the tutor rejected an input
        if let Some(tutor_err) = e.downcast_ref::<geotutor::TutorError>() {
            let fields: &[String] = match &cli.command {
                Commands::Calc { fields, .. } => fields.as_slice(),
                _ => &[],
            };
            eprintln!("{}", error_formatter::format_error(tutor_err, fields));
        } else {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "geotutor=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>, classroom_pi: bool) -> Result<TutorConfig> {
    let mut config = match path {
        Some(path) => {
            let bytes = fs::read(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            TutorConfig::from_json(&bytes)?
        }
        None => TutorConfig::default(),
    };

    if classroom_pi {
        config = config.with_pi(PiMode::Classroom);
    }

    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}

fn calc_command(
    tutor: &Tutor,
    shape: Option<&str>,
    fields: &[String],
    json: bool,
    trace: bool,
) -> Result<()> {
    let refs: Vec<&str> = fields.iter().map(|s| s.as_str()).collect();
    let calculation = tutor.calculate(shape, &refs)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&calculation)?);
    } else {
        let formatter = Formatter::new(tutor.config().decimals);
        print!("{}", formatter.format_calculation(&calculation, trace));
    }

    Ok(())
}

fn shapes_command() -> Result<()> {
    let formatter = Formatter::default();
    print!("{}", formatter.format_shapes());
    Ok(())
}
