use clap::Parser;
use clifit::core::config::{self, CliOverrides, ResolvedConfig};
use clifit::core::loader;
use clifit::prepare_session;
use clifit::tui::{self, TuiState, theme::Theme};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "clifit", version, about = "Step through a workout routine in the terminal")]
struct Args {
    /// Workout definitions (YAML). Defaults to ./workouts.yaml
    file: Option<PathBuf>,

    /// Run a single workout by name, skipping the menu
    #[arg(short, long)]
    workout: Option<String>,

    /// Print the workout names and exit
    #[arg(long)]
    list: bool,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Exiting with error: {}", e);
            eprintln!("clifit: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let file_config = config::load_config()?;
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            workouts_file: args.file.as_deref(),
            workout: args.workout.as_deref(),
            log_level: args.log_level.as_deref(),
        },
    );
    init_logging(&resolved);
    log::info!("clifit starting with workouts file {}", resolved.workouts_file.display());

    let catalog = loader::load_catalog(&resolved.workouts_file)?;

    if args.list {
        for workout in catalog.workouts() {
            println!("{}", workout.name);
        }
        return Ok(());
    }

    let (catalog, state) = prepare_session(catalog, resolved.workout.as_deref())?;
    let source_label = resolved
        .workouts_file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| resolved.workouts_file.display().to_string());
    let tui_state = TuiState::new(Theme::from_config(&resolved.theme), source_label);

    tui::run(&catalog, state, tui_state)?;
    log::info!("clifit shutting down");
    Ok(())
}

/// Initialize file logger. The terminal belongs to the TUI, so logs never go there.
fn init_logging(resolved: &ResolvedConfig) {
    let level = LevelFilter::from_str(&resolved.log_level).unwrap_or(LevelFilter::Info);
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }
    if level == LevelFilter::Info && !resolved.log_level.eq_ignore_ascii_case("info") {
        log::warn!("Unknown log level {:?}, using info", resolved.log_level);
    }
}
