// Overflow Arena: an interactive quiz on integer overflow and wraparound

use std::io;

use crossterm::tty::IsTty;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use overflow_arena::arena::Arena;
use overflow_arena::config::{ArenaConfig, USAGE};
use overflow_arena::console::{run_menu, theme::Painter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let config = match ArenaConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
    };

    if config.show_help {
        println!("{}", USAGE);
        return Ok(());
    }

    // Logs go to stderr so they never interleave with the game on stdout
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let catalog = match config.catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            warn!(error = %e, "rejected type selection");
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
    };
    info!(types = ?catalog.names(), seed = ?config.seed, "starting arena");

    let stdout = io::stdout();
    let color = !config.no_color && stdout.is_tty();
    let painter = Painter::new(color);

    let mut arena = Arena::new(catalog, config.rng(), painter);
    let mut input = io::stdin().lock();
    let mut out = stdout.lock();

    let exit = run_menu(&mut input, &mut out, &mut arena, &painter)?;
    info!(?exit, "menu closed");

    Ok(())
}
