//! snowman-shooter: headless runner for the snowman shooter simulation.
//!
//! Usage:
//!   snowman-shooter [--config snowman.toml] [--seed N] [--max-secs S] [--fast] [--manual]

use std::process;

use snowman_app::autopilot::{Autopilot, Idle, InputSource};
use snowman_app::cli::{load_config, wants_help, CliError};
use snowman_app::config::AppConfig;
use snowman_app::game_loop::{spawn_game_loop, LoopSettings};
use snowman_app::state::new_shared_snapshot;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if wants_help(&args) {
        print_usage();
        return;
    }

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(err) = run(config) {
        log::error!("{err}");
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!(
        "snowman-shooter: first-person snowman shooter (headless)\n\
         \n\
         Options:\n\
         \n\
           --config <path>   TOML config file (default: built-in settings)\n\
           --seed <N>        Override the RNG seed\n\
           --max-secs <S>    Stop after S simulated seconds (0 = until game over)\n\
           --fast            Run as fast as possible instead of in real time\n\
           --manual          Disable the autopilot\n\
         \n\
         Set RUST_LOG=debug for per-event output.\n"
    );
}

fn run(config: AppConfig) -> Result<(), CliError> {
    let sim_config = config.sim_config()?;
    let settings = LoopSettings {
        realtime: config.realtime,
        max_run_secs: config.max_run_secs,
        game_over_linger_secs: config.game_over_linger_secs,
    };
    let input: Box<dyn InputSource> = if config.autopilot.enabled {
        Box::new(Autopilot::new(config.autopilot.clone(), config.tick_rate))
    } else {
        Box::new(Idle)
    };

    log::info!(
        "starting: seed {}, {} Hz, {}x{}",
        config.seed,
        config.tick_rate,
        config.window.width,
        config.window.height
    );

    let latest = new_shared_snapshot();
    let (cmd_tx, handle) =
        spawn_game_loop(sim_config, settings, input, latest).map_err(CliError::Spawn)?;
    let summary = handle.join().map_err(|_| CliError::LoopPanicked)?;
    drop(cmd_tx);

    log::info!(
        "stopped ({:?}) after {:.1}s: {} spawned, {} shots",
        summary.reason,
        summary.elapsed_secs,
        summary.snowmen_spawned,
        summary.bullets_fired
    );
    println!("You killed {} snowmen!", summary.snowmen_killed);
    Ok(())
}
