//! Game loop thread: runs the simulation engine at a fixed rate.
//!
//! The engine is created inside this thread because it's cleaner for ownership.
//! Commands arrive via `mpsc` channel, scripted input is polled from the
//! previous frame, and the latest snapshot is stored in shared state.

use std::io;
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use snowman_core::enums::GamePhase;
use snowman_core::events::GameEvent;
use snowman_core::state::FrameSnapshot;
use snowman_sim::engine::{SimConfig, SimulationEngine};

use crate::autopilot::InputSource;
use crate::state::{GameLoopCommand, SharedSnapshot};

/// Pacing and stop conditions for the loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopSettings {
    /// Sleep between ticks to match wall-clock time.
    pub realtime: bool,
    /// Stop after this many simulated seconds. Zero disables the limit.
    pub max_run_secs: f64,
    /// Keep ticking this long after game over before stopping.
    pub game_over_linger_secs: f64,
}

impl Default for LoopSettings {
    fn default() -> Self {
        Self {
            realtime: true,
            max_run_secs: 0.0,
            game_over_linger_secs: 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The player asked to quit.
    Quit,
    /// The owner sent `Shutdown` or dropped its sender.
    Shutdown,
    /// The player was caught.
    GameOver,
    /// `max_run_secs` elapsed.
    TimeLimit,
}

/// Final state of a finished run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub reason: StopReason,
    pub ticks: u64,
    pub elapsed_secs: f64,
    pub snowmen_killed: u32,
    pub snowmen_spawned: u32,
    pub bullets_fired: u32,
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and a handle yielding the run summary.
pub fn spawn_game_loop(
    sim_config: SimConfig,
    settings: LoopSettings,
    input: Box<dyn InputSource>,
    latest_snapshot: SharedSnapshot,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<RunSummary>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("snowman-game-loop".into())
        .spawn(move || {
            let engine = SimulationEngine::new(sim_config);
            run_game_loop(engine, settings, input, cmd_rx, &latest_snapshot)
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until a stop condition is met.
pub fn run_game_loop(
    mut engine: SimulationEngine,
    settings: LoopSettings,
    mut input: Box<dyn InputSource>,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &SharedSnapshot,
) -> RunSummary {
    let tick_duration = Duration::from_secs_f64(engine.dt());
    let mut next_tick_time = Instant::now();
    let mut previous: Option<FrameSnapshot> = None;
    let mut game_over_at: Option<f64> = None;
    let max_ticks = (settings.max_run_secs > 0.0)
        .then(|| (settings.max_run_secs / engine.dt()).round() as u64);

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    return summarize(&engine, StopReason::Shutdown);
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Scripted input reacts to the last frame
        if let Some(snapshot) = &previous {
            engine.queue_commands(input.poll(snapshot));
        }

        // 3. Advance one tick
        let snapshot = engine.tick();
        for event in &snapshot.events {
            log_event(event);
        }

        // 4. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot.clone());
        }

        // 5. Stop conditions
        let elapsed = snapshot.time.elapsed_secs;
        if engine.should_quit() {
            return summarize(&engine, StopReason::Quit);
        }
        if snapshot.phase == GamePhase::GameOver {
            let since = *game_over_at.get_or_insert(elapsed);
            if elapsed - since >= settings.game_over_linger_secs {
                return summarize(&engine, StopReason::GameOver);
            }
        }
        if max_ticks.is_some_and(|max| snapshot.time.tick >= max) {
            return summarize(&engine, StopReason::TimeLimit);
        }
        previous = Some(snapshot);

        // 6. Sleep until next tick
        if settings.realtime {
            next_tick_time += tick_duration;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > tick_duration * 2 {
                // Too far behind, reset to avoid catch-up spiral
                next_tick_time = now;
            }
        }
    }
}

fn summarize(engine: &SimulationEngine, reason: StopReason) -> RunSummary {
    let score = engine.score();
    let time = engine.time();
    log::debug!("game loop stopping: {reason:?} at tick {}", time.tick);
    RunSummary {
        reason,
        ticks: time.tick,
        elapsed_secs: time.elapsed_secs,
        snowmen_killed: score.snowmen_killed,
        snowmen_spawned: score.snowmen_spawned,
        bullets_fired: score.bullets_fired,
    }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::SnowmanSpawned { position } => log::trace!("snowman spawned at {position}"),
        GameEvent::BulletFired { direction, .. } => log::trace!("fired along {direction}"),
        GameEvent::SnowmanKilled { position } => log::info!("snowman down at {position}"),
        GameEvent::PlayerKilled { score } => log::warn!("game over after {score} kills"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autopilot::{Autopilot, Idle};
    use crate::config::AutopilotConfig;
    use crate::state::new_shared_snapshot;
    use snowman_core::commands::PlayerCommand;

    fn fast(max_run_secs: f64) -> LoopSettings {
        LoopSettings {
            realtime: false,
            max_run_secs,
            game_over_linger_secs: 0.5,
        }
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Fire))
            .unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Quit))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::PlayerCommand(PlayerCommand::Fire)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_time_limit_stops_loop() {
        let (_tx, rx) = mpsc::channel();
        let shared = new_shared_snapshot();
        let engine = SimulationEngine::new(SimConfig::default());

        let summary = run_game_loop(engine, fast(2.0), Box::new(Idle), rx, &shared);

        assert_eq!(summary.reason, StopReason::TimeLimit);
        assert_eq!(summary.ticks, 120);
        let latest = shared.lock().unwrap();
        assert_eq!(latest.as_ref().unwrap().time.tick, 120);
    }

    #[test]
    fn test_quit_command_stops_loop() {
        let (tx, rx) = mpsc::channel();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Quit))
            .unwrap();
        let engine = SimulationEngine::new(SimConfig::default());

        let summary = run_game_loop(engine, fast(0.0), Box::new(Idle), rx, &new_shared_snapshot());
        assert_eq!(summary.reason, StopReason::Quit);
        assert_eq!(summary.ticks, 1);
    }

    #[test]
    fn test_dropped_sender_shuts_down() {
        let (tx, rx) = mpsc::channel();
        drop(tx);
        let engine = SimulationEngine::new(SimConfig::default());

        let summary = run_game_loop(engine, fast(0.0), Box::new(Idle), rx, &new_shared_snapshot());
        assert_eq!(summary.reason, StopReason::Shutdown);
        assert_eq!(summary.ticks, 0);
    }

    #[test]
    fn test_idle_player_is_eventually_caught() {
        let (_tx, rx) = mpsc::channel();
        let engine = SimulationEngine::new(SimConfig::default());

        let summary =
            run_game_loop(engine, fast(120.0), Box::new(Idle), rx, &new_shared_snapshot());
        assert_eq!(summary.reason, StopReason::GameOver);
        assert_eq!(summary.snowmen_killed, 0);
        assert_eq!(summary.bullets_fired, 0);
    }

    #[test]
    fn test_autopilot_scores_kills() {
        let (_tx, rx) = mpsc::channel();
        let engine = SimulationEngine::new(SimConfig::default());
        let pilot = Autopilot::new(AutopilotConfig::default(), 60);

        let summary = run_game_loop(engine, fast(30.0), Box::new(pilot), rx, &new_shared_snapshot());
        assert!(summary.bullets_fired > 0);
        assert!(
            summary.snowmen_killed > 0,
            "autopilot should hit something: {summary:?}"
        );
    }

    #[test]
    fn test_spawned_thread_reports_summary() {
        let shared = new_shared_snapshot();
        let (tx, handle) =
            spawn_game_loop(SimConfig::default(), fast(1.0), Box::new(Idle), shared.clone())
                .unwrap();

        let summary = handle.join().unwrap();
        drop(tx);
        assert_eq!(summary.reason, StopReason::TimeLimit);
        assert!(shared.lock().unwrap().is_some());
    }
}
