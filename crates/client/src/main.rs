//! Headless demo client.
//!
//! Composition root for the runtime: loads a stage, builds the director,
//! and drives it on the real-time clock with a scripted pilot standing in
//! for a player. A renderer would implement the same [`Step`] wiring and
//! draw with the interpolation alpha; this binary just logs what happened.
//!
//! # Examples
//!
//! ```bash
//! # Run the built-in stage with the default settings
//! cargo run -p harrow-client
//!
//! # Run a custom stage and save the resulting progress
//! HARROW_STAGE=stages/crypt.json HARROW_SESSION=slot_1 cargo run -p harrow-client
//! ```

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use harrow_content::{StageData, StageLoader};
use harrow_core::{EngineConfig, FrameInput, Vec2};
use harrow_runtime::{Clock, ClockConfig, Director, SessionStore, Step, StopHandle};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Stage used when `HARROW_STAGE` is not set.
const SAMPLE_STAGE: &str = include_str!("../data/stage.json");

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    setup_logging();

    let stage = load_stage(&config)?;
    tracing::info!(
        stage = %stage.name,
        entities = stage.entities.len(),
        triggers = stage.triggers.len(),
        "stage loaded"
    );

    let (world, triggers) = stage.build();
    let director = Director::new(world, triggers, EngineConfig::default());

    let mut clock = Clock::new(ClockConfig::default());
    let mut pilot = Pilot::new(director, clock.stop_handle(), config.run_seconds);
    clock.run(&mut pilot);

    report(&pilot, clock.fps());

    if let Some(name) = &config.session {
        let store = SessionStore::open_default()?;
        store.save(name, &pilot.director.world().game)?;
        tracing::info!(
            session = %name,
            dir = %store.base_dir().display(),
            "progress saved"
        );
    }

    Ok(())
}

/// Demo client configuration.
#[derive(Clone, Debug)]
struct ClientConfig {
    stage_path: Option<PathBuf>,
    run_seconds: f32,
    session: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            stage_path: None,
            run_seconds: 8.0,
            session: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `HARROW_STAGE` - Path to a stage JSON file (default: built-in sample)
    /// - `HARROW_RUN_SECONDS` - Wall seconds before the demo stops (default: 8)
    /// - `HARROW_SESSION` - Session name to save progress under (default: no save)
    fn from_env() -> Self {
        let mut config = Self::default();

        config.stage_path = env::var("HARROW_STAGE").ok().map(PathBuf::from);
        if let Some(seconds) = read_env::<f32>("HARROW_RUN_SECONDS") {
            config.run_seconds = seconds.max(0.0);
        }
        config.session = env::var("HARROW_SESSION").ok();

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

/// Logs to stderr, `RUST_LOG` overriding the `info` default.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn load_stage(config: &ClientConfig) -> Result<StageData> {
    match &config.stage_path {
        Some(path) => StageLoader::load(path)
            .with_context(|| format!("loading stage {}", path.display())),
        None => StageLoader::parse(SAMPLE_STAGE).context("built-in stage should parse"),
    }
}

/// Stand-in player: holds east the whole run and taps interact now and
/// then, which is enough to walk the sample stage end to end.
struct Pilot {
    director: Director,
    stop: StopHandle,
    run_seconds: f32,
    elapsed: f32,
    next_press: f32,
}

impl Pilot {
    const PRESS_INTERVAL: f32 = 0.25;

    fn new(director: Director, stop: StopHandle, run_seconds: f32) -> Self {
        Self {
            director,
            stop,
            run_seconds,
            elapsed: 0.0,
            next_press: Self::PRESS_INTERVAL,
        }
    }
}

impl Step for Pilot {
    fn simulate(&mut self, dt: f32) {
        self.elapsed += dt;

        let mut input = FrameInput::moving(Vec2::new(1.0, 0.0));
        if self.elapsed >= self.next_press {
            input.interact = true;
            self.next_press += Self::PRESS_INTERVAL;
        }
        self.director.stage_input(input);
        self.director.simulate(dt);

        if self.elapsed >= self.run_seconds {
            self.stop.stop();
        }
    }

    fn render(&mut self, alpha: f32) {
        self.director.render(alpha);
    }
}

fn report(pilot: &Pilot, fps: u32) {
    let world = pilot.director.world();
    tracing::info!(
        fps,
        simulated_seconds = pilot.elapsed,
        position = ?world.player.position,
        script_running = pilot.director.scripts().running(),
        "run finished"
    );
    for (flag, value) in &world.game.flags {
        tracing::info!(flag = %flag, value, "flag");
    }
    for slot in world.game.inventory.slots() {
        tracing::info!(item = %slot.name, amount = slot.amount, "inventory");
    }
}
