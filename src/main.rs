#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod engine;
mod gui;
mod hotkey;
mod state;

use std::sync::Arc;

use anyhow::{anyhow, bail};
use clap::Parser;
use eframe::egui;
use tracing::info;
use tracing_subscriber::EnvFilter;

use engine::ClickJob;
use gui::ClickerApp;
use state::{ClickerState, DEFAULT_CPS, MAX_CPS, MIN_CPS};

/// Auto clicker with a global toggle hotkey and a CPS slider.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Starting click rate, in clicks per second
    #[arg(long, default_value_t = DEFAULT_CPS)]
    cps: u32,

    /// Key that toggles clicking on and off (a-z, 0-9, f1-f12)
    #[arg(long, default_value = "t")]
    toggle_key: String,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let Some(toggle) = hotkey::parse_key(&args.toggle_key) else {
        bail!("unrecognized toggle key {:?}", args.toggle_key);
    };

    let state = Arc::new(ClickerState::new(args.cps.clamp(MIN_CPS, MAX_CPS)));
    let job = ClickJob::spawn(Arc::clone(&state));
    hotkey::spawn_listener(Arc::clone(&state), toggle);
    info!(cps = state.cps(), toggle_key = %args.toggle_key, "clicker started");

    let mut opts = eframe::NativeOptions::default();
    opts.viewport.inner_size = Some(egui::vec2(200.0, 200.0));
    opts.viewport.resizable = Some(false);
    opts.follow_system_theme = true;

    let app = ClickerApp::new(Arc::clone(&state), args.toggle_key);
    eframe::run_native(
        "CPS Clicker",
        opts,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Box::new(app)
        }),
    )
    .map_err(|err| anyhow!("window loop failed: {err}"))?;

    // Window closed; stop pacing and join the engine. The rdev listener
    // thread dies with the process.
    job.stop();
    Ok(())
}
