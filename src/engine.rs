use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use enigo::{self, MouseButton, MouseControllable};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use rand::Rng;
use tracing::debug;

use crate::state::ClickerState;

/// Poll interval while the clicker is switched off. Also bounds how long a
/// toggle takes to be noticed when the engine is idle.
const IDLE_POLL: Duration = Duration::from_millis(10);
/// Largest single sleep slice, so `stop` is honored promptly.
const SLEEP_SLICE_MS: u64 = 50;
/// Relative spread applied to the pacing delay when jitter is on.
const JITTER_FRAC: f32 = 0.1;

static ENIGO: Lazy<Mutex<enigo::Enigo>> = Lazy::new(|| Mutex::new(enigo::Enigo::new()));

/// Background thread that fires left clicks at the shared rate while the
/// enabled flag is set.
pub struct ClickJob {
    running: Arc<AtomicBool>,
    handle: Option<thread::JoinHandle<()>>,
}

impl ClickJob {
    pub fn spawn(state: Arc<ClickerState>) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let running_clone = Arc::clone(&running);

        debug!(cps = state.cps(), "starting click job");

        let handle = thread::spawn(move || {
            run(&state, &running_clone, || {
                ENIGO.lock().mouse_click(MouseButton::Left);
            });
        });

        Self {
            running,
            handle: Some(handle),
        }
    }

    pub fn stop(mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Engine loop: one click then a `1/cps` pause while enabled, a short idle
/// poll otherwise. Generic over the click action so tests can count clicks
/// without injecting real input.
fn run<F: FnMut()>(state: &ClickerState, running: &AtomicBool, mut click: F) {
    let mut rng = rand::thread_rng();

    while running.load(Ordering::Relaxed) {
        if !state.is_enabled() {
            thread::sleep(IDLE_POLL);
            continue;
        }

        click();

        // Re-read the rate every iteration so a mid-drag change takes
        // effect on the very next click.
        let base = 1.0 / state.cps() as f32;
        let secs = if state.jitter() {
            rng.gen_range(base * (1.0 - JITTER_FRAC)..=base * (1.0 + JITTER_FRAC))
        } else {
            base
        };
        sleep_interruptible(running, (secs * 1000.0) as u64);
    }
}

fn sleep_interruptible(running: &AtomicBool, ms: u64) {
    for _ in 0..ms / SLEEP_SLICE_MS {
        if !running.load(Ordering::Relaxed) {
            return;
        }
        thread::sleep(Duration::from_millis(SLEEP_SLICE_MS));
    }
    if ms % SLEEP_SLICE_MS != 0 {
        thread::sleep(Duration::from_millis(ms % SLEEP_SLICE_MS));
    }
}
