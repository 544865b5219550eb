use parking_lot::Mutex;

pub const MIN_CPS: u32 = 1;
pub const MAX_CPS: u32 = 900;
pub const DEFAULT_CPS: u32 = 10;

/// Rate and toggle state shared by the click engine, the hotkey listener and
/// the GUI. A single mutex covers all fields and is only ever held for the
/// duration of one read or write, never across a sleep or a frame.
pub struct ClickerState {
    inner: Mutex<Inner>,
}

struct Inner {
    cps: u32,
    enabled: bool,
    jitter: bool,
}

impl ClickerState {
    pub fn new(cps: u32) -> Self {
        Self {
            inner: Mutex::new(Inner {
                cps,
                enabled: false,
                jitter: false,
            }),
        }
    }

    pub fn cps(&self) -> u32 {
        self.inner.lock().cps
    }

    /// Callers clamp to [`MIN_CPS`, `MAX_CPS`] before writing; the single
    /// conversion point for pointer positions lives in the slider.
    pub fn set_cps(&self, cps: u32) {
        self.inner.lock().cps = cps;
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.lock().enabled
    }

    /// Flips the enabled flag and returns the new value.
    pub fn toggle_enabled(&self) -> bool {
        let mut inner = self.inner.lock();
        inner.enabled = !inner.enabled;
        inner.enabled
    }

    pub fn jitter(&self) -> bool {
        self.inner.lock().jitter
    }

    pub fn set_jitter(&self, jitter: bool) {
        self.inner.lock().jitter = jitter;
    }
}

impl Default for ClickerState {
    fn default() -> Self {
        Self::new(DEFAULT_CPS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_state_defaults() {
        let state = ClickerState::default();
        assert_eq!(state.cps(), DEFAULT_CPS);
        assert!(!state.is_enabled());
        assert!(!state.jitter());
    }

    #[test]
    fn test_set_and_read_cps() {
        let state = ClickerState::default();
        state.set_cps(MAX_CPS);
        assert_eq!(state.cps(), MAX_CPS);
        state.set_cps(MIN_CPS);
        assert_eq!(state.cps(), MIN_CPS);
    }

    #[test]
    fn test_toggle_pair_restores_original() {
        let state = ClickerState::default();
        assert!(state.toggle_enabled());
        assert!(!state.toggle_enabled());
        assert!(!state.is_enabled());
    }

    #[test]
    fn test_concurrent_rate_reads_never_tear() {
        let state = Arc::new(ClickerState::new(MIN_CPS));

        let writer = thread::spawn({
            let state = Arc::clone(&state);
            move || {
                for _ in 0..10_000 {
                    state.set_cps(MIN_CPS);
                    state.set_cps(MAX_CPS);
                }
            }
        });

        // Every observed value must be one that some writer fully wrote.
        for _ in 0..10_000 {
            let cps = state.cps();
            assert!(cps == MIN_CPS || cps == MAX_CPS, "torn read: {cps}");
        }

        writer.join().unwrap();
    }
}
