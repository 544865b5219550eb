use std::sync::Arc;
use std::thread;

use rdev::{listen, Event, EventType, Key};
use tracing::{debug, error};

use crate::state::ClickerState;

/// Spawns the global key listener thread. Every delivered press of `toggle`
/// flips the enabled flag; key-repeat presses are not filtered, matching the
/// tap-to-toggle behavior. The thread lives until process exit — `listen`
/// has no cancellation.
pub fn spawn_listener(state: Arc<ClickerState>, toggle: Key) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let callback = move |event: Event| handle_event(&state, toggle, &event);
        if let Err(err) = listen(callback) {
            // The GUI and engine stay usable without the hotkey.
            error!(?err, "global key listener failed");
        }
    })
}

fn handle_event(state: &ClickerState, toggle: Key, event: &Event) {
    if let EventType::KeyPress(key) = event.event_type {
        if key == toggle {
            let enabled = state.toggle_enabled();
            debug!(enabled, "toggle key pressed");
        }
    }
}

/// Parses a toggle-key name from the command line: letters, digits and
/// f1-f12.
pub fn parse_key(name: &str) -> Option<Key> {
    let key = match name.to_ascii_lowercase().as_str() {
        "a" => Key::KeyA,
        "b" => Key::KeyB,
        "c" => Key::KeyC,
        "d" => Key::KeyD,
        "e" => Key::KeyE,
        "f" => Key::KeyF,
        "g" => Key::KeyG,
        "h" => Key::KeyH,
        "i" => Key::KeyI,
        "j" => Key::KeyJ,
        "k" => Key::KeyK,
        "l" => Key::KeyL,
        "m" => Key::KeyM,
        "n" => Key::KeyN,
        "o" => Key::KeyO,
        "p" => Key::KeyP,
        "q" => Key::KeyQ,
        "r" => Key::KeyR,
        "s" => Key::KeyS,
        "t" => Key::KeyT,
        "u" => Key::KeyU,
        "v" => Key::KeyV,
        "w" => Key::KeyW,
        "x" => Key::KeyX,
        "y" => Key::KeyY,
        "z" => Key::KeyZ,
        "0" => Key::Num0,
        "1" => Key::Num1,
        "2" => Key::Num2,
        "3" => Key::Num3,
        "4" => Key::Num4,
        "5" => Key::Num5,
        "6" => Key::Num6,
        "7" => Key::Num7,
        "8" => Key::Num8,
        "9" => Key::Num9,
        "f1" => Key::F1,
        "f2" => Key::F2,
        "f3" => Key::F3,
        "f4" => Key::F4,
        "f5" => Key::F5,
        "f6" => Key::F6,
        "f7" => Key::F7,
        "f8" => Key::F8,
        "f9" => Key::F9,
        "f10" => Key::F10,
        "f11" => Key::F11,
        "f12" => Key::F12,
        _ => return None,
    };
    Some(key)
}
