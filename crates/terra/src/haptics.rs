//! Haptic pulse requests.

use std::io::{self, Write};
use std::time::Duration;

pub const EARTH_PULSE: Duration = Duration::from_millis(100);
pub const SUN_PULSE: Duration = Duration::from_millis(50);

/// Somewhere to deliver a pulse of a given length.
pub trait Haptics {
    fn pulse(&mut self, length: Duration) -> io::Result<()>;
}

/// Rings the terminal bell. Terminals cannot vibrate, so the length is only logged.
#[derive(Debug, Default)]
pub struct TerminalBell;

impl Haptics for TerminalBell {
    fn pulse(&mut self, length: Duration) -> io::Result<()> {
        log::debug!(target: "haptics", "bell for {}ms", length.as_millis());
        let mut stdout = io::stdout();
        stdout.write_all(b"\x07")?;
        stdout.flush()
    }
}
