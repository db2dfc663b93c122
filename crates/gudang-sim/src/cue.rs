//! Audible cue for applied events.
//!
//! Best effort only: the cue is an ASCII BEL written to stdout, and any
//! write failure is ignored. Headless deployments simply hear nothing.

use std::io::Write;

/// Emit the terminal bell.
pub fn beep() {
    let mut stdout = std::io::stdout();
    let _ = stdout.write_all(b"\x07");
    let _ = stdout.flush();
}
