use crate::rank::ResultEntry;
use std::fmt::Write;

/// One line per entry: `deviceID: (upTraffic, downTraffic, timestamp)`.
pub fn render_text(entries: &[ResultEntry]) -> String {
    let mut out = String::new();
    for e in entries {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{}: {}", e.device, e.key);
    }
    out
}
