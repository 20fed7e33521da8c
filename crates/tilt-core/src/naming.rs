//! Canonical tracker identifiers extracted from raw column headers.

use regex::Regex;

fn tracker_pattern() -> Regex {
    Regex::new(r"ICR(\d+)-INV(\d+)-SMB(\d+)-NCU(\d+)-MSAT(\d+)-Gr(\d+)-T(\d+)")
        .expect("regex is valid")
}

/// Reduce a raw column header to its canonical tracker identifier.
///
/// The identifier may appear anywhere in `name`; surrounding text is dropped.
/// Headers without an identifier are returned unchanged.
pub fn transform_tracker_name(name: &str) -> String {
    match tracker_pattern().captures(name) {
        Some(caps) => format!(
            "ICR{}-INV{}-SMB{}-NCU{}-MSAT{}-Gr{}-T{}",
            &caps[1], &caps[2], &caps[3], &caps[4], &caps[5], &caps[6], &caps[7]
        ),
        None => name.to_string(),
    }
}

/// Whether `name` contains a tracker identifier.
pub fn is_tracker_name(name: &str) -> bool {
    tracker_pattern().is_match(name)
}
