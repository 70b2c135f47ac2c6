use std::{str::FromStr, sync::OnceLock};

use regex::Regex;

static SIZE_RE: OnceLock<Regex> = OnceLock::new();

/// Parse a whole string as a number, ignoring surrounding white space
pub fn parse_int<T: FromStr>(s: &str) -> Option<T> {
    s.trim().parse::<T>().ok()
}

/// Parse a size such as 100, 512K or 4 G
///
/// The optional suffix is a binary multiple (K = 1024, M = 1024^2, ...).
/// Returns None if the string is malformed or the result does not fit in a u64
pub fn parse_size(s: &str) -> Option<u64> {
    let reg = SIZE_RE.get_or_init(|| {
        Regex::new(r#"^\s*([0-9]+)\s*([KMGTPE]?)\s*$"#).expect("invalid size pattern")
    });
    let cap = reg.captures(s)?;
    let x = cap.get(1)?.as_str().parse::<u64>().ok()?;
    let shift = match cap.get(2).map(|m| m.as_str()) {
        Some("K") => 10,
        Some("M") => 20,
        Some("G") => 30,
        Some("T") => 40,
        Some("P") => 50,
        Some("E") => 60,
        _ => 0,
    };
    x.checked_mul(1u64 << shift)
}
