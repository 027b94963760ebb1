//! File size conversion
//!
//! Result lists show sizes like "1.5 MB"; the client reports bytes.

use log::debug;

const KIB: f64 = 1024.0;
const MIB: f64 = 1024.0 * 1024.0;
const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Converts a human-readable size into a byte count
///
/// Accepts `"<number> <unit>"` where the unit contains `kb`, `mb` or `gb`
/// (case-insensitive, binary multiples); any other unit, or a bare number,
/// counts as bytes. The product is rounded up. Malformed input yields 0.
///
/// # Example
/// ```
/// use euroshare_core::parse_size;
/// assert_eq!(parse_size("1.5 MB"), 1_572_864);
/// assert_eq!(parse_size("500 kB"), 512_000);
/// assert_eq!(parse_size("10"), 10);
/// assert_eq!(parse_size("garbage"), 0);
/// ```
pub fn parse_size(text: &str) -> u64 {
    let lowered = text.trim().to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();

    let (number, multiplier) = match tokens.as_slice() {
        [number] => (*number, 1.0),
        [number, unit] => (*number, unit_multiplier(unit)),
        _ => {
            debug!("Unexpected size format: {:?}", text);
            return 0;
        }
    };

    match number.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => (value * multiplier).ceil() as u64,
        _ => {
            debug!("Unexpected size value: {:?}", text);
            0
        }
    }
}

fn unit_multiplier(unit: &str) -> f64 {
    if unit.contains("kb") {
        KIB
    } else if unit.contains("mb") {
        MIB
    } else if unit.contains("gb") {
        GIB
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_size_megabytes() {
        assert_eq!(parse_size("1.5 MB"), 1_572_864);
    }

    #[test]
    fn test_parse_size_kilobytes() {
        assert_eq!(parse_size("500 kB"), 512_000);
    }

    #[test]
    fn test_parse_size_gigabytes_rounds_up() {
        assert_eq!(parse_size("0.1 GB"), 107_374_183);
    }

    #[test]
    fn test_parse_size_bare_number() {
        assert_eq!(parse_size("10"), 10);
    }

    #[test]
    fn test_parse_size_unknown_unit_counts_bytes() {
        assert_eq!(parse_size("42 bytes"), 42);
    }

    #[test]
    fn test_parse_size_surrounding_whitespace() {
        assert_eq!(parse_size("  2 gb \n"), 2 * 1024 * 1024 * 1024);
    }

    #[test]
    fn test_parse_size_malformed() {
        assert_eq!(parse_size("garbage"), 0);
        assert_eq!(parse_size(""), 0);
        assert_eq!(parse_size("1.5 MB extra"), 0);
        assert_eq!(parse_size("many MB"), 0);
        assert_eq!(parse_size("-3 MB"), 0);
        assert_eq!(parse_size("NaN kB"), 0);
    }

    proptest! {
        #[test]
        fn prop_parse_size_never_panics(text in "\\PC*") {
            let _ = parse_size(&text);
        }

        #[test]
        fn prop_kilobytes_are_1024_bytes(n in 0u64..1_000_000) {
            prop_assert_eq!(parse_size(&format!("{} kB", n)), n * 1024);
        }

        #[test]
        fn prop_unit_case_is_ignored(n in 0u64..10_000, unit in prop::sample::select(vec!["mb", "MB", "Mb", "mB"])) {
            prop_assert_eq!(parse_size(&format!("{} {}", n, unit)), n * 1024 * 1024);
        }
    }
}
