//! Environment variable parsing that does not swallow mistakes.

/// Read an environment variable, falling back to `default`.
///
/// An unset variable is the expected case and falls back silently. A variable
/// that is set but does not parse logs a warning instead of being ignored, so
/// a typo in a deployment (`HOSTELVOICE_PAGE_SIZE=ten`) is visible in the
/// logs rather than a silent surprise.
pub fn parse_or_default<T: std::str::FromStr + std::fmt::Display>(var: &str, default: T) -> T {
    match std::env::var(var) {
        Ok(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(var, value = %raw, default = %default, "unparseable env var, using default");
                default
            },
        },
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let var = "HV_TEST_PARSE_VALID_41923";
        unsafe { std::env::set_var(var, "25") };
        let parsed: u32 = parse_or_default(var, 10);
        assert_eq!(parsed, 25);
        unsafe { std::env::remove_var(var) };
    }

    #[test]
    fn test_parse_garbage_falls_back() {
        let var = "HV_TEST_PARSE_GARBAGE_41924";
        unsafe { std::env::set_var(var, "ten") };
        let parsed: u32 = parse_or_default(var, 10);
        assert_eq!(parsed, 10);
        unsafe { std::env::remove_var(var) };
    }

    #[test]
    fn test_parse_unset_falls_back() {
        let var = "HV_TEST_PARSE_UNSET_41925";
        unsafe { std::env::remove_var(var) };
        let parsed: u32 = parse_or_default(var, 10);
        assert_eq!(parsed, 10);
    }
}
