//! Exit code constants for the testgen CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable input, invalid config)
//! - 2: Unknown prompt key or missing template

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable DOM file, or invalid config.
pub const USER_ERROR: i32 = 1;

/// The requested prompt key does not name a catalog entry.
pub const NOT_FOUND: i32 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, NOT_FOUND];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
