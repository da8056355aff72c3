//! Macros for common CLI error handling patterns.

/// Write to a stream and bail out with the error exit code if writing fails.
///
/// Handles the common pattern of writing to stdout/stderr where a broken
/// pipe leaves nothing sensible to do but stop.
///
/// # Examples
///
/// ```ignore
/// write_or_exit!(out, "{}", header_line);
/// ```
#[macro_export]
macro_rules! write_or_exit {
    ($dest:expr, $($arg:tt)*) => {
        if writeln!($dest, $($arg)*).is_err() {
            return $crate::exit_code::ERROR;
        }
    };
}
