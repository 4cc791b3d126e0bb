//! Private macros used for logging.

/// Prints a debug line when the `ANSCOMBE_DEBUG` environment variable is set.
macro_rules! info {
    ($($arg:tt)*) => (
        if $crate::debug_enabled() {
            println!("Anscombe DEBUG: {}", &format!($($arg)*));
        }
    )
}

/// Prints an error line to stderr.
macro_rules! error {
    ($($arg:tt)*) => (
        eprintln!("Anscombe ERROR: {}", &format!($($arg)*))
    )
}

/// Logs an error, ignores an `Ok` value.
macro_rules! log_if_err {
    ($x:expr) => {
        if let Err(e) = $x {
            $crate::error::log_error(&e);
        }
    };
}
