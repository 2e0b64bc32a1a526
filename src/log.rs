#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum LogLevel {
    Error = 0,
    Warn = 1,
    Debug = 2,
}

impl From<u64> for LogLevel {
    fn from(verbosity: u64) -> LogLevel {
        match verbosity {
            0 => LogLevel::Error,
            1 => LogLevel::Warn,
            2 => LogLevel::Debug,
            _ => LogLevel::Warn         // warning level by default
        }
    }
}

/// Diagnostics go to stderr, stdout is reserved for hash output.
#[macro_export]
macro_rules! log_println {
    ($current_level:expr, $required_level:expr, $($arg:tt)*) => {
        if $current_level >= $required_level {
            eprintln!($($arg)*);
        }
    };
}
