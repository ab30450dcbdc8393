// Process-wide verbosity switch and the logging macros built on it
use std::sync::atomic::{AtomicU8, Ordering};

pub const QUIET: u8 = 0;
pub const BASIC: u8 = 1;
pub const FULL: u8 = 2;

static VERBOSITY_LEVEL: AtomicU8 = AtomicU8::new(QUIET);

pub fn set_verbosity_level(level: u8) {
    let level = level.min(FULL);
    VERBOSITY_LEVEL.store(level, Ordering::Relaxed);
    if level > QUIET {
        println!("📢 Verbosity level: {} (0=quiet, 1=basic, 2=full)", level);
    }
}

pub fn get_verbosity_level() -> u8 {
    VERBOSITY_LEVEL.load(Ordering::Relaxed)
}

pub fn enabled(level: u8) -> bool {
    get_verbosity_level() >= level
}

#[macro_export]
macro_rules! v_print {
    ($level:expr, $($arg:tt)*) => {
        if $crate::verbosity::enabled($level) {
            println!($($arg)*);
        }
    };
}

/// Always shown
#[macro_export]
macro_rules! v_summary {
    ($($arg:tt)*) => { $crate::v_print!($crate::verbosity::QUIET, $($arg)*); };
}

#[macro_export]
macro_rules! v_info {
    ($($arg:tt)*) => { $crate::v_print!($crate::verbosity::BASIC, $($arg)*); };
}

#[macro_export]
macro_rules! v_debug {
    ($($arg:tt)*) => { $crate::v_print!($crate::verbosity::FULL, $($arg)*); };
}

#[macro_export]
macro_rules! v_trace {
    ($($arg:tt)*) => { $crate::v_print!($crate::verbosity::FULL, $($arg)*); };
}

// Errors go to stderr regardless of level
#[macro_export]
macro_rules! v_error {
    ($($arg:tt)*) => { eprintln!($($arg)*); };
}
