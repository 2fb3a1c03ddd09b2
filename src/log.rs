//! Logging macros.
//!
//! - `with_rtt`: lines go out over RTT via `rtt_target::rprintln!`
//!   (the binary must call `rtt_init_print!()` first).
//! - Host unit tests: `println!`.
//! - Otherwise the arguments are type-checked and dropped.

#[doc(hidden)]
#[inline(always)]
pub fn discard(_args: core::fmt::Arguments<'_>) {}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(feature = "with_rtt")]
        ::rtt_target::rprintln!("[I] {}", format_args!($($arg)*));

        #[cfg(all(not(feature = "with_rtt"), test))]
        println!("[INFO] {}", format_args!($($arg)*));

        #[cfg(all(not(feature = "with_rtt"), not(test)))]
        $crate::log::discard(format_args!($($arg)*));
    }};
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "with_rtt")]
        ::rtt_target::rprintln!("[W] {}", format_args!($($arg)*));

        #[cfg(all(not(feature = "with_rtt"), test))]
        println!("[WARN] {}", format_args!($($arg)*));

        #[cfg(all(not(feature = "with_rtt"), not(test)))]
        $crate::log::discard(format_args!($($arg)*));
    }};
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "with_rtt")]
        ::rtt_target::rprintln!("[D] {}", format_args!($($arg)*));

        #[cfg(all(not(feature = "with_rtt"), test))]
        println!("[DEBUG] {}", format_args!($($arg)*));

        #[cfg(all(not(feature = "with_rtt"), not(test)))]
        $crate::log::discard(format_args!($($arg)*));
    }};
}
