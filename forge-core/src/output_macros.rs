//! Output macros for consistent, themed user-facing messages.
//!
//! Templates live in the `forge-messages` crate and use `{variable}`
//! placeholders, which `msg_format!` substitutes at the call site.

#[macro_export]
macro_rules! msg_format {
    ($template:expr) => {
        $template
    };
    ($template:expr, $($key:ident = $value:expr),+ $(,)?) => {
        {
            let mut result = $template.to_string();
            $(
                result = result.replace(&format!("{{{}}}", stringify!($key)), &$value.to_string());
            )+
            result
        }
    };
}

#[macro_export]
macro_rules! forge_println {
    () => {
        println!();
    };
    ($($arg:tt)*) => {
        println!("{}", format!($($arg)*));
    }
}

#[macro_export]
macro_rules! forge_error {
    ($($arg:tt)*) => {
        eprintln!("{}", format!($($arg)*));
    }
}

#[macro_export]
macro_rules! forge_success {
    ($($arg:tt)*) => {
        eprintln!("✓ {}", format!($($arg)*));
    }
}

#[macro_export]
macro_rules! forge_warning {
    ($($arg:tt)*) => {
        eprintln!("⚠ {}", format!($($arg)*));
    }
}

#[macro_export]
macro_rules! forge_progress {
    ($($arg:tt)*) => {
        eprintln!("▶ {}", format!($($arg)*));
    }
}
