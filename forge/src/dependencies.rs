use std::path::PathBuf;

use forge_core::error::{ForgeError, Result};
use forge_core::{forge_error, forge_println, forge_success};
use forge_messages::MESSAGES;
use which::which;

/// Packages installed into every generated environment, in order.
pub const DEPENDENCIES: &[&str] = &[
    "django",
    "djangorestframework",
    "djoser",
    "djangorestframework-simplejwt",
    "django-cors-headers",
    "celery",
    "redis",
    "dramatiq[redis]",
    "pydantic",
    "drf-yasg",
    "drf-spectacular",
    "python-dotenv",
    "django-phonenumber-field[phonenumberslite]",
];

/// Apps generated inside every new project, in order.
pub const APPS: &[&str] = &["accounts", "core", "tasks"];

/// Locate the system Python interpreter used to create virtual
/// environments. Fatal if none is on the PATH.
pub fn check() -> Result<PathBuf> {
    forge_println!("{}", MESSAGES.python_checking);

    for candidate in ["python3", "python"] {
        if let Ok(path) = which(candidate) {
            forge_success!("Using interpreter: {}", path.display());
            return Ok(path);
        }
    }

    forge_error!("{}", MESSAGES.python_missing);
    Err(ForgeError::Internal("Python not installed".to_string()))
}
