//! Central registry for all user-facing message templates.
//!
//! Naming Convention:
//! - `{step}_{event}` - grouped by workflow step (name, env, deps,
//!   scaffold, cleanup)
//!
//! Multi-line messages use `\n` for fewer forge_println! calls.
//! Templates use `{variable}` syntax for runtime values, substituted
//! by the `msg_format!` macro.

pub struct Messages {
    // ============================================================================
    // Header / Preflight
    // ============================================================================
    pub header: &'static str,
    pub python_checking: &'static str,
    pub python_missing: &'static str,

    // ============================================================================
    // Project Name Collection
    // ============================================================================
    pub name_prompt: &'static str,
    pub name_attempts_exhausted: &'static str,
    pub name_env_exists: &'static str,
    pub name_input_closed: &'static str,

    // ============================================================================
    // Environment Creation
    // ============================================================================
    pub env_already_exists: &'static str,
    pub env_created: &'static str,
    pub env_creating: &'static str,
    pub env_incomplete: &'static str,

    // ============================================================================
    // Dependency Installation
    // ============================================================================
    pub dep_install_failed: &'static str,
    pub dep_installed: &'static str,
    pub deps_installing: &'static str,
    pub pip_upgrade_failed: &'static str,

    // ============================================================================
    // Project Scaffolding
    // ============================================================================
    pub scaffold_progress: &'static str,
    pub scaffold_success: &'static str,

    // ============================================================================
    // Success / Cleanup
    // ============================================================================
    pub cleanup_failed: &'static str,
    pub cleanup_removed: &'static str,
    pub success_block: &'static str,
}

pub const MESSAGES: Messages = Messages {
    header: "🔨 django-forge: Django backend scaffolding",
    python_checking: "Checking for a Python interpreter...",
    python_missing: "No Python interpreter found in PATH.\nInstall Python 3 (https://www.python.org/downloads/) and try again.",

    name_prompt: "Django project name (lowercase, no spaces): ",
    name_attempts_exhausted: "Too many invalid project names, giving up",
    name_env_exists: "An environment for '{name}' already exists. Choose another name.",
    name_input_closed: "Input closed before a project name was provided",

    env_already_exists: "Environment directory already exists: {path}",
    env_created: "🔧 Virtual environment created: {path}",
    env_creating: "Creating virtual environment for '{name}'...",
    env_incomplete: "Virtual environment at {path} is missing its executable directory",

    dep_install_failed: "❌ Failed to install {name}",
    dep_installed: "✅ Installed: {name}",
    deps_installing: "Installing dependencies...",
    pip_upgrade_failed: "Could not upgrade pip, continuing with the bundled version",

    scaffold_progress: "Generating Django project '{name}'...",
    scaffold_success: "🏗️ Django project and apps created",

    cleanup_failed: "Could not remove {path}: {error}",
    cleanup_removed: "Removed {path}",
    success_block: "\n🚀 Project '{name}' generated successfully!\nNext steps:\n  1. cd {name}\n  2. source ../{name}_env/bin/activate\n  3. python manage.py makemigrations\n  4. python manage.py migrate",
};
