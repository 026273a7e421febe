//! Path layout of a Python virtual environment, resolved per host OS.
//!
//! A virtual environment keeps its executables under `Scripts\` on
//! Windows and `bin/` everywhere else. These helpers are pure path
//! computation; they never touch the filesystem.

use std::path::{Path, PathBuf};

/// Executables bundled inside a virtual environment.
pub struct ToolPaths {
    pub pip: PathBuf,
    pub python: PathBuf,
}

/// The subfolder of a virtual environment that holds its executables.
pub fn venv_bin_dir(env_path: &Path) -> PathBuf {
    if cfg!(windows) {
        env_path.join("Scripts")
    } else {
        env_path.join("bin")
    }
}

/// Derive the bundled pip and interpreter paths for an environment.
pub fn env_tool_paths(env_path: &Path) -> ToolPaths {
    let bin_dir = venv_bin_dir(env_path);
    ToolPaths {
        pip: bin_dir.join(executable_name("pip")),
        python: bin_dir.join(executable_name("python")),
    }
}

/// Get the correct executable name for the platform (adds .exe on Windows).
pub fn executable_name(base: &str) -> String {
    if cfg!(windows) {
        format!("{}.exe", base)
    } else {
        base.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_venv_bin_dir_matches_host_layout() {
        let bin = venv_bin_dir(Path::new("/work/demo_env"));
        if cfg!(windows) {
            assert!(bin.ends_with("Scripts"));
        } else {
            assert!(bin.ends_with("bin"));
        }
    }

    #[test]
    fn test_env_tool_paths_live_in_bin_dir() {
        let env_path = Path::new("/work/demo_env");
        let tools = env_tool_paths(env_path);
        assert!(tools.pip.starts_with(venv_bin_dir(env_path)));
        assert!(tools.python.starts_with(venv_bin_dir(env_path)));
        let pip_name = tools.pip.file_name().unwrap().to_string_lossy().into_owned();
        assert!(pip_name.starts_with("pip"));
    }

    #[test]
    fn test_executable_name() {
        let name = executable_name("python");
        if cfg!(windows) {
            assert_eq!(name, "python.exe");
        } else {
            assert_eq!(name, "python");
        }
    }
}
