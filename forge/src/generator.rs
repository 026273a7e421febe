// Standard library
use std::fs;
use std::path::{Path, PathBuf};

// Internal imports
use crate::dependencies::{APPS, DEPENDENCIES};
use crate::prompt::InputSource;
use forge_core::command::CommandRunner;
use forge_core::error::{ForgeError, Result};
use forge_core::platform;
use forge_core::validation::validate_project_name;
use forge_core::{forge_error, forge_println, forge_progress, forge_warning, msg_format};
use forge_messages::MESSAGES;

/// Attempts before giving up on collecting a valid project name.
pub const MAX_NAME_ATTEMPTS: u32 = 5;

/// Drives the scaffolding workflow: name collection, virtual
/// environment creation, dependency installation, project generation,
/// and best-effort cleanup on failure.
///
/// The working directory for every subprocess is passed explicitly per
/// invocation; the process-wide current directory is never changed.
pub struct ProjectGenerator<'r> {
    base_dir: PathBuf,
    python: PathBuf,
    runner: &'r dyn CommandRunner,
}

impl<'r> ProjectGenerator<'r> {
    pub fn new(base_dir: PathBuf, python: PathBuf, runner: &'r dyn CommandRunner) -> Self {
        Self {
            base_dir,
            python,
            runner,
        }
    }

    /// The environment directory derived from a project name.
    pub fn env_path(&self, name: &str) -> PathBuf {
        self.base_dir.join(format!("{name}_env"))
    }

    /// The project directory derived from a project name.
    pub fn project_path(&self, name: &str) -> PathBuf {
        self.base_dir.join(name)
    }

    /// Run the full workflow. Every failure after name collection
    /// routes through `cleanup` before the error propagates.
    pub fn run(&self, input: &mut dyn InputSource) -> Result<()> {
        let name = self.collect_project_name(input)?;

        if let Err(e) = self.bootstrap(&name) {
            self.cleanup(&name);
            return Err(e);
        }
        Ok(())
    }

    fn bootstrap(&self, name: &str) -> Result<()> {
        let env_path = self.create_environment(name)?;
        let env_python = self.install_dependencies(&env_path)?;
        self.scaffold_project(&env_python, name)?;

        forge_println!("{}", msg_format!(MESSAGES.success_block, name = name));
        Ok(())
    }

    /// Prompt for a project name until a valid, unused one is entered.
    /// Bounded at `MAX_NAME_ATTEMPTS`; rejections have no filesystem
    /// side effect.
    pub fn collect_project_name(&self, input: &mut dyn InputSource) -> Result<String> {
        for _ in 0..MAX_NAME_ATTEMPTS {
            let Some(line) = input.read_line(MESSAGES.name_prompt)? else {
                return Err(ForgeError::Validation(MESSAGES.name_input_closed.to_string()));
            };
            let name = line.trim().to_lowercase();

            if let Err(e) = validate_project_name(&name) {
                forge_error!("{}", e);
                continue;
            }

            if self.env_path(&name).exists() {
                forge_error!("{}", msg_format!(MESSAGES.name_env_exists, name = name));
                continue;
            }

            return Ok(name);
        }

        Err(ForgeError::Validation(
            MESSAGES.name_attempts_exhausted.to_string(),
        ))
    }

    /// Create the virtual environment for `name` and verify it holds
    /// the platform executable subfolder before returning its path.
    pub fn create_environment(&self, name: &str) -> Result<PathBuf> {
        let env_path = self.env_path(name);
        if env_path.exists() {
            return Err(ForgeError::Filesystem(msg_format!(
                MESSAGES.env_already_exists,
                path = env_path.display()
            )));
        }

        forge_progress!("{}", msg_format!(MESSAGES.env_creating, name = name));

        let env_dir = format!("{name}_env");
        let venv_prompt = format!("{name}-env");
        self.runner.run(
            &self.python,
            &["-m", "venv", "--prompt", &venv_prompt, &env_dir],
            &self.base_dir,
        )?;

        if !platform::venv_bin_dir(&env_path).is_dir() {
            return Err(ForgeError::Filesystem(msg_format!(
                MESSAGES.env_incomplete,
                path = env_path.display()
            )));
        }

        forge_println!("{}", msg_format!(MESSAGES.env_created, path = env_path.display()));
        Ok(env_path)
    }

    /// Install the fixed dependency list into the environment. The pip
    /// self-upgrade and each package are attempted independently; a
    /// failure is reported and the loop moves on. Returns the
    /// environment's interpreter path regardless of per-package
    /// outcomes.
    pub fn install_dependencies(&self, env_path: &Path) -> Result<PathBuf> {
        let tools = platform::env_tool_paths(env_path);

        forge_println!("{}", MESSAGES.deps_installing);

        if let Err(e) = self
            .runner
            .run(&tools.pip, &["install", "--upgrade", "pip"], &self.base_dir)
        {
            forge_warning!("{}", MESSAGES.pip_upgrade_failed);
            tracing::debug!("pip self-upgrade failed: {}", e);
        }

        for dep in DEPENDENCIES {
            match self.runner.run(&tools.pip, &["install", dep], &self.base_dir) {
                Ok(()) => forge_println!("{}", msg_format!(MESSAGES.dep_installed, name = dep)),
                Err(e) => {
                    forge_error!("{}", msg_format!(MESSAGES.dep_install_failed, name = dep));
                    tracing::debug!("install of {} failed: {}", dep, e);
                }
            }
        }

        Ok(tools.python)
    }

    /// Generate the Django project and its apps with the environment's
    /// interpreter. Any failure is fatal.
    pub fn scaffold_project(&self, env_python: &Path, name: &str) -> Result<()> {
        forge_progress!("{}", msg_format!(MESSAGES.scaffold_progress, name = name));

        self.runner.run(
            env_python,
            &["-m", "django", "startproject", name],
            &self.base_dir,
        )?;

        let project_dir = self.project_path(name);
        for app in APPS {
            self.runner
                .run(env_python, &["manage.py", "startapp", app], &project_dir)?;
        }

        forge_println!("{}", MESSAGES.scaffold_success);
        Ok(())
    }

    /// Best-effort removal of the environment and project directories.
    /// Each deletion is attempted independently; failures are reported
    /// and swallowed so they never mask the error that got us here.
    pub fn cleanup(&self, name: &str) {
        for path in [self.env_path(name), self.project_path(name)] {
            if !path.exists() {
                continue;
            }
            match fs::remove_dir_all(&path) {
                Ok(()) => {
                    forge_println!("{}", msg_format!(MESSAGES.cleanup_removed, path = path.display()))
                }
                Err(e) => forge_warning!(
                    "{}",
                    msg_format!(MESSAGES.cleanup_failed, path = path.display(), error = e)
                ),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedInput;
    use tempfile::tempdir;

    struct NoopRunner;

    impl CommandRunner for NoopRunner {
        fn run(&self, _program: &Path, _args: &[&str], _dir: &Path) -> Result<()> {
            Ok(())
        }
    }

    fn generator<'r>(base_dir: &Path, runner: &'r dyn CommandRunner) -> ProjectGenerator<'r> {
        ProjectGenerator::new(base_dir.to_path_buf(), PathBuf::from("python3"), runner)
    }

    #[test]
    fn test_collect_name_normalizes_and_accepts() {
        let temp = tempdir().unwrap();
        let gen = generator(temp.path(), &NoopRunner);
        let mut input = ScriptedInput::new(["  MyApp \n"]);

        let name = gen.collect_project_name(&mut input).unwrap();
        assert_eq!(name, "myapp");
    }

    #[test]
    fn test_collect_name_reprompts_on_invalid_input() {
        let temp = tempdir().unwrap();
        let gen = generator(temp.path(), &NoopRunner);
        let mut input = ScriptedInput::new(["", "my app", "2app", "demoproj"]);

        let name = gen.collect_project_name(&mut input).unwrap();
        assert_eq!(name, "demoproj");
        // Rejections must not create anything on disk
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_collect_name_rejects_existing_environment() {
        let temp = tempdir().unwrap();
        std::fs::create_dir(temp.path().join("taken_env")).unwrap();
        let gen = generator(temp.path(), &NoopRunner);
        let mut input = ScriptedInput::new(["taken", "fresh"]);

        let name = gen.collect_project_name(&mut input).unwrap();
        assert_eq!(name, "fresh");
    }

    #[test]
    fn test_collect_name_bounded_retries() {
        let temp = tempdir().unwrap();
        let gen = generator(temp.path(), &NoopRunner);
        let mut input = ScriptedInput::new(["!", "!", "!", "!", "!", "!", "!"]);

        let result = gen.collect_project_name(&mut input);
        assert!(matches!(result, Err(ForgeError::Validation(_))));
    }

    #[test]
    fn test_collect_name_closed_input() {
        let temp = tempdir().unwrap();
        let gen = generator(temp.path(), &NoopRunner);
        let mut input = ScriptedInput::new(Vec::<String>::new());

        let result = gen.collect_project_name(&mut input);
        assert!(matches!(result, Err(ForgeError::Validation(_))));
    }

    #[test]
    fn test_create_environment_rejects_existing_directory() {
        let temp = tempdir().unwrap();
        std::fs::create_dir(temp.path().join("demo_env")).unwrap();
        let gen = generator(temp.path(), &NoopRunner);

        let result = gen.create_environment("demo");
        assert!(matches!(result, Err(ForgeError::Filesystem(_))));
    }

    #[test]
    fn test_create_environment_requires_bin_dir() {
        // NoopRunner never creates the environment, so the executable
        // subfolder check must fail.
        let temp = tempdir().unwrap();
        let gen = generator(temp.path(), &NoopRunner);

        let result = gen.create_environment("demo");
        assert!(matches!(result, Err(ForgeError::Filesystem(_))));
    }

    #[test]
    fn test_cleanup_removes_both_directories() {
        let temp = tempdir().unwrap();
        let env_dir = temp.path().join("demo_env");
        let project_dir = temp.path().join("demo");
        std::fs::create_dir_all(env_dir.join("bin")).unwrap();
        std::fs::create_dir_all(project_dir.join("core")).unwrap();
        let gen = generator(temp.path(), &NoopRunner);

        gen.cleanup("demo");
        assert!(!env_dir.exists());
        assert!(!project_dir.exists());
    }

    #[test]
    fn test_cleanup_is_quiet_when_nothing_exists() {
        let temp = tempdir().unwrap();
        let gen = generator(temp.path(), &NoopRunner);

        // Nothing was created; cleanup must not error or create anything
        gen.cleanup("demo");
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
    }
}
