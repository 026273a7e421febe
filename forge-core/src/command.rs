// Standard library
use std::io::{BufRead, BufReader};
use std::path::Path;

// External crates
use crate::error::{ForgeError, Result};
use duct::cmd;
use tracing::info;

/// The single seam between orchestration logic and real process
/// execution. Implementations run `program` with `args`, with `dir` as
/// the working directory, block until exit, and report success or
/// failure. Spawn failures and non-zero exits are both `Err`.
pub trait CommandRunner {
    fn run(&self, program: &Path, args: &[&str], dir: &Path) -> Result<()>;
}

/// Runs commands on the host, streaming merged stdout/stderr through
/// the logging system line by line.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &Path, args: &[&str], dir: &Path) -> Result<()> {
        let full_command = render_command(program, args);

        let reader = cmd(program, args)
            .dir(dir)
            .stderr_to_stdout()
            .reader()
            .map_err(|e| {
                ForgeError::Command(format!("Failed to start '{}': {}", full_command, e))
            })?;

        // A read error at the end of the stream is how duct reports a
        // non-zero exit status.
        for line in BufReader::new(reader).lines() {
            match line {
                Ok(line) => info!("{}", line),
                Err(e) => {
                    return Err(ForgeError::Command(format!("{}: {}", full_command, e)));
                }
            }
        }

        Ok(())
    }
}

fn render_command(program: &Path, args: &[&str]) -> String {
    let mut rendered = program.display().to_string();
    for arg in args {
        rendered.push(' ');
        rendered.push_str(arg);
    }
    rendered
}
