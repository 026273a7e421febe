use clap::Parser;
use forge_core::command::SystemRunner;
use forge_core::error::Result;
use forge_core::{forge_error, forge_println};
use forge_messages::MESSAGES;

use forge::cli::Args;
use forge::dependencies;
use forge::generator::ProjectGenerator;
use forge::prompt::StdinInput;

fn main() {
    let _guard = forge_logging::init_subscriber();

    if let Err(e) = run() {
        forge_error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let _args = Args::parse();

    forge_println!("{}", MESSAGES.header);

    // 1. Preflight: find the system interpreter
    let python = dependencies::check()?;

    // 2. Drive the scaffolding workflow from the current directory
    let base_dir = std::env::current_dir()?;
    let runner = SystemRunner;
    let generator = ProjectGenerator::new(base_dir, python, &runner);

    let mut input = StdinInput;
    generator.run(&mut input)
}
