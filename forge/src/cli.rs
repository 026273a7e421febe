use clap::Parser;

/// The tool takes no flags or positional arguments; the project name
/// is collected interactively.
#[derive(Parser, Debug)]
#[command(author, version, about = "Scaffold a Django backend project", long_about = None)]
pub struct Args {}
