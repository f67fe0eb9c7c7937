mod credentials;
mod loader;
mod manifest;
mod report;
mod validate;
mod workflow;

use std::process::ExitCode;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "geata-lint", about = "Validate a tool directory before catalog submission")]
struct Args {
    /// Tool directory to validate, e.g. tools/media/jellyseerr-search
    tool_dir: Option<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let Some(tool_dir) = args.tool_dir else {
        eprintln!("Usage: geata-lint <tool-directory>");
        eprintln!("Example: geata-lint tools/media/jellyseerr-search");
        return ExitCode::from(1);
    };

    let report = validate::validate_tool_dir(&tool_dir);
    report.print(&tool_dir);

    if report.passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
