//! Command execution.

mod release;

use crate::cli::{Args, Command, OutputManager};
use crate::error::Result;

/// Execute the parsed command and return the process exit code.
///
/// Errors bubble out of here untouched; `main` is the single point that
/// reports them and halts.
pub async fn execute_command(args: Args) -> Result<i32> {
    let output = OutputManager::new(args.quiet);

    match &args.command {
        Command::Release { .. } => release::execute_release(&args, &output).await,
    }
}
