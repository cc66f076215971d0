use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};

pub struct ForgetCommand;

#[async_trait]
impl Command for ForgetCommand {
    fn name(&self) -> &str {
        "/forget"
    }

    fn description(&self) -> &str {
        "clear the tape"
    }

    async fn execute(&self, info: &SessionInfo<'_>) -> CommandResult {
        let tape = match info.tape {
            Some(t) => t,
            None => {
                eprintln!("  ✗ tape is disabled");
                return CommandResult::Handled;
            }
        };

        if let Err(e) = tape.clear().await {
            eprintln!("  ✗ failed to clear tape: {e}");
            return CommandResult::Handled;
        }

        println!("  ✓ tape cleared");
        CommandResult::Handled
    }
}
