use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};
use crate::engine::Engine;
use crate::format::display_number;

pub struct QuitCommand;

/// A note for the operation that leaving would abandon, if any.
fn abandoned(engine: &dyn Engine) -> Option<String> {
    let pending = engine.pending()?;
    Some(format!(
        "dropping unfinished {} {} {}",
        display_number(pending.left),
        pending.operator.symbol(),
        engine.display(),
    ))
}

#[async_trait]
impl Command for QuitCommand {
    fn name(&self) -> &str {
        "/quit"
    }

    fn aliases(&self) -> &[&str] {
        &["quit", "exit", "/exit", "/q"]
    }

    fn description(&self) -> &str {
        "leave tally (the tape is kept)"
    }

    async fn execute(&self, info: &SessionInfo<'_>) -> CommandResult {
        if let Some(note) = abandoned(info.engine) {
            println!("{note}");
        }
        CommandResult::Quit
    }
}
