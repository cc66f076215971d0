use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};
use crate::engine::{Engine, Mode};
use crate::format::display_number;

pub struct StateCommand;

/// Lines printed by `/state`.
fn describe(engine: &dyn Engine) -> Vec<String> {
    let mode = engine.mode();
    let mut lines = vec![format!("  mode      {mode}")];
    if mode == Mode::Off {
        return lines;
    }

    let pending = match engine.pending() {
        Some(p) => format!("{} {}", display_number(p.left), p.operator.symbol()),
        None => "none".to_string(),
    };
    lines.push(format!("  pending   {pending}"));
    lines.push(format!("  display   {}", engine.display()));
    lines
}

#[async_trait]
impl Command for StateCommand {
    fn name(&self) -> &str {
        "/state"
    }

    fn description(&self) -> &str {
        "show power, mode, and the pending operation"
    }

    async fn execute(&self, info: &SessionInfo<'_>) -> CommandResult {
        for line in describe(info.engine) {
            println!("{line}");
        }
        CommandResult::Handled
    }
}
