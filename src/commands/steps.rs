use async_trait::async_trait;
use tracing::warn;

use super::{Command, CommandResult, SessionInfo, StateChange};
use crate::config::STEPS_KEY;

pub struct StepsCommand;

#[async_trait]
impl Command for StepsCommand {
    fn name(&self) -> &str {
        "/steps"
    }

    fn description(&self) -> &str {
        "toggle printing the display after every key"
    }

    async fn execute(&self, info: &SessionInfo<'_>) -> CommandResult {
        let steps = !info.steps;

        // Not persisting is fine; the toggle still applies to this session
        if let Some(config) = info.config
            && let Err(e) = config.set_bool(STEPS_KEY, steps)
        {
            warn!(error = %e, "failed to save step display setting");
        }

        println!("  ✓ step display {}", if steps { "on" } else { "off" });
        CommandResult::StateChanged(StateChange::Steps(steps))
    }
}
