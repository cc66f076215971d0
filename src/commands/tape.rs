use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};
use crate::consts::DEFAULT_TAPE_LIMIT;

pub struct TapeCommand;

#[async_trait]
impl Command for TapeCommand {
    fn name(&self) -> &str {
        "/tape"
    }

    fn description(&self) -> &str {
        "show recent computations"
    }

    async fn execute(&self, info: &SessionInfo<'_>) -> CommandResult {
        let tape = match info.tape {
            Some(t) => t,
            None => {
                eprintln!("  ✗ tape is disabled");
                return CommandResult::Handled;
            }
        };

        let entries = match tape.recent(DEFAULT_TAPE_LIMIT).await {
            Ok(e) => e,
            Err(e) => {
                eprintln!("  ✗ failed to read tape: {e}");
                return CommandResult::Handled;
            }
        };

        if entries.is_empty() {
            println!("  tape is empty");
        }
        for entry in &entries {
            println!("  {}  {}", entry.timestamp, entry.computation);
        }
        CommandResult::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::test_info;
    use crate::engine::calculator::Calculator;
    use crate::engine::{Computation, Operator};
    use crate::tape::Tape;
    use crate::tape::sqlite::SqliteTape;

    #[tokio::test]
    async fn returns_handled_without_tape() {
        let calc = Calculator::new();
        assert!(matches!(
            TapeCommand.execute(&test_info(&calc)).await,
            CommandResult::Handled
        ));
    }

    #[tokio::test]
    async fn returns_handled_with_entries() {
        let calc = Calculator::new();
        let tape = SqliteTape::in_memory().unwrap();
        tape.record(&Computation {
            left: 1.0,
            operator: Operator::Add,
            right: 2.0,
            result: 3.0,
        })
        .await
        .unwrap();

        let info = SessionInfo {
            tape: Some(&tape),
            ..test_info(&calc)
        };
        assert!(matches!(
            TapeCommand.execute(&info).await,
            CommandResult::Handled
        ));
    }
}
