use async_trait::async_trait;

use super::{Command, CommandResult, SessionInfo};

/// Key reference appended to `/help`.
pub(super) const KEY_HELP: &str = "
  keys      0-9 .   digits          + - * / ^   operators (× ÷ too)
            =       equals          % p pct     percent
            s sqrt  square root     n neg       toggle sign
            c ce    clear entry     < bs        backspace
            on off  power           power       toggle power
";

pub struct HelpCommand;

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &str {
        "/help"
    }

    fn aliases(&self) -> &[&str] {
        &["/h", "/?"]
    }

    fn description(&self) -> &str {
        "show this help"
    }

    // The registry renders help itself; this only runs when called directly.
    async fn execute(&self, _info: &SessionInfo<'_>) -> CommandResult {
        print!("{KEY_HELP}");
        CommandResult::Handled
    }
}
