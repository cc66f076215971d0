//! Startup banner and session summary display.

use crate::consts::{AUTHOR, HOMEPAGE, REPO, group_thousands};

/// Session configuration for display in the startup banner.
pub struct BannerInfo<'a> {
    pub tape: &'a str,
    pub steps: bool,
}

pub fn print_banner(info: &BannerInfo) {
    println!(
        r#"
   ╔═══════════════════════════════════════╗
   ║              T A L L Y                ║
   ║   four functions, no precedence       ║
   ╚═══════════════════════════════════════╝

   version   {}
   by        {}
   home      {}
   repo      {}
   tape      {}
   steps     {}

   type keys like `3 + 4 * 2 =`, or /help
"#,
        env!("CARGO_PKG_VERSION"),
        AUTHOR,
        HOMEPAGE,
        REPO,
        info.tape,
        if info.steps { "on" } else { "off" },
    );
}

/// Print the session summary (computation count + farewell).
pub fn print_session_summary(computations: u64) {
    if computations > 0 {
        println!("session: {} computation(s)", group_thousands(computations));
    }
    println!("goodbye.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_banner_does_not_panic() {
        print_banner(&BannerInfo {
            tape: "ephemeral",
            steps: true,
        });
    }

    #[test]
    fn print_session_summary_with_computations() {
        print_session_summary(1234);
    }

    #[test]
    fn print_session_summary_zero() {
        // Only "goodbye."
        print_session_summary(0);
    }
}
