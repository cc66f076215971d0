//! Wires an [`Engine`] to a [`Tape`] and feeds it key lines.

use tracing::{debug, warn};

use crate::engine::{Computation, Engine, Input};
use crate::keys::{self, KeyError};
use crate::tape::Tape;

pub struct Session {
    engine: Box<dyn Engine>,
    tape: Option<Box<dyn Tape>>,
    computations: u64,
}

impl Session {
    /// `tape: None` keeps nothing.
    pub fn new(engine: Box<dyn Engine>, tape: Option<Box<dyn Tape>>) -> Self {
        Self {
            engine,
            tape,
            computations: 0,
        }
    }

    /// Apply every key on `line`, calling `on_step` with the display after
    /// each one. Returns the final display. An unknown key rejects the
    /// line before anything is applied.
    pub async fn feed<F>(&mut self, line: &str, mut on_step: F) -> Result<String, KeyError>
    where
        F: FnMut(Input, &str),
    {
        let inputs = keys::parse_line(line)?;
        for input in inputs {
            if let Some(computation) = self.engine.apply(input) {
                self.record(&computation).await;
            }
            on_step(input, &self.engine.display());
        }
        Ok(self.engine.display())
    }

    pub fn engine(&self) -> &dyn Engine {
        self.engine.as_ref()
    }

    pub fn tape(&self) -> Option<&dyn Tape> {
        self.tape.as_deref()
    }

    /// Computations resolved this session, taped or not.
    pub fn computations(&self) -> u64 {
        self.computations
    }

    async fn record(&mut self, computation: &Computation) {
        self.computations += 1;
        debug!(%computation, "computed");

        let Some(tape) = &self.tape else {
            return;
        };
        // A broken tape never stops the calculator
        if let Err(e) = tape.record(computation).await {
            warn!(error = %e, "failed to record computation");
        }
    }
}
