pub mod calculator;
pub mod error;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::format::display_number;
use error::CalcError;

/// The four functions, plus power.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Operator {
    /// Key-cap symbol, used on the tape and in `/state`.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "×",
            Self::Div => "÷",
            Self::Pow => "^",
        }
    }

    /// Combine two operands. `+ - × ÷` hand back the raw IEEE result, so an
    /// `Ok` may be infinite or NaN; the formatter turns that into `Error`.
    pub fn apply(self, left: f64, right: f64) -> Result<f64, CalcError> {
        Ok(match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => {
                if right == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                left / right
            }
            Self::Pow => return power(left, right),
        })
    }
}

fn power(base: f64, exponent: f64) -> Result<f64, CalcError> {
    if base == 0.0 && exponent == 0.0 {
        return Err(CalcError::UndefinedPower);
    }
    if base < 0.0 && exponent.fract() != 0.0 {
        return Err(CalcError::ComplexResult);
    }
    if base == 0.0 && exponent < 0.0 {
        return Err(CalcError::DivisionByZero);
    }

    let result = base.powf(exponent);
    if !base.is_finite() || !exponent.is_finite() {
        // an earlier non-finite result carried along by chaining
        Ok(result)
    } else if result.is_infinite() {
        Err(CalcError::Overflow)
    } else if result.is_nan() {
        Err(CalcError::NonFinite)
    } else {
        Ok(result)
    }
}

/// One user action on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Switch on, or reset everything if already on.
    PowerOn,
    PowerOff,
    TogglePower,
    /// `0`-`9` or `.`; anything else is ignored.
    Digit(char),
    ToggleSign,
    Percent,
    ClearEntry,
    Backspace,
    Operator(Operator),
    Sqrt,
    Equals,
}

/// A left operand waiting for its right-hand side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingOperation {
    pub operator: Operator,
    pub left: f64,
}

/// A pending operation that resolved successfully.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Computation {
    pub left: f64,
    pub operator: Operator,
    pub right: f64,
    pub result: f64,
}

impl fmt::Display for Computation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            display_number(self.left),
            self.operator.symbol(),
            display_number(self.right),
            display_number(self.result),
        )
    }
}

/// Where the calculator is, as the user would describe it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Off,
    /// Building a number.
    Entry,
    /// Showing a finished value; the next digit starts over.
    Result,
    ErrorDisplay,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Off => "off",
            Self::Entry => "entry",
            Self::Result => "result",
            Self::ErrorDisplay => "error",
        };
        f.write_str(label)
    }
}

/// The outermost boundary. The REPL only knows this trait.
pub trait Engine: Send + Sync {
    /// Apply one input. Returns the computation if a pending operation
    /// resolved along the way.
    fn apply(&mut self, input: Input) -> Option<Computation>;

    /// Text on the screen right now; empty when off.
    fn display(&self) -> String;

    fn mode(&self) -> Mode;

    fn pending(&self) -> Option<PendingOperation>;
}
