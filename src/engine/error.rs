//! Calculator error taxonomy.
//!
//! The engine never panics and never propagates these out of a command.
//! A failed command parks the error in the entry, and the `Display` text
//! of the variant is what the user sees on the screen.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The entry does not parse as a number.
    #[error("Error")]
    Parse,

    #[error("Error: Division by 0")]
    DivisionByZero,

    /// `0 ^ 0`.
    #[error("Undefined (0^0)")]
    UndefinedPower,

    /// Negative base with a non-integer exponent.
    #[error("Complex result")]
    ComplexResult,

    #[error("Error: √ of negative")]
    NegativeSqrt,

    /// A power of finite operands that ran off the end of `f64`.
    #[error("Overflow")]
    Overflow,

    /// Infinite or NaN result anywhere else.
    #[error("Error")]
    NonFinite,
}
