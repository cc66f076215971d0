//! Keyboard-to-input mapping for the REPL.
//!
//! A line is split on whitespace. Each token is either a named key
//! (`on`, `sqrt`, `ce`, ...) or a run of single-character keys, so
//! `3+4*2=` and `3 + 4 * 2 =` mean the same thing.

use thiserror::Error;

use crate::engine::{Input, Operator};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("unknown key: {0}")]
    Unknown(String),
}

/// Parse a whole line. Nothing is returned unless every key is known.
pub fn parse_line(line: &str) -> Result<Vec<Input>, KeyError> {
    let mut inputs = Vec::new();
    for token in line.split_whitespace() {
        if let Some(input) = named_key(token) {
            inputs.push(input);
            continue;
        }
        for ch in token.chars() {
            let input = key(ch).ok_or_else(|| KeyError::Unknown(ch.to_string()))?;
            inputs.push(input);
        }
    }
    Ok(inputs)
}

/// Map a single keystroke.
pub fn key(ch: char) -> Option<Input> {
    let input = match ch {
        '0'..='9' | '.' => Input::Digit(ch),
        '+' => Input::Operator(Operator::Add),
        '-' => Input::Operator(Operator::Sub),
        '*' | '×' => Input::Operator(Operator::Mul),
        '/' | '÷' => Input::Operator(Operator::Div),
        '^' => Input::Operator(Operator::Pow),
        '=' => Input::Equals,
        '%' | 'p' | 'P' => Input::Percent,
        '√' | 's' | 'S' => Input::Sqrt,
        '±' | 'n' | 'N' => Input::ToggleSign,
        'c' | 'C' => Input::ClearEntry,
        '<' => Input::Backspace,
        'o' => Input::PowerOn,
        'f' => Input::PowerOff,
        _ => return None,
    };
    Some(input)
}

fn named_key(token: &str) -> Option<Input> {
    let input = match token.to_ascii_lowercase().as_str() {
        "on" => Input::PowerOn,
        "off" => Input::PowerOff,
        "power" => Input::TogglePower,
        "sqrt" => Input::Sqrt,
        "neg" => Input::ToggleSign,
        "pct" => Input::Percent,
        "ce" | "clear" => Input::ClearEntry,
        "bs" | "back" => Input::Backspace,
        "equals" => Input::Equals,
        _ => return None,
    };
    Some(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_map_to_themselves() {
        for ch in "0123456789.".chars() {
            assert_eq!(key(ch), Some(Input::Digit(ch)));
        }
    }

    #[test]
    fn both_operator_spellings() {
        assert_eq!(key('*'), key('×'));
        assert_eq!(key('/'), key('÷'));
        assert_eq!(key('^'), Some(Input::Operator(Operator::Pow)));
    }

    #[test]
    fn named_keys_win_over_characters() {
        // "off" would otherwise be o, f, f
        assert_eq!(parse_line("off").unwrap(), vec![Input::PowerOff]);
        assert_eq!(parse_line("ON").unwrap(), vec![Input::PowerOn]);
    }

    #[test]
    fn unknown_key_rejects_line() {
        assert_eq!(parse_line("1 + x"), Err(KeyError::Unknown("x".to_string())));
    }

    #[test]
    fn empty_line_is_no_input() {
        assert!(parse_line("   ").unwrap().is_empty());
    }
}
