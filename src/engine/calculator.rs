use std::fmt;

use tracing::debug;

use super::error::CalcError;
use super::{Computation, Engine, Input, Mode, Operator, PendingOperation};
use crate::format::format_number;

/// What the screen holds while powered: a number being typed or shown,
/// or an error.
#[derive(Debug, Clone, PartialEq)]
enum Entry {
    Number(String),
    Error(CalcError),
}

impl Entry {
    fn zero() -> Self {
        Self::Number("0".to_string())
    }

    fn show(value: f64) -> Self {
        match format_number(value) {
            Ok(text) => Self::Number(text),
            Err(e) => Self::Error(e),
        }
    }

    fn value(&self) -> Result<f64, CalcError> {
        match self {
            Self::Number(text) => text
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or(CalcError::Parse),
            Self::Error(_) => Err(CalcError::Parse),
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(text) => f.write_str(text),
            Self::Error(e) => write!(f, "{e}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct State {
    entry: Entry,
    pending: Option<PendingOperation>,
    last_was_equal: bool,
}

impl Default for State {
    fn default() -> Self {
        Self {
            entry: Entry::zero(),
            pending: None,
            last_was_equal: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Power {
    Off,
    On(State),
}

/// A pocket calculator: four functions plus power, square root and
/// percent, chained strictly left to right.
///
/// Starts switched on. While off, only the power inputs do anything.
#[derive(Debug, Clone)]
pub struct Calculator {
    power: Power,
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            power: Power::On(State::default()),
        }
    }

    /// Apply one input. Power gating happens here and nowhere else.
    pub fn apply(&mut self, input: Input) -> Option<Computation> {
        let computed = match input {
            Input::PowerOn => {
                self.power = Power::On(State::default());
                None
            }
            Input::PowerOff => {
                self.power = Power::Off;
                None
            }
            Input::TogglePower => {
                self.power = match self.power {
                    Power::Off => Power::On(State::default()),
                    Power::On(_) => Power::Off,
                };
                None
            }
            _ => match &mut self.power {
                Power::Off => None,
                Power::On(state) => state.handle(input),
            },
        };

        debug!(?input, display = %self.current_display(), "applied input");
        // a non-finite result still completes, but only shows as `Error`
        computed.filter(|c| c.result.is_finite())
    }

    pub fn power_on(&mut self) {
        self.apply(Input::PowerOn);
    }

    pub fn power_off(&mut self) {
        self.apply(Input::PowerOff);
    }

    pub fn toggle_power(&mut self) {
        self.apply(Input::TogglePower);
    }

    pub fn input_digit(&mut self, ch: char) {
        self.apply(Input::Digit(ch));
    }

    pub fn toggle_sign(&mut self) {
        self.apply(Input::ToggleSign);
    }

    pub fn percent(&mut self) {
        self.apply(Input::Percent);
    }

    pub fn clear_entry(&mut self) {
        self.apply(Input::ClearEntry);
    }

    pub fn backspace(&mut self) {
        self.apply(Input::Backspace);
    }

    pub fn choose_operator(&mut self, operator: Operator) -> Option<Computation> {
        self.apply(Input::Operator(operator))
    }

    pub fn apply_sqrt(&mut self) {
        self.apply(Input::Sqrt);
    }

    pub fn press_equal(&mut self) -> Option<Computation> {
        self.apply(Input::Equals)
    }

    /// Screen text; empty while off.
    pub fn current_display(&self) -> String {
        match &self.power {
            Power::Off => String::new(),
            Power::On(state) => state.entry.to_string(),
        }
    }

    pub fn is_on(&self) -> bool {
        matches!(self.power, Power::On(_))
    }

    pub fn pending(&self) -> Option<PendingOperation> {
        match &self.power {
            Power::Off => None,
            Power::On(state) => state.pending,
        }
    }

    pub fn last_was_equal(&self) -> bool {
        match &self.power {
            Power::Off => false,
            Power::On(state) => state.last_was_equal,
        }
    }

    pub fn mode(&self) -> Mode {
        match &self.power {
            Power::Off => Mode::Off,
            Power::On(state) => match state.entry {
                Entry::Error(_) => Mode::ErrorDisplay,
                Entry::Number(_) if state.last_was_equal => Mode::Result,
                Entry::Number(_) => Mode::Entry,
            },
        }
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for Calculator {
    fn apply(&mut self, input: Input) -> Option<Computation> {
        Calculator::apply(self, input)
    }

    fn display(&self) -> String {
        self.current_display()
    }

    fn mode(&self) -> Mode {
        Calculator::mode(self)
    }

    fn pending(&self) -> Option<PendingOperation> {
        Calculator::pending(self)
    }
}

impl State {
    fn handle(&mut self, input: Input) -> Option<Computation> {
        match input {
            Input::Digit(ch) => self.input_digit(ch),
            Input::ToggleSign => self.toggle_sign(),
            Input::Percent => self.percent(),
            Input::ClearEntry => self.entry = Entry::zero(),
            Input::Backspace => self.backspace(),
            Input::Operator(operator) => return self.choose_operator(operator),
            Input::Sqrt => self.apply_sqrt(),
            Input::Equals => return self.press_equal(),
            // handled by Calculator::apply
            Input::PowerOn | Input::PowerOff | Input::TogglePower => {}
        }
        None
    }

    fn input_digit(&mut self, ch: char) {
        if !(ch.is_ascii_digit() || ch == '.') {
            return;
        }

        if self.last_was_equal {
            self.entry = Entry::zero();
            self.pending = None;
            self.last_was_equal = false;
        }
        if let Entry::Error(_) = self.entry {
            self.entry = Entry::zero();
        }

        let Entry::Number(text) = &mut self.entry else {
            return;
        };
        if ch == '.' {
            if !text.contains('.') {
                text.push('.');
            }
        } else if text.as_str() == "0" {
            *text = ch.to_string();
        } else {
            text.push(ch);
        }
    }

    fn toggle_sign(&mut self) {
        let Entry::Number(text) = &mut self.entry else {
            return;
        };
        if text.starts_with('-') {
            text.remove(0);
        } else if text.as_str() != "0" {
            text.insert(0, '-');
        }
    }

    fn percent(&mut self) {
        self.entry = match self.entry.value() {
            Ok(value) => Entry::show(value / 100.0),
            Err(e) => Entry::Error(e),
        };
    }

    fn backspace(&mut self) {
        if self.last_was_equal {
            self.entry = Entry::zero();
            self.last_was_equal = false;
            return;
        }

        self.entry = match &self.entry {
            Entry::Number(text) if text.len() > 1 && !(text.len() == 2 && text.starts_with('-')) => {
                let mut text = text.clone();
                text.pop();
                Entry::Number(text)
            }
            _ => Entry::zero(),
        };
    }

    fn choose_operator(&mut self, operator: Operator) -> Option<Computation> {
        let right = match self.entry.value() {
            Ok(value) => value,
            Err(e) => {
                self.entry = Entry::Error(e);
                return None;
            }
        };

        let (left, computed) = match self.pending {
            None => (right, None),
            Some(pending) => match self.resolve(pending, right) {
                Ok(computation) => (computation.result, Some(computation)),
                Err(e) => {
                    self.entry = Entry::Error(e);
                    return None;
                }
            },
        };

        self.pending = Some(PendingOperation { operator, left });
        self.entry = Entry::zero();
        self.last_was_equal = false;
        computed
    }

    fn apply_sqrt(&mut self) {
        match self.entry.value() {
            Ok(value) if value < 0.0 => self.entry = Entry::Error(CalcError::NegativeSqrt),
            Ok(value) => {
                self.entry = Entry::show(value.sqrt());
                self.last_was_equal = true;
            }
            Err(e) => self.entry = Entry::Error(e),
        }
    }

    fn press_equal(&mut self) -> Option<Computation> {
        let Some(pending) = self.pending else {
            self.last_was_equal = true;
            return None;
        };

        let resolved = self
            .entry
            .value()
            .and_then(|right| self.resolve(pending, right));

        match resolved {
            Ok(computation) => {
                self.entry = Entry::show(computation.result);
                self.pending = None;
                self.last_was_equal = true;
                Some(computation)
            }
            Err(e) => {
                self.entry = Entry::Error(e);
                self.last_was_equal = false;
                None
            }
        }
    }

    /// Run the pending operation against `right`. `0 ^ 0` also drops the
    /// pending operation; every other failure leaves it in place.
    fn resolve(&mut self, pending: PendingOperation, right: f64) -> Result<Computation, CalcError> {
        match pending.operator.apply(pending.left, right) {
            Ok(result) => Ok(Computation {
                left: pending.left,
                operator: pending.operator,
                right,
                result,
            }),
            Err(CalcError::UndefinedPower) => {
                self.pending = None;
                Err(CalcError::UndefinedPower)
            }
            Err(e) => Err(e),
        }
    }
}
