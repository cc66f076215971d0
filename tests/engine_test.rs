use tally::engine::calculator::Calculator;
use tally::engine::{Mode, Operator, PendingOperation};

/// Press a sequence of keypad characters. Operators use the key caps.
fn press(calc: &mut Calculator, keys: &str) {
    for ch in keys.chars() {
        match ch {
            '+' => {
                calc.choose_operator(Operator::Add);
            }
            '-' => {
                calc.choose_operator(Operator::Sub);
            }
            '×' => {
                calc.choose_operator(Operator::Mul);
            }
            '÷' => {
                calc.choose_operator(Operator::Div);
            }
            '^' => {
                calc.choose_operator(Operator::Pow);
            }
            '=' => {
                calc.press_equal();
            }
            '√' => calc.apply_sqrt(),
            '%' => calc.percent(),
            'n' => calc.toggle_sign(),
            '<' => calc.backspace(),
            'c' => calc.clear_entry(),
            _ => calc.input_digit(ch),
        }
    }
}

fn run(keys: &str) -> Calculator {
    let mut calc = Calculator::new();
    press(&mut calc, keys);
    calc
}

#[test]
fn chaining_has_no_precedence() {
    assert_eq!(run("3+4×2=").current_display(), "14");
}

#[test]
fn long_chain_resolves_left_to_right() {
    assert_eq!(run("10-4÷2×5=").current_display(), "15");
}

#[test]
fn division_by_zero_then_recover() {
    let mut calc = run("5÷0=");
    assert_eq!(calc.current_display(), "Error: Division by 0");
    assert_eq!(calc.mode(), Mode::ErrorDisplay);

    press(&mut calc, "c7");
    assert_eq!(calc.current_display(), "7");
    assert_eq!(calc.mode(), Mode::Entry);
}

#[test]
fn zero_to_the_zero_clears_pending() {
    let calc = run("0^0=");
    assert_eq!(calc.current_display(), "Undefined (0^0)");
    assert_eq!(calc.pending(), None);
}

#[test]
fn zero_to_the_zero_while_chaining() {
    let calc = run("0^0+");
    assert_eq!(calc.current_display(), "Undefined (0^0)");
    assert_eq!(calc.pending(), None);
}

#[test]
fn negative_base_fractional_exponent() {
    let calc = run("8n^.5=");
    assert_eq!(calc.current_display(), "Complex result");
}

#[test]
fn negative_base_integer_exponent() {
    assert_eq!(run("2n^3=").current_display(), "-8");
}

#[test]
fn sqrt_of_negative_keeps_pending() {
    let mut calc = run("4+");
    press(&mut calc, "9n√");
    assert_eq!(calc.current_display(), "Error: √ of negative");
    assert_eq!(
        calc.pending(),
        Some(PendingOperation {
            operator: Operator::Add,
            left: 4.0
        })
    );
}

#[test]
fn sqrt_of_negative_from_fresh() {
    let calc = run("9n√");
    assert_eq!(calc.current_display(), "Error: √ of negative");
    assert_eq!(calc.pending(), None);
}

#[test]
fn sqrt_formats_result() {
    assert_eq!(run("2√").current_display(), "1.414213562");
    assert_eq!(run("144√").current_display(), "12");
}

#[test]
fn percent_divides_by_hundred() {
    assert_eq!(run("50%").current_display(), "0.5");
    assert_eq!(run("5%").current_display(), "0.05");
}

#[test]
fn percent_keeps_pending_operation() {
    let calc = run("200+10%");
    assert_eq!(calc.current_display(), "0.1");
    assert!(calc.pending().is_some());
    assert_eq!(run("200+10%=").current_display(), "200.1");
}

#[test]
fn backspace_on_zero_stays_zero() {
    let mut calc = Calculator::new();
    for _ in 0..5 {
        calc.backspace();
        assert_eq!(calc.current_display(), "0");
    }
}

#[test]
fn backspace_on_short_negative_goes_to_zero() {
    assert_eq!(run("5n<").current_display(), "0");
    assert_eq!(run("56n<").current_display(), "-5");
}

#[test]
fn power_cycle_restores_start() {
    let mut calc = run("12+3");
    calc.power_off();
    assert!(!calc.is_on());
    assert_eq!(calc.current_display(), "");

    calc.power_on();
    assert!(calc.is_on());
    assert_eq!(calc.current_display(), "0");
    assert_eq!(calc.pending(), None);
    assert!(!calc.last_was_equal());
}

#[test]
fn commands_are_noops_while_off() {
    let mut calc = Calculator::new();
    calc.power_off();
    press(&mut calc, "12+3=√%n<c");
    assert_eq!(calc.current_display(), "");
    calc.power_on();
    assert_eq!(calc.current_display(), "0");
}

#[test]
fn digit_after_result_starts_fresh() {
    let mut calc = run("2+2=");
    assert_eq!(calc.mode(), Mode::Result);
    press(&mut calc, "9");
    assert_eq!(calc.current_display(), "9");
    assert_eq!(calc.pending(), None);
}

#[test]
fn operator_after_result_continues() {
    assert_eq!(run("3+4=×2=").current_display(), "14");
}

#[test]
fn equal_returns_the_computation() {
    let mut calc = run("7×6");
    let computation = calc.press_equal().unwrap();
    assert_eq!(computation.left, 7.0);
    assert_eq!(computation.operator, Operator::Mul);
    assert_eq!(computation.right, 6.0);
    assert_eq!(computation.result, 42.0);
}

#[test]
fn typed_digits_always_parse() {
    for keys in ["0", "007", "1.5", "3.14159", ".", "0.0001", "123456789012", "9.9n"] {
        let calc = run(keys);
        let display = calc.current_display();
        let value: f64 = display.parse().unwrap_or_else(|_| panic!("{keys} -> {display}"));
        assert!(value.is_finite());
    }
}

#[test]
fn large_results_switch_to_scientific() {
    assert_eq!(run("99999×99999×99=").current_display(), "9.89980200e+11");
}

#[test]
fn overflowing_product_finishes_the_equal() {
    let mut calc = run("10^300=×9999999999=");
    assert_eq!(calc.current_display(), "Error");
    assert_eq!(calc.pending(), None);
    assert!(calc.last_was_equal());

    press(&mut calc, "2=");
    assert_eq!(calc.current_display(), "2");
}
