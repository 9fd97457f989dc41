//! Arithmetic evaluation for analysis tasks.
//!
//! Supports three request shapes, checked in order:
//!
//! 1. "average"/"mean" of the numbers found in the input
//! 2. "sum" of the numbers found in the input
//! 3. a direct arithmetic expression over `+ - * / ( )`
//!
//! Expressions are evaluated by a small recursive-descent parser rather
//! than any dynamic evaluation, so arbitrary input can never execute
//! anything. Malformed input degrades to a fallback message.

use once_cell::sync::Lazy;
use regex::Regex;

static NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-?\d+\.?\d*").expect("number regex is valid"));

/// Fallback text returned when nothing could be evaluated.
pub const CALCULATION_ERROR: &str = "Error in calculation";

/// Evaluate a calculation request and render the result as text.
pub fn calculate(input: &str) -> String {
    let lower = input.to_lowercase();

    if lower.contains("average") || lower.contains("mean") {
        if let Some((numbers, total)) = extract_and_sum(input) {
            let mean = total / numbers.len() as f64;
            return format!("Average of {:?} = {:.2}", numbers, mean);
        }
    }

    if lower.contains("sum") {
        if let Some((numbers, total)) = extract_and_sum(input) {
            return format!("Sum of {:?} = {}", numbers, format_number(total));
        }
    }

    let sanitized: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || "+-*/.() ".contains(*c))
        .collect();
    let trimmed = sanitized.trim();

    match evaluate(trimmed) {
        Some(value) => format!("{} = {}", trimmed, format_number(value)),
        None => CALCULATION_ERROR.to_string(),
    }
}

/// Extract all numeric tokens from free text.
pub fn extract_numbers(input: &str) -> Vec<f64> {
    NUMBER_RE
        .find_iter(input)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .collect()
}

fn extract_and_sum(input: &str) -> Option<(Vec<f64>, f64)> {
    let numbers = extract_numbers(input);
    if numbers.is_empty() {
        return None;
    }
    let total = numbers.iter().sum();
    Some((numbers, total))
}

/// Render a float the way a calculator would: integral values lose the
/// trailing ".0".
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Evaluate an arithmetic expression. Returns `None` for malformed input
/// or non-finite results (division by zero).
pub fn evaluate(expression: &str) -> Option<f64> {
    let mut parser = Parser::new(expression);
    let value = parser.expr()?;
    parser.skip_whitespace();
    if !parser.at_end() {
        return None;
    }
    value.is_finite().then_some(value)
}

/// Recursive-descent parser over `+ - * / ( )` and decimal literals.
struct Parser<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input: input.as_bytes(),
            pos: 0,
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ') | Some(b'\t')) {
            self.bump();
        }
    }

    // expr := term (('+' | '-') term)*
    fn expr(&mut self) -> Option<f64> {
        let mut value = self.term()?;
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(b'+') => {
                    self.bump();
                    value += self.term()?;
                }
                Some(b'-') => {
                    self.bump();
                    value -= self.term()?;
                }
                _ => return Some(value),
            }
        }
    }

    // term := factor (('*' | '/') factor)*
    fn term(&mut self) -> Option<f64> {
        let mut value = self.factor()?;
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(b'*') => {
                    self.bump();
                    value *= self.factor()?;
                }
                Some(b'/') => {
                    self.bump();
                    value /= self.factor()?;
                }
                _ => return Some(value),
            }
        }
    }

    // factor := '-' factor | '(' expr ')' | number
    fn factor(&mut self) -> Option<f64> {
        self.skip_whitespace();
        match self.peek()? {
            b'-' => {
                self.bump();
                Some(-self.factor()?)
            }
            b'(' => {
                self.bump();
                let value = self.expr()?;
                self.skip_whitespace();
                if self.peek() == Some(b')') {
                    self.bump();
                    Some(value)
                } else {
                    None
                }
            }
            _ => self.number(),
        }
    }

    fn number(&mut self) -> Option<f64> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.bump();
        }
        if self.peek() == Some(b'.') {
            self.bump();
            while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                self.bump();
            }
        }
        if self.pos == start {
            return None;
        }
        std::str::from_utf8(&self.input[start..self.pos])
            .ok()?
            .parse()
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_basic() {
        assert_eq!(evaluate("15 * 25"), Some(375.0));
        assert_eq!(evaluate("1 + 2"), Some(3.0));
        assert_eq!(evaluate("10 - 4"), Some(6.0));
        assert_eq!(evaluate("9 / 3"), Some(3.0));
    }

    #[test]
    fn test_evaluate_precedence_and_parens() {
        assert_eq!(evaluate("2 + 3 * 4"), Some(14.0));
        assert_eq!(evaluate("(2 + 3) * 4"), Some(20.0));
        assert_eq!(evaluate("2 * (3 + (4 - 1))"), Some(12.0));
    }

    #[test]
    fn test_evaluate_unary_minus_and_decimals() {
        assert_eq!(evaluate("-5 + 10"), Some(5.0));
        assert_eq!(evaluate("1.5 * 2"), Some(3.0));
        assert_eq!(evaluate("-(2 + 3)"), Some(-5.0));
    }

    #[test]
    fn test_evaluate_malformed() {
        assert_eq!(evaluate(""), None);
        assert_eq!(evaluate("2 +"), None);
        assert_eq!(evaluate("(2 + 3"), None);
        assert_eq!(evaluate("2 + 3)"), None);
        assert_eq!(evaluate("* 4"), None);
    }

    #[test]
    fn test_evaluate_division_by_zero() {
        assert_eq!(evaluate("1 / 0"), None);
    }

    #[test]
    fn test_calculate_expression() {
        let result = calculate("15 * 25");
        assert!(result.contains("375"));
    }

    #[test]
    fn test_calculate_sum() {
        let result = calculate("sum of 10, 20 and 30");
        assert!(result.contains("60"));
        assert!(result.starts_with("Sum of"));
    }

    #[test]
    fn test_calculate_average() {
        let result = calculate("average of 10 and 20");
        assert!(result.contains("15.00"));
    }

    #[test]
    fn test_calculate_strips_foreign_characters() {
        // Anything outside the arithmetic alphabet is dropped before parsing.
        let result = calculate("what is 6 * 7");
        assert!(result.contains("42"), "got: {result}");
    }

    #[test]
    fn test_calculate_malformed_falls_back() {
        assert_eq!(calculate("nothing to see here"), CALCULATION_ERROR);
    }

    #[test]
    fn test_extract_numbers() {
        assert_eq!(extract_numbers("add 1.5 and -2 to 10"), vec![1.5, -2.0, 10.0]);
        assert!(extract_numbers("no digits").is_empty());
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(375.0), "375");
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(-3.0), "-3");
    }
}
