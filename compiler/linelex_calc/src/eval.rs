//! Binary arithmetic.

use std::fmt;
use std::str::FromStr;

use crate::CalcError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
        }
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Sub),
            "*" => Ok(Operator::Mul),
            "/" => Ok(Operator::Div),
            other => Err(CalcError::UnknownOperator(other.to_owned())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Evaluate `lhs op rhs`.
pub fn evaluate(lhs: f64, op: Operator, rhs: f64) -> Result<f64, CalcError> {
    match op {
        Operator::Add => Ok(lhs + rhs),
        Operator::Sub => Ok(lhs - rhs),
        Operator::Mul => Ok(lhs * rhs),
        Operator::Div if rhs == 0.0 => Err(CalcError::DivisionByZero),
        Operator::Div => Ok(lhs / rhs),
    }
}

/// Parse the text of a `Decimal` token.
pub(crate) fn parse_number(text: &str) -> Result<f64, CalcError> {
    text.parse().map_err(|source| CalcError::InvalidNumber {
        text: text.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::float_cmp, reason = "Tests can panic")]

    use super::*;

    #[test]
    fn operators_parse_from_symbols() {
        for op in [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div] {
            assert_eq!(op.symbol().parse::<Operator>().unwrap(), op);
            assert_eq!(op.to_string(), op.symbol());
        }
        assert!(matches!(
            "%".parse::<Operator>(),
            Err(CalcError::UnknownOperator(ref s)) if s == "%"
        ));
    }

    #[test]
    fn evaluates_each_operator() {
        assert_eq!(evaluate(47.0, Operator::Add, 11.0).unwrap(), 58.0);
        assert_eq!(evaluate(5.0, Operator::Sub, 7.5).unwrap(), -2.5);
        assert_eq!(evaluate(6.0, Operator::Mul, 7.0).unwrap(), 42.0);
        assert_eq!(evaluate(1.0, Operator::Div, 4.0).unwrap(), 0.25);
    }

    #[test]
    fn division_by_zero_is_an_error() {
        assert!(matches!(
            evaluate(1.0, Operator::Div, 0.0),
            Err(CalcError::DivisionByZero)
        ));
    }

    #[test]
    fn parse_number_reports_text() {
        assert_eq!(parse_number("3.5").unwrap(), 3.5);
        let err = parse_number("x").unwrap_err();
        assert_eq!(err.to_string(), "`x` is not a number");
    }
}
