//! Small winnow grammars shared by the numeric and variable dialects.

use winnow::ascii::{digit1, multispace0};
use winnow::combinator::{alt, opt, preceded};
use winnow::prelude::*;
use winnow::token::take_while;

/// Relational operator of a comparison pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CompareOp {
    pub fn evaluate(self, left: f64, right: f64) -> bool {
        match self {
            CompareOp::Eq => left == right,
            CompareOp::Ne => left != right,
            CompareOp::Lt => left < right,
            CompareOp::Le => left <= right,
            CompareOp::Gt => left > right,
            CompareOp::Ge => left >= right,
        }
    }
}

pub fn number(input: &mut &str) -> ModalResult<f64> {
    (opt('-'), digit1, opt(preceded('.', digit1)))
        .take()
        .try_map(str::parse::<f64>)
        .parse_next(input)
}

fn compare_op(input: &mut &str) -> ModalResult<CompareOp> {
    alt((
        ">=".value(CompareOp::Ge),
        "<=".value(CompareOp::Le),
        "==".value(CompareOp::Eq),
        "!=".value(CompareOp::Ne),
        "≥".value(CompareOp::Ge),
        "≤".value(CompareOp::Le),
        "≠".value(CompareOp::Ne),
        ">".value(CompareOp::Gt),
        "<".value(CompareOp::Lt),
        "=".value(CompareOp::Eq),
    ))
    .parse_next(input)
}

/// `[op] number`, where a missing operator means equality.
pub fn comparison(input: &mut &str) -> ModalResult<(CompareOp, f64)> {
    let _ = multispace0.parse_next(input)?;
    let op = opt(compare_op).parse_next(input)?.unwrap_or(CompareOp::Eq);
    let _ = multispace0.parse_next(input)?;
    let operand = number.parse_next(input)?;
    let _ = multispace0.parse_next(input)?;
    Ok((op, operand))
}

/// `low-high`, both ends decimal numbers.
pub fn range(input: &mut &str) -> ModalResult<(f64, f64)> {
    let _ = multispace0.parse_next(input)?;
    let low = number.parse_next(input)?;
    let _ = (multispace0, '-', multispace0).parse_next(input)?;
    let high = number.parse_next(input)?;
    let _ = multispace0.parse_next(input)?;
    Ok((low, high))
}

/// `$name`, returning the name.
pub fn variable<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    let _ = multispace0.parse_next(input)?;
    let name = preceded(
        '$',
        take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_'),
    )
    .parse_next(input)?;
    let _ = multispace0.parse_next(input)?;
    Ok(name)
}

/// Runs `parser` over the whole of `text`; trailing input is a failure.
pub fn parse_complete<'a, O>(
    text: &'a str,
    parser: fn(&mut &'a str) -> ModalResult<O>,
) -> Option<O> {
    let mut input = text;
    let parsed = parser(&mut input).ok()?;
    input.is_empty().then_some(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number() {
        assert_eq!(parse_complete("42", number), Some(42.0));
        assert_eq!(parse_complete("-3.25", number), Some(-3.25));
        assert_eq!(parse_complete("1.", number), None);
        assert_eq!(parse_complete("abc", number), None);
    }

    #[test]
    fn test_comparison() {
        assert_eq!(parse_complete(">0", comparison), Some((CompareOp::Gt, 0.0)));
        assert_eq!(parse_complete(" <= 5 ", comparison), Some((CompareOp::Le, 5.0)));
        assert_eq!(parse_complete("≥1", comparison), Some((CompareOp::Ge, 1.0)));
        assert_eq!(parse_complete("≠1", comparison), Some((CompareOp::Ne, 1.0)));
        assert_eq!(parse_complete("7", comparison), Some((CompareOp::Eq, 7.0)));
        assert_eq!(parse_complete("=-2", comparison), Some((CompareOp::Eq, -2.0)));
        assert_eq!(parse_complete("1-5", comparison), None);
        assert_eq!(parse_complete(">", comparison), None);
    }

    #[test]
    fn test_range() {
        assert_eq!(parse_complete("1-5", range), Some((1.0, 5.0)));
        assert_eq!(parse_complete("-5--1", range), Some((-5.0, -1.0)));
        assert_eq!(parse_complete("0.5 - 1.5", range), Some((0.5, 1.5)));
        assert_eq!(parse_complete("5", range), None);
        assert_eq!(parse_complete("1-5-9", range), None);
    }

    #[test]
    fn test_variable() {
        assert_eq!(parse_complete("$id", variable), Some("id"));
        assert_eq!(parse_complete("$user_2", variable), Some("user_2"));
        assert_eq!(parse_complete("$", variable), None);
        assert_eq!(parse_complete("$a b", variable), None);
        assert_eq!(parse_complete("id", variable), None);
    }

    #[test]
    fn test_compare_op_evaluate() {
        assert!(CompareOp::Ge.evaluate(1.0, 1.0));
        assert!(!CompareOp::Lt.evaluate(1.0, 1.0));
        assert!(CompareOp::Ne.evaluate(1.0, 2.0));
    }
}
