//! nom parsers for one-line equations: `5 + 3 = ____` and `____ + 3 = 8`

use nom::{
    bytes::complete::take_while1,
    character::complete::{anychar, char, space0},
    number::complete::recognize_float,
    IResult,
};

use crate::model::{Operator, ProblemKind};

/// A signed decimal number, returned as written
fn number(input: &str) -> IResult<&str, &str> {
    recognize_float(input)
}

/// One operator character, normalized
fn operator(input: &str) -> IResult<&str, Operator> {
    let (rest, c) = anychar(input)?;
    let mut buf = [0u8; 4];
    match Operator::from_symbol(c.encode_utf8(&mut buf)) {
        Some(op) => Ok((rest, op)),
        None => Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Char,
        ))),
    }
}

/// The answer blank: one or more underscores, or a lone `?`
fn blank(input: &str) -> IResult<&str, &str> {
    if let Some(rest) = input.strip_prefix('?') {
        return Ok((rest, &input[..1]));
    }
    take_while1(|c: char| c == '_')(input)
}

/// `left op right [= [blank]]`
pub fn basic_equation(input: &str) -> IResult<&str, ProblemKind> {
    let (input, left) = number(input)?;
    let (input, _) = space0(input)?;
    let (input, op) = operator(input)?;
    let (input, _) = space0(input)?;
    let (input, right) = number(input)?;
    let (input, _) = space0(input)?;

    // The trailing "= ____" is optional
    let input = match input.strip_prefix('=') {
        Some(rest) => {
            let (rest, _) = space0(rest)?;
            blank(rest).map(|(rest, _)| rest).unwrap_or(rest)
        }
        None => input,
    };

    Ok((
        input,
        ProblemKind::BasicEquation {
            left_operand: left.to_string(),
            operator: op,
            right_operand: right.to_string(),
        },
    ))
}

/// `blank op right = result`
pub fn fill_blanks(input: &str) -> IResult<&str, ProblemKind> {
    let (input, _) = blank(input)?;
    let (input, _) = space0(input)?;
    let (input, op) = operator(input)?;
    let (input, _) = space0(input)?;
    let (input, right) = number(input)?;
    let (input, _) = space0(input)?;
    let (input, _) = char('=')(input)?;
    let (input, _) = space0(input)?;
    let (input, result) = number(input)?;

    Ok((
        input,
        ProblemKind::FillBlanks {
            operator: op,
            right_operand: right.to_string(),
            result: result.to_string(),
        },
    ))
}

/// Parse a whole line as a basic or fill-in-the-blank equation.
///
/// Returns `None` unless the entire line is consumed.
pub fn parse_equation(line: &str) -> Option<ProblemKind> {
    let line = line.trim();
    for parser in [fill_blanks as fn(&str) -> IResult<&str, ProblemKind>, basic_equation] {
        if let Ok((rest, kind)) = parser(line) {
            if rest.trim().is_empty() {
                return Some(kind);
            }
        }
    }
    None
}
