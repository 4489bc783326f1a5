use std::str::FromStr;
use chrono::NaiveDate;
use nom::branch::alt;
use nom::bytes::complete::{is_not, tag_no_case};
use nom::character::complete::{char, multispace0, multispace1};
use nom::combinator::{cut, map, map_res, opt, rest, verify};
use nom::sequence::{delimited, preceded};
use crate::category::Category;
use crate::common::Error;
use crate::parser::{non_space1, ParseResult, Statement};
use crate::transaction::DATE_FORMAT;

/// Parse `ADD amount category [ON date] [description]`.
/// Everything after the keyword must parse, otherwise the error is reported instead of trying other statements.
pub(crate) fn add(input: &str) -> ParseResult<Statement> {
    let (input, _) = tag_no_case("ADD")(input)?;
    cut(preceded(multispace1, add_arguments))(input)
}

fn add_arguments(input: &str) -> ParseResult<Statement> {
    let (input, amount) = map_res(non_space1, parse_amount)(input)?;
    let (input, _) = multispace1(input)?;
    let (input, category) = map_res(non_space1, Category::from_str)(input)?;
    let (input, date) = opt(preceded(multispace1, on_date))(input)?;
    let (input, _) = multispace0(input)?;
    let (input, description) = description(input)?;

    Ok((input, Statement::Add { date, amount, category, description }))
}

/// Only checks it is a number, sign is validated when the transaction is built
fn parse_amount(s: &str) -> Result<f64, Error> {
    s.parse::<f64>().map_err(|_| Error::new(format!("Amount must be a number, got '{}'", s)))
}

/// `on 2024-01-05`. Anything else after `on` belongs to the description.
fn on_date(input: &str) -> ParseResult<String> {
    let (input, _) = tag_no_case("ON")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, date) = verify(non_space1, |s: &str| NaiveDate::parse_from_str(s, DATE_FORMAT).is_ok())(input)?;
    Ok((input, date.to_string()))
}

/// A single or double quoted string, otherwise the rest of the line
fn description(input: &str) -> ParseResult<String> {
    alt((
        map(delimited(char('\''), opt(is_not("'")), char('\'')), |s: Option<&str>| s.unwrap_or_default().to_string()),
        map(delimited(char('"'), opt(is_not("\"")), char('"')), |s: Option<&str>| s.unwrap_or_default().to_string()),
        map(rest, |s: &str| s.trim().to_string()),
    ))(input)
}
