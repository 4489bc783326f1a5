mod add;
mod list;

use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::combinator::{all_consuming, value};
use nom::error::{ErrorKind, FromExternalError, ParseError};
use nom::{InputTakeAtPosition, IResult};
use crate::category::Category;
use crate::common::Error;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Statement {
    /// INIT, create the store if it's missing
    Init,
    /// ADD amount category [ON date] [description]
    Add {
        date: Option<String>,
        amount: f64,
        category: Category,
        description: String,
    },
    /// LIST [category]
    List(Option<Category>),
    /// SUMMARY
    Summary,
    /// CATEGORIES
    Categories,
    Help,
    Exit,
}

/// Parser error. `Invalid` carries a message from a value that was recognised but rejected,
/// e.g. an unknown category name.
#[derive(Debug, PartialEq)]
pub(crate) enum CommandError<'a> {
    Syntax(&'a str, ErrorKind),
    Invalid(Error),
}

impl<'a> ParseError<&'a str> for CommandError<'a> {
    fn from_error_kind(input: &'a str, kind: ErrorKind) -> Self {
        CommandError::Syntax(input, kind)
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<'a> FromExternalError<&'a str, Error> for CommandError<'a> {
    fn from_external_error(_input: &'a str, _kind: ErrorKind, e: Error) -> Self {
        CommandError::Invalid(e)
    }
}

impl<'a> From<CommandError<'a>> for Error {
    fn from(e: CommandError<'a>) -> Self {
        match e {
            CommandError::Invalid(e) => e,
            CommandError::Syntax(rest, _) if rest.trim().is_empty() => {
                Error::new("Incomplete command, type 'help' for usage".to_string())
            },
            CommandError::Syntax(rest, _) => {
                Error::new(format!("Unable to parse command near '{}', type 'help' for usage", rest.trim()))
            }
        }
    }
}

pub(crate) type ParseResult<'a, O> = IResult<&'a str, O, CommandError<'a>>;

pub(crate) fn parse(command: &str) -> Result<Statement, Error> {
    let result = all_consuming(alt((
        add::add,
        list::list,
        keyword_statement,
    )))(command.trim());

    match result {
        Ok((_, statement)) => Ok(statement),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(e.into()),
        Err(nom::Err::Incomplete(_)) => Err(Error::new("Incomplete command, type 'help' for usage".to_string())),
    }
}

/// Statements made of a single keyword. Longer keywords go first so `summary` isn't read as `sum`.
fn keyword_statement(input: &str) -> ParseResult<Statement> {
    alt((
        value(Statement::Init, tag_no_case("init")),
        value(Statement::Summary, tag_no_case("summary")),
        value(Statement::Summary, tag_no_case("sum")),
        value(Statement::Categories, tag_no_case("categories")),
        value(Statement::Help, tag_no_case("help")),
        value(Statement::Exit, tag_no_case("exit")),
        value(Statement::Exit, tag_no_case("quit")),
    ))(input)
}

pub(crate) fn non_space1(input: &str) -> ParseResult<&str> {
    input.split_at_position1_complete(char::is_whitespace, ErrorKind::Space)
}

/// Shell usage, printed by `help`
pub(crate) const USAGE: &str = "\
add <amount> <category> [on <date>] [<description>]
    Log an expense. Date is YYYY-MM-DD and defaults to today, description may be quoted.
    e.g. add 12.50 food on 2024-01-05 'Lunch'
list [<category>]   List all expenses, or those of one category (alias: ls)
summary             Total per category and grand total (alias: sum)
categories          Show the category menu
init                Create the expense store if it doesn't exist
help                Show this message
exit                Leave the shell (alias: quit)

<category> is a category name or its menu number.";

#[cfg(test)]
mod tests {
    use crate::category::Category;
    use crate::parser::{parse, Statement};

    #[test]
    fn test_keywords() {
        assert_eq!(parse("summary"), Ok(Statement::Summary));
        assert_eq!(parse(" SUM "), Ok(Statement::Summary));
        assert_eq!(parse("categories"), Ok(Statement::Categories));
        assert_eq!(parse("init"), Ok(Statement::Init));
        assert_eq!(parse("help"), Ok(Statement::Help));
        assert_eq!(parse("exit"), Ok(Statement::Exit));
        assert_eq!(parse("Quit"), Ok(Statement::Exit));
    }

    #[test]
    fn test_add_and_list() {
        assert_eq!(parse("add 12.50 food 'Lunch'"), Ok(Statement::Add {
            date: None,
            amount: 12.5,
            category: Category::Food,
            description: "Lunch".to_string(),
        }));
        assert_eq!(parse("list 2"), Ok(Statement::List(Some(Category::Transport))));
    }

    #[test]
    fn test_errors() {
        let err = parse("delete 3").unwrap_err();
        assert!(err.to_string().contains("'delete 3'"));

        let err = parse("summaryx").unwrap_err();
        assert!(err.to_string().contains("'x'"));

        let err = parse("add").unwrap_err();
        assert!(err.to_string().starts_with("Incomplete command"));

        let err = parse("add 5 groceries").unwrap_err();
        assert!(err.to_string().starts_with("Unknown category 'groceries'"));

        let err = parse("add five food").unwrap_err();
        assert!(err.to_string().starts_with("Amount must be a number"));
    }
}
