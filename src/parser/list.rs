use std::str::FromStr;
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::multispace1;
use nom::combinator::{cut, map_res, opt};
use nom::sequence::preceded;
use crate::category::Category;
use crate::parser::{non_space1, ParseResult, Statement};

/// Parse `LIST [category]`, `LS [category]`
pub(crate) fn list(input: &str) -> ParseResult<Statement> {
    let (input, _) = alt((tag_no_case("LIST"), tag_no_case("LS")))(input)?;
    let (input, category) = opt(preceded(multispace1, cut(map_res(non_space1, Category::from_str))))(input)?;
    Ok((input, Statement::List(category)))
}
