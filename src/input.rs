//! Parsing of the comma-separated numbers typed into a projection form.
//!
//! Everything here runs before any geometry is built, so malformed text
//! never leaves a half-transformed solid behind.

use nom::{
    character::complete::{char, multispace0},
    combinator::all_consuming,
    multi::separated_list1,
    number::complete::double,
    sequence::delimited,
    IResult,
};

use crate::error::InputError;
use crate::math::{Point3, Vector3};

fn number_list(input: &str) -> IResult<&str, Vec<f64>> {
    all_consuming(delimited(
        multispace0,
        separated_list1(delimited(multispace0, char(','), multispace0), double),
        multispace0,
    ))(input)
}

/// Parses exactly `N` finite comma-separated numbers.
fn parse_numbers<const N: usize>(field: &'static str, text: &str) -> Result<[f64; N], InputError> {
    let invalid = |reason: String| InputError::InvalidInput { field, reason };

    let (_, values) = number_list(text).map_err(|err| {
        let rest = match err {
            nom::Err::Error(e) | nom::Err::Failure(e) => e.input,
            nom::Err::Incomplete(_) => "",
        };
        invalid(format!("expected comma-separated numbers, stopped at {rest:?}"))
    })?;

    if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
        return Err(invalid(format!("{bad} is not a finite number")));
    }

    let count = values.len();
    <[f64; N]>::try_from(values)
        .map_err(|_| invalid(format!("expected {N} component(s), found {count}")))
}

/// Parses a vector such as `"1, 0.5, -2"`.
///
/// # Errors
///
/// Returns [`InputError::InvalidInput`] unless `text` holds exactly three
/// finite numbers.
pub fn parse_vector3(field: &'static str, text: &str) -> Result<Vector3, InputError> {
    let [x, y, z] = parse_numbers::<3>(field, text)?;
    Ok(Vector3::new(x, y, z))
}

/// Parses a point such as `"0, 0, 8"`.
///
/// # Errors
///
/// Returns [`InputError::InvalidInput`] unless `text` holds exactly three
/// finite numbers.
pub fn parse_point3(field: &'static str, text: &str) -> Result<Point3, InputError> {
    parse_vector3(field, text).map(Point3::from)
}

/// Parses a single number such as `"1.5"`.
///
/// # Errors
///
/// Returns [`InputError::InvalidInput`] unless `text` holds exactly one
/// finite number.
pub fn parse_scalar(field: &'static str, text: &str) -> Result<f64, InputError> {
    let [value] = parse_numbers::<1>(field, text)?;
    Ok(value)
}
