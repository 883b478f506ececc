//! Some basic nom parsers

use std::str::FromStr;

use nom::{
    bytes::complete::{take_till, take_till1},
    character::complete::{digit1, multispace0, none_of, one_of},
    combinator::{map, map_res, not, opt, recognize},
    number::complete::double,
    sequence::{delimited, terminated, tuple},
    IResult,
};

use math3d::{Vector3, Vector4};

// ========================================================

pub fn ws_f64(input: &str) -> IResult<&str, f64, ()> {
    delimited(multispace0, double, multispace0)(input)
}

pub fn ws_usize(input: &str) -> IResult<&str, usize, ()> {
    map_res(
        delimited(multispace0, whole_word(digit1), multispace0),
        usize::from_str,
    )(input)
}

pub fn ws_i32(input: &str) -> IResult<&str, i32, ()> {
    map_res(
        delimited(
            multispace0,
            whole_word(recognize(tuple((opt(one_of("+-")), digit1)))),
            multispace0,
        ),
        i32::from_str,
    )(input)
}

/// Succeeds only if `parser` is followed by whitespace or the end of input,
/// so "2.5" or "3x" is rejected instead of splitting into two tokens.
fn whole_word<'a, O, P>(parser: P) -> impl Fn(&'a str) -> IResult<&'a str, O, ()>
where
    P: Fn(&'a str) -> IResult<&'a str, O, ()>,
{
    terminated(parser, not(none_of(" \t\r\n")))
}

pub fn ws_vector3(input: &str) -> IResult<&str, Vector3, ()> {
    map(tuple((ws_f64, ws_f64, ws_f64)), |(x, y, z)| {
        Vector3::new(x, y, z)
    })(input)
}

pub fn ws_vector4(input: &str) -> IResult<&str, Vector4, ()> {
    map(tuple((ws_f64, ws_f64, ws_f64, ws_f64)), |(x, y, z, w)| {
        Vector4::new(x, y, z, w)
    })(input)
}

/// A run of non-whitespace characters.
pub fn token(input: &str) -> IResult<&str, &str, ()> {
    take_till1(|c: char| c.is_whitespace())(input)
}

/// Everything up to (not including) the next newline.
pub fn rest_of_line(input: &str) -> IResult<&str, &str, ()> {
    take_till(|c: char| c == '\n')(input)
}

// ========================================================

#[cfg(test)]
mod test {
    use super::*;
    use nom::combinator::all_consuming;

    #[test]
    fn ws_usize_1() {
        assert_eq!(ws_usize("42"), Ok((&""[..], 42)));
        assert_eq!(ws_usize("     42"), Ok((&""[..], 42)));
        assert_eq!(ws_usize("42   "), Ok((&""[..], 42)));
        assert_eq!(ws_usize("     42   53"), Ok((&"53"[..], 42)));
        assert_eq!(ws_usize("-42").is_err(), true);
    }

    #[test]
    fn ws_i32_1() {
        assert_eq!(ws_i32("42"), Ok((&""[..], 42)));
        assert_eq!(ws_i32("     42"), Ok((&""[..], 42)));
        assert_eq!(ws_i32("42   "), Ok((&""[..], 42)));
        assert_eq!(ws_i32("     42   53"), Ok((&"53"[..], 42)));
    }

    #[test]
    fn ws_i32_2() {
        assert_eq!(ws_i32("-42"), Ok((&""[..], -42)));
        assert_eq!(ws_i32("+42"), Ok((&""[..], 42)));
        assert_eq!(ws_i32("     -42   53"), Ok((&"53"[..], -42)));
        assert_eq!(ws_i32("--42").is_err(), true);
        assert_eq!(ws_i32("x").is_err(), true);
    }

    #[test]
    fn integers_must_end_at_whitespace() {
        assert_eq!(ws_i32("2.5").is_err(), true);
        assert_eq!(ws_i32("-3x").is_err(), true);
        assert_eq!(ws_usize("2.5 3").is_err(), true);
        assert_eq!(ws_usize("4e2").is_err(), true);
        assert_eq!(ws_i32("7\n8"), Ok((&"8"[..], 7)));
    }

    #[test]
    fn ws_f64_1() {
        assert_eq!(ws_f64("42"), Ok((&""[..], 42.0)));
        assert_eq!(ws_f64("     42"), Ok((&""[..], 42.0)));
        assert_eq!(ws_f64("42   "), Ok((&""[..], 42.0)));
        assert_eq!(ws_f64("     42   53"), Ok((&"53"[..], 42.0)));
    }

    #[test]
    fn ws_f64_2() {
        assert_eq!(ws_f64("-42.5"), Ok((&""[..], -42.5)));
        assert_eq!(ws_f64("  0.25\n"), Ok((&""[..], 0.25)));
        assert_eq!(ws_f64("1e2 x"), Ok((&"x"[..], 100.0)));
        assert_eq!(ws_f64(".5"), Ok((&""[..], 0.5)));
    }

    #[test]
    fn ws_f64_3() {
        assert_eq!(ws_f64("a1.0").is_err(), true);
        assert_eq!(ws_f64("").is_err(), true);
        assert_eq!(all_consuming(ws_f64)("0abc").is_err(), true);
    }

    #[test]
    fn ws_vectors() {
        assert_eq!(
            ws_vector3(" 1 -2\n3.5 rest"),
            Ok((&"rest"[..], Vector3::new(1.0, -2.0, 3.5)))
        );
        assert_eq!(
            ws_vector4("-1 1 -1 1"),
            Ok((&""[..], Vector4::new(-1.0, 1.0, -1.0, 1.0)))
        );
        assert_eq!(ws_vector3("1 2").is_err(), true);
    }

    #[test]
    fn token_1() {
        assert_eq!(token("eye 0 0 5"), Ok((&" 0 0 5"[..], "eye")));
        assert_eq!(token("#comment\nnext"), Ok((&"\nnext"[..], "#comment")));
        assert_eq!(token("").is_err(), true);
        assert_eq!(token(" x").is_err(), true);
    }

    #[test]
    fn rest_of_line_1() {
        assert_eq!(rest_of_line(" a b c\nd"), Ok((&"\nd"[..], " a b c")));
        assert_eq!(rest_of_line(" a b c"), Ok((&""[..], " a b c")));
    }
}
