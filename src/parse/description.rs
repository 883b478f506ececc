use std::fmt;

use nom::IResult;

use crate::{
    light::{AmbientLight, DiffuseLight, Light},
    scene::Scene,
    surface::Sphere,
};

use super::parse_utils::{
    rest_of_line, token, ws_f64, ws_i32, ws_usize, ws_vector3, ws_vector4,
};

#[derive(Debug)]
pub enum ParseError {
    // The first value of these variants is the byte offset into the input
    // where the problem was found.
    ExpectedNumber(usize, String),
    ExpectedInteger(usize, String),
}

impl ParseError {
    /// A human readable description that reports the line of `input` the
    /// error occurred on.
    pub fn describe(&self, input: &str) -> String {
        match self {
            ParseError::ExpectedNumber(offset, message)
            | ParseError::ExpectedInteger(offset, message) => {
                format!("Line {}: {}", line_count_to_byte_offset(input, *offset), message)
            }
        }
    }
}

impl std::error::Error for ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::ExpectedNumber(offset, message)
            | ParseError::ExpectedInteger(offset, message) => {
                write!(f, "byte {}: {}", offset, message)
            }
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

fn line_count_to_byte_offset(text: &str, offset: usize) -> usize {
    text[..offset.min(text.len())].matches('\n').count() + 1
}

//----------------------------------------------------------------

/// Builds a scene from a scene description.
///
/// The description is a stream of whitespace separated keywords, each
/// followed by its numeric arguments:
///
/// ```text
/// eye x y z                  look x y z             up x y z
/// bounds left right bottom top
/// res width height           d near
/// ambient r g b
/// light x y z w r g b
/// sphere x y z radius ka_r ka_g ka_b kd_r kd_g kd_b
/// # comment to the end of the line
/// ```
///
/// Camera keywords overwrite any earlier value, light and sphere keywords
/// append.  Unrecognized tokens are skipped, so newer descriptions still
/// load.
pub fn parse_scene(input: &str) -> ParseResult<Scene> {
    let mut scene = Scene::default();
    let mut text = input.trim_start();

    while let Ok((rest, keyword)) = token(text) {
        let args = Args {
            input,
            keyword,
            rest,
        };

        let rest = match keyword {
            "#" => rest_of_line(rest).map(|(rest, _)| rest).unwrap_or(""),

            "eye" => args.number(ws_vector3, |v| scene.camera.eye = v)?,

            "look" => args.number(ws_vector3, |v| scene.camera.look = v)?,

            "up" => args.number(ws_vector3, |v| scene.camera.up = v)?,

            "bounds" => args.number(ws_vector4, |v| scene.camera.bounds = v)?,

            "res" => args.integer(
                |i| {
                    let (i, width) = ws_usize(i)?;
                    let (i, height) = ws_usize(i)?;
                    Ok((i, (width, height)))
                },
                |res| scene.camera.resolution = res,
            )?,

            "d" => args.integer(ws_i32, |near| scene.camera.near = near)?,

            "ambient" => args.number(ws_vector3, |color| {
                scene
                    .world
                    .add_light(Light::Ambient(AmbientLight::new(color)))
            })?,

            "light" => args.number(
                |i| {
                    let (i, position) = ws_vector4(i)?;
                    let (i, color) = ws_vector3(i)?;
                    Ok((i, (position, color)))
                },
                |(position, color)| {
                    scene
                        .world
                        .add_light(Light::Diffuse(DiffuseLight::new(color, position)))
                },
            )?,

            "sphere" => args.number(
                |i| {
                    let (i, center) = ws_vector3(i)?;
                    let (i, radius) = ws_f64(i)?;
                    let (i, ka) = ws_vector3(i)?;
                    let (i, kd) = ws_vector3(i)?;
                    Ok((i, Sphere::new(radius, center, ka, kd)))
                },
                |sphere| scene.spheres.push(sphere),
            )?,

            _ => rest,
        };

        text = rest.trim_start();
    }

    Ok(scene)
}

/// The arguments following a keyword.
struct Args<'a> {
    input: &'a str,
    keyword: &'a str,
    rest: &'a str,
}

impl<'a> Args<'a> {
    fn offset(&self) -> usize {
        self.input.len() - self.rest.len()
    }

    /// Parses real-valued arguments and hands them to `store`.  Returns the
    /// input following them.
    fn number<T, P, S>(&self, parser: P, store: S) -> ParseResult<&'a str>
    where
        P: Fn(&'a str) -> IResult<&'a str, T, ()>,
        S: FnOnce(T),
    {
        match parser(self.rest) {
            Ok((rest, value)) => {
                store(value);
                Ok(rest)
            }
            Err(_) => Err(ParseError::ExpectedNumber(
                self.offset(),
                format!(
                    "Missing or malformed number after '{}'.",
                    self.keyword
                ),
            )),
        }
    }

    /// Same as `number()`, for integer arguments.
    fn integer<T, P, S>(&self, parser: P, store: S) -> ParseResult<&'a str>
    where
        P: Fn(&'a str) -> IResult<&'a str, T, ()>,
        S: FnOnce(T),
    {
        self.number(parser, store).map_err(|_| {
            ParseError::ExpectedInteger(
                self.offset(),
                format!(
                    "Missing or malformed integer after '{}'.",
                    self.keyword
                ),
            )
        })
    }
}
