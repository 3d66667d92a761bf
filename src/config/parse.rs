use std::fmt;

use nom::{
    branch::alt,
    character::complete::{space0, space1, u8 as byte},
    combinator::{all_consuming, map, opt, value},
    number::complete::float,
    sequence::{preceded, tuple},
    IResult, Parser,
};
use nom_supreme::{error::ErrorTree, tag::complete::tag, ParserExt};

use super::{settings::AreaFraction, types::*};
use crate::{backend::Color, joystick::JoystickMode};

pub type Input<'a> = &'a str;
pub type Error<'a> = ErrorTree<Input<'a>>;
type IRes<'a, O> = IResult<Input<'a>, O, Error<'a>>;

/// A line of the settings file that could not be parsed.
#[derive(Debug)]
pub struct LineError<'a> {
    /// 1-based.
    pub line: usize,
    pub text: &'a str,
    pub error: nom::Err<Error<'a>>,
}

impl<'a> fmt::Display for LineError<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, \"{}\": {}", self.line, self.text.trim(), self.error)
    }
}

/// Parses every line on its own, so one bad line doesn't hide the others.
pub fn settings_parse(source: &str) -> (Vec<Cmd>, Vec<LineError<'_>>) {
    let mut cmds = Vec::new();
    let mut errors = Vec::new();
    for (i, text) in source.lines().enumerate() {
        let content = text.split('#').next().unwrap_or("").trim();
        if content.is_empty() {
            continue;
        }
        match all_consuming(cmd)(content) {
            Ok((_, c)) => cmds.push(c),
            Err(error) => errors.push(LineError {
                line: i + 1,
                text,
                error,
            }),
        }
    }
    (cmds, errors)
}

fn cmd(input: Input) -> IRes<Cmd> {
    alt((value(Cmd::Reset, tag("RESET")), map(setting, Cmd::Setting)))(input)
}

fn setting(input: Input) -> IRes<Setting> {
    alt((
        map(keyed("JOYSTICK_MODE", mode), Setting::Mode),
        map(keyed("DEADZONE", float), Setting::Deadzone),
        map(keyed("CLAMPZONE", float), Setting::Clampzone),
        map(keyed("BASE_COLOR", color), Setting::BaseColor),
        map(keyed("TIP_COLOR", color), Setting::TipColor),
        map(keyed("PRESSED_COLOR", color), Setting::PressedColor),
        map(keyed("AREA", area), Setting::Area),
    ))(input)
}

fn keyed<'a, O, P>(key: &'static str, parser: P) -> impl Parser<Input<'a>, O, Error<'a>>
where
    P: Parser<Input<'a>, O, Error<'a>>,
{
    preceded(tuple((tag(key), space0, tag("="), space0)), parser).context(key)
}

fn mode(input: Input) -> IRes<JoystickMode> {
    alt((
        value(JoystickMode::Fixed, tag("FIXED")),
        value(JoystickMode::Dynamic, tag("DYNAMIC")),
        value(JoystickMode::Following, tag("FOLLOWING")),
    ))(input)
}

/// `r g b [a]`, alpha defaults to opaque.
fn color(input: Input) -> IRes<Color> {
    map(
        tuple((
            byte,
            preceded(space1, byte),
            preceded(space1, byte),
            opt(preceded(space1, byte)),
        )),
        |(r, g, b, a)| Color::rgba(r, g, b, a.unwrap_or(255)),
    )(input)
}

fn area(input: Input) -> IRes<AreaFraction> {
    map(
        tuple((
            float,
            preceded(space1, float),
            preceded(space1, float),
            preceded(space1, float),
        )),
        |(x, y, w, h)| AreaFraction { x, y, w, h },
    )(input)
}
