//! Command line parameters for the demo.

use std::path::{Path, PathBuf};

use glam::IVec2;
use unbound_control::DEFAULT_SPEED;
use unbound_core::{Error, Result};

/// Demo parameters (from CLI or defaults).
#[derive(Debug, Clone, PartialEq)]
pub struct DemoParams {
    /// Movement speed in pixels per second.
    pub speed: f32,
    /// Keep the player inside the window.
    pub clamp: bool,
    /// Sprite whose size is used as the occupant size.
    pub sprite: Option<PathBuf>,
    /// Explicit occupant size; wins over `sprite`.
    pub occupant: Option<IVec2>,
    /// Print help and exit.
    pub help: bool,
}

impl Default for DemoParams {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            clamp: true,
            sprite: None,
            occupant: None,
            help: false,
        }
    }
}

impl DemoParams {
    /// Parse demo parameters from the process arguments.
    pub fn from_args() -> Result<Self> {
        Self::parse(std::env::args().skip(1))
    }

    /// Parse demo parameters from an argument list (without the program name).
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut params = Self::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => params.help = true,
                "--no-clamp" => params.clamp = false,
                "--speed" => {
                    let value = expect_value(&arg, args.next())?;
                    params.speed = parse_speed(&value)?;
                }
                "--sprite" => {
                    params.sprite = Some(PathBuf::from(expect_value(&arg, args.next())?));
                }
                "--occupant" => {
                    let value = expect_value(&arg, args.next())?;
                    params.occupant = Some(parse_size(&value)?);
                }
                other => {
                    return Err(Error::InvalidArgument(format!("unknown option '{other}'")));
                }
            }
        }

        Ok(params)
    }
}

fn expect_value(flag: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| Error::InvalidArgument(format!("{flag} expects a value")))
}

fn parse_speed(value: &str) -> Result<f32> {
    value
        .parse::<f32>()
        .ok()
        .filter(|speed| speed.is_finite())
        .ok_or_else(|| Error::InvalidArgument(format!("invalid speed '{value}'")))
}

/// Parse a `WIDTHxHEIGHT` size.
fn parse_size(value: &str) -> Result<IVec2> {
    let invalid = || Error::InvalidArgument(format!("invalid size '{value}', expected WxH"));
    let (w, h) = value.split_once(['x', 'X']).ok_or_else(invalid)?;
    let w = w.trim().parse::<u16>().map_err(|_| invalid())?;
    let h = h.trim().parse::<u16>().map_err(|_| invalid())?;
    Ok(IVec2::new(i32::from(w), i32::from(h)))
}

/// Read the pixel size of a sprite image without decoding it fully.
pub fn probe_sprite(path: &Path) -> Result<IVec2> {
    let (w, h) = image::image_dimensions(path)?;
    let to_i32 = |v: u32| {
        i32::try_from(v)
            .map_err(|_| Error::InvalidArgument(format!("sprite {} is too large", path.display())))
    };
    Ok(IVec2::new(to_i32(w)?, to_i32(h)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let params = DemoParams::parse(Vec::<String>::new()).unwrap();
        assert_eq!(params, DemoParams::default());
        assert!(params.clamp);
    }

    #[test]
    fn all_options() {
        let params = DemoParams::parse([
            "--speed",
            "120.5",
            "--no-clamp",
            "--sprite",
            "character.png",
            "--occupant",
            "48x64",
        ])
        .unwrap();

        assert_eq!(params.speed, 120.5);
        assert!(!params.clamp);
        assert_eq!(params.sprite, Some(PathBuf::from("character.png")));
        assert_eq!(params.occupant, Some(IVec2::new(48, 64)));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            DemoParams::parse(["--speed"]),
            Err(Error::InvalidArgument(_))
        ));
        assert!(DemoParams::parse(["--speed", "fast"]).is_err());
        assert!(DemoParams::parse(["--speed", "inf"]).is_err());
        assert!(DemoParams::parse(["--occupant", "48"]).is_err());
        assert!(DemoParams::parse(["--occupant", "-4x4"]).is_err());
        assert!(DemoParams::parse(["--fullscreen"]).is_err());
    }

    #[test]
    fn missing_sprite_is_an_error() {
        let err = probe_sprite(Path::new("definitely/not/here.png")).unwrap_err();
        assert!(matches!(err, Error::Image(_) | Error::Io(_)));
    }
}
