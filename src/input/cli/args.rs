use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::fractals::julia::julia_config::JuliaConfig;
use crate::core::util::pixel_to_field_coords::cursor_to_julia_parameter;
use crate::input::cli::errors::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Png,
    Ppm,
}

impl OutputFormat {
    /// `.ppm` files get PPM, everything else PNG.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("ppm") => Self::Ppm,
            _ => Self::Png,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "fractal_field")]
#[command(version)]
#[command(about = "Renders a smoothly coloured Julia set to an image file")]
pub struct CliArgs {
    /// Output image path
    #[arg(short, long, default_value = "julia.png")]
    pub output: PathBuf,

    /// Image size as WIDTHxHEIGHT
    #[arg(short, long, value_parser = parse_dimensions, default_value = "1000x1000")]
    pub size: Dimensions,

    /// Julia parameter as RE,IM [default: -0.8,0.156]
    #[arg(
        short = 'c',
        long,
        value_parser = parse_complex,
        allow_hyphen_values = true,
        conflicts_with = "cursor"
    )]
    pub julia_parameter: Option<Complex>,

    /// Derive the Julia parameter from a cursor position X,Y inside --window
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub cursor: Option<Point>,

    /// Window size the cursor position refers to, as WIDTHxHEIGHT
    #[arg(long, value_parser = parse_dimensions, default_value = "1000x1000")]
    pub window: Dimensions,

    /// Output encoding [default: inferred from the output extension]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Number of rayon worker threads [default: all cores]
    #[arg(short, long)]
    pub threads: Option<NonZeroUsize>,

    /// Abandon the render after this many seconds
    #[arg(long, value_parser = parse_time_limit)]
    pub time_limit: Option<Duration>,
}

impl CliArgs {
    pub fn julia_config(&self) -> Result<JuliaConfig, CliError> {
        let defaults = JuliaConfig::default();

        let c = match (self.cursor, self.julia_parameter) {
            (Some(cursor), _) => {
                let window = PixelRect::from_size(self.window.width, self.window.height)?;
                cursor_to_julia_parameter(cursor, window)?
            }
            (None, Some(c)) => c,
            (None, None) => defaults.c,
        };

        Ok(JuliaConfig {
            c,
            width: self.size.width,
            height: self.size.height,
        })
    }

    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.format
            .unwrap_or_else(|| OutputFormat::from_path(&self.output))
    }
}

fn parse_pair<'a>(
    value: &'a str,
    separator: char,
    shape: &str,
) -> Result<(&'a str, &'a str), String> {
    value
        .split_once(separator)
        .map(|(first, second)| (first.trim(), second.trim()))
        .ok_or_else(|| format!("expected {}, got `{}`", shape, value))
}

fn parse_dimensions(value: &str) -> Result<Dimensions, String> {
    let (width, height) = parse_pair(value, 'x', "WIDTHxHEIGHT")?;

    let parse_side = |side: &str| match side.parse::<u32>() {
        Ok(0) => Err("dimensions must be at least 1x1".to_string()),
        Ok(n) => Ok(n),
        Err(err) => Err(format!("invalid dimension `{}`: {}", side, err)),
    };

    Ok(Dimensions {
        width: parse_side(width)?,
        height: parse_side(height)?,
    })
}

fn parse_complex(value: &str) -> Result<Complex, String> {
    let (real, imag) = parse_pair(value, ',', "RE,IM")?;

    let parse_part = |part: &str| {
        part.parse::<f32>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| format!("invalid number `{}`", part))
    };

    Ok(Complex::new(parse_part(real)?, parse_part(imag)?))
}

fn parse_point(value: &str) -> Result<Point, String> {
    let (x, y) = parse_pair(value, ',', "X,Y")?;

    let parse_coord = |coord: &str| {
        coord
            .parse::<i32>()
            .map_err(|err| format!("invalid coordinate `{}`: {}", coord, err))
    };

    Ok(Point {
        x: parse_coord(x)?,
        y: parse_coord(y)?,
    })
}

fn parse_time_limit(value: &str) -> Result<Duration, String> {
    let seconds = value
        .parse::<f64>()
        .map_err(|err| format!("invalid number of seconds `{}`: {}", value, err))?;

    Duration::try_from_secs_f64(seconds).map_err(|err| format!("invalid time limit: {}", err))
}
