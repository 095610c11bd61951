use crate::core::data::surface_size::{SurfaceSize, SurfaceSizeError};
use std::error::Error;
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_OUTPUT: &str = "output/mandelbrot.ppm";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliOptionsError {
    InvalidNumber { name: &'static str, value: String },
    InvalidSize(SurfaceSizeError),
    UnexpectedArgument(String),
}

impl fmt::Display for CliOptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNumber { name, value } => {
                write!(f, "{} must be a positive whole number, got '{}'", name, value)
            }
            Self::InvalidSize(err) => write!(f, "{}", err),
            Self::UnexpectedArgument(arg) => {
                write!(f, "unexpected argument '{}'; usage: [WIDTH] [HEIGHT] [OUTPUT]", arg)
            }
        }
    }
}

impl Error for CliOptionsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidSize(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SurfaceSizeError> for CliOptionsError {
    fn from(err: SurfaceSizeError) -> Self {
        Self::InvalidSize(err)
    }
}

/// Positional `[WIDTH] [HEIGHT] [OUTPUT]` arguments of the headless renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    pub size: SurfaceSize,
    pub output: PathBuf,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            size: SurfaceSize::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
                .expect("default surface size is valid"),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

fn parse_dimension(name: &'static str, value: String) -> Result<u32, CliOptionsError> {
    value
        .parse::<u32>()
        .map_err(|_| CliOptionsError::InvalidNumber { name, value })
}

impl CliOptions {
    pub fn from_args<I>(args: I) -> Result<Self, CliOptionsError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let defaults = Self::default();

        let width = match args.next() {
            Some(value) => parse_dimension("WIDTH", value)?,
            None => defaults.size.width(),
        };
        let height = match args.next() {
            Some(value) => parse_dimension("HEIGHT", value)?,
            None => defaults.size.height(),
        };
        let output = args.next().map_or(defaults.output, PathBuf::from);

        if let Some(extra) = args.next() {
            return Err(CliOptionsError::UnexpectedArgument(extra));
        }

        Ok(Self {
            size: SurfaceSize::new(width, height)?,
            output,
        })
    }
}
