use crate::consts;
use lexopt::{Arg, Parser, ValueExt};
use ratatui::layout::Size;
use thiserror::Error;

static USAGE: &str = "\
Usage: slither [options]

Steer the snake with the arrow keys, wasd, or hjkl.  Eat the food, avoid the
walls and yourself.  Press Esc or q to quit.

Options:
  --width <COLUMNS>   Width of the play surface in terminal columns
  --height <ROWS>     Height of the play surface in terminal rows
  -h, --help          Show this help and exit
  -V, --version       Show the program version and exit";

/// Command-line options: the size of the drawing surface from which the grid
/// dimensions are derived
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Options {
    pub(crate) surface: Size,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            surface: consts::DEFAULT_SURFACE_SIZE,
        }
    }
}

impl Options {
    /// Parse the process arguments.  Returns `None` if a help or version
    /// option was handled instead.
    pub(crate) fn from_args() -> Result<Option<Options>, OptionsError> {
        Options::from_parser(Parser::from_env())
    }

    fn from_parser(mut parser: Parser) -> Result<Option<Options>, OptionsError> {
        let mut opts = Options::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Long("width") => {
                    opts.surface.width =
                        parse_dimension(&mut parser, "width", consts::MIN_SURFACE_SIZE.width)?;
                }
                Arg::Long("height") => {
                    opts.surface.height =
                        parse_dimension(&mut parser, "height", consts::MIN_SURFACE_SIZE.height)?;
                }
                Arg::Short('h') | Arg::Long("help") => {
                    println!("{USAGE}");
                    return Ok(None);
                }
                Arg::Short('V') | Arg::Long("version") => {
                    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                    return Ok(None);
                }
                _ => return Err(arg.unexpected().into()),
            }
        }
        Ok(Some(opts))
    }
}

fn parse_dimension(
    parser: &mut Parser,
    name: &'static str,
    min: u16,
) -> Result<u16, OptionsError> {
    let value = parser.value()?.parse::<u16>()?;
    if value < min {
        return Err(OptionsError::TooSmall { name, min });
    }
    Ok(value)
}

#[derive(Debug, Error)]
pub(crate) enum OptionsError {
    #[error(transparent)]
    Parse(#[from] lexopt::Error),
    #[error("--{name} must be at least {min}")]
    TooSmall { name: &'static str, min: u16 },
}
