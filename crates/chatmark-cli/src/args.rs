use std::path::PathBuf;

use anyhow::{Result, bail};
use chatmark_config::OutputFormat;

pub const USAGE: &str = "Usage: chatmark-cli [--tui|--html|--json|--outline] [PATH|-]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Render {
        /// `None` defers to the configured default.
        format: Option<OutputFormat>,
        input: Input,
    },
}

pub fn parse_args<I, S>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut format = None;
    let mut input = None;

    for arg in args {
        let arg = arg.as_ref();
        let flag = match arg {
            "-h" | "--help" => return Ok(Command::Help),
            "--tui" => Some(OutputFormat::Tui),
            "--html" => Some(OutputFormat::Html),
            "--json" => Some(OutputFormat::Json),
            "--outline" => Some(OutputFormat::Outline),
            _ => None,
        };

        if let Some(flag) = flag {
            if format.replace(flag).is_some() {
                bail!("only one output format may be given");
            }
            continue;
        }

        if arg.starts_with("--") {
            bail!("unknown option '{arg}'");
        }

        let next = if arg == "-" {
            Input::Stdin
        } else {
            Input::File(PathBuf::from(arg))
        };
        if input.replace(next).is_some() {
            bail!("only one input may be given");
        }
    }

    Ok(Command::Render {
        format,
        input: input.unwrap_or(Input::Stdin),
    })
}
