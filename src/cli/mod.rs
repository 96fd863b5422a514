//! Command-line front end for the `persona` binary.
//!
//! Parsing and dispatch live here so they can be tested without touching the
//! filesystem; the binary only supplies an input loader and prints the JSON
//! result.

use std::path::PathBuf;

use serde_json::{json, Value};

use crate::persona::big_five::{BigFiveInput, BigFiveTraits};
use crate::persona::dark_triad;
use crate::persona::engine::{recommended_systems, PersonalityEngine};
use crate::persona::error::{PersonaError, Result};
use crate::persona::tci;
use crate::persona::validation::validate_profile_named;

pub const USAGE: &str = "\
usage: persona [--config <file>] <command> [args]

commands:
  generate  <traits>            derive every system and score consistency
  convert   <system> <traits>   derive one system (MBTI, HEXACO, DARK_TRIAD, TCI)
  validate  <system> <profile>  structural check of a serialized profile
  compare   <traits-list>       pairwise similarity of two or more vectors
  recommend <archetype>         systems suited to a narrative archetype
  advisory  <traits>            dark triad content advisory
  grow      <traits> <years>    project character growth
  version                       print the crate version

Inputs are YAML or JSON files; '-' reads stdin.";

/// Available CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliCommand {
    Generate,
    Convert,
    Validate,
    Compare,
    Recommend,
    Advisory,
    Grow,
    Version,
}

impl CliCommand {
    /// Positional arguments the command expects.
    pub fn arity(&self) -> usize {
        match self {
            Self::Version => 0,
            Self::Generate | Self::Compare | Self::Recommend | Self::Advisory => 1,
            Self::Convert | Self::Validate | Self::Grow => 2,
        }
    }

    /// Fail unless exactly [`arity`](Self::arity) arguments are supplied.
    pub fn check_arity(&self, args: &[String]) -> Result<()> {
        if args.len() == self.arity() {
            Ok(())
        } else {
            Err(PersonaError::invalid(format!(
                "'{}' takes {} argument(s), got {}",
                self,
                self.arity(),
                args.len()
            )))
        }
    }
}

impl std::fmt::Display for CliCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Generate => write!(f, "generate"),
            Self::Convert => write!(f, "convert"),
            Self::Validate => write!(f, "validate"),
            Self::Compare => write!(f, "compare"),
            Self::Recommend => write!(f, "recommend"),
            Self::Advisory => write!(f, "advisory"),
            Self::Grow => write!(f, "grow"),
            Self::Version => write!(f, "version"),
        }
    }
}

/// Parse a CLI command from a string.
pub fn parse_command(cmd: &str) -> Option<CliCommand> {
    match cmd {
        "generate" | "gen" => Some(CliCommand::Generate),
        "convert" => Some(CliCommand::Convert),
        "validate" => Some(CliCommand::Validate),
        "compare" => Some(CliCommand::Compare),
        "recommend" => Some(CliCommand::Recommend),
        "advisory" => Some(CliCommand::Advisory),
        "grow" => Some(CliCommand::Grow),
        "version" | "--version" | "-v" => Some(CliCommand::Version),
        _ => None,
    }
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub config: Option<PathBuf>,
    pub command: CliCommand,
    pub args: Vec<String>,
}

/// Parse the arguments after the program name.
pub fn parse_args<I>(args: I) -> Result<Invocation>
where
    I: IntoIterator<Item = String>,
{
    let mut config = None;
    let mut rest = Vec::new();
    let mut iter = args.into_iter();

    while let Some(arg) = iter.next() {
        if arg == "--config" || arg == "-c" {
            let path = iter
                .next()
                .ok_or_else(|| PersonaError::invalid("--config needs a file path"))?;
            config = Some(PathBuf::from(path));
        } else {
            rest.push(arg);
        }
    }

    let Some((name, args)) = rest.split_first() else {
        return Err(PersonaError::invalid("no command given"));
    };
    let command = parse_command(name)
        .ok_or_else(|| PersonaError::invalid(format!("unknown command '{}'", name)))?;
    command.check_arity(args)?;

    Ok(Invocation {
        config,
        command,
        args: args.to_vec(),
    })
}

fn load_traits(source: &str, load: &dyn Fn(&str) -> Result<String>) -> Result<BigFiveTraits> {
    BigFiveInput::parse_traits(&load(source)?)
}

/// Execute a parsed command.  `load` maps an input argument to its contents.
pub fn run(
    invocation: &Invocation,
    engine: &PersonalityEngine,
    load: &dyn Fn(&str) -> Result<String>,
) -> Result<Value> {
    let args = &invocation.args;
    invocation.command.check_arity(args)?;
    let value = match invocation.command {
        CliCommand::Generate => {
            let traits = load_traits(&args[0], load)?;
            serde_json::to_value(engine.generate_all(&traits)?)?
        }
        CliCommand::Convert => {
            let traits = load_traits(&args[1], load)?;
            serde_json::to_value(engine.convert_to_named(&args[0], &traits)?)?
        }
        CliCommand::Validate => {
            let data: Value = serde_yaml::from_str(&load(&args[1])?)?;
            serde_json::to_value(validate_profile_named(&args[0], &data)?)?
        }
        CliCommand::Compare => {
            let inputs: Vec<BigFiveInput> = serde_yaml::from_str(&load(&args[0])?)?;
            let traits = inputs
                .into_iter()
                .map(BigFiveInput::into_traits)
                .collect::<Result<Vec<_>>>()?;
            serde_json::to_value(engine.compare(&traits)?)?
        }
        CliCommand::Recommend => json!({
            "character_type": args[0],
            "systems": recommended_systems(&args[0]),
        }),
        CliCommand::Advisory => {
            let traits = load_traits(&args[0], load)?;
            traits.validate()?;
            let profile = dark_triad::convert_with_bands(&traits, &engine.config().risk_bands);
            json!({
                "dark_triad": profile,
                "advisory": dark_triad::content_advisory(&profile),
            })
        }
        CliCommand::Grow => {
            let traits = load_traits(&args[0], load)?;
            let years: f64 = args[1]
                .parse()
                .map_err(|_| PersonaError::invalid(format!("'{}' is not a number of years", args[1])))?;
            serde_json::to_value(engine.simulate_growth(&tci::convert(&traits), years)?)?
        }
        CliCommand::Version => json!({ "version": crate::VERSION }),
    };
    log::info!("Command '{}' completed", invocation.command);
    Ok(value)
}
