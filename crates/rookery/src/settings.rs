//! CLI settings loaded from the environment.
//!
//! Every field has a default; `ROOKERY_*` variables override them. A
//! `.env` file in the working directory is read first when present.

use std::error::Error;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use rookery_colony::ColonyConfig;
use rookery_engine::RunConfig;
use serde::Serialize;
use tracing::{debug, warn};

/// Initial proportion of Jumpers.
pub const ENV_X0: &str = "ROOKERY_X0";
/// Waiting cost `T`.
pub const ENV_WAITING_COST: &str = "ROOKERY_WAITING_COST";
/// Number of rounds.
pub const ENV_ROUNDS: &str = "ROOKERY_ROUNDS";
/// Colony size.
pub const ENV_COLONY_SIZE: &str = "ROOKERY_COLONY_SIZE";
/// Penguins per printed row.
pub const ENV_ROW_WIDTH: &str = "ROOKERY_ROW_WIDTH";
/// Layout shuffle seed.
pub const ENV_SEED: &str = "ROOKERY_SEED";
/// Print the colony every round. Text output only; ignored with `json`.
pub const ENV_SHOW_COLONY: &str = "ROOKERY_SHOW_COLONY";
/// `text` or `json`.
pub const ENV_FORMAT: &str = "ROOKERY_FORMAT";

/// How the final report is written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

/// An `ROOKERY_FORMAT` value that names no known format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownFormat(pub String);

impl fmt::Display for UnknownFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown output format '{}', expected text or json", self.0)
    }
}

impl Error for UnknownFormat {}

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(UnknownFormat(other.to_string())),
        }
    }
}

/// Everything the `rookery` binary needs to run.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Settings {
    /// Dynamics parameters.
    pub run: RunConfig,
    /// Colony display parameters.
    pub colony: ColonyConfig,
    /// Print the colony layout before the first and after every round.
    /// Only honoured for [`OutputFormat::Text`].
    pub show_colony: bool,
    /// Report format.
    pub format: OutputFormat,
}

impl Settings {
    /// Load settings from `.env` (if any) and the process environment.
    pub fn load() -> Result<Self> {
        apply_dotenv(dotenvy::dotenv())?;
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Whether per-round colony frames should be printed.
    pub fn prints_colony(&self) -> bool {
        self.show_colony && self.format == OutputFormat::Text
    }

    /// Build settings from an arbitrary variable lookup.
    ///
    /// Unset variables keep their defaults; set but unparseable ones are
    /// errors naming the variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(v) = parse_var(&lookup, ENV_X0)? {
            cfg.run.initial_proportion = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_WAITING_COST)? {
            cfg.run.waiting_cost = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_ROUNDS)? {
            cfg.run.rounds = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_COLONY_SIZE)? {
            cfg.colony.size = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_ROW_WIDTH)? {
            cfg.colony.row_width = v;
        }
        if let Some(v) = parse_var(&lookup, ENV_SEED)? {
            cfg.colony.seed = v;
        }
        if let Some(raw) = lookup(ENV_SHOW_COLONY) {
            cfg.show_colony = parse_flag(&raw)
                .with_context(|| format!("invalid value for {ENV_SHOW_COLONY}: {raw:?}"))?;
        }
        if let Some(v) = parse_var(&lookup, ENV_FORMAT)? {
            cfg.format = v;
        }

        cfg.validate()?;
        Ok(cfg)
    }

    /// Validate the run and colony sections.
    pub fn validate(&self) -> Result<()> {
        self.run.validate().context("invalid run configuration")?;
        self.colony
            .validate()
            .context("invalid colony configuration")?;
        if self.show_colony && !self.prints_colony() {
            warn!(
                format = ?self.format,
                "{ENV_SHOW_COLONY} only applies to text output; colony frames will not be printed"
            );
        }
        Ok(())
    }
}

/// A missing `.env` is fine; one that exists but cannot be read or parsed
/// is an error.
fn apply_dotenv(loaded: Result<PathBuf, dotenvy::Error>) -> Result<()> {
    match loaded {
        Ok(path) => {
            debug!(path = %path.display(), "loaded .env");
            Ok(())
        }
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e).context("reading .env"),
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("invalid value for {key}: {raw:?}")),
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => anyhow::bail!("expected a boolean, got '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let s = Settings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(s, Settings::default());
        assert_eq!(s.run.rounds, 30);
        assert_eq!(s.colony.size, 40);
        assert!(!s.show_colony);
        assert_eq!(s.format, OutputFormat::Text);
    }

    #[test]
    fn every_variable_overrides_its_field() {
        let s = Settings::from_lookup(lookup(&[
            (ENV_X0, "0.55"),
            (ENV_WAITING_COST, " 7.5 "),
            (ENV_ROUNDS, "12"),
            (ENV_COLONY_SIZE, "25"),
            (ENV_ROW_WIDTH, "5"),
            (ENV_SEED, "99"),
            (ENV_SHOW_COLONY, "yes"),
            (ENV_FORMAT, "JSON"),
        ]))
        .unwrap();

        assert_eq!(s.run, RunConfig::new(0.55, 7.5, 12));
        assert_eq!(
            s.colony,
            ColonyConfig {
                size: 25,
                row_width: 5,
                seed: 99
            }
        );
        assert!(s.show_colony);
        assert_eq!(s.format, OutputFormat::Json);
    }

    #[test]
    fn unparseable_value_names_the_variable() {
        let err = Settings::from_lookup(lookup(&[(ENV_ROUNDS, "lots")])).unwrap_err();
        assert!(err.to_string().contains(ENV_ROUNDS), "{err:#}");
    }

    #[test]
    fn unknown_format_is_rejected() {
        let err = Settings::from_lookup(lookup(&[(ENV_FORMAT, "yaml")])).unwrap_err();
        assert!(format!("{err:#}").contains("yaml"));
    }

    #[test]
    fn bad_flag_is_rejected() {
        assert!(Settings::from_lookup(lookup(&[(ENV_SHOW_COLONY, "maybe")])).is_err());
    }

    #[test]
    fn negative_waiting_cost_fails_validation() {
        let err = Settings::from_lookup(lookup(&[(ENV_WAITING_COST, "-3")])).unwrap_err();
        assert!(format!("{err:#}").contains("waiting cost"));
    }

    #[test]
    fn zero_colony_fails_validation() {
        let err = Settings::from_lookup(lookup(&[(ENV_COLONY_SIZE, "0")])).unwrap_err();
        assert!(format!("{err:#}").contains("colony"));
    }

    #[test]
    fn oversized_colony_fails_validation() {
        let err = Settings::from_lookup(lookup(&[(ENV_COLONY_SIZE, "18446744073709551615")]))
            .unwrap_err();
        assert!(format!("{err:#}").contains("exceeds the maximum"), "{err:#}");
    }

    #[test]
    fn colony_frames_are_text_only() {
        let text = Settings::from_lookup(lookup(&[(ENV_SHOW_COLONY, "true")])).unwrap();
        assert!(text.prints_colony());

        let json = Settings::from_lookup(lookup(&[
            (ENV_SHOW_COLONY, "true"),
            (ENV_FORMAT, "json"),
        ]))
        .unwrap();
        assert!(json.show_colony);
        assert!(!json.prints_colony());

        assert!(!Settings::default().prints_colony());
    }

    #[test]
    fn missing_dotenv_is_ignored() {
        let missing = dotenvy::Error::Io(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(apply_dotenv(Err(missing)).is_ok());
        assert!(apply_dotenv(Ok(PathBuf::from(".env"))).is_ok());
    }

    #[test]
    fn malformed_dotenv_is_reported() {
        let err = apply_dotenv(Err(dotenvy::Error::LineParse("ROOKERY_X0 0.5".into(), 11)))
            .unwrap_err();
        assert!(format!("{err:#}").contains(".env"), "{err:#}");

        let denied = dotenvy::Error::Io(std::io::Error::from(std::io::ErrorKind::PermissionDenied));
        assert!(apply_dotenv(Err(denied)).is_err());
    }

    #[test]
    fn flags_accept_common_spellings() {
        for raw in ["1", "true", "ON", " yes "] {
            assert!(parse_flag(raw).unwrap(), "{raw}");
        }
        for raw in ["0", "false", "Off", "no", ""] {
            assert!(!parse_flag(raw).unwrap(), "{raw}");
        }
    }
}
