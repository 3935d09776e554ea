//! Front-end configuration parsed from environment variables.
//!
//! Settings can be overridden via environment variables prefixed with
//! `VENN_`, and command-line flags take precedence over both.

use std::env;
use std::str::FromStr;

use venn_expr::{Element, Universe};

use crate::error::CliError;

/// How much of the evaluator's work is reported on stderr.
///
/// Defaults to `Warn`, which keeps the interactive status uncluttered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Every operator reduction inside a pass.
    Trace,
    /// Alias bindings for solved groups and each evaluated expression.
    Debug,
    /// Start-up details such as the universe size.
    Info,
    /// Only problems worth a user's attention.
    #[default]
    Warn,
    /// Only failures.
    Error,
}

/// Accepted spellings, matched case-insensitively. The first spelling of
/// each level is its filter directive.
const LEVEL_NAMES: [(&str, LogLevel); 6] = [
    ("trace", LogLevel::Trace),
    ("debug", LogLevel::Debug),
    ("info", LogLevel::Info),
    ("warn", LogLevel::Warn),
    ("warning", LogLevel::Warn),
    ("error", LogLevel::Error),
];

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LEVEL_NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s.trim()))
            .map(|&(_, level)| level)
            .ok_or_else(|| {
                CliError::InvalidConfig(format!(
                    "unknown log level '{s}', expected one of: trace, debug, info, warn, error"
                ))
            })
    }
}

impl LogLevel {
    /// The level as a `tracing` filter directive.
    #[must_use]
    pub fn as_filter_str(self) -> &'static str {
        LEVEL_NAMES
            .iter()
            .find(|&&(_, level)| level == self)
            .map_or("warn", |&(name, _)| name)
    }
}

/// A base set given on the command line as `NAME=E1,E2,...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseSetSpec {
    /// Single-letter set name.
    pub name: char,
    /// Listed members; may be empty.
    pub members: Vec<Element>,
}

impl FromStr for BaseSetSpec {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            CliError::InvalidConfig(format!(
                "invalid base set '{s}', expected NAME=E1,E2,... with a lowercase letter name"
            ))
        };
        let (name, members) = s.split_once('=').ok_or_else(invalid)?;
        let mut letters = name.trim().chars();
        let name = match (letters.next(), letters.next()) {
            (Some(letter), None) if letter.is_ascii_lowercase() => letter,
            _ => return Err(invalid()),
        };
        let members = members
            .split(',')
            .map(str::trim)
            .filter(|member| !member.is_empty())
            .map(|member| member.parse::<Element>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { name, members })
    }
}

/// Default number of universe elements.
const DEFAULT_UNIVERSE_SIZE: Element = 8;

/// Largest accepted universe; every element is labelled and listed.
pub const MAX_UNIVERSE_SIZE: Element = 4096;

/// Configuration for the front end.
///
/// # Environment Variables
///
/// - `VENN_LOG_LEVEL`: Sets the log level (trace, debug, info, warn, error)
/// - `VENN_UNIVERSE_SIZE`: Number of elements; the universe is `1..=N`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: LogLevel,
    /// Number of universe elements.
    pub universe_size: Element,
    /// Explicit base sets; the reference sets are used when empty.
    pub base_sets: Vec<BaseSetSpec>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            universe_size: DEFAULT_UNIVERSE_SIZE,
            base_sets: Vec::new(),
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if an environment variable contains
    /// an invalid value.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its
    /// value.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` for an unparsable value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = match lookup("VENN_LOG_LEVEL") {
            Some(val) => val.parse()?,
            None => LogLevel::default(),
        };

        let universe_size = match lookup("VENN_UNIVERSE_SIZE") {
            Some(val) => parse_universe_size(&val)?,
            None => DEFAULT_UNIVERSE_SIZE,
        };

        Ok(Self {
            log_level,
            universe_size,
            base_sets: Vec::new(),
        })
    }

    /// Apply optional overrides to an existing configuration.
    ///
    /// This is intended for CLI overrides that should take precedence over
    /// environment-based defaults. A non-empty `base_sets` replaces the
    /// configured sets.
    #[must_use]
    pub fn apply_overrides(
        mut self,
        log_level: Option<LogLevel>,
        universe_size: Option<Element>,
        base_sets: Vec<BaseSetSpec>,
    ) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }

        if let Some(size) = universe_size {
            self.universe_size = size;
        }

        if !base_sets.is_empty() {
            self.base_sets = base_sets;
        }

        self
    }

    /// Create a new configuration with the specified log level.
    #[must_use]
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    /// Build the universe `1..=universe_size` with the configured base sets.
    ///
    /// Without explicit base sets the reference sets are used, restricted to
    /// the elements the universe contains.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` for an empty universe and
    /// `CliError::Universe` when explicit base sets are inconsistent.
    pub fn build_universe(&self) -> Result<Universe, CliError> {
        if !(1..=MAX_UNIVERSE_SIZE).contains(&self.universe_size) {
            return Err(CliError::InvalidConfig(format!(
                "universe size must be between 1 and {MAX_UNIVERSE_SIZE}"
            )));
        }
        let elements = 1..=self.universe_size;
        if self.base_sets.is_empty() {
            return Ok(Universe::with_reference_sets(elements));
        }
        let sets = self
            .base_sets
            .iter()
            .map(|spec| (spec.name, spec.members.clone()));
        Ok(Universe::new(elements, sets)?)
    }
}

/// Parse a universe size in `1..=MAX_UNIVERSE_SIZE`.
///
/// # Errors
///
/// Returns `CliError::InvalidConfig` when `value` is not an integer in range.
pub fn parse_universe_size(value: &str) -> Result<Element, CliError> {
    match value.trim().parse::<Element>() {
        Ok(size) if (1..=MAX_UNIVERSE_SIZE).contains(&size) => Ok(size),
        _ => Err(CliError::InvalidConfig(format!(
            "invalid universe size '{value}', expected an integer from 1 to {MAX_UNIVERSE_SIZE}"
        ))),
    }
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests require explicit panic messages for debugging failures"
)]
mod tests {
    use super::*;
    use rstest::rstest;
    use venn_expr::Subset;

    #[rstest]
    #[case("trace", LogLevel::Trace)]
    #[case("DEBUG", LogLevel::Debug)]
    #[case("Info", LogLevel::Info)]
    #[case("warning", LogLevel::Warn)]
    #[case("error", LogLevel::Error)]
    #[case(" trace ", LogLevel::Trace)]
    fn log_level_parses_valid_values(#[case] input: &str, #[case] expected: LogLevel) {
        assert_eq!(input.parse::<LogLevel>().ok(), Some(expected));
    }

    #[test]
    fn log_level_rejects_invalid_values() {
        let result = "loud".parse::<LogLevel>();
        assert!(result.unwrap_err().to_string().contains("unknown log level"));
    }

    #[test]
    fn log_level_as_filter_str_returns_correct_strings() {
        assert_eq!(LogLevel::Trace.as_filter_str(), "trace");
        assert_eq!(LogLevel::Warn.as_filter_str(), "warn");
        assert_eq!(LogLevel::Debug.as_filter_str(), "debug");
        assert_eq!(LogLevel::Error.as_filter_str(), "error");
    }

    #[rstest]
    #[case("a=1,2,3", 'a', vec![1, 2, 3])]
    #[case("d = 4, 5 ", 'd', vec![4, 5])]
    #[case("z=", 'z', vec![])]
    fn base_set_spec_parses(
        #[case] input: &str,
        #[case] name: char,
        #[case] members: Vec<Element>,
    ) {
        assert_eq!(
            input.parse::<BaseSetSpec>().unwrap(),
            BaseSetSpec { name, members }
        );
    }

    #[rstest]
    #[case("a")]
    #[case("A=1")]
    #[case("ab=1")]
    #[case("a=1,x")]
    #[case("=1")]
    fn base_set_spec_rejects_malformed(#[case] input: &str) {
        let err = input.parse::<BaseSetSpec>().unwrap_err();
        assert!(err.to_string().contains("invalid base set"));
    }

    #[test]
    fn config_reads_lookup_values() {
        let config = CliConfig::from_lookup(|key| match key {
            "VENN_LOG_LEVEL" => Some("debug".to_string()),
            "VENN_UNIVERSE_SIZE" => Some("5".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.universe_size, 5);
    }

    #[test]
    fn config_defaults_without_environment() {
        let config = CliConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[rstest]
    #[case("0")]
    #[case("-3")]
    #[case("many")]
    #[case("4097")]
    #[case("4294967295")]
    fn config_rejects_invalid_universe_size(#[case] value: &str) {
        let result = CliConfig::from_lookup(|key| {
            (key == "VENN_UNIVERSE_SIZE").then(|| value.to_string())
        });
        assert!(result.unwrap_err().to_string().contains("invalid universe size"));
    }

    #[test]
    fn apply_overrides_updates_selected_fields() {
        let spec = BaseSetSpec {
            name: 'a',
            members: vec![1],
        };
        let config = CliConfig::default().apply_overrides(
            Some(LogLevel::Error),
            Some(3),
            vec![spec.clone()],
        );
        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(config.universe_size, 3);
        assert_eq!(config.base_sets, vec![spec]);

        let config = CliConfig::default().apply_overrides(None, None, Vec::new());
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn builds_reference_universe_by_default() {
        let universe = CliConfig::default().build_universe().unwrap();
        assert_eq!(universe, Universe::reference());
    }

    #[test]
    fn builds_universe_from_explicit_sets() {
        let config = CliConfig::default().apply_overrides(
            None,
            Some(4),
            vec![BaseSetSpec {
                name: 'x',
                members: vec![1, 4],
            }],
        );
        let universe = config.build_universe().unwrap();
        assert_eq!(universe.elements(), &[1, 2, 3, 4]);
        assert_eq!(
            universe.base_set('x').map(Subset::sorted),
            Some(vec![1, 4])
        );
    }

    #[rstest]
    #[case(1)]
    #[case(MAX_UNIVERSE_SIZE)]
    fn accepts_sizes_up_to_the_cap(#[case] size: Element) {
        assert_eq!(parse_universe_size(&size.to_string()).unwrap(), size);
        let config = CliConfig::default().apply_overrides(None, Some(size), Vec::new());
        assert_eq!(
            config.build_universe().unwrap().elements().len(),
            usize::try_from(size).unwrap()
        );
    }

    #[test]
    fn build_rejects_oversized_universe() {
        let config = CliConfig {
            universe_size: MAX_UNIVERSE_SIZE + 1,
            ..CliConfig::default()
        };
        let err = config.build_universe().unwrap_err();
        assert!(err.to_string().contains("between 1 and 4096"));
    }

    #[test]
    fn rejects_sets_outside_universe() {
        let config = CliConfig::default().apply_overrides(
            None,
            Some(2),
            vec![BaseSetSpec {
                name: 'a',
                members: vec![3],
            }],
        );
        assert!(matches!(
            config.build_universe(),
            Err(CliError::Universe(_))
        ));
    }
}
