//! Command-line configuration
//!
//! Arguments are parsed by hand; there are only a few flags.
//!
//! ```text
//! overflow-arena [--seed <u64>] [--types <name,name,...>] [--no-color] [--verbose]
//! ```

use crate::arena::{ArenaError, TypeCatalog};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub const USAGE: &str = "\
Usage: overflow-arena [OPTIONS]

Options:
  --seed <N>             Replay the same sequence of rounds
  --types <A,B,...>      Only draw rounds from these types (e.g. int8_t,uint8_t)
  --no-color             Disable colored output
  -v, --verbose          Log debug events to stderr
  -h, --help             Show this help";

/// Settings for one run of the program
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArenaConfig {
    pub seed: Option<u64>,
    /// `None` means the full catalog
    pub types: Option<Vec<String>>,
    pub no_color: bool,
    pub verbose: bool,
    pub show_help: bool,
}

impl ArenaConfig {
    /// Parse arguments, excluding the program name
    pub fn from_args<I, S>(args: I) -> Result<Self, ArenaError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = ArenaConfig::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let arg = arg.as_ref();
            // Accept both `--seed 7` and `--seed=7`
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) if flag.starts_with("--") => (flag, Some(value.to_string())),
                _ => (arg, None),
            };

            match flag {
                "--seed" => {
                    let value = Self::value(flag, inline, &mut args)?;
                    let seed = value.parse::<u64>().map_err(|_| ArenaError::InvalidArgument {
                        message: format!("--seed expects a non-negative integer, got '{}'", value),
                    })?;
                    config.seed = Some(seed);
                }
                "--types" => {
                    let value = Self::value(flag, inline, &mut args)?;
                    let names: Vec<String> = value
                        .split(',')
                        .map(|name| name.trim().to_string())
                        .filter(|name| !name.is_empty())
                        .collect();
                    if names.is_empty() {
                        return Err(ArenaError::InvalidArgument {
                            message: "--types needs at least one type name".to_string(),
                        });
                    }
                    config.types = Some(names);
                }
                "--no-color" => config.no_color = true,
                "-v" | "--verbose" => config.verbose = true,
                "-h" | "--help" => config.show_help = true,
                other => {
                    return Err(ArenaError::InvalidArgument {
                        message: format!("unknown option '{}'", other),
                    })
                }
            }
        }

        Ok(config)
    }

    fn value<I, S>(flag: &str, inline: Option<String>, rest: &mut I) -> Result<String, ArenaError>
    where
        I: Iterator<Item = S>,
        S: AsRef<str>,
    {
        match inline {
            Some(value) => Ok(value),
            None => rest
                .next()
                .map(|value| value.as_ref().to_string())
                .ok_or_else(|| ArenaError::InvalidArgument {
                    message: format!("{} expects a value", flag),
                }),
        }
    }

    /// The catalog rounds are drawn from
    pub fn catalog(&self) -> Result<TypeCatalog, ArenaError> {
        let standard = TypeCatalog::standard();
        match &self.types {
            Some(names) => standard.restrict(names.as_slice()),
            None => Ok(standard),
        }
    }

    /// Seeded when `--seed` was given, otherwise from OS entropy
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Default log filter when `RUST_LOG` is unset
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "overflow_arena=debug"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_defaults() {
        let config = ArenaConfig::from_args(Vec::<String>::new()).unwrap();
        assert_eq!(config, ArenaConfig::default());
        assert_eq!(config.catalog().unwrap().len(), 6);
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_all_flags() {
        let config = ArenaConfig::from_args([
            "--seed",
            "42",
            "--types=int8_t, uint8_t",
            "--no-color",
            "-v",
        ])
        .unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(
            config.types,
            Some(vec!["int8_t".to_string(), "uint8_t".to_string()])
        );
        assert!(config.no_color);
        assert!(config.verbose);
        assert_eq!(config.catalog().unwrap().names(), vec!["uint8_t", "int8_t"]);
    }

    #[test]
    fn test_bad_arguments() {
        assert!(matches!(
            ArenaConfig::from_args(["--seed", "-3"]),
            Err(ArenaError::InvalidArgument { .. })
        ));
        assert!(matches!(
            ArenaConfig::from_args(["--seed"]),
            Err(ArenaError::InvalidArgument { .. })
        ));
        assert!(matches!(
            ArenaConfig::from_args(["--types", " , "]),
            Err(ArenaError::InvalidArgument { .. })
        ));
        assert!(matches!(
            ArenaConfig::from_args(["--frobnicate"]),
            Err(ArenaError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_unknown_type_fails_at_catalog() {
        let config = ArenaConfig::from_args(["--types", "int128_t"]).unwrap();
        assert!(matches!(
            config.catalog(),
            Err(ArenaError::UnknownType { .. })
        ));
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = ArenaConfig::from_args(["--seed", "5"]).unwrap();
        let a: u64 = config.rng().gen();
        let b: u64 = config.rng().gen();
        assert_eq!(a, b);
    }
}
