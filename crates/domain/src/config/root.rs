use super::{ConfigError, LogFormat, LoggingConfig, ResolverConfig};
use std::path::PathBuf;

/// Rule file looked up in the working directory when no path is given.
pub const DEFAULT_RULES_FILE: &str = "rblcheckrc";

/// Where the produced query names go.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Feed them to the external resolver process.
    #[default]
    Resolve,
    /// Print them to stdout, one per line, without spawning anything.
    PrintQueries,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub rules_path: PathBuf,
    pub resolver: ResolverConfig,
    pub output: OutputMode,
    pub logging: LoggingConfig,
}

/// Values supplied on the command line; `None` keeps the default.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub rules_path: Option<PathBuf>,
    pub resolver_program: Option<String>,
    pub resolver_args: Vec<String>,
    pub print_queries: bool,
    pub log_level: Option<String>,
    pub log_format: Option<String>,
}

impl Config {
    pub fn load(cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = Config::default();
        config.apply_cli_overrides(cli_overrides)?;
        Ok(config)
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) -> Result<(), ConfigError> {
        if let Some(path) = overrides.rules_path {
            self.rules_path = path;
        }
        if let Some(program) = overrides.resolver_program {
            self.resolver.program = program;
        }
        self.resolver.forwarded_args = overrides.resolver_args;
        if overrides.print_queries {
            self.output = OutputMode::PrintQueries;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level.to_ascii_lowercase();
        }
        if let Some(format) = overrides.log_format {
            self.logging.format = format.parse::<LogFormat>()?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rules_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyRulesPath);
        }
        if self.resolver.program.trim().is_empty() {
            return Err(ConfigError::EmptyResolverProgram);
        }
        self.logging.validate()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rules_path: PathBuf::from(DEFAULT_RULES_FILE),
            resolver: ResolverConfig::default(),
            output: OutputMode::default(),
            logging: LoggingConfig::default(),
        }
    }
}
