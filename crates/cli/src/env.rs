use crate::error::CliError;
use filter_syntax::DialectKind;
use std::{collections::HashMap, fs, path::Path};

pub const DIALECT_VAR: &str = "TRAINING_EVENTS_DIALECT";
pub const ENDING_SOON_HOURS_VAR: &str = "TRAINING_EVENTS_ENDING_SOON_HOURS";

/// Environment variable manager that loads from system and .env files
#[derive(Debug, Clone, Default)]
pub struct EnvManager {
    vars: HashMap<String, String>,
}

impl EnvManager {
    /// Starts from the process environment.
    pub fn from_system() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Load variables from a .env file; file entries override the system.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), CliError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Failed to read env file {}: {}", path.display(), e))
        })?;

        self.parse_env_content(&content)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    fn parse_env_content(&mut self, content: &str) -> Result<(), CliError> {
        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let line = line.strip_prefix("export ").unwrap_or(line);
            let Some((key, value)) = line.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid env file: malformed line {} (expected KEY=VALUE)",
                    line_num + 1
                )));
            };

            let key = key.trim();
            if key.is_empty() {
                return Err(CliError::Config(format!(
                    "Invalid env file: empty key at line {}",
                    line_num + 1
                )));
            }

            self.vars
                .insert(key.to_string(), Self::unquote_value(value));
        }

        Ok(())
    }

    fn unquote_value(value: &str) -> String {
        let value = value.trim();

        for quote in ['"', '\''] {
            if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
                return value[1..value.len() - 1].to_string();
            }
        }

        value.to_string()
    }
}

/// Settings read from the environment. Command-line flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub dialect: DialectKind,
    pub ending_soon_hours: Option<u32>,
}

impl Settings {
    pub fn from_env(env: &EnvManager) -> Result<Self, CliError> {
        let dialect = match env.get(DIALECT_VAR) {
            Some(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse::<DialectKind>()
                .map_err(|e| CliError::Config(format!("{DIALECT_VAR}: {e}")))?,
            _ => DialectKind::default(),
        };

        let ending_soon_hours = match env.get(ENDING_SOON_HOURS_VAR) {
            Some(raw) if !raw.trim().is_empty() => Some(raw.trim().parse::<u32>().map_err(|e| {
                CliError::Config(format!("{ENDING_SOON_HOURS_VAR}: '{raw}' is not a number ({e})"))
            })?),
            _ => None,
        };

        Ok(Settings {
            dialect,
            ending_soon_hours,
        })
    }
}
