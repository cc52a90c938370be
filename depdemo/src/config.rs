//! Application configuration management.
//!
//! Configuration is loaded from a YAML file with environment variable overrides. The configuration
//! file path defaults to `config.yaml` but can be specified via `-f` flag or `DEPDEMO_CONFIG`
//! environment variable.
//!
//! ## Loading Priority
//!
//! Configuration sources are merged in the following order (later sources override earlier ones):
//!
//! 1. **YAML config file** - Base configuration (default: `config.yaml`, missing file is fine)
//! 2. **Environment variables** - Variables prefixed with `DEPDEMO_` override YAML values
//!
//! ## Environment Variable Examples
//!
//! ```bash
//! # Override server port
//! DEPDEMO_PORT=8080
//!
//! # Bind to localhost only
//! DEPDEMO_HOST=127.0.0.1
//! ```

use clap::Parser;
use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::{Deserialize, Serialize};

/// Simple CLI args - just for specifying config file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file
    #[arg(short = 'f', long, env = "DEPDEMO_CONFIG", default_value = "config.yaml")]
    pub config: String,

    /// Validate configuration and exit without starting the server.
    /// Useful for CI/CD pipelines to catch config errors before deployment.
    #[arg(long)]
    pub validate: bool,
}

/// Main application configuration.
///
/// All fields have sensible defaults defined in the `Default` implementation.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// HTTP server host to bind to (e.g., "0.0.0.0" for all interfaces)
    pub host: String,
    /// HTTP server port to bind to
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Config {
    pub fn figment(args: &Args) -> Figment {
        Figment::new()
            // Load base config file
            .merge(Yaml::file(&args.config))
            // Environment variables can still override specific values
            .merge(Env::prefixed("DEPDEMO_"))
    }

    pub fn load(args: &Args) -> Result<Self, figment::Error> {
        Self::figment(args).extract()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    fn args_for(path: &str) -> Args {
        Args {
            config: path.to_string(),
            validate: false,
        }
    }

    #[test]
    fn defaults_when_no_file_or_env() {
        Jail::expect_with(|_jail| {
            let config = Config::load(&args_for("config.yaml")).expect("load config");
            assert_eq!(config.host, "0.0.0.0");
            assert_eq!(config.port, 8000);
            Ok(())
        });
    }

    #[test]
    fn yaml_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file("config.yaml", "host: 127.0.0.1\nport: 9000\n")?;
            let config = Config::load(&args_for("config.yaml")).expect("load config");
            assert_eq!(config.host, "127.0.0.1");
            assert_eq!(config.port, 9000);
            Ok(())
        });
    }

    #[test]
    fn env_overrides_yaml() {
        Jail::expect_with(|jail| {
            jail.create_file("config.yaml", "port: 9000\n")?;
            jail.set_env("DEPDEMO_PORT", "9001");
            let config = Config::load(&args_for("config.yaml")).expect("load config");
            assert_eq!(config.port, 9001);
            Ok(())
        });
    }

    #[test]
    fn bind_address_joins_host_and_port() {
        let config = Config::default();
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
    }
}
