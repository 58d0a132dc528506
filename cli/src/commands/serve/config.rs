//! # CalcBot Arithmetic Service Configuration
//!
//! File: cli/src/commands/serve/config.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/calcbot
//!
//! ## Overview
//!
//! This module handles configuration loading, merging, and validation for
//! the arithmetic service. It combines settings from:
//! 1. Command-line arguments (highest priority)
//! 2. Local configuration file `.calcbot-srv.toml` (if present)
//! 3. Default values (lowest priority)
//!
//! ## Architecture
//!
//! The configuration system follows these steps:
//! 1. Parse command-line arguments
//! 2. Load configuration from file in the working directory (if present)
//! 3. Merge settings (CLI args override file settings)
//! 4. Create a unified ServiceConfig structure
//!
//! ## Examples
//!
//! Configuration file format:
//!
//! ```toml
//! # Service configuration
//! port = 9000
//! host = "0.0.0.0"
//! enable_cors = true
//! ```
//!
//! Loading and merging configuration:
//!
//! ```rust
//! // Parse CLI args
//! let args = ServeArgs::parse();
//!
//! // Load and merge config
//! let config = load_and_merge_config(args)?;
//!
//! // Use the config
//! println!("Listening on: {}:{}", config.host, config.port);
//! ```
//!
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use serde::Deserialize;
use std::net::IpAddr;
use std::{env, fs, path::Path};
use tracing::{debug, info, warn};

/// The expected name for the service-specific configuration file.
const CONFIG_FILE_NAME: &str = ".calcbot-srv.toml";

/// # Serve Command Arguments (`ServeArgs`)
///
/// Defines the command-line arguments accepted by the `calcbot serve`
/// command, parsed using `clap`. These arguments allow users to configure
/// the service directly from the command line, potentially overriding
/// settings from a configuration file or defaults.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Sets the network port the service will listen on.
    /// Defaults to port `8000`.
    #[arg(long, short, default_value_t = 8000)]
    pub port: u16,

    /// Sets the network IP address the service will bind to.
    /// Use `0.0.0.0` to bind to all available network interfaces, or `127.0.0.1`
    /// (the default) to only accept connections from the local machine.
    #[arg(long, default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Disables Cross-Origin Resource Sharing (CORS) headers.
    /// If this flag is present, CORS headers (like `Access-Control-Allow-Origin: *`)
    /// will *not* be sent. By default, CORS is enabled.
    #[arg(long)]
    pub no_cors: bool,
}

/// # Effective Service Configuration (`ServiceConfig`)
///
/// Holds the final, consolidated configuration settings for the arithmetic
/// service after merging command-line arguments and any settings loaded from
/// a `.calcbot-srv.toml` configuration file.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    /// The network port the service will listen on.
    pub port: u16,

    /// The network IP address the service will bind to.
    pub host: IpAddr,

    /// Indicates whether CORS headers should be enabled.
    pub enable_cors: bool,
}

/// # Configuration from File (`FileConfig`)
///
/// A temporary helper struct used solely for deserializing the
/// `.calcbot-srv.toml` file. All fields are optional (`Option<T>`) to allow
/// users to specify only the settings they wish to override from the
/// defaults.
#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)] // Disallow unknown fields during TOML deserialization
struct FileConfig {
    port: Option<u16>,
    host: Option<String>, // Read as string to handle potential parsing errors gracefully
    enable_cors: Option<bool>,
}

/// # Default Service Configuration (`impl Default for ServiceConfig`)
///
/// Provides the baseline default values for the `ServiceConfig` struct.
/// These defaults are used if no configuration file is found and no
/// overriding command-line arguments are provided for a particular setting.
impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            host: IpAddr::V4(std::net::Ipv4Addr::LOCALHOST), // Default to 127.0.0.1
            enable_cors: true,                               // CORS enabled by default
        }
    }
}

impl ServiceConfig {
    /// # Create Configuration from Arguments (`from_args`)
    ///
    /// Creates an initial `ServiceConfig` instance based *only* on the
    /// provided command-line arguments (`ServeArgs`). This serves as the
    /// starting point before potentially merging settings from a
    /// configuration file. Note that `enable_cors` is derived by inverting
    /// the `no_cors` argument flag.
    fn from_args(args: &ServeArgs) -> Self {
        Self {
            port: args.port,
            host: args.host,
            enable_cors: !args.no_cors, // `enable_cors` is true if `no_cors` is false.
        }
    }

    /// The base URL clients should use, for the startup banner.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}/api/v1", self.host, self.port)
    }
}

/// # Load and Merge Service Configuration (`load_and_merge_config`)
///
/// Orchestrates the process of determining the final service configuration.
/// It starts with default values, overrides them with settings found in a
/// `.calcbot-srv.toml` file in the current working directory (if present),
/// and finally overrides those with any explicitly provided command-line
/// arguments.
///
/// ## Arguments
///
/// * `args`: The `ServeArgs` struct containing parsed command-line arguments.
///
/// ## Returns
///
/// * `Result<ServiceConfig>`: The final `ServiceConfig` if successful, or an
///   error if the configuration file exists but cannot be read or parsed.
pub fn load_and_merge_config(args: ServeArgs) -> Result<ServiceConfig> {
    let search_dir = env::current_dir().context("Failed to get current working directory")?;
    debug!("Looking for config file in: {}", search_dir.display());

    let file_config = load_config_from_dir(&search_dir)?;
    Ok(merge_config(args, file_config))
}

/// # Merge Arguments and File Settings (`merge_config`)
///
/// Combines command-line arguments with optional file settings. Command-line
/// arguments take precedence over file settings *only if* the arguments
/// differ from the program's default values (meaning the user explicitly set
/// them). The boolean flag (`no_cors`) from the command line always
/// overrides the file if used.
///
/// ## Arguments
///
/// * `args`: The parsed command-line arguments.
/// * `file`: The configuration loaded from `.calcbot-srv.toml`, if any.
///
/// ## Returns
///
/// * `ServiceConfig`: The merged configuration.
fn merge_config(args: ServeArgs, file: Option<ServiceConfig>) -> ServiceConfig {
    // Start with configuration directly derived from command-line arguments.
    let mut effective_config = ServiceConfig::from_args(&args);

    let file_config = match file {
        Some(f) => f,
        None => {
            // No config file found or loaded. Use the arguments as-is.
            debug!("No config file found or loaded. Using arguments.");
            return effective_config;
        }
    };

    let cli_defaults = ServeArgs::parse_from(["calcbot-serve"]); // Get defaults for comparison

    // Port: Use file's value only if CLI arg was left at its default.
    if args.port == cli_defaults.port {
        effective_config.port = file_config.port;
    }
    // Host: Use file's value only if CLI arg was left at its default.
    if args.host == cli_defaults.host {
        effective_config.host = file_config.host;
    }
    // CORS: Use file's value only if --no-cors flag was *not* used.
    if !args.no_cors {
        effective_config.enable_cors = file_config.enable_cors;
    }

    effective_config
}

/// # Load Configuration from Directory (`load_config_from_dir`)
///
/// Attempts to find, read, and parse a `.calcbot-srv.toml` configuration
/// file within the specified directory (`search_dir`).
///
/// If the file exists and is successfully parsed, it returns
/// `Ok(Some(ServiceConfig))` containing the settings read from the file,
/// with defaults filling any unset fields. If the file does not exist, it
/// returns `Ok(None)`.
///
/// ## Arguments
///
/// * `search_dir`: The directory in which to look for the `.calcbot-srv.toml` file.
///
/// ## Returns
///
/// * `Result<Option<ServiceConfig>>`:
///     - `Ok(Some(config))` if the file was found and parsed successfully.
///     - `Ok(None)` if the file was not found.
///     - `Err(_)` if the file was found but could not be read or parsed
///       (e.g., invalid TOML, permissions issue).
fn load_config_from_dir(search_dir: &Path) -> Result<Option<ServiceConfig>> {
    let config_path = search_dir.join(CONFIG_FILE_NAME);

    // Check if the configuration file exists and is actually a file.
    if !config_path.exists() || !config_path.is_file() {
        debug!("No config file found at {}", config_path.display());
        return Ok(None); // No config file found is not an error.
    }

    info!("Loading configuration from {}", config_path.display());

    // Read the file content.
    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

    // Parse the TOML content using the temporary FileConfig struct.
    let file_config: FileConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

    // Get default values to fill in unspecified fields from the TOML file.
    let defaults = ServiceConfig::default();

    // Parse the host IP address string, falling back to default if invalid.
    let host_ip = match file_config.host {
        Some(ref host_str) => host_str.parse().unwrap_or_else(|e| {
            warn!(
                "Invalid host IP '{}' in config file ({}), using default {}",
                host_str, e, defaults.host
            );
            defaults.host // Use default host if parsing fails.
        }),
        None => defaults.host, // Use default host if not specified in file.
    };

    // Construct the ServiceConfig from file values, using defaults where needed.
    Ok(Some(ServiceConfig {
        port: file_config.port.unwrap_or(defaults.port),
        host: host_ip,
        enable_cors: file_config.enable_cors.unwrap_or(defaults.enable_cors),
    }))
}

// --- Unit Tests ---

/// # Unit Tests for Service Configuration
///
/// This module contains tests for the configuration loading, merging, and
/// validation logic within the `serve::config` module.
#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;
    use tempfile::TempDir; // Used for creating temporary directories for file-based tests.

    /// Test default configuration values.
    /// Verifies that `ServiceConfig::default()` returns the expected baseline settings.
    #[test]
    fn test_service_config_default() {
        let config = ServiceConfig::default();
        assert_eq!(config.port, 8000);
        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert!(config.enable_cors); // Default is true
    }

    /// Test creating config solely from arguments.
    /// Verifies that `ServiceConfig::from_args` correctly translates
    /// `ServeArgs` into a `ServiceConfig`, including the inversion of the
    /// `no_cors` flag.
    #[test]
    fn test_from_args() {
        // Create ServeArgs with non-default values.
        let args = ServeArgs {
            port: 9000,
            host: "0.0.0.0".parse().unwrap(),
            no_cors: true, // Should result in enable_cors: false
        };

        let config = ServiceConfig::from_args(&args);

        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "0.0.0.0".parse::<IpAddr>().unwrap());
        assert!(!config.enable_cors); // Check inversion
    }

    /// Test the base URL rendering used in the startup banner.
    #[test]
    fn test_base_url() {
        let config = ServiceConfig::default();
        assert_eq!(config.base_url(), "http://127.0.0.1:8000/api/v1");
    }

    /// Test loading configuration when no config file exists.
    /// Verifies that `load_config_from_dir` correctly returns `Ok(None)`
    /// when the `.calcbot-srv.toml` file is not present in the search directory.
    #[test]
    fn test_load_config_from_dir_no_file() -> Result<()> {
        let temp_dir = TempDir::new()?; // Create a temporary directory.

        // Attempt to load config from the empty directory.
        let result = load_config_from_dir(temp_dir.path())?;
        assert!(result.is_none()); // Expect None as no file exists.

        Ok(())
    }

    /// Test loading and parsing a valid configuration file.
    /// Verifies that `load_config_from_dir` reads, parses, and correctly
    /// interprets settings from a `.calcbot-srv.toml` file.
    #[test]
    fn test_load_config_from_dir_with_file() -> Result<()> {
        let temp_dir = TempDir::new()?;

        // Define config file content with various settings.
        let config_content = r#"
        port = 9090
        host = "0.0.0.0"
        enable_cors = false
        "#;

        // Write the content to the config file within the temp directory.
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), config_content)?;

        // Attempt to load the config.
        let result = load_config_from_dir(temp_dir.path())?;
        assert!(result.is_some()); // Expect Some(config).

        let config = result.unwrap();
        // Verify the values loaded from the file.
        assert_eq!(config.port, 9090);
        assert_eq!(config.host, "0.0.0.0".parse::<IpAddr>().unwrap());
        assert!(!config.enable_cors);

        Ok(())
    }

    /// Test that an invalid host string in the file falls back to the default.
    #[test]
    fn test_load_config_from_dir_invalid_host() -> Result<()> {
        let temp_dir = TempDir::new()?;
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            r#"host = "not-an-ip""#,
        )?;

        let config = load_config_from_dir(temp_dir.path())?.unwrap();
        // Invalid host falls back to the default; other fields keep defaults too.
        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(config.port, 8000);

        Ok(())
    }

    /// Test that an unknown field in the config file is rejected.
    #[test]
    fn test_load_config_from_dir_unknown_field() -> Result<()> {
        let temp_dir = TempDir::new()?;
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            r#"directory = "/tmp""#,
        )?;

        let result = load_config_from_dir(temp_dir.path());
        assert!(result.is_err()); // deny_unknown_fields rejects the stray key.

        Ok(())
    }

    /// Test merging when the CLI args were left at their defaults.
    /// File settings should win for every field.
    #[test]
    fn test_merge_file_overrides_default_args() {
        let args = ServeArgs {
            port: 8000,                       // CLI uses default port
            host: Ipv4Addr::LOCALHOST.into(), // CLI uses default host
            no_cors: false,                   // CLI flag not used
        };
        let file = ServiceConfig {
            port: 9090,
            host: "0.0.0.0".parse().unwrap(),
            enable_cors: false,
        };

        let config = merge_config(args, Some(file));

        // Port: CLI was default (8000), file is 9090. Expect file value.
        assert_eq!(config.port, 9090);
        // Host: CLI was default (127.0.0.1), file is 0.0.0.0. Expect file value.
        assert_eq!(config.host.to_string(), "0.0.0.0");
        // CORS: --no-cors not used, file disables it. Expect file value.
        assert!(!config.enable_cors);
    }

    /// Test merging when CLI overrides non-default file values.
    #[test]
    fn test_merge_cli_overrides_file() {
        let args = ServeArgs {
            port: 9999,                // Explicit CLI port
            host: "10.0.0.1".parse().unwrap(), // Explicit CLI host
            no_cors: true,             // Explicit CLI CORS setting (disable)
        };
        let file = ServiceConfig {
            port: 9001,
            host: "192.168.1.1".parse().unwrap(),
            enable_cors: true,
        };

        let config = merge_config(args, Some(file));

        // Assert that all CLI values took precedence.
        assert_eq!(config.port, 9999);
        assert_eq!(config.host.to_string(), "10.0.0.1");
        assert!(!config.enable_cors); // from --no-cors
    }

    /// Test merging when only args are provided (no config file).
    #[test]
    fn test_merge_args_only() {
        let args = ServeArgs {
            port: 8080,
            host: "0.0.0.0".parse().unwrap(),
            no_cors: false, // Explicitly *don't* disable CORS
        };

        let config = merge_config(args, None);

        // Assert that the config reflects the arguments directly.
        assert_eq!(config.port, 8080);
        assert_eq!(config.host.to_string(), "0.0.0.0");
        assert!(config.enable_cors); // Since --no-cors was false
    }
}
