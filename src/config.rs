//! Configuration for Session Greeter.
//!
//! Settings come from command-line arguments with `GREETER_`-prefixed
//! environment variable fallbacks:
//!
//! - `GREETER_HOST` - Server bind address (default: 0.0.0.0)
//! - `GREETER_PORT` - Server port (default: 8080)
//! - `GREETER_TEMPLATES` - Directory of `*.html` templates (default: built-in set)
//!
//! # Example
//!
//! ```ignore
//! use clap::Parser;
//! use session_greeter::config::Config;
//!
//! let config = Config::parse();
//! println!("Listening on {}", config.bind_address());
//! ```

use std::path::PathBuf;

use clap::Parser;

// =============================================================================
// Default Values
// =============================================================================

/// Default server host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default server port.
pub const DEFAULT_PORT: &str = "8080";

// =============================================================================
// CLI Arguments
// =============================================================================

/// Session Greeter - greets visitors by name using a session cookie.
#[derive(Parser, Debug, Clone)]
#[command(name = "session-greeter")]
#[command(author, about, long_about = None, disable_version_flag = true)]
pub struct Config {
    /// Host address to bind the server to.
    #[arg(long, default_value = DEFAULT_HOST, env = "GREETER_HOST")]
    pub host: String,

    /// Web server binds to this port.
    #[arg(long, default_value = DEFAULT_PORT, env = "GREETER_PORT")]
    pub port: String,

    /// Directory containing `*.html` view templates.
    ///
    /// If not specified, the built-in templates are used.
    #[arg(long, env = "GREETER_TEMPLATES")]
    pub templates: Option<PathBuf>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Disable request tracing.
    #[arg(long, default_value_t = false)]
    pub no_tracing: bool,

    /// Print the version number and exit.
    #[arg(short = 'V', long = "version", default_value_t = false)]
    pub print_version: bool,
}

impl Config {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("Host must not be empty. Set --host or GREETER_HOST".to_string());
        }

        match self.port.parse::<u16>() {
            Ok(0) | Err(_) => Err(format!(
                "Invalid port '{}': expected a number between 1 and 65535",
                self.port
            )),
            Ok(_) => Ok(()),
        }
    }

    /// Get the server bind address as "host:port".
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Version string printed by `-V`.
pub fn version_string() -> String {
    format!("Version number: v{}", env!("CARGO_PKG_VERSION"))
}

// =============================================================================
// Tests
// =============================================================================
