use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Global configuration for the generator
///
/// Populated once at startup, either from a TOML file or from the
/// environment, then passed into the pipeline explicitly. Nothing reads
/// environment variables after this point.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Student roster as comma-separated `name:ip` pairs
    #[serde(default)]
    pub students: String,

    /// Public domain the proxy serves; student vhosts live under
    /// `*.{name}.{domain}`
    #[serde(default = "default_domain")]
    pub domain: String,

    /// Root directory the generated files are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Directory the vhost template is loaded from
    #[serde(default = "default_template_dir")]
    pub template_dir: PathBuf,

    /// File name of the vhost template inside `template_dir`
    #[serde(default = "default_template_name")]
    pub template_name: String,

    /// Fail on malformed roster entries instead of silently skipping them
    #[serde(default)]
    pub strict: bool,

    /// Fail when two backends derive the same SSH listen port
    #[serde(default)]
    pub check_port_collisions: bool,
}

fn default_domain() -> String {
    "dockergp.ip-ddns.com".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("/output")
}

fn default_template_dir() -> PathBuf {
    PathBuf::from("/app/templates")
}

fn default_template_name() -> String {
    "student.conf.tmpl".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            students: String::new(),
            domain: default_domain(),
            output_dir: default_output_dir(),
            template_dir: default_template_dir(),
            template_name: default_template_name(),
            strict: false,
            check_port_collisions: false,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Build configuration from the environment
    ///
    /// `STUDENTS` holds the roster, `DOMAIN` the public domain; `OUTPUT_DIR`
    /// and `TEMPLATE_DIR` override the fixed paths when set.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Config {
            students: std::env::var("STUDENTS").unwrap_or_default(),
            ..Config::default()
        };
        if let Ok(domain) = std::env::var("DOMAIN") {
            config.domain = domain;
        }
        if let Ok(dir) = std::env::var("OUTPUT_DIR") {
            config.output_dir = PathBuf::from(dir);
        }
        if let Ok(dir) = std::env::var("TEMPLATE_DIR") {
            config.template_dir = PathBuf::from(dir);
        }
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        let mut errors = Vec::new();

        if self.domain.trim().is_empty() {
            errors.push("'domain' must not be empty".to_string());
        }
        if self.template_name.trim().is_empty() {
            errors.push("'template_name' must not be empty".to_string());
        }

        if !errors.is_empty() {
            anyhow::bail!("Configuration errors:\n  - {}", errors.join("\n  - "));
        }

        Ok(())
    }

    /// Directory the stream-layer config files are written to
    pub fn stream_dir(&self) -> PathBuf {
        self.output_dir.join("stream.d")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
students = "alice:10.0.0.5,bob:10.0.0.12"
domain = "example.com"
output_dir = "/tmp/out"
template_dir = "/tmp/templates"
strict = true
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.students, "alice:10.0.0.5,bob:10.0.0.12");
        assert_eq!(config.domain, "example.com");
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.template_dir, PathBuf::from("/tmp/templates"));
        assert!(config.strict);
        assert!(!config.check_port_collisions);
    }

    #[test]
    fn test_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.domain, "dockergp.ip-ddns.com");
        assert_eq!(config.output_dir, PathBuf::from("/output"));
        assert_eq!(config.template_dir, PathBuf::from("/app/templates"));
        assert_eq!(config.template_name, "student.conf.tmpl");
        assert!(!config.strict);
        assert!(!config.check_port_collisions);
    }

    #[test]
    fn test_stream_dir() {
        let config = Config {
            output_dir: PathBuf::from("/srv/proxy"),
            ..Config::default()
        };
        assert_eq!(config.stream_dir(), PathBuf::from("/srv/proxy/stream.d"));
    }

    #[test]
    fn test_validate_rejects_empty_domain() {
        let config = Config {
            domain: "  ".to_string(),
            ..Config::default()
        };
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("'domain'"));
    }
}
