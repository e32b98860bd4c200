use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Environment variable overriding the configured backend base URL.
pub const BACKEND_URL_ENV: &str = "TRIPSHEET_BACKEND_URL";

const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the trip-planning backend (no trailing slash needed).
    pub backend_url: String,

    /// Path of the blank log-sheet template image layered behind SVG output.
    #[serde(default)]
    pub template_image: Option<String>,

    /// Default directory for rendered log sheets.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_output_dir() -> String {
    ".".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            template_image: None,
            output_dir: default_output_dir(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("tripsheet")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".tripsheet")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("tripsheet.conf")
    }

    /// Load configuration from file, or return defaults if not found.
    /// The TRIPSHEET_BACKEND_URL environment variable wins over the file.
    pub fn load() -> Self {
        let path = Self::config_file();

        let mut cfg: Config = if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        };

        if let Ok(url) = env::var(BACKEND_URL_ENV)
            && !url.is_empty()
        {
            cfg.backend_url = url;
        }

        cfg
    }

    /// Initialize the configuration directory and default config file.
    pub fn init_all(backend_url: Option<String>) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let config = Config {
            backend_url: backend_url.unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string()),
            ..Config::default()
        };

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| io::Error::other(format!("config serialization error: {e}")))?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;

        Ok(())
    }
}
