use super::Config;
use anyhow::{Context, Result, bail};
use directories::UserDirs;
use std::fs;
use std::path::Path;
use url::Url;

const CONFIG_DIR: &str = ".chatline";
const CONFIG_FILE: &str = "config.toml";

impl Config {
    pub fn load_or_init() -> Result<Self> {
        let home = UserDirs::new()
            .map(|u| u.home_dir().to_path_buf())
            .context("Could not find home directory")?;
        Self::load_or_init_in(&home.join(CONFIG_DIR))
    }

    /// Load `config.toml` from `dir`, writing a default one on first run.
    pub fn load_or_init_in(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE);

        if !dir.exists() {
            fs::create_dir_all(dir).context("Failed to create .chatline directory")?;
        }

        if config_path.exists() {
            return Self::load_from(&config_path);
        }

        let mut config = Self {
            config_path,
            ..Self::default()
        };
        config.save()?;

        // Overrides apply to this run only, never to the file just written.
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load an explicit config file. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: Config =
            toml::from_str(&contents).context("Failed to parse config file")?;
        config.config_path = path.to_path_buf();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let toml_str = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&self.config_path, toml_str).context("Failed to write config file")?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let base = Url::parse(self.api.base_url.trim())
            .with_context(|| format!("api.base_url is not a valid URL: {}", self.api.base_url))?;
        if !matches!(base.scheme(), "http" | "https") {
            bail!("api.base_url must use http or https, got {}", base.scheme());
        }
        if self.api.timeout_secs == 0 {
            bail!("api.timeout_secs must be greater than zero");
        }
        if self.api.connect_timeout_secs == 0 {
            bail!("api.connect_timeout_secs must be greater than zero");
        }
        if self.notifier.dismiss_after_ms == 0 {
            bail!("notifier.dismiss_after_ms must be greater than zero");
        }
        if self.composer.viewport_rows == 0 {
            bail!("composer.viewport_rows must be greater than zero");
        }
        if self.log.level.parse::<tracing::Level>().is_err() {
            bail!("log.level is not a tracing level: {}", self.log.level);
        }
        Ok(())
    }
}
