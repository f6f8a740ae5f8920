use crate::errors::{AppError, AppResult};
use crate::models::user::UserProfile;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub mod migrate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_user_id")]
    pub user_id: String,
    #[serde(default = "default_user_name")]
    pub user_name: String,
    #[serde(default)]
    pub user_email: String,
    #[serde(default = "default_mail_from")]
    pub mail_from: String,
    #[serde(default = "default_mail_to")]
    pub mail_to: String,
    #[serde(default = "default_mail_spool")]
    pub mail_spool: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_user_id() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "employee".to_string())
}
fn default_user_name() -> String {
    default_user_id()
}
fn default_mail_from() -> String {
    "timesheet@localhost".to_string()
}
fn default_mail_to() -> String {
    "hr@localhost".to_string()
}
fn default_mail_spool() -> String {
    Config::config_dir()
        .join("outbox")
        .to_string_lossy()
        .to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            user_id: default_user_id(),
            user_name: default_user_name(),
            user_email: String::new(),
            mail_from: default_mail_from(),
            mail_to: default_mail_to(),
            mail_spool: default_mail_spool(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimesheet")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rtimesheet")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimesheet.conf")
    }

    /// Return the full path of the default SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rtimesheet.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn save(&self) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))?;
        fs::create_dir_all(Self::config_dir())?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    pub fn spool_dir(&self) -> PathBuf {
        expand_tilde(&self.mail_spool)
    }

    pub fn user(&self) -> UserProfile {
        UserProfile {
            id: self.user_id.clone(),
            name: self.user_name.clone(),
            email: self.user_email.clone(),
        }
    }

    /// Initialize configuration and database files.
    ///
    /// In test mode the config file is left alone and only the DB path is
    /// prepared.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        let mut config = if is_test {
            Self::default()
        } else {
            fs::create_dir_all(&dir)?;
            Self::load()?
        };

        if let Some(name) = custom_db {
            let p = expand_tilde(&name);
            let db_path = if p.is_absolute() { p } else { dir.join(p) };
            config.database = db_path.to_string_lossy().to_string();
        }

        if !is_test {
            config.save()?;
        }

        Ok(config)
    }
}
