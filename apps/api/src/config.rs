use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};

// Import MongoDB config from the database library
use database::mongodb::MongoConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Directory uploaded cover images are written to and served from
    pub uploads_dir: String,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?;
        let server = ServerConfig::from_env()?;
        let uploads_dir = core_config::env_or_default("UPLOADS_DIR", "uploads");

        Ok(Self {
            app: app_info!(),
            mongodb,
            server,
            environment,
            uploads_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uploads_dir_defaults_to_uploads() {
        temp_env::with_var("UPLOADS_DIR", None::<&str>, || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.uploads_dir, "uploads");
        });
    }

    #[test]
    fn test_uploads_dir_overridable() {
        temp_env::with_var("UPLOADS_DIR", Some("/var/data/uploads"), || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.uploads_dir, "/var/data/uploads");
        });
    }
}
