use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub database_path: String,
    pub host: String,
    pub port: u16,
}

impl Settings {
    /// Defaults, then an optional `trivia.toml`, then `TRIVIA_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_builder(
            Config::builder()
                .add_source(File::with_name("trivia").required(false))
                .add_source(Environment::with_prefix("TRIVIA").try_parsing(true)),
        )
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        builder
            .set_default("database_path", "trivia.db")?
            .set_default("host", "0.0.0.0")?
            .set_default("port", 8080)?
            .build()?
            .try_deserialize()
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn defaults_apply_without_sources() {
        let settings = Settings::from_builder(Config::builder()).unwrap();
        assert_eq!(settings.database_path, "trivia.db");
        assert_eq!(settings.listen_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn file_values_override_defaults() {
        let builder = Config::builder().add_source(File::from_str(
            "port = 5000\ndatabase_path = \"/tmp/trivia_test.db\"",
            FileFormat::Toml,
        ));
        let settings = Settings::from_builder(builder).unwrap();
        assert_eq!(settings.port, 5000);
        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.database_path, "/tmp/trivia_test.db");
    }
}
