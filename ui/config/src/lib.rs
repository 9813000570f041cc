use std::collections::HashMap;

use config::{Environment, File, FileFormat};
use once_cell::sync::Lazy;
use serde::Deserialize;

use domain_model::Sequencing;

#[derive(Deserialize)]
pub struct Config {
    pub logging: Logging,
    pub application: Application,
    pub backend: Backend,
    pub chart: Chart,
    pub ui: Ui,
}

#[derive(Deserialize)]
pub struct Application {
    pub name: String,
    pub port: u16,
}

#[derive(Deserialize)]
pub struct Backend {
    pub url: String,
}

#[derive(Deserialize)]
pub struct Chart {
    pub title: String,
    pub width: u64,
    pub height: u64,
}

#[derive(Deserialize)]
pub struct Ui {
    #[serde(default)]
    pub sequencing: Sequencing,
}

#[derive(Deserialize)]
pub struct Logging {
    level: String,
    crates: HashMap<String, String>,
}

impl Logging {
    pub fn levels(&self) -> String {
        let mut crate_levels = self
            .crates
            .iter()
            .map(|(lib, loglevel)| format!("{lib}={loglevel}"))
            .collect::<Vec<_>>();
        crate_levels.sort();
        format!("{},{}", self.level, crate_levels.join(","))
    }
}

pub static CONFIG: Lazy<Config> = Lazy::new(Config::load);

impl Config {
    fn load() -> Self {
        config::Config::builder()
            .add_source(File::from_str(include_str!("../config.yml"), FileFormat::Yaml))
            .add_source(Environment::with_prefix("APP").try_parsing(true).separator("_"))
            .add_source(Environment::with_prefix("UI").try_parsing(true).separator("_"))
            .build()
            .expect("Error during config creation")
            .try_deserialize()
            .expect("Error during config deserialization")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config() {
        let config = Config::load();
        assert_eq!(config.application.name, "ui");
        assert_eq!(config.backend.url, "http://localhost:5000");
        assert_eq!(config.ui.sequencing, Sequencing::LastSettled);
        assert!(config.chart.width > 0 && config.chart.height > 0);
    }

    #[test]
    fn test_levels() {
        let logging = Logging {
            level: "INFO".to_string(),
            crates: HashMap::from([
                ("ui_core".to_string(), "DEBUG".to_string()),
                ("hyper".to_string(), "WARN".to_string()),
            ]),
        };
        assert_eq!(logging.levels(), "INFO,hyper=WARN,ui_core=DEBUG");
    }
}
