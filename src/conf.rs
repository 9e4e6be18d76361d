use config::{Config, ConfigError, Environment};
use lazy_static::lazy_static;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Settings {
    pub service_name: String,
    pub items_per_page: usize,
    pub recent_jobs_limit: usize,
    pub notification_preview_limit: usize,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let conf = Config::builder()
            .set_default("service_name", "talentdesk")?
            .set_default("items_per_page", 10)?
            .set_default("recent_jobs_limit", 5)?
            .set_default("notification_preview_limit", 5)?
            .add_source(Environment::default())
            .build()?;
        let mut s: Settings = conf.try_deserialize()?;
        if s.items_per_page == 0 {
            s.items_per_page = 10;
        }
        Ok(s)
    }
}

lazy_static! {
    pub static ref settings: Settings = Settings::new().expect("improperly configured");
}
