use config::{Config, ConfigError, Environment};
use lazy_static::lazy_static;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    pub service_name: String,
    pub listen_port: String,
    //uploads
    pub upload_dir: String,
    pub upload_url_prefix: String,
    pub max_file_bytes: usize,
    pub max_request_bytes: usize,
    //document database
    pub firestore_base_url: String,
    pub firestore_collection: String,
    pub firestore_project_id: Option<String>,
    pub firestore_api_key: Option<String>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let conf = Config::builder()
            .set_default("service_name", "portfolio")?
            .set_default("listen_port", "3000")?
            .set_default("upload_dir", "public/uploads")?
            .set_default("upload_url_prefix", "/uploads")?
            .set_default("max_file_bytes", 10 * 1024 * 1024)?
            .set_default("max_request_bytes", 50 * 1024 * 1024)?
            .set_default("firestore_base_url", "https://firestore.googleapis.com/v1")?
            .set_default("firestore_collection", "portfolio")?
            .add_source(Environment::default())
            .build()?;
        let mut s: Settings = conf.try_deserialize()?;
        s.upload_url_prefix = s.upload_url_prefix.trim_end_matches('/').to_string();
        if s.firestore_project_id.as_deref().is_some_and(str::is_empty) {
            s.firestore_project_id = None;
        }
        Ok(s)
    }
}

lazy_static! {
    pub static ref settings: Settings = Settings::new().expect("improperly configured");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_without_env() {
        let s = Settings::new().expect("settings");
        assert!(!s.service_name.is_empty());
        assert!(!s.upload_url_prefix.ends_with('/'));
        assert!(s.max_file_bytes > 0);
        assert!(s.max_request_bytes > 0);
    }
}
