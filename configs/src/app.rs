use crate::Environment;

#[derive(Debug, Clone)]
pub struct AppConfigs {
    ///Default: worker
    pub name: String,
    ///Default: Environment::Local
    pub env: Environment,
    ///Default: debug
    pub log_level: String,
    ///Default: false
    pub enable_external_crates_logging: bool,
}

impl Default for AppConfigs {
    fn default() -> Self {
        Self {
            name: "worker".to_owned(),
            env: Environment::Local,
            log_level: "debug".to_owned(),
            enable_external_crates_logging: false,
        }
    }
}
