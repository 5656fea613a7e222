use crate::{
    env_keys::{
        APP_NAME_ENV_KEY, DEV_ENV_FILE_NAME, ENABLE_EXTERNAL_CRATES_LOGGING_ENV_KEY,
        LOCAL_ENV_FILE_NAME, LOG_LEVEL_ENV_KEY, PROD_ENV_FILE_NAME, STAGING_ENV_FILE_NAME,
        TASK_IMPORTS_ENV_KEY,
    },
    errors::ConfigsError,
};
use configs::{AppConfigs, Configs, DynamicConfigs, Environment};
use dotenvy::from_filename;
use std::env;
use tracing::debug;

#[derive(Clone)]
pub struct ConfigsBuilder {
    imports_env_key: String,
}

impl Default for ConfigsBuilder {
    fn default() -> Self {
        Self {
            imports_env_key: TASK_IMPORTS_ENV_KEY.to_owned(),
        }
    }
}

impl ConfigsBuilder {
    pub fn new() -> ConfigsBuilder {
        ConfigsBuilder::default()
    }

    pub fn imports_env_key(mut self, key: impl Into<String>) -> Self {
        self.imports_env_key = key.into();
        self
    }

    pub fn build<T>(self) -> Result<Configs<T>, ConfigsError>
    where
        T: DynamicConfigs,
    {
        let env = Environment::from_rust_env();
        match env {
            Environment::Prod => {
                from_filename(PROD_ENV_FILE_NAME).ok();
            }
            Environment::Staging => {
                from_filename(STAGING_ENV_FILE_NAME).ok();
            }
            Environment::Dev => {
                from_filename(DEV_ENV_FILE_NAME).ok();
            }
            _ => {
                from_filename(LOCAL_ENV_FILE_NAME).ok();
            }
        }

        let mut cfg = Configs::<T>::default();
        self.fill_app(&mut cfg, env);

        match logging::setup(&cfg.app) {
            Err(_) => Err(ConfigsError::InternalError {}),
            _ => Ok(()),
        }?;

        self.fill_worker(&mut cfg, |key| env::var(key).ok());

        cfg.dynamic.load();

        Ok(cfg)
    }
}

impl ConfigsBuilder {
    fn fill_app<T>(&self, cfg: &mut Configs<T>, env: Environment)
    where
        T: DynamicConfigs,
    {
        let name = env::var(APP_NAME_ENV_KEY).unwrap_or("worker".to_owned());
        let log_level = env::var(LOG_LEVEL_ENV_KEY).unwrap_or("debug".to_owned());
        let enable_external_crates_logging = env::var(ENABLE_EXTERNAL_CRATES_LOGGING_ENV_KEY)
            .unwrap_or("false".to_owned())
            .parse()
            .unwrap_or_default();

        cfg.app = AppConfigs {
            name,
            env,
            log_level,
            enable_external_crates_logging,
        };
    }

    // Absence or an empty value keeps the default single import target.
    fn fill_worker<T, F>(&self, cfg: &mut Configs<T>, lookup: F)
    where
        T: DynamicConfigs,
        F: Fn(&str) -> Option<String>,
    {
        match lookup(&self.imports_env_key) {
            Some(target) if !target.is_empty() => {
                cfg.worker.task_imports = vec![target];
            }
            _ => {
                debug!(
                    key = self.imports_env_key.as_str(),
                    "import targets not set, keeping default"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use configs::{Empty, ResultBackendKind};

    #[test]
    fn should_keep_default_imports_when_env_is_absent() {
        let mut cfg = Configs::<Empty>::default();

        ConfigsBuilder::new().fill_worker(&mut cfg, |_| None);

        assert_eq!(cfg.worker.task_imports, vec!["tasks".to_owned()]);
    }

    #[test]
    fn should_wrap_env_value_in_single_import_target() {
        let mut cfg = Configs::<Empty>::default();

        ConfigsBuilder::new().fill_worker(&mut cfg, |key| {
            assert_eq!(key, TASK_IMPORTS_ENV_KEY);
            Some("myapp.tasks".to_owned())
        });

        assert_eq!(cfg.worker.task_imports, vec!["myapp.tasks".to_owned()]);
    }

    #[test]
    fn should_treat_empty_env_value_as_unset() {
        let mut cfg = Configs::<Empty>::default();

        ConfigsBuilder::new().fill_worker(&mut cfg, |_| Some(String::new()));

        assert_eq!(cfg.worker.task_imports, vec!["tasks".to_owned()]);
    }

    #[test]
    fn should_honor_custom_imports_env_key() {
        let mut cfg = Configs::<Empty>::default();

        ConfigsBuilder::new()
            .imports_env_key("WORKER_TASK_IMPORTS")
            .fill_worker(&mut cfg, |key| match key {
                "WORKER_TASK_IMPORTS" => Some("billing.tasks".to_owned()),
                _ => None,
            });

        assert_eq!(cfg.worker.task_imports, vec!["billing.tasks".to_owned()]);
    }

    #[test]
    fn should_leave_broker_literals_and_result_backend_untouched() {
        let mut cfg = Configs::<Empty>::default();

        ConfigsBuilder::new().fill_worker(&mut cfg, |_| Some("myapp.tasks".to_owned()));

        assert_eq!(cfg.broker.host, "localhost");
        assert_eq!(cfg.broker.port, 5672);
        assert_eq!(cfg.broker.user, "celeryuser");
        assert_eq!(cfg.broker.password, "celery");
        assert_eq!(cfg.broker.vhost, "celeryvhost");
        assert_eq!(cfg.worker.result_backend, ResultBackendKind::Amqp);
    }
}
