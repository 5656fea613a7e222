pub const LOCAL_ENV_FILE_NAME: &str = "./.env.local";
pub const DEV_ENV_FILE_NAME: &str = "./.env.develop";
pub const STAGING_ENV_FILE_NAME: &str = "./.env.staging";
pub const PROD_ENV_FILE_NAME: &str = "./.env.prod";

pub const APP_NAME_ENV_KEY: &str = "APP_NAME";
pub const LOG_LEVEL_ENV_KEY: &str = "LOG_LEVEL";
pub const ENABLE_EXTERNAL_CRATES_LOGGING_ENV_KEY: &str = "ENABLE_EXTERNAL_CRATES_LOGGING";

///Default lookup key for the worker import targets.
pub const TASK_IMPORTS_ENV_KEY: &str = "CELERY_IMPORTS";
