mod app;
mod broker;
mod configs;
mod environment;
mod worker;

pub use app::AppConfigs;
pub use broker::BrokerConfigs;
pub use configs::{Configs, DynamicConfigs, Empty};
pub use environment::Environment;
pub use worker::{ResultBackendKind, WorkerConfigs, DEFAULT_TASK_IMPORT};
