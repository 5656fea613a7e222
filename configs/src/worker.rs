use std::fmt::Display;

///Fallback import target when the deployment does not set one.
pub const DEFAULT_TASK_IMPORT: &str = "tasks";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResultBackendKind {
    #[default]
    Amqp,
    Disabled,
}

impl From<&str> for ResultBackendKind {
    fn from(value: &str) -> Self {
        match value.to_uppercase().as_str() {
            "DISABLED" => ResultBackendKind::Disabled,
            _ => ResultBackendKind::Amqp,
        }
    }
}

impl From<&String> for ResultBackendKind {
    fn from(value: &String) -> Self {
        match value.to_uppercase().as_str() {
            "DISABLED" => ResultBackendKind::Disabled,
            _ => ResultBackendKind::Amqp,
        }
    }
}

impl Display for ResultBackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResultBackendKind::Amqp => write!(f, "amqp"),
            ResultBackendKind::Disabled => write!(f, "disabled"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct WorkerConfigs {
    ///Default: ResultBackendKind::Amqp
    pub result_backend: ResultBackendKind,
    ///Default: [DEFAULT_TASK_IMPORT]
    pub task_imports: Vec<String>,
}

impl Default for WorkerConfigs {
    fn default() -> Self {
        Self {
            result_backend: ResultBackendKind::default(),
            task_imports: vec![DEFAULT_TASK_IMPORT.to_owned()],
        }
    }
}
