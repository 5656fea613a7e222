use std::{env, fmt};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Local,
    Dev,
    Staging,
    Prod,
}

impl From<&str> for Environment {
    fn from(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "production" | "prod" => Environment::Prod,
            "staging" | "stg" => Environment::Staging,
            "develop" | "dev" => Environment::Dev,
            _ => Environment::Local,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let printable = match self {
            Environment::Local => "local",
            Environment::Dev => "development",
            Environment::Staging => "staging",
            Environment::Prod => "prod",
        };
        write!(f, "{}", printable)
    }
}

impl Environment {
    pub fn from_rust_env() -> Environment {
        env::var("RUST_ENV").unwrap_or_default().as_str().into()
    }

    pub fn is_local(&self) -> bool {
        self == &Environment::Local
    }

    pub fn is_dev(&self) -> bool {
        self == &Environment::Dev
    }

    pub fn is_stg(&self) -> bool {
        self == &Environment::Staging
    }

    pub fn is_prod(&self) -> bool {
        self == &Environment::Prod
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_rust_env_values() {
        assert_eq!(Environment::from("PROD"), Environment::Prod);
        assert_eq!(Environment::from("production"), Environment::Prod);
        assert_eq!(Environment::from("stg"), Environment::Staging);
        assert_eq!(Environment::from("develop"), Environment::Dev);
        assert_eq!(Environment::from("DEV"), Environment::Dev);
        assert_eq!(Environment::from("anything-else"), Environment::Local);
        assert_eq!(Environment::from(""), Environment::Local);
    }

    #[test]
    fn should_expose_env_predicates() {
        assert!(Environment::Local.is_local());
        assert!(Environment::Dev.is_dev());
        assert!(Environment::Staging.is_stg());
        assert!(Environment::Prod.is_prod());
        assert!(!Environment::Prod.is_local());
    }
}
