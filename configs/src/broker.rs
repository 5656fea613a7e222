#[derive(Debug, Clone)]
pub struct BrokerConfigs {
    ///Default: localhost
    pub host: String,
    ///Default: 5672
    pub port: u64,
    ///Default: celeryuser
    pub user: String,
    /// Default: celery
    pub password: String,
    ///Default: celeryvhost
    pub vhost: String,
}

impl Default for BrokerConfigs {
    fn default() -> Self {
        Self {
            host: "localhost".to_owned(),
            port: 5672,
            user: "celeryuser".to_owned(),
            password: "celery".to_owned(),
            vhost: "celeryvhost".to_owned(),
        }
    }
}
