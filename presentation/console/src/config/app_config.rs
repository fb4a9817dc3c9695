use super::service_config::ServiceConfig;

pub struct AppConfig {
    pub service: ServiceConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            service: ServiceConfig::from_env()?,
        })
    }
}
