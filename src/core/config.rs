use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub(crate) struct Args {
    pub(crate) database_host: String,
    pub(crate) database_port: u16,
    pub(crate) database_name: String,
    pub(crate) database_user: String,
    pub(crate) database_password: String,
    #[serde(default = "default_log_level")]
    pub(crate) log_level: String,
    #[serde(default = "default_port")]
    pub(crate) port: u16,
    pub(crate) secret: String,
    pub(crate) polka_key: String,
    #[serde(default = "default_platform")]
    pub(crate) platform: String,
    #[serde(default = "default_filepath_root")]
    pub(crate) filepath_root: String,
    #[serde(default = "default_auth_rate_limit")]
    pub(crate) auth_rate_limit: u64,
}

impl Args {
    pub(crate) fn database_url(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}/{}",
            self.database_user,
            self.database_password,
            self.database_host,
            self.database_port,
            self.database_name
        )
    }
}

fn default_log_level() -> String {
    "info".into()
}

fn default_port() -> u16 {
    8080
}

fn default_platform() -> String {
    "prod".into()
}

fn default_filepath_root() -> String {
    ".".into()
}

fn default_auth_rate_limit() -> u64 {
    10
}
