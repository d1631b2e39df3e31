use clap::Parser;
use std::time::Duration;

/// Contact import service
#[derive(Parser, Debug, Clone)]
#[command(name = "contacts-backend")]
#[command(about = "HTTP service that parses and de-duplicates contact uploads")]
pub struct Config {
    /// Address to bind to
    #[arg(long, default_value = "127.0.0.1", env = "CONTACTS_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8080, env = "CONTACTS_PORT")]
    pub port: u16,

    /// Maximum size of an uploaded file or JSON body, in bytes
    #[arg(long, default_value_t = 10 * 1024 * 1024, env = "CONTACTS_MAX_UPLOAD_BYTES")]
    pub max_upload_bytes: usize,

    /// Buffer size of the channel carrying job status updates
    #[arg(long, default_value_t = 100, env = "CONTACTS_JOB_CHANNEL_CAPACITY")]
    pub job_channel_capacity: usize,

    /// Seconds a finished job waits for its status to be collected
    #[arg(long, default_value_t = 3600, env = "CONTACTS_JOB_TTL_SECS")]
    pub job_ttl_secs: u64,
}

impl Config {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn job_ttl(&self) -> Duration {
        Duration::from_secs(self.job_ttl_secs)
    }
}
