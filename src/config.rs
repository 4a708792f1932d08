use std::{env, path::PathBuf, time::Duration};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub upload_dir: PathBuf,
    pub shopping_items_delay: Duration,
    pub max_upload_bytes: usize,
    pub seed_count: usize,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DSN")
            .or_else(|_| env::var("DATABASE_URL"))
            .map_err(|_| anyhow::anyhow!("missing DSN in ENV"))?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(5000);
        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./static"));
        let upload_dir = env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| static_dir.join("uploads"));
        let shopping_items_delay = env::var("SHOPPING_ITEMS_DELAY_MS")
            .ok()
            .and_then(|ms| ms.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(Duration::from_secs(2));
        let max_upload_bytes = env::var("MAX_UPLOAD_BYTES")
            .ok()
            .and_then(|b| b.parse::<usize>().ok())
            .unwrap_or(10 * 1024 * 1024);
        let seed_count = env::var("SEED_COUNT")
            .ok()
            .and_then(|c| c.parse::<usize>().ok())
            .unwrap_or(20);
        Ok(Self {
            database_url,
            host,
            port,
            static_dir,
            upload_dir,
            shopping_items_delay,
            max_upload_bytes,
            seed_count,
        })
    }
}
