use serde::{Deserialize, Serialize};
use tracing::warn;

pub const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:3000";
pub const HTTP_ADDR_ENV: &str = "BOOKSHELF_HTTP_ADDR";
pub const SEED_BOOKS_ENV: &str = "BOOKSHELF_SEED_BOOKS";

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}

// Configuration abstracts config options for the catalog process
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub http_addr: String,
    pub seed_books: bool,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            http_addr: DEFAULT_HTTP_ADDR.to_string(),
            seed_books: true,
        }
    }

    pub fn from_env(branch_id: &str) -> Self {
        Self::from_lookup(branch_id, |key| std::env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(branch_id: &str, lookup: F) -> Self {
        let mut config = Self::new(branch_id);
        if let Some(addr) = lookup(HTTP_ADDR_ENV) {
            if addr.parse::<std::net::SocketAddr>().is_ok() {
                config.http_addr = addr;
            } else {
                warn!(value = %addr, "ignoring invalid {}", HTTP_ADDR_ENV);
            }
        }
        if let Some(seed) = lookup(SEED_BOOKS_ENV) {
            match seed.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => config.seed_books = true,
                "false" | "0" => config.seed_books = false,
                _ => warn!(value = %seed, "ignoring invalid {}", SEED_BOOKS_ENV),
            }
        }
        config
    }
}
