use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StoreConfig {
    /// Redis connection URL.
    pub address: String,
    /// Prefix prepended to every key the crawler touches.
    pub prefix: String,
}
