use std::fs::File;
use std::io::{Read, Write};
use std::sync::Arc;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::crawler_config::CrawlerConfig;
use crate::config::structs::store_config::StoreConfig;
use crate::config::structs::tracker_entry_config::TrackerEntryConfig;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            crawler_config: CrawlerConfig {
                worker_count: 60,
                pass_interval: 1,
                query_timeout: 1,
                peers_wanted: 200,
                peer_prefix: String::from("-SW0061-"),
                new_peer_ratio: 0.15,
                score_floor: 0.005,
                processed_ttl: 3600,
                default_max_peer_count: 50,
            },
            store_config: StoreConfig {
                address: String::from("redis://127.0.0.1:6379"),
                prefix: String::from(""),
            },
            tracker_catalog: vec!(
                TrackerEntryConfig {
                    url: String::from("udp://tracker.opentrackr.org:1337"),
                    max_peer_count: 200,
                },
                TrackerEntryConfig {
                    url: String::from("udp://open.demonii.com:1337"),
                    max_peer_count: 200,
                },
                TrackerEntryConfig {
                    url: String::from("udp://tracker.openbittorrent.com:6969"),
                    max_peer_count: 200,
                },
                TrackerEntryConfig {
                    url: String::from("udp://exodus.desync.com:6969"),
                    max_peer_count: 200,
                },
                TrackerEntryConfig {
                    url: String::from("udp://open.stealth.si:80"),
                    max_peer_count: 200,
                },
                TrackerEntryConfig {
                    url: String::from("udp://tracker.torrent.eu.org:451"),
                    max_peer_count: 200,
                },
            ),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        let mut file = File::open(path).map_err(ConfigurationError::UnableToReadFile)?;
        let mut data = String::new();
        file.read_to_string(&mut data).map_err(ConfigurationError::UnableToReadFile)?;
        Configuration::load(data.as_bytes()).map_err(ConfigurationError::DecodeError)
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path).map_err(ConfigurationError::UnableToWriteFile)?;
        file.write_all(data.as_bytes()).map_err(ConfigurationError::UnableToWriteFile)
    }

    /// Loads `config.toml` from the working directory. With `create` set,
    /// a missing or broken file is replaced by the defaults and those are
    /// returned; without it the error propagates to the caller.
    pub fn load_from_file(create: bool) -> Result<Configuration, ConfigurationError> {
        match Configuration::load_file("config.toml") {
            Ok(config) => Ok(config),
            Err(error) => {
                if !create {
                    eprintln!("No configuration file found.");
                    eprintln!("{error}");
                    eprintln!("Create it using the --create-config argument.");
                    return Err(error);
                }
                let config = Configuration::init();
                Configuration::save_from_config(Arc::new(config.clone()), "config.toml");
                Ok(config)
            }
        }
    }

    pub fn save_from_config(config: Arc<Configuration>, path: &str) {
        match toml::to_string_pretty(&*config).map_err(ConfigurationError::EncodeError) {
            Ok(data) => {
                if let Err(error) = Configuration::save_file(path, data) {
                    eprintln!("Could not save configuration to {path}: {error}");
                }
            }
            Err(error) => {
                eprintln!("Could not serialize configuration: {error}");
            }
        }
    }
}
