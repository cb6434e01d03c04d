use std::fmt;
use std::fmt::Formatter;
use crate::config::enums::configuration_error::ConfigurationError;

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ConfigurationError::UnableToReadFile(e) => write!(f, "Unable to read the configuration file: {e}"),
            ConfigurationError::UnableToWriteFile(e) => write!(f, "Unable to write the configuration file: {e}"),
            ConfigurationError::DecodeError(e) => write!(f, "Unable to parse the configuration file: {e}"),
            ConfigurationError::EncodeError(e) => write!(f, "Unable to serialize the configuration: {e}"),
        }
    }
}

impl std::error::Error for ConfigurationError {}
