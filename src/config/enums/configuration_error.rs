#[derive(Debug)]
pub enum ConfigurationError {
    UnableToReadFile(std::io::Error),
    UnableToWriteFile(std::io::Error),
    DecodeError(toml::de::Error),
    EncodeError(toml::ser::Error),
}
