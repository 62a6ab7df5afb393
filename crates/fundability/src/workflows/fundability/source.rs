use super::profile::RawAttributes;
use serde_json::Value;
use std::io::Read;
use std::path::Path;

const USER_DATA_KEY: &str = "user_data";

/// Capability supplying raw profile attributes, decoupling scoring from document formats.
pub trait RawProfileSource {
    fn raw_attributes(&self) -> Result<RawAttributes, ProfileSourceError>;
}

/// Failures reading a raw profile from its source.
#[derive(Debug, thiserror::Error)]
pub enum ProfileSourceError {
    #[error("failed to read profile document: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid profile JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("profile {field} must be a JSON object")]
    NotAnObject { field: &'static str },
}

impl RawProfileSource for RawAttributes {
    fn raw_attributes(&self) -> Result<RawAttributes, ProfileSourceError> {
        Ok(self.clone())
    }
}

/// JSON document holding either the attribute object itself or a `user_data` envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonProfileSource {
    document: Value,
}

impl JsonProfileSource {
    pub fn from_value(document: Value) -> Self {
        Self { document }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ProfileSourceError> {
        Ok(Self::from_value(serde_json::from_reader(reader)?))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ProfileSourceError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }
}

impl RawProfileSource for JsonProfileSource {
    fn raw_attributes(&self) -> Result<RawAttributes, ProfileSourceError> {
        let Value::Object(fields) = &self.document else {
            return Err(ProfileSourceError::NotAnObject { field: "document" });
        };

        match fields.get(USER_DATA_KEY) {
            Some(Value::Object(user_data)) => Ok(user_data.clone()),
            Some(_) => Err(ProfileSourceError::NotAnObject {
                field: USER_DATA_KEY,
            }),
            None => Ok(fields.clone()),
        }
    }
}
