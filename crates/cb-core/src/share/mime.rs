use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MimeType(pub String);

impl MimeType {
    pub fn text_plain() -> Self {
        Self("text/plain".into())
    }
    pub fn octet_stream() -> Self {
        Self("application/octet-stream".into())
    }

    pub fn is_text(&self) -> bool {
        self.0.starts_with("text/")
    }

    pub fn is_image(&self) -> bool {
        self.0.starts_with("image/")
    }

    /// Extension for generated image filenames: the subtype after `image/`,
    /// empty when there is none.
    pub fn image_extension(&self) -> &str {
        self.0.strip_prefix("image/").unwrap_or("")
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MimeType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(MimeType(s.to_string()))
    }
}
