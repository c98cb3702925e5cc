use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Coarse content category reported to callers.
///
/// Audio is reported as `Video` and PDFs as `Raw`. Stored files and their
/// public ids depend on this grouping, so it must not be split further.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    #[default]
    Image,
    Video,
    Raw,
}

impl ResourceType {
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceType::Image => "image",
            ResourceType::Video => "video",
            ResourceType::Raw => "raw",
        }
    }
}

impl FromStr for ResourceType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "image" => Ok(ResourceType::Image),
            "video" => Ok(ResourceType::Video),
            "raw" => Ok(ResourceType::Raw),
            _ => Err(anyhow::anyhow!("Invalid resource type: {}", s)),
        }
    }
}

impl Display for ResourceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// How an upload of a given class is stored: file extension (with dot),
/// reported format, resource type, and whether the bytes go through the
/// image pipeline first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disposition {
    pub extension: &'static str,
    pub format: &'static str,
    pub resource_type: ResourceType,
    pub transcode: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_type_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ResourceType::Video).unwrap(), "\"video\"");
        let parsed: ResourceType = serde_json::from_str("\"raw\"").unwrap();
        assert_eq!(parsed, ResourceType::Raw);
    }

    #[test]
    fn test_resource_type_from_str() {
        assert_eq!("Image".parse::<ResourceType>().unwrap(), ResourceType::Image);
        assert!("audio".parse::<ResourceType>().is_err());
    }

    #[test]
    fn test_default_is_image() {
        assert_eq!(ResourceType::default(), ResourceType::Image);
    }
}
