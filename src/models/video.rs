use super::null_as_default;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Reference into the streaming provider.
    #[serde(default, deserialize_with = "null_as_default")]
    pub playback_id: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playback_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeaturedFilter {
    #[default]
    All,
    Featured,
    NotFeatured,
}

impl FeaturedFilter {
    /// Value of the `featured` query parameter, if any.
    pub fn as_query(self) -> Option<bool> {
        match self {
            Self::All => None,
            Self::Featured => Some(true),
            Self::NotFeatured => Some(false),
        }
    }
}

impl FromStr for FeaturedFilter {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "featured" => Ok(Self::Featured),
            "not-featured" => Ok(Self::NotFeatured),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for FeaturedFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Featured => write!(f, "featured"),
            Self::NotFeatured => write!(f, "not-featured"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoQuery {
    pub page: u32,
    pub limit: u32,
    pub search: Option<String>,
    pub featured: FeaturedFilter,
    pub project_id: Option<String>,
}

impl Default for VideoQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            search: None,
            featured: FeaturedFilter::All,
            project_id: None,
        }
    }
}

/// `/videos` answers with the list at the top level next to `pagination`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct VideoListing {
    #[serde(default)]
    pub data: Vec<Video>,
    #[serde(default)]
    pub pagination: Option<super::Pagination>,
}
