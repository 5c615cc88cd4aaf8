use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Discriminator sent in the `type` field of upload forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UploadKind {
    Logo,
    ProjectHeroImage,
    VideoThumbnail,
    ProjectImage,
    ProjectVideo,
}

impl UploadKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Logo => "logo",
            Self::ProjectHeroImage => "project-hero-image",
            Self::VideoThumbnail => "video-thumbnail",
            Self::ProjectImage => "project-image",
            Self::ProjectVideo => "project-video",
        }
    }
}

impl FromStr for UploadKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "logo" => Ok(Self::Logo),
            "project-hero-image" => Ok(Self::ProjectHeroImage),
            "video-thumbnail" => Ok(Self::VideoThumbnail),
            "project-image" => Ok(Self::ProjectImage),
            "project-video" => Ok(Self::ProjectVideo),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for UploadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub url: String,
    pub key: String,
    pub bucket: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFile {
    pub key: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub last_modified: Option<String>,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ProjectFileListing {
    #[serde(default)]
    pub files: Vec<ProjectFile>,
}

/// A file read into memory, ready to be sent as a multipart part.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime_type = mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Self {
            file_name,
            mime_type,
            bytes,
        }
    }
}
