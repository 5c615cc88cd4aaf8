//! HTTP client for the directory REST API.
//!
//! One method per backend operation. Every request carries the stored bearer
//! token. A 401 from anything but the login endpoint ends the local session
//! and asks the injected [`Navigator`] to send the user back to the login
//! screen; the failing call still returns [`ApiError::Unauthorized`].
//!
//! Calls are sent exactly once: no retry, backoff or deduplication.

use crate::config::Config;
use crate::models::{
    ApiResponse, AuthResponse, Category, CategoryInput, DashboardStats, ErrorBody,
    FeaturedCounts, FileUpload, LoginCredentials, Page, Project, ProjectFile, ProjectFileListing,
    ProjectInput, ProjectListing, UploadKind, UploadedFile, User, Video, VideoInput,
    VideoListing, VideoQuery,
};
use crate::services::session::{Session, SessionError};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use url::Url;

const LOGIN_PATH: &str = "/auth/login";

/// Which kind of record a featured-limit conflict concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Project,
    Video,
}

impl ResourceKind {
    fn singular(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Video => "video",
        }
    }

    fn plural(self) -> &'static str {
        match self {
            Self::Project => "projects",
            Self::Video => "videos",
        }
    }
}

/// How the front end should surface an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Network or validation failure, shown inline next to the form.
    Form,
    /// The session is gone; the user has been sent back to login.
    Authorization,
    /// Domain conflict shown as a blocking warning.
    Conflict,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid request url: {0}")]
    Url(#[from] url::ParseError),
    #[error("{}", status_text(.status, .message))]
    Status {
        status: StatusCode,
        message: Option<String>,
    },
    #[error("session expired, please sign in again")]
    Unauthorized { message: Option<String> },
    #[error(
        "Only {limit} featured {} are allowed. Please unfeature an existing {} first.",
        .kind.plural(),
        .kind.singular()
    )]
    FeaturedLimit {
        kind: ResourceKind,
        limit: u32,
        message: String,
    },
    #[error("response did not include a `data` field")]
    MissingData,
    #[error("a video must be associated with a project")]
    MissingProject,
    #[error("failed to read {path}: {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("session storage error: {0}")]
    Session(#[from] SessionError),
}

fn status_text(status: &StatusCode, message: &Option<String>) -> String {
    match message {
        Some(m) => m.clone(),
        None => format!("request failed with status {}", status),
    }
}

impl ApiError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Unauthorized { .. } => ErrorCategory::Authorization,
            Self::FeaturedLimit { .. } => ErrorCategory::Conflict,
            _ => ErrorCategory::Form,
        }
    }

    /// The reason reported by the server, if there was one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } | Self::Unauthorized { message } => message.as_deref(),
            Self::FeaturedLimit { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Unauthorized { .. } => Some(StatusCode::UNAUTHORIZED),
            Self::Http(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }

    /// Turn a server error mentioning "featured" into a featured-limit
    /// conflict. Anything else passes through.
    fn into_featured_conflict(self, kind: ResourceKind, limit: u32) -> Self {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } if message.to_lowercase().contains("featured") => {
                tracing::warn!("Featured {} limit reached: {}", kind.singular(), message);
                Self::FeaturedLimit {
                    kind,
                    limit,
                    message,
                }
            }
            other => other,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Moves the user to the login screen after the session was revoked.
pub trait Navigator: Send + Sync {
    fn redirect_to_login(&self);
}

/// Records that a login redirect is pending until the front end takes it.
#[derive(Debug, Default)]
pub struct LoginRedirect {
    pending: AtomicBool,
}

impl LoginRedirect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::SeqCst)
    }

    /// Consume the pending redirect, returning whether there was one.
    pub fn take(&self) -> bool {
        self.pending.swap(false, Ordering::SeqCst)
    }
}

impl Navigator for LoginRedirect {
    fn redirect_to_login(&self) {
        tracing::warn!("Session revoked by server, redirecting to login");
        self.pending.store(true, Ordering::SeqCst);
    }
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    session: Session,
    navigator: Arc<dyn Navigator>,
    featured_limit: u32,
    published_limit: u32,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("session", &self.session)
            .finish()
    }
}

impl ApiClient {
    /// `base_url` is the full API root, e.g. `http://localhost:3001/api/v1`.
    pub fn new(base_url: &str, session: Session, navigator: Arc<dyn Navigator>) -> ApiResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!("showcase-admin/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: Url::parse(base_url.trim_end_matches('/'))?,
            session,
            navigator,
            featured_limit: 3,
            published_limit: 100,
        })
    }

    pub fn from_config(
        config: &Config,
        session: Session,
        navigator: Arc<dyn Navigator>,
    ) -> ApiResult<Self> {
        Ok(Self::new(&config.api.endpoint(), session, navigator)?
            .with_featured_limit(config.console.featured_limit)
            .with_published_limit(config.console.published_limit))
    }

    #[must_use]
    pub fn with_featured_limit(mut self, limit: u32) -> Self {
        self.featured_limit = limit;
        self
    }

    #[must_use]
    pub fn with_published_limit(mut self, limit: u32) -> Self {
        self.published_limit = limit;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn featured_limit(&self) -> u32 {
        self.featured_limit
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build an endpoint URL from path segments. Each segment is
    /// percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let mut request = self.http.request(method, url);
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }
        request
    }

    /// Send a request and turn every non-success status into an error.
    async fn send(&self, request: RequestBuilder) -> ApiResult<Response> {
        let request = request.build()?;
        let url = request.url().clone();
        tracing::debug!("{} {}", request.method(), url);

        let response = self.http.execute(request).await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.into_message(),
            Err(_) => None,
        };

        if status == StatusCode::UNAUTHORIZED && !url.path().contains(LOGIN_PATH) {
            self.revoke_session();
            return Err(ApiError::Unauthorized { message });
        }

        Err(ApiError::Status { status, message })
    }

    fn revoke_session(&self) {
        if let Err(e) = self.session.clear() {
            tracing::warn!("Failed to clear stored session: {}", e);
        }
        self.navigator.redirect_to_login();
    }

    async fn data<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = self.send(request).await?;
        let envelope: ApiResponse<T> = response.json().await?;
        envelope.data.ok_or(ApiError::MissingData)
    }

    async fn get_data<T: DeserializeOwned>(&self, segments: &[&str]) -> ApiResult<T> {
        let url = self.endpoint(segments)?;
        self.data(self.request(Method::GET, url)).await
    }

    async fn delete(&self, segments: &[&str]) -> ApiResult<()> {
        let url = self.endpoint(segments)?;
        self.send(self.request(Method::DELETE, url)).await?;
        Ok(())
    }

    // Auth

    pub async fn login(&self, credentials: &LoginCredentials) -> ApiResult<AuthResponse> {
        let url = self.endpoint(&["auth", "login"])?;
        self.data(self.request(Method::POST, url).json(credentials))
            .await
    }

    /// End the session on the server, then drop the stored session.
    pub async fn logout(&self) -> ApiResult<()> {
        let url = self.endpoint(&["auth", "logout"])?;
        self.send(self.request(Method::POST, url)).await?;
        self.session.clear()?;
        Ok(())
    }

    pub async fn current_user(&self) -> ApiResult<User> {
        self.get_data(&["auth", "me"]).await
    }

    // Dashboard

    pub async fn dashboard_stats(&self) -> ApiResult<DashboardStats> {
        self.get_data(&["admin", "dashboard"]).await
    }

    pub async fn featured_counts(&self) -> ApiResult<FeaturedCounts> {
        let stats = self.dashboard_stats().await?;
        Ok(FeaturedCounts::from(&stats))
    }

    // Projects

    pub async fn list_projects(&self, page: u32, limit: u32) -> ApiResult<Page<Project>> {
        let mut url = self.endpoint(&["admin", "projects"])?;
        url.query_pairs_mut()
            .append_pair("page", &page.to_string())
            .append_pair("limit", &limit.to_string());
        let listing: ProjectListing = self.data(self.request(Method::GET, url)).await?;
        Ok(listing.into_page())
    }

    /// Published projects, used when associating a video with a project.
    pub async fn published_projects(&self) -> ApiResult<Vec<Project>> {
        let mut url = self.endpoint(&["projects"])?;
        url.query_pairs_mut()
            .append_pair("status", "published")
            .append_pair("limit", &self.published_limit.to_string());
        self.data(self.request(Method::GET, url)).await
    }

    pub async fn get_project(&self, id: &str) -> ApiResult<Project> {
        self.get_data(&["admin", "projects", id]).await
    }

    pub async fn create_project(&self, input: &ProjectInput) -> ApiResult<Project> {
        let url = self.endpoint(&["admin", "projects"])?;
        let project: Project = self
            .data(self.request(Method::POST, url).json(input))
            .await
            .map_err(|e| e.into_featured_conflict(ResourceKind::Project, self.featured_limit))?;
        tracing::info!("Created project '{}' ({})", project.name, project.id);
        Ok(project)
    }

    pub async fn update_project(&self, id: &str, input: &ProjectInput) -> ApiResult<Project> {
        let url = self.endpoint(&["admin", "projects", id])?;
        let project: Project = self
            .data(self.request(Method::PUT, url).json(input))
            .await
            .map_err(|e| e.into_featured_conflict(ResourceKind::Project, self.featured_limit))?;
        tracing::info!("Updated project '{}' ({})", project.name, project.id);
        Ok(project)
    }

    pub async fn delete_project(&self, id: &str) -> ApiResult<()> {
        self.delete(&["admin", "projects", id]).await?;
        tracing::info!("Deleted project {}", id);
        Ok(())
    }

    // Categories

    pub async fn list_categories(&self) -> ApiResult<Vec<Category>> {
        self.get_data(&["admin", "categories"]).await
    }

    pub async fn create_category(&self, input: &CategoryInput) -> ApiResult<Category> {
        let url = self.endpoint(&["admin", "categories"])?;
        self.data(self.request(Method::POST, url).json(input)).await
    }

    pub async fn update_category(&self, id: &str, input: &CategoryInput) -> ApiResult<Category> {
        let url = self.endpoint(&["admin", "categories", id])?;
        self.data(self.request(Method::PUT, url).json(input)).await
    }

    pub async fn delete_category(&self, id: &str) -> ApiResult<()> {
        self.delete(&["admin", "categories", id]).await
    }

    // Videos

    pub async fn list_videos(&self, query: &VideoQuery) -> ApiResult<Page<Video>> {
        let mut url = self.endpoint(&["videos"])?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("page", &query.page.to_string())
                .append_pair("limit", &query.limit.to_string());
            if let Some(search) = query.search.as_deref().filter(|s| !s.is_empty()) {
                pairs.append_pair("search", search);
            }
            if let Some(featured) = query.featured.as_query() {
                pairs.append_pair("featured", &featured.to_string());
            }
            if let Some(project_id) = query.project_id.as_deref().filter(|s| !s.is_empty()) {
                pairs.append_pair("projectId", project_id);
            }
        }

        let response = self.send(self.request(Method::GET, url)).await?;
        let listing: VideoListing = response.json().await?;
        Ok(Page::from_items(listing.data, listing.pagination))
    }

    pub async fn get_video(&self, id: &str) -> ApiResult<Video> {
        self.get_data(&["videos", id]).await
    }

    pub async fn create_video(&self, input: &VideoInput) -> ApiResult<Video> {
        let project_id = input
            .project_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or(ApiError::MissingProject)?;
        let url = self.endpoint(&["videos", "project", project_id])?;
        let video: Video = self
            .data(self.request(Method::POST, url).json(input))
            .await
            .map_err(|e| e.into_featured_conflict(ResourceKind::Video, self.featured_limit))?;
        tracing::info!("Created video '{}' ({})", video.title, video.id);
        Ok(video)
    }

    pub async fn update_video(&self, id: &str, input: &VideoInput) -> ApiResult<Video> {
        let url = self.endpoint(&["videos", id])?;
        let video: Video = self
            .data(self.request(Method::PUT, url).json(input))
            .await
            .map_err(|e| e.into_featured_conflict(ResourceKind::Video, self.featured_limit))?;
        tracing::info!("Updated video '{}' ({})", video.title, video.id);
        Ok(video)
    }

    pub async fn delete_video(&self, id: &str) -> ApiResult<()> {
        self.delete(&["videos", id]).await?;
        tracing::info!("Deleted video {}", id);
        Ok(())
    }

    // Uploads

    pub async fn upload_file(
        &self,
        file: FileUpload,
        kind: UploadKind,
        project_name: Option<&str>,
    ) -> ApiResult<UploadedFile> {
        let mut form = Form::new()
            .part("file", file_part(file)?)
            .text("type", kind.as_str());
        if let Some(name) = project_name {
            form = form.text("projectName", name.to_string());
        }
        self.upload_single(form).await
    }

    /// Upload several project images in one request.
    pub async fn upload_files(
        &self,
        files: Vec<FileUpload>,
        project_name: Option<&str>,
    ) -> ApiResult<Vec<UploadedFile>> {
        let mut form = Form::new();
        for file in files {
            form = form.part("files", file_part(file)?);
        }
        form = form.text("type", UploadKind::ProjectImage.as_str());
        if let Some(name) = project_name {
            form = form.text("projectName", name.to_string());
        }

        let url = self.endpoint(&["upload", "multiple"])?;
        self.data(self.request(Method::POST, url).multipart(form))
            .await
    }

    pub async fn upload_video_thumbnail(
        &self,
        file: FileUpload,
        project_name: &str,
        playback_id: &str,
    ) -> ApiResult<UploadedFile> {
        let form = Form::new()
            .part("file", file_part(file)?)
            .text("type", UploadKind::VideoThumbnail.as_str())
            .text("projectName", project_name.to_string())
            .text("playbackId", playback_id.to_string());
        self.upload_single(form).await
    }

    async fn upload_single(&self, form: Form) -> ApiResult<UploadedFile> {
        let url = self.endpoint(&["upload", "single"])?;
        let uploaded: UploadedFile = self
            .data(self.request(Method::POST, url).multipart(form))
            .await?;
        tracing::info!("Uploaded {} to {}", uploaded.key, uploaded.bucket);
        Ok(uploaded)
    }

    /// Delete an uploaded object. Keys may contain `/`.
    pub async fn delete_uploaded_file(&self, key: &str) -> ApiResult<()> {
        let mut segments = vec!["upload"];
        segments.extend(key.split('/').filter(|s| !s.is_empty()));
        self.delete(&segments).await
    }

    pub async fn create_project_folders(&self, project_name: &str) -> ApiResult<()> {
        let url = self.endpoint(&["upload", "project", "create-folders"])?;
        let body = serde_json::json!({ "projectName": project_name });
        self.send(self.request(Method::POST, url).json(&body))
            .await?;
        Ok(())
    }

    pub async fn list_project_files(
        &self,
        project_name: &str,
        folder: Option<&str>,
    ) -> ApiResult<Vec<ProjectFile>> {
        let mut url = self.endpoint(&["upload", "project", project_name, "files"])?;
        if let Some(folder) = folder.filter(|f| !f.is_empty()) {
            url.query_pairs_mut().append_pair("folder", folder);
        }
        let listing: ProjectFileListing = self.data(self.request(Method::GET, url)).await?;
        Ok(listing.files)
    }

    pub async fn create_video_folder(&self, project_name: &str, playback_id: &str) -> ApiResult<()> {
        let url = self.endpoint(&["upload", "video", "create-folder"])?;
        let body = serde_json::json!({
            "projectName": project_name,
            "playbackId": playback_id,
        });
        self.send(self.request(Method::POST, url).json(&body))
            .await?;
        Ok(())
    }
}

fn file_part(file: FileUpload) -> ApiResult<Part> {
    Ok(Part::bytes(file.bytes)
        .file_name(file.file_name)
        .mime_str(&file.mime_type)?)
}

/// Read a file from disk for upload.
pub async fn read_upload(path: &Path) -> ApiResult<FileUpload> {
    let bytes = tokio::fs::read(path).await.map_err(|source| ApiError::File {
        path: path.display().to_string(),
        source,
    })?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload")
        .to_string();
    Ok(FileUpload::new(file_name, bytes))
}
