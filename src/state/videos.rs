use crate::models::{FeaturedFilter, Video, VideoQuery};
use crate::services::{ApiClient, ApiResult};

pub const DETAIL_LOAD_ERROR: &str = "Failed to load video details";
pub const DELETE_ERROR: &str = "Failed to delete video";

/// Video listing. Search, featured filter and paging are applied by the
/// server.
#[derive(Debug, Clone)]
pub struct VideoListView {
    pub videos: Vec<Video>,
    pub current_page: u32,
    pub total_pages: u32,
    pub total_videos: u64,
    pub page_size: u32,
    pub search: String,
    pub featured: FeaturedFilter,
    pub project_id: Option<String>,
    pub loading: bool,
    pending_delete: Option<Video>,
}

impl VideoListView {
    pub fn new(page_size: u32) -> Self {
        Self {
            videos: Vec::new(),
            current_page: 1,
            total_pages: 1,
            total_videos: 0,
            page_size,
            search: String::new(),
            featured: FeaturedFilter::All,
            project_id: None,
            loading: false,
            pending_delete: None,
        }
    }

    pub fn query(&self) -> VideoQuery {
        VideoQuery {
            page: self.current_page,
            limit: self.page_size,
            search: Some(self.search.clone()).filter(|s| !s.is_empty()),
            featured: self.featured,
            project_id: self.project_id.clone(),
        }
    }

    /// Fetch with the current filters. A failed fetch empties the list.
    pub async fn load(&mut self, api: &ApiClient) {
        self.loading = true;
        match api.list_videos(&self.query()).await {
            Ok(page) => {
                self.videos = page.items;
                self.total_pages = page.total_pages;
                self.total_videos = page.total;
            }
            Err(e) => {
                tracing::error!("Failed to fetch videos: {}", e);
                self.videos.clear();
                self.total_pages = 1;
                self.total_videos = 0;
            }
        }
        self.loading = false;
    }

    /// Change the search term, going back to the first page.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.current_page = 1;
    }

    pub fn set_featured(&mut self, featured: FeaturedFilter) {
        self.featured = featured;
        self.current_page = 1;
    }

    pub fn next_page(&mut self) -> bool {
        if self.current_page < self.total_pages {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    pub fn previous_page(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    pub fn request_delete(&mut self, id: &str) -> bool {
        self.pending_delete = self.videos.iter().find(|v| v.id == id).cloned();
        self.pending_delete.is_some()
    }

    pub fn pending_delete(&self) -> Option<&Video> {
        self.pending_delete.as_ref()
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Delete the staged video. It leaves the list only once the backend has
    /// confirmed.
    pub async fn confirm_delete(&mut self, api: &ApiClient) -> ApiResult<()> {
        let Some(video) = self.pending_delete.as_ref() else {
            return Ok(());
        };

        if let Err(e) = api.delete_video(&video.id).await {
            tracing::error!("Failed to delete video: {}", e);
            return Err(e);
        }

        let id = video.id.clone();
        self.videos.retain(|v| v.id != id);
        self.total_videos = self.total_videos.saturating_sub(1);
        self.pending_delete = None;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct VideoDetailView {
    pub video: Option<Video>,
    pub loading: bool,
    pub deleting: bool,
    pub error: Option<String>,
}

impl VideoDetailView {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load(&mut self, api: &ApiClient, id: &str) {
        self.loading = true;
        self.error = None;
        match api.get_video(id).await {
            Ok(video) => self.video = Some(video),
            Err(e) => {
                tracing::error!("Failed to fetch video: {}", e);
                self.error = Some(DETAIL_LOAD_ERROR.to_string());
            }
        }
        self.loading = false;
    }

    pub async fn delete(&mut self, api: &ApiClient) -> ApiResult<()> {
        let Some(video) = self.video.as_ref() else {
            return Ok(());
        };

        self.deleting = true;
        let result = api.delete_video(&video.id).await;
        self.deleting = false;

        match result {
            Ok(()) => {
                self.video = None;
                Ok(())
            }
            Err(e) => {
                tracing::error!("Failed to delete video: {}", e);
                self.error = Some(DELETE_ERROR.to_string());
                Err(e)
            }
        }
    }
}
