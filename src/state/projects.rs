use crate::models::{Project, ProjectStatus};
use crate::services::{ApiClient, ApiResult};
use std::str::FromStr;

pub const DETAIL_LOAD_ERROR: &str = "Failed to load project details";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ProjectStatus),
}

impl StatusFilter {
    pub fn matches(self, status: ProjectStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

/// Paged project listing with local search/status filtering and a
/// confirm-before-delete flow.
#[derive(Debug, Clone)]
pub struct ProjectListView {
    pub projects: Vec<Project>,
    pub current_page: u32,
    pub total_pages: u32,
    pub page_size: u32,
    pub search: String,
    pub status_filter: StatusFilter,
    pub loading: bool,
    pending_delete: Option<Project>,
}

impl ProjectListView {
    pub fn new(page_size: u32) -> Self {
        Self {
            projects: Vec::new(),
            current_page: 1,
            total_pages: 1,
            page_size,
            search: String::new(),
            status_filter: StatusFilter::All,
            loading: false,
            pending_delete: None,
        }
    }

    /// Fetch the current page. A failed fetch empties the list.
    pub async fn load(&mut self, api: &ApiClient) {
        self.loading = true;
        match api.list_projects(self.current_page, self.page_size).await {
            Ok(page) => {
                tracing::debug!("Loaded {} project(s)", page.items.len());
                self.projects = page.items;
                self.total_pages = page.total_pages;
            }
            Err(e) => {
                tracing::error!("Failed to fetch projects: {}", e);
                self.projects.clear();
                self.total_pages = 1;
            }
        }
        self.loading = false;
    }

    /// Projects on this page matching the search term and status filter.
    pub fn visible(&self) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| p.matches_search(&self.search) && self.status_filter.matches(p.status))
            .collect()
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

    /// Stage a project for deletion. Returns false if it is not listed.
    pub fn request_delete(&mut self, id: &str) -> bool {
        self.pending_delete = self.projects.iter().find(|p| p.id == id).cloned();
        self.pending_delete.is_some()
    }

    pub fn pending_delete(&self) -> Option<&Project> {
        self.pending_delete.as_ref()
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Delete the staged project. It leaves the list only once the backend
    /// has confirmed; on failure the list and the staged project are kept.
    pub async fn confirm_delete(&mut self, api: &ApiClient) -> ApiResult<()> {
        let Some(project) = self.pending_delete.as_ref() else {
            return Ok(());
        };

        if let Err(e) = api.delete_project(&project.id).await {
            tracing::error!("Failed to delete project: {}", e);
            return Err(e);
        }

        let id = project.id.clone();
        self.projects.retain(|p| p.id != id);
        self.pending_delete = None;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProjectDetailView {
    pub project: Option<Project>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ProjectDetailView {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load(&mut self, api: &ApiClient, id: &str) {
        self.loading = true;
        self.error = None;
        match api.get_project(id).await {
            Ok(project) => self.project = Some(project),
            Err(e) => {
                tracing::error!("Failed to fetch project: {}", e);
                self.error = Some(DETAIL_LOAD_ERROR.to_string());
            }
        }
        self.loading = false;
    }

    /// Delete the shown project. Cleared from the view only after the backend
    /// confirms.
    pub async fn delete(&mut self, api: &ApiClient) -> ApiResult<()> {
        let Some(project) = self.project.as_ref() else {
            return Ok(());
        };
        api.delete_project(&project.id).await?;
        self.project = None;
        Ok(())
    }
}
