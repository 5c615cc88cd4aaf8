use crate::models::{CategoryCount, DashboardStats, FeaturedCounts, Project};
use crate::services::ApiClient;

pub const LOAD_ERROR: &str = "Failed to load dashboard data. Please try again.";
const RECENT_PROJECTS: usize = 5;

#[derive(Debug, Clone, Default)]
pub struct DashboardView {
    pub stats: Option<DashboardStats>,
    pub loading: bool,
    pub refreshing: bool,
    pub error: Option<String>,
}

impl DashboardView {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load(&mut self, api: &ApiClient) {
        self.loading = true;
        self.fetch(api).await;
    }

    /// Reload while keeping the current figures on screen.
    pub async fn refresh(&mut self, api: &ApiClient) {
        self.refreshing = true;
        self.fetch(api).await;
    }

    async fn fetch(&mut self, api: &ApiClient) {
        self.error = None;
        match api.dashboard_stats().await {
            Ok(stats) => {
                tracing::debug!("Dashboard stats received: {:?}", stats);
                self.stats = Some(stats);
            }
            Err(e) => {
                tracing::error!("Failed to fetch dashboard stats: {}", e);
                self.error = Some(LOAD_ERROR.to_string());
            }
        }
        self.loading = false;
        self.refreshing = false;
    }

    /// `(label, count)` pairs for published vs unpublished projects.
    pub fn status_breakdown(&self) -> Vec<(&'static str, u64)> {
        let Some(stats) = &self.stats else {
            return Vec::new();
        };
        vec![
            ("Published", stats.active_projects),
            (
                "Unpublished",
                stats.total_projects.saturating_sub(stats.active_projects),
            ),
        ]
    }

    /// Projects per category. Prefers the full breakdown and falls back to the
    /// top categories; entries without a count are skipped.
    pub fn category_chart(&self) -> Vec<(String, u64)> {
        let Some(stats) = &self.stats else {
            return Vec::new();
        };
        let source: &[CategoryCount] = match &stats.category_counts {
            Some(counts) => counts,
            None => &stats.top_categories,
        };
        source
            .iter()
            .filter_map(|c| c.project_count.map(|n| (c.name.clone(), n)))
            .collect()
    }

    pub fn monthly_chart(&self) -> Vec<(String, u64)> {
        self.stats
            .as_ref()
            .map(|s| {
                s.monthly_project_counts
                    .iter()
                    .map(|m| (m.month.clone(), m.count))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn recent_projects(&self) -> &[Project] {
        match &self.stats {
            Some(stats) => {
                let n = stats.recent_projects.len().min(RECENT_PROJECTS);
                &stats.recent_projects[..n]
            }
            None => &[],
        }
    }

    pub fn featured_counts(&self) -> FeaturedCounts {
        self.stats.as_ref().map(FeaturedCounts::from).unwrap_or_default()
    }

    /// Featured usage as "n / limit" for projects and videos.
    pub fn featured_usage(&self, limit: u32) -> (String, String) {
        let counts = self.featured_counts();
        (
            format!("{} / {}", counts.projects, limit),
            format!("{} / {}", counts.videos, limit),
        )
    }
}
