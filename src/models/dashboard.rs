use super::{CategoryCount, Project};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCount {
    pub month: String,
    #[serde(default)]
    pub count: u64,
}

/// Aggregates computed server-side for the dashboard. Every field tolerates
/// being absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub total_projects: u64,
    pub active_projects: u64,
    pub total_categories: u64,
    pub total_videos: u64,
    pub featured_project_count: Option<u64>,
    pub featured_video_count: Option<u64>,
    pub recent_projects: Vec<Project>,
    pub top_categories: Vec<CategoryCount>,
    pub category_counts: Option<Vec<CategoryCount>>,
    pub monthly_project_counts: Vec<MonthlyCount>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FeaturedCounts {
    pub projects: u64,
    pub videos: u64,
}

impl From<&DashboardStats> for FeaturedCounts {
    fn from(stats: &DashboardStats) -> Self {
        Self {
            projects: stats.featured_project_count.unwrap_or(0),
            videos: stats.featured_video_count.unwrap_or(0),
        }
    }
}
