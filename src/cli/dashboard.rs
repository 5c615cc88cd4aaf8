use super::Console;
use crate::state::{format_date, DashboardView};
use anyhow::Result;

pub async fn run(console: &mut Console) -> Result<()> {
    console.require_login().await?;

    let mut view = DashboardView::new();
    view.load(console.api()).await;
    if let Some(error) = view.error.as_deref() {
        anyhow::bail!("{}", error);
    }
    let Some(stats) = view.stats.as_ref() else {
        println!("No dashboard data available");
        return Ok(());
    };

    let limit = console.config.console.featured_limit;
    let (featured_projects, featured_videos) = view.featured_usage(limit);

    println!("{:<22} {}", "Total projects", stats.total_projects);
    println!("{:<22} {}", "Categories", stats.total_categories);
    println!("{:<22} {}", "Videos", stats.total_videos);
    println!("{:<22} {}", "Featured projects", featured_projects);
    println!("{:<22} {}", "Featured videos", featured_videos);

    println!();
    println!("STATUS");
    for (label, count) in view.status_breakdown() {
        println!("  {:<20} {}", label, count);
    }

    let categories = view.category_chart();
    if !categories.is_empty() {
        println!();
        println!("PROJECTS BY CATEGORY");
        for (name, count) in categories {
            println!("  {:<20} {}", name, count);
        }
    }

    let monthly = view.monthly_chart();
    if !monthly.is_empty() {
        println!();
        println!("PROJECTS BY MONTH");
        for (month, count) in monthly {
            println!("  {:<20} {}", month, count);
        }
    }

    println!();
    println!("RECENT PROJECTS");
    let recent = view.recent_projects();
    if recent.is_empty() {
        println!("  No projects yet");
    }
    for project in recent {
        let categories = if project.categories.is_empty() {
            "No categories".to_string()
        } else {
            project.categories.join(", ")
        };
        let created = project
            .created_at
            .as_deref()
            .map(format_date)
            .unwrap_or_default();
        println!(
            "  {:<30} {:<12} {:<30} {}",
            project.name,
            project.status.to_string(),
            categories,
            created
        );
    }

    Ok(())
}
