use super::console::{confirm, report};
use super::{Console, VideoCommand, VideoFields};
use crate::models::{FeaturedFilter, Video, VideoInput};
use crate::state::{format_date, VideoDetailView, VideoListView};
use anyhow::Result;

pub async fn run(console: &mut Console, command: VideoCommand) -> Result<()> {
    console.require_login().await?;
    let api = console.api().clone();

    match command {
        VideoCommand::List {
            page,
            limit,
            search,
            featured,
            project_id,
        } => {
            let featured = featured
                .parse::<FeaturedFilter>()
                .map_err(|_| anyhow::anyhow!("Invalid featured filter: {}", featured))?;
            let mut view = VideoListView::new(limit.unwrap_or(console.config.console.page_size));
            view.set_search(search);
            view.set_featured(featured);
            view.current_page = page;
            view.project_id = project_id;
            view.load(&api).await;

            if view.videos.is_empty() {
                println!("No videos found");
                return Ok(());
            }
            println!(
                "{:<26} {:<32} {:<24} {:<9} {:<14}",
                "ID", "TITLE", "PROJECT", "FEATURED", "CREATED"
            );
            println!("{}", "-".repeat(109));
            for video in &view.videos {
                println!(
                    "{:<26} {:<32} {:<24} {:<9} {:<14}",
                    video.id,
                    video.title,
                    video.project_name.as_deref().unwrap_or("Unknown"),
                    if video.featured { "yes" } else { "no" },
                    video
                        .created_at
                        .as_deref()
                        .map(format_date)
                        .unwrap_or_default()
                );
            }
            println!();
            println!(
                "Page {} of {} ({} videos)",
                view.current_page, view.total_pages, view.total_videos
            );
        }
        VideoCommand::Show { id } => {
            let mut view = VideoDetailView::new();
            view.load(&api, &id).await;
            if let Some(error) = view.error {
                anyhow::bail!("{}", error);
            }
            if let Some(video) = view.video.as_ref() {
                print_detail(video);
            }
        }
        VideoCommand::Create { fields } => {
            if fields.title.is_none() {
                anyhow::bail!("--title is required");
            }
            let video = api
                .create_video(&to_input(fields))
                .await
                .map_err(report)?;
            println!("Created video {} ({})", video.title, video.id);
        }
        VideoCommand::Update { id, fields } => {
            let video = api
                .update_video(&id, &to_input(fields))
                .await
                .map_err(report)?;
            println!("Updated video {} ({})", video.title, video.id);
        }
        VideoCommand::Delete { id, yes } => {
            let mut view = VideoDetailView::new();
            view.load(&api, &id).await;
            if let Some(error) = view.error.take() {
                anyhow::bail!("{}", error);
            }
            let title = view
                .video
                .as_ref()
                .map(|v| v.title.clone())
                .unwrap_or_else(|| id.clone());
            if !yes && !confirm(&format!("Delete video '{}'?", title))? {
                println!("Cancelled");
                return Ok(());
            }
            if view.delete(&api).await.is_err() {
                anyhow::bail!("{}", view.error.unwrap_or_default());
            }
            println!("Deleted video {}", title);
        }
    }

    Ok(())
}

fn to_input(fields: VideoFields) -> VideoInput {
    VideoInput {
        title: fields.title,
        description: fields.description,
        playback_id: fields.playback_id,
        thumbnail: fields.thumbnail,
        project_id: fields.project_id,
        categories: Some(fields.categories).filter(|c| !c.is_empty()),
        featured: fields.featured,
    }
}

fn print_detail(video: &Video) {
    let categories = if video.categories.is_empty() {
        "No categories".to_string()
    } else {
        video.categories.join(", ")
    };

    println!("{:<12} {}", "ID", video.id);
    println!("{:<12} {}", "TITLE", video.title);
    println!("{:<12} {}", "PLAYBACK", video.playback_id);
    println!(
        "{:<12} {}",
        "PROJECT",
        video.project_name.as_deref().unwrap_or("Unknown")
    );
    println!(
        "{:<12} {}",
        "FEATURED",
        if video.featured { "Yes" } else { "No" }
    );
    println!("{:<12} {}", "CATEGORIES", categories);
    if let Some(thumbnail) = &video.thumbnail {
        println!("{:<12} {}", "THUMBNAIL", thumbnail);
    }
    if let Some(created) = &video.created_at {
        println!("{:<12} {}", "CREATED", format_date(created));
    }
    if let Some(updated) = &video.updated_at {
        println!("{:<12} {}", "UPDATED", format_date(updated));
    }
    if !video.description.is_empty() {
        println!();
        println!("{}", video.description);
    }
}
