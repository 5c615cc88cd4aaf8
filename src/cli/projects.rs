use super::console::{confirm, report};
use super::{Console, ProjectCommand, ProjectFields};
use crate::models::{Project, ProjectInput, ProjectStatus, SocialLinks};
use crate::state::{format_date, ProjectDetailView, ProjectListView, StatusFilter};
use anyhow::Result;

pub async fn run(console: &mut Console, command: ProjectCommand) -> Result<()> {
    console.require_login().await?;
    let api = console.api().clone();

    match command {
        ProjectCommand::List {
            page,
            limit,
            search,
            status,
        } => {
            let status_filter: StatusFilter = status
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid status filter: {}", status))?;
            let mut view =
                ProjectListView::new(limit.unwrap_or(console.config.console.page_size));
            view.current_page = page;
            view.search = search;
            view.status_filter = status_filter;
            view.load(&api).await;

            let visible = view.visible();
            if visible.is_empty() {
                println!("No projects found");
                return Ok(());
            }
            print_table(&visible);
            println!();
            println!("Page {} of {}", view.current_page, view.total_pages);
        }
        ProjectCommand::Show { id } => {
            let mut view = ProjectDetailView::new();
            view.load(&api, &id).await;
            if let Some(error) = view.error {
                anyhow::bail!("{}", error);
            }
            if let Some(project) = view.project.as_ref() {
                print_detail(project);
            }
        }
        ProjectCommand::Create { fields } => {
            if fields.name.is_none() {
                anyhow::bail!("--name is required");
            }
            let input = to_input(fields)?;
            let project = api.create_project(&input).await.map_err(report)?;
            println!("Created project {} ({})", project.name, project.id);
        }
        ProjectCommand::Update { id, fields } => {
            let input = to_input(fields)?;
            let project = api.update_project(&id, &input).await.map_err(report)?;
            println!("Updated project {} ({})", project.name, project.id);
        }
        ProjectCommand::Delete { id, yes } => {
            let mut view = ProjectDetailView::new();
            view.load(&api, &id).await;
            if let Some(error) = view.error.take() {
                anyhow::bail!("{}", error);
            }
            let name = view
                .project
                .as_ref()
                .map(|p| p.name.clone())
                .unwrap_or_else(|| id.clone());
            if !yes && !confirm(&format!("Delete project '{}'?", name))? {
                println!("Cancelled");
                return Ok(());
            }
            view.delete(&api).await?;
            println!("Deleted project {}", name);
        }
        ProjectCommand::Published => {
            let projects = api.published_projects().await?;
            if projects.is_empty() {
                println!("No published projects");
                return Ok(());
            }
            let refs: Vec<&Project> = projects.iter().collect();
            print_table(&refs);
        }
    }

    Ok(())
}

fn to_input(fields: ProjectFields) -> Result<ProjectInput> {
    let status = match fields.status {
        Some(s) => Some(
            s.parse::<ProjectStatus>()
                .map_err(|_| anyhow::anyhow!("Invalid status: {}", s))?,
        ),
        None => None,
    };

    Ok(ProjectInput {
        name: fields.name,
        description: fields.description,
        logo: fields.logo,
        categories: Some(fields.categories).filter(|c| !c.is_empty()),
        status,
        featured: fields.featured,
        links: SocialLinks {
            website: fields.website,
            github: fields.github,
            twitter: fields.twitter,
        },
        images: Some(fields.images).filter(|i| !i.is_empty()),
    })
}

fn print_table(projects: &[&Project]) {
    println!(
        "{:<26} {:<30} {:<12} {:<9} {:<14}",
        "ID", "NAME", "STATUS", "FEATURED", "CREATED"
    );
    println!("{}", "-".repeat(95));
    for project in projects {
        let created = project
            .created_at
            .as_deref()
            .map(format_date)
            .unwrap_or_default();
        println!(
            "{:<26} {:<30} {:<12} {:<9} {:<14}",
            project.id,
            project.name,
            project.status.to_string(),
            if project.featured { "yes" } else { "no" },
            created
        );
    }
}

fn print_detail(project: &Project) {
    let categories = if project.categories.is_empty() {
        "No categories".to_string()
    } else {
        project.categories.join(", ")
    };

    println!("{:<12} {}", "ID", project.id);
    println!("{:<12} {}", "NAME", project.name);
    println!("{:<12} {}", "STATUS", project.status);
    println!(
        "{:<12} {}",
        "FEATURED",
        if project.featured { "Yes" } else { "No" }
    );
    println!("{:<12} {}", "CATEGORIES", categories);
    if let Some(logo) = &project.logo {
        println!("{:<12} {}", "LOGO", logo);
    }
    for (label, link) in [
        ("WEBSITE", &project.links.website),
        ("GITHUB", &project.links.github),
        ("TWITTER", &project.links.twitter),
    ] {
        if let Some(link) = link {
            println!("{:<12} {}", label, link);
        }
    }
    if let Some(created) = &project.created_at {
        println!("{:<12} {}", "CREATED", format_date(created));
    }
    if let Some(updated) = &project.updated_at {
        println!("{:<12} {}", "UPDATED", format_date(updated));
    }
    if !project.description.is_empty() {
        println!();
        println!("{}", project.description);
    }
    if !project.images.is_empty() {
        println!();
        println!("IMAGES");
        for image in &project.images {
            println!("  {}", image);
        }
    }
}
