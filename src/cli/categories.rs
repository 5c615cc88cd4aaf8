use super::console::confirm;
use super::{CategoryCommand, Console};
use crate::models::CategoryInput;
use anyhow::Result;

pub async fn run(console: &mut Console, command: CategoryCommand) -> Result<()> {
    console.require_login().await?;
    let api = console.api();

    match command {
        CategoryCommand::List => {
            let categories = api.list_categories().await?;
            println!("{:<26} {:<24} {:<24}", "ID", "NAME", "SLUG");
            println!("{}", "-".repeat(74));
            for category in categories {
                println!(
                    "{:<26} {:<24} {:<24}",
                    category.id,
                    category.name,
                    category.slug.unwrap_or_default()
                );
            }
        }
        CategoryCommand::Create {
            name,
            slug,
            description,
        } => {
            let input = CategoryInput {
                name: Some(name),
                slug,
                description,
            };
            let category = api.create_category(&input).await?;
            tracing::info!("Category '{}' created", category.name);
            println!("Created category {} ({})", category.name, category.id);
        }
        CategoryCommand::Update {
            id,
            name,
            slug,
            description,
        } => {
            let input = CategoryInput {
                name,
                slug,
                description,
            };
            let category = api.update_category(&id, &input).await?;
            println!("Updated category {} ({})", category.name, category.id);
        }
        CategoryCommand::Delete { id, yes } => {
            if !yes && !confirm(&format!("Delete category {}?", id))? {
                println!("Cancelled");
                return Ok(());
            }
            api.delete_category(&id).await?;
            tracing::info!("Category {} removed", id);
            println!("Deleted category {}", id);
        }
    }

    Ok(())
}
