use super::console::confirm;
use super::{Console, UploadCommand};
use crate::models::{UploadKind, UploadedFile};
use crate::services::api::read_upload;
use anyhow::Result;

pub async fn run(console: &mut Console, command: UploadCommand) -> Result<()> {
    console.require_login().await?;
    let api = console.api();

    match command {
        UploadCommand::File {
            path,
            kind,
            project,
        } => {
            let kind: UploadKind = kind
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid upload kind: {}", kind))?;
            let file = read_upload(&path).await?;
            let uploaded = api.upload_file(file, kind, project.as_deref()).await?;
            print_uploaded(&[uploaded]);
        }
        UploadCommand::Files { paths, project } => {
            let mut files = Vec::with_capacity(paths.len());
            for path in &paths {
                files.push(read_upload(path).await?);
            }
            let uploaded = api.upload_files(files, project.as_deref()).await?;
            print_uploaded(&uploaded);
        }
        UploadCommand::Delete { key, yes } => {
            if !yes && !confirm(&format!("Delete uploaded file {}?", key))? {
                println!("Cancelled");
                return Ok(());
            }
            api.delete_uploaded_file(&key).await?;
            println!("Deleted {}", key);
        }
        UploadCommand::Folders { project } => {
            api.create_project_folders(&project).await?;
            println!("Created folders for {}", project);
        }
        UploadCommand::List { project, folder } => {
            let files = api.list_project_files(&project, folder.as_deref()).await?;
            if files.is_empty() {
                println!("No files");
                return Ok(());
            }
            println!("{:<60} {:>10} {}", "KEY", "SIZE", "MODIFIED");
            println!("{}", "-".repeat(96));
            for file in files {
                println!(
                    "{:<60} {:>10} {}",
                    file.key,
                    file.size,
                    file.last_modified.unwrap_or_default()
                );
            }
        }
        UploadCommand::VideoFolder {
            project,
            playback_id,
        } => {
            api.create_video_folder(&project, &playback_id).await?;
            println!("Created folder for video {} in {}", playback_id, project);
        }
        UploadCommand::Thumbnail {
            path,
            project,
            playback_id,
        } => {
            let file = read_upload(&path).await?;
            let uploaded = api
                .upload_video_thumbnail(file, &project, &playback_id)
                .await?;
            print_uploaded(&[uploaded]);
        }
    }

    Ok(())
}

fn print_uploaded(files: &[UploadedFile]) {
    for file in files {
        println!("{}  {}", file.key, file.url);
    }
}
