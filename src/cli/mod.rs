pub mod auth;
pub mod categories;
pub mod config;
pub mod console;
pub mod dashboard;
pub mod projects;
pub mod upload;
pub mod videos;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub use console::Console;

#[derive(Parser)]
#[command(name = "showcase")]
#[command(version)]
#[command(about = "Admin console for the showcase directory", long_about = None)]
pub struct Cli {
    /// Directory holding config.toml and the stored session
    #[arg(long, global = true, env = "SHOWCASE_HOME")]
    pub home: Option<PathBuf>,

    /// Server root, overriding api.base_url
    #[arg(long, global = true, env = "SHOWCASE_API_URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in and store the session
    Login {
        #[arg(short, long)]
        username: Option<String>,
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Sign out and drop the stored session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Directory statistics
    Dashboard,
    Projects {
        #[command(subcommand)]
        command: ProjectCommand,
    },
    Categories {
        #[command(subcommand)]
        command: CategoryCommand,
    },
    Videos {
        #[command(subcommand)]
        command: VideoCommand,
    },
    Upload {
        #[command(subcommand)]
        command: UploadCommand,
    },
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Args, Debug, Default)]
pub struct ProjectFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub logo: Option<String>,
    #[arg(long = "category")]
    pub categories: Vec<String>,
    /// published or unpublished
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub featured: Option<bool>,
    #[arg(long)]
    pub website: Option<String>,
    #[arg(long)]
    pub github: Option<String>,
    #[arg(long)]
    pub twitter: Option<String>,
    #[arg(long = "image")]
    pub images: Vec<String>,
}

#[derive(Subcommand)]
pub enum ProjectCommand {
    List {
        #[arg(long, default_value = "1")]
        page: u32,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(short, long, default_value = "")]
        search: String,
        /// all, published or unpublished
        #[arg(long, default_value = "all")]
        status: String,
    },
    Show {
        id: String,
    },
    Create {
        #[command(flatten)]
        fields: ProjectFields,
    },
    Update {
        id: String,
        #[command(flatten)]
        fields: ProjectFields,
    },
    Delete {
        id: String,
        #[arg(short, long)]
        yes: bool,
    },
    /// Published projects available for video association
    Published,
}

#[derive(Subcommand)]
pub enum CategoryCommand {
    List,
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        slug: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        slug: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    Delete {
        id: String,
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct VideoFields {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub playback_id: Option<String>,
    #[arg(long)]
    pub thumbnail: Option<String>,
    #[arg(long)]
    pub project_id: Option<String>,
    #[arg(long = "category")]
    pub categories: Vec<String>,
    #[arg(long)]
    pub featured: Option<bool>,
}

#[derive(Subcommand)]
pub enum VideoCommand {
    List {
        #[arg(long, default_value = "1")]
        page: u32,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(short, long, default_value = "")]
        search: String,
        /// all, featured or not-featured
        #[arg(long, default_value = "all")]
        featured: String,
        #[arg(long)]
        project_id: Option<String>,
    },
    Show {
        id: String,
    },
    Create {
        #[command(flatten)]
        fields: VideoFields,
    },
    Update {
        id: String,
        #[command(flatten)]
        fields: VideoFields,
    },
    Delete {
        id: String,
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum UploadCommand {
    /// Upload one file
    File {
        path: PathBuf,
        /// logo, project-hero-image, video-thumbnail, project-image or project-video
        #[arg(long, default_value = "project-image")]
        kind: String,
        #[arg(long)]
        project: Option<String>,
    },
    /// Upload several project images at once
    Files {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        #[arg(long)]
        project: Option<String>,
    },
    Delete {
        key: String,
        #[arg(short, long)]
        yes: bool,
    },
    /// Create the storage folders for a project
    Folders {
        project: String,
    },
    List {
        project: String,
        #[arg(long)]
        folder: Option<String>,
    },
    VideoFolder {
        project: String,
        playback_id: String,
    },
    Thumbnail {
        path: PathBuf,
        #[arg(long)]
        project: String,
        #[arg(long)]
        playback_id: String,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    Get { key: String },
    Set { key: String, value: String },
    List,
    Path,
}
