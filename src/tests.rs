#[cfg(test)]
mod tests {

    mod config_tests {
        use crate::Config;

        #[test]
        fn test_defaults() {
            let config = Config::default();
            assert_eq!(config.api.base_url, "http://localhost:3001");
            assert_eq!(config.console.page_size, 10);
            assert_eq!(config.console.featured_limit, 3);
            assert_eq!(config.console.published_limit, 100);
        }

        #[test]
        fn test_endpoint_appends_prefix() {
            let mut config = Config::default();
            assert_eq!(config.api.endpoint(), "http://localhost:3001/api/v1");
            config.api.base_url = "https://admin.example.com/".to_string();
            assert_eq!(config.api.endpoint(), "https://admin.example.com/api/v1");
        }

        #[test]
        fn test_partial_file_fills_defaults() {
            let config: Config = toml::from_str("[console]\npage_size = 25\n").unwrap();
            assert_eq!(config.console.page_size, 25);
            assert_eq!(config.console.featured_limit, 3);
            assert_eq!(config.api.base_url, "http://localhost:3001");
        }

        #[test]
        fn test_get_and_set() {
            let mut config = Config::default();
            config.set("console.page_size", "20").unwrap();
            config.set("api.base_url", "http://10.0.0.5:8080").unwrap();
            assert_eq!(config.get("console.page_size").as_deref(), Some("20"));
            assert_eq!(
                config.get("api.base_url").as_deref(),
                Some("http://10.0.0.5:8080")
            );
            assert!(config.get("console.theme").is_none());
        }

        #[test]
        fn test_set_unknown_key() {
            let mut config = Config::default();
            assert!(config.set("site.title", "x").is_err());
        }

        #[test]
        fn test_set_rejects_invalid_value_and_keeps_previous() {
            let mut config = Config::default();
            assert!(config.set("console.page_size", "0").is_err());
            assert_eq!(config.console.page_size, 10);
            assert!(config.set("console.page_size", "many").is_err());
            assert!(config.set("api.base_url", "not a url").is_err());
            assert_eq!(config.api.base_url, "http://localhost:3001");
        }

        #[test]
        fn test_validate_limits() {
            let mut config = Config::default();
            config.console.page_size = 101;
            assert!(config.validate().is_err());
            config.console.page_size = 100;
            config.console.featured_limit = 0;
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_list_covers_every_key() {
            let config = Config::default();
            let items = config.list();
            assert_eq!(items.len(), 4);
            for (key, value) in items {
                assert_eq!(config.get(&key), Some(value));
            }
        }

        #[test]
        fn test_load_missing_file_gives_defaults() {
            let dir = tempfile::tempdir().unwrap();
            let config = Config::load(&dir.path().join("config.toml")).unwrap();
            assert_eq!(config.console.page_size, 10);
        }

        #[test]
        fn test_save_and_load() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("nested").join("config.toml");
            let mut config = Config::default();
            config.set("console.featured_limit", "5").unwrap();
            config.save(&path).unwrap();

            let loaded = Config::load(&path).unwrap();
            assert_eq!(loaded.console.featured_limit, 5);
        }

        #[test]
        fn test_load_rejects_invalid_file() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("config.toml");
            std::fs::write(&path, "[console]\npage_size = 0\n").unwrap();
            assert!(Config::load(&path).is_err());
        }
    }

    mod model_tests {
        use crate::models::*;
        use serde_json::json;

        #[test]
        fn test_project_minimal_fields() {
            let project: Project =
                serde_json::from_value(json!({ "id": "p1", "name": "Walrus" })).unwrap();
            assert_eq!(project.status, ProjectStatus::Unpublished);
            assert!(!project.featured);
            assert!(project.categories.is_empty());
            assert!(project.links.is_empty());
            assert!(project.created_at.is_none());
        }

        #[test]
        fn test_project_full_record() {
            let project: Project = serde_json::from_value(json!({
                "id": "p1",
                "name": "Walrus",
                "description": "Decentralized storage",
                "logo": "https://cdn.example.com/walrus.png",
                "categories": ["Storage", "Infra"],
                "status": "published",
                "featured": true,
                "website": "https://walrus.xyz",
                "twitter": "https://x.com/walrus",
                "images": ["a.png"],
                "createdAt": "2025-03-04T10:00:00Z"
            }))
            .unwrap();
            assert_eq!(project.status, ProjectStatus::Published);
            assert!(project.featured);
            assert_eq!(project.links.website.as_deref(), Some("https://walrus.xyz"));
            assert!(project.links.github.is_none());
            assert_eq!(project.created_at.as_deref(), Some("2025-03-04T10:00:00Z"));
        }

        #[test]
        fn test_null_fields_read_as_defaults() {
            let project: Project = serde_json::from_value(json!({
                "id": "p1",
                "name": "Walrus",
                "description": null,
                "categories": null,
                "status": null,
                "featured": null,
                "images": null,
                "website": null
            }))
            .unwrap();
            assert_eq!(project.description, "");
            assert!(project.categories.is_empty());
            assert_eq!(project.status, ProjectStatus::Unpublished);
            assert!(project.links.is_empty());

            let video: Video = serde_json::from_value(json!({
                "id": "v1",
                "title": "Intro",
                "description": null,
                "playbackId": null,
                "categories": null,
                "featured": null
            }))
            .unwrap();
            assert_eq!(video.description, "");
            assert_eq!(video.playback_id, "");
            assert!(!video.featured);
        }

        #[test]
        fn test_project_listing_keeps_records_with_null_fields() {
            let listing: ProjectListing = serde_json::from_value(json!({
                "projects": [
                    { "id": "p1", "name": "Walrus", "description": "Storage" },
                    { "id": "p2", "name": "Seal", "description": null }
                ],
                "pagination": { "total": 2, "totalPages": 1 }
            }))
            .unwrap();
            let page = listing.into_page();
            assert_eq!(page.items.len(), 2);
            assert_eq!(page.items[1].description, "");
        }

        #[test]
        fn test_project_search_is_case_insensitive() {
            let project: Project = serde_json::from_value(json!({
                "id": "p1",
                "name": "Walrus",
                "description": "Decentralized STORAGE"
            }))
            .unwrap();
            assert!(project.matches_search("walr"));
            assert!(project.matches_search("storage"));
            assert!(project.matches_search(""));
            assert!(!project.matches_search("oracle"));
        }

        #[test]
        fn test_project_status_parse() {
            assert_eq!(
                "Published".parse::<ProjectStatus>(),
                Ok(ProjectStatus::Published)
            );
            assert_eq!(
                "unpublished".parse::<ProjectStatus>(),
                Ok(ProjectStatus::Unpublished)
            );
            assert!("draft".parse::<ProjectStatus>().is_err());
            assert_eq!(ProjectStatus::Published.to_string(), "published");
        }

        #[test]
        fn test_project_input_skips_unset_fields() {
            let input = ProjectInput {
                featured: Some(true),
                links: SocialLinks {
                    github: Some("https://github.com/org".to_string()),
                    ..SocialLinks::default()
                },
                ..ProjectInput::default()
            };
            let value = serde_json::to_value(&input).unwrap();
            assert_eq!(
                value,
                json!({ "featured": true, "github": "https://github.com/org" })
            );
        }

        #[test]
        fn test_video_input_uses_camel_case() {
            let input = VideoInput {
                title: Some("Intro".to_string()),
                playback_id: Some("abc123".to_string()),
                project_id: Some("p1".to_string()),
                ..VideoInput::default()
            };
            let value = serde_json::to_value(&input).unwrap();
            assert_eq!(
                value,
                json!({ "title": "Intro", "playbackId": "abc123", "projectId": "p1" })
            );
        }

        #[test]
        fn test_project_listing_paged() {
            let listing: ProjectListing = serde_json::from_value(json!({
                "projects": [{ "id": "p1", "name": "A" }, { "id": "p2", "name": "B" }],
                "pagination": { "page": 1, "limit": 2, "total": 7, "totalPages": 4 }
            }))
            .unwrap();
            let page = listing.into_page();
            assert_eq!(page.items.len(), 2);
            assert_eq!(page.total_pages, 4);
            assert_eq!(page.total, 7);
        }

        #[test]
        fn test_project_listing_plain_array() {
            let listing: ProjectListing =
                serde_json::from_value(json!([{ "id": "p1", "name": "A" }])).unwrap();
            let page = listing.into_page();
            assert_eq!(page.items.len(), 1);
            assert_eq!(page.total_pages, 1);
        }

        #[test]
        fn test_project_listing_unexpected_shape_is_empty() {
            let listing: ProjectListing =
                serde_json::from_value(json!({ "unexpected": true })).unwrap();
            let page = listing.into_page();
            assert!(page.items.is_empty());
            assert_eq!(page.total_pages, 1);
        }

        #[test]
        fn test_page_never_reports_zero_pages() {
            let pagination = Pagination {
                total_pages: 0,
                ..Pagination::default()
            };
            let page: Page<Project> = Page::from_items(Vec::new(), Some(pagination));
            assert_eq!(page.total_pages, 1);
        }

        #[test]
        fn test_dashboard_stats_tolerates_empty_object() {
            let stats: DashboardStats = serde_json::from_value(json!({})).unwrap();
            assert_eq!(stats.total_projects, 0);
            assert!(stats.category_counts.is_none());
            assert_eq!(FeaturedCounts::from(&stats), FeaturedCounts::default());
        }

        #[test]
        fn test_featured_counts_from_stats() {
            let stats: DashboardStats = serde_json::from_value(json!({
                "totalProjects": 12,
                "featuredProjectCount": 2
            }))
            .unwrap();
            let counts = FeaturedCounts::from(&stats);
            assert_eq!(counts.projects, 2);
            assert_eq!(counts.videos, 0);
        }

        #[test]
        fn test_upload_kind_round_trip_names() {
            for kind in [
                UploadKind::Logo,
                UploadKind::ProjectHeroImage,
                UploadKind::VideoThumbnail,
                UploadKind::ProjectImage,
                UploadKind::ProjectVideo,
            ] {
                assert_eq!(kind.to_string().parse::<UploadKind>(), Ok(kind));
            }
            assert_eq!(UploadKind::ProjectHeroImage.as_str(), "project-hero-image");
            assert!("banner".parse::<UploadKind>().is_err());
        }

        #[test]
        fn test_featured_filter_query_value() {
            assert_eq!(FeaturedFilter::All.as_query(), None);
            assert_eq!(FeaturedFilter::Featured.as_query(), Some(true));
            assert_eq!(FeaturedFilter::NotFeatured.as_query(), Some(false));
            assert_eq!(
                "not-featured".parse::<FeaturedFilter>(),
                Ok(FeaturedFilter::NotFeatured)
            );
        }

        #[test]
        fn test_error_body_prefers_error_field() {
            let body: ErrorBody = serde_json::from_value(json!({
                "error": "Project not found",
                "message": "Not Found"
            }))
            .unwrap();
            assert_eq!(body.into_message().as_deref(), Some("Project not found"));

            let body: ErrorBody =
                serde_json::from_value(json!({ "error": "", "message": "Bad input" })).unwrap();
            assert_eq!(body.into_message().as_deref(), Some("Bad input"));

            assert!(ErrorBody::default().into_message().is_none());
        }

        #[test]
        fn test_file_upload_guesses_mime_type() {
            assert_eq!(FileUpload::new("logo.png", vec![]).mime_type, "image/png");
            assert_eq!(FileUpload::new("clip.mp4", vec![]).mime_type, "video/mp4");
            assert_eq!(
                FileUpload::new("README", vec![]).mime_type,
                "application/octet-stream"
            );
        }
    }

    mod session_tests {
        use crate::models::{AuthResponse, User};
        use crate::services::session::{
            FileStorage, MemoryStorage, Session, SessionError, SessionStorage, TOKEN_KEY,
            USER_KEY,
        };

        fn auth() -> AuthResponse {
            AuthResponse {
                token: "tok-123".to_string(),
                user: User {
                    id: "u1".to_string(),
                    username: "admin".to_string(),
                },
            }
        }

        #[test]
        fn test_store_and_clear() {
            let session = Session::in_memory();
            assert!(session.token().is_none());
            assert!(session.user().is_none());

            session.store(&auth()).unwrap();
            assert_eq!(session.token().as_deref(), Some("tok-123"));
            assert_eq!(session.user().map(|u| u.username), Some("admin".to_string()));

            session.clear().unwrap();
            assert!(session.token().is_none());
            assert!(!session.has_saved_user());
        }

        #[test]
        fn test_clones_share_storage() {
            let session = Session::in_memory();
            let other = session.clone();
            session.store(&auth()).unwrap();
            assert!(other.token().is_some());
            other.clear().unwrap();
            assert!(session.token().is_none());
        }

        #[test]
        fn test_empty_token_reads_as_absent() {
            let storage = MemoryStorage::new();
            storage.set(TOKEN_KEY, "").unwrap();
            let session = Session::new(storage);
            assert!(session.token().is_none());
        }

        #[test]
        fn test_corrupt_user_record_reads_as_absent() {
            let storage = MemoryStorage::new();
            storage.set(USER_KEY, "{not json").unwrap();
            let session = Session::new(storage);
            assert!(session.has_saved_user());
            assert!(session.user().is_none());
        }

        #[test]
        fn test_file_storage_survives_reopen() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("session.toml");

            Session::open(&path).store(&auth()).unwrap();
            assert!(path.exists());

            let reopened = Session::open(&path);
            assert_eq!(reopened.token().as_deref(), Some("tok-123"));
            assert_eq!(reopened.user().map(|u| u.id), Some("u1".to_string()));
        }

        #[test]
        fn test_file_storage_clear_removes_file() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("session.toml");
            let session = Session::open(&path);
            session.store(&auth()).unwrap();
            session.clear().unwrap();
            assert!(!path.exists());
            assert!(Session::open(&path).token().is_none());
        }

        struct UserWriteFails(MemoryStorage);

        impl SessionStorage for UserWriteFails {
            fn get(&self, key: &str) -> Option<String> {
                self.0.get(key)
            }

            fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
                if key == USER_KEY {
                    return Err(SessionError::Io {
                        path: "session.toml".into(),
                        source: std::io::Error::other("disk full"),
                    });
                }
                self.0.set(key, value)
            }

            fn remove(&self, key: &str) -> Result<(), SessionError> {
                self.0.remove(key)
            }
        }

        #[test]
        fn test_store_leaves_no_token_when_user_write_fails() {
            let session = Session::new(UserWriteFails(MemoryStorage::new()));
            assert!(session.store(&auth()).is_err());
            assert!(session.token().is_none());
            assert!(!session.has_saved_user());
        }

        #[test]
        fn test_corrupt_session_file_opens_empty() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("session.toml");
            std::fs::write(&path, "admin_token = [[[").unwrap();
            let storage = FileStorage::open(&path);
            assert!(storage.get(TOKEN_KEY).is_none());
            assert_eq!(storage.path(), path.as_path());
        }

        #[cfg(unix)]
        #[test]
        fn test_session_file_is_private() {
            use std::os::unix::fs::PermissionsExt;

            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("session.toml");
            Session::open(&path).store(&auth()).unwrap();
            let mode = std::fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o600);
        }

        #[cfg(unix)]
        #[test]
        fn test_existing_session_file_is_made_private() {
            use std::os::unix::fs::PermissionsExt;

            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("session.toml");
            std::fs::write(&path, "").unwrap();
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

            Session::open(&path).store(&auth()).unwrap();
            let mode = std::fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o600);
            assert_eq!(Session::open(&path).token().as_deref(), Some("tok-123"));
        }
    }

    mod error_tests {
        use crate::services::api::{ApiError, ErrorCategory, ResourceKind};
        use reqwest::StatusCode;

        #[test]
        fn test_featured_limit_message() {
            let err = ApiError::FeaturedLimit {
                kind: ResourceKind::Project,
                limit: 3,
                message: "Too many featured projects".to_string(),
            };
            assert_eq!(
                err.to_string(),
                "Only 3 featured projects are allowed. Please unfeature an existing project first."
            );
            assert_eq!(err.category(), ErrorCategory::Conflict);
            assert_eq!(err.server_message(), Some("Too many featured projects"));

            let err = ApiError::FeaturedLimit {
                kind: ResourceKind::Video,
                limit: 5,
                message: String::new(),
            };
            assert_eq!(
                err.to_string(),
                "Only 5 featured videos are allowed. Please unfeature an existing video first."
            );
        }

        #[test]
        fn test_status_error_shows_server_message() {
            let err = ApiError::Status {
                status: StatusCode::BAD_REQUEST,
                message: Some("Name is required".to_string()),
            };
            assert_eq!(err.to_string(), "Name is required");
            assert_eq!(err.category(), ErrorCategory::Form);
            assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));

            let err = ApiError::Status {
                status: StatusCode::BAD_GATEWAY,
                message: None,
            };
            assert!(err.to_string().contains("502"));
        }

        #[test]
        fn test_unauthorized_category() {
            let err = ApiError::Unauthorized { message: None };
            assert_eq!(err.category(), ErrorCategory::Authorization);
            assert!(err.is_unauthorized());
            assert!(!ApiError::MissingData.is_unauthorized());
        }
    }

    mod state_tests {
        use crate::models::{DashboardStats, Project, ProjectStatus};
        use crate::state::{format_date, DashboardView, LoginForm, ProjectListView, StatusFilter};
        use serde_json::json;

        fn project(id: &str, name: &str, status: &str) -> Project {
            serde_json::from_value(json!({
                "id": id,
                "name": name,
                "description": format!("{} description", name),
                "status": status
            }))
            .unwrap()
        }

        fn list() -> ProjectListView {
            let mut view = ProjectListView::new(10);
            view.projects = vec![
                project("p1", "Walrus", "published"),
                project("p2", "Seal", "unpublished"),
                project("p3", "Wallet Kit", "published"),
            ];
            view
        }

        #[test]
        fn test_status_filter_parse() {
            assert_eq!("all".parse::<StatusFilter>(), Ok(StatusFilter::All));
            assert_eq!(
                "published".parse::<StatusFilter>(),
                Ok(StatusFilter::Only(ProjectStatus::Published))
            );
            assert!("pending".parse::<StatusFilter>().is_err());
        }

        #[test]
        fn test_visible_applies_search_and_status() {
            let mut view = list();
            assert_eq!(view.visible().len(), 3);

            view.search = "WAL".to_string();
            let names: Vec<&str> = view.visible().iter().map(|p| p.name.as_str()).collect();
            assert_eq!(names, vec!["Walrus", "Wallet Kit"]);

            view.search.clear();
            view.status_filter = StatusFilter::Only(ProjectStatus::Unpublished);
            let ids: Vec<&str> = view.visible().iter().map(|p| p.id.as_str()).collect();
            assert_eq!(ids, vec!["p2"]);
        }

        #[test]
        fn test_paging_bounds() {
            let mut view = list();
            view.total_pages = 2;
            assert!(!view.previous_page());
            assert!(view.next_page());
            assert_eq!(view.current_page, 2);
            assert!(!view.next_page());
            assert!(view.previous_page());
            assert_eq!(view.current_page, 1);
        }

        #[test]
        fn test_request_delete_needs_listed_project() {
            let mut view = list();
            assert!(!view.request_delete("missing"));
            assert!(view.pending_delete().is_none());
            assert!(view.request_delete("p2"));
            assert_eq!(view.pending_delete().map(|p| p.name.as_str()), Some("Seal"));
            view.cancel_delete();
            assert!(view.pending_delete().is_none());
            assert_eq!(view.projects.len(), 3);
        }

        fn dashboard(stats: serde_json::Value) -> DashboardView {
            DashboardView {
                stats: Some(serde_json::from_value::<DashboardStats>(stats).unwrap()),
                ..DashboardView::default()
            }
        }

        #[test]
        fn test_status_breakdown() {
            let view = dashboard(json!({ "totalProjects": 10, "activeProjects": 7 }));
            assert_eq!(
                view.status_breakdown(),
                vec![("Published", 7), ("Unpublished", 3)]
            );

            let view = dashboard(json!({ "totalProjects": 1, "activeProjects": 4 }));
            assert_eq!(view.status_breakdown()[1], ("Unpublished", 0));

            assert!(DashboardView::new().status_breakdown().is_empty());
        }

        #[test]
        fn test_category_chart_prefers_full_counts() {
            let view = dashboard(json!({
                "categoryCounts": [
                    { "name": "DeFi", "projectCount": 4 },
                    { "name": "Gaming" }
                ],
                "topCategories": [{ "name": "NFT", "projectCount": 9 }]
            }));
            assert_eq!(view.category_chart(), vec![("DeFi".to_string(), 4)]);

            let view = dashboard(json!({
                "topCategories": [{ "name": "NFT", "projectCount": 9 }]
            }));
            assert_eq!(view.category_chart(), vec![("NFT".to_string(), 9)]);
        }

        #[test]
        fn test_recent_projects_capped_at_five() {
            let recent: Vec<_> = (0..8)
                .map(|i| json!({ "id": format!("p{}", i), "name": format!("P{}", i) }))
                .collect();
            let view = dashboard(json!({ "recentProjects": recent }));
            assert_eq!(view.recent_projects().len(), 5);
            assert_eq!(view.recent_projects()[0].id, "p0");
        }

        #[test]
        fn test_monthly_chart_and_featured_usage() {
            let view = dashboard(json!({
                "monthlyProjectCounts": [{ "month": "Jan", "count": 2 }],
                "featuredProjectCount": 2,
                "featuredVideoCount": 3
            }));
            assert_eq!(view.monthly_chart(), vec![("Jan".to_string(), 2)]);
            assert_eq!(
                view.featured_usage(3),
                ("2 / 3".to_string(), "3 / 3".to_string())
            );
            assert_eq!(
                DashboardView::new().featured_usage(3),
                ("0 / 3".to_string(), "0 / 3".to_string())
            );
        }

        #[test]
        fn test_login_form_validation() {
            assert_eq!(
                LoginForm::default().validate(),
                vec!["Username is required", "Password is required"]
            );
            assert_eq!(
                LoginForm::new("  ", "secret").validate(),
                vec!["Username is required"]
            );
            assert!(LoginForm::new("admin", "secret").validate().is_empty());
        }

        #[test]
        fn test_format_date() {
            assert_eq!(format_date("2025-03-04T10:00:00Z"), "March 4, 2025");
            assert_eq!(format_date("2024-12-25T23:59:59+02:00"), "December 25, 2024");
            assert_eq!(format_date("yesterday"), "yesterday");
        }
    }
}
