//! End-to-end tests for the projects loader and page.

use std::sync::Arc;

use folio_core::{LogLevel, MemorySink};
use folio_data::{
    FetchClient, FetchError, LoadEvent, MemoryFetcher, PageLoad, Response, StaticDirFetcher,
};
use projects_page::{NotFoundPolicy, ProjectsConfig, ProjectsError, ProjectsLoader, ProjectsPage};

const PROJECTS_YAML: &str = r#"
projects:
  - link: https://alpha.dev
    iframe: https://alpha.dev/embed
    image: /img/alpha.png
    title: Alpha
    description: A game jam entry
    hackclub: true
  - link: https://beta.dev
    iframe: https://beta.dev/embed
    image: /img/beta.png
    title: Beta
    description: A CLI tool
  - link: https://gamma.dev
    iframe: https://gamma.dev/embed
    image: /img/gamma.png
    title: Gamma
    description: A website
    hackclub: false
"#;

fn event_for(fetcher: Arc<MemoryFetcher>) -> (LoadEvent, MemorySink) {
    let sink = MemorySink::new();
    let event = LoadEvent::new(FetchClient::from_arc(fetcher), ProjectsPage::ROUTE)
        .with_log_sink(Arc::new(sink.clone()));
    (event, sink)
}

// === Success Tests ===

#[tokio::test]
async fn test_load_returns_records_in_document_order() {
    let fetcher = Arc::new(MemoryFetcher::new().with_yaml("/projects.yaml", PROJECTS_YAML));
    let (event, sink) = event_for(fetcher);

    let data = ProjectsLoader::new().load(&event).await.unwrap();

    let titles: Vec<&str> = data.projects.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Alpha", "Beta", "Gamma"]);
    assert_eq!(data.projects[0].hackclub, Some(true));
    assert_eq!(data.projects[1].hackclub, None);
    assert_eq!(data.projects[2].hackclub, Some(false));
    assert!(sink.entries_at(LogLevel::Error).is_empty());
}

#[tokio::test]
async fn test_load_logs_count_and_duration_at_debug() {
    let fetcher = Arc::new(MemoryFetcher::new().with_yaml("/projects.yaml", PROJECTS_YAML));
    let (event, sink) = event_for(fetcher);
    let event = event.with_log_level(LogLevel::Debug);

    ProjectsLoader::new().load(&event).await.unwrap();

    let debug = sink.entries_at(LogLevel::Debug);
    assert_eq!(debug.len(), 1);
    assert_eq!(debug[0].message, "Loaded projects");
    assert_eq!(debug[0].fields.get("count"), Some(&serde_json::json!(3)));
    assert!(debug[0].fields.get("duration_ms").is_some_and(|v| v.is_u64()));
}

#[tokio::test]
async fn test_page_renders_numeric_title() {
    let yaml = concat!(
        "projects:\n",
        "  - link: l\n    iframe: i\n    image: m\n",
        "    title: 2048\n    description: d\n",
    );
    let fetcher = Arc::new(MemoryFetcher::new().with_yaml("/projects.yaml", yaml));
    let (event, _sink) = event_for(fetcher);

    let page = ProjectsPage::default().render(&event).await;

    assert_eq!(page.status, 200);
    assert!(page.body.contains("2048"));
}

#[tokio::test]
async fn test_load_without_projects_key_is_empty() {
    let fetcher = Arc::new(MemoryFetcher::new().with_yaml("/projects.yaml", "owner: someone\n"));
    let (event, _sink) = event_for(fetcher);

    let data = ProjectsLoader::new().load(&event).await.unwrap();
    assert!(data.projects.is_empty());
}

#[tokio::test]
async fn test_load_is_idempotent_and_never_cached() {
    let fetcher = Arc::new(MemoryFetcher::new().with_yaml("/projects.yaml", PROJECTS_YAML));
    let (event, _sink) = event_for(fetcher.clone());
    let loader = ProjectsLoader::new();

    let first = loader.load(&event).await.unwrap();
    let second = loader.load(&event).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(fetcher.hits("/projects.yaml"), 2);
}

#[tokio::test]
async fn test_load_sees_updated_document() {
    let fetcher = Arc::new(MemoryFetcher::new().with_yaml("/projects.yaml", PROJECTS_YAML));
    let (event, _sink) = event_for(fetcher.clone());
    let loader = ProjectsLoader::new();

    assert_eq!(loader.load(&event).await.unwrap().len(), 3);

    fetcher.set_response(
        "/projects.yaml",
        Response::ok_with("application/yaml", "projects: []\n"),
    );
    assert!(loader.load(&event).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_load_uses_configured_resource_path() {
    let fetcher = Arc::new(MemoryFetcher::new().with_yaml("/data/work.yaml", PROJECTS_YAML));
    let (event, _sink) = event_for(fetcher.clone());
    let config = ProjectsConfig::default().with_resource_path("/data/work.yaml");
    let loader = ProjectsLoader::with_config(config);

    assert_eq!(loader.load(&event).await.unwrap().len(), 3);
    assert_eq!(fetcher.hits("/projects.yaml"), 0);
}

// === Failure Tests ===

#[tokio::test]
async fn test_non_success_status_surfaces_as_500() {
    let fetcher = Arc::new(MemoryFetcher::new());
    let (event, sink) = event_for(fetcher);

    let err = ProjectsLoader::new().load(&event).await.unwrap_err();

    assert_eq!(err, ProjectsError::Load);
    assert_eq!(err.status(), 500);
    assert_eq!(err.to_string(), "Failed to load projects");

    let errors = sink.entries_at(LogLevel::Error);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Error loading projects");
    assert!(errors[0].field_str("error").unwrap().contains("404"));
    assert!(errors[0].fields.contains_key("duration_ms"));
}

#[tokio::test]
async fn test_server_error_status_surfaces_as_500() {
    let fetcher =
        Arc::new(MemoryFetcher::new().with_response("/projects.yaml", Response::status(503)));
    let (event, _sink) = event_for(fetcher);

    let err = ProjectsLoader::new().load(&event).await.unwrap_err();
    assert_eq!(err, ProjectsError::Load);
}

#[tokio::test]
async fn test_not_found_propagates_when_configured() {
    let fetcher = Arc::new(MemoryFetcher::new());
    let (event, sink) = event_for(fetcher);
    let loader = ProjectsLoader::with_config(
        ProjectsConfig::default().with_not_found(NotFoundPolicy::Propagate),
    );

    let err = loader.load(&event).await.unwrap_err();

    assert_eq!(err, ProjectsError::NotFound);
    assert_eq!(err.status(), 404);
    assert_eq!(err.to_string(), "Projects file not found");
    assert_eq!(sink.entries_at(LogLevel::Error).len(), 1);
}

#[tokio::test]
async fn test_network_failure_surfaces_as_500() {
    let fetcher = Arc::new(MemoryFetcher::new().with_failure(
        "/projects.yaml",
        FetchError::Request("connection refused".to_string()),
    ));
    let (event, sink) = event_for(fetcher);
    let loader = ProjectsLoader::with_config(
        ProjectsConfig::default().with_not_found(NotFoundPolicy::Propagate),
    );

    let err = loader.load(&event).await.unwrap_err();

    assert_eq!(err, ProjectsError::Load);
    let errors = sink.entries_at(LogLevel::Error);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].field_str("error").unwrap().contains("connection refused"));
}

#[tokio::test]
async fn test_malformed_yaml_surfaces_as_500() {
    let fetcher = Arc::new(
        MemoryFetcher::new().with_yaml("/projects.yaml", "projects:\n  - title: [broken\n"),
    );
    let (event, sink) = event_for(fetcher);

    let err = ProjectsLoader::new().load(&event).await.unwrap_err();

    assert_eq!(err, ProjectsError::Load);
    assert_eq!(sink.entries_at(LogLevel::Error).len(), 1);
}

#[tokio::test]
async fn test_invalid_utf8_body_surfaces_as_500() {
    let mut response = Response::status(200);
    response.body = vec![0xff, 0xfe, 0xfd];
    let fetcher = Arc::new(MemoryFetcher::new().with_response("/projects.yaml", response));
    let (event, _sink) = event_for(fetcher);

    let err = ProjectsLoader::new().load(&event).await.unwrap_err();
    assert_eq!(err, ProjectsError::Load);
}

// === Page Tests ===

#[tokio::test]
async fn test_page_renders_projects() {
    let fetcher = Arc::new(MemoryFetcher::new().with_yaml("/projects.yaml", PROJECTS_YAML));
    let (event, _sink) = event_for(fetcher);

    let page = ProjectsPage::default().render(&event).await;

    assert_eq!(page.status, 200);
    assert!(page.body.contains("Alpha"));
    assert_eq!(page.body.matches("badge-hackclub").count(), 1);
    assert_eq!(page.data.map(|d| d.len()), Some(3));
}

#[tokio::test]
async fn test_page_renders_error_view() {
    let fetcher = Arc::new(MemoryFetcher::new());
    let (event, _sink) = event_for(fetcher);

    let page = ProjectsPage::default().render(&event).await;

    assert_eq!(page.status, 500);
    assert!(page.body.contains("Failed to load projects"));
    assert!(page.data.is_none());
}

// === Static Directory Tests ===

#[tokio::test]
async fn test_static_site_under_base_path() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("projects.yaml"), PROJECTS_YAML).unwrap();

    let client = FetchClient::new(StaticDirFetcher::new(dir.path()).with_mount("/portfolio"))
        .with_base_path("/portfolio");
    let event = LoadEvent::new(client, ProjectsPage::ROUTE);

    let data = ProjectsLoader::new().load(&event).await.unwrap();
    assert_eq!(data.len(), 3);
    assert_eq!(data.projects[2].title, "Gamma");
}

#[tokio::test]
async fn test_static_site_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let sink = MemorySink::new();
    let client = FetchClient::new(StaticDirFetcher::new(dir.path()));
    let event = LoadEvent::new(client, ProjectsPage::ROUTE).with_log_sink(Arc::new(sink.clone()));

    let page = ProjectsPage::default().render(&event).await;

    assert_eq!(page.status, 500);
    assert_eq!(sink.entries_at(LogLevel::Error).len(), 1);
}
