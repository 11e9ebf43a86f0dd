//! Console view models driven through the HTTP client against an
//! in-process catalog server.

use std::sync::Arc;
use std::time::Duration;

use aicatch_console::{
    AdminPanel, BrowseView, CatalogApi, ConsoleError, HttpCatalogClient, ImportOutcome,
    ImportPanel, ItemOutcome, Severity,
};
use aicatch_registry::ToolRepository;
use aicatch_store_sqlite::SqliteToolRepository;
use aicatch_transport_http::{server, AccessControl, AppState};
use aicatch_types::{AccessPolicy, ToolFields, ToolId};
use tokio::net::TcpListener;

async fn spawn_server(access: AccessControl) -> (String, Arc<SqliteToolRepository>) {
    let repo = Arc::new(SqliteToolRepository::open_in_memory().expect("db"));
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let state = AppState::new(repo.clone()).with_access(access);
    tokio::spawn(server::serve(listener, state));
    (format!("http://{addr}"), repo)
}

fn client(base_url: &str, token: Option<&str>) -> Arc<HttpCatalogClient> {
    Arc::new(
        HttpCatalogClient::new(base_url, token.map(String::from), Duration::from_secs(5))
            .expect("client"),
    )
}

#[tokio::test]
async fn import_creates_complete_entries_and_skips_the_rest() {
    let (url, repo) = spawn_server(AccessControl::open()).await;
    let mut panel = ImportPanel::new(client(&url, None));
    panel.input =
        r#"[{"name":"A","category":"B","description":"C","link":"D"},{"category":"C"}]"#.into();

    let outcome = panel.import().await.expect("import");
    let ImportOutcome::Completed(report) = outcome else {
        panic!("expected a completed import");
    };
    assert!(report.is_success());
    assert_eq!(report.created(), 1);
    assert_eq!(report.skipped(), 1);
    assert!(matches!(&report.items[0], ItemOutcome::Created(t) if t.name == "A"));

    let notice = panel.notice().expect("notice");
    assert_eq!(notice.message, "Tools imported successfully!");
    assert_eq!(notice.severity, Severity::Success);
    assert!(!panel.is_submitting());

    let stored = repo.list().await.expect("list");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].fields(), ToolFields::new("A", "B", "C", "D"));
}

#[tokio::test]
async fn importing_an_empty_array_is_not_a_success() {
    let (url, repo) = spawn_server(AccessControl::open()).await;
    let mut panel = ImportPanel::new(client(&url, None));
    panel.input = "[]".into();

    assert_eq!(panel.import().await.expect("import"), ImportOutcome::Nothing);
    let notice = panel.notice().expect("notice");
    assert_eq!(notice.message, "No tools to import.");
    assert_ne!(notice.severity, Severity::Success);
    assert_eq!(repo.count().await.expect("count"), 0);
}

#[tokio::test]
async fn import_of_non_array_reports_failure() {
    let (url, _repo) = spawn_server(AccessControl::open()).await;
    let mut panel = ImportPanel::new(client(&url, None));
    panel.input = r#"{"name":"A"}"#.into();

    let err = panel.import().await.unwrap_err();
    assert!(matches!(err, ConsoleError::Validation(_)));
    assert_eq!(
        panel.notice().expect("notice").message,
        "Import failed: Invalid JSON: Must be an array of tools."
    );
}

#[tokio::test]
async fn browse_filters_loaded_catalog() {
    let (url, _repo) = spawn_server(AccessControl::open()).await;
    let api = client(&url, None);
    api.create(&ToolFields::new("Alpha", "X", "first", "https://a.example"))
        .await
        .expect("create");
    api.create(&ToolFields::new("Beta", "Y", "second", "https://b.example"))
        .await
        .expect("create");

    let mut view = BrowseView::new(api);
    view.load().await.expect("load");
    assert_eq!(view.categories(), vec!["All", "X", "Y"]);

    view.set_search("al");
    let names: Vec<&str> = view.visible().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha"]);

    view.set_search("");
    view.set_category("Y");
    let names: Vec<&str> = view.visible().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Beta"]);
}

#[tokio::test]
async fn admin_round_trip_over_http() {
    let (url, repo) = spawn_server(AccessControl::open()).await;
    let mut panel = AdminPanel::new(client(&url, None));
    panel.load().await.expect("load");
    assert!(panel.tools().is_empty());

    panel.form = ToolFields::new("Keep", "A", "stays", "https://k.example");
    let keep = panel.submit().await.expect("create keep");
    panel.form = ToolFields::new("Drop", "A", "goes", "https://d.example");
    let dropped = panel.submit().await.expect("create drop");
    assert_eq!(panel.tools().len(), 2);

    panel.begin_edit(&dropped.id).expect("edit");
    panel.form.description = "still goes".into();
    let edited = panel.submit().await.expect("update");
    assert_eq!(edited.id, dropped.id);
    assert_eq!(panel.tools()[1].description, "still goes");

    panel.exclude_name = "Keep".into();
    assert_eq!(panel.delete_all().await.expect("delete all"), 1);
    assert_eq!(panel.tools().len(), 1);

    let stored = repo.list().await.expect("list");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, keep.id);

    panel.reconcile().await.expect("reconcile");
    assert_eq!(panel.tools(), stored.as_slice());
}

#[tokio::test]
async fn delete_selected_over_http() {
    let (url, repo) = spawn_server(AccessControl::open()).await;
    let api = client(&url, None);
    for name in ["a", "b", "c"] {
        api.create(&ToolFields::new(name, "Cat", "d", "https://x.example"))
            .await
            .expect("create");
    }
    let mut panel = AdminPanel::new(api).with_concurrency(2);
    panel.load().await.expect("load");
    panel.select_all(true);
    let survivor = panel.tools()[0].id.clone();
    panel.toggle_selected(&survivor);

    let report = panel.delete_selected(|_| true).await.expect("delete");
    assert!(report.is_success());
    assert_eq!(report.succeeded.len(), 2);

    let stored = repo.list().await.expect("list");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, survivor);
}

#[tokio::test]
async fn missing_tool_maps_to_not_found() {
    let (url, _repo) = spawn_server(AccessControl::open()).await;
    let api = client(&url, None);
    let id = ToolId::new("ghost").expect("id");
    assert!(matches!(api.get(&id).await, Err(ConsoleError::NotFound)));
    assert!(matches!(api.delete(&id).await, Err(ConsoleError::NotFound)));
}

#[tokio::test]
async fn ids_with_query_characters_address_no_other_tool() {
    let (url, repo) = spawn_server(AccessControl::open()).await;
    let stored = repo
        .create(&ToolFields::new("X", "Y", "Z", "https://x.example").into())
        .await
        .expect("seed");
    let api = client(&url, None);

    for suffix in ["?x", "#x", "/x"] {
        let id = ToolId::new(format!("{}{suffix}", stored.id)).unwrap();
        assert!(matches!(api.get(&id).await, Err(ConsoleError::NotFound)));
        assert!(matches!(
            api.update(&id, &ToolFields::new("A", "B", "C", "D")).await,
            Err(ConsoleError::NotFound)
        ));
        assert!(matches!(api.delete(&id).await, Err(ConsoleError::NotFound)));
    }

    let left = repo.list().await.expect("list");
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].fields(), ToolFields::new("X", "Y", "Z", "https://x.example"));
}

#[tokio::test]
async fn protected_server_needs_token_for_mutations() {
    let access = AccessControl::new(AccessPolicy::ProtectMutations, Some("s3cret".into()));
    let (url, _repo) = spawn_server(access).await;
    let fields = ToolFields::new("A", "B", "C", "https://d.example");

    let anonymous = client(&url, None);
    assert!(anonymous.list().await.expect("list").is_empty());
    match anonymous.create(&fields).await {
        Err(ConsoleError::Http { status, message }) => {
            assert_eq!(status, 401);
            assert_eq!(message, "Unauthorized");
        }
        other => panic!("expected 401, got {other:?}"),
    }

    let authorized = client(&url, Some("s3cret"));
    let tool = authorized.create(&fields).await.expect("create");
    assert_eq!(tool.name, "A");
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let api = client(&format!("http://{addr}"), None);
    assert!(matches!(api.list().await, Err(ConsoleError::Transport(_))));
}
