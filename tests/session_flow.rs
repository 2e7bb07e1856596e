//! Integration test for a full learning path session.
//!
//! Drives the real handlers and adapters end to end: open a session,
//! save inputs, build a step checklist, favorite and review resources,
//! save the learning path, and export the PDF report.

use std::sync::Arc;

use learnpath::adapters::http::SessionRegistry;
use learnpath::adapters::report::PdfReportRenderer;
use learnpath::adapters::storage::JsonSnapshotStore;
use learnpath::application::handlers::{ApplyActionHandler, ExportReportHandler};
use learnpath::domain::catalog::Catalog;
use learnpath::domain::session::{Action, SessionView};
use learnpath::ports::SnapshotStore;

use tempfile::TempDir;

#[tokio::test]
async fn full_session_flow() {
    let temp_dir = TempDir::new().unwrap();
    let snapshot_path = temp_dir.path().join("user_data.json");

    let catalog = Catalog::builtin();
    let registry = SessionRegistry::new();
    let snapshot_store = Arc::new(JsonSnapshotStore::new(&snapshot_path));
    let apply_handler = ApplyActionHandler::new(catalog, snapshot_store.clone());
    let report_handler = ExportReportHandler::new(Arc::new(PdfReportRenderer::new()));

    // Open a session: tutorial shows, nothing else yet.
    let id = registry.open().await;
    let view = registry
        .read(id, |s| SessionView::render(s, catalog, ""))
        .await
        .unwrap();
    assert!(view.show_tutorial);
    assert!(view.resources.is_empty());
    assert!(view.steps.is_empty());

    registry
        .apply(id, Action::DismissTutorial, &apply_handler)
        .await
        .unwrap();

    // Save inputs: resources for the chosen field pair appear.
    registry
        .apply(
            id,
            Action::SaveInputs {
                interests: vec!["Programming".to_string(), "Reading".to_string()],
                main_field: "Programming".to_string(),
                sub_field: "Python".to_string(),
                goal: "Learn a new skill".to_string(),
            },
            &apply_handler,
        )
        .await
        .unwrap();

    let view = registry
        .read(id, |s| SessionView::render(s, catalog, ""))
        .await
        .unwrap();
    assert!(!view.show_tutorial);
    assert!(!view.resources.is_empty());
    assert_eq!(view.user_data.goal, "Learn a new skill");

    // Initialize the checklist from the goal, then edit it.
    registry
        .apply(
            id,
            Action::InitSteps {
                goal: "Learn a new skill".to_string(),
            },
            &apply_handler,
        )
        .await
        .unwrap();
    registry
        .apply(
            id,
            Action::AddStep {
                text: "Join a study group".to_string(),
            },
            &apply_handler,
        )
        .await
        .unwrap();
    registry
        .apply(id, Action::RemoveLastStep, &apply_handler)
        .await
        .unwrap();

    let view = registry
        .read(id, |s| SessionView::render(s, catalog, ""))
        .await
        .unwrap();
    assert_eq!(view.steps.len(), 5);
    assert_eq!(view.steps[0].index, 1);

    // Favorite and review the first recommended resource.
    let first = catalog.lookup("Programming", "Python")[0].clone();
    let title = first.title.clone();
    registry
        .apply(
            id,
            Action::ToggleFavorite { resource: first },
            &apply_handler,
        )
        .await
        .unwrap();
    registry
        .apply(
            id,
            Action::SubmitReview {
                title: title.clone(),
                text: "Exactly what I needed".to_string(),
            },
            &apply_handler,
        )
        .await
        .unwrap();

    let view = registry
        .read(id, |s| SessionView::render(s, catalog, ""))
        .await
        .unwrap();
    let shown = view.resources.iter().find(|r| r.title == title).unwrap();
    assert!(shown.favorite);
    assert_eq!(shown.reviews, ["Exactly what I needed"]);
    assert_eq!(view.favorites.len(), 1);

    // Save the learning path: user data is snapshotted to disk.
    let applied = registry
        .apply(id, Action::SaveLearningPath, &apply_handler)
        .await
        .unwrap();
    assert!(applied.outcome.is_changed());
    assert!(applied.snapshot_error.is_none());

    let persisted = snapshot_store.load().await.unwrap().unwrap();
    assert_eq!(persisted.main_field, "Programming");
    assert_eq!(persisted.learning_path.as_ref().unwrap().len(), 5);

    // Export the report: a PDF carrying the saved data.
    let user_data = registry.user_data(id).await.unwrap();
    let export = report_handler.handle(&user_data).unwrap();
    assert_eq!(export.file_name, "learning_path_report.pdf");
    assert_eq!(export.mime, "application/pdf");
    assert!(export.bytes.starts_with(b"%PDF"));

    // Close the session: its state is gone.
    assert!(registry.close(id).await);
    assert!(registry.user_data(id).await.is_err());
}

#[tokio::test]
async fn reset_all_clears_session_but_keeps_tutorial_dismissed() {
    let catalog = Catalog::builtin();
    let registry = SessionRegistry::new();
    let apply_handler = ApplyActionHandler::new(
        catalog,
        Arc::new(learnpath::adapters::storage::InMemorySnapshotStore::new()),
    );

    let id = registry.open().await;
    registry
        .apply(id, Action::DismissTutorial, &apply_handler)
        .await
        .unwrap();
    registry
        .apply(
            id,
            Action::SaveInputs {
                interests: vec!["Cooking".to_string()],
                main_field: "Cooking".to_string(),
                sub_field: "Baking".to_string(),
                goal: "Improve fitness".to_string(),
            },
            &apply_handler,
        )
        .await
        .unwrap();

    registry
        .apply(id, Action::ResetAll, &apply_handler)
        .await
        .unwrap();

    let view = registry
        .read(id, |s| SessionView::render(s, catalog, ""))
        .await
        .unwrap();
    assert!(view.user_data.main_field.is_empty());
    assert!(view.steps.is_empty());
    assert!(view.resources.is_empty());
    assert!(!view.show_tutorial);
}

#[tokio::test]
async fn search_query_narrows_rendered_resources() {
    let catalog = Catalog::builtin();
    let registry = SessionRegistry::new();
    let apply_handler = ApplyActionHandler::new(
        catalog,
        Arc::new(learnpath::adapters::storage::InMemorySnapshotStore::new()),
    );

    let id = registry.open().await;
    registry
        .apply(
            id,
            Action::SaveInputs {
                interests: vec!["Programming".to_string()],
                main_field: "Programming".to_string(),
                sub_field: "Python".to_string(),
                goal: "Learn a new skill".to_string(),
            },
            &apply_handler,
        )
        .await
        .unwrap();

    let all = registry
        .read(id, |s| SessionView::render(s, catalog, ""))
        .await
        .unwrap();
    let narrowed = registry
        .read(id, |s| SessionView::render(s, catalog, "crash course"))
        .await
        .unwrap();

    assert!(narrowed.resources.len() < all.resources.len());
    for r in &narrowed.resources {
        assert!(r.title.to_lowercase().contains("crash course"));
    }
}
