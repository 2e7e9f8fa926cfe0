use flash_core::model::{Language, RawWordRecord};
use storage::InMemoryBackend;

use super::test_harness::{ViewKind, setup_view_harness};

fn french() -> InMemoryBackend {
    InMemoryBackend::new().with_table(Language::French, [("chat", "cat"), ("chien", "dog")])
}

#[test]
fn home_view_lists_languages_with_progress() {
    let backend = french();
    backend.insert_progress(
        Language::French,
        vec![RawWordRecord::new(Some("chat".into()), Some("cat".into()))],
    );
    let mut harness = setup_view_harness(ViewKind::Home, backend);

    harness.rebuild();
    let html = harness.render();
    for label in ["French", "Spanish", "German", "Italian"] {
        assert!(html.contains(label), "missing {label} in {html}");
    }
    assert!(html.contains("1 / 2 left"), "missing progress in {html}");
    assert!(html.contains("Unavailable"), "missing unavailable tile in {html}");
}

#[test]
fn prompt_view_asks_to_continue() {
    let backend = french();
    backend.insert_progress(
        Language::French,
        vec![RawWordRecord::new(Some("chien".into()), Some("dog".into()))],
    );
    let mut harness = setup_view_harness(ViewKind::Prompt(Language::French), backend);

    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("You have 1 / 2 words left in French"),
        "missing prompt in {html}"
    );
    assert!(html.contains("Continue"), "missing continue in {html}");
    assert!(html.contains("Reset Progress"), "missing reset in {html}");
}

#[tokio::test]
async fn cards_view_shows_front_of_a_card() {
    let mut harness = setup_view_harness(ViewKind::Cards(Language::French), french());

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Words remaining: 2 / 2"), "missing progress in {html}");
    assert!(
        html.contains("chat") || html.contains("chien"),
        "missing term in {html}"
    );
    assert!(html.contains("card--front"), "missing front face in {html}");
    assert!(harness.backend.progress(Language::French).is_some());
}

#[test]
fn cards_view_reports_missing_table() {
    let mut harness = setup_view_harness(ViewKind::Cards(Language::Italian), french());

    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Cannot load language Italian"),
        "missing error in {html}"
    );
}
