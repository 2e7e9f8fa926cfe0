use std::fs;
use std::path::{Path, PathBuf};

use flash_core::model::{Language, WordPair};
use services::{AppServices, DoneReason, ManualScheduler, SessionController, SessionState};

struct Fixture {
    _dir: tempfile::TempDir,
    progress_file: PathBuf,
    services: AppServices,
}

fn fixture(table: &str) -> Fixture {
    let dir = tempfile::tempdir().expect("tempdir");
    let assets = dir.path().join("assets");
    fs::create_dir_all(&assets).unwrap();
    fs::write(assets.join("french_words.csv"), table).unwrap();
    let progress = dir.path().join("progress");
    Fixture {
        progress_file: progress.join("words_to_learn_french.json"),
        services: AppServices::files(assets, progress),
        _dir: dir,
    }
}

fn session(services: &AppServices) -> SessionController {
    services
        .new_session(Box::new(ManualScheduler::new()))
        .with_seed(11)
}

fn saved_words(path: &Path) -> Vec<serde_json::Value> {
    let content = fs::read_to_string(path).unwrap();
    serde_json::from_str(&content).unwrap()
}

const TABLE: &str = "French,English\nchat,cat\nchien,dog\n";

#[test]
fn fresh_start_shows_two_of_two() {
    let fx = fixture(TABLE);
    let mut controller = session(&fx.services);

    controller.start(Language::French);

    assert_eq!(controller.remaining_count(), 2);
    assert_eq!(controller.progress().to_string(), "2 / 2");
    assert!(fx.progress_file.exists());
}

#[test]
fn mark_known_persists_the_other_word() {
    let fx = fixture(TABLE);
    let mut controller = session(&fx.services);
    controller.start(Language::French);

    let known = controller.current_card().cloned().unwrap();
    controller.mark_known().unwrap();

    let other = if known.source().as_str() == "chat" {
        WordPair::parse("chien", "dog").unwrap()
    } else {
        WordPair::parse("chat", "cat").unwrap()
    };
    assert_eq!(controller.remaining(), &[other.clone()][..]);

    let saved = saved_words(&fx.progress_file);
    assert_eq!(
        saved,
        vec![serde_json::json!({
            "French": other.source().as_str(),
            "English": other.target().as_str(),
        })]
    );
}

#[test]
fn learning_everything_stays_done_across_restarts() {
    let fx = fixture(TABLE);
    let mut controller = session(&fx.services);
    controller.start(Language::French);

    controller.mark_known().unwrap();
    controller.mark_known().unwrap();
    assert_eq!(
        controller.state(),
        &SessionState::Done {
            reason: DoneReason::AllLearned
        }
    );
    assert!(saved_words(&fx.progress_file).is_empty());

    let mut again = session(&fx.services);
    again.start(Language::French);
    assert_eq!(
        again.state(),
        &SessionState::Done {
            reason: DoneReason::AllLearned
        }
    );
    assert_eq!(again.progress().to_string(), "0 / 2");
}

#[test]
fn reset_deletes_file_and_restores_full_table() {
    let fx = fixture(TABLE);
    let mut controller = session(&fx.services);
    controller.start(Language::French);
    controller.mark_known().unwrap();

    controller.reset().unwrap();

    assert!(!fx.progress_file.exists());
    assert_eq!(controller.remaining_count(), 2);
    assert!(controller.state().is_showing());
    assert_eq!(controller.notice(), None);
}

#[test]
fn malformed_progress_loads_as_empty() {
    let fx = fixture(TABLE);
    fs::create_dir_all(fx.progress_file.parent().unwrap()).unwrap();
    fs::write(&fx.progress_file, "{ not json").unwrap();

    let remaining = fx.services.store().load_remaining(Language::French).unwrap();
    assert!(remaining.is_empty());

    let mut controller = session(&fx.services);
    controller.start(Language::French);
    assert!(controller.state().is_done());
}
