use assert_cmd::Command;
use predicates::prelude::*;

fn edudesk(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("edudesk").unwrap();
    cmd.env("EDUDESK_HOME", home);
    cmd
}

#[test]
fn topics_on_a_fresh_store_shows_the_seed_catalog() {
    let temp_dir = tempfile::tempdir().unwrap();

    edudesk(temp_dir.path())
        .arg("topics")
        .assert()
        .success()
        .stdout(predicates::str::contains("Mathematics"))
        .stdout(predicates::str::contains("Algebra"))
        .stdout(predicates::str::contains("Physics"))
        .stdout(predicates::str::contains("no content"));
}

#[test]
fn upload_generates_all_three_views() {
    let temp_dir = tempfile::tempdir().unwrap();
    let source = temp_dir.path().join("chapter1.txt");
    std::fs::write(&source, "raw chapter source").unwrap();

    edudesk(temp_dir.path())
        .arg("upload")
        .arg("1")
        .arg(source.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicates::str::contains("Uploaded 'chapter1'"))
        .stdout(predicates::str::contains("Algebra"));

    // Book view is derived from the upload.
    edudesk(temp_dir.path())
        .arg("show")
        .arg("1")
        .arg("--raw")
        .assert()
        .success()
        .stdout(predicates::str::contains("Chapter Overview"));

    // So is the question bank.
    edudesk(temp_dir.path())
        .args(["show", "1", "-k", "question-bank", "--raw"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Practice Questions"));

    // And the sidebar reflects it.
    edudesk(temp_dir.path())
        .arg("topics")
        .assert()
        .success()
        .stdout(predicates::str::contains("3/3 uploaded"));
}

#[test]
fn scripted_edit_round_trips_through_the_store() {
    let temp_dir = tempfile::tempdir().unwrap();

    edudesk(temp_dir.path())
        .args(["edit", "2", "--no-editor", "--content", "# Hand-written\n\nCustom body."])
        .assert()
        .success()
        .stdout(predicates::str::contains("Content saved"));

    edudesk(temp_dir.path())
        .args(["show", "2", "--raw"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Custom body."));
}

#[test]
fn reset_returns_the_view_to_the_upload_prompt() {
    let temp_dir = tempfile::tempdir().unwrap();
    let source = temp_dir.path().join("mechanics.txt");
    std::fs::write(&source, "src").unwrap();

    edudesk(temp_dir.path())
        .args(["upload", "3"])
        .arg(source.to_str().unwrap())
        .assert()
        .success();

    edudesk(temp_dir.path())
        .args(["reset", "3"])
        .assert()
        .success()
        .stdout(predicates::str::contains("upload prompt"));

    edudesk(temp_dir.path())
        .args(["show", "3", "--raw"])
        .assert()
        .success()
        .stdout(predicates::str::contains("No chapter uploaded yet"));
}

#[test]
fn show_reports_a_load_failure_distinctly() {
    let temp_dir = tempfile::tempdir().unwrap();
    // A corrupt metadata index makes every read fail without being fatal.
    std::fs::write(temp_dir.path().join("records.json"), "{ not json").unwrap();

    edudesk(temp_dir.path())
        .args(["show", "1", "--raw"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Content failed to load"))
        .stdout(predicates::str::contains("Error loading content"))
        .stdout(predicates::str::contains("No chapter uploaded yet").not());
}

#[test]
fn users_search_filters_the_directory() {
    let temp_dir = tempfile::tempdir().unwrap();

    edudesk(temp_dir.path())
        .args(["users", "jane"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Jane Smith"))
        .stdout(predicates::str::contains("John Doe").not());

    edudesk(temp_dir.path())
        .arg("users")
        .assert()
        .success()
        .stdout(predicates::str::contains("Michael Wilson"));
}

#[test]
fn show_on_an_untouched_subtopic_offers_the_upload_prompt() {
    let temp_dir = tempfile::tempdir().unwrap();

    edudesk(temp_dir.path())
        .args(["show", "4", "--raw"])
        .assert()
        .success()
        .stdout(predicates::str::contains("No chapter uploaded yet"))
        .stdout(predicates::str::contains("No content available"));
}

#[test]
fn config_round_trips_default_kind() {
    let temp_dir = tempfile::tempdir().unwrap();

    edudesk(temp_dir.path())
        .args(["config", "default-kind", "ai-notes"])
        .assert()
        .success()
        .stdout(predicates::str::contains("default-kind set to ai-notes"));

    edudesk(temp_dir.path())
        .args(["config", "default-kind"])
        .assert()
        .success()
        .stdout(predicates::str::contains("ai-notes"));
}
