use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn write_project(projects: &Path, name: &str, settings: &str) -> PathBuf {
    let folder = projects.join(name);
    fs::create_dir_all(&folder).expect("mkdir project");
    let path = folder.join("settings.yaml");
    fs::write(&path, settings).expect("write settings");
    path
}

fn folio(tmp: &Path, projects: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("folio");
    cmd.current_dir(tmp)
        .env("FOLIO_PROJECTS_DIR", projects)
        .env("FOLIO_CONFIG_PATH", tmp.join("no-such-folio.toml"));
    cmd
}

#[test]
fn migrate_tags_merges_legacy_fields_into_sorted_tags() {
    let tmp = tempdir().expect("tempdir");
    let projects = tmp.path().join("projects");
    let settings = write_project(
        &projects,
        "alpha",
        "title: Alpha\ntags: [a]\ntechnologies: [b]\nbuiltWith: [a, c]\n",
    );

    folio(tmp.path(), &projects)
        .arg("migrate-tags")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Migrating alpha...")
                .and(predicate::str::contains("migrated=1")),
        );

    let rewritten = fs::read_to_string(&settings).expect("read rewritten");
    assert!(rewritten.starts_with("# Alpha\n\n"));
    assert!(rewritten.contains("tags:\n- a\n- b\n- c\n"));
    assert!(!rewritten.contains("technologies"));
    assert!(!rewritten.contains("builtWith"));
}

#[test]
fn migrate_tags_leaves_a_migrated_tree_untouched() {
    let tmp = tempdir().expect("tempdir");
    let projects = tmp.path().join("projects");
    let settings = write_project(&projects, "alpha", "title: Alpha\ntags: [a, b]\n");
    let before = fs::read_to_string(&settings).expect("read before");

    folio(tmp.path(), &projects)
        .arg("migrate-tags")
        .assert()
        .success()
        .stdout(predicate::str::contains("migrated=0"));

    let after = fs::read_to_string(&settings).expect("read after");
    assert_eq!(before, after, "clean tree must be byte-for-byte untouched");
}

#[test]
fn migrate_tags_continues_past_an_unparseable_settings_file() {
    let tmp = tempdir().expect("tempdir");
    let projects = tmp.path().join("projects");
    write_project(&projects, "broken", "title: [unclosed\n");
    let fine = write_project(&projects, "fine", "technologies: [rust]\n");

    folio(tmp.path(), &projects)
        .arg("migrate-tags")
        .assert()
        .success()
        .stdout(predicate::str::contains("migrated=1"))
        .stderr(
            predicate::str::contains("FOLIO_WARN code=SETTINGS_PARSE")
                .and(predicate::str::contains("issue:")),
        );

    let rewritten = fs::read_to_string(&fine).expect("read fine");
    assert!(rewritten.contains("tags:\n- rust\n"));
}

#[test]
fn migrate_tags_dry_run_reports_without_writing() {
    let tmp = tempdir().expect("tempdir");
    let projects = tmp.path().join("projects");
    let settings = write_project(&projects, "alpha", "technologies: [rust]\n");

    folio(tmp.path(), &projects)
        .args(["migrate-tags", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would migrate alpha"));

    let untouched = fs::read_to_string(&settings).expect("read untouched");
    assert_eq!(untouched, "technologies: [rust]\n");
}

#[test]
fn migrate_tags_reports_a_missing_projects_dir_without_failing() {
    let tmp = tempdir().expect("tempdir");
    let projects = tmp.path().join("nowhere");

    folio(tmp.path(), &projects)
        .arg("migrate-tags")
        .assert()
        .success()
        .stderr(predicate::str::contains("projects dir does not exist"));
}

#[test]
fn migrate_tags_honors_a_projects_dir_flag_over_env() {
    let tmp = tempdir().expect("tempdir");
    let env_projects = tmp.path().join("env-projects");
    fs::create_dir_all(&env_projects).expect("mkdir env projects");
    let flag_projects = tmp.path().join("flag-projects");
    let settings = write_project(&flag_projects, "alpha", "builtWith: [axum]\n");

    folio(tmp.path(), &env_projects)
        .args(["migrate-tags", "--projects-dir"])
        .arg(&flag_projects)
        .assert()
        .success()
        .stdout(predicate::str::contains("migrated=1"));

    let rewritten = fs::read_to_string(&settings).expect("read rewritten");
    assert!(rewritten.contains("tags:\n- axum\n"));
}
