//! Unit tests for manifest generation and writing.

use super::*;
use crate::fetch::MockRemoteFetcher;
use crate::test_utils::{StubFetcher, single_entry_catalog};
use camino::Utf8PathBuf;
use mockall::predicate::eq;
use std::collections::HashSet;

const DIGEST: &str = "8b0cbe1d0c2b3e8e4e12e2b4f87f1bd5e0a8a0f1";

fn temp_dir() -> (tempfile::TempDir, Utf8PathBuf) {
    let temp = tempfile::tempdir().expect("temp dir");
    let path = Utf8PathBuf::try_from(temp.path().to_path_buf()).expect("UTF-8 path");
    (temp, path)
}

#[test]
fn one_record_per_supported_pair() {
    let catalog = Catalog::openjfx();
    let fetcher = StubFetcher::new(DIGEST);

    let manifest = generate(&catalog, "17", &fetcher).expect("generation succeeds");

    assert_eq!(manifest.record_count(), catalog.artifact_count());
    assert_eq!(fetcher.call_count(), catalog.artifact_count());
    let mut seen = HashSet::new();
    for entry in manifest.platforms() {
        for record in &entry.records {
            assert!(
                seen.insert((entry.platform.clone(), record.artifact_id.clone())),
                "duplicate record for {} {}",
                entry.platform,
                record.artifact_id
            );
        }
    }
}

#[test]
fn platforms_and_modules_follow_catalog_order() {
    let catalog = Catalog::openjfx();
    let manifest = generate(&catalog, "17", &StubFetcher::new(DIGEST)).expect("generation");

    let platforms: Vec<&str> = manifest
        .platforms()
        .iter()
        .map(|entry| entry.platform.as_str())
        .collect();
    let expected: Vec<&str> = catalog.platforms().iter().map(|p| p.name()).collect();
    assert_eq!(platforms, expected);

    let arm32: Vec<&str> = manifest
        .records_for("linux-arm32")
        .expect("arm32 present")
        .iter()
        .map(|r| r.module.as_str())
        .collect();
    assert_eq!(
        arm32,
        ["javafx.base", "javafx.graphics", "javafx.controls", "javafx.fxml"]
    );
}

#[test]
fn record_fields_come_from_coordinates_and_digest() {
    let catalog = single_entry_catalog();
    let mut fetcher = MockRemoteFetcher::new();
    fetcher
        .expect_fetch_text()
        .with(eq(
            "https://repo.example.test/maven2/org/openjfx/javafx-base/17/javafx-base-17-linux.jar.sha1",
        ))
        .times(1)
        .returning(|_| Ok(format!("{DIGEST}\n")));

    let manifest = generate(&catalog, "17", &fetcher).expect("generation succeeds");

    let records = manifest.records_for("linux-x86_64").expect("platform present");
    assert_eq!(
        records,
        [ModuleArtifactRecord {
            module: "javafx.base".to_owned(),
            group_id: "org.openjfx".to_owned(),
            artifact_id: "javafx-base".to_owned(),
            version: "17".to_owned(),
            classifier: "linux".to_owned(),
            digest: format!("{DIGEST}\n"),
        }]
    );
}

#[test]
fn first_fetch_failure_aborts_generation() {
    let catalog = Catalog::openjfx();
    let failing =
        "https://repo1.maven.org/maven2/org/openjfx/javafx-web/17/javafx-web-17-mac.jar.sha1";
    let fetcher = StubFetcher::new(DIGEST).failing_on(failing);

    let err = generate(&catalog, "17", &fetcher).expect_err("generation fails");

    assert_eq!(err.url(), failing);
    assert_eq!(fetcher.calls().last().map(String::as_str), Some(failing));
    assert!(fetcher.call_count() < catalog.artifact_count());
}

#[test]
fn serialized_keys_keep_record_field_order() {
    let manifest = generate(&single_entry_catalog(), "17", &StubFetcher::new("abc"))
        .expect("generation succeeds");
    let json = manifest.to_json().expect("serializes");
    let expected = concat!(
        "{\n",
        "  \"linux-x86_64\": [\n",
        "    {\n",
        "      \"module\": \"javafx.base\",\n",
        "      \"groupId\": \"org.openjfx\",\n",
        "      \"artifactId\": \"javafx-base\",\n",
        "      \"version\": \"17\",\n",
        "      \"classifier\": \"linux\",\n",
        "      \"sha1\": \"abc\"\n",
        "    }\n",
        "  ]\n",
        "}",
    );
    assert_eq!(json, expected);
}

#[test]
fn empty_manifest_serializes_as_empty_object() {
    assert_eq!(Manifest::default().to_json().expect("serializes"), "{}");
}

#[test]
fn write_creates_parent_directories() {
    let (_temp, root) = temp_dir();
    let path = root.join("HMCL").join("build").join("openjfx-dependencies.json");
    let manifest = generate(&single_entry_catalog(), "17", &StubFetcher::new(DIGEST))
        .expect("generation succeeds");

    write_manifest(&manifest, &path).expect("write succeeds");

    let written = std::fs::read_to_string(&path).expect("manifest readable");
    assert_eq!(written, manifest.to_json().expect("serializes"));
}

#[test]
fn write_overwrites_existing_file() {
    let (_temp, root) = temp_dir();
    let path = root.join("openjfx-dependencies.json");
    std::fs::write(&path, "stale content that is longer than the new manifest ".repeat(20))
        .expect("seed file");
    let manifest = generate(&single_entry_catalog(), "17", &StubFetcher::new(DIGEST))
        .expect("generation succeeds");

    write_manifest(&manifest, &path).expect("write succeeds");

    let written = std::fs::read_to_string(&path).expect("manifest readable");
    assert!(written.starts_with('{'));
    assert!(!written.contains("stale"));
}

#[test]
fn write_reports_path_when_parent_is_a_file() {
    let (_temp, root) = temp_dir();
    let blocker = root.join("occupied");
    std::fs::write(&blocker, b"file").expect("seed blocker");
    let path = blocker.join("manifest.json");

    let err = write_manifest(&Manifest::default(), &path).expect_err("write fails");

    match err {
        ManifestWriteError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}
