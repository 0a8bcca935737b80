//! Behaviour-driven tests for build configuration loading.

use camino::Utf8PathBuf;
use hmcl_build::config::BuildConfig;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tempfile::TempDir;

struct ConfigWorld {
    temp: TempDir,
    source: Option<String>,
    missing_file: bool,
    result: Option<Result<BuildConfig, String>>,
}

impl ConfigWorld {
    fn config_path(&self) -> Utf8PathBuf {
        Utf8PathBuf::try_from(self.temp.path().join("hmcl-build.toml")).expect("UTF-8 path")
    }

    fn config(&self) -> &BuildConfig {
        match self.result.as_ref() {
            Some(Ok(config)) => config,
            Some(Err(error)) => panic!("expected configuration loading to succeed: {error}"),
            None => panic!("configuration should be loaded"),
        }
    }
}

#[fixture]
fn world() -> ConfigWorld {
    ConfigWorld {
        temp: tempfile::tempdir().expect("temp dir"),
        source: None,
        missing_file: false,
        result: None,
    }
}

#[given("no configuration file is provided")]
fn no_file(world: &mut ConfigWorld) {
    world.source = None;
    world.missing_file = false;
}

#[given("the configuration sets the toolkit version to \"{version}\"")]
fn override_version(world: &mut ConfigWorld, version: String) {
    world.source = Some(format!("[toolkit]\nversion = \"{version}\"\n"));
}

#[given("the configuration includes unknown fields")]
fn unknown_fields(world: &mut ConfigWorld) {
    world.source = Some(
        concat!(
            "unexpected = true\n",
            "[toolkit]\n",
            "version = \"17\"\n",
        )
        .to_owned(),
    );
}

#[given("the configuration path points at a missing file")]
fn missing_file(world: &mut ConfigWorld) {
    world.missing_file = true;
}

#[when("the build configuration is loaded")]
fn load(world: &mut ConfigWorld) {
    let path = world.config_path();
    let outcome = match (&world.source, world.missing_file) {
        (Some(source), _) => {
            std::fs::write(&path, source).expect("write configuration");
            BuildConfig::load(Some(&path))
        }
        (None, true) => BuildConfig::load(Some(&path)),
        (None, false) => Ok(BuildConfig::default()),
    };
    world.result = Some(outcome.map_err(|err| err.to_string()));
}

#[then("the toolkit version is \"{expected}\"")]
fn assert_version(world: &mut ConfigWorld, expected: String) {
    assert_eq!(world.config().toolkit.version, expected);
}

#[then("the translation gate is \"{expected}\"")]
fn assert_gate(world: &mut ConfigWorld, expected: String) {
    assert_eq!(world.config().translations.gate, expected);
}

#[then("{count} mirror is configured")]
fn assert_mirror_count(world: &mut ConfigWorld, count: usize) {
    assert_eq!(world.config().toolkit.mirrors.len(), count);
}

#[then("a configuration error mentioning \"{snippet}\" is reported")]
fn assert_error(world: &mut ConfigWorld, snippet: String) {
    match world.result.as_ref() {
        Some(Err(error)) => assert!(
            error.contains(&snippet),
            "expected error '{error}' to mention '{snippet}'"
        ),
        Some(Ok(config)) => {
            panic!("expected configuration loading to fail but succeeded with {config:?}")
        }
        None => panic!("configuration should be loaded"),
    }
}

#[scenario(
    path = "tests/features/config_loading.feature",
    name = "Defaults apply without a configuration file"
)]
fn scenario_defaults(world: ConfigWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/config_loading.feature",
    name = "Overrides replace individual defaults"
)]
fn scenario_override(world: ConfigWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/config_loading.feature",
    name = "A blank version is rejected"
)]
fn scenario_blank_version(world: ConfigWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/config_loading.feature",
    name = "Unknown fields are rejected"
)]
fn scenario_unknown_fields(world: ConfigWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/config_loading.feature",
    name = "An explicit configuration path must exist"
)]
fn scenario_missing_file(world: ConfigWorld) {
    let _ = world;
}
