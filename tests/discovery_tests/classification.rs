//! Classification of candidate manifests against a real fixture on disk.

use crate::fixtures::{module_manifest, TestFixture, PARENT_PATH};
use fixture_catalog::discovery::Rejection;

fn sub_dir(name: &str) -> String {
    format!("{PARENT_PATH}/modules/{name}")
}

#[test]
fn test_qualifying_submodule() {
    let fixture = TestFixture::new().with_parents();
    let manifest = fixture.submodule(&sub_dir("child"), "child");

    let verdict = fixture.manager().classify_file(&manifest);

    assert!(verdict.qualifies(), "unexpected rejection: {:?}", verdict.rejection());
}

#[test]
fn test_non_module_types_never_qualify() {
    let fixture = TestFixture::new().with_parents();
    let manager = fixture.manager();

    for (i, package_type) in ["library", "drupal-theme", "drupal-profile", "project"]
        .iter()
        .enumerate()
    {
        let project = format!("typed{i}");
        let manifest = fixture.package(
            &sub_dir(&project),
            &module_manifest(&format!("drupal/{project}"), package_type, Some(true)),
            Some(project.as_str()),
        );

        let verdict = manager.classify_file(&manifest);

        assert_eq!(
            verdict.rejection(),
            Some(&Rejection::NotModule(package_type.to_string())),
            "type {package_type} must not qualify"
        );
    }
}

#[test]
fn test_top_level_manifest_is_not_its_own_submodule() {
    let fixture = TestFixture::new().with_parents();
    let manifest = fixture.path(&format!("{PARENT_PATH}/composer.json"));

    let verdict = fixture.manager().classify_file(&manifest);

    assert_eq!(
        verdict.rejection(),
        Some(&Rejection::TopLevel("drupal/parent".to_string()))
    );
}

#[test]
fn test_opt_out_flag_toggles_classification() {
    let fixture = TestFixture::new().with_parents();
    let dir = sub_dir("toggle");
    let manager = fixture.manager();

    let manifest = fixture.package(
        &dir,
        &module_manifest("drupal/toggle", "drupal-module", None),
        Some("toggle"),
    );
    assert!(manager.classify_file(&manifest).qualifies());

    fixture.package(
        &dir,
        &module_manifest("drupal/toggle", "drupal-module", Some(true)),
        None,
    );
    assert!(manager.classify_file(&manifest).qualifies());

    fixture.package(
        &dir,
        &module_manifest("drupal/toggle", "drupal-module", Some(false)),
        None,
    );
    assert_eq!(
        manager.classify_file(&manifest).rejection(),
        Some(&Rejection::OptedOut)
    );
}

#[test]
fn test_foreign_vendor_is_rejected() {
    let fixture = TestFixture::new().with_parents();
    let manifest = fixture.package(
        &sub_dir("acquia_sub"),
        &module_manifest("acquia/acquia_sub", "drupal-module", None),
        Some("acquia_sub"),
    );

    let verdict = fixture.manager().classify_file(&manifest);

    assert_eq!(
        verdict.rejection(),
        Some(&Rejection::ForeignVendor("acquia".to_string()))
    );
}

#[test]
fn test_missing_info_file_is_rejected() {
    let fixture = TestFixture::new().with_parents();
    let dir = sub_dir("noinfo");
    let manifest = fixture.package(
        &dir,
        &module_manifest("drupal/noinfo", "drupal-module", None),
        Some("misnamed"),
    );

    let verdict = fixture.manager().classify_file(&manifest);

    assert_eq!(
        verdict.rejection(),
        Some(&Rejection::MissingInfoFile(
            fixture.path(&format!("{dir}/noinfo.info.yml"))
        ))
    );
}

#[test]
fn test_malformed_name_is_rejected() {
    let fixture = TestFixture::new().with_parents();
    let manifest = fixture.package(
        &sub_dir("flat"),
        &module_manifest("flat", "drupal-module", None),
        Some("flat"),
    );

    let verdict = fixture.manager().classify_file(&manifest);

    assert_eq!(
        verdict.rejection(),
        Some(&Rejection::MalformedName("flat".to_string()))
    );
}

#[test]
fn test_missing_and_unparseable_files_are_rejected_without_error() {
    let fixture = TestFixture::new().with_parents();
    let manager = fixture.manager();

    let missing = manager.classify_file(&fixture.path("nowhere/composer.json"));
    assert_eq!(missing.rejection(), Some(&Rejection::Missing));

    let broken = fixture.package(&sub_dir("broken"), "{ \"name\": ", Some("broken"));
    assert!(matches!(
        manager.classify_file(&broken).rejection(),
        Some(Rejection::Unparseable(_))
    ));

    let nameless = fixture.package(&sub_dir("nameless"), r#"{"type": "drupal-module"}"#, None);
    assert!(matches!(
        manager.classify_file(&nameless).rejection(),
        Some(Rejection::Unparseable(_))
    ));
}

#[test]
fn test_discovery_skips_rejected_candidates() {
    let fixture = TestFixture::new().with_parents();
    fixture.submodule(&sub_dir("good"), "good");
    fixture.package(&sub_dir("broken"), "not json", Some("broken"));
    fixture.package(
        &sub_dir("theme"),
        &module_manifest("drupal/theme", "drupal-theme", None),
        Some("theme"),
    );
    fixture.package(
        &sub_dir("optout"),
        &module_manifest("drupal/optout", "drupal-module", Some(false)),
        Some("optout"),
    );

    let mut manager = fixture.manager();
    let submodules = manager.discover_all().expect("discovery must not fail");

    assert_eq!(submodules.keys().collect::<Vec<_>>(), vec!["drupal/good"]);
}

#[test]
fn test_array_manifest_is_not_a_submodule() {
    let fixture = TestFixture::new().with_parents();
    let manifest = fixture.package(
        &sub_dir("child"),
        r#"["drupal/child", "drupal-module"]"#,
        Some("child"),
    );
    let mut manager = fixture.manager();

    assert!(matches!(
        manager.classify_file(&manifest).rejection(),
        Some(Rejection::Unparseable(_))
    ));
    assert!(manager.discover_all().unwrap().is_empty());
}
