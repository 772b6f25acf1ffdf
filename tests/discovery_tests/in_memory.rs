//! The engine against an in-memory tree; nothing here touches disk.

use std::path::{Path, PathBuf};

use fixture_catalog::discovery::Rejection;
use fixture_catalog::{Fixture, MemoryFilesystem, PackageCatalog, SubmoduleManager};
use pretty_assertions::assert_eq;

const PACKAGES: &str = "drupal/parent: ~\n";
const PARENT: &str = "/srv/fixture/docroot/modules/contrib/parent";

fn tree() -> MemoryFilesystem {
    MemoryFilesystem::new()
        .with_file(
            format!("{PARENT}/composer.json"),
            r#"{"name": "drupal/parent", "type": "drupal-module"}"#,
        )
        .with_file(
            format!("{PARENT}/modules/child/composer.json"),
            r#"{"name": "drupal/child", "type": "drupal-module"}"#,
        )
        .with_file(format!("{PARENT}/modules/child/child.info.yml"), "")
}

fn manager(fs: &MemoryFilesystem) -> SubmoduleManager<&MemoryFilesystem> {
    let fixture = Fixture::new("/srv/fixture");
    let catalog = PackageCatalog::from_yaml_str(&fixture, PACKAGES).unwrap();
    SubmoduleManager::new(fs, fixture, &catalog)
}

#[test]
fn test_discover_all_in_memory() {
    let fs = tree();
    let mut manager = manager(&fs);

    let submodules = manager.discover_all().unwrap();

    assert_eq!(submodules.keys().collect::<Vec<_>>(), vec!["drupal/child"]);
    assert_eq!(
        submodules["drupal/child"].install_path(),
        "docroot/modules/contrib/parent/modules/child"
    );
}

#[test]
fn test_memoized_result_survives_tree_mutation() {
    let fs = tree();
    let mut manager = manager(&fs);
    manager.discover_all().unwrap();

    fs.remove_file(Path::new(&format!("{PARENT}/modules/child/child.info.yml")));

    assert_eq!(manager.discover_all().unwrap().len(), 1);
    manager.reset();
    assert!(manager.discover_all().unwrap().is_empty());
}

#[test]
fn test_stale_candidate_is_missing() {
    let fs = tree();
    let manager = manager(&fs);
    let manifest = PathBuf::from(format!("{PARENT}/modules/child/composer.json"));

    fs.remove_file(&manifest);

    assert_eq!(
        manager.classify_file(&manifest).rejection(),
        Some(&Rejection::Missing)
    );
}
