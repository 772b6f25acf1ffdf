//! Duplicate package names within one walk.

use crate::fixtures::{TestFixture, PARENT_PATH};

#[test]
fn test_duplicate_names_collapse_to_one_entry() {
    let fixture = TestFixture::new().with_parents();
    fixture.submodule(&format!("{PARENT_PATH}/modules/a_copy"), "dup");
    fixture.submodule(&format!("{PARENT_PATH}/modules/b_copy"), "dup");
    fixture.submodule(&format!("{PARENT_PATH}/modules/unique"), "unique");

    let mut manager = fixture.manager();
    let submodules = manager.discover_all().unwrap();

    assert_eq!(submodules.len(), 2);
    assert!(submodules.contains_key("drupal/unique"));
}

#[test]
fn test_later_duplicate_in_walk_order_wins() {
    let fixture = TestFixture::new().with_parents();
    fixture.submodule(&format!("{PARENT_PATH}/modules/a_copy"), "dup");
    fixture.submodule(&format!("{PARENT_PATH}/modules/b_copy"), "dup");

    let mut manager = fixture.manager();
    let submodules = manager.discover_all().unwrap();

    assert_eq!(
        submodules["drupal/dup"].install_path(),
        format!("{PARENT_PATH}/modules/b_copy")
    );
}
