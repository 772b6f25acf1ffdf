pub const MANIFEST_FILE_NAME: &str = "composer.json";

pub const EXCLUDED_DIRS: &[&str] = &["vendor"];

pub const MODULE_PACKAGE_TYPE: &str = "drupal-module";

pub const SUBMODULE_VENDOR: &str = "drupal";

pub const INFO_FILE_EXTENSION: &str = "info.yml";
