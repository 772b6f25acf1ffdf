pub const MANIFEST_FILE_NAME: &str = "composer.json";

pub const NORMALIZE_EXCLUDED_DIRS: &[&str] = &["tests", "vendor"];

/// Composer binary relative to the tool's own project directory.
pub const COMPOSER_VENDOR_BIN: &str = "vendor/bin/composer";

pub const NORMALIZE_ARGS: &[&str] = &[
    "--ansi",
    "normalize",
    "--indent-size=4",
    "--indent-style=space",
];
