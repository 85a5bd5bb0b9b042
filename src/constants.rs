/// Backend project constants
pub mod backend {
    /// Backend project root, relative to the project root
    pub const DIR: &str = "backend";

    /// Name of the backend binary produced by the release build
    pub const BINARY: &str = "lumos-rs";

    /// Release output directory, relative to the backend project root
    pub const RELEASE_DIR: &str = "target/release";

    /// Release build command
    pub const BUILD_COMMAND: &[&str] = &["cargo", "build", "--release"];
}

/// Bundled asset constants
pub mod assets {
    /// Directory the desktop app bundles the backend from
    pub const DIR: &str = "tauri-app/src-tauri/backend";

    /// Target triple the bundled backend is tagged with
    pub const TARGET_TRIPLE: &str = "x86_64-pc-windows-msvc";
}

/// Desktop app project constants
pub mod app {
    /// Desktop app project root, relative to the project root
    pub const DIR: &str = "tauri-app";

    /// Packaging command
    pub const PACKAGE_COMMAND: &[&str] = &["npm", "run", "tauri", "build"];

    /// Where the packager leaves the executable and installer
    pub const ARTIFACTS_DIR: &str = "tauri-app/target/release/";
}

/// Configuration file constants
pub mod config {
    /// Project-local configuration file name
    pub const LOCAL_FILE: &str = "lumos-package.toml";

    /// Directory under the user config dir
    pub const USER_DIR: &str = "lumos-package";

    /// File name under the user config dir
    pub const USER_FILE: &str = "config.toml";
}
