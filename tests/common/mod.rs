//! Shared testing utilities for adminfix CLI tests.
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tempfile::TempDir;

pub const LEGACY_COMPONENT: &str =
    "<style lang=\"scss\">\n.a {\n  & /deep/ .b { color: red; }\n}\n</style>";
pub const FIXED_COMPONENT: &str =
    "<style lang=\"scss\">\n.a {\n  ::v-deep .b { color: red; }\n}\n</style>";
pub const PLAIN_COMPONENT: &str =
    "<template><div class=\"a\"/></template>\n<style lang=\"scss\">\n.a { color: blue; }\n</style>";

/// Testing harness providing an isolated admin project for CLI exercises.
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated project directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("admin");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Project directory used as the CLI working directory.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Default source directory (`<work_dir>/src`).
    pub fn src_dir(&self) -> PathBuf {
        self.work_dir.join("src")
    }

    /// Build a command for invoking the compiled `adminfix` binary within the project.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("adminfix").expect("Failed to locate adminfix binary");
        cmd.current_dir(&self.work_dir).env_remove("ADMINFIX_LOG");
        cmd
    }

    /// Write a file relative to the project directory, creating parents.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        fs::create_dir_all(path.parent().expect("path has parent")).expect("Failed to create parent");
        fs::write(&path, content).expect("Failed to write fixture file");
        path
    }

    /// Read a file relative to the project directory.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative)).expect("Failed to read file")
    }

    pub fn modified(&self, relative: &str) -> SystemTime {
        fs::metadata(self.work_dir.join(relative))
            .and_then(|m| m.modified())
            .expect("Failed to read mtime")
    }

    /// Lay out a typical generated admin source tree.
    ///
    /// Three nested directories (`views/modules/users`) hold five `.vue` files
    /// and two other files; two components use the legacy selector.
    pub fn seed_admin_sources(&self) {
        self.write("src/App.vue", PLAIN_COMPONENT);
        self.write("src/views/home.vue", LEGACY_COMPONENT);
        self.write("src/views/modules/users/list.vue", LEGACY_COMPONENT);
        self.write("src/views/modules/users/add-or-update.vue", PLAIN_COMPONENT);
        self.write("src/views/modules/BreadCrumbs.vue", PLAIN_COMPONENT);
        self.write("src/main.js", "import Vue from 'vue'\n");
        self.write("src/views/modules/users/list.scss", ".a { & /deep/ .b {} }\n");
    }
}
