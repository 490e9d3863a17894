//! Shared testing harness for `git-env` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::git_repository::{add_origin_remote, commit_file, configure_user, git, init_bare_repo};

/// Isolated working repository with a bare `origin`.
///
/// Layout after `new()`: `master` and the environment branches `stage` and
/// `dev` exist locally and on origin, tracking each other, and `master` is
/// checked out. git-env itself is not configured yet.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    origin_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        let origin_dir = root.path().join("origin.git");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        fs::create_dir_all(&origin_dir).expect("Failed to create origin directory");

        init_bare_repo(&origin_dir);

        git(&work_dir, &["init", "--initial-branch=master"]);
        configure_user(&work_dir);
        add_origin_remote(&work_dir, origin_dir.to_str().expect("utf-8 temp path"));

        commit_file(&work_dir, "README.md", "# test\n", "Initial commit");
        git(&work_dir, &["push", "-u", "origin", "master"]);
        for env in ["stage", "dev"] {
            git(&work_dir, &["branch", env]);
            git(&work_dir, &["push", "-u", "origin", env]);
        }

        Self { root, work_dir, origin_dir }
    }

    /// New context with the default git-env configuration already stored.
    pub(crate) fn configured() -> Self {
        let ctx = Self::new();
        ctx.configure("master", "stage dev", "git checkout {{ env }} && git merge --no-ff {{ feature }}");
        ctx
    }

    /// Store git-env options the way `git env init` does.
    pub(crate) fn configure(&self, prod: &str, other: &str, prod_deploy: &str) {
        for (key, value) in [("prod", prod), ("other", other), ("prod-deploy", prod_deploy)] {
            self.git(&["config", "--local", "--replace-all", &format!("env-branch.{}", key), value]);
        }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub(crate) fn home(&self) -> &Path {
        self.root.path()
    }

    /// Path to the working repository.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub(crate) fn origin_dir(&self) -> &Path {
        &self.origin_dir
    }

    /// Build a command for invoking the compiled `git-env` binary in the working repository.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("git-env").expect("Failed to locate git-env binary");
        cmd.current_dir(self.work_dir()).env("HOME", self.home()).env_remove("GIT_ENV_LOG");
        cmd
    }

    /// Run git in the working repository.
    pub(crate) fn git(&self, args: &[&str]) -> String {
        git(&self.work_dir, args)
    }

    /// Create a feature branch off master with one commit, leaving it checked out.
    pub(crate) fn feature_branch(&self, name: &str, file: &str) {
        self.git(&["checkout", "-b", name, "master"]);
        commit_file(&self.work_dir, file, "feature\n", &format!("Add {}", file));
    }

    pub(crate) fn commit(&self, file: &str, message: &str) {
        commit_file(&self.work_dir, file, message, message);
    }

    pub(crate) fn current_branch(&self) -> String {
        self.git(&["rev-parse", "--abbrev-ref", "HEAD"])
    }

    pub(crate) fn rev(&self, rev: &str) -> String {
        self.git(&["rev-parse", rev])
    }

    /// Files tracked at the tip of `branch`.
    pub(crate) fn files_on(&self, branch: &str) -> Vec<String> {
        self.git(&["ls-tree", "--name-only", branch]).lines().map(str::to_string).collect()
    }

    /// Number of parents of the tip commit of `branch`.
    pub(crate) fn parent_count(&self, branch: &str) -> usize {
        self.git(&["rev-list", "--parents", "-n", "1", branch]).split_whitespace().count() - 1
    }
}
