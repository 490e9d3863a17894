//! git config key names used by git-env.

/// Section under which all git-env options are stored.
pub const NAMESPACE: &str = "env-branch";

/// `env-branch.<option>`
pub fn option_key(option: &str) -> String {
    format!("{}.{}", NAMESPACE, option)
}

/// `branch.<branch>.remote`
pub fn branch_remote_key(branch: &str) -> String {
    format!("branch.{}.remote", branch)
}

/// `<remote>/<branch>`
pub fn remote_tracking_ref(remote: &str, branch: &str) -> String {
    format!("{}/{}", remote, branch)
}
