use crate::build;

/// Returns the long version string with build information
pub fn long_version() -> String {
    let version = build::PKG_VERSION;
    let git_sha = build::SHORT_COMMIT;
    #[allow(clippy::const_is_empty)]
    let git_branch = {
        let branch = build::BRANCH;
        if branch.is_empty() {
            option_env!("GITHUB_REF_NAME").unwrap_or("unknown")
        } else {
            branch
        }
    };
    let git_state = if build::GIT_CLEAN { "" } else { "-dirty" };

    format!(
        "{version} ({git_branch}@{git_sha}{git_state})
Built: {} for {}
Rustc: {}",
        build::BUILD_TIME,
        build::BUILD_TARGET,
        build::RUST_VERSION
    )
}
