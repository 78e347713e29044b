/// Default target URL provided by the surrounding CI system, if any.
///
/// Jenkins exports `JENKINS_URL` on every build and `BUILD_URL` pointing at
/// the build page; when both are present the build page is used. Takes an
/// environment lookup so callers and tests decide where variables come from.
pub fn ci_target_url(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    lookup("JENKINS_URL")?;
    lookup("BUILD_URL").filter(|url| !url.is_empty())
}

/// Environment lookup backed by the current process.
pub fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}
