/// Remote URL prefixes stripped during normalization, tried in order.
const REMOTE_PREFIXES: &[&str] = &["git@github.com:", "https://github.com/"];

/// A normalized `owner/name` repository slug.
///
/// Built either from an explicit slug or from a git remote URL, so
/// `git@github.com:owner/name.git`, `https://github.com/owner/name.git`
/// and `owner/name` all produce `RepoSlug("owner/name")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoSlug(pub(crate) String);

impl RepoSlug {
    /// Normalize a raw remote URL or slug.
    ///
    /// Surrounding whitespace is trimmed, then each known prefix is
    /// stripped at most once, then a single trailing `.git`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ghstatus::RepoSlug;
    ///
    /// let ssh = RepoSlug::from_remote_url("git@github.com:octo/hello.git");
    /// let https = RepoSlug::from_remote_url("https://github.com/octo/hello.git");
    /// assert_eq!(ssh, https);
    /// assert_eq!(ssh.as_str(), "octo/hello");
    /// ```
    pub fn from_remote_url(raw: &str) -> Self {
        let mut slug = raw.trim();
        for prefix in REMOTE_PREFIXES {
            slug = slug.strip_prefix(prefix).unwrap_or(slug);
        }
        let slug = slug.strip_suffix(".git").unwrap_or(slug);
        RepoSlug(slug.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl PartialEq<str> for RepoSlug {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RepoSlug {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
