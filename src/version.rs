//! Version information for packinstr binaries

/// Crate version, overridable at build time through `PACKINSTR_VERSION`
pub const VERSION: &str = match option_env!("PACKINSTR_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};

/// Build timestamp (set at compile time)
pub const BUILD_TIME: Option<&str> = option_env!("BUILD_TIME");

/// Git commit hash (set at compile time)
pub const GIT_COMMIT: Option<&str> = option_env!("GIT_COMMIT");

/// First 8 bytes of a commit id, or the whole id when that is not a char boundary
fn short_commit(commit: &str) -> &str {
    commit.get(..8).unwrap_or(commit)
}

/// Get full version string with optional build information
pub fn full_version() -> String {
    let mut version = VERSION.to_string();

    if let Some(commit) = GIT_COMMIT {
        version.push_str(&format!(" ({})", short_commit(commit)));
    }

    if let Some(time) = BUILD_TIME {
        version.push_str(&format!(" built {time}"));
    }

    version
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_commit() {
        assert_eq!(short_commit("0123456789abcdef"), "01234567");
        assert_eq!(short_commit("abc"), "abc");
        assert_eq!(short_commit(""), "");
    }

    #[test]
    fn test_short_commit_multibyte_boundary() {
        // byte 8 falls inside 'é'
        assert_eq!(short_commit("abcdefgé12"), "abcdefgé12");
        assert_eq!(short_commit("ééééé"), "éééé");
    }

    #[test]
    fn test_full_version_starts_with_version() {
        assert!(full_version().starts_with(VERSION));
    }
}
