/// Region used when neither the caller nor the environment names one.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Environment variable consulted when no region is passed explicitly.
pub const REGION_ENV_VAR: &str = "AWS_REGION";

/// Pick the region for a call: explicit parameter, then `AWS_REGION`, then
/// [`DEFAULT_REGION`]. Empty strings are treated as absent.
pub fn resolve_region(explicit: Option<&str>, env_region: Option<&str>) -> String {
    explicit
        .filter(|r| !r.trim().is_empty())
        .or_else(|| env_region.filter(|r| !r.trim().is_empty()))
        .unwrap_or(DEFAULT_REGION)
        .trim()
        .to_string()
}

/// [`resolve_region`] against the current process environment.
pub fn region_from_env(explicit: Option<&str>) -> String {
    let env_region = std::env::var(REGION_ENV_VAR).ok();
    resolve_region(explicit, env_region.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_region_wins() {
        assert_eq!(resolve_region(Some("eu-west-1"), Some("us-west-2")), "eu-west-1");
    }

    #[test]
    fn test_env_region_used_without_explicit() {
        assert_eq!(resolve_region(None, Some("us-west-2")), "us-west-2");
    }

    #[test]
    fn test_default_region_without_explicit_or_env() {
        assert_eq!(resolve_region(None, None), DEFAULT_REGION);
        assert_eq!(resolve_region(None, None), "us-east-1");
    }

    #[test]
    fn test_empty_values_are_absent() {
        assert_eq!(resolve_region(Some(""), Some("ap-south-1")), "ap-south-1");
        assert_eq!(resolve_region(Some("  "), Some("")), DEFAULT_REGION);
    }
}
