//! Resource identifier rendering

use std::path::Path;

/// Render a resource identifier relative to an optional base directory.
///
/// Resources outside the base directory (or non-path resources) are rendered
/// unchanged.
pub fn relativize_resource(resource: &str, base: Option<&Path>) -> String {
    match base {
        Some(base) => Path::new(resource)
            .strip_prefix(base)
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|_| resource.to_string()),
        None => resource.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relativize_without_base() {
        assert_eq!(relativize_resource("/app/src/a.js", None), "/app/src/a.js");
    }

    #[test]
    fn test_relativize_with_base() {
        assert_eq!(
            relativize_resource("/app/src/a.js", Some(Path::new("/app"))),
            "src/a.js"
        );
    }

    #[test]
    fn test_relativize_outside_base() {
        assert_eq!(
            relativize_resource("/other/b.js", Some(Path::new("/app"))),
            "/other/b.js"
        );
    }
}
