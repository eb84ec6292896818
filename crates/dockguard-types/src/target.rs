/// Scan target identifier: a Dockerfile path or an image reference.
///
/// The raw value is preserved for display and for the scanner argv; the
/// filesystem-safe form is derived on demand for report filenames:
/// - only the last path segment is kept
/// - `/` and `:` become `_`
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TargetName(String);

impl TargetName {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Filesystem-safe stem used in report filenames.
    pub fn file_stem(&self) -> String {
        let base = self.0.rsplit('/').next().unwrap_or(self.0.as_str());
        base.replace([':', '/'], "_")
    }
}

impl std::fmt::Display for TargetName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_reference_is_sanitized() {
        assert_eq!(TargetName::new("nginx:latest").file_stem(), "nginx_latest");
    }

    #[test]
    fn namespaced_image_keeps_last_segment() {
        assert_eq!(
            TargetName::new("library/nginx:1.27").file_stem(),
            "nginx_1.27"
        );
    }

    #[test]
    fn dockerfile_path_keeps_basename() {
        assert_eq!(
            TargetName::new("deploy/api/Dockerfile").file_stem(),
            "Dockerfile"
        );
    }

    #[test]
    fn plain_name_is_unchanged() {
        assert_eq!(TargetName::new("Dockerfile").file_stem(), "Dockerfile");
    }
}
