use anyhow::Context;
use camino::Utf8Path;

/// Read a Dockerfile for inspection and scanning.
pub fn read_dockerfile(path: &Utf8Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read Dockerfile: {path}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    #[test]
    fn reads_file_verbatim() {
        let tmp = tempfile::tempdir().expect("temp dir");
        let path = Utf8PathBuf::from_path_buf(tmp.path().join("Dockerfile")).expect("utf8 path");
        std::fs::write(&path, "FROM alpine\n").expect("write");
        assert_eq!(read_dockerfile(&path).expect("read"), "FROM alpine\n");
    }

    #[test]
    fn missing_file_is_a_contextual_error() {
        let err = read_dockerfile(Utf8Path::new("no/such/Dockerfile")).expect_err("missing");
        assert!(format!("{err:#}").contains("read Dockerfile"));
    }
}
