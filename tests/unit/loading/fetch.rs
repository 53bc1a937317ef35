//! Tests for local photo byte retrieval

#[cfg(test)]
mod tests {
    use photodrift::CollageError;
    use photodrift::loading::{Fetch, FileFetcher};
    use std::path::Path;

    // Tests catalog URIs map into the root directory
    // Verified by keeping the catalog prefix in the path
    #[test]
    fn test_resolve_catalog_uri() {
        let fetcher = FileFetcher::new("/srv/photos");

        assert_eq!(
            fetcher.resolve("/photos/a.jpg").expect("resolves"),
            Path::new("/srv/photos/a.jpg")
        );
        assert_eq!(
            fetcher.resolve("nested/b.png").expect("resolves"),
            Path::new("/srv/photos/nested/b.png")
        );
        assert_eq!(
            fetcher.resolve("/c.heic").expect("resolves"),
            Path::new("/srv/photos/c.heic")
        );
        assert_eq!(fetcher.root(), Path::new("/srv/photos"));
    }

    // Tests non-local sources are rejected
    // Verified by removing the scheme check
    #[test]
    fn test_resolve_rejects_remote() {
        let fetcher = FileFetcher::new("/srv/photos");

        assert!(matches!(
            fetcher.resolve("https://example.com/a.jpg"),
            Err(CollageError::Fetch { .. })
        ));
        assert!(matches!(
            fetcher.resolve("blob:photodrift/1"),
            Err(CollageError::Fetch { .. })
        ));
    }

    // Tests paths cannot escape the root
    // Verified by removing the parent-directory check
    #[test]
    fn test_resolve_rejects_traversal() {
        let fetcher = FileFetcher::new("/srv/photos");

        assert!(fetcher.resolve("/photos/../secret.jpg").is_err());
        assert!(fetcher.resolve("/photos/").is_err());
        assert!(fetcher.resolve("").is_err());
    }

    // Tests reading file contents
    // Verified by reading from the wrong directory
    #[test]
    fn test_fetch_reads_bytes() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::write(dir.path().join("a.heic"), b"bytes").expect("write photo");
        let fetcher = FileFetcher::new(dir.path());

        assert_eq!(fetcher.fetch("/photos/a.heic").expect("fetch"), b"bytes");
    }

    // Tests missing files surface a file system error
    // Verified by mapping errors to an empty buffer
    #[test]
    fn test_fetch_missing_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let fetcher = FileFetcher::new(dir.path());

        let error = fetcher.fetch("/photos/missing.heic").expect_err("missing file");
        assert!(matches!(
            error,
            CollageError::FileSystem {
                operation: "read photo",
                ..
            }
        ));
    }
}
