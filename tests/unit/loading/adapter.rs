//! Tests for the per-tile load state machine

#[cfg(test)]
mod tests {
    use photodrift::io::error::transcode_error;
    use photodrift::loading::{BlobRegistry, ImageLoadAdapter, LoadEvent, LoadState};
    use photodrift::photo::RenderElement;

    // Tests ordinary sources are ready without a request
    // Verified by requesting a transcode for every source
    #[test]
    fn test_direct_source_ready() {
        let mut adapter = ImageLoadAdapter::new();

        assert!(adapter.set_source("/photos/a.jpg").is_none());
        assert_eq!(
            adapter.state(),
            &LoadState::Ready {
                display: "/photos/a.jpg".to_string(),
                element: RenderElement::Optimized,
            }
        );
        assert_eq!(adapter.display(), Some("/photos/a.jpg"));
    }

    // Tests proxy sources render with the native element
    // Verified by treating proxy paths as ordinary URLs
    #[test]
    fn test_proxy_source_native() {
        let mut adapter = ImageLoadAdapter::new();
        adapter.set_source("/api/drive-image/abc");

        assert!(matches!(
            adapter.state(),
            LoadState::Ready {
                element: RenderElement::Native,
                ..
            }
        ));
    }

    // Tests legacy sources wait for a transcode
    // Verified by marking them ready immediately
    #[test]
    fn test_legacy_source_loading() {
        let mut adapter = ImageLoadAdapter::new();
        let request = adapter.set_source("/photos/a.HEIC").expect("request issued");

        assert_eq!(request.source(), "/photos/a.HEIC");
        assert!(!request.is_cancelled());
        assert!(adapter.is_loading());
        assert_eq!(adapter.display(), None);
        assert_eq!(adapter.source(), Some("/photos/a.HEIC"));
    }

    // Tests a successful transcode shows a registry handle
    // Verified by displaying the original source
    #[test]
    fn test_complete_success() {
        let registry = BlobRegistry::new();
        let mut adapter = ImageLoadAdapter::new();
        let request = adapter.set_source("/photos/a.heic").expect("request issued");

        let event = adapter.complete(&request, Ok(vec![1, 2, 3]), &registry);

        assert_eq!(event, LoadEvent::Ready);
        let display = adapter.display().expect("displayable").to_string();
        assert!(display.starts_with("blob:"));
        assert_eq!(registry.resolve(&display).as_deref(), Some(&[1, 2, 3][..]));
        assert!(matches!(
            adapter.state(),
            LoadState::Ready {
                element: RenderElement::Native,
                ..
            }
        ));
    }

    // Tests a failed transcode hides the tile for good
    // Verified by allowing a retry on the next source
    #[test]
    fn test_complete_failure_is_sticky() {
        let registry = BlobRegistry::new();
        let mut adapter = ImageLoadAdapter::new();
        let request = adapter.set_source("/photos/a.heic").expect("request issued");

        let event = adapter.complete(
            &request,
            Err(transcode_error("/photos/a.heic", &"unsupported")),
            &registry,
        );

        assert_eq!(event, LoadEvent::Failed);
        assert!(adapter.is_failed());
        assert!(adapter.set_source("/photos/b.jpg").is_none());
        assert!(adapter.is_failed());
        assert_eq!(adapter.display(), None);
    }

    // Tests only the newest request can apply
    // Verified by skipping the cancellation check
    #[test]
    fn test_superseded_request_discarded() {
        let registry = BlobRegistry::new();
        let mut adapter = ImageLoadAdapter::new();
        let first = adapter.set_source("/photos/a.heic").expect("first request");
        let second = adapter.set_source("/photos/b.heic").expect("second request");

        assert!(first.is_cancelled());
        assert_eq!(
            adapter.complete(&first, Ok(vec![1]), &registry),
            LoadEvent::Superseded
        );
        assert!(adapter.is_loading());
        assert_eq!(registry.live_count(), 0);

        assert_eq!(
            adapter.complete(&second, Ok(vec![2]), &registry),
            LoadEvent::Ready
        );
        assert_eq!(registry.live_count(), 1);
    }

    // Tests a stale failure cannot hide a newer source
    // Verified by applying failures before the cancellation check
    #[test]
    fn test_superseded_failure_ignored() {
        let registry = BlobRegistry::new();
        let mut adapter = ImageLoadAdapter::new();
        let first = adapter.set_source("/photos/a.heic").expect("first request");
        adapter.set_source("/photos/b.jpg");

        let event = adapter.complete(
            &first,
            Err(transcode_error("/photos/a.heic", &"late")),
            &registry,
        );

        assert_eq!(event, LoadEvent::Superseded);
        assert!(!adapter.is_failed());
        assert_eq!(adapter.display(), Some("/photos/b.jpg"));
    }

    // Tests resetting the same source keeps the current state
    // Verified by always reissuing requests
    #[test]
    fn test_same_source_noop() {
        let registry = BlobRegistry::new();
        let mut adapter = ImageLoadAdapter::new();
        let request = adapter.set_source("/photos/a.heic").expect("request issued");
        adapter.complete(&request, Ok(vec![7]), &registry);

        assert!(adapter.set_source("/photos/a.heic").is_none());
        assert_eq!(registry.live_count(), 1);
        assert!(adapter.display().is_some());
    }

    // Tests a source change releases the transcoded resource
    // Verified by keeping the old handle alive
    #[test]
    fn test_source_change_releases_handle() {
        let registry = BlobRegistry::new();
        let mut adapter = ImageLoadAdapter::new();
        let request = adapter.set_source("/photos/a.heic").expect("request issued");
        adapter.complete(&request, Ok(vec![7]), &registry);

        adapter.set_source("/photos/b.jpg");

        assert_eq!(registry.live_count(), 0);
        assert_eq!(adapter.display(), Some("/photos/b.jpg"));
    }

    // Tests unmount cancels work and releases resources
    // Verified by leaving the token live on unmount
    #[test]
    fn test_unmount_releases() {
        let registry = BlobRegistry::new();
        let mut adapter = ImageLoadAdapter::new();
        let done = adapter.set_source("/photos/a.heic").expect("request issued");
        adapter.complete(&done, Ok(vec![1]), &registry);
        assert_eq!(registry.live_count(), 1);

        adapter.unmount();
        assert_eq!(registry.live_count(), 0);
        assert_eq!(adapter.state(), &LoadState::Idle);

        let pending = adapter.set_source("/photos/b.heic").expect("request issued");
        adapter.unmount();
        assert!(pending.is_cancelled());
    }

    // Tests dropping the adapter releases its handle
    // Verified by removing the Drop implementation
    #[test]
    fn test_drop_releases() {
        let registry = BlobRegistry::new();
        let mut adapter = ImageLoadAdapter::new();
        let request = adapter.set_source("/photos/a.heic").expect("request issued");
        adapter.complete(&request, Ok(vec![1]), &registry);

        drop(adapter);

        assert_eq!(registry.live_count(), 0);
    }
}
