//! Tests for the modal photo viewer

#[cfg(test)]
mod tests {
    use photodrift::engine::{Key, Lightbox, LightboxTarget, Selection};
    use photodrift::photo::{PhotoRef, RenderElement};

    fn selection(label: &str, display: &str) -> Selection {
        Selection {
            slot: 3,
            photo: PhotoRef::new("/photos/a.heic", label),
            display: display.to_string(),
        }
    }

    // Tests opening shows the selected photo
    // Verified by keeping the lightbox closed
    #[test]
    fn test_open_shows_selection() {
        let mut lightbox = Lightbox::new();
        lightbox.open(&selection("Our first trip", "blob:photodrift/1"));

        let content = lightbox.content().expect("lightbox open");
        assert!(lightbox.is_open());
        assert_eq!(content.display, "blob:photodrift/1");
        assert_eq!(content.element, RenderElement::Native);
        assert_eq!(content.caption(), Some("Our first trip"));
    }

    // Tests empty labels produce no caption
    // Verified by always returning the label
    #[test]
    fn test_empty_caption_omitted() {
        let mut lightbox = Lightbox::new();
        lightbox.open(&selection("", "/photos/a.jpg"));

        assert_eq!(lightbox.content().and_then(|c| c.caption()), None);
    }

    // Tests Escape closes and other keys do not
    // Verified by closing on any key
    #[test]
    fn test_escape_closes() {
        let mut lightbox = Lightbox::new();
        lightbox.open(&selection("a", "/photos/a.jpg"));

        assert!(!lightbox.handle_key(Key::Enter));
        assert!(lightbox.is_open());
        assert!(lightbox.handle_key(Key::Escape));
        assert!(!lightbox.is_open());
        assert!(!lightbox.handle_key(Key::Escape));
    }

    // Tests backdrop and close button dismiss, content does not
    // Verified by closing on content clicks
    #[test]
    fn test_click_targets() {
        let mut lightbox = Lightbox::new();
        lightbox.open(&selection("a", "/photos/a.jpg"));

        assert!(!lightbox.click(LightboxTarget::Content));
        assert!(lightbox.is_open());
        assert!(lightbox.click(LightboxTarget::Backdrop));

        lightbox.open(&selection("a", "/photos/a.jpg"));
        assert!(lightbox.click(LightboxTarget::CloseButton));
        assert!(!lightbox.click(LightboxTarget::CloseButton));
    }
}
