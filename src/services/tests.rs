#[cfg(test)]
mod tests {
    use crate::config::{FOLDER_ALIASES, FOLDER_NAMESPACE};
    use crate::models::{SearchResource, SearchResponse};
    use crate::services::{build_listing, normalize_resource, resolve_folder, sample_listing};

    fn resource(public_id: &str) -> SearchResource {
        SearchResource {
            public_id: public_id.to_string(),
            ..SearchResource::default()
        }
    }

    #[test]
    fn test_resolve_folder_prefixes_namespace() {
        assert_eq!(resolve_folder("wedding"), "2am/wedding");
        assert_eq!(resolve_folder("some-new-gallery"), "2am/some-new-gallery");
    }

    #[test]
    fn test_aliases_are_noops_under_prefix_rule() {
        for (name, path) in FOLDER_ALIASES.iter() {
            // The alias table must never diverge from the prefix rule.
            assert_eq!(*path, format!("{}/{}", FOLDER_NAMESPACE, name));
            assert_eq!(resolve_folder(name), *path);
        }
    }

    #[test]
    fn test_normalize_prefers_secure_url() {
        let mut r = resource("2am/wedding/first-dance");
        r.secure_url = Some("https://res.cloudinary.com/demo/image/upload/a.jpg".to_string());
        r.url = Some("http://res.cloudinary.com/demo/image/upload/a.jpg".to_string());
        r.width = Some(1600);
        r.height = Some(1067);

        let descriptor = normalize_resource("demo", &r).unwrap();
        assert_eq!(
            descriptor.url,
            "https://res.cloudinary.com/demo/image/upload/a.jpg"
        );
        assert_eq!(descriptor.id, "2am/wedding/first-dance");
        assert_eq!(descriptor.alt, "first dance");
        assert_eq!(descriptor.width, Some(1600));
        assert_eq!(descriptor.height, Some(1067));
    }

    #[test]
    fn test_normalize_falls_back_to_plain_url() {
        let mut r = resource("2am/home/porch_light");
        r.url = Some("http://res.cloudinary.com/demo/image/upload/b.jpg".to_string());

        let descriptor = normalize_resource("demo", &r).unwrap();
        assert_eq!(
            descriptor.url,
            "http://res.cloudinary.com/demo/image/upload/b.jpg"
        );
        assert_eq!(descriptor.alt, "porch light");
    }

    #[test]
    fn test_normalize_synthesizes_delivery_url() {
        let mut r = resource("2am/sport/finish-line");
        r.format = Some("jpg".to_string());

        let descriptor = normalize_resource("demo", &r).unwrap();
        assert_eq!(
            descriptor.url,
            "https://res.cloudinary.com/demo/image/upload/2am/sport/finish-line.jpg"
        );
    }

    #[test]
    fn test_normalize_filters_unusable_resources() {
        // No URL and no format to synthesize one from.
        assert!(normalize_resource("demo", &resource("2am/event/mystery")).is_none());
        // No public id at all.
        assert!(normalize_resource("demo", &resource("")).is_none());
    }

    #[test]
    fn test_listing_count_matches_images() {
        let mut usable = resource("2am/wedding/one");
        usable.secure_url = Some("https://res.cloudinary.com/demo/one.jpg".to_string());
        let mut also_usable = resource("2am/wedding/two");
        also_usable.secure_url = Some("https://res.cloudinary.com/demo/two.jpg".to_string());
        let unusable = resource("2am/wedding/three");

        let listing = build_listing(
            "2am/wedding".to_string(),
            "demo",
            SearchResponse {
                resources: vec![usable, unusable, also_usable],
                next_cursor: None,
            },
        );

        assert_eq!(listing.folder, "2am/wedding");
        assert_eq!(listing.count, 2);
        assert_eq!(listing.count, listing.images.len());
    }

    #[test]
    fn test_has_more_tracks_next_cursor() {
        let with_cursor = build_listing(
            "2am/outdoor".to_string(),
            "demo",
            SearchResponse {
                resources: vec![],
                next_cursor: Some("tok".to_string()),
            },
        );
        assert!(with_cursor.has_more);
        assert_eq!(with_cursor.next_cursor.as_deref(), Some("tok"));

        let without_cursor = build_listing(
            "2am/outdoor".to_string(),
            "demo",
            SearchResponse::default(),
        );
        assert!(!without_cursor.has_more);
        assert!(without_cursor.next_cursor.is_none());
    }

    #[test]
    fn test_sample_listing_is_well_formed() {
        let listing = sample_listing("wedding");
        assert_eq!(listing.folder, "2am/wedding");
        assert_eq!(listing.count, listing.images.len());
        assert!(listing.count > 0);
        assert!(!listing.has_more);
        for image in &listing.images {
            assert!(image.url.starts_with("https://"));
            assert!(image.id.starts_with("2am/wedding/"));
        }
    }
}
