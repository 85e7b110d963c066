/// Base64 payload of a `data:` URL, i.e. everything after the first comma.
pub fn payload_from_data_url(data_url: &str) -> String {
    data_url
        .split_once(',')
        .map(|(_, payload)| payload.to_string())
        .unwrap_or_default()
}

pub fn is_image_type(mime_type: &str) -> bool {
    mime_type.starts_with("image/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_data_url_prefix() {
        assert_eq!(payload_from_data_url("data:image/png;base64,iVBORw0KGgo="), "iVBORw0KGgo=");
    }

    #[test]
    fn missing_separator_gives_empty_payload() {
        assert_eq!(payload_from_data_url(""), "");
        assert_eq!(payload_from_data_url("data:image/png;base64"), "");
    }

    #[test]
    fn image_types() {
        assert!(is_image_type("image/png"));
        assert!(is_image_type("image/webp"));
        assert!(!is_image_type("application/pdf"));
        assert!(!is_image_type(""));
    }
}
