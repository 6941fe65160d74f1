use axum::http::StatusCode;

/// Standard reason phrase for a status code, empty if the code is unknown
pub fn status_text(code: u16) -> &'static str {
    StatusCode::from_u16(code)
        .ok()
        .and_then(|status| status.canonical_reason())
        .unwrap_or("")
}

/// Check if code is an HTTP informational code (1xx)
pub fn is_informational(code: u16) -> bool {
    (100..200).contains(&code)
}

/// Check if code is an HTTP success code (2xx)
pub fn is_success(code: u16) -> bool {
    (200..300).contains(&code)
}

/// Check if code is an HTTP redirect (3xx)
pub fn is_redirect(code: u16) -> bool {
    (300..400).contains(&code)
}

/// Check if code is an HTTP client error (4xx)
pub fn is_client_error(code: u16) -> bool {
    (400..500).contains(&code)
}

/// Check if code is an HTTP server error (5xx)
pub fn is_server_error(code: u16) -> bool {
    (500..600).contains(&code)
}

/// Check if code is any HTTP error code (4xx or 5xx)
pub fn is_error(code: u16) -> bool {
    (400..600).contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(status_text(200), "OK");
        assert_eq!(status_text(400), "Bad Request");
        assert_eq!(status_text(404), "Not Found");
        assert_eq!(status_text(405), "Method Not Allowed");
        assert_eq!(status_text(500), "Internal Server Error");
        assert_eq!(status_text(299), "");
        assert_eq!(status_text(42), "");
    }

    #[test]
    fn test_range_boundaries() {
        assert!(!is_informational(99));
        assert!(is_informational(100));
        assert!(is_informational(199));
        assert!(!is_informational(200));

        assert!(!is_success(199));
        assert!(is_success(200));
        assert!(is_success(299));
        assert!(!is_success(300));

        assert!(!is_redirect(299));
        assert!(is_redirect(300));
        assert!(is_redirect(399));
        assert!(!is_redirect(400));

        assert!(!is_client_error(399));
        assert!(is_client_error(400));
        assert!(is_client_error(499));
        assert!(!is_client_error(500));

        assert!(!is_server_error(499));
        assert!(is_server_error(500));
        assert!(is_server_error(599));
        assert!(!is_server_error(600));

        assert!(!is_error(399));
        assert!(is_error(400));
        assert!(is_error(599));
        assert!(!is_error(600));
    }

    #[test]
    fn test_ranges_partition_valid_codes() {
        for code in 100..600u16 {
            let classes = [
                is_informational(code),
                is_success(code),
                is_redirect(code),
                is_client_error(code),
                is_server_error(code),
            ];
            assert_eq!(
                classes.iter().filter(|c| **c).count(),
                1,
                "code {} must fall in exactly one class",
                code
            );
            assert_eq!(
                is_error(code),
                is_client_error(code) || is_server_error(code)
            );
        }
    }

    #[test]
    fn test_out_of_range_codes_match_nothing() {
        for code in [0u16, 99, 600, 999, u16::MAX] {
            assert!(!is_informational(code));
            assert!(!is_success(code));
            assert!(!is_redirect(code));
            assert!(!is_error(code));
        }
    }
}
