//! YouTube link helpers
//!
//! Videos are stored as either a full YouTube link or a bare 11-character
//! video code.

use regex::Regex;
use std::sync::LazyLock;

static YOUTUBE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?(www\.)?(youtube\.com|youtu\.be)/.+").expect("static regex")
});

static VIDEO_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{11}$").expect("static regex"));

static ISO_DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^P(?:(\d+)D)?(?:T(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?)?$").expect("static regex")
});

/// Path markers that precede the code in the supported link shapes
const CODE_MARKERS: [&str; 4] = ["v=", "youtu.be/", "/embed/", "/shorts/"];

pub fn is_youtube_url(value: &str) -> bool {
    YOUTUBE_URL.is_match(value.trim())
}

pub fn is_video_code(value: &str) -> bool {
    VIDEO_CODE.is_match(value.trim())
}

/// Accepted as a video `url`: a YouTube link or a bare code
pub fn is_valid_video_reference(value: &str) -> bool {
    is_youtube_url(value) || is_video_code(value)
}

/// Video code from a link (`watch?v=`, `youtu.be/`, `/embed/`, `/shorts/`)
/// or the trimmed input itself when it carries no marker
pub fn extract_video_code(input: &str) -> Option<String> {
    let input = input.trim();
    let code = CODE_MARKERS
        .iter()
        .find_map(|marker| input.split_once(marker).map(|(_, rest)| rest))
        .map(|rest| {
            rest.split(['&', '?', '#', '/'])
                .next()
                .unwrap_or_default()
        })
        .unwrap_or(input);

    (!code.is_empty()).then(|| code.to_string())
}

/// Seconds of an ISO-8601 duration such as `PT1H2M3S`; unparseable or
/// overflowing input is 0
pub fn parse_iso8601_duration(value: &str) -> u64 {
    let Some(caps) = ISO_DURATION.captures(value.trim()) else {
        return 0;
    };
    let part = |idx: usize| -> Option<u64> {
        caps.get(idx)
            .map_or(Some(0), |m| m.as_str().parse().ok())
    };
    [(1, 86_400), (2, 3_600), (3, 60), (4, 1)]
        .into_iter()
        .try_fold(0u64, |total, (idx, unit)| {
            part(idx)?.checked_mul(unit)?.checked_add(total)
        })
        .unwrap_or(0)
}

/// Canonical watch link for a code
pub fn watch_url(code: &str) -> String {
    format!("https://www.youtube.com/watch?v={code}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_validation() {
        assert!(is_youtube_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(is_youtube_url("youtu.be/dQw4w9WgXcQ"));
        assert!(is_youtube_url("http://youtube.com/shorts/abc"));
        assert!(!is_youtube_url("https://vimeo.com/123"));
        assert!(!is_youtube_url("https://youtube.com/"));

        assert!(is_valid_video_reference("dQw4w9WgXcQ"));
        assert!(!is_valid_video_reference("short"));
    }

    #[test]
    fn test_extract_code() {
        let cases = [
            ("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=10s", "dQw4w9WgXcQ"),
            ("https://youtu.be/dQw4w9WgXcQ?si=x", "dQw4w9WgXcQ"),
            ("https://www.youtube.com/embed/dQw4w9WgXcQ", "dQw4w9WgXcQ"),
            ("https://youtube.com/shorts/dQw4w9WgXcQ/", "dQw4w9WgXcQ"),
            ("  dQw4w9WgXcQ ", "dQw4w9WgXcQ"),
        ];
        for (input, expected) in cases {
            assert_eq!(extract_video_code(input).as_deref(), Some(expected), "{input}");
        }
        assert_eq!(extract_video_code("   "), None);
        assert_eq!(extract_video_code("https://youtube.com/watch?v="), None);
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_iso8601_duration("PT4M13S"), 253);
        assert_eq!(parse_iso8601_duration("PT1H"), 3600);
        assert_eq!(parse_iso8601_duration("PT1H2M3S"), 3723);
        assert_eq!(parse_iso8601_duration("P1DT1S"), 86_401);
        assert_eq!(parse_iso8601_duration("P0D"), 0);
        assert_eq!(parse_iso8601_duration("4:13"), 0);
        assert_eq!(parse_iso8601_duration(""), 0);
    }

    #[test]
    fn test_parse_duration_overflow() {
        assert_eq!(parse_iso8601_duration("P999999999999999D"), 0);
        assert_eq!(parse_iso8601_duration("PT9999999999999999H"), 0);
        assert_eq!(parse_iso8601_duration("PT99999999999999999999S"), 0);
        assert_eq!(
            parse_iso8601_duration("PT18446744073709551615S"),
            u64::MAX
        );
        assert_eq!(parse_iso8601_duration("P1DT18446744073709551615S"), 0);
    }
}
