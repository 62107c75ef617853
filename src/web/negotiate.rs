//! Response format selection from the `Accept` header

/// Representations the search endpoint can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Html,
    Json,
}

impl ResponseFormat {
    /// Parse an explicit `format` query parameter
    pub fn from_param(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "html" => Some(Self::Html),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// How specifically a media range names this format: 2 exact, 1 subtype
    /// wildcard, 0 `*/*`
    fn specificity(self, range: &str) -> Option<u8> {
        match (self, range) {
            (Self::Html, "text/html" | "application/xhtml+xml") => Some(2),
            (Self::Json, "application/json") => Some(2),
            (Self::Html, "text/*") | (Self::Json, "application/*") => Some(1),
            (_, "*/*") => Some(0),
            _ => None,
        }
    }
}

struct MediaRange {
    range: String,
    quality: f32,
}

fn parse_media_ranges(accept: &str) -> Vec<MediaRange> {
    accept
        .split(',')
        .map(|entry| {
            let mut parts = entry.split(';');
            let range = parts.next().unwrap_or_default().trim().to_ascii_lowercase();
            let quality = parts
                .filter_map(|param| {
                    let (key, value) = param.split_once('=')?;
                    (key.trim() == "q").then(|| value.trim().parse::<f32>().ok())?
                })
                .next()
                .unwrap_or(1.0);
            MediaRange { range, quality }
        })
        .collect()
}

/// Pick the best format the client accepts.
///
/// A missing or empty header accepts anything. Each format takes the quality
/// of the most specific range naming it, so `text/html;q=0` rules HTML out
/// even when `*/*` is also listed. Formats are ranked by quality, ties go to
/// the one whose range is listed first. `None` means nothing is acceptable.
pub fn negotiate(accept: Option<&str>) -> Option<ResponseFormat> {
    let accept = match accept.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => return Some(ResponseFormat::Html),
    };

    let ranges = parse_media_ranges(accept);

    let mut best: Option<(ResponseFormat, f32, usize)> = None;
    for format in [ResponseFormat::Html, ResponseFormat::Json] {
        let mut matched: Option<(u8, f32, usize)> = None;
        for (position, media) in ranges.iter().enumerate() {
            let Some(specificity) = format.specificity(&media.range) else {
                continue;
            };
            if matched.map_or(true, |(s, _, _)| specificity > s) {
                matched = Some((specificity, media.quality, position));
            }
        }

        let Some((_, quality, position)) = matched else {
            continue;
        };
        if quality <= 0.0 {
            continue;
        }
        let better = match best {
            None => true,
            Some((_, q, p)) => quality > q || (quality == q && position < p),
        };
        if better {
            best = Some((format, quality, position));
        }
    }

    best.map(|(format, _, _)| format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_header_is_html() {
        assert_eq!(negotiate(None), Some(ResponseFormat::Html));
        assert_eq!(negotiate(Some("")), Some(ResponseFormat::Html));
    }

    #[test]
    fn test_browser_accept() {
        let accept = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
        assert_eq!(negotiate(Some(accept)), Some(ResponseFormat::Html));
    }

    #[test]
    fn test_json_accept() {
        assert_eq!(negotiate(Some("application/json")), Some(ResponseFormat::Json));
        assert_eq!(
            negotiate(Some("text/html;q=0.5, application/json")),
            Some(ResponseFormat::Json)
        );
        assert_eq!(
            negotiate(Some("application/json, */*")),
            Some(ResponseFormat::Json)
        );
    }

    #[test]
    fn test_wildcard() {
        assert_eq!(negotiate(Some("*/*")), Some(ResponseFormat::Html));
        assert_eq!(negotiate(Some("application/*")), Some(ResponseFormat::Json));
    }

    #[test]
    fn test_not_acceptable() {
        assert_eq!(negotiate(Some("image/png")), None);
        assert_eq!(negotiate(Some("text/html;q=0, application/json;q=0")), None);
    }

    #[test]
    fn test_zero_quality_beats_wildcard() {
        assert_eq!(
            negotiate(Some("text/html;q=0, */*")),
            Some(ResponseFormat::Json)
        );
        assert_eq!(
            negotiate(Some("application/json;q=0, */*")),
            Some(ResponseFormat::Html)
        );
        assert_eq!(negotiate(Some("text/html;q=0, text/*")), None);
        assert_eq!(
            negotiate(Some("*/*;q=0, application/json")),
            Some(ResponseFormat::Json)
        );
    }

    #[test]
    fn test_specific_range_sets_quality() {
        assert_eq!(
            negotiate(Some("*/*;q=0.9, text/html;q=0.1")),
            Some(ResponseFormat::Json)
        );
    }

    #[test]
    fn test_format_param() {
        assert_eq!(ResponseFormat::from_param("JSON"), Some(ResponseFormat::Json));
        assert_eq!(ResponseFormat::from_param("html"), Some(ResponseFormat::Html));
        assert_eq!(ResponseFormat::from_param("csv"), None);
    }
}
