// file: src/query/filter.rs
// description: percent-encoded metadata filter clauses for hit requests
// reference: https://inl.github.io/BlackLab/server/rest-api/corpus/hits/get.html

/// Encoded ` AND ` used between filter clauses.
pub const FILTER_JOIN: &str = "%20AND%20";

/// Restrict hits to a single testimony.
pub fn document_filter(document_id: &str) -> String {
    urlencoding::encode(&format!("testimony_id:\"{}\"", document_id)).into_owned()
}

/// Encoded `recording_year:[min max]` clause, or an empty string unless both
/// bounds are given.
pub fn year_range_filter(min_year: Option<&str>, max_year: Option<&str>, prefix: &str) -> String {
    let (Some(min_year), Some(max_year)) = (min_year, max_year) else {
        return String::new();
    };

    format!(
        "{}recording_year:%5B{}%20{}%5D",
        prefix, min_year, max_year
    )
}

/// Combine the document clause and the year clause into one encoded filter
/// value, `None` when neither applies.
pub fn combined_filter(
    document_id: Option<&str>,
    min_year: Option<&str>,
    max_year: Option<&str>,
) -> Option<String> {
    match document_id {
        Some(id) => Some(document_filter(id) + &year_range_filter(min_year, max_year, FILTER_JOIN)),
        None => {
            let years = year_range_filter(min_year, max_year, "");
            (!years.is_empty()).then_some(years)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_year_range_needs_both_bounds() {
        for prefix in ["", "&filter=", FILTER_JOIN] {
            assert_eq!(year_range_filter(None, None, prefix), "");
            assert_eq!(year_range_filter(Some("1990"), None, prefix), "");
            assert_eq!(year_range_filter(None, Some("1999"), prefix), "");
        }
    }

    #[test]
    fn test_year_range_is_encoded() {
        assert_eq!(
            year_range_filter(Some("1990"), Some("1999"), "&filter="),
            "&filter=recording_year:%5B1990%201999%5D"
        );
    }

    #[test]
    fn test_document_filter_is_encoded() {
        assert_eq!(document_filter("usc_shoah_1"), "testimony_id%3A%22usc_shoah_1%22");
    }

    #[test]
    fn test_combined_filter() {
        assert_eq!(combined_filter(None, None, None), None);
        assert_eq!(combined_filter(None, Some("1990"), None), None);
        assert_eq!(
            combined_filter(None, Some("1990"), Some("1999")).as_deref(),
            Some("recording_year:%5B1990%201999%5D")
        );
        assert_eq!(
            combined_filter(Some("HVT-1"), Some("1990"), Some("1999")).as_deref(),
            Some("testimony_id%3A%22HVT-1%22%20AND%20recording_year:%5B1990%201999%5D")
        );
        assert_eq!(
            combined_filter(Some("HVT-1"), None, Some("1999")).as_deref(),
            Some("testimony_id%3A%22HVT-1%22")
        );
    }
}
