// Sky classification: is a day "sunny enough" for hiking

/// A day counts as sunny when any one signal says so: cloud cover at or below
/// `max_cloud_percent`, a primary category of "clear", or a description that
/// mentions "sunny". Category and description are compared case-insensitively.
///
/// `max_cloud_percent` is expected to be non-negative; `ThresholdConfig::validate`
/// enforces that before thresholds reach the evaluator.
pub fn is_sunny(clouds: f64, category: &str, description: &str, max_cloud_percent: f64) -> bool {
    clouds <= max_cloud_percent
        || category.eq_ignore_ascii_case("clear")
        || description.to_lowercase().contains("sunny")
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX_CLOUDS: f64 = 35.0;

    #[test]
    fn test_no_clouds_is_sunny_regardless_of_text() {
        assert!(is_sunny(0.0, "", "", MAX_CLOUDS));
        assert!(is_sunny(0.0, "Rain", "heavy rain", MAX_CLOUDS));
    }

    #[test]
    fn test_cloud_bound_is_inclusive() {
        assert!(is_sunny(35.0, "Clouds", "overcast", MAX_CLOUDS));
        assert!(!is_sunny(35.5, "Clouds", "overcast", MAX_CLOUDS));
    }

    #[test]
    fn test_clear_category_wins_over_clouds() {
        assert!(is_sunny(100.0, "Clear", "", MAX_CLOUDS));
        assert!(is_sunny(100.0, "CLEAR", "", MAX_CLOUDS));
    }

    #[test]
    fn test_category_must_equal_clear_exactly() {
        assert!(!is_sunny(100.0, "Clearing", "", MAX_CLOUDS));
        assert!(!is_sunny(100.0, " clear", "", MAX_CLOUDS));
    }

    #[test]
    fn test_sunny_in_description() {
        assert!(is_sunny(100.0, "Clouds", "Sunny with haze", MAX_CLOUDS));
        assert!(is_sunny(100.0, "Clouds", "mostly SUNNY", MAX_CLOUDS));
    }

    #[test]
    fn test_all_signals_negative() {
        assert!(!is_sunny(100.0, "Clouds", "overcast", MAX_CLOUDS));
    }
}
