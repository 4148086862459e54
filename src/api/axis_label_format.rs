use chrono::{DateTime, FixedOffset, Utc};

const TIME_LABEL_PATTERN: &str = "%H:%M";
const VALUE_LABEL_MAX_PRECISION: usize = 2;

/// Formats an instant as `HH:MM` in the given display offset.
pub(crate) fn format_time_label(time_ms: i64, offset: FixedOffset) -> String {
    let Some(time) = DateTime::<Utc>::from_timestamp_millis(time_ms) else {
        return "--:--".to_owned();
    };
    time.with_timezone(&offset)
        .format(TIME_LABEL_PATTERN)
        .to_string()
}

/// Formats a raw count: integers without decimals, fractions with at most
/// two, trailing zeros trimmed.
pub(crate) fn format_value_label(value: f64) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }
    let precision = VALUE_LABEL_MAX_PRECISION;
    let text = format!("{value:.precision$}");
    trim_decimal(text)
}

fn trim_decimal(mut text: String) -> String {
    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
    if text == "-0" { "0".to_owned() } else { text }
}

/// Deterministic, backend-independent width estimate for label text.
pub(crate) fn estimate_label_text_width_px(text: &str, font_size_px: f64) -> f64 {
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' | ':' => 0.34,
            '-' | '+' | '%' => 0.42,
            ' ' => 0.33,
            _ => 0.58,
        }
    });
    (units * font_size_px).max(font_size_px)
}

#[cfg(test)]
mod tests {
    use super::{format_time_label, format_value_label};
    use chrono::FixedOffset;

    #[test]
    fn time_label_uses_hour_minute_in_offset() {
        // 2024-03-05T12:34:00Z
        let time_ms = 1_709_642_040_000;
        let utc = FixedOffset::east_opt(0).expect("utc");
        let plus_two = FixedOffset::east_opt(2 * 3600).expect("+02:00");
        assert_eq!(format_time_label(time_ms, utc), "12:34");
        assert_eq!(format_time_label(time_ms, plus_two), "14:34");
    }

    #[test]
    fn value_label_trims_trailing_zeros() {
        assert_eq!(format_value_label(10.0), "10");
        assert_eq!(format_value_label(3.333_333), "3.33");
        assert_eq!(format_value_label(0.5), "0.5");
        assert_eq!(format_value_label(-0.0001), "0");
    }
}
