//! Formatting helpers for presenting scroll progress.

/// One decimal place, e.g. `42.5%`.
pub fn format_percent(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    format!("{value:.1}%")
}

/// CSS width for a progress strip, e.g. `42.50%`.
pub fn css_width(percent: f64) -> String {
    let percent = if percent.is_finite() {
        percent.clamp(0.0, 100.0)
    } else {
        0.0
    };
    format!("{percent:.2}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_has_one_decimal() {
        assert_eq!(format_percent(42.24), "42.2%");
        assert_eq!(format_percent(100.0), "100.0%");
        assert_eq!(format_percent(f64::NAN), "0.0%");
    }

    #[test]
    fn width_is_clamped() {
        assert_eq!(css_width(12.5), "12.50%");
        assert_eq!(css_width(180.0), "100.00%");
        assert_eq!(css_width(f64::INFINITY), "0.00%");
    }
}
