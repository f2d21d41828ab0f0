//! Display formatting for metric values.

/// Formats a percentage value as `"{v}%"`.
///
/// Integral values drop the fractional part ("45%", not "45.0%");
/// fractional values keep their digits ("45.5%").
#[must_use]
pub fn format_percent(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON {
        format!("{value:.0}%")
    } else {
        format!("{value}%")
    }
}

/// Formats a temperature value as `"{t}°C"`.
#[must_use]
pub fn format_celsius(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON {
        format!("{value:.0}°C")
    } else {
        format!("{value}°C")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_percent_has_no_fraction() {
        assert_eq!(format_percent(45.0), "45%");
        assert_eq!(format_percent(0.0), "0%");
        assert_eq!(format_percent(100.0), "100%");
    }

    #[test]
    fn fractional_percent_keeps_digits() {
        assert_eq!(format_percent(45.5), "45.5%");
        assert_eq!(format_percent(0.25), "0.25%");
    }

    #[test]
    fn celsius_formats_with_degree_suffix() {
        assert_eq!(format_celsius(65.0), "65°C");
        assert_eq!(format_celsius(-40.0), "-40°C");
        assert_eq!(format_celsius(65.5), "65.5°C");
    }
}
