//! Display formatting for sidebar values.

const MISSING: &str = "N/A";

/// Compact population: `2.5M`, `45K`, `999`. Absent or zero is `N/A`.
pub fn format_population(population: Option<f64>) -> String {
    let Some(p) = population.filter(|p| p.is_finite() && *p != 0.0) else { return MISSING.to_string() };

    if p >= 1_000_000.0 {
        format!("{:.1}M", round_half_up(p / 1_000_000.0, 1))
    } else if p >= 1_000.0 {
        format!("{:.0}K", round_half_up(p / 1_000.0, 0))
    } else if p.fract() == 0.0 {
        format!("{}", p as i64)
    } else {
        p.to_string()
    }
}

/// Fraction as a whole percentage: `0.0734` -> `7%`.
pub fn format_vacancy_rate(rate: Option<f64>) -> String {
    match rate.filter(|r| r.is_finite()) {
        Some(r) => format!("{}%", (r * 100.0).round() as i64),
        None => MISSING.to_string(),
    }
}

/// US dollars with thousands separators: `$1,234,567`.
pub fn format_currency(amount: Option<f64>) -> String {
    match amount.filter(|a| a.is_finite()) {
        Some(a) => format!("${}", group_thousands(a)),
        None => MISSING.to_string(),
    }
}

/// Round half away from zero, unlike `format!`'s round-half-even.
fn round_half_up(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// en-US grouping with up to three fraction digits, trailing zeros dropped.
fn group_thousands(value: f64) -> String {
    let rounded = round_half_up(value.abs(), 3);
    let whole = rounded.trunc();
    let digits = format!("{:.0}", whole);

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, c) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 { grouped.push(',') }
        grouped.push(c);
    }

    let fraction = format!("{:.3}", rounded - whole);
    let fraction = fraction.trim_start_matches('0').trim_end_matches('0');
    if fraction != "." {
        grouped.push_str(fraction);
    }

    if value < 0.0 && rounded != 0.0 { format!("-{grouped}") } else { grouped }
}

#[cfg(test)]
mod tests {
    use super::{format_currency, format_population, format_vacancy_rate};

    #[test]
    fn population_buckets() {
        assert_eq!(format_population(Some(2_500_000.0)), "2.5M");
        assert_eq!(format_population(Some(1_000_000.0)), "1.0M");
        assert_eq!(format_population(Some(45_000.0)), "45K");
        assert_eq!(format_population(Some(45_500.0)), "46K");
        assert_eq!(format_population(Some(999.0)), "999");
        assert_eq!(format_population(Some(0.0)), "N/A");
        assert_eq!(format_population(None), "N/A");
        assert_eq!(format_population(Some(f64::NAN)), "N/A");
    }

    #[test]
    fn vacancy_rate_as_percentage() {
        assert_eq!(format_vacancy_rate(Some(0.0734)), "7%");
        assert_eq!(format_vacancy_rate(Some(0.125)), "13%");
        assert_eq!(format_vacancy_rate(Some(0.0)), "0%");
        assert_eq!(format_vacancy_rate(None), "N/A");
    }

    #[test]
    fn currency_grouping() {
        assert_eq!(format_currency(Some(65_000.0)), "$65,000");
        assert_eq!(format_currency(Some(1_234_567.0)), "$1,234,567");
        assert_eq!(format_currency(Some(999.0)), "$999");
        assert_eq!(format_currency(Some(1_500.25)), "$1,500.25");
        assert_eq!(format_currency(Some(-2_000.0)), "$-2,000");
        assert_eq!(format_currency(None), "N/A");
    }
}
