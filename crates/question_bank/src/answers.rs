const NUMERIC_TOLERANCE: f64 = 1e-9;

/// Trimmed, case-insensitive compare; numeric compare when both sides are numbers.
pub fn check_answer(expected: &str, given: &str) -> bool {
    let expected = expected.trim();
    let given = given.trim();
    if given.is_empty() {
        return false;
    }

    match (parse_number(expected), parse_number(given)) {
        (Some(a), Some(b)) => (a - b).abs() <= NUMERIC_TOLERANCE,
        _ => expected.to_lowercase() == given.to_lowercase(),
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.replace(',', "").parse::<f64>().ok().filter(|v| v.is_finite())
}
