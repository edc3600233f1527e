/// Parses a locale-formatted price token such as `"6,59 zł/l"` into `6.59`.
///
/// Everything except ASCII digits, `.` and `,` is dropped, commas become
/// decimal points, and the remainder is parsed as a float. Tokens that do not
/// reduce to a single finite number (empty, `"brak"`, `"6,59,1"`) yield `None`.
#[must_use]
pub fn parse_price(token: &str) -> Option<f64> {
    let cleaned: String = token
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ','))
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    if !cleaned.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }

    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}
