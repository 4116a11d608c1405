//! Text formatting shared by the page and its log lines.

/// en-US dollar amount with thousands separators, e.g. `-$1,234.50`.
/// Cents round half away from zero.
pub fn format_currency(value: f64) -> String {
    if value.is_nan() {
        return "$NaN".to_string();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    if value.is_infinite() {
        return format!("{sign}$∞");
    }
    let (whole, cents) = round_half_up(value, 2);
    format!("{sign}${}.{cents}", group_thousands(&whole))
}

/// Ratio rendered as a percentage with two decimals: `0.1234` -> `12.34%`.
pub fn format_percentage(value: f64) -> String {
    let percent = value * 100.0;
    if percent.is_nan() {
        return "NaN%".to_string();
    }
    let sign = if percent < 0.0 { "-" } else { "" };
    if percent.is_infinite() {
        return format!("{sign}Infinity%");
    }
    let (whole, fraction) = round_half_up(percent, 2);
    format!("{sign}{whole}.{fraction}%")
}

/// Byte count in MiB with two decimals.
pub fn format_mib(size_bytes: u64) -> String {
    format!("{:.2}", size_bytes as f64 / 1024.0 / 1024.0)
}

/// Rounds `|value|` to `places` decimals, ties away from zero, on its
/// shortest round-trip decimal form. Returns the integer and fraction digits.
/// `value` must be finite.
fn round_half_up(value: f64, places: usize) -> (String, String) {
    let repr = value.abs().to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(places))
        .map(|b| b - b'0')
        .collect();
    if frac_part.as_bytes().get(places).is_some_and(|&d| d >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }

    let split = digits.len() - places;
    let text = |ds: &[u8]| ds.iter().map(|d| char::from(b'0' + d)).collect::<String>();
    (text(&digits[..split]), text(&digits[split..]))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
