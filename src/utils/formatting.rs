//! Formatting utilities used for table and export outputs.

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Hours → `<H>h<M>m`, minutes floored (never rounded).
///
/// es: 1.5 → "1h30m", 23.99 → "23h59m", 0.0 → "0h0m"
pub fn hours2readable(hours: f64) -> String {
    let whole = hours.max(0.0).floor();
    let minutes = ((hours.max(0.0) - whole) * 60.0).floor();
    format!("{}h{}m", whole as u64, minutes as u64)
}

/// Group the digits of a plain integer string with `,` every three digits.
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Number with thousands separator and exactly 2 decimals: 1234.5 → "1,234.50".
pub fn format_amount(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, dec_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    // "-0.00" would be misleading
    let sign = if amount < 0.0 && fixed != "0.00" {
        "-"
    } else {
        ""
    };

    format!("{}{}.{}", sign, group_thousands(int_part), dec_part)
}

/// Amount → BRL string: 1234.5 → "R$ 1,234.50".
pub fn format_brl(amount: f64) -> String {
    format!("R$ {}", format_amount(amount))
}
