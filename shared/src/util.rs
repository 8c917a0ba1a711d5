/// Currency suffix used on every price label
pub const CURRENCY: &str = "₸";

/// Group digits in threes with a space: `35000` -> `35 000`
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

/// Format a tenge amount for display: `46000` -> `46 000 ₸`
pub fn format_price(value: i64) -> String {
    format!("{} {}", group_thousands(value), CURRENCY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1 000");
        assert_eq!(group_thousands(35000), "35 000");
        assert_eq!(group_thousands(1234567), "1 234 567");
        assert_eq!(group_thousands(-12000), "-12 000");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(46000), "46 000 ₸");
    }
}
