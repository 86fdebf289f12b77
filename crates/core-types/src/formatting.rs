//! INR display formatting.
//!
//! The calculators emit raw integer rupee amounts; compaction into lakh/crore
//! units and Indian digit grouping is layered on top for the CLI tables and
//! any consumer that wants pre-formatted strings.

/// Compact INR formatting: `₹1.2Cr` above one crore, `₹3.5L` above one lakh,
/// otherwise the fully grouped amount.
pub fn format_inr(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();

    if abs >= 10_000_000 {
        let tenths = (abs * 10 + 5_000_000) / 10_000_000;
        format!("{sign}₹{}.{}Cr", tenths / 10, tenths % 10)
    } else if abs >= 100_000 {
        let tenths = (abs * 10 + 50_000) / 100_000;
        format!("{sign}₹{}.{}L", tenths / 10, tenths % 10)
    } else {
        format_inr_full(amount)
    }
}

/// Full INR formatting with Indian digit grouping: `₹12,34,567`.
pub fn format_inr_full(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    format!("{sign}₹{}", group_indian(amount.unsigned_abs()))
}

/// Indian-style grouping: the last three digits form one group, every pair
/// of digits before that forms another.
fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<String> = Vec::new();
    let head_bytes = head.as_bytes();
    let mut idx = head_bytes.len();
    while idx > 0 {
        let start = idx.saturating_sub(2);
        groups.push(head[start..idx].to_string());
        idx = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_digits_indian_style() {
        assert_eq!(format_inr_full(0), "₹0");
        assert_eq!(format_inr_full(999), "₹999");
        assert_eq!(format_inr_full(1_000), "₹1,000");
        assert_eq!(format_inr_full(83_430), "₹83,430");
        assert_eq!(format_inr_full(1_001_160), "₹10,01,160");
        assert_eq!(format_inr_full(50_05_800), "₹50,05,800");
        assert_eq!(format_inr_full(123_456_789), "₹12,34,56,789");
    }

    #[test]
    fn compacts_lakhs_and_crores() {
        assert_eq!(format_inr(45_000), "₹45,000");
        assert_eq!(format_inr(150_000), "₹1.5L");
        assert_eq!(format_inr(1_001_160), "₹10.0L");
        assert_eq!(format_inr(12_000_000), "₹1.2Cr");
    }

    #[test]
    fn negative_amounts_keep_their_sign() {
        assert_eq!(format_inr_full(-1_500), "-₹1,500");
        assert_eq!(format_inr(-12_000_000), "-₹1.2Cr");
    }
}
