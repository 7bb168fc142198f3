use alloc::format;
use alloc::string::{String, ToString};

use crate::*;

/// Compact amount label: whole millions as `M`, whole thousands as `K`, truncating.
pub fn format_value(value: Amount) -> String {
    if value >= 1_000_000 {
        format!("{}M", value / 1_000_000)
    } else if value >= 1_000 {
        format!("{}K", value / 1_000)
    } else {
        value.to_string()
    }
}

pub fn format_multiplier(multiplier: Factor) -> String {
    format!("x{}", multiplier)
}

/// Text shown on the face of a revealed cell.
pub fn face_label(kind: CellKind) -> String {
    match kind {
        CellKind::Cash(amount) => format_value(amount),
        CellKind::Multiplier(factor) => format_multiplier(factor),
        CellKind::Zero => "0".to_string(),
        CellKind::Stop => "STOP".to_string(),
        CellKind::Bomb => "BOOM!".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_below_a_thousand() {
        assert_eq!(format_value(0), "0");
        assert_eq!(format_value(999), "999");
    }

    #[test]
    fn thousands_truncate() {
        assert_eq!(format_value(1_000), "1K");
        assert_eq!(format_value(1_999), "1K");
        assert_eq!(format_value(999_999), "999K");
    }

    #[test]
    fn millions_truncate() {
        assert_eq!(format_value(1_000_000), "1M");
        assert_eq!(format_value(1_999_999), "1M");
        assert_eq!(format_value(23_400_000), "23M");
    }

    #[test]
    fn face_labels() {
        assert_eq!(face_label(CellKind::Cash(10_000)), "10K");
        assert_eq!(face_label(CellKind::Cash(100)), "100");
        assert_eq!(face_label(CellKind::Multiplier(2)), "x2");
        assert_eq!(face_label(CellKind::Zero), "0");
        assert_eq!(face_label(CellKind::Stop), "STOP");
        assert_eq!(face_label(CellKind::Bomb), "BOOM!");
    }
}
