//! Sleep quality scale and its labels.

pub const MIN_QUALITY: i32 = 0;
pub const MAX_QUALITY: i32 = 5;

pub fn is_valid(quality: i32) -> bool {
    (MIN_QUALITY..=MAX_QUALITY).contains(&quality)
}

/// Human readable label for a rating; unrated and unknown values render as `--`.
pub fn label(quality: i32) -> &'static str {
    match quality {
        0 => "Very bad",
        1 => "Poor",
        2 => "So-so",
        3 => "OK",
        4 => "Pretty good",
        5 => "Excellent",
        _ => "--",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::session::UNRATED;

    #[test]
    fn labels_cover_the_scale() {
        assert_eq!(label(0), "Very bad");
        assert_eq!(label(5), "Excellent");
        assert_eq!(label(UNRATED), "--");
        assert_eq!(label(6), "--");
    }

    #[test]
    fn validity_bounds() {
        assert!(is_valid(0));
        assert!(is_valid(5));
        assert!(!is_valid(-1));
        assert!(!is_valid(6));
    }
}
