use super::Recognition;

/// Maps a raw recognition to a board digit.
///
/// A digit is accepted only when the engine is confident enough and the
/// text contains a character in '1'..='9' after discarding everything else
/// the engine may have emitted (dashes, whitespace, stray punctuation).
/// Only the first surviving digit is used. Anything that fails these checks
/// is a blank cell, not an error.
///
/// '0' is deliberately not accepted: sudoku has no zero digit, and the
/// blank sentinel must never be produced by a misread glyph.
pub fn digit_from_recognition(rec: &Recognition, min_confidence: f32) -> Option<u8> {
    if rec.text.is_empty() || rec.confidence < min_confidence {
        return None;
    }
    rec.text
        .chars()
        .find(|c| matches!(c, '1'..='9'))
        .map(|c| c as u8 - b'0')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(text: &str, confidence: f32) -> Recognition {
        Recognition {
            text: text.to_string(),
            confidence,
        }
    }

    #[test]
    fn test_confident_digit_is_accepted() {
        assert_eq!(digit_from_recognition(&rec("7", 0.95), 0.8), Some(7));
    }

    #[test]
    fn test_low_confidence_is_blank_regardless_of_text() {
        assert_eq!(digit_from_recognition(&rec("7", 0.5), 0.8), None);
    }

    #[test]
    fn test_empty_text_is_blank() {
        assert_eq!(digit_from_recognition(&rec("", 0.99), 0.8), None);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        assert_eq!(digit_from_recognition(&rec("3", 0.8), 0.8), Some(3));
    }

    #[test]
    fn test_non_digit_noise_is_stripped() {
        assert_eq!(digit_from_recognition(&rec("-.7~", 0.9), 0.8), Some(7));
    }

    #[test]
    fn test_only_first_digit_is_used() {
        assert_eq!(digit_from_recognition(&rec("78", 0.9), 0.8), Some(7));
    }

    #[test]
    fn test_zero_is_not_a_digit() {
        assert_eq!(digit_from_recognition(&rec("0", 0.9), 0.8), None);
    }

    #[test]
    fn test_all_noise_is_blank() {
        assert_eq!(digit_from_recognition(&rec("--", 0.9), 0.8), None);
    }
}
