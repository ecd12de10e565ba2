//! Target-script detection for body text.

/// Fraction of a text's characters that belong to the target script.
pub trait ScriptRatio {
    /// A value in `[0, 1]`.
    fn ratio(&self, text: &str) -> f64;
}

/// Korean script ratio over non-whitespace characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct HangulRatio;

impl ScriptRatio for HangulRatio {
    fn ratio(&self, text: &str) -> f64 {
        let (total, hangul) = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .fold((0usize, 0usize), |(total, hangul), c| (total + 1, hangul + usize::from(is_hangul(c))));

        if total == 0 {
            return 0.0;
        }
        hangul as f64 / total as f64
    }
}

/// Hangul syllables, Jamo and compatibility Jamo.
pub fn is_hangul(c: char) -> bool {
    matches!(c, '\u{AC00}'..='\u{D7A3}' | '\u{1100}'..='\u{11FF}' | '\u{3130}'..='\u{318F}')
}

pub fn korean_character_ratio(text: &str) -> f64 {
    HangulRatio.ratio(text)
}
