//! Readability Estimator
//!
//! Flesch-Kincaid grade level approximation over plain text. The syllable
//! counter is a heuristic, not a linguistic syllabifier: the contract is
//! reproducibility of the formula, not phonetic accuracy.

use once_cell::sync::Lazy;
use regex::Regex;

/// Runs of sentence terminators count as one sentence break each
static SENTENCE_BREAKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// Estimate the US school grade level needed to comprehend `text`
///
/// `0.39 * (words / sentences) + 11.8 * (syllables / words) - 15.59`,
/// rounded to one decimal and floored at 0. Empty text returns 0.
pub fn estimate_grade_level(text: &str) -> f64 {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return 0.0;
    }

    let sentences = SENTENCE_BREAKS.find_iter(text).count().max(1);
    let syllables: usize = words.iter().map(|word| count_syllables(word)).sum();

    let grade = 0.39 * (words.len() as f64 / sentences as f64)
        + 11.8 * (syllables as f64 / words.len() as f64)
        - 15.59;
    ((grade * 10.0).round() / 10.0).max(0.0)
}

/// Approximate the syllable count of one word
///
/// Words of three characters or fewer count as one syllable. Otherwise each
/// transition into a vowel (a, e, i, o, u, y) starts a nucleus; a trailing
/// silent 'e' is subtracted, and a consonant + "le" ending adds one back.
/// Never returns less than 1.
pub fn count_syllables(word: &str) -> usize {
    let word = word.trim().to_lowercase();
    let chars: Vec<char> = word.chars().collect();
    if chars.len() <= 3 {
        return 1;
    }

    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');

    let mut count: isize = 0;
    let mut prev_is_vowel = false;
    for &c in &chars {
        let vowel = is_vowel(c);
        if vowel && !prev_is_vowel {
            count += 1;
        }
        prev_is_vowel = vowel;
    }

    if word.ends_with('e') {
        count -= 1;
    }
    if word.ends_with("le") && chars.len() > 2 && !is_vowel(chars[chars.len() - 3]) {
        count += 1;
    }

    count.max(1) as usize
}
