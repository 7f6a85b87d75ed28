/// Syllable estimation seam.
pub trait SyllableCounter {
    /// Syllables in one word. Always at least 1.
    fn count(&self, word: &str) -> usize;
}

/// Vowel-group heuristic.
///
/// Counts runs of vowels (`y` counts unless it starts the word), drops one
/// for a silent trailing "e" after a consonant, and never returns less than 1.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicSyllableCounter;

impl SyllableCounter for HeuristicSyllableCounter {
    fn count(&self, word: &str) -> usize {
        let chars: Vec<char> = word.to_lowercase().chars().collect();

        let mut groups = 0;
        let mut in_group = false;
        for i in 0..chars.len() {
            let vowel = is_vowel_at(&chars, i);
            if vowel && !in_group {
                groups += 1;
            }
            in_group = vowel;
        }

        if ends_in_silent_e(&chars) && groups > 1 {
            groups -= 1;
        }

        groups.max(1)
    }
}

fn is_vowel_at(chars: &[char], i: usize) -> bool {
    match chars[i] {
        'a' | 'e' | 'i' | 'o' | 'u' => true,
        'y' => i > 0,
        _ => false,
    }
}

fn ends_in_silent_e(chars: &[char]) -> bool {
    let n = chars.len();
    n >= 2
        && chars[n - 1] == 'e'
        && chars[n - 2].is_alphabetic()
        && !is_vowel_at(chars, n - 2)
}
