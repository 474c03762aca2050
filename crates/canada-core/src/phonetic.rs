//! # Phonetic Encoding
//!
//! Metaphone encoding used for fuzzy region-name matching. The stored
//! `phonetic_key_en` / `phonetic_key_fr` values on every [`Region`] are the
//! output of [`metaphone`] for the corresponding name, so a misspelled query
//! such as `"qeubec"` encodes to the same key (`KBK`) as `"Quebec"`.
//!
//! Input is lowercased and NFKD-decomposed first: combining accents carry no
//! phonetic rule and drop out, which lets `"Québec"` and `"Quebec"` agree.
//! Hyphens, apostrophes and other punctuation are ignored; runs of spaces
//! collapse into a single separator.
//!
//! [`Region`]: crate::region::Region

use unicode_normalization::UnicodeNormalization;

/// Encode `text` with the metaphone algorithm.
///
/// The encoding is deterministic and locale-independent.
pub fn metaphone(text: &str) -> String {
    let mut chars: Vec<char> = text.to_lowercase().nfkd().collect();
    if starts_with_silent_pair(&chars) {
        chars.remove(0);
    }

    let mut out = String::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let prev = i.checked_sub(1).map(|p| chars[p]);
        let next = chars.get(i + 1).copied();
        let after = chars.get(i + 2).copied();

        // Doubled letters encode once, except "cc".
        if next == Some(c) && c != 'c' {
            i += 1;
            continue;
        }

        match c {
            'a' | 'e' | 'i' | 'o' | 'u' => {
                if prev.map_or(true, |p| p == ' ') {
                    out.push(c);
                }
            }
            'b' => {
                // Silent in a trailing "mb".
                if !(prev == Some('m') && next.is_none()) {
                    out.push('b');
                }
            }
            'c' => {
                if (next == Some('i') && after == Some('a')) || next == Some('h') {
                    out.push('x');
                    i += 1;
                } else if is_one_of(next, "iey") {
                    out.push('s');
                    i += 1;
                } else {
                    out.push('k');
                }
            }
            'd' => {
                if next == Some('g') && is_one_of(after, "iey") {
                    out.push('j');
                    i += 2;
                } else {
                    out.push('t');
                }
            }
            'f' | 'j' | 'l' | 'm' | 'n' | 'r' => out.push(c),
            'g' => {
                if is_one_of(next, "iey") {
                    out.push('j');
                } else if next == Some('h') && after.is_some_and(|a| !is_vowel(a)) {
                    i += 1;
                } else if next == Some('n') && after.is_none() {
                    i += 1;
                } else {
                    out.push('k');
                }
            }
            'h' => {
                if prev.is_none() || is_one_of(next, "aeiou") || !is_one_of(prev, "aeiou") {
                    out.push('h');
                }
            }
            'k' => {
                if prev != Some('c') {
                    out.push('k');
                }
            }
            'p' => {
                if next == Some('h') {
                    out.push('f');
                    i += 1;
                } else {
                    out.push('p');
                }
            }
            'q' => out.push('k'),
            's' => {
                if next == Some('h') {
                    out.push('x');
                    i += 1;
                } else if next == Some('i') && is_one_of(after, "oa") {
                    out.push('x');
                    i += 2;
                } else {
                    out.push('s');
                }
            }
            't' => {
                if next == Some('i') && is_one_of(after, "oa") {
                    out.push('x');
                } else if next == Some('h') {
                    out.push('0');
                    i += 1;
                } else if !(next == Some('c') && after == Some('h')) {
                    out.push('t');
                }
            }
            'v' => out.push('f'),
            'w' => {
                if prev.is_none() && next == Some('h') {
                    out.push('w');
                    i += 1;
                } else if is_one_of(next, "aeiou") {
                    out.push('w');
                }
            }
            'x' => {
                if prev.is_some() {
                    out.push_str("ks");
                } else if next == Some('h') || (next == Some('i') && is_one_of(after, "oa")) {
                    out.push('x');
                } else {
                    out.push('s');
                }
            }
            'y' => {
                if is_one_of(next, "aeiou") {
                    out.push('y');
                }
            }
            'z' => out.push('s'),
            ' ' => {
                if !out.is_empty() && !out.ends_with(' ') {
                    out.push(' ');
                }
            }
            _ => {}
        }
        i += 1;
    }

    out.to_uppercase()
}

fn starts_with_silent_pair(chars: &[char]) -> bool {
    matches!(
        chars,
        ['k', 'n', ..] | ['g', 'n', ..] | ['p', 'n', ..] | ['w', 'r', ..] | ['a', 'e', ..]
    )
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn is_one_of(c: Option<char>, set: &str) -> bool {
    c.is_some_and(|c| set.contains(c))
}
