// src/unicode.rs
// Character classes shared by the stages. Kept const and branch-cheap;
// every classifier here sits on a per-char hot path.

use phf::phf_map;

/// Basic CJK Unified Ideographs, U+4E00..=U+9FA5 (the 20902-char block
/// covering everyday Chinese text).
#[inline(always)]
pub const fn is_cjk(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FA5}')
}

/// Private-use garbage that word processors leave behind when symbol-font
/// glyphs (Wingdings bullets and the like) survive a copy as text.
#[inline(always)]
pub const fn is_garbled(c: char) -> bool {
    matches!(c, '\u{F06E}' | '\u{F06F}')
}

/// ASCII letter or underscore — the "English word" class used by the
/// quote-direction fixes.
#[inline(always)]
pub const fn is_latin_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// ASCII letter, digit, or underscore — the class that participates in
/// CJK/Latin boundary spacing.
#[inline(always)]
pub const fn is_latin_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Half-width punctuation and its full-width replacement. `---` → `——` is
/// a substring rule and lives in the stage, not here.
pub static FULLWIDTH_PUNCT: phf::Map<char, char> = phf_map! {
    '.' => '。',
    ';' => '；',
    '!' => '！',
    ',' => '，',
    ':' => '：',
};

#[inline(always)]
pub fn to_fullwidth_punct(c: char) -> char {
    FULLWIDTH_PUNCT.get(&c).copied().unwrap_or(c)
}
