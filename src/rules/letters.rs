//! Character classes shared by the hand-written scanners.
//!
//! Regex rules spell these classes out inline (see `patterns.rs`); the
//! scanners need them as predicates over `char`.

pub const SPACE: char = ' ';
pub const ALEF: char = '\u{0627}';
pub const ALEF_WASLA: char = '\u{0671}';
pub const MEEM: char = '\u{0645}';
pub const WAW: char = '\u{0648}';
pub const YA: char = '\u{064A}';
pub const FARSI_YA: char = '\u{06CC}';
pub const SMALL_WAW: char = '\u{06E5}';
pub const SMALL_YA: char = '\u{06E6}';
pub const SMALL_HIGH_YA: char = '\u{06E7}';
pub const TATWEEL: char = '\u{0640}';
pub const FATHA: char = '\u{064E}';
pub const DAMMA: char = '\u{064F}';
pub const KASRA: char = '\u{0650}';
pub const FATHATAN: char = '\u{064B}';
pub const OPEN_FATHATAN: char = '\u{08F0}';
pub const SHADDA: char = '\u{0651}';
pub const HAMZA_ABOVE: char = '\u{0654}';
pub const SUPERSCRIPT_ALEF: char = '\u{0670}';
pub const SMALL_HIGH_MEEM: char = '\u{06E2}';
pub const HAIR_SPACE: char = '\u{200A}';
pub const WORD_JOINER: char = '\u{2060}';

/// Letters of the first same-articulation group (ط د ت).
pub const TA_DAL_GROUP: [char; 3] = ['\u{0637}', '\u{062F}', '\u{062A}'];
/// Interdental letters (ظ ذ ث).
pub const INTERDENTAL_GROUP: [char; 3] = ['\u{0638}', '\u{0630}', '\u{062B}'];
/// Labial letters (ب م).
pub const LABIAL_GROUP: [char; 2] = ['\u{0628}', '\u{0645}'];
/// Back-of-tongue letters (ق ك).
pub const QAF_KAF_GROUP: [char; 2] = ['\u{0642}', '\u{0643}'];
/// Tongue-tip letters (ن ل ر).
pub const NOON_LAM_RA_GROUP: [char; 3] = ['\u{0646}', '\u{0644}', '\u{0631}'];

/// Pause and annotation marks written above the line (U+06D6..U+06DB) plus the
/// small high and low meem.
pub fn is_small_high(c: char) -> bool {
    matches!(c, '\u{06D6}'..='\u{06DB}' | '\u{06E2}' | '\u{06ED}')
}

/// Sukoon in its two common encodings.
pub fn is_light_sukoon(c: char) -> bool {
    matches!(c, '\u{0652}' | '\u{06E1}')
}

/// Unicode general category L.
pub fn is_letter(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphabetic();
    }
    let mut buf = [0u8; 4];
    regex!(r"\A\p{L}\z").is_match(c.encode_utf8(&mut buf))
}

/// Unicode general category M (combining marks).
pub fn is_mark(c: char) -> bool {
    if c.is_ascii() {
        return false;
    }
    let mut buf = [0u8; 4];
    regex!(r"\A\p{M}\z").is_match(c.encode_utf8(&mut buf))
}
