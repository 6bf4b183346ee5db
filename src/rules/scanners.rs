//! Hand-written matchers for rules the `regex` crate cannot express: a letter
//! that must repeat (or must *not* repeat) and lookahead that has to stay out
//! of the match.
//!
//! Every scanner is anchored: it either matches starting exactly at `pos` or
//! returns `None`. The engine moves `pos` forward like a global search.

use super::letters::*;
use crate::{Hit, Span};

/// Forward-only cursor over a `&str`, byte-indexed.
#[derive(Debug, Clone, Copy)]
struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn at(text: &'a str, pos: usize) -> Self {
        Cursor { text, pos }
    }

    fn rest(&self) -> &'a str {
        self.text.get(self.pos..).unwrap_or("")
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Consume the next char if `pred` accepts it.
    fn eat_if(&mut self, pred: impl Fn(char) -> bool) -> Option<char> {
        let c = self.peek().filter(|&c| pred(c))?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, want: char) -> bool {
        self.eat_if(|c| c == want).is_some()
    }

    /// Consume `a` followed by `b`, or nothing.
    fn eat_pair(&mut self, a: char, b: char) -> bool {
        let mut ahead = *self;
        if ahead.eat(a) && ahead.eat(b) {
            *self = ahead;
            true
        } else {
            false
        }
    }

    fn skip_spaces(&mut self) {
        while self.eat(SPACE) {}
    }

    fn skip_marks(&mut self) {
        while self.eat_if(is_mark).is_some() {}
    }
}

// --- Idgham without ghunna ------------------------------------------------------

/// Two identical letters (meem excluded), the second doubled:
/// `X ␠* X ّ`. Only the first letter is tagged.
pub fn misleyn(text: &str, pos: usize) -> Option<Hit> {
    let mut cur = Cursor::at(text, pos);
    let first = cur.eat_if(|c| c != MEEM && is_letter(c))?;
    let tagged = Span::new(pos, cur.pos);

    cur.skip_spaces();
    if !(cur.eat(first) && cur.eat(SHADDA)) {
        return None;
    }
    Some(Hit { whole: Span::new(pos, cur.pos), tagged })
}

/// Two letters from the same articulation group where the first is not simply
/// repeated: `X sukoon? mark? ␠* Y ّ` with `Y` in the group and the text at `Y`
/// not starting with the tagged `X sukoon? mark?`.
fn homorganic(text: &str, pos: usize, group: &[char]) -> Option<Hit> {
    let mut cur = Cursor::at(text, pos);
    cur.eat_if(|c| group.contains(&c))?;
    cur.eat_if(is_light_sukoon);
    cur.eat_if(is_small_high);
    let tagged = Span::new(pos, cur.pos);

    cur.skip_spaces();
    if cur.rest().starts_with(&text[tagged.start..tagged.end]) {
        return None;
    }
    cur.eat_if(|c| group.contains(&c))?;
    if !cur.eat(SHADDA) {
        return None;
    }
    Some(Hit { whole: Span::new(pos, cur.pos), tagged })
}

pub fn mutajaniseyn_ta_dal(text: &str, pos: usize) -> Option<Hit> {
    homorganic(text, pos, &TA_DAL_GROUP)
}

pub fn mutajaniseyn_interdental(text: &str, pos: usize) -> Option<Hit> {
    homorganic(text, pos, &INTERDENTAL_GROUP)
}

pub fn mutajaniseyn_labial(text: &str, pos: usize) -> Option<Hit> {
    homorganic(text, pos, &LABIAL_GROUP)
}

pub fn mutagaribeyn_qaf_kaf(text: &str, pos: usize) -> Option<Hit> {
    homorganic(text, pos, &QAF_KAF_GROUP)
}

pub fn mutagaribeyn_noon_lam_ra(text: &str, pos: usize) -> Option<Hit> {
    homorganic(text, pos, &NOON_LAM_RA_GROUP)
}

// --- Natural prolonging (two counts) ---------------------------------------------

/// What may follow a two-count madd: an optional pause mark, then anything but
/// another combining mark or a space before alef wasla. Returns the position
/// after the optional pause mark.
fn natural_madd_end(text: &str, pos: usize) -> Option<usize> {
    let mut cur = Cursor::at(text, pos);
    cur.eat_if(is_small_high);
    let blocked = cur.peek().is_some_and(is_mark) || Cursor::at(text, cur.pos).eat_pair(SPACE, ALEF_WASLA);
    (!blocked).then_some(cur.pos)
}

type Alternative = fn(&str, usize) -> Option<Hit>;

/// Sub-cases of the two-count madd, tried in this order at each position.
const EXTENSION_BY_TWO: [Alternative; 8] =
    [fatha_alef, fatha_superscript_alef, fatha_dagger_alef, damma_waw, kasra_ya, tatweel_small_ya, lin, ivad];

/// Natural madd, lin and ivad prolonging. The first sub-case that matches at
/// `pos` wins.
pub fn extension_by_two(text: &str, pos: usize) -> Option<Hit> {
    EXTENSION_BY_TWO.iter().find_map(|alt| alt(text, pos))
}

/// `lead` vowel, then a tagged body accepted by `body`, then `natural_madd_end`.
fn vowel_then_madd(text: &str, pos: usize, lead: char, body: impl Fn(&mut Cursor<'_>) -> bool) -> Option<Hit> {
    let mut cur = Cursor::at(text, pos);
    if !cur.eat(lead) {
        return None;
    }
    let start = cur.pos;
    if !body(&mut cur) {
        return None;
    }
    let end = natural_madd_end(text, cur.pos)?;
    Some(Hit { whole: Span::new(pos, end), tagged: Span::new(start, cur.pos) })
}

fn fatha_alef(text: &str, pos: usize) -> Option<Hit> {
    vowel_then_madd(text, pos, FATHA, |cur| cur.eat(ALEF))
}

fn fatha_superscript_alef(text: &str, pos: usize) -> Option<Hit> {
    vowel_then_madd(text, pos, FATHA, |cur| cur.eat_if(is_letter).is_some() && cur.eat(SUPERSCRIPT_ALEF))
}

/// Fatha, optional hair space, superscript alef, optional word joiner. The
/// word joiner is given back when keeping it leaves a mark right after.
fn fatha_dagger_alef(text: &str, pos: usize) -> Option<Hit> {
    let mut cur = Cursor::at(text, pos);
    if !cur.eat(FATHA) {
        return None;
    }
    let start = cur.pos;
    cur.eat(HAIR_SPACE);
    if !cur.eat(SUPERSCRIPT_ALEF) {
        return None;
    }
    let without_joiner = cur.pos;
    if cur.eat(WORD_JOINER) {
        if let Some(end) = natural_madd_end(text, cur.pos) {
            return Some(Hit { whole: Span::new(pos, end), tagged: Span::new(start, cur.pos) });
        }
    }
    let end = natural_madd_end(text, without_joiner)?;
    Some(Hit { whole: Span::new(pos, end), tagged: Span::new(start, without_joiner) })
}

fn damma_waw(text: &str, pos: usize) -> Option<Hit> {
    vowel_then_madd(text, pos, DAMMA, |cur| cur.eat_if(|c| c == WAW || c == SMALL_WAW).is_some())
}

fn kasra_ya(text: &str, pos: usize) -> Option<Hit> {
    vowel_then_madd(text, pos, KASRA, |cur| cur.eat_if(|c| matches!(c, YA | FARSI_YA | SMALL_YA | SMALL_HIGH_YA)).is_some())
}

/// Tatweel carrying a small ya; no preceding vowel.
fn tatweel_small_ya(text: &str, pos: usize) -> Option<Hit> {
    let mut cur = Cursor::at(text, pos);
    if !(cur.eat(TATWEEL) && cur.eat(SMALL_HIGH_YA)) {
        return None;
    }
    let end = natural_madd_end(text, cur.pos)?;
    Some(Hit { whole: Span::new(pos, end), tagged: Span::new(pos, cur.pos) })
}

/// Lin: fatha, then waw or ya with optional sukoon, then one final letter and
/// its marks at the end of the text (a stop).
fn lin(text: &str, pos: usize) -> Option<Hit> {
    let mut cur = Cursor::at(text, pos);
    if !cur.eat(FATHA) {
        return None;
    }
    let start = cur.pos;
    if !(cur.eat(WAW) || cur.eat_pair(SMALL_WAW, YA) || cur.eat(FARSI_YA)) {
        return None;
    }
    cur.eat_if(is_light_sukoon);
    let tagged = Span::new(start, cur.pos);

    cur.eat_if(is_letter)?;
    cur.skip_marks();
    cur.at_end().then_some(Hit { whole: Span::new(pos, cur.pos), tagged })
}

/// Ivad: alef written after fathatan (or a fatha carrying a small meem) at a
/// word end, read long when stopping.
fn ivad(text: &str, pos: usize) -> Option<Hit> {
    let mut cur = Cursor::at(text, pos);
    let lead = cur.eat(FATHATAN)
        || cur.eat(OPEN_FATHATAN)
        || cur.eat_pair(HAMZA_ABOVE, SMALL_HIGH_MEEM)
        || cur.eat_pair(FATHA, SMALL_HIGH_MEEM);
    if !lead {
        return None;
    }
    let start = cur.pos;
    if !cur.eat(ALEF) {
        return None;
    }
    cur.eat_if(is_small_high);
    let tagged = Span::new(start, cur.pos);

    if !(cur.at_end() || cur.eat(SPACE)) {
        return None;
    }
    Some(Hit { whole: Span::new(pos, cur.pos), tagged })
}
