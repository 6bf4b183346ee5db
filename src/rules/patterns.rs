//! Regex-backed rules.
//!
//! Each pattern is matched from left to right like a global search. Named
//! groups mark the tagged range; everything outside them is context that has
//! to be present but is not tagged. Group names follow `rule_subCase`.
//!
//! Shared fragments are macros so they can be spliced with `concat!`.

use crate::BucketMask;
use crate::{Rule, RuleName};

macro_rules! small_high {
    () => {
        r"[\x{06D6}-\x{06DB}\x{06E2}\x{06ED}]"
    };
}

macro_rules! tanwin {
    () => {
        r"[\x{064B}-\x{064D}\x{08F0}-\x{08F2}]"
    };
}

macro_rules! tanwin_with_shadda {
    () => {
        concat!(r"\x{0651}?", tanwin!(), r"\x{0651}?")
    };
}

macro_rules! sukoon {
    () => {
        r"[\x{0652}\x{06E1}\x{06DF}]"
    };
}

macro_rules! noon_sakin {
    () => {
        r"\x{0646}[\x{0652}\x{06E1}]?"
    };
}

macro_rules! meem_sakin {
    () => {
        r"\x{0645}[\x{0652}\x{06E1}]?"
    };
}

/// Letters written at the end of a word but not read (alef, waw, alef maqsura, small waw).
macro_rules! silent_word_end {
    () => {
        r"[\x{0627}\x{0648}\x{0649}\x{06E5}]?"
    };
}

/// Optional pause mark, then any number of spaces.
macro_rules! word_gap {
    () => {
        concat!(small_high!(), r"?\x{20}*")
    };
}

/// Long-vowel carriers.
macro_rules! madd_letter {
    () => {
        r"(?:\p{L}?\x{200A}?\x{0670}|[\x{0627}\x{0622}\x{0648}\x{06E5}\x{064A}\x{06CC}\x{06E6}\x{06E7}])"
    };
}

macro_rules! hamza {
    () => {
        r"(?:[\x{0621}\x{0623}-\x{0626}\x{0654}\x{0655}]|\x{0649}\x{0655}|\x{0648}\x{0654}|\x{0627}\x{0654})"
    };
}

/// The divine name: optional alef/alef wasla, lam, lam with shadda, ha, followed
/// by a space (after an optional pause mark) or the end of the text.
pub fn lafzatullah() -> Rule {
    rule! {
        name: RuleName::Lafzatullah,
        label: "LAFZATULLAH",
        buckets: BucketMask::LAM,
        pattern: concat!(
            r"(?<LAFZATULLAH>[\x{0627}\x{0671}]?\x{0644}\p{M}*\x{0644}\x{0651}\p{M}*\x{0647}\p{M}*)",
            r"(?:",
            small_high!(),
            r"?\x{20}|$)"
        ),
    }
}

/// Noon sakin or tanwin before a throat letter. An alef only counts when it
/// carries a vowel for a following letter, not as a lengthening alef.
pub fn izhar() -> Rule {
    rule! {
        name: RuleName::Izhar,
        label: "izhar_noonSakinAndTanweens",
        buckets: BucketMask::NOON | BucketMask::TANWIN,
        pattern: concat!(
            r"(?<izhar_noonSakinAndTanweens>",
            noon_sakin!(),
            r"|\p{L}",
            tanwin!(),
            r")\x{20}*?(?:[\x{062D}\x{062E}\x{0639}\x{063A}\x{0623}\x{0625}\x{0647}]|\x{0627}\p{M}*\p{L})"
        ),
    }
}

pub fn ikhfaa() -> Rule {
    rule! {
        name: RuleName::Ikhfaa,
        label: "ikhfaa",
        buckets: BucketMask::NOON | BucketMask::TANWIN | BucketMask::MEEM,
        pattern: concat!(
            r"(?<ikhfaa_noonSakinAndTanweens>",
            noon_sakin!(),
            r"|\p{L}",
            tanwin_with_shadda!(),
            r")",
            silent_word_end!(),
            word_gap!(),
            r"[\x{062A}\x{062B}\x{062C}\x{062F}\x{0630}\x{0632}-\x{0638}\x{0641}-\x{0643}]\p{M}*",
            r"|(?<ikhfaa_meemSakin>",
            meem_sakin!(),
            r")",
            word_gap!(),
            r"\x{0628}\p{M}*"
        ),
    }
}

pub fn idgham_with_ghunna() -> Rule {
    rule! {
        name: RuleName::IdghamWithGhunna,
        label: "idghamWithGhunna",
        buckets: BucketMask::NOON | BucketMask::TANWIN | BucketMask::MEEM,
        pattern: concat!(
            r"(?<idghamWithGhunna_noonSakinAndTanweens>",
            noon_sakin!(),
            r"|\p{L}",
            tanwin_with_shadda!(),
            silent_word_end!(),
            r")",
            word_gap!(),
            r"[\x{064A}\x{06CC}\x{0645}\x{0646}\x{0648}]\p{M}*",
            r"|(?<idghamWithGhunna_meemSakin>",
            meem_sakin!(),
            r")",
            word_gap!(),
            r"\x{0645}\p{M}*\x{0651}\p{M}*"
        ),
    }
}

/// Only the small meem written over (or under) the letter is tagged.
pub fn iqlab() -> Rule {
    rule! {
        name: RuleName::Iqlab,
        label: "iqlab_noonSakinAndTanweens",
        buckets: BucketMask::SMALL_MEEM,
        pattern: r"\p{L}\p{M}*(?<iqlab_noonSakinAndTanweens>[\x{06E2}\x{06ED}])",
    }
}

/// ق ط ب ج د with sukoon, or ending the text (a stop), with optional shadda.
pub fn qalqala() -> Rule {
    rule! {
        name: RuleName::Qalqala,
        label: "qalqala",
        buckets: BucketMask::QALQALA,
        pattern: concat!(
            r"(?<qalqala>[\x{0642}\x{0637}\x{0628}\x{062C}\x{062F}]\x{0651}?",
            r"(?:[\x{0652}\x{06E1}]|[\x{064B}-\x{0650}\x{08F0}-\x{08F2}]?",
            small_high!(),
            r"?$))"
        ),
    }
}

pub fn ghunna() -> Rule {
    rule! {
        name: RuleName::Ghunna,
        label: "ghunna",
        buckets: BucketMask::SHADDA,
        pattern: r"(?<ghunna>[\x{0645}\x{0646}]\x{0651}\p{M}*)",
    }
}

/// Noon sakin or tanwin before lam/ra, and the sun-letter lam of the article.
pub fn idgham_without_ghunna() -> Rule {
    rule! {
        name: RuleName::IdghamWithoutGhunna,
        label: "idghamWithoutGhunna",
        buckets: BucketMask::NOON | BucketMask::TANWIN | BucketMask::SHADDA,
        pattern: concat!(
            r"(?<idghamWithoutGhunna_noonSakinAndTanweens>",
            noon_sakin!(),
            r"|\p{L}",
            tanwin_with_shadda!(),
            silent_word_end!(),
            r")",
            word_gap!(),
            r"[\x{0644}\x{0631}]\p{M}*",
            r"|[\x{0627}\x{0671}](?<idghamWithoutGhunna_shamsiyya>\x{0644})\p{L}\x{0651}\p{M}*"
        ),
    }
}

/// Madd letter directly followed by a hamza in the same word.
pub fn prolonging_muttasil() -> Rule {
    rule! {
        name: RuleName::Prolonging,
        label: "prolonging_muttasil",
        buckets: BucketMask::MADD,
        pattern: concat!(
            r"(?<prolonging_muttasil>",
            madd_letter!(),
            r"\x{2060}?\x{06E4}?)\x{0640}?",
            hamza!(),
            r"[^\x{0652}\x{06E1}\x{06DF}]"
        ),
    }
}

/// Madd letter at the end of a word, hamza at the start of the next; or a
/// madd sign at the very end of the text.
pub fn prolonging_munfasil() -> Rule {
    rule! {
        name: RuleName::Prolonging,
        label: "prolonging_munfasil",
        buckets: BucketMask::MADD,
        pattern: concat!(
            r"(?<prolonging_munfasil_1>",
            madd_letter!(),
            r"\x{06E4}?",
            small_high!(),
            r"?)(?:\x{0627}",
            sukoon!(),
            r")?\x{20}",
            hamza!(),
            r"|(?<prolonging_munfasil_2>",
            madd_letter!(),
            r"\x{06E4})$"
        ),
    }
}

/// Madd letter before a doubled letter, and the alef of the opening letters
/// written with a madd sign before lam sakin.
pub fn prolonging_lazim() -> Rule {
    rule! {
        name: RuleName::Prolonging,
        label: "prolonging_lazim",
        buckets: BucketMask::MADD,
        pattern: concat!(
            r"(?<prolonging_lazim_1>",
            madd_letter!(),
            r"\x{06E4}?)\p{L}\x{0651}",
            r"|\x{0621}\x{064E}(?<prolonging_lazim_2>\x{0627}\x{06E4})\x{0644}[\x{06E1}\x{0652}]"
        ),
    }
}

/// Alef after a plural waw: written, carries a sukoon sign, not read.
pub fn alef_tafreeq() -> Rule {
    rule! {
        name: RuleName::AlefTafreeq,
        label: "alefTafreeq",
        buckets: BucketMask::MADD,
        pattern: concat!(r"[\x{0648}\x{06E5}]\p{M}*(?<alefTafreeq>\x{0627}", sukoon!(), small_high!(), r"?)"),
    }
}

/// Alef wasla, unless preceded by `^` (used in some sources to mark a
/// pronounced start). Never matches at the very start of the text.
pub fn hamzatul_wasli() -> Rule {
    rule! {
        name: RuleName::HamzatulWasli,
        label: "hamzatulWasli",
        buckets: BucketMask::ALEF_WASLA,
        pattern: r"[^\^](?<hamzatulWasli>\x{0671})",
    }
}
