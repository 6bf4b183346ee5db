//! The built-in tajweed rule library.
//!
//! - `patterns.rs`: rules expressed as `regex` patterns with named groups.
//! - `scanners.rs`: rules that need backreferences or lookahead.
//! - `letters.rs`: character constants and classes shared by the scanners.
//!
//! Declaration order matters only for the order in which candidates are
//! produced; the resolver decides by priority and start offset.

pub mod letters;
mod patterns;
mod scanners;

#[cfg(test)]
mod tests;

use crate::{BucketMask, Rule, RuleName};

/// Every built-in rule, in matching order.
pub fn default_rules() -> Vec<Rule> {
    vec![
        patterns::lafzatullah(),
        patterns::izhar(),
        patterns::ikhfaa(),
        patterns::idgham_with_ghunna(),
        patterns::iqlab(),
        patterns::qalqala(),
        patterns::ghunna(),
        patterns::idgham_without_ghunna(),
        rule! {
            name: RuleName::IdghamWithoutGhunna,
            label: "idghamWithoutGhunna_misleyn",
            buckets: BucketMask::SHADDA,
            scan: scanners::misleyn,
        },
        rule! {
            name: RuleName::IdghamWithoutGhunna,
            label: "idghamWithoutGhunna_mutajaniseyn_1",
            buckets: BucketMask::SHADDA,
            scan: scanners::mutajaniseyn_ta_dal,
        },
        rule! {
            name: RuleName::IdghamWithoutGhunna,
            label: "idghamWithoutGhunna_mutajaniseyn_2",
            buckets: BucketMask::SHADDA,
            scan: scanners::mutajaniseyn_interdental,
        },
        rule! {
            name: RuleName::IdghamWithoutGhunna,
            label: "idghamWithoutGhunna_mutajaniseyn_3",
            buckets: BucketMask::SHADDA,
            scan: scanners::mutajaniseyn_labial,
        },
        rule! {
            name: RuleName::IdghamWithoutGhunna,
            label: "idghamWithoutGhunna_mutagaribeyn_1",
            buckets: BucketMask::SHADDA,
            scan: scanners::mutagaribeyn_qaf_kaf,
        },
        rule! {
            name: RuleName::IdghamWithoutGhunna,
            label: "idghamWithoutGhunna_mutagaribeyn_2",
            buckets: BucketMask::SHADDA,
            scan: scanners::mutagaribeyn_noon_lam_ra,
        },
        patterns::prolonging_muttasil(),
        patterns::prolonging_munfasil(),
        patterns::prolonging_lazim(),
        rule! {
            name: RuleName::Prolonging,
            label: "prolonging_byTwo",
            buckets: BucketMask::MADD,
            scan: scanners::extension_by_two,
        },
        patterns::alef_tafreeq(),
        patterns::hamzatul_wasli(),
    ]
}
