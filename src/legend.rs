//! Set of rules present in a token stream, e.g. to render a legend next to an
//! ayah showing only the rules that actually occur in it.

use crate::{RuleName, Token};

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RuleSet: u16 {
        const LAFZATULLAH           = 1 << 0;
        const IZHAR                 = 1 << 1;
        const IKHFAA                = 1 << 2;
        const IDGHAM_WITH_GHUNNA    = 1 << 3;
        const IQLAB                 = 1 << 4;
        const QALQALA               = 1 << 5;
        const IDGHAM_WITHOUT_GHUNNA = 1 << 6;
        const GHUNNA                = 1 << 7;
        const PROLONGING            = 1 << 8;
        const ALEF_TAFREEQ          = 1 << 9;
        const HAMZATUL_WASLI        = 1 << 10;
    }
}

impl RuleSet {
    /// The flag for `rule`; empty for `RuleName::None`.
    pub fn from_rule(rule: RuleName) -> Self {
        match rule {
            RuleName::Lafzatullah => RuleSet::LAFZATULLAH,
            RuleName::Izhar => RuleSet::IZHAR,
            RuleName::Ikhfaa => RuleSet::IKHFAA,
            RuleName::IdghamWithGhunna => RuleSet::IDGHAM_WITH_GHUNNA,
            RuleName::Iqlab => RuleSet::IQLAB,
            RuleName::Qalqala => RuleSet::QALQALA,
            RuleName::IdghamWithoutGhunna => RuleSet::IDGHAM_WITHOUT_GHUNNA,
            RuleName::Ghunna => RuleSet::GHUNNA,
            RuleName::Prolonging => RuleSet::PROLONGING,
            RuleName::AlefTafreeq => RuleSet::ALEF_TAFREEQ,
            RuleName::HamzatulWasli => RuleSet::HAMZATUL_WASLI,
            RuleName::None => RuleSet::empty(),
        }
    }

    pub fn from_tokens(tokens: &[Token]) -> Self {
        tokens.iter().fold(RuleSet::empty(), |acc, t| acc | RuleSet::from_rule(t.rule))
    }

    pub fn contains_rule(&self, rule: RuleName) -> bool {
        let flag = RuleSet::from_rule(rule);
        !flag.is_empty() && self.contains(flag)
    }

    /// Rules in the set, strongest first.
    pub fn rules(&self) -> impl Iterator<Item = RuleName> + '_ {
        RuleName::ALL.into_iter().filter(|&r| self.contains_rule(r))
    }
}
