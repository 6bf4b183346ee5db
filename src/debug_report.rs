use tajweed::{RuleName, RuleSet, Token, TokenizeVerbose};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        /// Paint with a numeric SGR foreground code.
        pub fn fg(&self, s: impl AsRef<str>, code: u8) -> String {
            self.paint(s, &format!("\x1b[{code}m"))
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            self.paint(s, BOLD)
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            self.paint(s, DIM)
        }
    }
}

/// SGR foreground code of a rule's highlight.
fn rule_color(rule: RuleName) -> u8 {
    match rule {
        RuleName::Lafzatullah => 91,
        RuleName::Izhar => 36,
        RuleName::Ikhfaa => 35,
        RuleName::IdghamWithGhunna => 32,
        RuleName::Iqlab => 34,
        RuleName::Qalqala => 33,
        RuleName::IdghamWithoutGhunna => 92,
        RuleName::Ghunna => 31,
        RuleName::Prolonging => 94,
        RuleName::AlefTafreeq => 90,
        RuleName::HamzatulWasli => 95,
        RuleName::None => 39,
    }
}

/// The input with every tagged token painted in its rule's color, followed by
/// a legend of the rules that occur.
pub fn print_tokens(tokens: &[Token], color: bool) {
    let palette = ansi::Palette::new(color);

    let line: String = tokens
        .iter()
        .map(|t| if t.is_tagged() { palette.fg(&t.text, rule_color(t.rule)) } else { t.text.clone() })
        .collect();
    println!("{line}");

    for t in tokens.iter().filter(|t| t.is_tagged()) {
        println!(
            "  {} {} {}",
            palette.paint(format!("{:>4}..{:<4}", t.start, t.end), ansi::GRAY),
            palette.fg(format!("{:<20}", t.rule.as_str()), rule_color(t.rule)),
            t.text
        );
    }

    let legend = RuleSet::from_tokens(tokens);
    if !legend.is_empty() {
        let names: Vec<String> = legend.rules().map(|r| palette.fg(r.as_str(), rule_color(r))).collect();
        println!("{} {}", palette.dim("rules:"), names.join(", "));
    }
}

pub fn print_run(res: &TokenizeVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    let details = &res.details;
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Tokenizing: \"{}\"", res.text), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Rules ━━━", ansi::GRAY));
    if details.active_rules.is_empty() {
        println!("{}", palette.dim("  No rule admitted by the trigger scan"));
    }
    for (label, found) in &details.matches_per_rule {
        println!(
            "  {} {}",
            palette.paint(format!("{label:<38}"), ansi::BLUE),
            if *found > 0 {
                palette.paint(format!("✓ {found} matches"), ansi::GREEN)
            } else {
                palette.dim(format!("✗ {found} matches"))
            }
        );
    }

    println!("\n{}", palette.paint("━━━ Resolution ━━━", ansi::GRAY));
    println!(
        "  {} raw candidates  │  {} kept  │  {} passes{}",
        details.raw_candidates,
        details.resolved.len(),
        details.passes,
        if details.capped { palette.paint("  │  capped", ansi::YELLOW) } else { String::new() }
    );
    for (idx, c) in details.resolved.iter().enumerate() {
        println!(
            "  {} {} {} {}",
            palette.paint(format!("[{idx}]"), ansi::GRAY),
            palette.bold(palette.fg(c.label, rule_color(c.rule))),
            palette.dim("│"),
            palette.paint(format!("span {}..{}", c.start, c.end), ansi::YELLOW),
        );
    }

    println!("\n{}", palette.paint("━━━ Tokens ━━━", ansi::GRAY));
    print_tokens(&res.tokens, color);

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Matching: {}  │  Resolve: {}  │  Assemble: {}",
        palette.paint(format!("{:?}", details.total), ansi::GREEN),
        palette.paint(format!("{:?}", details.matching), ansi::CYAN),
        palette.dim(format!("{:?}", details.resolve)),
        palette.dim(format!("{:?}", details.assemble)),
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_rule_has_its_own_color() {
        let colors: HashSet<u8> = RuleName::ALL.iter().map(|&r| rule_color(r)).collect();
        assert_eq!(colors.len(), RuleName::ALL.len());
    }

    #[test]
    fn disabled_palette_leaves_text_plain() {
        let palette = ansi::Palette::new(false);
        assert_eq!(palette.fg("\u{0646}", rule_color(RuleName::Izhar)), "\u{0646}");
        assert_eq!(palette.bold("x"), "x");

        let palette = ansi::Palette::new(true);
        assert_eq!(palette.fg("x", 36), "\x1b[36mx\x1b[0m");
    }
}
