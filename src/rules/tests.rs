use crate::{RuleName, tokenize};

/// Tagged `(rule, text)` pairs of the full pipeline output.
fn tagged(input: &str) -> Vec<(RuleName, String)> {
    tokenize(input).into_iter().filter(|t| t.is_tagged()).map(|t| (t.rule, t.text)).collect()
}

#[test]
fn rule_examples_matching() {
    // Array of (expected_rule, expected_tagged_text, input)
    let cases: Vec<(RuleName, &str, &str)> = vec![
        // ٱللَّهِ
        (RuleName::Lafzatullah, "\u{0671}\u{0644}\u{0644}\u{0651}\u{064E}\u{0647}\u{0650}", "\u{0671}\u{0644}\u{0644}\u{0651}\u{064E}\u{0647}\u{0650}"),
        // مِنْ عَلِيمٌ
        (RuleName::Izhar, "\u{0646}\u{0652}", "\u{0645}\u{0650}\u{0646}\u{0652} \u{0639}\u{064E}\u{0644}\u{0650}\u{064A}\u{0645}\u{064C}"),
        // مِنْ تَحْتِ
        (RuleName::Ikhfaa, "\u{0646}\u{0652}", "\u{0645}\u{0650}\u{0646}\u{0652} \u{062A}\u{064E}\u{062D}\u{0652}\u{062A}\u{0650}"),
        // هُمْ بِهِ
        (RuleName::Ikhfaa, "\u{0645}\u{0652}", "\u{0647}\u{064F}\u{0645}\u{0652} \u{0628}\u{0650}\u{0647}\u{0650}"),
        // مَن يَقُولُ
        (RuleName::IdghamWithGhunna, "\u{0646}", "\u{0645}\u{064E}\u{0646} \u{064A}\u{064E}\u{0642}\u{064F}\u{0648}\u{0644}\u{064F}"),
        // لَهُم مَّا
        (RuleName::IdghamWithGhunna, "\u{0645}", "\u{0644}\u{064E}\u{0647}\u{064F}\u{0645} \u{0645}\u{0651}\u{064E}\u{0627}"),
        // مِنۢ بَعْدِ
        (RuleName::Iqlab, "\u{06E2}", "\u{0645}\u{0650}\u{0646}\u{06E2} \u{0628}\u{064E}\u{0639}\u{0652}\u{062F}\u{0650}"),
        // ٱلْفَلَقِ (stop on qaf)
        (RuleName::Qalqala, "\u{0642}\u{0650}", "\u{0671}\u{0644}\u{0652}\u{0641}\u{064E}\u{0644}\u{064E}\u{0642}\u{0650}"),
        // يَجْعَلُ
        (RuleName::Qalqala, "\u{062C}\u{0652}", "\u{064A}\u{064E}\u{062C}\u{0652}\u{0639}\u{064E}\u{0644}\u{064F}"),
        // إِنَّ
        (RuleName::Ghunna, "\u{0646}\u{0651}\u{064E}", "\u{0625}\u{0650}\u{0646}\u{0651}\u{064E}"),
        // مِن رَّبِّهِمْ
        (RuleName::IdghamWithoutGhunna, "\u{0646}", "\u{0645}\u{0650}\u{0646} \u{0631}\u{0651}\u{064E}\u{0628}\u{0651}\u{0650}\u{0647}\u{0650}\u{0645}\u{0652}"),
        // ٱلشَّمْسِ
        (RuleName::IdghamWithoutGhunna, "\u{0644}", "\u{0671}\u{0644}\u{0634}\u{0651}\u{064E}\u{0645}\u{0652}\u{0633}\u{0650}"),
        // قُل لَّكُمْ
        (RuleName::IdghamWithoutGhunna, "\u{0644}", "\u{0642}\u{064F}\u{0644} \u{0644}\u{0651}\u{064E}\u{0643}\u{064F}\u{0645}\u{0652}"),
        // قَد تَّبَيَّنَ
        (RuleName::IdghamWithoutGhunna, "\u{062F}", "\u{0642}\u{064E}\u{062F} \u{062A}\u{0651}\u{064E}\u{0628}\u{064E}\u{064A}\u{0651}\u{064E}\u{0646}\u{064E}"),
        // نَخْلُقكُّم
        (RuleName::IdghamWithoutGhunna, "\u{0642}", "\u{0646}\u{064E}\u{062E}\u{0652}\u{0644}\u{064F}\u{0642}\u{0643}\u{0651}\u{064F}\u{0645}"),
        // قُل رَّبِّ
        (RuleName::IdghamWithoutGhunna, "\u{0644}", "\u{0642}\u{064F}\u{0644} \u{0631}\u{0651}\u{064E}\u{0628}\u{0651}\u{0650}"),
        // ءَاۤلْ
        (RuleName::Prolonging, "\u{0627}\u{06E4}", "\u{0621}\u{064E}\u{0627}\u{06E4}\u{0644}\u{0652}"),
        // بِمَاۤ (madd sign ending the text)
        (RuleName::Prolonging, "\u{0627}\u{06E4}", "\u{0628}\u{0650}\u{0645}\u{064E}\u{0627}\u{06E4}"),
        // خَوْفْ (lin, stopping)
        (RuleName::Prolonging, "\u{0648}\u{0652}", "\u{062E}\u{064E}\u{0648}\u{0652}\u{0641}\u{0652}"),
        // عَلِيمًا (ivad)
        (RuleName::Prolonging, "\u{0627}", "\u{0639}\u{064E}\u{0644}\u{0650}\u{064A}\u{0645}\u{064B}\u{0627}"),
        // جَاۤءَ
        (RuleName::Prolonging, "\u{0627}\u{06E4}", "\u{062C}\u{064E}\u{0627}\u{06E4}\u{0621}\u{064E}"),
        // بِمَاۤ أُ
        (RuleName::Prolonging, "\u{0627}\u{06E4}", "\u{0628}\u{0650}\u{0645}\u{064E}\u{0627}\u{06E4} \u{0623}\u{064F}"),
        // ضَآلِّ
        (RuleName::Prolonging, "\u{0622}", "\u{0636}\u{064E}\u{0622}\u{0644}\u{0651}\u{0650}"),
        // قَالَ
        (RuleName::Prolonging, "\u{0627}", "\u{0642}\u{064E}\u{0627}\u{0644}\u{064E}"),
        // قَالُوا۟
        (RuleName::AlefTafreeq, "\u{0627}\u{06DF}", "\u{0642}\u{064E}\u{0627}\u{0644}\u{064F}\u{0648}\u{0627}\u{06DF}"),
        // فَٱسْتَقِمْ
        (RuleName::HamzatulWasli, "\u{0671}", "\u{0641}\u{064E}\u{0671}\u{0633}\u{0652}\u{062A}\u{064E}\u{0642}\u{0650}\u{0645}\u{0652}"),
    ];

    for (rule, expected, input) in cases {
        let found = tagged(input);
        assert!(
            found.iter().any(|(r, text)| *r == rule && text == expected),
            "expected {rule} on {expected:?} in {input:?} (tagged: {found:?})"
        );
    }
}

#[test]
fn divine_name_is_one_token() {
    let input = "\u{0671}\u{0644}\u{0644}\u{0651}\u{064E}\u{0647}\u{0650}";
    let tokens = tokenize(input);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].rule, RuleName::Lafzatullah);
}

#[test]
fn divine_name_excludes_the_following_space() {
    let input = "\u{0671}\u{0644}\u{0644}\u{0651}\u{064E}\u{0647}\u{0650} ";
    let tokens = tokenize(input);
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].rule, RuleName::Lafzatullah);
    assert_eq!(tokens[1].rule, RuleName::None);
    assert_eq!(tokens[1].text, " ");
}

#[test]
fn izhar_leaves_the_throat_letter_untagged() {
    let input = "\u{0645}\u{0650}\u{0646}\u{0652} \u{0639}\u{064E}\u{0644}\u{0650}\u{064A}\u{0645}\u{064C}";
    let tokens = tokenize(input);
    let idx = tokens.iter().position(|t| t.rule == RuleName::Izhar).unwrap();
    assert_eq!((tokens[idx].start, tokens[idx].end), (4, 8));
    let next = &tokens[idx + 1];
    assert_ne!(next.rule, RuleName::Izhar);
    assert!(next.text.contains('\u{0639}'));
}

#[test]
fn marked_alef_wasla_is_not_tagged() {
    assert!(tagged("^\u{0671}\u{0633}").iter().all(|(r, _)| *r != RuleName::HamzatulWasli));
    // nothing precedes it at the start of the text
    assert!(tagged("\u{0671}\u{0633}").iter().all(|(r, _)| *r != RuleName::HamzatulWasli));
}

#[test]
fn idgham_scanners_keep_the_doubled_letter_untagged() {
    // قَد تَّبَيَّنَ: the doubled ta is context, not part of the idgham tag
    let input = "\u{0642}\u{064E}\u{062F} \u{062A}\u{0651}\u{064E}\u{0628}\u{064E}\u{064A}\u{0651}\u{064E}\u{0646}\u{064E}";
    let tokens = tokenize(input);
    let idgham = tokens.iter().find(|t| t.rule == RuleName::IdghamWithoutGhunna).unwrap();
    assert_eq!(idgham.text, "\u{062F}");
    assert!(!tokens.iter().any(|t| t.is_tagged() && t.text.contains('\u{062A}')));
}
