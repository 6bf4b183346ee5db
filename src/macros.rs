/// Lazily compiled, process-wide regex for a literal pattern.
///
/// Only for fixed character-class helpers; rule patterns are compiled by
/// `RuleLibrary::new` so that a bad pattern is reported instead of panicking.
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Declare a library rule.
///
/// ```ignore
/// rule! {
///     name: RuleName::Ghunna,
///     label: "ghunna",
///     buckets: BucketMask::SHADDA,
///     pattern: r"(?<ghunna>[\x{0645}\x{0646}]\x{0651}\p{M}*)",
/// }
/// ```
///
/// Use `scan: some_fn` instead of `pattern:` for hand-written matchers. The
/// priority defaults to the rule name's priority.
macro_rules! rule {
    (
        name: $name:expr,
        label: $label:literal,
        $(priority: $priority:expr,)?
        buckets: $buckets:expr,
        pattern: $pat:expr
        $(,)?
    ) => {{
        let rule = $crate::Rule::pattern($name, $label, $pat).with_buckets($buckets);
        $(let rule = rule.with_priority($priority);)?
        rule
    }};
    (
        name: $name:expr,
        label: $label:literal,
        $(priority: $priority:expr,)?
        buckets: $buckets:expr,
        scan: $scan:expr
        $(,)?
    ) => {{
        let rule = $crate::Rule::scanner($name, $label, $scan).with_buckets($buckets);
        $(let rule = rule.with_priority($priority);)?
        rule
    }};
}
