//! Tokenization engine.
//!
//! ## How the parts work together
//!
//! ```text
//! rules (all)  ──┐
//!               │  RuleLibrary::new             (library.rs)
//!               └───────────────┬──────────────
//!                               │
//! input ── TriggerInfo::scan ───┼─ select active rules (buckets)
//!         (trigger.rs)          │
//!                               v
//!                     collect_candidates (matcher.rs)
//!                       - every rule, whole input
//!                       - tagged range only, context excluded
//!                               │
//!                     dedup_candidates (dedup.rs)
//!                               │
//!                     resolve_overlaps (resolve.rs)
//!                       - priority order, whole-span drops
//!                       - pass cap + greedy fallback
//!                               │
//!                     assemble (assemble.rs)
//!                               │
//!                               v
//!                          Vec<Token>
//! ```
//!
//! ## Responsibilities by module
//!
//! - `library.rs`: compiles `Rule`s into a shared, immutable `RuleLibrary`;
//!   rejects malformed rules without failing.
//! - `trigger.rs`: cheap character-class scan used to skip impossible rules.
//! - `matcher.rs`: runs one compiled rule over the input.
//! - `dedup.rs`: removes empty, misaligned and duplicate candidates.
//! - `resolve.rs`: priority-based overlap resolution.
//! - `assemble.rs`: fills gaps with `none` tokens.
//! - `tokenizer.rs`: wires the stages together for one input.
//! - `metrics.rs`: per-stage timings and counts.
//!
//! ## Debugging
//!
//! The engine logs through `tracing`: `debug` for per-call summaries, `trace`
//! for individual overlap decisions, `warn` for rejected rules and the
//! resolution pass cap.

#[path = "engine/assemble.rs"]
mod assemble;
#[path = "engine/dedup.rs"]
mod dedup;
#[path = "engine/library.rs"]
mod library;
#[path = "engine/matcher.rs"]
mod matcher;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/resolve.rs"]
mod resolve;
#[path = "engine/tokenizer.rs"]
mod tokenizer;
#[path = "engine/trigger.rs"]
mod trigger;

pub use library::{BucketMask, CompiledRule, RuleLibrary};
pub use tokenizer::Tokenizer;
