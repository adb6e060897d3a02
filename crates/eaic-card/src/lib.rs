//! # eaic-card — Card Compilation Engine
//!
//! Turns an interaction context plus a rubric band selection into a
//! sealed EAI card: gates enforced, policy derived, evidence linked,
//! paste text rendered, schema checked, checksum written. The compiler
//! performs no I/O and asks an injected [`CardGenerator`] for ids and
//! timestamps, so the whole pipeline is reproducible under test.
//!
//! ```no_run
//! use eaic_card::{CardCompiler, CardInput, CompileOutcome, SystemGenerator};
//! use eaic_schema::CompiledSchema;
//! use eaic_ssot::RuleTable;
//!
//! # fn run(table: &RuleTable, schema: &CompiledSchema, input: CardInput)
//! # -> Result<(), eaic_core::EaicError> {
//! let generator = SystemGenerator;
//! let compiler = CardCompiler::new(table, schema, &generator);
//! match compiler.compile(input)? {
//!     CompileOutcome::Sealed(card) => println!("{}", card.meta.card_id),
//!     CompileOutcome::Invalid { violations, .. } => eprintln!("{violations:?}"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod card;
pub mod compiler;
pub mod context;
pub mod contract;
pub mod generate;
pub mod policy;
pub mod prompt;

pub use card::{Card, CardMeta, CardStatus, TraceRequirements, ValidationReport};
pub use compiler::{
    CardCompiler, CardInput, CompileOutcome, CARD_VERSION, DEFAULT_TRIGGER_DIMENSION,
    GENERATOR_VERSION,
};
pub use context::{Audience, CardContext, Stakes};
pub use contract::OutputContract;
pub use generate::{CardGenerator, CardId, FixedGenerator, SystemGenerator};
pub use policy::{default_policy_for, Policy, Transparency, Verification};
pub use prompt::{build_paste_text, PromptPack, SYSTEM_PROMPT, USER_PROMPT_TEMPLATE};
