//! Résumé screening core: candidate record + recruiter criteria in, weighted
//! score breakdown and display summary out.
//!
//! The core is purely functional; each call is independent and side-effect
//! free aside from logging, so hosts may fan out across candidates freely.

pub mod candidate;
pub mod criteria;
pub mod dates;
pub mod scoring;
pub mod similarity;
pub mod summary;
pub mod tables;

#[cfg(test)]
mod tests;

pub use candidate::{CandidateRecord, Diploma, Experience};
pub use criteria::{CriteriaConfig, CriterionKind, CriterionToggle, ExperienceBracket};
pub use scoring::{Badge, CriterionScore, ScoreBreakdown, ScoringEngine};
pub use summary::{score_candidate, CandidateSummary, Formation, Introduction, ScreeningError};
