//! Career archetype matching for a completed self-assessment.
//!
//! A profile is reduced to [`Insights`], each catalog archetype is scored across
//! six weighted factors, and the results are ranked best first. The service and
//! router layers sanitize and store profiles ahead of scoring.

pub mod catalog;
pub mod export;
pub mod insights;
pub mod matching;
pub mod paths;
pub mod profile;
pub mod ranking;
pub mod repository;
pub mod router;
pub mod sanitize;
pub mod service;
pub mod summary;

#[cfg(test)]
mod tests;

pub use catalog::{
    list_archetypes, standard_archetypes, ArchetypeCatalog, ArchetypeDefinition, CatalogError,
};
pub use export::write_matches_csv;
pub use insights::{extract_insights, Insights};
pub use matching::{
    score_archetype, KeywordMatcher, MatchResult, MatchingEngine, MatchingFactors,
    ScoreBreakdown, ScoringWeights, STANDARD_WEIGHTS,
};
pub use paths::{career_paths, CareerPath};
pub use profile::{
    AssessmentProfile, DreamJob, DreamJobVision, FiveWhyProblem, FriendFeedback, LifeArea,
    ProfileBuilder, StrengthsInventory, ValuesSelection, WheelOfLife, WorkRequirement,
    WorkStrengths, WorkTask,
};
pub use ranking::{rank_archetypes, RankedArchetype};
pub use repository::{AssessmentId, AssessmentRecord, AssessmentRepository, RepositoryError};
pub use router::assessment_router;
pub use sanitize::{ProfileLimits, ProfileSanitizer, SanitizeAdjustment, SanitizedProfile};
pub use service::{ArchetypeDetail, AssessmentService, AssessmentServiceError, SavedAssessment};
pub use summary::{ProblemInsight, ProfileSummary};
