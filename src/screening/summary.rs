use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info};

use super::candidate::{CandidateRecord, Experience};
use super::criteria::CriteriaConfig;
use super::scoring::{ScoreBreakdown, ScoringEngine};

/// Errors surfaced to the caller. Per-field and per-entry problems are
/// absorbed with warnings during deserialization; only a record that is not
/// an attribute mapping at all reaches this level.
#[derive(Debug, Error)]
pub enum ScreeningError {
    #[error("candidate record for '{source_id}' is not an attribute mapping")]
    MalformedRecord { source_id: String },
    #[error("failed to structure candidate '{source_id}': {detail}")]
    Assembly { source_id: String, detail: String },
}

/// Score one extracted candidate record against the recruiter criteria and
/// assemble the display summary.
///
/// Never panics on junk input: list entries that are not objects are skipped
/// with a warning, unresolvable dates reduce confidence instead of failing,
/// and the only error case is a record that is not a JSON object.
pub fn score_candidate(
    raw: &Value,
    criteria: &CriteriaConfig,
    source_id: &str,
    present_year: i32,
) -> Result<CandidateSummary, ScreeningError> {
    if !raw.is_object() {
        error!(source_id, "candidate record is not a JSON object");
        return Err(ScreeningError::MalformedRecord {
            source_id: source_id.to_string(),
        });
    }

    // Lenient field-level deserialization: this only fails if the document
    // shape is fundamentally wrong, which the object check above rules out.
    let candidate: CandidateRecord =
        serde_json::from_value(raw.clone()).map_err(|err| ScreeningError::Assembly {
            source_id: source_id.to_string(),
            detail: err.to_string(),
        })?;

    let engine = ScoringEngine::new(criteria.clone(), present_year);
    let score = engine.score(&candidate);

    info!(source_id, total = score.total, "candidate summary assembled");
    Ok(CandidateSummary::assemble(&candidate, score))
}

/// Final structured output record, keyed for the French-speaking consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateSummary {
    #[serde(rename = "Introduction")]
    pub introduction: Introduction,
    #[serde(rename = "Formations")]
    pub formations: Vec<Formation>,
    #[serde(rename = "Compétences Clés")]
    pub key_skills: Vec<String>,
    #[serde(rename = "Soft Skills")]
    pub soft_skills: Vec<String>,
    #[serde(rename = "Stages")]
    pub internships: Vec<Experience>,
    #[serde(rename = "Expériences Professionnelles")]
    pub professional_experiences: Vec<Experience>,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Téléphone")]
    pub phone: String,
    #[serde(rename = "Date de Naissance")]
    pub birth_date: String,
    #[serde(rename = "Score")]
    pub score: ScoreBreakdown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Introduction {
    #[serde(rename = "Nom et Prénom")]
    pub full_name: String,
    #[serde(rename = "Âge")]
    pub age: Option<u32>,
    #[serde(rename = "Genre")]
    pub gender: String,
    #[serde(rename = "Localisation")]
    pub locations: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Formation {
    #[serde(rename = "Établissement")]
    pub institution: String,
    #[serde(rename = "Diplôme")]
    pub diploma: String,
    #[serde(rename = "Période")]
    pub period: String,
    #[serde(rename = "Statut")]
    pub status: String,
}

impl CandidateSummary {
    fn assemble(candidate: &CandidateRecord, score: ScoreBreakdown) -> Self {
        let introduction = Introduction {
            full_name: display_name(
                candidate.family_name.as_deref(),
                candidate.given_name.as_deref(),
            ),
            age: candidate.age,
            gender: candidate.gender.clone().unwrap_or_default(),
            locations: joined_locations(candidate),
        };

        let formations = candidate
            .diplomas
            .iter()
            .map(|diploma| Formation {
                institution: diploma.institution.clone().unwrap_or_default(),
                diploma: diploma.name.clone().unwrap_or_default(),
                period: diploma.period.clone().unwrap_or_default(),
                status: diploma.status.clone().unwrap_or_default(),
            })
            .collect();

        Self {
            introduction,
            formations,
            key_skills: candidate.key_skills.clone(),
            soft_skills: candidate.soft_skills.clone(),
            internships: candidate.internships.clone(),
            professional_experiences: candidate.professional_experiences.clone(),
            email: candidate.email.clone().unwrap_or_default(),
            phone: candidate.phone.clone().unwrap_or_default(),
            birth_date: candidate.birth_date.clone().unwrap_or_default(),
            score,
        }
    }
}

/// UPPERCASED family name plus Capitalized given name; either side may be
/// missing, and a fully anonymous record reads "Inconnu".
fn display_name(family_name: Option<&str>, given_name: Option<&str>) -> String {
    let family = family_name.unwrap_or("").trim().to_uppercase();
    let given = capitalize(given_name.unwrap_or("").trim());

    match (family.is_empty(), given.is_empty()) {
        (false, false) => format!("{family} {given}"),
        (false, true) => family,
        (true, false) => given,
        (true, true) => "Inconnu".to_string(),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Distinct non-empty locations across experiences and internships, in first
/// appearance order, joined with ", ".
fn joined_locations(candidate: &CandidateRecord) -> String {
    let mut seen = Vec::new();
    for position in candidate.all_positions() {
        if let Some(location) = position.location.as_deref() {
            if !location.is_empty() && !seen.contains(&location) {
                seen.push(location);
            }
        }
    }
    seen.join(", ")
}
