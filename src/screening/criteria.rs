use serde::{Deserialize, Serialize};

/// Recruiter-defined screening criteria. Each block toggles independently;
/// inactive blocks contribute nothing to the score and produce no badge.
///
/// The five scored criteria weigh 15 + 30 + 20 + 15 + 20 = 100. Disabling a
/// criterion lowers the achievable maximum; the total is deliberately not
/// rescaled by the number of active blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CriteriaConfig {
    pub grade: CriterionToggle,
    #[serde(rename = "experience_globale")]
    pub global_experience: CriterionToggle,
    #[serde(rename = "niveau_etudes")]
    pub education: CriterionToggle,
    pub discipline: CriterionToggle,
    #[serde(rename = "secteur_experience")]
    pub sector: CriterionToggle,
    #[serde(rename = "localisation")]
    pub location: CriterionToggle,
    #[serde(rename = "competences")]
    pub key_skills: CriterionToggle,
}

/// One toggleable criterion block. The requirement's interpretation depends
/// on the criterion: a grade or discipline label, an experience-range label,
/// a diploma name, a sector name, a location, or a comma-separated skill
/// list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CriterionToggle {
    pub active: bool,
    pub requirement: String,
}

impl CriterionToggle {
    pub fn required(requirement: impl Into<String>) -> Self {
        Self {
            active: true,
            requirement: requirement.into(),
        }
    }
}

/// The scored criteria and their fixed weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CriterionKind {
    Grade,
    GlobalExperience,
    EducationLevel,
    Discipline,
    Sector,
}

impl CriterionKind {
    /// Maximum sub-score this criterion can contribute.
    pub const fn weight(self) -> u8 {
        match self {
            CriterionKind::Grade => 15,
            CriterionKind::GlobalExperience => 30,
            CriterionKind::EducationLevel => 20,
            CriterionKind::Discipline => 15,
            CriterionKind::Sector => 20,
        }
    }

    /// Display label, matching the recruiter-facing vocabulary.
    pub const fn label(self) -> &'static str {
        match self {
            CriterionKind::Grade => "Grade",
            CriterionKind::GlobalExperience => "Expérience globale",
            CriterionKind::EducationLevel => "Niveau d'études",
            CriterionKind::Discipline => "Discipline",
            CriterionKind::Sector => "Secteur d'expérience",
        }
    }
}

/// Closed numeric ranges behind the experience-requirement labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceBracket {
    UnderTwo,
    TwoToSix,
    SixToTen,
    TenToFifteen,
    FifteenPlus,
}

impl ExperienceBracket {
    /// Parse a recruiter-facing range label. Unknown labels default to the
    /// lowest bracket.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "entre 2 et 6 ans" => Self::TwoToSix,
            "entre 6 et 10 ans" => Self::SixToTen,
            "entre 10 et 15 ans" => Self::TenToFifteen,
            "+15 ans" => Self::FifteenPlus,
            _ => Self::UnderTwo,
        }
    }

    /// Inclusive bounds; `None` means unbounded above.
    pub const fn bounds(self) -> (u32, Option<u32>) {
        match self {
            Self::UnderTwo => (0, Some(2)),
            Self::TwoToSix => (2, Some(6)),
            Self::SixToTen => (6, Some(10)),
            Self::TenToFifteen => (10, Some(15)),
            Self::FifteenPlus => (15, None),
        }
    }
}
