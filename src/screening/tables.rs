//! Constant lookup tables backing the scoring rules, plus the reference
//! vocabularies recruiters pick criteria from.
//!
//! Every lookup documents its fallback for unknown keys; none of them fail.

/// Long-form diploma names that normalize to a short education code.
/// Unmapped names pass through lowercased.
const DIPLOMA_SYNONYMS: &[(&str, &str)] = &[
    (
        "licence professionnelle en génie électrique et énergies renouvelables",
        "bac+3",
    ),
    (
        "diplôme de technicien en électricité de maintenance industrielle",
        "bac+2",
    ),
    (
        "diplôme de spécialisation en électricité de bâtiment",
        "bac+2",
    ),
    ("baccalauréat en sciences physiques et chimiques", "bac"),
];

/// Numeric education level per normalized diploma code. Unknown codes sit at
/// level 0, the most conservative reading.
const DIPLOMA_LEVELS: &[(&str, u8)] = &[
    ("bac", 0),
    ("bac+1", 1),
    ("bac+2", 2),
    ("bac+3", 3),
    ("licence", 3),
    ("bac+4", 4),
    ("bac+5", 5),
    ("master", 5),
    ("doctorat", 8),
];

/// Discipline synonyms bridging the extractor's French labels and the
/// recruiter-facing vocabulary.
const DISCIPLINE_SYNONYMS: &[(&str, &str)] = &[
    ("génie électrique et énergies renouvelables", "electrical"),
];

/// Keywords that signal sector experience in free text. Unknown sectors fall
/// back to matching the sector name itself.
const SECTOR_KEYWORDS: &[(&str, &[&str])] = &[
    ("energy", &["électrique", "énergie", "renewable", "électricité"]),
    ("construction", &["chantier", "construction"]),
    ("it", &["informatique", "data"]),
    ("manufacturing", &["industriel", "maintenance"]),
];

/// Normalize a lowercased diploma name to its short code, or pass it through.
pub fn normalize_diploma(name: &str) -> &str {
    DIPLOMA_SYNONYMS
        .iter()
        .find(|(long_form, _)| *long_form == name)
        .map(|(_, code)| *code)
        .unwrap_or(name)
}

/// Education level for a normalized diploma name; unknown names are level 0.
pub fn diploma_level(normalized: &str) -> u8 {
    DIPLOMA_LEVELS
        .iter()
        .find(|(code, _)| *code == normalized)
        .map(|(_, level)| *level)
        .unwrap_or(0)
}

/// Normalize a lowercased discipline label, or pass it through.
pub fn normalize_discipline(discipline: &str) -> &str {
    DISCIPLINE_SYNONYMS
        .iter()
        .find(|(label, _)| *label == discipline)
        .map(|(_, normalized)| *normalized)
        .unwrap_or(discipline)
}

/// Keyword list for a lowercased sector name, if the sector is known.
pub fn sector_keywords(sector: &str) -> Option<&'static [&'static str]> {
    SECTOR_KEYWORDS
        .iter()
        .find(|(name, _)| *name == sector)
        .map(|(_, keywords)| *keywords)
}

/// Sectors offered in the recruiter criteria picker.
pub const SECTORS: &[&str] = &[
    "Acids",
    "Buildings",
    "Energy",
    "Fertilizer & Chemical",
    "Ports",
    "Transport",
    "Water",
    "Mining",
];

/// Job grades offered in the recruiter criteria picker.
pub const GRADES: &[&str] = &[
    "administrative assistant",
    "Constructability Engineer",
    "construction Supervisor",
    "construction Superintendent",
    "construction engineer",
    "Quality Control Inspector",
    "Completions & Commissioning technician",
    "Completions & Commissioning Specialist",
    "construction manager",
    "quality control manager",
    "Completions & Commissioning manager",
];

/// Disciplines offered in the recruiter criteria picker.
pub const DISCIPLINES: &[&str] = &[
    "HVAC",
    "Mechanical",
    "Process",
    "Electrical",
    "AWP",
    "Field Leadership",
    "Corporate",
    "Instrumentation & Control",
    "Piping",
    "Civil",
    "Structural Steel",
    "Administrative Assistance",
    "Civil & Structural Steel",
    "Electrical & Instrumentation",
    "Mechanical & Piping",
    "Welding",
    "data et ia",
];

/// Diploma codes offered in the recruiter criteria picker.
pub const DIPLOMAS: &[&str] = &["bac+2", "bac+3", "bac+4", "bac+5", "bac+6", "doctorat"];

/// Experience-range labels offered in the recruiter criteria picker.
pub const EXPERIENCE_RANGES: &[&str] = &[
    "inférieur à 2 ans",
    "entre 2 et 6 ans",
    "entre 6 et 10 ans",
    "entre 10 et 15 ans",
    "+15 ans",
];
