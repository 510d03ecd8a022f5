use std::collections::BTreeSet;

use super::{Badge, CriterionScore};
use crate::screening::candidate::CandidateRecord;
use crate::screening::criteria::{CriteriaConfig, CriterionKind, ExperienceBracket};
use crate::screening::dates::total_experience_years;
use crate::screening::similarity::overlap_ratio;
use crate::screening::tables;

pub(crate) fn score_record(
    candidate: &CandidateRecord,
    config: &CriteriaConfig,
    present_year: i32,
) -> (Vec<CriterionScore>, u8) {
    let mut components = Vec::new();

    if config.grade.active {
        components.push(grade_score(candidate, &config.grade.requirement));
    }
    if config.global_experience.active {
        components.push(experience_score(
            candidate,
            &config.global_experience.requirement,
            present_year,
        ));
    }
    if config.education.active {
        components.push(education_score(candidate, &config.education.requirement));
    }
    if config.discipline.active {
        components.push(discipline_score(candidate, &config.discipline.requirement));
    }
    if config.sector.active {
        components.push(sector_score(candidate, &config.sector.requirement));
    }

    let total = components
        .iter()
        .map(|component| component.points)
        .sum::<u8>();
    (components, total)
}

/// Full weight on a perfect overlap, floor of the prorated weight otherwise.
fn overlap_points(weight: u8, ratio: f64) -> u8 {
    if ratio == 1.0 {
        weight
    } else {
        (f64::from(weight) * ratio) as u8
    }
}

fn grade_score(candidate: &CandidateRecord, requirement: &str) -> CriterionScore {
    let candidate_grade = candidate.grade.as_deref().unwrap_or("").to_lowercase();
    let required = requirement.to_lowercase();
    let ratio = overlap_ratio(&candidate_grade, &required);

    CriterionScore {
        criterion: CriterionKind::Grade,
        points: overlap_points(CriterionKind::Grade.weight(), ratio),
        note: format!("overlap {ratio:.2} against required grade '{requirement}'"),
    }
}

fn experience_score(
    candidate: &CandidateRecord,
    requirement: &str,
    present_year: i32,
) -> CriterionScore {
    let years = total_experience_years(&candidate.professional_experiences, present_year);
    let bracket = ExperienceBracket::from_label(requirement);
    let (low, high) = bracket.bounds();

    let years = i64::from(years);
    let low = i64::from(low);
    let high = high.map(i64::from);

    let within = years >= low && high.map_or(true, |upper| years <= upper);
    // Tolerance is asymmetric on purpose: two years short earns half weight,
    // two years over earns two thirds.
    let points = if within {
        30
    } else if years < low && years >= low - 2 {
        15
    } else if high.is_some_and(|upper| years > upper && years <= upper + 2) {
        20
    } else {
        0
    };

    CriterionScore {
        criterion: CriterionKind::GlobalExperience,
        points,
        note: format!("{years} year(s) against required range '{requirement}'"),
    }
}

fn education_score(candidate: &CandidateRecord, requirement: &str) -> CriterionScore {
    // Lexicographically greatest diploma name, the upstream notion of
    // "highest"; kept as-is rather than ranked by level.
    let highest = candidate
        .diplomas
        .iter()
        .map(|diploma| diploma.name.as_deref().unwrap_or(""))
        .max()
        .unwrap_or("");

    let candidate_name = highest.to_lowercase();
    let required_name = requirement.to_lowercase();
    let candidate_level = i16::from(tables::diploma_level(tables::normalize_diploma(
        &candidate_name,
    )));
    let required_level = i16::from(tables::diploma_level(tables::normalize_diploma(
        &required_name,
    )));

    let points = match candidate_level - required_level {
        0 => 20,
        1 => 15,
        2 => 10,
        difference if difference >= 3 => 5,
        -1 => 10,
        -2 => 5,
        _ => 0,
    };

    CriterionScore {
        criterion: CriterionKind::EducationLevel,
        points,
        note: format!("candidate level {candidate_level} vs required level {required_level}"),
    }
}

fn discipline_score(candidate: &CandidateRecord, requirement: &str) -> CriterionScore {
    let discipline = candidate.discipline.as_deref().unwrap_or("").to_lowercase();
    let normalized = tables::normalize_discipline(&discipline);
    let required = requirement.to_lowercase();
    let ratio = overlap_ratio(normalized, &required);

    CriterionScore {
        criterion: CriterionKind::Discipline,
        points: overlap_points(CriterionKind::Discipline.weight(), ratio),
        note: format!("overlap {ratio:.2} against required discipline '{requirement}'"),
    }
}

fn sector_score(candidate: &CandidateRecord, requirement: &str) -> CriterionScore {
    let mut sector_texts: Vec<String> = candidate
        .professional_experiences
        .iter()
        .map(|experience| {
            experience
                .description
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
        })
        .collect();
    sector_texts.extend(candidate.key_skills.iter().map(|skill| skill.to_lowercase()));
    sector_texts.push(candidate.profile.as_deref().unwrap_or("").to_lowercase());

    let required = requirement.to_lowercase();
    let keywords: Vec<&str> = match tables::sector_keywords(&required) {
        Some(list) => list.to_vec(),
        None => vec![required.as_str()],
    };

    let matched = sector_texts
        .iter()
        .any(|text| keywords.iter().any(|keyword| text.contains(keyword)));
    let weight = CriterionKind::Sector.weight();

    CriterionScore {
        criterion: CriterionKind::Sector,
        points: if matched { weight } else { 0 },
        note: if matched {
            format!("sector keywords for '{requirement}' found in candidate texts")
        } else {
            format!("no sector keywords for '{requirement}' in candidate texts")
        },
    }
}

pub(crate) fn collect_badges(
    candidate: &CandidateRecord,
    config: &CriteriaConfig,
) -> (Vec<Badge>, String) {
    let mut badges = Vec::new();
    let mut remark = String::new();

    if config.location.active {
        if let Some((badge, sentence)) = location_badge(candidate, &config.location.requirement) {
            badges.push(badge);
            remark.push_str(&sentence);
        }
    }

    if config.key_skills.active {
        if let Some((badge, sentence)) = skills_badge(candidate, &config.key_skills.requirement) {
            badges.push(badge);
            remark.push_str(&sentence);
        }
    }

    if badges.is_empty() {
        remark.push_str("No specific location or skill alignment noted.");
    }

    (badges, remark)
}

fn location_badge(candidate: &CandidateRecord, requirement: &str) -> Option<(Badge, String)> {
    let required = requirement.to_lowercase();
    let locations: Vec<String> = candidate
        .all_positions()
        .map(|position| position.location.as_deref().unwrap_or("").to_lowercase())
        .collect();

    let matched: BTreeSet<&str> = locations
        .iter()
        .map(String::as_str)
        .filter(|location| location.contains(&required))
        .collect();

    if !matched.is_empty() {
        let joined = matched.into_iter().collect::<Vec<_>>().join(", ");
        return Some((
            Badge {
                name: "🌍 Location Match".to_string(),
                description: format!("Based in {joined}"),
            },
            format!("Location aligns with job requirement ({required}). "),
        ));
    }

    // "Mobilité internationale" is satisfiable by any work history at all.
    if required == "mobilité internationale" && !locations.is_empty() {
        return Some((
            Badge {
                name: "🌍 Location Match".to_string(),
                description: "Shows mobility potential".to_string(),
            },
            "Candidate shows mobility potential. ".to_string(),
        ));
    }

    None
}

fn skills_badge(candidate: &CandidateRecord, requirement: &str) -> Option<(Badge, String)> {
    let required: Vec<String> = requirement
        .split(',')
        .map(|skill| skill.trim().to_lowercase())
        .collect();

    let matched: Vec<String> = candidate
        .key_skills
        .iter()
        .map(|skill| skill.to_lowercase())
        .filter(|skill| required.iter().any(|wanted| wanted == skill))
        .collect();

    if matched.is_empty() {
        return None;
    }

    let joined = matched.join(", ");
    Some((
        Badge {
            name: "🛠️ Skill Fit".to_string(),
            description: format!("Skills: {joined}"),
        },
        format!("Skills such as {joined} are present. "),
    ))
}

/// Best-effort job title for display: profile summary, then grade, then
/// discipline; the generic "data et ia" discipline and empty values fall back
/// to the first titled position.
pub(crate) fn infer_target_role(candidate: &CandidateRecord) -> String {
    let primary = candidate
        .profile
        .as_deref()
        .filter(|value| !value.is_empty())
        .or_else(|| candidate.grade.as_deref().filter(|value| !value.is_empty()))
        .or_else(|| {
            candidate
                .discipline
                .as_deref()
                .filter(|value| !value.is_empty())
        })
        .unwrap_or("");

    if !primary.is_empty() && primary.to_lowercase() != "data et ia" {
        return primary.to_string();
    }

    candidate
        .all_positions()
        .find_map(|position| position.title.as_deref().filter(|title| !title.is_empty()))
        .unwrap_or("Non spécifié")
        .to_string()
}
