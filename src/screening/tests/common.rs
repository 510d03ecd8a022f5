use crate::screening::candidate::{CandidateRecord, Diploma, Experience};
use crate::screening::criteria::{CriteriaConfig, CriterionToggle};
use crate::screening::scoring::ScoringEngine;

pub(super) const PRESENT_YEAR: i32 = 2025;

pub(super) fn experience(
    title: &str,
    start: &str,
    end: &str,
    location: &str,
    description: &str,
) -> Experience {
    Experience {
        company: Some("JESA".to_string()),
        title: Some(title.to_string()),
        start_date: Some(start.to_string()),
        end_date: Some(end.to_string()),
        location: Some(location.to_string()),
        description: Some(description.to_string()),
    }
}

pub(super) fn diploma(name: &str) -> Diploma {
    Diploma {
        name: Some(name.to_string()),
        institution: Some("EMI".to_string()),
        period: Some("2018".to_string()),
        status: Some("obtenu".to_string()),
    }
}

/// A well-rounded electrical profile used across the scoring tests.
pub(super) fn electrician_record() -> CandidateRecord {
    CandidateRecord {
        family_name: Some("Alaoui".to_string()),
        given_name: Some("karim".to_string()),
        email: Some("karim.alaoui@example.com".to_string()),
        phone: Some("+212 6 00 00 00 00".to_string()),
        age: Some(31),
        gender: Some("Masculin".to_string()),
        grade: Some("construction engineer".to_string()),
        discipline: Some("Electrical".to_string()),
        diplomas: vec![diploma(
            "licence professionnelle en génie électrique et énergies renouvelables",
        )],
        internships: vec![experience(
            "Stagiaire électricité",
            "2017",
            "2018",
            "Rabat",
            "stage en électricité industrielle",
        )],
        professional_experiences: vec![
            experience(
                "Électricien de chantier",
                "2018",
                "2021",
                "Casablanca",
                "travaux électriques sur chantier",
            ),
            experience(
                "Chef d'équipe électricité",
                "2021",
                "présent",
                "Benguerir",
                "maintenance électrique et énergie renouvelable",
            ),
        ],
        key_skills: vec!["autocad".to_string(), "habilitation électrique".to_string()],
        soft_skills: vec!["rigueur".to_string()],
        profile: Some("Ingénieur électricité orienté chantier".to_string()),
        ..CandidateRecord::default()
    }
}

/// A record whose professional experiences sum to exactly `years` years.
pub(super) fn record_with_years(years: i32) -> CandidateRecord {
    CandidateRecord {
        professional_experiences: vec![experience(
            "Site Engineer",
            &(PRESENT_YEAR - years).to_string(),
            &PRESENT_YEAR.to_string(),
            "Casablanca",
            "",
        )],
        ..CandidateRecord::default()
    }
}

pub(super) fn full_criteria() -> CriteriaConfig {
    CriteriaConfig {
        grade: CriterionToggle::required("construction Engineer"),
        global_experience: CriterionToggle::required("entre 2 et 6 ans"),
        education: CriterionToggle::required("bac+3"),
        discipline: CriterionToggle::required("electrical"),
        sector: CriterionToggle::required("energy"),
        location: CriterionToggle::required("casablanca"),
        key_skills: CriterionToggle::required("autocad, revit"),
    }
}

pub(super) fn engine(config: CriteriaConfig) -> ScoringEngine {
    ScoringEngine::new(config, PRESENT_YEAR)
}
