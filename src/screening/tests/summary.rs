use super::common::*;
use crate::screening::summary::{score_candidate, ScreeningError};
use serde_json::json;

#[test]
fn scores_a_full_record_end_to_end() {
    let raw = json!({
        "nom": "alaoui",
        "prenom": "KARIM",
        "email": "karim.alaoui@example.com",
        "telephone": "+212 6 00 00 00 00",
        "age": 31,
        "genre": "Masculin",
        "grade": "construction engineer",
        "discipline": "Electrical",
        "diplomes": [{
            "nom_diplome": "licence professionnelle en génie électrique et énergies renouvelables",
            "etablissement": "EST",
            "annee_obtention": "2018",
            "statut": "obtenu"
        }],
        "experiences_professionnelles": [{
            "entreprise": "JESA",
            "poste": "Électricien de chantier",
            "date_debut": "2018",
            "date_fin": "2023",
            "emplacement": "Casablanca",
            "description": "travaux électriques sur chantier"
        }],
        "competences_cles": ["autocad"],
        "soft_skills": ["rigueur"],
        "profil": "Ingénieur électricité"
    });

    let summary = score_candidate(&raw, &full_criteria(), "cv-001.pdf", PRESENT_YEAR)
        .expect("well-formed record scores");

    assert_eq!(summary.introduction.full_name, "ALAOUI Karim");
    assert_eq!(summary.introduction.age, Some(31));
    assert_eq!(summary.introduction.locations, "Casablanca");
    assert_eq!(summary.formations.len(), 1);
    assert_eq!(summary.formations[0].institution, "EST");
    assert_eq!(summary.formations[0].period, "2018");
    assert_eq!(summary.email, "karim.alaoui@example.com");
    // 15 (grade) + 30 (5 years in [2,6]) + 20 (education) + 15 (discipline)
    // + 20 (sector) = 100.
    assert_eq!(summary.score.total, 100);
    assert_eq!(summary.score.target_role, "Ingénieur électricité");
}

#[test]
fn junk_list_entries_are_skipped_not_fatal() {
    let raw = json!({
        "nom": "Benali",
        "diplomes": ["ceci n'est pas un objet", { "nom_diplome": "master" }, 7],
        "experiences_professionnelles": [null, { "poste": "Technicien", "emplacement": "Safi" }]
    });

    let summary = score_candidate(&raw, &full_criteria(), "cv-002.pdf", PRESENT_YEAR)
        .expect("junk entries degrade, never abort the record");

    assert_eq!(summary.formations.len(), 1);
    assert_eq!(summary.professional_experiences.len(), 1);
    assert_eq!(summary.introduction.full_name, "BENALI");
}

#[test]
fn non_object_records_are_rejected_with_a_structured_error() {
    let raw = json!(["not", "an", "object"]);

    let err = score_candidate(&raw, &full_criteria(), "cv-003.pdf", PRESENT_YEAR)
        .expect_err("arrays are not candidate records");

    match err {
        ScreeningError::MalformedRecord { source_id } => assert_eq!(source_id, "cv-003.pdf"),
        other => panic!("expected MalformedRecord, got {other:?}"),
    }
}

#[test]
fn empty_record_still_assembles() {
    let summary = score_candidate(
        &json!({}),
        &crate::screening::criteria::CriteriaConfig::default(),
        "cv-004.pdf",
        PRESENT_YEAR,
    )
    .expect("an empty object is a valid, if useless, record");

    assert_eq!(summary.introduction.full_name, "Inconnu");
    assert_eq!(summary.score.total, 0);
    assert_eq!(summary.score.target_role, "Non spécifié");
}

#[test]
fn summary_serializes_with_french_wire_keys() {
    let raw = json!({
        "nom": "Alaoui",
        "experiences_professionnelles": [{ "emplacement": "Casablanca" }]
    });

    let summary = score_candidate(&raw, &full_criteria(), "cv-005.pdf", PRESENT_YEAR)
        .expect("record scores");
    let value = serde_json::to_value(&summary).expect("summary serializes");

    let object = value.as_object().expect("summary is an object");
    assert!(object.contains_key("Introduction"));
    assert!(object.contains_key("Formations"));
    assert!(object.contains_key("Compétences Clés"));
    assert!(object.contains_key("Expériences Professionnelles"));
    assert!(object["Introduction"]
        .as_object()
        .expect("introduction object")
        .contains_key("Nom et Prénom"));
    let score = object["Score"].as_object().expect("score object");
    assert!(score.contains_key("poste_visé"));
    assert!(score.contains_key("remarque"));
    assert!(score.contains_key("badges"));
}

#[test]
fn distinct_locations_join_in_first_appearance_order() {
    let raw = json!({
        "experiences_professionnelles": [
            { "emplacement": "Casablanca" },
            { "emplacement": "Benguerir" },
            { "emplacement": "Casablanca" },
            { "emplacement": "" }
        ],
        "stages": [
            { "emplacement": "Rabat" }
        ]
    });

    let summary = score_candidate(
        &raw,
        &crate::screening::criteria::CriteriaConfig::default(),
        "cv-006.pdf",
        PRESENT_YEAR,
    )
    .expect("record scores");

    assert_eq!(
        summary.introduction.locations,
        "Casablanca, Benguerir, Rabat"
    );
}
