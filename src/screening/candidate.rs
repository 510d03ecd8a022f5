use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

/// Candidate record as emitted by the upstream extraction pipeline.
///
/// Wire keys follow the extractor's French JSON schema. Every field may be
/// absent, null, or mistyped; deserialization never fails for a JSON object,
/// it only degrades (bad entries are logged and dropped).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateRecord {
    #[serde(rename = "nom", deserialize_with = "lenient_string")]
    pub family_name: Option<String>,
    #[serde(rename = "prenom", deserialize_with = "lenient_string")]
    pub given_name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(rename = "telephone", deserialize_with = "lenient_string")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "lenient_age")]
    pub age: Option<u32>,
    #[serde(rename = "date_naissance", deserialize_with = "lenient_string")]
    pub birth_date: Option<String>,
    #[serde(rename = "genre", deserialize_with = "lenient_string")]
    pub gender: Option<String>,
    #[serde(rename = "nationalite", deserialize_with = "lenient_string")]
    pub nationality: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub grade: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub discipline: Option<String>,
    #[serde(rename = "diplomes", deserialize_with = "lenient_entries")]
    pub diplomas: Vec<Diploma>,
    #[serde(rename = "stages", deserialize_with = "lenient_entries")]
    pub internships: Vec<Experience>,
    #[serde(
        rename = "experiences_professionnelles",
        deserialize_with = "lenient_entries"
    )]
    pub professional_experiences: Vec<Experience>,
    #[serde(rename = "competences_cles", deserialize_with = "lenient_strings")]
    pub key_skills: Vec<String>,
    #[serde(deserialize_with = "lenient_strings")]
    pub soft_skills: Vec<String>,
    #[serde(rename = "profil", deserialize_with = "lenient_string")]
    pub profile: Option<String>,
}

impl CandidateRecord {
    /// Professional experiences followed by internships, the order used for
    /// location collection and target-role fallbacks.
    pub fn all_positions(&self) -> impl Iterator<Item = &Experience> {
        self.professional_experiences
            .iter()
            .chain(self.internships.iter())
    }
}

/// One education entry. All fields are free text from the extractor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Diploma {
    #[serde(rename = "nom_diplome", deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(rename = "etablissement", deserialize_with = "lenient_string")]
    pub institution: Option<String>,
    #[serde(rename = "annee_obtention", deserialize_with = "lenient_string")]
    pub period: Option<String>,
    #[serde(rename = "statut", deserialize_with = "lenient_string")]
    pub status: Option<String>,
}

/// Professional experience or internship entry. Dates are unparsed free text;
/// the date resolver owns their interpretation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    #[serde(rename = "entreprise", deserialize_with = "lenient_string")]
    pub company: Option<String>,
    #[serde(rename = "poste", deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(rename = "date_debut", deserialize_with = "lenient_string")]
    pub start_date: Option<String>,
    #[serde(rename = "date_fin", deserialize_with = "lenient_string")]
    pub end_date: Option<String>,
    #[serde(rename = "emplacement", deserialize_with = "lenient_string")]
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(text) => Some(text),
        Value::Null => None,
        other => {
            warn!(%other, "expected a string field, dropping value");
            None
        }
    })
}

fn lenient_age<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(number) => number.as_u64().map(|age| age as u32),
        Value::String(text) => text.trim().parse().ok(),
        Value::Null => None,
        other => {
            warn!(%other, "expected a numeric age, dropping value");
            None
        }
    })
}

fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(text) => Some(text),
                Value::Null => None,
                other => {
                    warn!(%other, "skipping non-string list entry");
                    None
                }
            })
            .collect(),
        Value::Null => Vec::new(),
        other => {
            warn!(%other, "expected a list of strings, dropping field");
            Vec::new()
        }
    })
}

fn lenient_entries<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| {
                if !item.is_object() {
                    warn!(%item, "skipping non-object list entry");
                    return None;
                }
                match serde_json::from_value(item) {
                    Ok(entry) => Some(entry),
                    Err(err) => {
                        warn!(%err, "skipping unreadable list entry");
                        None
                    }
                }
            })
            .collect(),
        Value::Null => Vec::new(),
        other => {
            warn!(%other, "expected a list of objects, dropping field");
            Vec::new()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_full_record_with_french_keys() {
        let record: CandidateRecord = serde_json::from_value(json!({
            "nom": "Alaoui",
            "prenom": "karim",
            "email": "karim@example.com",
            "telephone": "+212 6 00 00 00 00",
            "age": 31,
            "grade": "construction engineer",
            "discipline": "Electrical",
            "diplomes": [
                { "nom_diplome": "Master en génie civil", "etablissement": "EMI" }
            ],
            "experiences_professionnelles": [
                { "entreprise": "JESA", "poste": "Site Engineer", "date_debut": "2019", "date_fin": "2023" }
            ],
            "competences_cles": ["autocad", "primavera"]
        }))
        .expect("well-formed record deserializes");

        assert_eq!(record.family_name.as_deref(), Some("Alaoui"));
        assert_eq!(record.age, Some(31));
        assert_eq!(record.diplomas.len(), 1);
        assert_eq!(record.professional_experiences.len(), 1);
        assert_eq!(record.key_skills, vec!["autocad", "primavera"]);
    }

    #[test]
    fn skips_non_object_list_entries() {
        let record: CandidateRecord = serde_json::from_value(json!({
            "diplomes": [
                "Licence en informatique",
                { "nom_diplome": "Master" },
                42
            ],
            "stages": [null, { "poste": "Intern" }]
        }))
        .expect("junk entries degrade, never fail");

        assert_eq!(record.diplomas.len(), 1);
        assert_eq!(record.diplomas[0].name.as_deref(), Some("Master"));
        assert_eq!(record.internships.len(), 1);
    }

    #[test]
    fn tolerates_mistyped_scalars() {
        let record: CandidateRecord = serde_json::from_value(json!({
            "nom": 12345,
            "age": "27",
            "competences_cles": "not-a-list"
        }))
        .expect("mistyped fields degrade, never fail");

        assert_eq!(record.family_name, None);
        assert_eq!(record.age, Some(27));
        assert!(record.key_skills.is_empty());
    }
}
