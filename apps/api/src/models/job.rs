use serde::de::{value::StrDeserializer, DeserializeOwned, IntoDeserializer};
use serde::{Deserialize, Deserializer, Serialize};

/// Where the role is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkMode {
    Remote,
    Hybrid,
    Onsite,
}

/// Experience band a posting is advertised for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperienceBand {
    Internship,
    Fresher,
    #[serde(rename = "0-1 Years")]
    ZeroToOne,
    #[serde(rename = "1-3 Years")]
    OneToThree,
    #[serde(rename = "3-5 Years")]
    ThreeToFive,
}

/// Channel the posting was scraped from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobSource {
    LinkedIn,
    Naukri,
    Indeed,
    #[serde(rename = "Company Site")]
    CompanySite,
}

/// A generated job posting. Read-only input to matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub mode: WorkMode,
    pub experience: ExperienceBand,
    #[serde(default)]
    pub skills: Vec<String>,
    pub source: JobSource,
    pub posted_days_ago: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_url: Option<String>,
}

/// Preferences a user declares in settings. Supplied per scoring call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPreferences {
    pub role_keywords: Vec<String>,
    pub preferred_locations: Vec<String>,
    /// Unrecognised modes are dropped.
    #[serde(deserialize_with = "known_variants")]
    pub preferred_mode: Vec<WorkMode>,
    /// Labels outside the five bands (including blank) mean no preference.
    #[serde(deserialize_with = "known_variant")]
    pub experience_level: Option<ExperienceBand>,
    pub skills: Vec<String>,
    pub min_match_score: u32,
}

fn parse_variant<T: DeserializeOwned>(raw: &str) -> Option<T> {
    let de: StrDeserializer<'_, serde::de::value::Error> = raw.into_deserializer();
    T::deserialize(de).ok()
}

fn known_variant<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_variant))
}

fn known_variants<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Vec::<String>::deserialize(deserializer)?;
    Ok(raw.iter().filter_map(|label| parse_variant(label)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_settings_page_defaults_deserialize() {
        let prefs: UserPreferences = serde_json::from_value(json!({
            "roleKeywords": [],
            "preferredLocations": [],
            "preferredMode": [],
            "experienceLevel": "Entry Level (0-2 years)",
            "skills": [],
            "minMatchScore": 40
        }))
        .unwrap();
        assert_eq!(prefs.experience_level, None);
        assert_eq!(prefs.min_match_score, 40);
    }

    #[test]
    fn test_blank_and_null_experience_mean_no_preference() {
        for level in [json!(""), json!(null)] {
            let prefs: UserPreferences =
                serde_json::from_value(json!({ "experienceLevel": level })).unwrap();
            assert_eq!(prefs.experience_level, None);
        }
    }

    #[test]
    fn test_known_band_labels_still_parse() {
        let prefs: UserPreferences =
            serde_json::from_value(json!({ "experienceLevel": "0-1 Years" })).unwrap();
        assert_eq!(prefs.experience_level, Some(ExperienceBand::ZeroToOne));
    }

    #[test]
    fn test_unknown_modes_are_dropped() {
        let prefs: UserPreferences =
            serde_json::from_value(json!({ "preferredMode": ["Remote", "On-site", "", "Hybrid"] }))
                .unwrap();
        assert_eq!(prefs.preferred_mode, vec![WorkMode::Remote, WorkMode::Hybrid]);
    }
}
