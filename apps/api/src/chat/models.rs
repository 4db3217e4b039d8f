use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Profile information collected over a conversation.
///
/// Every field is optional; the extractor only returns what is new in a message.
/// Unknown keys (certifications, projects, ...) are preserved in `extra` at every
/// level so they still reach the resume prompt. Off-shape values are coerced rather
/// than rejected: null lists are empty, a bare value becomes a one-item list, and a
/// string stands in for a record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedProfile {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_record")]
    pub personal_info: Option<PersonalInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_string")]
    pub job_target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_string")]
    pub job_description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty", deserialize_with = "lenient_list")]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty", deserialize_with = "lenient_list")]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty", deserialize_with = "lenient_list")]
    pub education: Vec<EducationEntry>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PersonalInfo {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_string")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_string")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_string")]
    pub website: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExperienceEntry {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_string")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_string")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty", deserialize_with = "lenient_list")]
    pub achievements: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EducationEntry {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_string")]
    pub degree: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_string")]
    pub school: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_string")]
    pub year: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ExtractedProfile {
    /// The subject name, if one was collected.
    pub fn display_name(&self) -> Option<&str> {
        self.personal_info
            .as_ref()
            .and_then(|p| p.name.as_deref())
            .filter(|n| !n.is_empty())
    }
}

/// Conversation stage reported alongside each generated question.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    BasicInfo,
    JobTarget,
    Experience,
    Education,
    Skills,
    Additional,
    ReadyToGenerate,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NextQuestion {
    pub question: String,
    #[serde(default)]
    pub context: String,
    #[serde(default = "unknown_stage")]
    pub stage: Stage,
    #[serde(default)]
    pub is_complete: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl NextQuestion {
    /// Used when the model answers in prose instead of JSON: the prose becomes the question.
    pub fn from_plain_reply(reply: &str) -> Self {
        Self {
            question: reply.trim().to_string(),
            context: "Continuing resume building process".to_string(),
            stage: Stage::Unknown,
            is_complete: false,
            suggestion: None,
        }
    }

    /// Sent with the error response when the model cannot be reached.
    pub fn fallback() -> Self {
        Self {
            question: "Could you tell me more about your work experience?".to_string(),
            context: "Collecting work experience information".to_string(),
            stage: Stage::Experience,
            is_complete: false,
            suggestion: None,
        }
    }
}

fn unknown_stage() -> Stage {
    Stage::Unknown
}

/// Models return `"year": 2021` as often as `"year": "2021"`. Scalars become text,
/// null is absent, and arrays or objects are kept as their JSON text.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(value) => Some(value_text(value)),
    })
}

/// Null is an empty list and a bare value is a one-item list. Null items are skipped.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + FromText,
{
    let items = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(single) => vec![single],
    };
    Ok(items
        .into_iter()
        .filter(|item| !item.is_null())
        .map(coerce::<T>)
        .collect())
}

fn lenient_record<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + FromText,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(value) => Some(coerce::<T>(value)),
    })
}

/// Objects deserialize into `T`; anything else, or an object that does not fit,
/// becomes `T`'s primary text field.
fn coerce<T: DeserializeOwned + FromText>(value: Value) -> T {
    match value {
        Value::Object(_) => match T::deserialize(&value) {
            Ok(record) => record,
            Err(_) => T::from_text(value_text(value)),
        },
        other => T::from_text(value_text(other)),
    }
}

fn value_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// How a bare string is read where a list item or record is expected.
trait FromText {
    fn from_text(text: String) -> Self;
}

impl FromText for String {
    fn from_text(text: String) -> Self {
        text
    }
}

impl FromText for PersonalInfo {
    fn from_text(text: String) -> Self {
        Self {
            name: Some(text),
            ..Self::default()
        }
    }
}

impl FromText for ExperienceEntry {
    fn from_text(text: String) -> Self {
        Self {
            title: Some(text),
            ..Self::default()
        }
    }
}

impl FromText for EducationEntry {
    fn from_text(text: String) -> Self {
        Self {
            degree: Some(text),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_deserializes_model_output() {
        let profile: ExtractedProfile = serde_json::from_value(json!({
            "personalInfo": {"name": "Sarah Johnson", "email": "sarah.j@email.com"},
            "experience": [{"title": "Developer", "company": "Google", "duration": "2 years"}],
            "skills": ["React", "Node.js"],
            "education": [{"degree": "BSc", "school": "MIT", "year": 2019}]
        }))
        .unwrap();

        assert_eq!(profile.display_name(), Some("Sarah Johnson"));
        assert_eq!(profile.experience[0].company.as_deref(), Some("Google"));
        assert_eq!(profile.skills, vec!["React", "Node.js"]);
        assert_eq!(profile.education[0].year.as_deref(), Some("2019"));
    }

    #[test]
    fn test_profile_keeps_unknown_sections() {
        let input = json!({
            "jobTarget": "Software Engineer",
            "certifications": ["AWS SAA"]
        });
        let profile: ExtractedProfile = serde_json::from_value(input.clone()).unwrap();

        assert_eq!(profile.job_target.as_deref(), Some("Software Engineer"));
        assert_eq!(profile.extra["certifications"], json!(["AWS SAA"]));
        assert_eq!(serde_json::to_value(&profile).unwrap(), input);
    }

    #[test]
    fn test_null_lists_are_empty() {
        let profile: ExtractedProfile = serde_json::from_value(json!({
            "skills": null,
            "experience": null,
            "education": [null, {"school": "MIT"}]
        }))
        .unwrap();

        assert!(profile.skills.is_empty());
        assert!(profile.experience.is_empty());
        assert_eq!(profile.education.len(), 1);
        assert_eq!(profile.education[0].school.as_deref(), Some("MIT"));
    }

    #[test]
    fn test_off_shape_values_are_coerced() {
        let profile: ExtractedProfile = serde_json::from_value(json!({
            "skills": "Rust, Go",
            "personalInfo": "Sarah Johnson",
            "experience": ["Developer at Google", {"title": "Intern", "achievements": "Shipped X"}],
            "education": {"degree": "BSc", "year": 2019},
            "jobTarget": ["Backend", "Platform"]
        }))
        .unwrap();

        assert_eq!(profile.skills, vec!["Rust, Go"]);
        assert_eq!(profile.display_name(), Some("Sarah Johnson"));
        assert_eq!(profile.experience[0].title.as_deref(), Some("Developer at Google"));
        assert_eq!(profile.experience[1].achievements, vec!["Shipped X"]);
        assert_eq!(profile.education[0].year.as_deref(), Some("2019"));
        assert_eq!(profile.job_target.as_deref(), Some("[\"Backend\",\"Platform\"]"));
    }

    #[test]
    fn test_nested_unknown_keys_survive_round_trip() {
        let input = json!({
            "personalInfo": {"name": "Sarah", "location": "Berlin"},
            "experience": [{"title": "Developer", "technologies": ["Rust"]}],
            "education": [{"degree": "BSc", "gpa": "3.9"}]
        });
        let profile: ExtractedProfile = serde_json::from_value(input.clone()).unwrap();

        assert_eq!(serde_json::to_value(&profile).unwrap(), input);
    }

    #[test]
    fn test_empty_profile_serializes_to_empty_object() {
        assert_eq!(serde_json::to_value(ExtractedProfile::default()).unwrap(), json!({}));
    }

    #[test]
    fn test_null_fields_are_absent() {
        let profile: ExtractedProfile =
            serde_json::from_value(json!({"personalInfo": {"name": null}, "jobTarget": null}))
                .unwrap();
        assert_eq!(profile.display_name(), None);
        assert!(profile.job_target.is_none());
    }

    #[test]
    fn test_empty_name_is_no_display_name() {
        let profile: ExtractedProfile =
            serde_json::from_value(json!({"personalInfo": {"name": ""}})).unwrap();
        assert_eq!(profile.display_name(), None);
    }

    #[test]
    fn test_next_question_from_json() {
        let question: NextQuestion = serde_json::from_value(json!({
            "question": "What type of role are you looking to apply for?",
            "context": "Understanding job target helps tailor the resume",
            "stage": "job_target",
            "isComplete": false
        }))
        .unwrap();

        assert_eq!(question.stage, Stage::JobTarget);
        assert!(!question.is_complete);
        assert!(question.suggestion.is_none());
    }

    #[test]
    fn test_unrecognized_stage_is_unknown() {
        let question: NextQuestion =
            serde_json::from_value(json!({"question": "q", "stage": "portfolio"})).unwrap();
        assert_eq!(question.stage, Stage::Unknown);
    }

    #[test]
    fn test_plain_reply_becomes_question() {
        let question = NextQuestion::from_plain_reply("  What is your name?\n");
        assert_eq!(question.question, "What is your name?");
        assert_eq!(question.stage, Stage::Unknown);
        assert_eq!(
            serde_json::to_value(&question).unwrap()["isComplete"],
            json!(false)
        );
    }
}
