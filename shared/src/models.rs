use serde::{Deserialize, Deserializer, Serialize};

/// A scheduled lecture as returned by the dashboard API.
///
/// `date` and `duration` arrive pre-formatted for display and are never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lecture {
    pub id: i64,
    pub title: String,
    pub date: String,
    pub duration: String,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub course_title: Option<String>,
}

/// An empty course title is treated as absent.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

impl Lecture {
    pub fn new(
        id: i64,
        title: impl Into<String>,
        date: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            date: date.into(),
            duration: duration.into(),
            course_title: None,
        }
    }
}

/// Placeholder lectures shown when the dashboard cannot be reached.
pub fn fallback_lectures() -> Vec<Lecture> {
    vec![
        Lecture::new(1, "Introduction to Smart Contracts", "Today, 2:00 PM", "1 hour"),
        Lecture::new(2, "Cryptography in Blockchain", "Tomorrow, 10:00 AM", "1.5 hours"),
    ]
}
