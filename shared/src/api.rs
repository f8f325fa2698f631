use serde::{Deserialize, Serialize};

use crate::models::Lecture;

// ============================================================================
// Dashboard API Types
// ============================================================================

/// Path of the dashboard endpoint, relative to the API base URL.
pub const DASHBOARD_PATH: &str = "/api/dashboard";

/// Query parameter carrying the caller's wallet address.
pub const WALLET_ID_PARAM: &str = "walletId";

/// Dashboard payload. Only the lecture schedule is read; other sections of
/// the dashboard are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upcoming_lectures: Option<Vec<Lecture>>,
}

impl DashboardResponse {
    /// Lectures in server order, empty when the field was absent or null.
    pub fn into_lectures(self) -> Vec<Lecture> {
        self.upcoming_lectures.unwrap_or_default()
    }
}

pub fn decode_dashboard(body: &str) -> Result<DashboardResponse, serde_json::Error> {
    serde_json::from_str(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_single_lecture() {
        let body = r#"{ "upcomingLectures": [{"id":7,"title":"Gas Optimization","date":"Fri, 3:00 PM","duration":"45 min"}] }"#;

        let lectures = decode_dashboard(body).unwrap().into_lectures();
        assert_eq!(lectures, vec![Lecture::new(7, "Gas Optimization", "Fri, 3:00 PM", "45 min")]);
        assert_eq!(lectures[0].course_title, None);
    }

    #[test]
    fn test_decode_preserves_order_and_course_title() {
        let body = r#"{
            "upcomingLectures": [
                {"id":9,"title":"Zeta","date":"Mon","duration":"1 hour","courseTitle":"DeFi 101"},
                {"id":2,"title":"Alpha","date":"Tue","duration":"2 hours"},
                {"id":5,"title":"Mu","date":"Wed","duration":"30 min","courseTitle":null}
            ]
        }"#;

        let lectures = decode_dashboard(body).unwrap().into_lectures();
        let ids: Vec<i64> = lectures.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![9, 2, 5]);
        assert_eq!(lectures[0].course_title.as_deref(), Some("DeFi 101"));
        assert_eq!(lectures[1].course_title, None);
        assert_eq!(lectures[2].course_title, None);
    }

    #[test]
    fn test_decode_missing_lectures() {
        let response = decode_dashboard(r#"{"stats":{"completedCourses":3}}"#).unwrap();
        assert_eq!(response.upcoming_lectures, None);
        assert!(response.into_lectures().is_empty());
    }

    #[test]
    fn test_decode_null_and_empty_lectures() {
        assert!(decode_dashboard(r#"{"upcomingLectures":null}"#)
            .unwrap()
            .into_lectures()
            .is_empty());
        assert!(decode_dashboard(r#"{"upcomingLectures":[]}"#)
            .unwrap()
            .into_lectures()
            .is_empty());
    }

    #[test]
    fn test_decode_malformed_payload() {
        assert!(decode_dashboard("<html>502 Bad Gateway</html>").is_err());
        assert!(decode_dashboard(r#"{"upcomingLectures":{"id":1}}"#).is_err());
        assert!(decode_dashboard(r#"{"upcomingLectures":[{"id":"one","title":"x","date":"d","duration":"t"}]}"#).is_err());
        assert!(decode_dashboard(r#"{"upcomingLectures":[{"id":1,"date":"d","duration":"t"}]}"#).is_err());
    }
}
