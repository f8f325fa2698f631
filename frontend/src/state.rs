use shared::api::DashboardResponse;
use shared::models::{fallback_lectures, Lecture};

use crate::services::api::FetchError;

/// What the lecture widget does when the dashboard request fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Show the static placeholder lectures.
    #[default]
    Fallback,
    /// Show the empty state.
    Empty,
    /// Show an explicit error view.
    Report,
}

impl FailurePolicy {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "fallback" => Some(Self::Fallback),
            "empty" => Some(Self::Empty),
            "report" => Some(Self::Report),
            _ => None,
        }
    }
}

/// Lifecycle of the lecture widget. `Loading` is only ever the initial state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LectureView {
    #[default]
    Loading,
    Empty,
    Populated(Vec<Lecture>),
    Failed(String),
}

impl LectureView {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Settled state for a finished dashboard request.
    pub fn settle(result: Result<DashboardResponse, FetchError>, policy: FailurePolicy) -> Self {
        match result {
            Ok(response) => Self::from_lectures(response.into_lectures()),
            Err(e) => {
                tracing::error!("Error fetching upcoming lectures: {}", e);
                match policy {
                    FailurePolicy::Fallback => Self::from_lectures(fallback_lectures()),
                    FailurePolicy::Empty => Self::Empty,
                    FailurePolicy::Report => Self::Failed(e.to_string()),
                }
            }
        }
    }

    fn from_lectures(lectures: Vec<Lecture>) -> Self {
        if lectures.is_empty() {
            Self::Empty
        } else {
            Self::Populated(lectures)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(lectures: Option<Vec<Lecture>>) -> DashboardResponse {
        DashboardResponse {
            upcoming_lectures: lectures,
        }
    }

    #[test]
    fn test_initial_state_is_loading() {
        let view = LectureView::default();
        assert!(view.is_loading());
    }

    #[test]
    fn test_success_populates_in_server_order() {
        let lectures = vec![
            Lecture::new(3, "Layer 2 Scaling", "Wed, 4:00 PM", "1 hour"),
            Lecture::new(1, "Gas Optimization", "Fri, 3:00 PM", "45 min"),
        ];

        let view = LectureView::settle(Ok(response(Some(lectures.clone()))), FailurePolicy::Fallback);
        assert!(!view.is_loading());
        assert_eq!(view, LectureView::Populated(lectures));
    }

    #[test]
    fn test_success_without_lectures_is_empty() {
        for policy in [FailurePolicy::Fallback, FailurePolicy::Empty, FailurePolicy::Report] {
            assert_eq!(LectureView::settle(Ok(response(None)), policy), LectureView::Empty);
            assert_eq!(LectureView::settle(Ok(response(Some(vec![]))), policy), LectureView::Empty);
        }
    }

    #[test]
    fn test_failure_uses_fallback_by_default() {
        let view = LectureView::settle(
            Err(FetchError::Network("connection refused".to_string())),
            FailurePolicy::default(),
        );
        assert!(!view.is_loading());

        let LectureView::Populated(lectures) = view else {
            panic!("expected fallback lectures");
        };
        let titles: Vec<&str> = lectures.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Introduction to Smart Contracts", "Cryptography in Blockchain"]
        );
    }

    #[test]
    fn test_failure_with_empty_policy() {
        let view = LectureView::settle(Err(FetchError::Status(500)), FailurePolicy::Empty);
        assert_eq!(view, LectureView::Empty);
    }

    #[test]
    fn test_failure_with_report_policy() {
        let view = LectureView::settle(
            Err(FetchError::Decode("expected value".to_string())),
            FailurePolicy::Report,
        );
        assert_eq!(
            view,
            LectureView::Failed("Failed to parse response: expected value".to_string())
        );
    }

    #[test]
    fn test_policy_from_name() {
        assert_eq!(FailurePolicy::from_name("fallback"), Some(FailurePolicy::Fallback));
        assert_eq!(FailurePolicy::from_name(" Empty "), Some(FailurePolicy::Empty));
        assert_eq!(FailurePolicy::from_name("REPORT"), Some(FailurePolicy::Report));
        assert_eq!(FailurePolicy::from_name("retry"), None);
    }
}
