//! Admin statistics returned by `GET /admin/stats`.

use serde::{Deserialize, Serialize};

/// Number of questions asked on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyQueryCount {
    /// Calendar date as sent by the service (`YYYY-MM-DD`).
    pub date: String,
    pub count: u64,
}

/// A frequently asked question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopQuestion {
    pub question: String,
    pub count: u64,
}

/// Aggregated thumbs up/down counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackScore {
    pub total: u64,
    pub up: u64,
    pub down: u64,
    /// `up / total`, 0..1.
    pub up_ratio: f64,
}

/// Full statistics payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminStats {
    pub daily_queries: Vec<DailyQueryCount>,
    pub top_questions: Vec<TopQuestion>,
    pub feedback_score: FeedbackScore,
    /// Milliseconds.
    pub avg_response_time: f64,
    /// 0..1.
    pub search_failure_rate: f64,
}

impl AdminStats {
    /// Sum of all daily counts.
    pub fn total_queries(&self) -> u64 {
        self.daily_queries.iter().map(|d| d.count).sum()
    }
}

/// Response of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
