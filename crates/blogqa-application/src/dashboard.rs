//! Admin dashboard view model.
//!
//! Turns `AdminStats` into display-ready values: stat cards, chart bars,
//! the top-questions list and the collection panel.

use blogqa_core::api::QaApi;
use blogqa_core::collection::{Collection, CollectionCatalog};
use blogqa_core::stats::{AdminStats, DailyQueryCount, TopQuestion};
use blogqa_core::text;

/// One summary card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub description: Option<String>,
}

/// One row of the daily chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartBar {
    pub date: String,
    pub count: u64,
    /// Bar length in cells, scaled to the largest count.
    pub width: usize,
}

/// A collection row of the indexing panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionRow {
    pub collection: Collection,
    pub selected: bool,
}

/// Everything the dashboard renders.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub total_queries: u64,
    pub cards: Vec<StatCard>,
    pub daily_queries: Vec<DailyQueryCount>,
    pub top_questions: Vec<TopQuestion>,
    pub collections: Vec<CollectionRow>,
}

/// Outcome of loading the dashboard. Failures carry no partial data.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardState {
    Loaded(Dashboard),
    Failed,
}

impl Dashboard {
    pub fn from_stats(stats: &AdminStats, catalog: &CollectionCatalog, selected_id: &str) -> Self {
        let total_queries = stats.total_queries();
        let score = &stats.feedback_score;

        let cards = vec![
            StatCard {
                title: text::CARD_TOTAL_QUERIES,
                value: total_queries.to_string(),
                description: Some(text::CARD_TOTAL_QUERIES_DESC.to_string()),
            },
            StatCard {
                title: text::CARD_FEEDBACK,
                value: percent(score.up_ratio),
                description: Some(format!("👍 {} / 👎 {}", score.up, score.down)),
            },
            StatCard {
                title: text::CARD_RESPONSE_TIME,
                value: seconds(stats.avg_response_time),
                description: Some(text::CARD_RESPONSE_TIME_DESC.to_string()),
            },
            StatCard {
                title: text::CARD_SEARCH_FAILURE,
                value: percent(stats.search_failure_rate),
                description: Some(text::CARD_SEARCH_FAILURE_DESC.to_string()),
            },
        ];

        let collections = catalog
            .iter()
            .map(|collection| CollectionRow {
                selected: collection.id == selected_id,
                collection: collection.clone(),
            })
            .collect();

        Self {
            total_queries,
            cards,
            daily_queries: stats.daily_queries.clone(),
            top_questions: stats.top_questions.iter().take(10).cloned().collect(),
            collections,
        }
    }

    /// Chart rows with bars at most `max_width` cells long.
    ///
    /// Non-zero counts always get at least one cell.
    pub fn chart(&self, max_width: usize) -> Vec<ChartBar> {
        let max = self
            .daily_queries
            .iter()
            .map(|d| d.count)
            .max()
            .unwrap_or(0);

        self.daily_queries
            .iter()
            .map(|d| {
                let width = if max == 0 || d.count == 0 {
                    0
                } else {
                    let scaled = (d.count as f64 / max as f64 * max_width as f64).round() as usize;
                    scaled.max(1)
                };
                ChartBar {
                    date: d.date.clone(),
                    count: d.count,
                    width,
                }
            })
            .collect()
    }
}

/// Fetches statistics once and builds the dashboard.
pub async fn load_dashboard(
    api: &dyn QaApi,
    catalog: &CollectionCatalog,
    selected_id: &str,
) -> DashboardState {
    match api.get_admin_stats().await {
        Ok(stats) => DashboardState::Loaded(Dashboard::from_stats(&stats, catalog, selected_id)),
        Err(err) => {
            tracing::warn!(error = %err, "Failed to load admin stats");
            DashboardState::Failed
        }
    }
}

/// Formats a 0..1 ratio as a whole percentage.
pub fn percent(ratio: f64) -> String {
    format!("{}%", (ratio * 100.0).round() as i64)
}

/// Formats milliseconds as seconds with one decimal.
pub fn seconds(millis: f64) -> String {
    format!("{:.1}s", millis / 1000.0)
}
