//! Terminal rendering of conversation and dashboard state.
//!
//! Every function returns the text to print; nothing here mutates state.

use blogqa_application::Dashboard;
use blogqa_core::collection::{Collection, CollectionCatalog};
use blogqa_core::feedback::{FeedbackEntry, FeedbackState, Rating};
use blogqa_core::message::{DisplayMessage, Source};
use blogqa_core::text;
use colored::Colorize;

const CHART_WIDTH: usize = 40;

/// Renders one conversation message.
///
/// `number` is the 1-based answer number used by `/up N` and `/down N`;
/// `feedback` is `None` for messages that cannot be rated.
pub fn message(
    msg: &DisplayMessage,
    number: Option<usize>,
    feedback: Option<FeedbackEntry>,
) -> String {
    match msg {
        DisplayMessage::Human { content } => format!("{}", format!("> {content}").green()),
        DisplayMessage::Ai(ai) => {
            let mut out = String::new();
            if let Some(n) = number {
                out.push_str(&format!("{}\n", format!("[#{n}]").bright_magenta()));
            }
            for line in ai.content.lines() {
                out.push_str(&format!("{}\n", line.bright_blue()));
            }
            if !ai.sources.is_empty() {
                out.push_str(&sources(&ai.sources));
            }
            if let (Some(n), Some(entry)) = (number, feedback) {
                out.push_str(&feedback_line(n, entry));
                out.push('\n');
            }
            out.trim_end().to_string()
        }
    }
}

pub fn sources(sources: &[Source]) -> String {
    let mut out = format!("{}\n", text::SOURCES_HEADING.bold());
    for source in sources {
        out.push_str(&format!(
            "  - {} {}\n",
            source.title,
            format!("<{}>", source.url).underline().blue()
        ));
    }
    out
}

/// Feedback controls, the in-flight marker, or the thank-you line.
pub fn feedback_line(number: usize, entry: FeedbackEntry) -> String {
    match entry.state {
        FeedbackState::Done => {
            let emoji = entry.rating.map(Rating::emoji).unwrap_or_default();
            format!("{}", format!("{} {emoji}", text::FEEDBACK_THANKS).bright_black())
        }
        FeedbackState::Sending => format!(
            "{} {}",
            text::FEEDBACK_PROMPT.bright_black(),
            text::FEEDBACK_SENDING.bright_black().italic()
        ),
        FeedbackState::Idle => format!(
            "{} {}",
            text::FEEDBACK_PROMPT.bright_black(),
            format!("/up {number} 👍   /down {number} 👎").bright_black()
        ),
    }
}

pub fn loading() -> String {
    format!("{}", text::GENERATING.bright_black().italic())
}

pub fn error(message: &str) -> String {
    format!("{}", message.red())
}

pub fn notice(message: &str) -> String {
    format!("{}", message.yellow())
}

pub fn empty_conversation() -> String {
    format!("{}", text::EMPTY_CONVERSATION.bright_black())
}

/// Collections with the selected one marked.
pub fn collections(catalog: &CollectionCatalog, selected_id: &str) -> String {
    let mut out = String::new();
    for collection in catalog.iter() {
        out.push_str(&collection_line(collection, collection.id == selected_id));
        out.push('\n');
    }
    out.trim_end().to_string()
}

fn collection_line(collection: &Collection, selected: bool) -> String {
    let marker = if selected { "*" } else { " " };
    let mut line = format!(
        "{marker} {} {}",
        collection.label,
        format!("({})", collection.id).bright_black()
    );
    if let Some(url) = &collection.site_url {
        line.push_str(&format!(" {}", url.underline().blue()));
    }
    line
}

/// Full dashboard page.
pub fn dashboard(dashboard: &Dashboard) -> String {
    let mut out = format!("{}\n\n", text::DASHBOARD_TITLE.bold());

    for card in &dashboard.cards {
        out.push_str(&format!(
            "{:<16} {}",
            card.title.bright_black(),
            card.value.bold()
        ));
        if let Some(description) = &card.description {
            out.push_str(&format!("  {}", description.bright_black()));
        }
        out.push('\n');
    }

    out.push_str(&format!("\n{}\n", text::CHART_TITLE.bold()));
    for bar in dashboard.chart(CHART_WIDTH) {
        out.push_str(&format!(
            "{} {} {}\n",
            bar.date,
            "█".repeat(bar.width).cyan(),
            bar.count
        ));
    }

    out.push_str(&format!("\n{}\n", text::TOP_QUESTIONS_TITLE.bold()));
    if dashboard.top_questions.is_empty() {
        out.push_str(&format!("{}\n", text::NO_DATA.bright_black()));
    } else {
        for (i, item) in dashboard.top_questions.iter().enumerate() {
            out.push_str(&format!(
                "{:>3}. {} {}\n",
                i + 1,
                item.question,
                format!("{}{}", item.count, text::TIMES_SUFFIX).bright_black()
            ));
        }
    }

    out.push_str(&format!("\n{}\n", text::COLLECTIONS_TITLE.bold()));
    for row in &dashboard.collections {
        out.push_str(&collection_line(&row.collection, row.selected));
        out.push('\n');
    }
    out.push_str(&format!(
        "{}",
        format!(
            "{}: {}{}",
            text::COLLECTIONS_TOTAL,
            dashboard.total_queries,
            text::COUNT_SUFFIX
        )
        .bright_black()
    ));

    out
}

pub fn dashboard_failed() -> String {
    error(text::STATS_LOAD_FAILED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blogqa_core::message::{AiMessage, Settlement};
    use blogqa_core::stats::{AdminStats, DailyQueryCount, FeedbackScore};

    fn plain() {
        colored::control::set_override(false);
    }

    fn ai(message_id: &str) -> DisplayMessage {
        DisplayMessage::Ai(AiMessage {
            content: "RAG combines retrieval\nwith generation.".into(),
            sources: vec![Source {
                title: "Post A".into(),
                url: "http://x".into(),
            }],
            settlement: Settlement::from_response(message_id, "What is RAG?"),
        })
    }

    #[test]
    fn test_human_message() {
        plain();
        assert_eq!(message(&DisplayMessage::human("hi"), None, None), "> hi");
    }

    #[test]
    fn test_ai_message_with_sources_and_controls() {
        plain();
        let out = message(&ai("m1"), Some(1), Some(FeedbackEntry::idle()));

        assert!(out.starts_with("[#1]\nRAG combines retrieval\nwith generation.\n"));
        assert!(out.contains("참고 글:"));
        assert!(out.contains("  - Post A <http://x>"));
        assert!(out.ends_with("도움이 됐나요? /up 1 👍   /down 1 👎"));
    }

    #[test]
    fn test_unrateable_answer_has_no_controls() {
        plain();
        let out = message(&ai(""), Some(2), None);
        assert!(!out.contains(text::FEEDBACK_PROMPT));
    }

    #[test]
    fn test_feedback_states() {
        plain();
        assert_eq!(
            feedback_line(1, FeedbackEntry::done(Rating::Down)),
            "피드백 감사합니다 👎"
        );
        assert!(
            feedback_line(1, FeedbackEntry::sending(Rating::Up)).contains(text::FEEDBACK_SENDING)
        );
    }

    #[test]
    fn test_collections_marks_selection() {
        plain();
        let out = collections(&CollectionCatalog::builtin(), "investment");
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("  IT Blog (blog-v2)"));
        assert!(lines[1].starts_with("* Investment Blog (investment)"));
    }

    #[test]
    fn test_dashboard_page() {
        plain();
        let stats = AdminStats {
            daily_queries: vec![
                DailyQueryCount {
                    date: "2024-01-01".into(),
                    count: 3,
                },
                DailyQueryCount {
                    date: "2024-01-02".into(),
                    count: 5,
                },
            ],
            top_questions: Vec::new(),
            feedback_score: FeedbackScore {
                total: 3,
                up: 2,
                down: 1,
                up_ratio: 0.667,
            },
            avg_response_time: 1500.0,
            search_failure_rate: 0.1,
        };
        let page = dashboard(&Dashboard::from_stats(
            &stats,
            &CollectionCatalog::builtin(),
            "blog-v2",
        ));

        assert!(page.contains("67%"));
        assert!(page.contains("👍 2 / 👎 1"));
        assert!(page.contains("1.5s"));
        assert!(page.contains("10%"));
        assert!(page.contains(text::NO_DATA));
        assert!(page.ends_with("총 질문 수: 8건"));
    }
}
