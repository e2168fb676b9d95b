//! Interactive chat REPL.
//!
//! Input is read on the main task; chat turns and feedback requests run as
//! background tasks whose outcomes are printed by a single printer task.

mod command;
mod helper;

use std::sync::Arc;

use anyhow::Result;
use blogqa_application::{
    Admission, ChatSession, FeedbackOutcome, FeedbackTracker, SubmitOutcome,
};
use blogqa_core::feedback::{FeedbackEntry, FeedbackState, Rating};
use blogqa_core::message::{AiMessage, DisplayMessage};
use blogqa_core::text;
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use tokio::sync::mpsc;

use crate::app::AppContext;
use crate::commands;
use crate::view;
use command::{HELP, ReplCommand};
use helper::CliHelper;

/// Outcome of a background task, delivered to the printer.
#[derive(Debug)]
enum ReplEvent {
    Turn(SubmitOutcome),
    Feedback {
        number: usize,
        message: AiMessage,
        outcome: FeedbackOutcome,
    },
}

pub async fn run(ctx: &AppContext) -> Result<()> {
    let session = Arc::new(ctx.chat_session());
    let feedback = Arc::new(ctx.feedback_tracker());

    let (event_tx, mut event_rx) = mpsc::channel::<ReplEvent>(32);

    let printer = {
        let session = Arc::clone(&session);
        let feedback = Arc::clone(&feedback);
        tokio::spawn(async move {
            while let Some(event) = event_rx.recv().await {
                print_event(&session, &feedback, event).await;
            }
        })
    };

    // ===== REPL Setup =====
    let collection_ids = ctx
        .collection
        .catalog()
        .iter()
        .map(|c| c.id.clone())
        .collect();
    let mut rl: Editor<CliHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(CliHelper::new(collection_ids)));

    let current = ctx.collection.current().await;
    println!("{}", "=== Blog Q&A ===".bright_magenta().bold());
    println!(
        "{}",
        format!("{} ({}) - {}", current.label, current.id, ctx.config.api_base()).bright_black()
    );
    println!(
        "{}",
        format!("{} /help for commands, 'quit' to exit.", text::INPUT_PLACEHOLDER).bright_black()
    );
    println!("{}", view::empty_conversation());
    println!();

    // ===== Main REPL Loop =====
    loop {
        let prompt = format!("[{}] >> ", ctx.collection.id().await);

        let line = match rl.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {err:?}").red());
                break;
            }
        };

        let command = ReplCommand::parse(&line);
        if command != ReplCommand::Empty {
            let _ = rl.add_history_entry(line.as_str());
        }

        match command {
            ReplCommand::Empty => {}
            ReplCommand::Quit => {
                println!("{}", "Goodbye!".bright_green());
                break;
            }
            ReplCommand::Ask(question) => {
                for line in ask(&session, &event_tx, &question).await {
                    println!("{line}");
                }
            }
            ReplCommand::Rate { number, rating } => {
                rate(&session, &feedback, &event_tx, number, rating).await;
            }
            ReplCommand::Collection(None) => {
                let id = ctx.collection.id().await;
                println!("{}", view::collections(ctx.collection.catalog(), &id));
            }
            ReplCommand::Collection(Some(id)) => match ctx.collection.select(&id).await {
                Ok(collection) => println!(
                    "{}",
                    view::notice(&format!("Collection: {} ({})", collection.label, collection.id))
                ),
                Err(err) => println!("{}", view::error(&err.to_string())),
            },
            ReplCommand::History => {
                println!("{}", render_conversation(&session, &feedback).await);
            }
            ReplCommand::Clear => {
                session.reset().await;
                println!("{}", view::empty_conversation());
            }
            ReplCommand::Stats => {
                println!("{}", commands::stats::render(ctx).await);
            }
            ReplCommand::Help => println!("{}", HELP.bright_black()),
            ReplCommand::Invalid(message) => println!("{}", view::notice(&message)),
        }
    }

    // In-flight requests are not cancelled; their results are simply not
    // printed once the printer is gone.
    drop(event_tx);
    printer.abort();

    Ok(())
}

/// Admits `question` as the next turn and spawns its request.
///
/// Returns the lines to print. The question is echoed only once the session
/// has accepted it.
async fn ask(
    session: &Arc<ChatSession>,
    event_tx: &mpsc::Sender<ReplEvent>,
    question: &str,
) -> Vec<String> {
    let turn = match session.begin(question).await {
        Admission::Accepted(turn) => turn,
        Admission::Busy => return vec![view::notice(text::GENERATING)],
        Admission::Ignored => return Vec::new(),
    };

    let lines = vec![
        view::message(&DisplayMessage::human(turn.question()), None, None),
        view::loading(),
    ];

    let tx = event_tx.clone();
    let session = Arc::clone(session);
    tokio::spawn(async move {
        let outcome = session.complete(turn).await;
        let _ = tx.send(ReplEvent::Turn(outcome)).await;
    });

    lines
}

async fn rate(
    session: &Arc<ChatSession>,
    feedback: &Arc<FeedbackTracker>,
    event_tx: &mpsc::Sender<ReplEvent>,
    number: usize,
    rating: Rating,
) {
    let Some(message) = session.answer(number).await else {
        println!("{}", view::error(&format!("No answer #{number}")));
        return;
    };

    if let Some(entry) = feedback.entry_for(&message).await {
        if entry.accepts_rating() {
            println!("{}", view::feedback_line(number, FeedbackEntry::sending(rating)));
        }
    }

    let tx = event_tx.clone();
    let feedback = Arc::clone(feedback);
    tokio::spawn(async move {
        let outcome = feedback.rate(&message, rating).await;
        let _ = tx
            .send(ReplEvent::Feedback {
                number,
                message,
                outcome,
            })
            .await;
    });
}

async fn print_event(session: &ChatSession, feedback: &FeedbackTracker, event: ReplEvent) {
    match event {
        ReplEvent::Turn(SubmitOutcome::Answered { index, message }) => {
            let number = answer_number(&session.messages().await, index);
            let entry = feedback.entry_for(&message).await;
            println!(
                "{}",
                view::message(&DisplayMessage::Ai(message), Some(number), entry)
            );
        }
        ReplEvent::Turn(SubmitOutcome::Failed { message }) => {
            println!("{}", view::error(&message));
        }
        ReplEvent::Turn(SubmitOutcome::Busy) => {
            println!("{}", view::notice(text::GENERATING));
        }
        ReplEvent::Turn(SubmitOutcome::Ignored | SubmitOutcome::Discarded) => {}
        ReplEvent::Feedback {
            number,
            message,
            outcome,
        } => match outcome {
            FeedbackOutcome::Unavailable => {
                println!("{}", view::notice(&format!("Answer #{number} cannot be rated")));
            }
            FeedbackOutcome::Ignored(FeedbackState::Sending) => {
                println!("{}", view::notice(text::FEEDBACK_SENDING));
            }
            FeedbackOutcome::Ignored(_)
            | FeedbackOutcome::Recorded(_)
            | FeedbackOutcome::Reverted => {
                // A revert shows the controls again; nothing else is reported.
                let entry = feedback.entry_for(&message).await.unwrap_or_default();
                println!("{}", view::feedback_line(number, entry));
            }
        },
    }
}

/// Renders the whole conversation with feedback state and status lines.
async fn render_conversation(session: &ChatSession, feedback: &FeedbackTracker) -> String {
    let snapshot = session.snapshot().await;
    if snapshot.messages.is_empty() && !snapshot.loading {
        return view::empty_conversation();
    }

    let mut lines = Vec::new();
    let mut number = 0;
    for msg in &snapshot.messages {
        let rendered = match msg {
            DisplayMessage::Human { .. } => view::message(msg, None, None),
            DisplayMessage::Ai(ai) => {
                number += 1;
                let entry = feedback.entry_for(ai).await;
                view::message(msg, Some(number), entry)
            }
        };
        lines.push(rendered);
    }

    if snapshot.loading {
        lines.push(view::loading());
    }
    if let Some(error) = &snapshot.error {
        lines.push(view::error(error));
    }

    lines.join("\n")
}

/// 1-based answer number of the message at `index`.
fn answer_number(messages: &[DisplayMessage], index: usize) -> usize {
    messages
        .iter()
        .take(index + 1)
        .filter(|m| m.as_ai().is_some())
        .count()
}
