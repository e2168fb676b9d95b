use anyhow::{Result, bail};
use blogqa_application::SubmitOutcome;
use blogqa_core::message::DisplayMessage;

use crate::app::AppContext;
use crate::view;

/// Runs a single chat turn without history and prints the answer.
pub async fn run(ctx: &AppContext, question: &str, collection: Option<&str>) -> Result<()> {
    ctx.select_collection(collection).await?;
    let session = ctx.chat_session();

    match session.submit(question).await {
        SubmitOutcome::Answered { message, .. } => {
            println!("{}", view::message(&DisplayMessage::Ai(message), None, None));
            Ok(())
        }
        SubmitOutcome::Failed { message } => {
            eprintln!("{}", view::error(&message));
            bail!("question failed");
        }
        SubmitOutcome::Ignored => bail!("question must not be blank"),
        SubmitOutcome::Busy | SubmitOutcome::Discarded => bail!("question was not answered"),
    }
}
