//! Interactive read-answer-print loop.

use crate::error::AppResult;
use crate::orchestrator::Orchestrator;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

/// Words that end the session, matched case-insensitively against the whole
/// line.
const QUIT_WORDS: [&str; 3] = ["quit", "exit", "bye"];

/// Whether a line asks to end the session.
pub fn is_quit(line: &str) -> bool {
    let lower = line.to_lowercase();
    QUIT_WORDS.contains(&lower.as_str())
}

/// Run the chat loop until a quit word or end of input.
///
/// Each iteration fully completes, network round-trips included, before the
/// next line is read. Model failures propagate and end the session.
pub async fn run<R>(orchestrator: &Orchestrator, input: R) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();

    loop {
        print!("You: ");
        std::io::stdout().flush().ok();

        let Some(line) = lines.next_line().await? else {
            debug!("End of input");
            break;
        };

        if is_quit(&line) {
            println!("Goodbye!");
            break;
        }

        let response = orchestrator.answer(&line).await?;
        println!("AI: {response}");
        println!();
    }

    Ok(())
}
