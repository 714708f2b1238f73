//! The interactive read-query-answer loop.

use std::io::{self, BufRead, Write};

use conduit_ai::Session;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

const QUIT: &str = "quit";

/// What to do with one line of operator input.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Quit,
    Skip,
    Query(&'a str),
}

fn classify(line: &str) -> Input<'_> {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case(QUIT) {
        Input::Quit
    } else if trimmed.is_empty() {
        Input::Skip
    } else {
        Input::Query(trimmed)
    }
}

/// A line that is not valid UTF-8 has already been consumed by the time
/// the error is reported, so reading can go on. Anything else ends input.
fn is_fatal_read_error(e: &io::Error) -> bool {
    e.kind() != io::ErrorKind::InvalidData
}

/// Read lines on a plain thread so a pending read never holds up runtime
/// shutdown.
fn spawn_line_reader<R>(reader: R) -> mpsc::Receiver<io::Result<String>>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel(1);
    std::thread::spawn(move || {
        for line in reader.lines() {
            let fatal = line.as_ref().is_err_and(is_fatal_read_error);
            if tx.blocking_send(line).is_err() || fatal {
                break;
            }
        }
    });
    rx
}

fn prompt() {
    print!("\nQuery: ");
    let _ = io::stdout().flush();
}

/// Run queries until `quit`, EOF, or cancellation.
///
/// Cancellation is only observed between queries: a query that has started
/// runs to completion first.
pub async fn run(session: &mut Session, shutdown: CancellationToken) {
    println!("\nType your queries or '{QUIT}' to exit.");
    let mut lines = spawn_line_reader(io::BufReader::new(io::stdin()));

    loop {
        if shutdown.is_cancelled() {
            break;
        }
        prompt();

        let line = tokio::select! {
            _ = shutdown.cancelled() => {
                println!();
                break;
            }
            line = lines.recv() => line,
        };

        let line = match line {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("Error: failed to read input: {e}");
                if is_fatal_read_error(&e) {
                    break;
                }
                continue;
            }
            None => {
                debug!("stdin closed");
                println!();
                break;
            }
        };

        let query = match classify(&line) {
            Input::Quit => break,
            Input::Skip => continue,
            Input::Query(query) => query,
        };

        match session.process_query(query).await {
            Ok(answer) => println!("\n{answer}"),
            Err(e) => eprintln!("\nError: {e}"),
        }
    }

    info!(session = %session.id(), "leaving interactive loop");
}
