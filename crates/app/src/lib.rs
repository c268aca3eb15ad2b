//! Requestor host loop
//!
//! The host reads one JSON-encoded action per input line, threads it through
//! the [`Session`], and writes the resulting snapshot as one JSON line. The
//! line `{"kind":"hard_navigate"}` clears any saved session and ends the
//! loop. `{"kind":"attach_file","path":"..."}` reads a file from disk into a
//! `file` body. End of input saves the final snapshot through the lifecycle.

use std::path::PathBuf;

use serde::Deserialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use requestor_application::{ApplicationError, Session, SessionLifecycle};
use requestor_domain::{Action, BodyVariant, RequestConfiguration, RequestorSettings};
use requestor_infrastructure::{SerializationError, load_file_blob, to_json_line};

const HARD_NAVIGATE: &str = "hard_navigate";
const ATTACH_FILE: &str = "attach_file";

#[derive(Deserialize)]
struct AttachFile {
    path: PathBuf,
}

/// Error type for the host loop.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// Reading input or writing output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A snapshot could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),

    /// A lifecycle callback failed.
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Feed an action to the reducer.
    Dispatch(Action),
    /// Load a file from disk as the request body.
    AttachFile(PathBuf),
    /// The user left for good.
    HardNavigate,
}

/// Parses one input line. Blank lines yield `None`.
///
/// # Errors
///
/// Returns an error if the line is not a JSON object with a `kind`.
pub fn parse_line(line: &str) -> Result<Option<Command>, serde_json::Error> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let value: serde_json::Value = serde_json::from_str(line)?;
    match value.get("kind").and_then(serde_json::Value::as_str) {
        Some(HARD_NAVIGATE) => Ok(Some(Command::HardNavigate)),
        Some(ATTACH_FILE) => {
            let attach: AttachFile = serde_json::from_value(value)?;
            Ok(Some(Command::AttachFile(attach.path)))
        }
        _ => serde_json::from_value(value).map(|action| Some(Command::Dispatch(action))),
    }
}

/// How a run of the loop ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Actions applied
    pub dispatched: u64,
    /// Lines that could not be parsed
    pub skipped: u64,
    /// Whether the run ended by hard navigation
    pub hard_navigated: bool,
    /// The final snapshot
    pub snapshot: RequestConfiguration,
}

/// Builds the starting session: the restored snapshot, if any, with the
/// configured base URL applied on top.
///
/// A session that cannot be restored is logged and replaced by a fresh one.
pub async fn start_session(
    settings: &RequestorSettings,
    lifecycle: &dyn SessionLifecycle,
) -> Session {
    let state = match lifecycle.on_session_start().await {
        Ok(Some(state)) => state,
        Ok(None) => RequestConfiguration::new(),
        Err(e) => {
            tracing::warn!(error = %e, "could not restore session, starting fresh");
            RequestConfiguration::new()
        }
    };

    let mut session = Session::new(state);
    if settings.service_base_url.is_some() {
        session.dispatch(Action::SetServiceBaseUrl {
            url: settings.service_base_url.clone(),
        });
    }
    session
}

/// Runs the loop until end of input or hard navigation.
///
/// # Errors
///
/// Returns an error on IO failure or if a lifecycle callback fails.
pub async fn run<R, W>(
    input: R,
    mut output: W,
    mut session: Session,
    lifecycle: &dyn SessionLifecycle,
) -> Result<RunSummary, HostError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let mut skipped = 0;
    let mut hard_navigated = false;

    while let Some(line) = lines.next_line().await? {
        match parse_line(&line) {
            Ok(None) => {}
            Ok(Some(Command::HardNavigate)) => {
                lifecycle.on_hard_navigate().await?;
                hard_navigated = true;
                break;
            }
            Ok(Some(Command::Dispatch(action))) => {
                write_snapshot(&mut output, session.dispatch(action)).await?;
            }
            Ok(Some(Command::AttachFile(path))) => match load_file_blob(&path).await {
                Ok(blob) => {
                    let action = Action::SetBody {
                        body: BodyVariant::File { value: Some(blob) },
                    };
                    write_snapshot(&mut output, session.dispatch(action)).await?;
                }
                Err(e) => {
                    skipped += 1;
                    tracing::warn!(path = %path.display(), error = %e, "could not attach file");
                }
            },
            Err(e) => {
                skipped += 1;
                tracing::warn!(error = %e, "skipping malformed action line");
            }
        }
    }

    if !hard_navigated {
        lifecycle.on_session_end(session.snapshot()).await?;
    }

    Ok(RunSummary {
        dispatched: session.dispatched(),
        skipped,
        hard_navigated,
        snapshot: session.into_snapshot(),
    })
}

async fn write_snapshot<W>(output: &mut W, snapshot: &RequestConfiguration) -> Result<(), HostError>
where
    W: AsyncWrite + Unpin,
{
    let mut json = to_json_line(snapshot)?;
    json.push('\n');
    output.write_all(json.as_bytes()).await?;
    output.flush().await?;
    Ok(())
}
