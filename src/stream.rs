//! Async consumption of an ordered fragment stream.
//!
//! The loop yields after every fragment, even when the source already has the next one
//! ready, so the host gets control back between parse attempts. Cancellation goes
//! through `futures`' abort handles and is checked before every fragment and before
//! finalization: an aborted drive stops without the final parse pass.

use crate::error::GenerationError;
use crate::session::{RenderEvent, StreamSession};
use futures::future::{AbortRegistration, Abortable, poll_fn};
use futures::{Stream, StreamExt, pin_mut};
use serde_json::Value;
use std::fmt::Display;
use std::task::Poll;
use tracing::debug;

/// How a drive ended.
#[derive(Debug, Clone, PartialEq)]
pub enum DriveOutcome {
    /// Stream ended and a value is on display.
    Completed(Value),
    /// Transport failure, or the stream ended with nothing renderable.
    Failed(GenerationError),
    /// The host aborted the drive.
    Cancelled,
}

/// Feed every fragment of `fragments` through `session` in order, calling `on_event`
/// for each emission, then finalize.
pub async fn drive<S, T, E, F>(session: &mut StreamSession, fragments: S, mut on_event: F) -> DriveOutcome
where
    S: Stream<Item = Result<T, E>>,
    T: AsRef<str>,
    E: Display,
    F: FnMut(RenderEvent),
{
    consume(session, fragments, &mut on_event, &|| false).await
}

/// Like [`drive`], but stops as soon as the matching `AbortHandle` fires, including
/// from inside `on_event`. No fragment is pushed and no final parse runs after the abort;
/// the session keeps its last gated value and is marked not streaming.
pub async fn drive_abortable<S, T, E, F>(
    session: &mut StreamSession,
    fragments: S,
    mut on_event: F,
    reg: AbortRegistration,
) -> DriveOutcome
where
    S: Stream<Item = Result<T, E>>,
    T: AsRef<str>,
    E: Display,
    F: FnMut(RenderEvent),
{
    let handle = reg.handle();
    let cancelled = || handle.is_aborted();
    let res = Abortable::new(consume(session, fragments, &mut on_event, &cancelled), reg).await;
    match res {
        Ok(outcome) => outcome,
        Err(_aborted) => {
            session.abort();
            debug!("drive cancelled while waiting");
            DriveOutcome::Cancelled
        }
    }
}

/// Give the executor one turn.
async fn yield_now() {
    let mut yielded = false;
    poll_fn(|cx| {
        if yielded {
            return Poll::Ready(());
        }
        yielded = true;
        cx.waker().wake_by_ref();
        Poll::Pending
    })
    .await
}

async fn consume<S, T, E, F>(
    session: &mut StreamSession,
    fragments: S,
    on_event: &mut F,
    cancelled: &(dyn Fn() -> bool + Sync),
) -> DriveOutcome
where
    S: Stream<Item = Result<T, E>>,
    T: AsRef<str>,
    E: Display,
    F: FnMut(RenderEvent),
{
    pin_mut!(fragments);
    while let Some(item) = fragments.next().await {
        if cancelled() {
            return cancel(session);
        }
        match item {
            Ok(fragment) => {
                if let Some(ev) = session.push(fragment.as_ref()) {
                    on_event(ev);
                }
                yield_now().await;
            }
            Err(e) => {
                let err = GenerationError::transport(e);
                on_event(session.fail(err.clone()));
                return DriveOutcome::Failed(err);
            }
        }
    }
    if cancelled() {
        return cancel(session);
    }
    let ev = session.finish();
    let outcome = match &ev {
        RenderEvent::Final(v) | RenderEvent::Update(v) => DriveOutcome::Completed(v.clone()),
        RenderEvent::Error(err) => DriveOutcome::Failed(err.clone()),
        RenderEvent::Cancelled(_) => DriveOutcome::Cancelled,
    };
    on_event(ev);
    outcome
}

fn cancel(session: &mut StreamSession) -> DriveOutcome {
    session.abort();
    debug!(len = session.buffer().len(), "drive cancelled");
    DriveOutcome::Cancelled
}
