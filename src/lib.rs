mod accumulator;
mod classify;
pub mod cli;
mod engine;
pub mod error;
mod gate;
pub mod node;
pub mod options;
mod repair;
pub mod session;
pub mod stream;

pub use accumulator::{Accumulator, RawBuffer};
pub use engine::{ParseOutcome, attempt_parse, attempt_parse_with, attempt_parse_with_log};
pub use error::GenerationError;
pub use gate::{DisplayState, Gated, on_outcome};
pub use node::{ComponentType, UiNode};
pub use options::Options;
pub use repair::{RepairLogEntry, repair, repair_with_log};
pub use session::{RenderEvent, StreamSession};
pub use stream::{DriveOutcome, drive, drive_abortable};

use serde_json::Value;

/// Convenience: run a sequence of fragments through a session and return the final display value.
pub fn parse_chunks<'a, I>(chunks: I, opts: &Options) -> Result<Value, GenerationError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut s = StreamSession::new(opts.clone());
    for c in chunks {
        s.push(c);
    }
    match s.finish() {
        RenderEvent::Final(v) | RenderEvent::Update(v) | RenderEvent::Cancelled(Some(v)) => Ok(v),
        RenderEvent::Cancelled(None) => Err(GenerationError::Malformed { len: s.buffer().len() }),
        RenderEvent::Error(err) => Err(err),
    }
}

/// Convenience: like [`parse_chunks`], but collect every event the renderer would see.
pub fn replay_chunks<'a, I>(chunks: I, opts: &Options) -> Vec<RenderEvent>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut s = StreamSession::new(opts.clone());
    let mut events: Vec<RenderEvent> = chunks.into_iter().filter_map(|c| s.push(c)).collect();
    events.push(s.finish());
    events
}

#[cfg(test)]
mod tests;
