use crate::accumulator::Accumulator;
use crate::engine::{ParseOutcome, attempt_parse_with, attempt_parse_with_log};
use crate::error::GenerationError;
use crate::gate::{DisplayState, Gated};
use crate::options::Options;
use serde_json::Value;
use tracing::{debug, trace, warn};

/// What the renderer receives for one message.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    /// New display value while the stream is open.
    Update(Value),
    /// Final display value. The stream is closed.
    Final(Value),
    /// Terminal error. No JSON value accompanies it.
    Error(GenerationError),
    /// The host aborted the stream. Carries the last gated value, if any.
    Cancelled(Option<Value>),
}

impl RenderEvent {
    pub fn value(&self) -> Option<&Value> {
        match self {
            RenderEvent::Update(v) | RenderEvent::Final(v) => Some(v),
            RenderEvent::Cancelled(v) => v.as_ref(),
            RenderEvent::Error(_) => None,
        }
    }

    /// The "still streaming" flag that goes along with the event.
    pub fn is_streaming(&self) -> bool {
        matches!(self, RenderEvent::Update(_))
    }
}

/// State of one in-flight message: raw buffer plus what is on display.
///
/// Each message owns its session exclusively; concurrent messages use separate sessions.
#[derive(Debug)]
pub struct StreamSession {
    opts: Options,
    acc: Accumulator,
    state: DisplayState,
    error: Option<GenerationError>,
    cancelled: bool,
}

impl Default for StreamSession {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl StreamSession {
    pub fn new(opts: Options) -> Self {
        Self {
            opts,
            acc: Accumulator::new(),
            state: DisplayState::streaming(),
            error: None,
            cancelled: false,
        }
    }

    /// Append a fragment, re-parse the buffer and gate the outcome.
    /// Returns an event only when the display changed. Ignored once the session is closed.
    pub fn push(&mut self, fragment: &str) -> Option<RenderEvent> {
        if !self.state.streaming {
            trace!(len = fragment.len(), "fragment after close ignored");
            return None;
        }
        let len = self.acc.append(fragment).len();
        trace!(fragment = self.acc.fragments(), len, "fragment appended");
        let outcome = self.parse_buffer();
        match self.state.apply(outcome) {
            Gated::Updated => {
                debug!(len = self.acc.len(), "display updated");
                self.state.display.clone().map(RenderEvent::Update)
            }
            Gated::Unchanged if self.opts.emit_unchanged => {
                self.state.display.clone().map(RenderEvent::Update)
            }
            Gated::Unchanged | Gated::Ignored => None,
        }
    }

    /// End of stream: one last parse over the whole buffer, falling back to the
    /// last value shown. Without any value the message ends in `Malformed`.
    pub fn finish(&mut self) -> RenderEvent {
        if !self.state.streaming {
            return self.closed_event();
        }
        let outcome = self.parse_buffer();
        if !outcome.is_parsed() {
            debug!(len = self.acc.len(), "final parse incomplete, keeping last value");
        }
        self.state.apply(outcome);
        self.state.close();
        match &self.state.display {
            Some(v) => {
                debug!(len = self.acc.len(), "stream finalized");
                RenderEvent::Final(v.clone())
            }
            None => {
                let err = GenerationError::Malformed { len: self.acc.len() };
                warn!(%err, "no renderable value");
                self.error = Some(err.clone());
                RenderEvent::Error(err)
            }
        }
    }

    /// The token source failed. Stops at once without another parse attempt.
    pub fn fail(&mut self, err: GenerationError) -> RenderEvent {
        if !self.state.streaming {
            return self.closed_event();
        }
        warn!(%err, "stream failed");
        self.state.close();
        self.error = Some(err.clone());
        RenderEvent::Error(err)
    }

    /// Host cancelled the stream: no final parse, display stays at its last gated value.
    pub fn abort(&mut self) {
        if self.state.streaming {
            debug!(len = self.acc.len(), "stream aborted");
            self.state.close();
            self.cancelled = true;
        }
    }

    /// Start a new generation request: empty buffer, nothing on display.
    pub fn restart(&mut self) {
        self.acc.reset();
        self.state = DisplayState::streaming();
        self.error = None;
        self.cancelled = false;
    }

    fn parse_buffer(&self) -> ParseOutcome {
        if !self.opts.logging {
            return attempt_parse_with(self.acc.as_str(), &self.opts);
        }
        let (outcome, entries) = attempt_parse_with_log(self.acc.as_str(), &self.opts);
        for e in entries {
            debug!(position = e.position, context = %e.context, "repair: {}", e.message);
        }
        outcome
    }

    fn closed_event(&self) -> RenderEvent {
        if self.cancelled {
            return RenderEvent::Cancelled(self.state.display.clone());
        }
        match (&self.error, &self.state.display) {
            (Some(err), _) => RenderEvent::Error(err.clone()),
            (None, Some(v)) => RenderEvent::Final(v.clone()),
            (None, None) => RenderEvent::Error(GenerationError::Malformed { len: self.acc.len() }),
        }
    }

    #[inline]
    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    #[inline]
    pub fn display(&self) -> Option<&Value> {
        self.state.display.as_ref()
    }

    #[inline]
    pub fn is_streaming(&self) -> bool {
        self.state.streaming
    }

    /// Whether the stream ended through `abort`.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    #[inline]
    pub fn error(&self) -> Option<&GenerationError> {
        self.error.as_ref()
    }

    #[inline]
    pub fn buffer(&self) -> &str {
        self.acc.as_str()
    }

    #[inline]
    pub fn options(&self) -> &Options {
        &self.opts
    }
}
