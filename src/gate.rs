use crate::engine::ParseOutcome;
use serde_json::Value;

/// What is on screen for one message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayState {
    /// Last successfully parsed value. Also the last-known-good value used at finalization.
    pub display: Option<Value>,
    /// Whether the stream for the message is still open.
    pub streaming: bool,
}

/// Effect of one outcome on a `DisplayState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gated {
    /// A new value replaced the display.
    Updated,
    /// The parsed value equals the one already on display.
    Unchanged,
    /// `Incomplete` or JSON `null`: the display was left as is.
    Ignored,
}

impl DisplayState {
    pub fn streaming() -> Self {
        Self {
            display: None,
            streaming: true,
        }
    }

    /// Apply one outcome. Only a real (non-null) parsed value replaces the display,
    /// so the display never regresses to empty while a message streams.
    pub fn apply(&mut self, outcome: ParseOutcome) -> Gated {
        match outcome {
            ParseOutcome::Parsed(Value::Null) | ParseOutcome::Incomplete => Gated::Ignored,
            ParseOutcome::Parsed(v) => {
                if self.display.as_ref() == Some(&v) {
                    return Gated::Unchanged;
                }
                self.display = Some(v);
                Gated::Updated
            }
        }
    }

    /// Stop streaming, keeping the last gated value.
    pub fn close(&mut self) {
        self.streaming = false;
    }
}

/// Pure form of [`DisplayState::apply`].
pub fn on_outcome(outcome: ParseOutcome, mut state: DisplayState) -> DisplayState {
    state.apply(outcome);
    state
}
