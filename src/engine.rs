use crate::classify::is_blank;
use crate::options::Options;
use crate::repair::{Logger, RepairLogEntry, repair_impl};
use serde_json::Value;

/// Result of one parse attempt over the buffer received so far.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    Parsed(Value),
    /// Not parseable yet, even after repair. Keep showing the previous value.
    Incomplete,
}

impl ParseOutcome {
    #[inline]
    pub fn is_parsed(&self) -> bool {
        matches!(self, ParseOutcome::Parsed(_))
    }

    #[inline]
    pub fn value(&self) -> Option<&Value> {
        match self {
            ParseOutcome::Parsed(v) => Some(v),
            ParseOutcome::Incomplete => None,
        }
    }

    #[inline]
    pub fn into_value(self) -> Option<Value> {
        match self {
            ParseOutcome::Parsed(v) => Some(v),
            ParseOutcome::Incomplete => None,
        }
    }
}

impl From<Option<Value>> for ParseOutcome {
    fn from(v: Option<Value>) -> Self {
        v.map_or(ParseOutcome::Incomplete, ParseOutcome::Parsed)
    }
}

/// Parse `buffer` as JSON, repairing a truncated prefix when the strict parse fails.
pub fn attempt_parse(buffer: &str) -> ParseOutcome {
    attempt_parse_with(buffer, &Options::default())
}

pub fn attempt_parse_with(buffer: &str, opts: &Options) -> ParseOutcome {
    let mut logger = Logger::new(false, opts.log_context_window);
    attempt_parse_impl(buffer, opts, &mut logger)
}

/// Like [`attempt_parse_with`], and also return the repair log. The log is empty
/// when the strict parse succeeds or the buffer is blank.
pub fn attempt_parse_with_log(buffer: &str, opts: &Options) -> (ParseOutcome, Vec<RepairLogEntry>) {
    let mut logger = Logger::new(true, opts.log_context_window);
    let out = attempt_parse_impl(buffer, opts, &mut logger);
    (out, logger.into_entries())
}

fn attempt_parse_impl(buffer: &str, opts: &Options, logger: &mut Logger) -> ParseOutcome {
    if is_blank(buffer) {
        return ParseOutcome::Incomplete;
    }
    if let Ok(v) = serde_json::from_str::<Value>(buffer) {
        return ParseOutcome::Parsed(v);
    }
    let Some(candidate) = repair_impl(buffer, opts, logger) else {
        return ParseOutcome::Incomplete;
    };
    serde_json::from_str::<Value>(&candidate).ok().into()
}
