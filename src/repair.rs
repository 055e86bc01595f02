use crate::classify::{closer_for, is_closer, trim};
use crate::options::Options;
use memchr::memchr2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairLogEntry {
    /// Byte offset in the trimmed input.
    pub position: usize,
    pub message: &'static str,
    pub context: String,
}

pub(crate) struct Logger {
    enable: bool,
    window: usize,
    entries: Vec<RepairLogEntry>,
}

impl Logger {
    pub(crate) fn new(enable: bool, window: usize) -> Self {
        Self {
            enable,
            window,
            entries: Vec::new(),
        }
    }

    #[inline]
    fn log(&mut self, text: &str, position: usize, message: &'static str) {
        if self.enable {
            self.entries.push(RepairLogEntry {
                position,
                message,
                context: build_context(text, position, self.window),
            });
        }
    }

    pub(crate) fn into_entries(self) -> Vec<RepairLogEntry> {
        self.entries
    }
}

/// Up to `win` chars on both sides of byte offset `pos`.
fn build_context(text: &str, pos: usize, win: usize) -> String {
    let mut pos = pos.min(text.len());
    while !text.is_char_boundary(pos) {
        pos -= 1;
    }
    let before: Vec<char> = text[..pos].chars().rev().take(win).collect();
    let mut s: String = before.into_iter().rev().collect();
    s.extend(text[pos..].chars().take(win));
    s
}

/// Produce a repair candidate for a truncated JSON prefix: strip one dangling comma,
/// close an unterminated string, then close every still-open object/array innermost first.
///
/// Existing content is never removed or reordered. Returns `None` only when
/// `opts.strict_closers` is set and a closer does not match its opener.
pub fn repair(input: &str, opts: &Options) -> Option<String> {
    let mut logger = Logger::new(false, opts.log_context_window);
    repair_impl(input, opts, &mut logger)
}

/// Like [`repair`], and also return the log of every change made.
pub fn repair_with_log(input: &str, opts: &Options) -> (Option<String>, Vec<RepairLogEntry>) {
    let mut logger = Logger::new(true, opts.log_context_window);
    let out = repair_impl(input, opts, &mut logger);
    (out, logger.into_entries())
}

pub(crate) fn repair_impl(input: &str, opts: &Options, logger: &mut Logger) -> Option<String> {
    let mut text = trim(input);
    if opts.strip_trailing_comma
        && let Some(rest) = text.strip_suffix(',')
    {
        logger.log(text, rest.len(), "stripped trailing comma");
        text = rest;
    }

    let bytes = text.as_bytes();
    let mut stack: Vec<u8> = Vec::new();
    let mut in_string = false;
    let mut i = 0usize;
    while i < bytes.len() {
        if in_string {
            // jump straight to the next quote or backslash
            match memchr2(b'"', b'\\', &bytes[i..]) {
                Some(p) => i += p,
                None => break,
            }
            if bytes[i] == b'\\' {
                i += 2;
            } else {
                in_string = false;
                i += 1;
            }
            continue;
        }
        match bytes[i] {
            b'\\' => {
                i += 2;
                continue;
            }
            b'"' => in_string = true,
            b @ (b'{' | b'[') => {
                if let Some(c) = closer_for(b) {
                    stack.push(c);
                }
            }
            b if is_closer(b) => match stack.pop() {
                Some(expected) if opts.strict_closers && expected != b => {
                    logger.log(text, i, "mismatched closer");
                    return None;
                }
                Some(_) => {}
                None if opts.strict_closers => {
                    logger.log(text, i, "mismatched closer");
                    return None;
                }
                None => logger.log(text, i, "unmatched closer ignored"),
            },
            _ => {}
        }
        i += 1;
    }

    let mut out = String::with_capacity(text.len() + stack.len() + 1);
    out.push_str(text);
    if in_string {
        logger.log(text, text.len(), "closed unterminated string");
        out.push('"');
    }
    while let Some(c) = stack.pop() {
        logger.log(text, text.len(), "appended closer");
        out.push(c as char);
    }
    Some(out)
}
