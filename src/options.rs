#[derive(Clone, Debug)]
pub struct Options {
    /// Drop one dangling comma at the very end of the trimmed input before closing structures.
    pub strip_trailing_comma: bool,
    /// Verify that every closer matches the most recent opener. An unmatched or
    /// mismatched closer makes the attempt `Incomplete` instead of being ignored.
    pub strict_closers: bool,
    /// Report the repair log of every parse attempt a session makes as `debug` tracing events.
    /// `repair_with_log` and `attempt_parse_with_log` always collect logs.
    pub logging: bool,
    /// Context window size used when building log context snippets.
    /// Controls how many characters are captured on both sides of the position.
    pub log_context_window: usize,
    /// Emit a renderer update even when the newly parsed value equals the one on display.
    pub emit_unchanged: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            strip_trailing_comma: true,
            strict_closers: false,
            logging: false,
            log_context_window: 10,
            emit_unchanged: false,
        }
    }
}
