/// Everything received so far for one in-flight generation.
pub type RawBuffer = str;

/// Append-only text buffer fed with fragments in arrival order.
#[derive(Debug, Default, Clone)]
pub struct Accumulator {
    buf: String,
    fragments: usize,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one fragment and return the whole buffer. Zero-length fragments are counted too.
    pub fn append(&mut self, fragment: &str) -> &RawBuffer {
        self.buf.push_str(fragment);
        self.fragments += 1;
        &self.buf
    }

    /// Start over for a new generation request.
    pub fn reset(&mut self) {
        self.buf.clear();
        self.fragments = 0;
    }

    #[inline]
    pub fn as_str(&self) -> &RawBuffer {
        &self.buf
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Number of fragments appended since the last reset.
    #[inline]
    pub fn fragments(&self) -> usize {
        self.fragments
    }
}
