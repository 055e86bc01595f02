#[inline]
pub fn is_trim_whitespace(c: char) -> bool {
    // Same set as JavaScript's trim: Unicode White_Space minus NEL (U+0085), plus the BOM.
    (c.is_whitespace() && c != '\u{0085}') || c == '\u{FEFF}'
}

/// Trim leading and trailing whitespace, including a BOM.
#[inline]
pub fn trim(s: &str) -> &str {
    s.trim_matches(is_trim_whitespace)
}

#[inline]
pub fn is_blank(s: &str) -> bool {
    s.chars().all(is_trim_whitespace)
}

/// Expected closer for an opening bracket/brace.
#[inline]
pub fn closer_for(b: u8) -> Option<u8> {
    match b {
        b'{' => Some(b'}'),
        b'[' => Some(b']'),
        _ => None,
    }
}

#[inline]
pub fn is_closer(b: u8) -> bool {
    matches!(b, b'}' | b']')
}
