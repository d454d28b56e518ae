//! Byte classifiers used to pick a scanning rule.

/// Space or horizontal tab. Line breaks are not whitespace here, see [`is_newline`].
pub fn is_whitespace(c: u8) -> bool {
    matches!(c, b' ' | b'\t')
}

pub fn is_newline(c: u8) -> bool {
    matches!(c, b'\n' | b'\r')
}

pub fn is_alpha(c: u8) -> bool {
    c.is_ascii_alphabetic()
}

pub fn is_numeric(c: u8) -> bool {
    c.is_ascii_digit()
}

pub fn is_alphanumeric(c: u8) -> bool {
    is_alpha(c) || is_numeric(c)
}
