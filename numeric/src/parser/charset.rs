//! Character classes driving the scanner's state transitions

pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

/// Characters that may open a numeric literal
pub fn is_first_numeric(c: char) -> bool {
    c.is_ascii_digit()
}

/// Secondary delimiters always accepted as a decimal separator
pub fn is_decimal_delimiter(c: char) -> bool {
    matches!(c, '.' | ',')
}

pub fn is_operator(c: char) -> bool {
    matches!(c, '*' | '+' | '-' | '/')
}

pub fn is_unit_or_symbol(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, '\'' | '"')
}

pub fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

pub fn is_binary_digit(c: char) -> bool {
    matches!(c, '0' | '1')
}
