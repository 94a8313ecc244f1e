//! JSON number shape validation.
//! JSON 数字格式校验。

/// Check `text` against `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`.
///
/// Only the shape is checked; magnitude never matters.
/// 只检查格式，不关心数值大小。
pub fn is_valid_number(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;

    if bytes.get(i) == Some(&b'-') {
        i += 1;
    }

    // Integer part: a single zero, or a non-zero digit followed by digits.
    // 整数部分：单个 0，或以非零数字开头的数字串。
    match bytes.get(i) {
        Some(b'0') => i += 1,
        Some(b'1'..=b'9') => i = skip_digits(bytes, i),
        _ => return false,
    }

    if bytes.get(i) == Some(&b'.') {
        let start = i + 1;
        i = skip_digits(bytes, start);
        if i == start {
            return false;
        }
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let start = i;
        i = skip_digits(bytes, start);
        if i == start {
            return false;
        }
    }

    i == bytes.len()
}

fn skip_digits(bytes: &[u8], mut i: usize) -> usize {
    while bytes.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    i
}
