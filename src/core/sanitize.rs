// src/core/sanitize.rs

/// Decode the entities that actually show up in the money/percent cells:
/// the common named ones plus numeric references (decimal and hex).
/// Anything unrecognized is passed through untouched.
pub fn decode_entities(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let bytes = s.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'&' {
            let ch_len = utf8_len(bytes[i]);
            out.push_str(&s[i..i + ch_len]);
            i += ch_len;
            continue;
        }
        // Entities are short; cap the scan so a bare '&' can't eat the cell.
        let end = s[i + 1..]
            .char_indices()
            .take(10)
            .find(|(_, c)| *c == ';')
            .map(|(j, _)| i + 1 + j);
        let Some(end) = end else {
            out.push('&');
            i += 1;
            continue;
        };
        match decode_one(&s[i + 1..end]) {
            Some(ch) => out.push(ch),
            None => out.push_str(&s[i..end + 1]),
        }
        i = end + 1;
    }
    out
}

fn decode_one(name: &str) -> Option<char> {
    match name {
        "nbsp" => Some(' '),
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => {
            let digits = name.strip_prefix('#')?;
            let code = match digits.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => digits.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}

fn utf8_len(first: u8) -> usize {
    match first {
        b if b < 0x80 => 1,
        b if b >= 0xF0 => 4,
        b if b >= 0xE0 => 3,
        _ => 2,
    }
}

/// Collapse all whitespace runs (including NBSP) to single spaces and trim.
pub fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_entities_decode() {
        assert_eq!(decode_entities("a&nbsp;b &amp; c"), "a b & c");
        assert_eq!(decode_entities("&lt;td&gt;"), "<td>");
    }

    #[test]
    fn numeric_entities_decode() {
        assert_eq!(decode_entities("&#36;1.2T"), "$1.2T");
        assert_eq!(decode_entities("&#x24;5"), "$5");
        assert_eq!(decode_entities("&#160;"), "\u{a0}");
    }

    #[test]
    fn unknown_or_bare_amp_passes_through() {
        assert_eq!(decode_entities("fish &chips"), "fish &chips");
        assert_eq!(decode_entities("&bogus;"), "&bogus;");
        assert_eq!(decode_entities("AT&T"), "AT&T");
    }

    #[test]
    fn ws_collapses_and_trims() {
        assert_eq!(normalize_ws("  $1.2\u{a0} Mn \n"), "$1.2 Mn");
        assert_eq!(normalize_ws("one\t\ttwo"), "one two");
    }
}
