// src/numbers.rs
//
// Normalization of the scraped money and percent strings, plus the
// unit-scaling formatters the ranked views and comparison table use.
//
// The three cell parsers are deliberately asymmetric because the source
// page is: the debt column writes `$2.5T`, the per-capita column writes
// `$1.2 Mn` or a plain grouped integer, and the GDP column is a bare
// percentage. Each parser accepts exactly its own column's habits.

/// Parse a debt cell: `$` + decimal + one of `T`/`B`/`M`, anchored at the
/// start of the string. The magnitude letter must end its token, so
/// `$1.5T (2024 est.)` parses while `$1.5Tn` does not. Fractional dollars
/// are truncated.
pub fn parse_debt_amount(raw: &str) -> Option<u64> {
    let rest = raw.strip_prefix('$')?;
    let (num, used) = leading_decimal(rest)?;
    let mut tail = rest[used..].chars();
    let mult = match tail.next()? {
        'T' => 1e12,
        'B' => 1e9,
        'M' => 1e6,
        _ => return None,
    };
    if token_continues(tail.next()) {
        return None;
    }
    Some((num * mult) as u64)
}

/// Parse a percent-of-GDP cell. The `%` sign is the gate: without one the
/// value counts as absent. With one, every `%` is dropped and the rest
/// must parse as a float.
pub fn parse_pct_gdp(raw: &str) -> Option<f64> {
    if !raw.contains('%') {
        return None;
    }
    raw.replace('%', "").trim().parse().ok()
}

/// Parse a per-capita cell: strip `$` and thousands separators, then a
/// leading decimal with an optional `Mn`/`Bn` suffix (case-sensitive;
/// anything else after the number is ignored). Truncates to whole dollars.
pub fn parse_per_capita(raw: &str) -> Option<u64> {
    let cleaned: String = raw.chars().filter(|&c| c != '$' && c != ',').collect();
    let t = cleaned.trim();
    let (num, used) = leading_decimal(t)?;
    let tail = t[used..].trim_start();
    let mult = if tail.starts_with("Mn") {
        1e6
    } else if tail.starts_with("Bn") {
        1e9
    } else {
        1.0
    };
    Some((num * mult) as u64)
}

/// Longest leading run of digits with at most one dot. Returns the parsed
/// value and how many bytes it consumed.
fn leading_decimal(s: &str) -> Option<(f64, usize)> {
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    for b in s.bytes() {
        match b {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if !seen_digit {
        return None;
    }
    s[..end].parse().ok().map(|n| (n, end))
}

// A magnitude letter only counts when the token ends with it.
fn token_continues(next: Option<char>) -> bool {
    matches!(next, Some(c) if c.is_ascii_alphanumeric() || c == '_')
}

/// `$X.XX T/B/M`, or a grouped integer below one million. Used for the
/// comparison table and narrative, not for the bar labels (those quote
/// the source page verbatim).
pub fn fmt_usd(v: f64) -> String {
    if v >= 1e12 {
        format!("${:.2} T", v / 1e12)
    } else if v >= 1e9 {
        format!("${:.2} B", v / 1e9)
    } else if v >= 1e6 {
        format!("${:.2} M", v / 1e6)
    } else {
        format!("${}", group_thousands(v as u64))
    }
}

/// Per-capita bar label: scaled above a million, raw integer below.
/// No grouping; the comparison side formats the same value through
/// `fmt_usd` instead, which does group.
pub fn fmt_per_capita(v: u64) -> String {
    let f = v as f64;
    if f >= 1e9 {
        format!("${:.2} B", f / 1e9)
    } else if f >= 1e6 {
        format!("${:.2} M", f / 1e6)
    } else {
        format!("${v}")
    }
}

pub fn fmt_pct(v: f64) -> String {
    format!("{v}%")
}

/// 1234567 -> "1,234,567"
pub fn group_thousands(v: u64) -> String {
    let digits = v.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let mut left = digits.len();
    for ch in digits.chars() {
        out.push(ch);
        left -= 1;
        if left > 0 && left % 3 == 0 {
            out.push(',');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debt_suffixes_scale() {
        assert_eq!(parse_debt_amount("$2.5T"), Some(2_500_000_000_000));
        assert_eq!(parse_debt_amount("$1.2T"), Some(1_200_000_000_000));
        assert_eq!(parse_debt_amount("$800B"), Some(800_000_000_000));
        assert_eq!(parse_debt_amount("$72M"), Some(72_000_000));
    }

    #[test]
    fn debt_trailing_text_after_token_is_fine() {
        assert_eq!(parse_debt_amount("$1.5T (2024 est.)"), Some(1_500_000_000_000));
        assert_eq!(parse_debt_amount("$3B*"), Some(3_000_000_000));
    }

    #[test]
    fn debt_suffix_must_end_the_token() {
        assert_eq!(parse_debt_amount("$1.5Tn"), None);
        assert_eq!(parse_debt_amount("$2.5TB"), None);
        assert_eq!(parse_debt_amount("$1.5T2"), None);
        assert_eq!(parse_debt_amount("$1.5T_x"), None);
    }

    #[test]
    fn debt_shape_violations_reject() {
        assert_eq!(parse_debt_amount("2.5T"), None); // no dollar sign
        assert_eq!(parse_debt_amount("$2.5"), None); // no magnitude
        assert_eq!(parse_debt_amount("$2.5K"), None); // unknown magnitude
        assert_eq!(parse_debt_amount("$"), None);
        assert_eq!(parse_debt_amount(""), None);
        assert_eq!(parse_debt_amount("N/A"), None);
        assert_eq!(parse_debt_amount(" $2.5T"), None); // anchored at start
    }

    #[test]
    fn debt_truncates_fractional_dollars() {
        // 2.5000001 * 1e6 = 2500000.0999...; truncation, not rounding
        assert_eq!(parse_debt_amount("$2.5000001M"), Some(2_500_000));
        assert_eq!(parse_per_capita("1.0000001 Mn"), Some(1_000_000));
    }

    #[test]
    fn debt_second_dot_kills_the_match() {
        assert_eq!(parse_debt_amount("$1.2.3T"), None);
        assert_eq!(parse_debt_amount("$.5T"), Some(500_000_000_000));
    }

    #[test]
    fn pct_requires_a_percent_sign() {
        assert_eq!(parse_pct_gdp("80%"), Some(80.0));
        assert_eq!(parse_pct_gdp(" 123.4 % "), Some(123.4));
        assert_eq!(parse_pct_gdp("80"), None);
        assert_eq!(parse_pct_gdp("N/A"), None);
        assert_eq!(parse_pct_gdp(""), None);
    }

    #[test]
    fn pct_garbage_after_stripping_is_absent() {
        assert_eq!(parse_pct_gdp("about 80%"), None);
        assert_eq!(parse_pct_gdp("%"), None);
    }

    #[test]
    fn per_capita_plain_and_grouped() {
        assert_eq!(parse_per_capita("45230"), Some(45_230));
        assert_eq!(parse_per_capita("$45,230"), Some(45_230));
        assert_eq!(parse_per_capita("1,234,567"), Some(1_234_567));
    }

    #[test]
    fn per_capita_mn_bn_suffixes() {
        assert_eq!(parse_per_capita("$1.2 Mn"), Some(1_200_000));
        assert_eq!(parse_per_capita("1.2Mn"), Some(1_200_000));
        assert_eq!(parse_per_capita("2 Bn"), Some(2_000_000_000));
        // Case-sensitive: "mn" is not a magnitude, so it is ignored
        assert_eq!(parse_per_capita("1.2 mn"), Some(1));
    }

    #[test]
    fn per_capita_trailing_text_is_ignored() {
        assert_eq!(parse_per_capita("45,230 per person"), Some(45_230));
        assert_eq!(parse_per_capita("$1.2 Mn (est)"), Some(1_200_000));
    }

    #[test]
    fn per_capita_without_a_number_is_absent() {
        assert_eq!(parse_per_capita("N/A"), None);
        assert_eq!(parse_per_capita(""), None);
        assert_eq!(parse_per_capita("$,"), None);
    }

    #[test]
    fn usd_formatting_scales_units() {
        assert_eq!(fmt_usd(2_500_000_000_000.0), "$2.50 T");
        assert_eq!(fmt_usd(1_300_000_000_000.0), "$1.30 T");
        assert_eq!(fmt_usd(812_000_000_000.0), "$812.00 B");
        assert_eq!(fmt_usd(72_500_000.0), "$72.50 M");
        assert_eq!(fmt_usd(45_230.0), "$45,230");
        assert_eq!(fmt_usd(0.0), "$0");
    }

    #[test]
    fn per_capita_formatting() {
        assert_eq!(fmt_per_capita(500), "$500");
        assert_eq!(fmt_per_capita(45_230), "$45230"); // bar labels skip grouping
        assert_eq!(fmt_per_capita(1_200_000), "$1.20 M");
        assert_eq!(fmt_per_capita(2_500_000_000), "$2.50 B");
    }

    #[test]
    fn pct_label_echoes_the_float() {
        assert_eq!(fmt_pct(80.0), "80%");
        assert_eq!(fmt_pct(123.4), "123.4%");
    }

    #[test]
    fn grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }
}
