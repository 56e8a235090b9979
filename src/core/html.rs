// src/core/html.rs
//
// Just enough slicing to walk one table. Case-insensitive on tag names,
// indifferent to attributes, and strict about the tag-name boundary so
// `<th>` never matches inside `<thead>`.

/// Find the next `<tag ...>...</tag>` block at or after `from`.
/// Returns byte bounds of the whole block, closer included.
pub fn next_block_ci(s: &str, tag: &str, from: usize) -> Option<(usize, usize)> {
    let lc = s.to_ascii_lowercase();
    let open = format!("<{tag}");
    let close = format!("</{tag}>");
    let mut at = from;

    loop {
        let start = lc.get(at..)?.find(&open)? + at;
        let after_name = start + open.len();
        let ok = matches!(
            lc.as_bytes().get(after_name),
            Some(b'>' | b'/' | b' ' | b'\t' | b'\r' | b'\n')
        );
        if !ok {
            at = start + 1;
            continue;
        }
        let open_end = lc[start..].find('>')? + start + 1;
        let end = lc[open_end..].find(&close)? + open_end + close.len();
        return Some((start, end));
    }
}

/// First `<tag>` block in the document, or None.
pub fn first_block_ci<'a>(s: &'a str, tag: &str) -> Option<&'a str> {
    let (a, b) = next_block_ci(s, tag, 0)?;
    Some(&s[a..b])
}

/// Next table cell at or after `from`, `<td>` or `<th>`, whichever
/// comes first. Header rows go through the same path as data rows and
/// get rejected later on content.
pub fn next_cell_ci(s: &str, from: usize) -> Option<(usize, usize)> {
    match (next_block_ci(s, "td", from), next_block_ci(s, "th", from)) {
        (Some(td), Some(th)) => Some(if td.0 <= th.0 { td } else { th }),
        (td, th) => td.or(th),
    }
}

/// Content between the open tag's `>` and the closing tag.
pub fn inner_of(block: &str) -> &str {
    match (block.find('>'), block.rfind('<')) {
        (Some(oe), Some(cs)) if cs > oe => &block[oe + 1..cs],
        _ => "",
    }
}

/// Drop every `<...>` span, keep the text.
pub fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}
