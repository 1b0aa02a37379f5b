use quick_xml::escape::unescape;

/// Longest reference we try to resolve, `&` and `;` included.
const MAX_REFERENCE_LEN: usize = 40;

/// Decode HTML character references (`&amp;`, `&#233;`, `&#x1F600;`, `&nbsp;`).
///
/// Numeric references in `&#128;`..`&#159;` are read as Windows-1252, the
/// way browsers do. Unknown or malformed references are kept verbatim.
pub fn decode_html_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut pos = 0;
    while let Some(found) = text[pos..].find('&') {
        let start = pos + found;
        out.push_str(&text[pos..start]);

        match reference_len(&text[start..]) {
            Some(len) => {
                let reference = &text[start..start + len];
                match unescape(reference) {
                    Ok(decoded) if reference.starts_with("&#") => {
                        out.extend(decoded.chars().map(windows_1252_control))
                    }
                    Ok(decoded) => out.push_str(&decoded),
                    Err(_) => out.push_str(reference),
                }
                pos = start + len;
            }
            None => {
                out.push('&');
                pos = start + 1;
            }
        }
    }
    out.push_str(&text[pos..]);
    out
}

/// C1 code points as their Windows-1252 characters; unassigned slots stay put.
fn windows_1252_control(c: char) -> char {
    const C1: [char; 32] = [
        '\u{20ac}', '\u{81}', '\u{201a}', '\u{192}', '\u{201e}', '\u{2026}', '\u{2020}',
        '\u{2021}', '\u{2c6}', '\u{2030}', '\u{160}', '\u{2039}', '\u{152}', '\u{8d}',
        '\u{17d}', '\u{8f}', '\u{90}', '\u{2018}', '\u{2019}', '\u{201c}', '\u{201d}',
        '\u{2022}', '\u{2013}', '\u{2014}', '\u{2dc}', '\u{2122}', '\u{161}', '\u{203a}',
        '\u{153}', '\u{9d}', '\u{17e}', '\u{178}',
    ];
    match c as u32 {
        code @ 0x80..=0x9f => C1[(code - 0x80) as usize],
        _ => c,
    }
}

/// Length of `&name;` at the start of `rest`, if it is shaped like a reference.
fn reference_len(rest: &str) -> Option<usize> {
    let body = &rest[1..];
    let end = body.find(|c: char| c == ';' || c == '&' || c.is_whitespace() || c == '<')?;
    if end == 0 || !body[end..].starts_with(';') || end + 2 > MAX_REFERENCE_LEN {
        return None;
    }
    Some(end + 2)
}
