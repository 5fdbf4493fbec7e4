//! Structured rendering of problem fragments. The backend returns each
//! problem as pre-rendered HTML; instead of injecting that markup somewhere,
//! block-level tags are turned into line breaks, everything else is stripped
//! and common entities decoded, leaving plain text lines for the UI.

const BLOCK_TAGS: &[&str] = &[
    "p", "br", "div", "tr", "table", "li", "ul", "ol", "hr",
];

// Table cells become spaces so values in one row stay separated.
const CELL_TAGS: &[&str] = &["td", "th"];

fn tag_name(tag: &str) -> &str {
    tag.trim_start_matches('/')
        .split(|c: char| c.is_whitespace() || c == '/')
        .next()
        .unwrap_or("")
}

fn is_block_tag(tag: &str) -> bool {
    let name = tag_name(tag);
    BLOCK_TAGS.iter().any(|t| t.eq_ignore_ascii_case(name))
}

fn is_cell_tag(tag: &str) -> bool {
    let name = tag_name(tag);
    CELL_TAGS.iter().any(|t| t.eq_ignore_ascii_case(name))
}

fn decode_entity(entity: &str) -> Option<String> {
    let named = match entity {
        "nbsp" => " ",
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "laquo" => "«",
        "raquo" => "»",
        "ndash" => "–",
        "mdash" => "—",
        "hellip" => "…",
        "minus" => "−",
        "middot" => "·",
        _ => "",
    };
    if !named.is_empty() {
        return Some(named.to_string());
    }

    let digits = entity.strip_prefix('#')?;
    let code = if let Some(hex) = digits.strip_prefix(['x', 'X']) {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        digits.parse::<u32>().ok()?
    };
    char::from_u32(code).map(String::from)
}

/// Reduces one fragment to non-empty text lines with collapsed whitespace.
pub fn fragment_to_lines(html: &str) -> Vec<String> {
    let mut text = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(ch) = rest.chars().next() {
        match ch {
            '<' => match rest.find('>') {
                Some(end) => {
                    let tag = &rest[1..end];
                    if is_block_tag(tag) {
                        text.push('\n');
                    } else if is_cell_tag(tag) {
                        text.push(' ');
                    }
                    rest = &rest[end + 1..];
                }
                // unterminated tag, drop the tail
                None => break,
            },
            '&' => {
                let semi = rest
                    .char_indices()
                    .take(10)
                    .find_map(|(i, c)| (c == ';').then_some(i));
                match semi {
                    Some(end) if end > 1 => {
                        let entity = &rest[1..end];
                        match decode_entity(entity) {
                            Some(decoded) => text.push_str(&decoded),
                            None => text.push_str(&rest[..end + 1]),
                        }
                        rest = &rest[end + 1..];
                    }
                    _ => {
                        text.push('&');
                        rest = &rest[1..];
                    }
                }
            }
            _ => {
                text.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
    }

    text.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect()
}
