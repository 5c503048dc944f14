//! Markup whitespace collapsing.
//!
//! Generated fragments are authored as readable, indented markup. Before
//! insertion they are collapsed: whitespace runs become a single space,
//! whitespace next to block-level tags is dropped, simple attribute values
//! lose their quotes, and the result is trimmed.

/// Tags around which surrounding whitespace has no visual effect.
const BLOCK_TAGS: &[&str] = &[
    "br", "div", "h1", "h2", "h3", "h4", "h5", "h6", "li", "ol", "p", "table", "tbody", "td",
    "tfoot", "th", "thead", "tr", "ul",
];

#[derive(Debug, Clone, Copy)]
enum Segment<'a> {
    Tag(&'a str),
    Text(&'a str),
}

impl Segment<'_> {
    fn is_block_tag(&self) -> bool {
        match self {
            Segment::Tag(tag) => BLOCK_TAGS.contains(&tag_name(tag).to_ascii_lowercase().as_str()),
            Segment::Text(_) => false,
        }
    }
}

/// Collapses the whitespace of a markup fragment.
#[must_use]
pub fn collapse_markup(markup: &str) -> String {
    let segments = split_segments(markup);
    let mut out = String::with_capacity(markup.len());

    for (i, segment) in segments.iter().enumerate() {
        match segment {
            Segment::Tag(tag) => out.push_str(&collapse_tag(tag)),
            Segment::Text(text) => {
                let collapsed = collapse_whitespace(text);
                let mut text = collapsed.as_str();
                if i > 0 && segments[i - 1].is_block_tag() {
                    text = text.trim_start();
                }
                if segments.get(i + 1).is_some_and(Segment::is_block_tag) {
                    text = text.trim_end();
                }
                out.push_str(text);
            }
        }
    }

    out.trim().to_string()
}

/// Splits markup into tags (including comments) and the text between them.
fn split_segments(markup: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut rest = markup;

    while !rest.is_empty() {
        if rest.starts_with('<') {
            match tag_end(rest) {
                Some(end) => {
                    segments.push(Segment::Tag(&rest[..end]));
                    rest = &rest[end..];
                }
                None => {
                    segments.push(Segment::Text(rest));
                    break;
                }
            }
        } else {
            let end = rest.find('<').unwrap_or(rest.len());
            segments.push(Segment::Text(&rest[..end]));
            rest = &rest[end..];
        }
    }

    segments
}

/// Returns the byte length of the tag at the start of `rest`, if it is closed.
fn tag_end(rest: &str) -> Option<usize> {
    if rest.starts_with("<!--") {
        return rest.find("-->").map(|i| i + 3);
    }

    let mut quote = None;
    for (i, c) in rest.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '>') => return Some(i + 1),
            (None, _) => {}
        }
    }
    None
}

fn tag_name(tag: &str) -> &str {
    let name = tag.trim_start_matches('<').trim_start_matches('/');
    let end = name
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(name.len());
    &name[..end]
}

fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_whitespace = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push(' ');
            }
            in_whitespace = true;
        } else {
            out.push(c);
            in_whitespace = false;
        }
    }
    out
}

/// Collapses whitespace inside a tag and unquotes simple attribute values.
fn collapse_tag(tag: &str) -> String {
    if tag.starts_with("<!") {
        return tag.to_string();
    }

    let mut out = String::with_capacity(tag.len());
    let mut chars = tag.chars().peekable();
    let mut pending_space = false;
    let mut after_unquoted = false;

    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }

        let needs_space = pending_space
            && c != '='
            && !out.ends_with('=')
            && match c {
                '>' => false,
                '/' if chars.peek() == Some(&'>') => after_unquoted,
                _ => true,
            };
        if needs_space {
            out.push(' ');
        }
        pending_space = false;
        after_unquoted = false;

        if (c == '"' || c == '\'') && out.ends_with('=') {
            let value: String = chars.by_ref().take_while(|&q| q != c).collect();
            if can_unquote(&value) {
                out.push_str(&value);
                after_unquoted = true;
                // `src=x/>` would read the slash as part of the value
                if chars.peek() == Some(&'/') {
                    out.push(' ');
                }
            } else {
                out.push(c);
                out.push_str(&value);
                out.push(c);
            }
            continue;
        }

        out.push(c);
    }

    out
}

fn can_unquote(value: &str) -> bool {
    !value.is_empty()
        && !value
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '=' | '<' | '>' | '`'))
}
