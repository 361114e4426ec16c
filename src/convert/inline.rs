//! Text run formatting.

use crate::model::TextRun;

/// Render one text run as Markdown.
///
/// Literal `*` and `_` are escaped before any emphasis markers are added, so
/// the markers themselves are never escaped. Bold is suppressed when
/// `in_heading` is set. A link wraps the fully styled text as its label.
pub fn format_text_run(run: &TextRun, in_heading: bool) -> String {
    let text = escape_emphasis(&clean_text(&run.content));
    if text.is_empty() {
        return text;
    }

    let style = &run.text_style;
    let mut result = text;

    // Markdown has no underline; map it onto emphasis.
    if style.underline {
        result = format!("_{}_", result);
    }
    if style.italic {
        result = format!("_{}_", result);
    }
    if style.bold && !in_heading {
        result = format!("**{}**", result);
    }
    if style.strikethrough {
        result = format!("~~{}~~", result);
    }
    if let Some(url) = style.link_url() {
        result = format!("[{}]({})", result, url);
    }

    result
}

/// Strip embedded newlines and surrounding whitespace.
pub fn clean_text(content: &str) -> String {
    content.replace('\n', "").trim().to_string()
}

/// Backslash-escape literal emphasis characters.
fn escape_emphasis(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '*' | '_') {
            result.push('\\');
        }
        result.push(c);
    }
    result
}

/// Join rendered pieces with single spaces and undo the " ." / " ,"
/// artifacts that appear when punctuation sits in its own styled run.
pub(crate) fn join_pieces<I, S>(pieces: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = pieces
        .into_iter()
        .filter(|p| !p.as_ref().is_empty())
        .fold(String::new(), |mut acc, piece| {
            if !acc.is_empty() {
                acc.push(' ');
            }
            acc.push_str(piece.as_ref());
            acc
        });
    joined.replace(" .", ".").replace(" ,", ",")
}
