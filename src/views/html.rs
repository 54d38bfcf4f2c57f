use once_cell::sync::Lazy;
use regex::Regex;

static TAGS: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

static BLOCK_BREAKS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<br\s*/?>|</(p|div|li|h[1-6]|tr)\s*>").expect("block pattern is valid")
});

static BLANK_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n+").expect("blank pattern is valid"));

/// Strips executable content from editor HTML while leaving formatting
/// markup alone.
///
/// Parsing, entity decoding and URL scheme filtering are done by `ammonia`,
/// so script elements, `on*` attributes and `javascript:` URLs are removed
/// however the markup spells them.
pub fn sanitize_html(html: &str) -> String {
    let mut builder = ammonia::Builder::default();
    builder.link_rel(None);
    builder.clean(html).to_string()
}

/// Plain text rendition of an HTML fragment for terminal output.
pub fn html_to_text(html: &str) -> String {
    let html = sanitize_html(html);
    let text = BLOCK_BREAKS.replace_all(&html, "\n");
    let text = TAGS.replace_all(&text, "");
    let text = decode_entities(&text);
    BLANK_RUNS.replace_all(text.trim(), "\n").into_owned()
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
