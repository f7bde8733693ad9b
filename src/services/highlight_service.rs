use regex::{NoExpand, RegexBuilder};

pub const HIGHLIGHT_OPEN: &str = "<em>";
pub const HIGHLIGHT_CLOSE: &str = "</em>";

/// Wrap case-insensitive whole-word matches of each keyword in `<em>` tags.
///
/// Keywords are applied one after another, each rewriting the output of the
/// previous one, so markup inserted for an earlier keyword can itself be
/// matched by a later one. The inserted text uses the keyword's own casing.
/// Blank keywords are skipped; absent text is treated as empty.
pub fn highlight(text: Option<&str>, keywords: &[String]) -> String {
    let text = text.unwrap_or_default().to_string();
    keywords
        .iter()
        .filter(|k| !k.trim().is_empty())
        .fold(text, |acc, keyword| highlight_keyword(&acc, keyword))
}

fn highlight_keyword(text: &str, keyword: &str) -> String {
    let pattern = format!(r"\b{}\b", regex::escape(keyword));
    let re = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(re) => re,
        Err(e) => {
            tracing::debug!(%e, keyword, "Skipping keyword that does not compile");
            return text.to_string();
        }
    };
    let replacement = format!("{}{}{}", HIGHLIGHT_OPEN, keyword, HIGHLIGHT_CLOSE);
    re.replace_all(text, NoExpand(&replacement)).into_owned()
}
