//! Heuristics that turn prose catalog fields into scannable fragments.
//!
//! Like the script classifier, everything here is specific to the Swedish
//! content and deliberately narrow: `bulletize` and `split_research_source`
//! are the only entry points.

use std::sync::LazyLock;

use regex::Regex;

/// Minimum trimmed length for a sentence to stand as its own bullet.
const MIN_SENTENCE_CHARS: usize = 10;
/// Minimum trimmed length for clause pieces produced by the connective rule.
const MIN_CLAUSE_CHARS: usize = 15;

static CONNECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(detta|det|vilket|som|därför|men|och|eller)\s+").expect("valid pattern")
});
static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+|www\.\S+").expect("valid pattern"));

/// Splits a rationale paragraph into bullet items for scannable display.
///
/// Rules are tried in order until one yields at least two items: sentence
/// split, colon split, split before a connective word. Every word of the
/// original is preserved; the only additions are terminal periods on pieces
/// that lack one. If no rule applies the trimmed paragraph is returned as a
/// single item.
#[must_use]
pub fn bulletize(paragraph: &str) -> Vec<String> {
    let sentences = split_sentences(paragraph);
    if sentences.len() >= 2 {
        return sentences;
    }
    if let Some(items) = split_at_colon(paragraph) {
        return items;
    }
    if let Some(items) = split_at_connective(paragraph) {
        return items;
    }
    vec![paragraph.trim().to_string()]
}

/// Whether the bulleted form should be skipped in favor of the plain
/// paragraph (avoids single-bullet lists for short texts).
#[must_use]
pub fn prefers_paragraph(paragraph: &str, items: &[String]) -> bool {
    items.len() <= 2 && paragraph.chars().count() < 200
}

/// Separates an embedded URL from a research source reference. Returns the
/// reference text without the URL (or the original text if nothing remains)
/// and the first URL, if any.
#[must_use]
pub fn split_research_source(source: &str) -> (String, Option<String>) {
    let url = URL.find(source).map(|m| m.as_str().to_string());
    let text = URL.replace_all(source, "").trim().to_string();
    if text.is_empty() {
        (source.trim().to_string(), url)
    } else {
        (text, url)
    }
}

/// Splits on sentence-ending punctuation, retaining the punctuation with its
/// sentence. Fragments at or below the length threshold stay attached to the
/// surrounding sentence instead of being dropped, so no content is lost.
fn split_sentences(paragraph: &str) -> Vec<String> {
    let mut items: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_terminator = false;
    for c in paragraph.chars() {
        let is_terminator = matches!(c, '.' | '!' | '?');
        if in_terminator
            && !is_terminator
            && current.trim().chars().count() > MIN_SENTENCE_CHARS
        {
            items.push(current.trim().to_string());
            current.clear();
        }
        current.push(c);
        in_terminator = is_terminator;
    }
    let trailing = current.trim();
    if !trailing.is_empty() {
        if trailing.chars().count() > MIN_SENTENCE_CHARS || items.is_empty() {
            items.push(trailing.to_string());
        } else if let Some(last) = items.last_mut() {
            last.push_str(current.trim_end());
        }
    }
    items
}

/// Treats the clause before the first colon as item one and the
/// period-delimited clauses after it as further items.
fn split_at_colon(paragraph: &str) -> Option<Vec<String>> {
    let (head, tail) = paragraph.split_once(':')?;
    let mut items = vec![format!("{}:", head.trim())];
    items.extend(split_sentences(tail).into_iter().map(ensure_terminated));
    (items.len() >= 2).then_some(items)
}

/// Splits immediately before connective words, accepting the result only if
/// every piece is long enough to stand on its own.
fn split_at_connective(paragraph: &str) -> Option<Vec<String>> {
    let trimmed = paragraph.trim();
    let starts = CONNECTIVE
        .find_iter(trimmed)
        .map(|m| m.start())
        .filter(|start| *start > 0)
        .collect::<Vec<_>>();
    if starts.is_empty() {
        return None;
    }
    let mut pieces = Vec::new();
    let mut begin = 0;
    for start in starts {
        pieces.push(trimmed[begin..start].trim());
        begin = start;
    }
    pieces.push(trimmed[begin..].trim());
    if pieces.len() < 2
        || pieces
            .iter()
            .any(|piece| piece.chars().count() <= MIN_CLAUSE_CHARS)
    {
        return None;
    }
    Some(
        pieces
            .into_iter()
            .map(|piece| ensure_terminated(piece.to_string()))
            .collect(),
    )
}

fn ensure_terminated(mut item: String) -> String {
    if !item.ends_with(['.', '!', '?']) {
        item.push('.');
    }
    item
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_bulletize_sentences() {
        let paragraph = "Skapar den avgörande pausen mellan trigger och reaktion. \
                         De flesta konflikter eskalerar på grund av reaktiva svar snarare än själva problemen. \
                         Detta utvecklar emotionell reglering.";
        assert_eq!(
            bulletize(paragraph),
            vec![
                "Skapar den avgörande pausen mellan trigger och reaktion.",
                "De flesta konflikter eskalerar på grund av reaktiva svar snarare än själva problemen.",
                "Detta utvecklar emotionell reglering.",
            ]
        );
    }

    #[test]
    fn test_bulletize_glues_short_fragments() {
        let paragraph = "Nej. Kort svar räcker inte alltid i grupper som är oroliga.";
        assert_eq!(
            bulletize(paragraph),
            vec!["Nej. Kort svar räcker inte alltid i grupper som är oroliga."]
        );
    }

    #[test]
    fn test_bulletize_colon() {
        let paragraph =
            "Tre delar att minnas: pausen före svaret ger rummet tid, andningen bär resten";
        assert_eq!(
            bulletize(paragraph),
            vec![
                "Tre delar att minnas:",
                "pausen före svaret ger rummet tid, andningen bär resten.",
            ]
        );
    }

    #[test]
    fn test_bulletize_connective() {
        let paragraph =
            "Pausen skapar gemensamt utrymme för eftertanke vilket stärker gruppens lugn";
        assert_eq!(
            bulletize(paragraph),
            vec![
                "Pausen skapar gemensamt utrymme för eftertanke.",
                "vilket stärker gruppens lugn.",
            ]
        );
    }

    #[test]
    fn test_bulletize_single_item_fallback() {
        let paragraph = "En enda mening utan vare sig kolon eller bindeord här";
        assert_eq!(bulletize(paragraph), vec![paragraph]);
    }

    #[rstest]
    #[case("Kort text. Två delar.", 2, true)]
    #[case("Kort text. Två delar.", 3, false)]
    fn test_prefers_paragraph(
        #[case] paragraph: &str,
        #[case] item_count: usize,
        #[case] expected: bool,
    ) {
        let items = vec![String::new(); item_count];
        assert_eq!(prefers_paragraph(paragraph, &items), expected);
    }

    #[test]
    fn test_prefers_paragraph_long_text() {
        let paragraph = "x".repeat(200);
        assert!(!prefers_paragraph(&paragraph, &[String::new()]));
    }

    #[test]
    fn test_bulletize_preserves_words_of_catalog() {
        for exercise in &crate::catalog::EXERCISES {
            let items = bulletize(exercise.why_use);
            assert!(!items.is_empty());
            let original = words(exercise.why_use);
            let bulleted = items.iter().flat_map(|item| words(item)).collect::<Vec<_>>();
            assert_eq!(original, bulleted, "{}", exercise.slug);
        }
    }

    fn words(text: &str) -> Vec<String> {
        text.split_whitespace()
            .map(|word| word.trim_matches(['.', '!', '?', ':']).to_string())
            .filter(|word| !word.is_empty())
            .collect()
    }

    #[rstest]
    #[case(
        "Bonde et al. (2023) Frontiers in Psychology https://www.frontiersin.org/journals/psychology/articles/10.3389/fpsyg.2023.1112907/full",
        "Bonde et al. (2023) Frontiers in Psychology",
        Some("https://www.frontiersin.org/journals/psychology/articles/10.3389/fpsyg.2023.1112907/full")
    )]
    #[case("Lindsay & Creswell (2019) Current Opinion in Psychology, 28, 120-125.",
        "Lindsay & Creswell (2019) Current Opinion in Psychology, 28, 120-125.",
        None
    )]
    #[case("www.example.org/study", "www.example.org/study", Some("www.example.org/study"))]
    fn test_split_research_source(
        #[case] source: &str,
        #[case] text: &str,
        #[case] url: Option<&str>,
    ) {
        assert_eq!(
            split_research_source(source),
            (text.to_string(), url.map(str::to_string))
        );
    }
}
