// file: src/reconstruct/text.rs
// description: rebuilds surface or lemma text from positional token arrays
// reference: https://inl.github.io/BlackLab/guide/index-your-data/annotations.html

use crate::models::HitTokenSpan;

/// Verbs and nouns, by the first letter of the part-of-speech tag.
pub fn is_content_tag(tag: &str) -> bool {
    tag.starts_with('V') || tag.starts_with('N')
}

/// Rebuild the text of one span.
///
/// Surface mode joins `word[i] + punct[i]`. Lemma mode joins
/// `lemma[i] + punct[i]`, and with `pos_filter` keeps only verb and noun
/// positions; a dropped position loses its punctuation too. Search terms are
/// then removed one after another, so an earlier removal can create or break
/// an occurrence of a later term.
pub fn reconstruct(
    span: &HitTokenSpan,
    lemma: bool,
    search_terms: Option<&[String]>,
    pos_filter: bool,
) -> String {
    let mut text = String::new();

    if !lemma {
        for (word, punct) in span.word.iter().zip(&span.punct) {
            text.push_str(word);
            text.push_str(punct);
        }
    } else {
        let tokens = span.lemma.iter().zip(&span.punct).zip(&span.pos);
        for ((lemma, punct), tag) in tokens {
            if pos_filter && !is_content_tag(tag) {
                continue;
            }
            text.push_str(lemma);
            text.push_str(punct);
        }
    }

    if let Some(terms) = search_terms {
        for term in terms {
            text = text.replace(term.as_str(), "");
        }
    }

    text
}
