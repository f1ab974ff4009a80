// file: src/reconstruct/assembler.rs
// description: turns decoded hit pages into reconstructed results with metadata
// reference: https://inl.github.io/BlackLab/server/rest-api/corpus/hits/get.html

use crate::error::{CorpusError, Result};
use crate::models::{
    DocInfoLookup, HitTokenSpan, HitsResponse, ParsedPage, RawHit, ReconstructedResult,
    SearchOptions, Side, SnippetPage,
};
use crate::reconstruct::text::reconstruct;

/// Both renderings of one side of a hit.
#[derive(Debug, Default)]
struct SideText {
    filtered: String,
    original: String,
}

pub struct ResultAssembler<'a> {
    lemma: bool,
    include_match: bool,
    include_left: bool,
    include_right: bool,
    search_terms: Option<&'a [String]>,
}

impl<'a> ResultAssembler<'a> {
    pub fn new(options: &'a SearchOptions) -> Self {
        Self {
            lemma: options.lemma,
            include_match: options.include_match,
            include_left: options.include_left,
            include_right: options.include_right,
            search_terms: options.search_terms(),
        }
    }

    pub fn assemble<L: DocInfoLookup>(&self, hit: &RawHit, doc_infos: &L) -> Result<ReconstructedResult> {
        // Excluded sides are never read, so only rendered spans must be well formed.
        for (side, included) in [
            (Side::Left, self.include_left),
            (Side::Match, true),
            (Side::Right, self.include_right),
        ] {
            if included {
                hit.span(side).validate(side)?;
            }
        }

        let left = if self.include_left {
            self.render(&hit.left)
        } else {
            SideText::default()
        };
        let right = if self.include_right {
            self.render(&hit.right)
        } else {
            SideText::default()
        };
        // The match is always rendered: match_word carries it even when it is
        // left out of complete_match.
        let matched = self.render(hit.span(Side::Match));

        let match_word = format!("{}{}{}", left.original, matched.original, right.original);
        let complete_match = if self.include_match {
            format!("{}{}{}", left.filtered, matched.filtered, right.filtered)
        } else {
            format!("{}{}", left.filtered, right.filtered)
        };

        Ok(ReconstructedResult {
            left: left.filtered,
            right: right.filtered,
            match_word,
            complete_match,
            testimony_id: doc_infos.field(&hit.doc_pid, "testimony_id")?,
            shelfmark: doc_infos.field(&hit.doc_pid, "shelfmark")?,
            token_start: hit.start,
            token_end: hit.end,
        })
    }

    fn render(&self, span: &HitTokenSpan) -> SideText {
        SideText {
            filtered: reconstruct(span, self.lemma, self.search_terms, true),
            original: reconstruct(span, false, self.search_terms, true),
        }
    }
}

/// Reconstruct every hit of a page in response order.
pub fn parse_response(response: &HitsResponse, options: &SearchOptions) -> Result<ParsedPage> {
    let hits = response.hits.as_ref().ok_or(CorpusError::MissingField("hits"))?;
    let doc_infos = response
        .doc_infos
        .as_ref()
        .ok_or(CorpusError::MissingField("docInfos"))?;

    let assembler = ResultAssembler::new(options);
    let results = hits
        .iter()
        .map(|hit| assembler.assemble(hit, doc_infos))
        .collect::<Result<Vec<_>>>()?;

    Ok(ParsedPage {
        total: response.total(),
        results,
    })
}

/// Parse the grouped-by-document variant, where each document carries a list
/// of snippets. Metadata is not resolved.
pub fn parse_snippets(response: &HitsResponse, lemma: bool) -> Result<SnippetPage> {
    let docs = response.docs.as_ref().ok_or(CorpusError::MissingField("docs"))?;

    let mut results = Vec::new();
    for doc in docs {
        for snippet in &doc.snippets {
            for (side, span) in [
                (Side::Left, &snippet.left),
                (Side::Match, &snippet.matched),
                (Side::Right, &snippet.right),
            ] {
                span.validate(side)?;
            }

            let left = reconstruct(&snippet.left, lemma, None, true);
            let matched = reconstruct(&snippet.matched, lemma, None, true);
            let right = reconstruct(&snippet.right, lemma, None, true);
            results.push(left + &matched + &right);
        }
    }

    Ok(SnippetPage {
        total: response.total(),
        results,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DocInfos;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn page() -> HitsResponse {
        serde_json::from_value(json!({
            "summary": {"numberOfHitsRetrieved": 1},
            "docInfos": {
                "3": {"testimony_id": "usc_shoah_10", "shelfmark": ["RG-50.030*0010"]}
            },
            "hits": [{
                "docPid": "3",
                "start": 118,
                "end": 119,
                "left": {
                    "word": ["we", "were"],
                    "punct": [" ", " "],
                    "lemma": ["we", "be"],
                    "pos": ["PRP", "VBD"]
                },
                "match": {
                    "word": ["hungry"],
                    "punct": [", "],
                    "lemma": ["hungry"],
                    "pos": ["JJ"]
                },
                "right": {
                    "word": ["always", "hunger"],
                    "punct": [" ", "."],
                    "lemma": ["always", "hunger"],
                    "pos": ["RB", "NN"]
                }
            }]
        }))
        .unwrap()
    }

    fn hit() -> RawHit {
        page().hits.unwrap().remove(0)
    }

    fn infos() -> DocInfos {
        page().doc_infos.unwrap()
    }

    #[test]
    fn test_surface_result() {
        let options = SearchOptions::default();
        let result = ResultAssembler::new(&options).assemble(&hit(), &infos()).unwrap();

        assert_eq!(
            result,
            ReconstructedResult {
                left: "we were ".to_string(),
                right: "always hunger.".to_string(),
                match_word: "we were hungry, always hunger.".to_string(),
                complete_match: "we were hungry, always hunger.".to_string(),
                testimony_id: "usc_shoah_10".to_string(),
                shelfmark: "RG-50.030*0010".to_string(),
                token_start: 118,
                token_end: 119,
            }
        );
    }

    #[test]
    fn test_lemma_result_keeps_surface_match_word() {
        let options = SearchOptions::default().with_lemma(true);
        let result = ResultAssembler::new(&options).assemble(&hit(), &infos()).unwrap();

        assert_eq!(result.left, "be ");
        assert_eq!(result.right, "hunger.");
        assert_eq!(result.complete_match, "be hunger.");
        assert_eq!(result.match_word, "we were hungry, always hunger.");
    }

    #[test]
    fn test_excluded_match_still_in_match_word() {
        let options = SearchOptions::default().with_include_match(false);
        let result = ResultAssembler::new(&options).assemble(&hit(), &infos()).unwrap();

        assert_eq!(result.complete_match, "we were always hunger.");
        assert_eq!(result.match_word, "we were hungry, always hunger.");
    }

    #[test]
    fn test_match_only() {
        let options = SearchOptions::default().with_sides(false, false);
        let result = ResultAssembler::new(&options).assemble(&hit(), &infos()).unwrap();

        assert_eq!(result.left, "");
        assert_eq!(result.right, "");
        assert_eq!(result.complete_match, "hungry, ");
        assert_eq!(result.match_word, "hungry, ");
    }

    #[test]
    fn test_search_terms_apply_to_every_side() {
        let options = SearchOptions::default().with_search_terms(vec!["hunger".to_string()]);
        let result = ResultAssembler::new(&options).assemble(&hit(), &infos()).unwrap();

        assert_eq!(result.right, "always .");
        assert_eq!(result.match_word, "we were hungry, always .");

        let options = SearchOptions::default().with_search_terms(vec!["hungry".to_string()]);
        let result = ResultAssembler::new(&options).assemble(&hit(), &infos()).unwrap();

        assert_eq!(result.complete_match, "we were , always hunger.");
        assert_eq!(result.match_word, "we were , always hunger.");
    }

    #[test]
    fn test_unknown_document_fails() {
        let mut hit = hit();
        hit.doc_pid = "99".to_string();
        let options = SearchOptions::default();

        let err = ResultAssembler::new(&options).assemble(&hit, &infos()).unwrap_err();
        assert!(matches!(err, CorpusError::MissingDocInfo { .. }));
    }

    #[test]
    fn test_malformed_span_fails() {
        let mut hit = hit();
        hit.right.pos.pop();
        let options = SearchOptions::default();

        let err = ResultAssembler::new(&options).assemble(&hit, &infos()).unwrap_err();
        assert!(matches!(err, CorpusError::MalformedSpan { side: "right", .. }));

        let mut hit = self::hit();
        hit.matched.punct.clear();
        let options = SearchOptions::default().with_sides(false, false);

        let err = ResultAssembler::new(&options).assemble(&hit, &infos()).unwrap_err();
        assert!(matches!(err, CorpusError::MalformedSpan { side: "match", .. }));
    }

    #[test]
    fn test_malformed_excluded_side_is_ignored() {
        let mut hit = hit();
        hit.right.pos.pop();
        hit.left.lemma.clear();
        let options = SearchOptions::default().with_sides(false, false);

        let result = ResultAssembler::new(&options).assemble(&hit, &infos()).unwrap();
        assert_eq!(result.complete_match, "hungry, ");
        assert_eq!(result.right, "");
    }

    #[test]
    fn test_parse_response() {
        let parsed = parse_response(&page(), &SearchOptions::default()).unwrap();
        assert_eq!(parsed.total, 1);
        assert_eq!(parsed.results.len(), 1);
        assert_eq!(parsed.results[0].testimony_id, "usc_shoah_10");
    }

    #[test]
    fn test_parse_response_requires_hits() {
        let mut response = page();
        response.hits = None;
        let err = parse_response(&response, &SearchOptions::default()).unwrap_err();
        assert!(matches!(err, CorpusError::MissingField("hits")));

        let mut response = page();
        response.doc_infos = None;
        let err = parse_response(&response, &SearchOptions::default()).unwrap_err();
        assert!(matches!(err, CorpusError::MissingField("docInfos")));
    }

    #[test]
    fn test_parse_snippets() {
        let response: HitsResponse = serde_json::from_value(json!({
            "summary": {"numberOfHitsRetrieved": 2},
            "docs": [{
                "docPid": "3",
                "snippets": [
                    {
                        "left": {"word": ["the"], "punct": [" "], "lemma": ["the"], "pos": ["DT"]},
                        "match": {"word": ["trains"], "punct": [" "], "lemma": ["train"], "pos": ["NNS"]},
                        "right": {"word": ["left"], "punct": [""], "lemma": ["leave"], "pos": ["VBD"]}
                    },
                    {
                        "left": {"word": [], "punct": [], "lemma": [], "pos": []},
                        "match": {"word": ["train"], "punct": ["."], "lemma": ["train"], "pos": ["NN"]},
                        "right": {"word": [], "punct": [], "lemma": [], "pos": []}
                    }
                ]
            }]
        }))
        .unwrap();

        let surface = parse_snippets(&response, false).unwrap();
        assert_eq!(surface.total, 2);
        assert_eq!(surface.results, vec!["the trains left", "train."]);

        let lemmas = parse_snippets(&response, true).unwrap();
        assert_eq!(lemmas.results, vec!["train leave", "train."]);

        assert!(matches!(
            parse_snippets(&page(), false),
            Err(CorpusError::MissingField("docs"))
        ));
    }
}
