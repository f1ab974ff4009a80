// file: src/stream/corpus.rs
// description: lazy token lists over the results of one or many scoped searches
// reference: https://docs.rs/futures/latest/futures/stream/

use crate::client::{CorpusSearcher, HitsTransport};
use crate::error::Result;
use crate::models::{ReconstructedResult, SearchOptions};
use crate::stream::phrases::PhraseSegmenter;
use futures::stream::{self, Stream, TryStreamExt};
use std::vec;

struct Cursor {
    scopes: vec::IntoIter<Option<String>>,
    ready: vec::IntoIter<Vec<String>>,
    failed: bool,
}

/// Yields the whitespace-split `complete_match` of every hit, searching each
/// document id in turn, or the whole corpus when no ids are given.
///
/// Every call to [`stream`](Self::stream) starts over and repeats all
/// requests.
pub struct CorpusResultStream<T> {
    searcher: CorpusSearcher<T>,
    pattern: String,
    options: SearchOptions,
    document_ids: Option<Vec<String>>,
    segmenter: Option<Box<dyn PhraseSegmenter + Send + Sync>>,
}

impl<T: HitsTransport> CorpusResultStream<T> {
    pub fn new(searcher: CorpusSearcher<T>, pattern: impl Into<String>) -> Self {
        Self {
            searcher,
            pattern: pattern.into(),
            options: SearchOptions::default(),
            document_ids: None,
            segmenter: None,
        }
    }

    pub fn with_window(mut self, window: usize) -> Self {
        self.options.window = window;
        self
    }

    pub fn with_lemma(mut self, lemma: bool) -> Self {
        self.options.lemma = lemma;
        self
    }

    pub fn with_document_ids(mut self, ids: Vec<String>) -> Self {
        self.document_ids = Some(ids);
        self
    }

    pub fn with_segmenter(mut self, segmenter: impl PhraseSegmenter + Send + Sync + 'static) -> Self {
        self.segmenter = Some(Box::new(segmenter));
        self
    }

    pub fn searcher(&self) -> &CorpusSearcher<T> {
        &self.searcher
    }

    /// Searches run only as the stream is polled, and the stream ends after
    /// the first error.
    pub fn stream(&self) -> impl Stream<Item = Result<Vec<String>>> + '_ {
        let scopes: Vec<Option<String>> = match &self.document_ids {
            Some(ids) => ids.iter().cloned().map(Some).collect(),
            None => vec![None],
        };
        let cursor = Cursor {
            scopes: scopes.into_iter(),
            ready: Vec::new().into_iter(),
            failed: false,
        };

        stream::unfold(cursor, move |mut cursor| async move {
            loop {
                if let Some(tokens) = cursor.ready.next() {
                    return Some((Ok(tokens), cursor));
                }
                if cursor.failed {
                    return None;
                }

                let mut options = self.options.clone();
                options.document_id = cursor.scopes.next()?;

                match self.searcher.search(&self.pattern, &options).await {
                    Ok(results) => {
                        let tokens: Vec<Vec<String>> =
                            results.iter().map(|r| self.tokens(r)).collect();
                        cursor.ready = tokens.into_iter();
                    }
                    Err(e) => {
                        cursor.failed = true;
                        return Some((Err(e), cursor));
                    }
                }
            }
        })
    }

    pub async fn collect(&self) -> Result<Vec<Vec<String>>> {
        self.stream().try_collect().await
    }

    fn tokens(&self, result: &ReconstructedResult) -> Vec<String> {
        let tokens: Vec<String> = result
            .complete_match
            .split_whitespace()
            .map(String::from)
            .collect();

        match &self.segmenter {
            Some(segmenter) => segmenter.segment(tokens),
            None => tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::transport::mock::MockTransport;
    use crate::config::PaginationConfig;
    use crate::error::CorpusError;
    use crate::stream::phrases::KnownPhrases;
    use futures::StreamExt;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    fn count_page(total: usize) -> Option<Value> {
        Some(json!({"summary": {"numberOfHitsRetrieved": total}}))
    }

    fn hit_page(words: &[&str]) -> Option<Value> {
        let n = words.len();
        Some(json!({
            "summary": {"numberOfHitsRetrieved": 1},
            "docInfos": {"1": {"testimony_id": "t", "shelfmark": "s"}},
            "hits": [{
                "docPid": "1",
                "start": 0,
                "end": n,
                "left": {"word": [], "punct": [], "lemma": [], "pos": []},
                "match": {
                    "word": words,
                    "punct": vec![" "; n],
                    "lemma": words,
                    "pos": vec!["NN"; n]
                },
                "right": {"word": [], "punct": [], "lemma": [], "pos": []}
            }]
        }))
    }

    fn results(responses: Vec<Option<Value>>) -> CorpusResultStream<MockTransport> {
        let searcher = CorpusSearcher::new(MockTransport::new(responses), PaginationConfig::default());
        CorpusResultStream::new(searcher, "[lemma=\"march\"]")
    }

    #[tokio::test]
    async fn test_unscoped_search() {
        let corpus = results(vec![count_page(1), hit_page(&["death", "march"])]);

        let tokens = corpus.collect().await.unwrap();

        assert_eq!(tokens, vec![vec!["death", "march"]]);
        let requests = corpus.searcher().transport().requests();
        assert!(requests.iter().all(|r| r.get("filter").is_none()));
    }

    #[tokio::test]
    async fn test_documents_are_searched_in_order() {
        let corpus = results(vec![
            count_page(21),
            hit_page(&["first", "one"]),
            hit_page(&["first", "two"]),
            count_page(1),
            hit_page(&["second", "one"]),
        ])
        .with_document_ids(vec!["A".to_string(), "B".to_string()]);

        let tokens = corpus.collect().await.unwrap();

        assert_eq!(
            tokens,
            vec![
                vec!["first", "one"],
                vec!["first", "two"],
                vec!["second", "one"],
            ]
        );
        let filters: Vec<Option<String>> = corpus
            .searcher()
            .transport()
            .requests()
            .iter()
            .map(|r| r.get("filter").map(String::from))
            .collect();
        assert_eq!(filters[0].as_deref(), Some("testimony_id%3A%22A%22"));
        assert_eq!(filters[3].as_deref(), Some("testimony_id%3A%22B%22"));
    }

    #[tokio::test]
    async fn test_segmenter_is_applied() {
        let corpus = results(vec![count_page(1), hit_page(&["the", "death", "march"])])
            .with_segmenter(KnownPhrases::new().with_phrase("death", "march"));

        let tokens = corpus.collect().await.unwrap();
        assert_eq!(tokens, vec![vec!["the", "death_march"]]);
    }

    #[tokio::test]
    async fn test_stream_restarts_from_scratch() {
        let corpus = results(vec![
            count_page(1),
            hit_page(&["march"]),
            count_page(1),
            hit_page(&["march"]),
        ]);

        assert_eq!(corpus.collect().await.unwrap(), corpus.collect().await.unwrap());
        assert_eq!(corpus.searcher().transport().requests().len(), 4);
    }

    #[tokio::test]
    async fn test_error_ends_stream() {
        let corpus = results(vec![None, count_page(1), hit_page(&["never"])])
            .with_document_ids(vec!["A".to_string(), "B".to_string()]);

        let items: Vec<_> = corpus.stream().collect().await;

        assert_eq!(items.len(), 1);
        assert!(matches!(items[0], Err(CorpusError::HttpStatus { status: 500, .. })));
        assert_eq!(corpus.searcher().transport().requests().len(), 1);
    }
}
