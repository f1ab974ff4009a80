// file: src/client/search.rs
// description: counting request plus sequential page fetches for one search
// reference: https://inl.github.io/BlackLab/server/rest-api/corpus/hits/get.html

use crate::client::request::HitsRequest;
use crate::client::transport::{HitsTransport, HttpTransport};
use crate::config::{Config, PaginationConfig};
use crate::error::Result;
use crate::models::{ReconstructedResult, SearchOptions};
use crate::reconstruct::parse_response;
use tracing::{debug, info};

pub struct CorpusSearcher<T> {
    transport: T,
    pagination: PaginationConfig,
}

impl CorpusSearcher<HttpTransport> {
    pub fn from_config(config: &Config) -> Result<Self> {
        let transport = HttpTransport::new(&config.server)?;
        Ok(Self::new(transport, config.pagination))
    }
}

impl<T: HitsTransport> CorpusSearcher<T> {
    pub fn new(transport: T, pagination: PaginationConfig) -> Self {
        Self {
            transport,
            pagination,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Offsets of the page requests issued for `total` hits.
    pub fn page_offsets(&self, total: usize) -> impl Iterator<Item = usize> {
        (0..total).step_by(self.pagination.stride.max(1))
    }

    /// Number of hits the server reports, without fetching any of them.
    pub async fn count(&self, query: &str, options: &SearchOptions) -> Result<usize> {
        let request = HitsRequest::for_search(query, options).counting();
        let total = self.transport.fetch(&request).await?.total();
        debug!("Query {:?} has {} hits", query, total);
        Ok(total)
    }

    /// Run a search and reconstruct every returned hit, in server order.
    ///
    /// The first failing request aborts the whole search.
    pub async fn search(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<Vec<ReconstructedResult>> {
        let base = HitsRequest::for_search(query, options);

        let total = self.transport.fetch(&base.counting()).await?.total();
        info!(
            "Search {:?} matched {} hits{}",
            query,
            total,
            options
                .document_id
                .as_deref()
                .map(|id| format!(" in {}", id))
                .unwrap_or_default()
        );

        let mut results = Vec::new();
        for first in self.page_offsets(total) {
            let request = base.page(first, self.pagination.page_limit);
            let response = self.transport.fetch(&request).await?;
            let page = parse_response(&response, options)?;
            debug!("Page at {} returned {} hits", first, page.results.len());
            results.extend(page.results);
        }

        Ok(results)
    }
}
