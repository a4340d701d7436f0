use crate::{
    errors::AppResult,
    models::domain::{DataGatheringResult, Stage, TimingMetrics},
    services::{fetch_service::FetchService, search_service::SearchService},
};

/// Runs search, then page fetch, for a topic.
pub struct ContextService {
    search: SearchService,
    fetch: FetchService,
}

impl ContextService {
    pub fn new(search: SearchService, fetch: FetchService) -> Self {
        Self { search, fetch }
    }

    /// `Ok((None, _))` when search finds no URLs or no page yields text; the
    /// timing gathered so far is returned either way. Fails only when the
    /// search ceiling is exceeded.
    pub async fn gather_context(
        &self,
        topic: &str,
    ) -> AppResult<(Option<DataGatheringResult>, TimingMetrics)> {
        let mut timing = TimingMetrics::new();

        let search = self.search.search(topic).await?;
        timing.record(Stage::Search, search.elapsed_ms);
        if search.urls.is_empty() {
            log::warn!("search.no_results topic='{}'", topic);
            return Ok((None, timing));
        }

        let report = self.fetch.fetch_and_extract(&search.urls, topic).await;
        timing.record(Stage::Fetch, report.elapsed_ms);

        let result = DataGatheringResult::new(topic, search.urls, report.text);
        if result.is_none() {
            log::warn!("fetch.no_content topic='{}'", topic);
        }
        Ok((result, timing))
    }
}
