use std::sync::Arc;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    services::{
        fetch_service::FetchService,
        inference_provider::{InferenceProvider, OpenAiInferenceProvider},
        inference_service::{InferenceService, InferenceSettings},
        page_fetcher::{PageFetcher, ReqwestPageFetcher},
        search_provider::{DuckDuckGoSearchProvider, SearchProvider},
        search_service::{SearchService, SearchSettings},
        worker_pool::WorkerPool,
        ContextService, RoundService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub round_service: Arc<RoundService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let search_provider = Arc::new(
            DuckDuckGoSearchProvider::new().map_err(|e| AppError::InternalError(e.to_string()))?,
        );
        let page_fetcher = Arc::new(
            ReqwestPageFetcher::new(config.fetch_timeout())
                .map_err(|e| AppError::InternalError(e.to_string()))?,
        );
        let inference_provider = Arc::new(OpenAiInferenceProvider::new(
            &config.llm_api_base,
            &config.llm_api_key,
        ));

        Ok(Self::from_parts(
            config,
            search_provider,
            page_fetcher,
            inference_provider,
        ))
    }

    /// Wires the pipeline around the given collaborators.
    pub fn from_parts(
        config: Config,
        search_provider: Arc<dyn SearchProvider>,
        page_fetcher: Arc<dyn PageFetcher>,
        inference_provider: Arc<dyn InferenceProvider>,
    ) -> Self {
        // Search and inference get their own workers.
        let search_pool = WorkerPool::new(config.worker_pool_size);
        let inference_pool = WorkerPool::new(config.worker_pool_size);

        let search = SearchService::new(
            search_provider,
            search_pool,
            SearchSettings::from_config(&config),
        );
        let fetch = FetchService::new(page_fetcher, config.fetch_timeout());
        let inference = InferenceService::new(
            inference_provider,
            inference_pool,
            InferenceSettings::from_config(&config),
        );
        let round_service = Arc::new(RoundService::new(
            ContextService::new(search, fetch),
            inference,
        ));

        log::info!(
            "app.configured model='{}' search_limit={} pool_size={}",
            config.llm_model,
            config.search_limit,
            config.worker_pool_size
        );

        Self {
            round_service,
            config: Arc::new(config),
        }
    }
}
