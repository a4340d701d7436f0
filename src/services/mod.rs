pub mod context_service;
pub mod extraction;
pub mod fetch_service;
pub mod inference_provider;
pub mod inference_service;
pub mod page_fetcher;
pub mod prompt_builder;
pub mod relevance;
pub mod round_service;
pub mod search_provider;
pub mod search_service;
pub mod worker_pool;

pub use context_service::ContextService;
pub use fetch_service::FetchService;
pub use inference_service::InferenceService;
pub use round_service::RoundService;
pub use search_service::SearchService;
