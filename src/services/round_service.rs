use rand::seq::SliceRandom;

use crate::{
    constants::topics::{TOPIC_POOL, VIBE_POOL},
    errors::AppResult,
    models::domain::{
        timing::round_ms, DataGatheringResult, RoundOutcome, Stage, TimingMetrics,
    },
    services::{
        context_service::ContextService,
        inference_service::InferenceService,
        prompt_builder::{build_round_prompt, context_text},
    },
};

const DEFAULT_TOPIC: &str = "барные факты";
const DEFAULT_VIBE: &str = "дружелюбно и с юмором";

/// The caller's topic when it is not blank, otherwise one from the pool.
pub fn pick_topic(requested: Option<&str>) -> String {
    match requested.map(str::trim).filter(|t| !t.is_empty()) {
        Some(topic) => topic.to_string(),
        None => pick_from(TOPIC_POOL, DEFAULT_TOPIC),
    }
}

pub fn pick_vibe() -> String {
    pick_from(VIBE_POOL, DEFAULT_VIBE)
}

fn pick_from(pool: &[&str], default: &str) -> String {
    pool.choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(default)
        .to_string()
}

pub struct RoundService {
    context: ContextService,
    inference: InferenceService,
}

impl RoundService {
    pub fn new(context: ContextService, inference: InferenceService) -> Self {
        Self { context, inference }
    }

    pub async fn gather_context(
        &self,
        topic: &str,
    ) -> AppResult<(Option<DataGatheringResult>, TimingMetrics)> {
        self.context.gather_context(topic).await
    }

    /// Search and fetch, then build the prompt from real or fallback context
    /// and ask the model for the round. Only a search timeout is an error.
    pub async fn generate_round(&self, topic: Option<&str>) -> AppResult<RoundOutcome> {
        let topic = pick_topic(topic);
        let vibe = pick_vibe();
        log::info!("round.started topic='{}' vibe='{}'", topic, vibe);

        let (gathered, mut timing) = self.context.gather_context(&topic).await?;
        let used_fallback = gathered.is_none();
        let context = context_text(&topic, gathered.as_ref());
        let prompt = build_round_prompt(&topic, &vibe, &context);

        let (items, llm_ms) = self.inference.invoke(&prompt).await;
        timing.record(Stage::Inference, llm_ms);

        log::info!(
            "round.completed topic='{}' items={} fallback={} {} total_ms={}",
            topic,
            items.len(),
            used_fallback,
            timing,
            round_ms(timing.total_ms())
        );

        Ok(RoundOutcome {
            topic,
            vibe,
            items,
            timing,
            used_fallback,
        })
    }
}
