use futures::future::join_all;
use tokio::sync::Semaphore;
use tracing::{debug, warn};

use crate::domain::ingredient::{
    entities::{AnalyzedEntity, IngredientCandidate, RelevanceVerdict},
    ports::{EntityAnalyzer, RelevanceFilter},
    value_objects::is_known_ingredient,
};

const FOOD_MARKERS: [&str; 2] = ["food", "ingredient"];

/// Accepts a candidate iff its case-folded name is in the static vocabulary.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowListFilter;

impl AllowListFilter {
    pub fn verdict(&self, candidate: IngredientCandidate) -> RelevanceVerdict {
        if is_known_ingredient(&candidate.name) {
            RelevanceVerdict::accepted(candidate, None)
        } else {
            RelevanceVerdict::rejected(candidate)
        }
    }
}

impl RelevanceFilter for AllowListFilter {
    async fn classify(&self, candidates: Vec<IngredientCandidate>) -> Vec<RelevanceVerdict> {
        candidates
            .into_iter()
            .map(|candidate| self.verdict(candidate))
            .collect()
    }
}

/// Sends every candidate to an entity analyzer and accepts it when one of
/// the returned entities is food-like and salient enough.
///
/// Lookups run concurrently, at most `concurrency` at a time. A failed
/// lookup rejects only its own candidate.
#[derive(Debug, Clone)]
pub struct SalienceFilter<A> {
    analyzer: A,
    salience_threshold: f32,
    concurrency: usize,
}

impl<A> SalienceFilter<A>
where
    A: EntityAnalyzer,
{
    pub fn new(analyzer: A, salience_threshold: f32, concurrency: usize) -> Self {
        Self {
            analyzer,
            salience_threshold,
            concurrency: concurrency.max(1),
        }
    }

    fn is_food_entity(&self, entity: &AnalyzedEntity) -> bool {
        let folded = entity.name.to_lowercase();
        let food_like = is_known_ingredient(&folded)
            || FOOD_MARKERS.iter().any(|marker| folded.contains(marker));

        food_like && entity.salience > self.salience_threshold
    }

    pub fn verdict(
        &self,
        candidate: IngredientCandidate,
        entities: &[AnalyzedEntity],
    ) -> RelevanceVerdict {
        let best = entities
            .iter()
            .filter(|entity| self.is_food_entity(entity))
            .map(|entity| entity.salience)
            .fold(None, |best: Option<f32>, salience| {
                Some(best.map_or(salience, |b| b.max(salience)))
            });

        match best {
            Some(salience) => RelevanceVerdict::accepted(candidate, Some(salience)),
            None => RelevanceVerdict::rejected(candidate),
        }
    }

    async fn evaluate(&self, candidate: IngredientCandidate, permits: &Semaphore) -> RelevanceVerdict {
        // The semaphore is local to one classify call and never closed.
        let _permit = permits.acquire().await.ok();

        match self.analyzer.analyze_entities(candidate.name.clone()).await {
            Ok(entities) => {
                debug!(label = %candidate.name, entities = entities.len(), "Analyzed label");
                self.verdict(candidate, &entities)
            }
            Err(e) => {
                warn!(
                    label = %candidate.name,
                    error = %e,
                    "Entity analysis failed, label treated as not an ingredient"
                );
                RelevanceVerdict::rejected(candidate)
            }
        }
    }
}

impl<A> RelevanceFilter for SalienceFilter<A>
where
    A: EntityAnalyzer,
{
    async fn classify(&self, candidates: Vec<IngredientCandidate>) -> Vec<RelevanceVerdict> {
        let permits = Semaphore::new(self.concurrency);

        join_all(
            candidates
                .into_iter()
                .map(|candidate| self.evaluate(candidate, &permits)),
        )
        .await
    }
}

/// The relevance strategy selected at startup.
#[derive(Debug, Clone)]
pub enum IngredientFilter<A> {
    AllowList(AllowListFilter),
    Salience(SalienceFilter<A>),
}

impl<A> RelevanceFilter for IngredientFilter<A>
where
    A: EntityAnalyzer,
{
    async fn classify(&self, candidates: Vec<IngredientCandidate>) -> Vec<RelevanceVerdict> {
        match self {
            IngredientFilter::AllowList(filter) => filter.classify(candidates).await,
            IngredientFilter::Salience(filter) => filter.classify(candidates).await,
        }
    }
}
