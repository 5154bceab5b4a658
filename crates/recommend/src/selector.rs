use std::collections::HashSet;

use rand::Rng;
use whattoeat_recipe::{Catalog, Recipe};

use crate::outcome::{DEFAULT_SEPARATOR, Recommendation, Refusal};
use crate::sampler;

/// Parties of this size or larger must get a soup among their dishes.
pub const SOUP_QUOTA_PARTY_SIZE: i64 = 3;

/// What the caller has on hand and how many people will eat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub ingredients: HashSet<String>,
    /// Values below 1 are accepted here and refused by the selector.
    pub people: i64,
}

impl Request {
    /// Build a request from an ingredient sequence; duplicates collapse.
    pub fn new<I, S>(ingredients: I, people: i64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ingredients: ingredients.into_iter().map(Into::into).collect(),
            people,
        }
    }
}

/// Picks dishes from a catalog for a [`Request`].
///
/// The selector holds no state between calls. Randomness comes only from
/// the `rng` passed to [`Selector::select`], so a seeded generator gives a
/// reproducible answer.
#[derive(Debug, Clone)]
pub struct Selector<'a> {
    catalog: &'a Catalog,
    separator: String,
}

impl<'a> Selector<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            separator: DEFAULT_SEPARATOR.to_owned(),
        }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Recipes whose ingredients are all available, in catalog order.
    pub fn matched(&self, request: &Request) -> Vec<&'static Recipe> {
        self.catalog
            .iter()
            .filter(|recipe| recipe.is_cookable_with(&request.ingredients))
            .collect()
    }

    /// Choose up to `request.people` distinct dishes.
    ///
    /// Parties of [`SOUP_QUOTA_PARTY_SIZE`] or more first receive one soup
    /// drawn from the matching soups, and are refused outright when none
    /// matches. The remaining slots are filled by drawing without
    /// replacement from the other matches; running out of matches early
    /// still yields a recommendation as long as one dish was chosen.
    #[tracing::instrument(skip_all, fields(people = request.people))]
    pub fn select<R: Rng>(
        &self,
        request: &Request,
        rng: &mut R,
    ) -> Result<Recommendation, Refusal> {
        if request.people < 1 {
            tracing::debug!("party size below 1");
            return Err(Refusal::InvalidPartySize);
        }

        let matched = self.matched(request);
        let mut soups: Vec<&'static Recipe> =
            matched.iter().copied().filter(|r| r.is_soup()).collect();

        tracing::debug!(
            matched = matched.len(),
            soups = soups.len(),
            "filtered catalog"
        );

        // people >= 1 here; anything above the catalog size is capped by the pool anyway
        let requested = usize::try_from(request.people).unwrap_or(usize::MAX);
        let mut slots = requested;
        let mut dishes = Vec::with_capacity(requested.min(matched.len()));
        let mut pool = matched.clone();

        if request.people >= SOUP_QUOTA_PARTY_SIZE {
            let Some(soup) = sampler::draw(&mut soups, rng) else {
                return Err(Refusal::SoupUnavailable);
            };

            pool.retain(|r| r.name != soup.name);
            dishes.push(soup);
            slots -= 1;
        }

        for _ in 0..slots {
            let Some(recipe) = sampler::draw(&mut pool, rng) else {
                break;
            };

            dishes.push(recipe);
        }

        if dishes.is_empty() {
            return Err(Refusal::Insufficient {
                available: matched.len(),
            });
        }

        if dishes.len() < requested {
            tracing::debug!(
                requested,
                selected = dishes.len(),
                "ran out of matching dishes"
            );
        }

        Ok(Recommendation { dishes })
    }

    /// Text sent back to the caller for either branch of an outcome.
    pub fn render(&self, outcome: &Result<Recommendation, Refusal>) -> String {
        match outcome {
            Ok(recommendation) => {
                tracing::info!(dishes = recommendation.len(), "recommended");
                recommendation.to_text(&self.separator)
            }
            Err(refusal) => {
                tracing::info!(reason = ?refusal, "no recommendation");
                refusal.to_string()
            }
        }
    }

    /// [`Selector::select`] flattened into its reply text.
    pub fn reply<R: Rng>(&self, request: &Request, rng: &mut R) -> String {
        self.render(&self.select(request, rng))
    }
}
