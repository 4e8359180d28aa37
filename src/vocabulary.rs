// Copyright 2025-present The sporjeger authors
// SPDX-License-Identifier: Apache-2.0

//! Available filter choices and how many entries each one would match.

use crate::types::{
    CatalogEntry, DeliveryType, FacetChoice, FacetDimension, Phase, PricingTier, REGIONS,
};
use std::collections::HashMap;

/// Every filter choice for a snapshot, grouped by dimension in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetVocabulary {
    choices: Vec<FacetChoice>,
}

impl FacetVocabulary {
    /// Build the vocabulary for `entries`.
    ///
    /// `categories` is the category list from the data source, in its sort
    /// order. When it is empty the categories are derived from the entries
    /// (slug order, name taken from the first entry that carries it). Counts
    /// for the closed dimensions are always computed from the entries.
    pub fn build(entries: &[CatalogEntry], categories: Vec<FacetChoice>) -> Self {
        let mut choices = if categories.is_empty() {
            derive_categories(entries)
        } else {
            categories
                .into_iter()
                .filter(|c| c.dimension == FacetDimension::Category)
                .collect()
        };

        let count = |dimension: FacetDimension, value: &str| {
            entries
                .iter()
                .filter(|e| e.facet_values(dimension).contains(&value))
                .count()
        };

        for t in DeliveryType::ALL {
            choices.push(FacetChoice {
                dimension: FacetDimension::Type,
                value: t.as_str().to_string(),
                label: t.label().to_string(),
                aliases: alias_of(t.label(), t.alias()),
                count: count(FacetDimension::Type, t.as_str()),
            });
        }
        for p in PricingTier::ALL {
            choices.push(FacetChoice {
                dimension: FacetDimension::Price,
                value: p.as_str().to_string(),
                label: p.label().to_string(),
                aliases: alias_of(p.label(), p.alias()),
                count: count(FacetDimension::Price, p.as_str()),
            });
        }
        for (code, label, alias) in REGIONS {
            choices.push(FacetChoice {
                dimension: FacetDimension::Region,
                value: (*code).to_string(),
                label: (*label).to_string(),
                aliases: alias_of(label, alias),
                count: count(FacetDimension::Region, *code),
            });
        }
        for phase in Phase::ALL {
            choices.push(FacetChoice {
                dimension: FacetDimension::Phase,
                value: phase.as_str().to_string(),
                label: phase.label().to_string(),
                aliases: alias_of(phase.label(), phase.alias()),
                count: count(FacetDimension::Phase, phase.as_str()),
            });
        }

        Self { choices }
    }

    pub fn choices(&self) -> &[FacetChoice] {
        &self.choices
    }

    pub fn dimension(&self, dimension: FacetDimension) -> impl Iterator<Item = &FacetChoice> {
        self.choices.iter().filter(move |c| c.dimension == dimension)
    }

    /// Display label for a selection, if the vocabulary knows it.
    pub fn label_of(&self, dimension: FacetDimension, value: &str) -> Option<&str> {
        self.dimension(dimension)
            .find(|c| c.value == value)
            .map(|c| c.label.as_str())
    }
}

fn alias_of(label: &str, alias: &str) -> Vec<String> {
    if label == alias {
        Vec::new()
    } else {
        vec![alias.to_string()]
    }
}

fn derive_categories(entries: &[CatalogEntry]) -> Vec<FacetChoice> {
    let mut by_slug: HashMap<&str, (&str, usize)> = HashMap::new();
    for entry in entries {
        for (i, slug) in entry.categories.iter().enumerate() {
            let name = entry
                .category_names
                .get(i)
                .map(String::as_str)
                .unwrap_or(slug.as_str());
            by_slug.entry(slug.as_str()).or_insert((name, 0)).1 += 1;
        }
    }

    let mut categories: Vec<FacetChoice> = by_slug
        .into_iter()
        .map(|(slug, (name, count))| FacetChoice {
            dimension: FacetDimension::Category,
            value: slug.to_string(),
            label: name.to_string(),
            aliases: Vec::new(),
            count,
        })
        .collect();
    categories.sort_by(|a, b| a.value.cmp(&b.value));
    categories
}
