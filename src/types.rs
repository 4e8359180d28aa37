// Copyright 2025-present The sporjeger authors
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the catalog.
//!
//! A `CatalogEntry` is one research tool. Everything else in the crate either
//! filters entries by their facet values or scores their searchable text. The
//! facet enums here are closed: a value the catalog has never heard of doesn't
//! deserialize into a variant, it becomes a filter value that never matches.
//! On ingest, unknown values in set-valued fields (`platforms`,
//! `intel_cycle_phases`) are dropped; an unknown `tool_type` or
//! `pricing_model` makes the row unreadable and the source skips it.
//!
//! # Invariants
//!
//! - **EntryId**: stable across snapshots. Two snapshots that contain the same
//!   tool give it the same id, even if every other field changed.
//!
//! - **Snapshot membership**: an entry with `is_active == false` never reaches
//!   the searchable snapshot. `CatalogStore` enforces this on ingest.
//!
//! - **FacetFilter identity**: two filters are the same filter iff their
//!   `(dimension, value)` pairs are equal. The label is display-only.

use crate::error::ParseFacetError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// IDENTITY
// =============================================================================

/// Opaque, stable identifier of a catalog entry (a UUID in the source database).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub String);

impl EntryId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntryId {
    fn from(id: &str) -> Self {
        EntryId(id.to_string())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// FACET ENUMS
// =============================================================================

/// Generates the closed facet enums: serde names, `as_str`, display labels
/// (Norwegian, with an English alias), `ALL` in canonical order, and a
/// `FromStr` that rejects unknown values.
macro_rules! facet_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $dimension:expr, {
            $($variant:ident => ($value:literal, $label:literal, $alias:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            /// Every value, in canonical display order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire value, as stored in the catalog and used in filters.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }

            /// Human label for filter chips and suggestions.
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            /// English label. Suggestions match it as well as `label`.
            pub fn alias(&self) -> &'static str {
                match self {
                    $($name::$variant => $alias,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = ParseFacetError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok($name::$variant),)+
                    other => Err(ParseFacetError::UnknownValue {
                        dimension: $dimension,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

facet_enum! {
    /// How the tool is delivered to the user.
    DeliveryType, "type", {
        Web => ("web", "Nettside", "Website"),
        Terminal => ("terminal", "Terminal", "Terminal"),
        Desktop => ("desktop", "Program", "Desktop app"),
        Mobile => ("mobile", "Mobilapp", "Mobile app"),
        BrowserExtension => ("browser_extension", "Utvidelse", "Browser extension"),
        Api => ("api", "API", "API"),
        Dork => ("dork", "Søkeoperator", "Search operator"),
        Database => ("database", "Database", "Database"),
    }
}

facet_enum! {
    /// Pricing model of the tool.
    PricingTier, "price", {
        Free => ("free", "Gratis", "Free"),
        Freemium => ("freemium", "Gratish", "Freemium"),
        Paid => ("paid", "Betalt", "Paid"),
    }
}

facet_enum! {
    /// Phase of the intelligence cycle the tool supports.
    Phase, "phase", {
        Planning => ("planning", "Planlegging", "Planning"),
        Collection => ("collection", "Innsamling", "Collection"),
        Processing => ("processing", "Prosessering", "Processing"),
        Analysis => ("analysis", "Analyse", "Analysis"),
        Dissemination => ("dissemination", "Formidling", "Dissemination"),
    }
}

facet_enum! {
    /// Operating platform. Descriptive only, not a filter dimension.
    Platform, "platform", {
        Web => ("web", "Web", "Web"),
        Windows => ("windows", "Windows", "Windows"),
        Macos => ("macos", "macOS", "macOS"),
        Linux => ("linux", "Linux", "Linux"),
        Android => ("android", "Android", "Android"),
        Ios => ("ios", "iOS", "iOS"),
    }
}

/// Region code that acts as its own filter value (never an implicit wildcard).
pub const GLOBAL_REGION: &str = "global";

/// Known region codes with their label and English alias, in display order.
pub const REGIONS: &[(&str, &str, &str)] = &[
    ("NO", "Norge", "Norway"),
    (GLOBAL_REGION, "Global", "Global"),
    ("SE", "Sverige", "Sweden"),
    ("DK", "Danmark", "Denmark"),
];

// =============================================================================
// CATALOG ENTRY
// =============================================================================

/// One research tool as delivered by the catalog's `tools_with_categories` view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: EntryId,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
    pub tool_type: DeliveryType,
    pub pricing_model: PricingTier,
    #[serde(default)]
    pub requires_registration: bool,
    /// URL needs manual editing before use (e.g. a dork template).
    #[serde(default)]
    pub requires_manual_url: bool,
    #[serde(default, deserialize_with = "known_values")]
    pub platforms: Vec<Platform>,
    #[serde(default, deserialize_with = "known_values")]
    pub intel_cycle_phases: Vec<Phase>,
    #[serde(default)]
    pub regions: Vec<String>,
    /// Category slugs (facet values).
    #[serde(default)]
    pub categories: Vec<String>,
    /// Category display names (searchable text), parallel to `categories`.
    #[serde(default)]
    pub category_names: Vec<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub last_verified: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

fn default_active() -> bool {
    true
}

/// Set-valued facet field that keeps the values it recognizes. `null` reads as empty.
fn known_values<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let raw = Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw.iter().filter_map(|value| value.parse().ok()).collect())
}

impl CatalogEntry {
    /// Facet values this entry carries in `dimension`, as wire strings.
    ///
    /// Single-valued dimensions yield one value; set-valued ones yield zero or more.
    pub fn facet_values(&self, dimension: FacetDimension) -> Vec<&str> {
        match dimension {
            FacetDimension::Category => self.categories.iter().map(String::as_str).collect(),
            FacetDimension::Type => vec![self.tool_type.as_str()],
            FacetDimension::Price => vec![self.pricing_model.as_str()],
            FacetDimension::Region => self.regions.iter().map(String::as_str).collect(),
            FacetDimension::Phase => self.intel_cycle_phases.iter().map(Phase::as_str).collect(),
        }
    }
}

// =============================================================================
// FILTERS
// =============================================================================

/// Orthogonal axis a filter constrains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacetDimension {
    Category,
    Type,
    Price,
    Region,
    Phase,
}

impl FacetDimension {
    pub const ALL: &'static [FacetDimension] = &[
        FacetDimension::Category,
        FacetDimension::Type,
        FacetDimension::Price,
        FacetDimension::Region,
        FacetDimension::Phase,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FacetDimension::Category => "category",
            FacetDimension::Type => "type",
            FacetDimension::Price => "price",
            FacetDimension::Region => "region",
            FacetDimension::Phase => "phase",
        }
    }
}

impl FromStr for FacetDimension {
    type Err = ParseFacetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "category" => Ok(FacetDimension::Category),
            "type" => Ok(FacetDimension::Type),
            "price" | "pricing" => Ok(FacetDimension::Price),
            "region" => Ok(FacetDimension::Region),
            "phase" => Ok(FacetDimension::Phase),
            other => Err(ParseFacetError::UnknownDimension(other.to_string())),
        }
    }
}

impl fmt::Display for FacetDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One user-selected constraint.
///
/// `value` is a plain string. Filters arrive from the UI and the URL, and an
/// unknown value filters to nothing rather than failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacetFilter {
    pub dimension: FacetDimension,
    pub value: String,
    pub label: String,
}

impl FacetFilter {
    pub fn new(dimension: FacetDimension, value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            dimension,
            value: value.into(),
            label: label.into(),
        }
    }

    /// Filter whose label is its value. Handy for CLI input and tests.
    pub fn bare(dimension: FacetDimension, value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            dimension,
            label: value.clone(),
            value,
        }
    }

    /// Same `(dimension, value)` pair. Labels don't participate.
    pub fn same_selection(&self, other: &FacetFilter) -> bool {
        self.dimension == other.dimension && self.value == other.value
    }
}

impl PartialEq for FacetFilter {
    fn eq(&self, other: &Self) -> bool {
        self.same_selection(other)
    }
}

impl Eq for FacetFilter {}

/// Parses `dimension:value`, e.g. `price:free` or `region:NO`.
impl FromStr for FacetFilter {
    type Err = ParseFacetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (dimension, value) = s
            .split_once(':')
            .ok_or_else(|| ParseFacetError::MissingSeparator(s.to_string()))?;
        let value = value.trim();
        if value.is_empty() {
            return Err(ParseFacetError::MissingSeparator(s.to_string()));
        }
        Ok(FacetFilter::bare(dimension.trim().parse()?, value))
    }
}

/// Ordered set of active filters, in the order the user added them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActiveFilters {
    filters: Vec<FacetFilter>,
}

impl ActiveFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a filter. Returns false if the same selection was already active.
    pub fn add(&mut self, filter: FacetFilter) -> bool {
        if self.filters.iter().any(|f| f.same_selection(&filter)) {
            return false;
        }
        self.filters.push(filter);
        true
    }

    /// Remove the filter with the same selection. Returns false if absent.
    pub fn remove(&mut self, filter: &FacetFilter) -> bool {
        let before = self.filters.len();
        self.filters.retain(|f| !f.same_selection(filter));
        self.filters.len() != before
    }

    /// Pop the most recently added filter (backspace on an empty input).
    pub fn remove_last(&mut self) -> Option<FacetFilter> {
        self.filters.pop()
    }

    pub fn clear(&mut self) {
        self.filters.clear();
    }

    pub fn contains(&self, dimension: FacetDimension, value: &str) -> bool {
        self.filters
            .iter()
            .any(|f| f.dimension == dimension && f.value == value)
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FacetFilter> {
        self.filters.iter()
    }
}

impl FromIterator<FacetFilter> for ActiveFilters {
    fn from_iter<I: IntoIterator<Item = FacetFilter>>(iter: I) -> Self {
        let mut filters = ActiveFilters::new();
        for filter in iter {
            filters.add(filter);
        }
        filters
    }
}

// =============================================================================
// VOCABULARY
// =============================================================================

/// A category with the number of active entries tagged with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub tool_count: usize,
}

/// One available filter choice, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetChoice {
    pub dimension: FacetDimension,
    pub value: String,
    pub label: String,
    /// Other names the choice answers to in suggestions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    pub count: usize,
}

impl FacetChoice {
    pub fn to_filter(&self) -> FacetFilter {
        FacetFilter::new(self.dimension, self.value.clone(), self.label.clone())
    }
}
