use super::domain::{ListingStatus, PropertyRecord, PropertyType};
use serde::Serialize;

/// Status constraint carried by [`FilterCriteria`].
///
/// `Unset` and `Any` both leave the predicate unconstrained; they differ only
/// at the pipeline entry, where `Unset` falls back to active listings while
/// `Any` keeps every status visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case", tag = "mode", content = "status")]
pub enum StatusFilter {
    #[default]
    Unset,
    Any,
    Only(ListingStatus),
}

impl StatusFilter {
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Resolves an unset filter to `fallback`, leaving explicit choices alone.
    pub const fn or_default_to(self, fallback: ListingStatus) -> Self {
        match self {
            Self::Unset => Self::Only(fallback),
            other => other,
        }
    }

    fn admits(self, status: ListingStatus) -> bool {
        match self {
            Self::Unset | Self::Any => true,
            Self::Only(expected) => expected == status,
        }
    }
}

/// Optional-field query describing which listings to include. Replaced
/// wholesale on every interaction; nothing patches it in place downstream.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type: Option<PropertyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_area: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    #[serde(skip_serializing_if = "StatusFilter::is_unset")]
    pub status: StatusFilter,
}

impl FilterCriteria {
    pub fn matches(&self, record: &PropertyRecord) -> bool {
        if let Some(needle) = self.location_needle() {
            let haystacks = [
                &record.location.city,
                &record.location.state,
                &record.location.address,
                &record.title,
            ];
            if !haystacks
                .iter()
                .any(|value| value.to_lowercase().contains(&needle))
            {
                return false;
            }
        }

        if let Some(kind) = self.property_type {
            if record.details.property_type != kind {
                return false;
            }
        }

        if self.min_price.is_some_and(|min| record.price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| record.price > max) {
            return false;
        }

        if self.bedrooms.is_some_and(|min| record.details.bedrooms < min) {
            return false;
        }
        if self
            .bathrooms
            .is_some_and(|min| record.details.bathrooms < min)
        {
            return false;
        }

        if self.min_area.is_some_and(|min| record.details.area < min) {
            return false;
        }
        if self.max_area.is_some_and(|max| record.details.area > max) {
            return false;
        }

        if !self.features.is_empty()
            && !self.features.iter().any(|feature| record.offers(feature))
        {
            return false;
        }

        self.status.admits(record.status)
    }

    fn location_needle(&self) -> Option<String> {
        self.location
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_lowercase)
    }
}

/// Keeps the records satisfying every set criterion, in input order.
///
/// Status is taken literally: an unset status does not narrow the result.
/// The active-only default belongs to [`super::pipeline::search`].
pub fn filter_properties<'a, I>(records: I, criteria: &FilterCriteria) -> Vec<&'a PropertyRecord>
where
    I: IntoIterator<Item = &'a PropertyRecord>,
{
    records
        .into_iter()
        .filter(|record| criteria.matches(record))
        .collect()
}
