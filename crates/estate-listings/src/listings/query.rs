//! Query-string encoding of the active search state.
//!
//! Encoding omits every absent field, so a default [`FilterCriteria`] encodes
//! to an empty string. Decoding is lenient: values that do not parse, fall
//! outside their valid range, or name an unknown variant are dropped as if
//! the key had never been sent.

use super::domain::{ListingStatus, PropertyType};
use super::filter::{FilterCriteria, StatusFilter};
use super::sort::SortKey;
use url::form_urlencoded;

pub const LOCATION: &str = "location";
pub const PROPERTY_TYPE: &str = "type";
pub const MIN_PRICE: &str = "minPrice";
pub const MAX_PRICE: &str = "maxPrice";
pub const BEDROOMS: &str = "bedrooms";
pub const BATHROOMS: &str = "bathrooms";
pub const MIN_AREA: &str = "minArea";
pub const MAX_AREA: &str = "maxArea";
pub const FEATURES: &str = "features";
pub const STATUS: &str = "status";
pub const SORT: &str = "sort";
pub const PAGE: &str = "page";

/// Wire value for [`StatusFilter::Any`].
pub const ALL_STATUSES: &str = "all";

pub fn to_query_pairs(criteria: &FilterCriteria) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();

    if let Some(location) = criteria.location.as_deref().filter(|value| !value.is_empty()) {
        pairs.push((LOCATION, location.to_string()));
    }
    if let Some(kind) = criteria.property_type {
        pairs.push((PROPERTY_TYPE, kind.as_str().to_string()));
    }
    push_number(&mut pairs, MIN_PRICE, criteria.min_price);
    push_number(&mut pairs, MAX_PRICE, criteria.max_price);
    if let Some(bedrooms) = criteria.bedrooms {
        pairs.push((BEDROOMS, bedrooms.to_string()));
    }
    if let Some(bathrooms) = criteria.bathrooms {
        pairs.push((BATHROOMS, bathrooms.to_string()));
    }
    push_number(&mut pairs, MIN_AREA, criteria.min_area);
    push_number(&mut pairs, MAX_AREA, criteria.max_area);
    for feature in criteria.features.iter().filter(|value| !value.is_empty()) {
        pairs.push((FEATURES, feature.clone()));
    }
    match criteria.status {
        StatusFilter::Unset => {}
        StatusFilter::Any => pairs.push((STATUS, ALL_STATUSES.to_string())),
        StatusFilter::Only(status) => pairs.push((STATUS, status.as_str().to_string())),
    }

    pairs
}

fn push_number(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<f64>) {
    if let Some(value) = value {
        pairs.push((key, value.to_string()));
    }
}

/// Rebuilds criteria from decoded key/value pairs. Unknown keys are ignored
/// and the first usable value wins for scalar keys.
pub fn from_query_pairs<I, K, V>(pairs: I) -> FilterCriteria
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut criteria = FilterCriteria::default();

    for (key, value) in pairs {
        let value = value.as_ref();
        match key.as_ref() {
            LOCATION => fill(&mut criteria.location, non_empty(value)),
            PROPERTY_TYPE => fill(&mut criteria.property_type, PropertyType::parse(value)),
            MIN_PRICE => fill(&mut criteria.min_price, parse_amount(value)),
            MAX_PRICE => fill(&mut criteria.max_price, parse_amount(value)),
            BEDROOMS => fill(&mut criteria.bedrooms, parse_count(value)),
            BATHROOMS => fill(&mut criteria.bathrooms, parse_count(value)),
            MIN_AREA => fill(&mut criteria.min_area, parse_amount(value)),
            MAX_AREA => fill(&mut criteria.max_area, parse_amount(value)),
            FEATURES => {
                if let Some(feature) = non_empty(value) {
                    criteria.features.push(feature);
                }
            }
            STATUS => {
                if criteria.status.is_unset() {
                    criteria.status = parse_status(value);
                }
            }
            _ => {}
        }
    }

    criteria
}

fn fill<T>(slot: &mut Option<T>, value: Option<T>) {
    if slot.is_none() {
        *slot = value;
    }
}

fn non_empty(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}

fn parse_count(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}

fn parse_status(raw: &str) -> StatusFilter {
    if raw.trim().eq_ignore_ascii_case(ALL_STATUSES) {
        return StatusFilter::Any;
    }
    ListingStatus::parse(raw)
        .map(StatusFilter::Only)
        .unwrap_or(StatusFilter::Unset)
}

pub fn to_query_string(criteria: &FilterCriteria) -> String {
    encode(to_query_pairs(criteria))
}

/// Accepts a raw query string with or without the leading `?`.
pub fn from_query_string(raw: &str) -> FilterCriteria {
    from_query_pairs(decode(raw))
}

fn encode(pairs: Vec<(&'static str, String)>) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, &value);
    }
    serializer.finish()
}

fn decode(raw: &str) -> Vec<(String, String)> {
    let raw = raw.strip_prefix('?').unwrap_or(raw);
    form_urlencoded::parse(raw.as_bytes())
        .into_owned()
        .collect()
}

/// Filters plus the sort and page selection that travel alongside them in
/// the address bar.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub criteria: FilterCriteria,
    pub sort: SortKey,
    pub page: usize,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            criteria: FilterCriteria::default(),
            sort: SortKey::default(),
            page: 1,
        }
    }
}

impl SearchQuery {
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = to_query_pairs(&self.criteria);
        if self.sort != SortKey::default() {
            pairs.push((SORT, self.sort.as_str().to_string()));
        }
        if self.page > 1 {
            pairs.push((PAGE, self.page.to_string()));
        }
        pairs
    }

    pub fn from_query_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let pairs: Vec<(String, String)> = pairs
            .into_iter()
            .map(|(key, value)| (key.as_ref().to_string(), value.as_ref().to_string()))
            .collect();

        let mut sort = None;
        let mut page = None;
        for (key, value) in &pairs {
            match key.as_str() {
                SORT => fill(&mut sort, SortKey::parse(value)),
                PAGE => fill(
                    &mut page,
                    value.trim().parse::<usize>().ok().filter(|page| *page >= 1),
                ),
                _ => {}
            }
        }

        Self {
            criteria: from_query_pairs(pairs),
            sort: sort.unwrap_or_default(),
            page: page.unwrap_or(1),
        }
    }

    pub fn to_query_string(&self) -> String {
        encode(self.to_query_pairs())
    }

    pub fn from_query_string(raw: &str) -> Self {
        Self::from_query_pairs(decode(raw))
    }
}
