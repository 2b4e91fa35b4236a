use super::domain::{ListingStatus, PropertyId, PropertyRecord};
use super::filter::{filter_properties, FilterCriteria};
use super::pagination::{paginate, PageRequest};
use super::query::SearchQuery;
use super::sort::{sort_properties, SortKey};
use serde::Serialize;

/// Status used when a request leaves the status filter unset.
pub const DEFAULT_STATUS: ListingStatus = ListingStatus::Active;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchRequest {
    pub criteria: FilterCriteria,
    pub sort: SortKey,
    pub page: PageRequest,
}

impl SearchRequest {
    pub fn from_query(query: SearchQuery, page_size: usize) -> Self {
        Self {
            criteria: query.criteria,
            sort: query.sort,
            page: PageRequest::new(query.page, page_size),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub items: Vec<PropertyRecord>,
    pub total: usize,
    pub total_pages: usize,
    pub page: usize,
    pub page_size: usize,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Runs filter, sort and pagination over `records`.
///
/// This is the only place an unset status narrows to active listings; pass
/// `StatusFilter::Any` to see every status.
pub fn search(records: &[PropertyRecord], request: &SearchRequest) -> SearchResults {
    let criteria = FilterCriteria {
        status: request.criteria.status.or_default_to(DEFAULT_STATUS),
        ..request.criteria.clone()
    };

    let matching = filter_properties(records, &criteria);
    let ordered = sort_properties(matching, request.sort);
    let page = paginate(&ordered, request.page);

    SearchResults {
        items: page.items.into_iter().cloned().collect(),
        total: ordered.len(),
        total_pages: page.total_pages,
        page: request.page.page(),
        page_size: request.page.page_size(),
    }
}

/// Active featured listings, newest first.
pub fn featured(records: &[PropertyRecord], limit: usize) -> Vec<PropertyRecord> {
    let candidates = records
        .iter()
        .filter(|record| record.featured && record.status == DEFAULT_STATUS);
    sort_properties(candidates, SortKey::Newest)
        .into_iter()
        .take(limit)
        .cloned()
        .collect()
}

pub fn find_by_id<'a>(records: &'a [PropertyRecord], id: &PropertyId) -> Option<&'a PropertyRecord> {
    records.iter().find(|record| &record.id == id)
}
