use serde::Serialize;

use super::catalog::{CatalogError, CatalogSource, CatalogStore};
use super::domain::{PropertyId, PropertyRecord};
use super::filter::FilterCriteria;
use super::format::{format_area, format_price, property_url};
use super::locations::{LocationDirectory, LocationEntry};
use super::mortgage::{self, MortgageError, MortgageEstimate, MortgageTerms};
use super::pipeline::{self, SearchRequest, SearchResults};
use super::query::SearchQuery;
use super::sort::SortKey;

/// Tunables applied to every search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingSettings {
    pub page_size: usize,
    pub featured_limit: usize,
}

impl Default for ListingSettings {
    fn default() -> Self {
        Self {
            page_size: super::pagination::DEFAULT_PAGE_SIZE,
            featured_limit: 6,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ListingServiceError {
    #[error("listing {0} not found")]
    NotFound(PropertyId),
    #[error(transparent)]
    Mortgage(#[from] MortgageError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Search response: one page of results plus the canonical query string for
/// the filters that produced it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(flatten)]
    pub results: SearchResults,
    pub criteria: FilterCriteria,
    pub sort: SortKey,
    pub query: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingView {
    pub listing: PropertyRecord,
    pub url: String,
    pub formatted_price: String,
    pub formatted_area: String,
}

impl ListingView {
    pub fn new(listing: PropertyRecord) -> Self {
        Self {
            url: property_url(&listing),
            formatted_price: format_price(listing.price, &listing.currency),
            formatted_area: format_area(listing.details.area, listing.details.area_unit),
            listing,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRefreshOutcome {
    pub committed: bool,
    pub listings: usize,
}

/// Service composing the catalog snapshot, search pipeline and lookups.
pub struct ListingService {
    store: CatalogStore,
    source: CatalogSource,
    locations: LocationDirectory,
    settings: ListingSettings,
}

impl ListingService {
    pub fn new(
        records: Vec<PropertyRecord>,
        source: CatalogSource,
        locations: LocationDirectory,
        settings: ListingSettings,
    ) -> Self {
        Self {
            store: CatalogStore::new(records),
            source,
            locations,
            settings,
        }
    }

    /// Loads `source` once and builds the service around it.
    pub fn load(
        source: CatalogSource,
        locations: LocationDirectory,
        settings: ListingSettings,
    ) -> Result<Self, CatalogError> {
        let records = source.load()?;
        Ok(Self::new(records, source, locations, settings))
    }

    pub fn settings(&self) -> ListingSettings {
        self.settings
    }

    pub fn search(&self, query: SearchQuery) -> SearchResponse {
        let canonical = query.to_query_string();
        let request = SearchRequest::from_query(query, self.settings.page_size);
        let records = self.store.snapshot();
        let results = pipeline::search(&records, &request);

        SearchResponse {
            results,
            criteria: request.criteria,
            sort: request.sort,
            query: canonical,
        }
    }

    pub fn featured(&self) -> Vec<ListingView> {
        let records = self.store.snapshot();
        pipeline::featured(&records, self.settings.featured_limit)
            .into_iter()
            .map(ListingView::new)
            .collect()
    }

    pub fn get(&self, id: &PropertyId) -> Result<ListingView, ListingServiceError> {
        let records = self.store.snapshot();
        pipeline::find_by_id(&records, id)
            .cloned()
            .map(ListingView::new)
            .ok_or_else(|| ListingServiceError::NotFound(id.clone()))
    }

    pub fn mortgage(
        &self,
        id: &PropertyId,
        terms: MortgageTerms,
    ) -> Result<MortgageEstimate, ListingServiceError> {
        let records = self.store.snapshot();
        let listing = pipeline::find_by_id(&records, id)
            .ok_or_else(|| ListingServiceError::NotFound(id.clone()))?;
        Ok(mortgage::estimate(listing.price, terms)?)
    }

    pub fn suggest_locations(&self, query: &str) -> Vec<LocationEntry> {
        self.locations.suggest(query)
    }

    /// Reloads the configured source. Blocking; call off the async runtime.
    pub fn reload(&self) -> Result<CatalogRefreshOutcome, ListingServiceError> {
        let committed = self.store.refresh_from(&self.source)?;
        Ok(CatalogRefreshOutcome {
            committed,
            listings: self.store.snapshot().len(),
        })
    }
}
