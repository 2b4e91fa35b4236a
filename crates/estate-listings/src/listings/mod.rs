//! Property listing search: the filter, sort and pagination pipeline, its
//! query-string encoding, and the catalog and lookups served around it.

pub mod catalog;
pub mod domain;
pub mod filter;
pub mod format;
pub mod locations;
pub mod mortgage;
pub mod pagination;
pub mod pipeline;
pub mod query;
pub mod router;
pub mod service;
pub mod sort;

#[cfg(test)]
pub(crate) mod testing;

pub use catalog::{CatalogError, CatalogSource, CatalogStore, ListingCatalog, RefreshTicket};
pub use domain::{
    AreaUnit, Coordinates, ListingAgent, ListingStatus, PropertyDetails, PropertyId,
    PropertyLocation, PropertyRecord, PropertyType,
};
pub use filter::{filter_properties, FilterCriteria, StatusFilter};
pub use locations::{LocationDirectory, LocationEntry};
pub use mortgage::{MortgageError, MortgageEstimate, MortgageTerms};
pub use pagination::{paginate, Page, PageRequest, DEFAULT_PAGE_SIZE};
pub use pipeline::{featured, find_by_id, search, SearchRequest, SearchResults};
pub use query::{from_query_pairs, from_query_string, to_query_pairs, to_query_string, SearchQuery};
pub use router::listing_router;
pub use service::{
    CatalogRefreshOutcome, ListingService, ListingServiceError, ListingSettings, ListingView,
    SearchResponse,
};
pub use sort::{sort_properties, SortKey};
