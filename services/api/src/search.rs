use clap::Args;
use estate_listings::config::AppConfig;
use estate_listings::error::AppError;
use estate_listings::listings::format::{format_area, format_price, property_url, truncate_text};
use estate_listings::listings::pipeline::DEFAULT_STATUS;
use estate_listings::listings::{
    CatalogSource, ListingService, ListingSettings, LocationDirectory, SearchQuery,
    SearchResponse, StatusFilter,
};
use std::fmt;
use std::path::PathBuf;

const TITLE_WIDTH: usize = 40;

#[derive(Args, Debug)]
pub(crate) struct SearchArgs {
    /// Filters as a URL query string, e.g. "location=malibu&minPrice=1000000&sort=price-low"
    #[arg(long)]
    pub(crate) query: Option<String>,
    /// JSON listing catalog to search (defaults to LISTINGS_PATH or the bundled sample)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Override the configured page size
    #[arg(long)]
    pub(crate) page_size: Option<usize>,
}

pub(crate) fn run_search(args: SearchArgs) -> Result<(), AppError> {
    let SearchArgs {
        query,
        catalog,
        page_size,
    } = args;

    let config = AppConfig::load()?;
    let source = match catalog {
        Some(path) => CatalogSource::File(path),
        None => config.listings.source(),
    };
    let mut settings = config.listings.settings();
    if let Some(page_size) = page_size {
        settings.page_size = page_size.max(1);
    }

    let response = search_catalog(source, settings, query.as_deref().unwrap_or_default())?;
    print!("{}", ResultsView(&response));
    Ok(())
}

pub(crate) fn search_catalog(
    source: CatalogSource,
    settings: ListingSettings,
    query: &str,
) -> Result<SearchResponse, AppError> {
    let service = ListingService::load(source, LocationDirectory::default(), settings)?;
    Ok(service.search(SearchQuery::from_query_string(query)))
}

/// Plain-text rendering of one search page for the terminal.
pub(crate) struct ResultsView<'a>(pub(crate) &'a SearchResponse);

impl fmt::Display for ResultsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let response = self.0;
        let results = &response.results;

        let filters = if response.query.is_empty() {
            "none"
        } else {
            response.query.as_str()
        };
        let status = match response.criteria.status {
            StatusFilter::Unset => DEFAULT_STATUS.label(),
            StatusFilter::Any => "All",
            StatusFilter::Only(status) => status.label(),
        };
        writeln!(f, "Listing search")?;
        writeln!(f, "Filters: {filters}")?;
        writeln!(f, "Status: {status} | Sort: {}", response.sort.label())?;

        if results.is_empty() {
            return writeln!(
                f,
                "\nNo properties match these filters. Clear filters to see every active listing."
            );
        }

        writeln!(
            f,
            "{} properties found | page {} of {} ({} per page)",
            results.total, results.page, results.total_pages, results.page_size
        )?;

        if results.items.is_empty() {
            return writeln!(f, "\nPage {} is past the last page.", results.page);
        }

        writeln!(f)?;
        for listing in &results.items {
            writeln!(
                f,
                "- {} | {} | {} {} | {} | {} bd / {} ba | {} | {}",
                truncate_text(&listing.title, TITLE_WIDTH),
                format_price(listing.price, &listing.currency),
                listing.status.label(),
                listing.details.property_type.label(),
                listing.location.city,
                listing.details.bedrooms,
                listing.details.bathrooms,
                format_area(listing.details.area, listing.details.area_unit),
                property_url(listing)
            )?;
        }
        Ok(())
    }
}
