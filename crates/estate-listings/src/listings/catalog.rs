use super::domain::PropertyRecord;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use tracing::{debug, info, warn};

const BUNDLED_LISTINGS: &str = include_str!("../../data/sample_listings.json");

/// Error enumeration for catalog loading failures.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read listing catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid listing catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("listing {id} is malformed: {reason}")]
    InvalidRecord { id: String, reason: &'static str },
}

/// Where listing records come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Bundled,
    File(PathBuf),
}

impl CatalogSource {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map(Self::File).unwrap_or(Self::Bundled)
    }

    pub fn load(&self) -> Result<Vec<PropertyRecord>, CatalogError> {
        let records = match self {
            Self::Bundled => ListingCatalog::from_reader(BUNDLED_LISTINGS.as_bytes())?,
            Self::File(path) => ListingCatalog::from_path(path)?,
        };
        debug!(source = %self, count = records.len(), "listing catalog loaded");
        Ok(records)
    }
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bundled => f.write_str("bundled sample listings"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

pub struct ListingCatalog;

impl ListingCatalog {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<PropertyRecord>, CatalogError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    /// Parses a JSON array of listings, rejecting records whose price or area
    /// could not take part in range filtering and numeric sorting.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<PropertyRecord>, CatalogError> {
        let records: Vec<PropertyRecord> = serde_json::from_reader(reader)?;
        for record in &records {
            validate(record)?;
        }
        Ok(records)
    }

    pub fn bundled() -> Result<Vec<PropertyRecord>, CatalogError> {
        CatalogSource::Bundled.load()
    }
}

fn validate(record: &PropertyRecord) -> Result<(), CatalogError> {
    let reason = if !record.price.is_finite() || record.price < 0.0 {
        Some("price must be a non-negative number")
    } else if !record.details.area.is_finite() || record.details.area <= 0.0 {
        Some("area must be a positive number")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(CatalogError::InvalidRecord {
            id: record.id.0.clone(),
            reason,
        }),
        None => Ok(()),
    }
}

/// Generation number handed out when a refresh starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshTicket(u64);

/// Current listing snapshot shared by request handlers.
///
/// Refreshes may overlap. Only the refresh holding the most recently issued
/// ticket may publish; results from older tickets are dropped on commit.
pub struct CatalogStore {
    snapshot: RwLock<Arc<Vec<PropertyRecord>>>,
    issued: AtomicU64,
}

impl CatalogStore {
    pub fn new(records: Vec<PropertyRecord>) -> Self {
        Self {
            snapshot: RwLock::new(Arc::new(records)),
            issued: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> Arc<Vec<PropertyRecord>> {
        match self.snapshot.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    pub fn begin_refresh(&self) -> RefreshTicket {
        RefreshTicket(self.issued.fetch_add(1, Ordering::AcqRel) + 1)
    }

    pub fn is_current(&self, ticket: RefreshTicket) -> bool {
        self.issued.load(Ordering::Acquire) == ticket.0
    }

    /// Publishes `records` if `ticket` is still the newest refresh. Returns
    /// whether the snapshot was replaced.
    pub fn commit(&self, ticket: RefreshTicket, records: Vec<PropertyRecord>) -> bool {
        let mut guard = match self.snapshot.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        if !self.is_current(ticket) {
            warn!(
                generation = ticket.0,
                latest = self.issued.load(Ordering::Acquire),
                "discarding superseded catalog refresh"
            );
            return false;
        }

        info!(generation = ticket.0, count = records.len(), "listing catalog refreshed");
        *guard = Arc::new(records);
        true
    }

    /// Loads `source` and commits it under a fresh ticket.
    pub fn refresh_from(&self, source: &CatalogSource) -> Result<bool, CatalogError> {
        let ticket = self.begin_refresh();
        let records = source.load()?;
        Ok(self.commit(ticket, records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::testing::listing;

    #[test]
    fn bundled_catalog_parses() {
        let records = ListingCatalog::bundled().expect("bundled listings parse");
        assert!(records.len() >= 10);
        assert!(records.iter().any(|record| record.featured));
    }

    #[test]
    fn rejects_negative_price() {
        let json = r#"[{
            "id": "bad",
            "title": "Broken",
            "price": -1,
            "location": {"address": "", "city": "", "state": "", "country": ""},
            "details": {"bedrooms": 1, "bathrooms": 1, "area": 10, "propertyType": "condo"},
            "status": "active",
            "createdAt": "2024-01-01T00:00:00Z"
        }]"#;
        let err = ListingCatalog::from_reader(json.as_bytes()).expect_err("price rejected");
        assert!(matches!(err, CatalogError::InvalidRecord { ref id, .. } if id == "bad"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ListingCatalog::from_path("/nonexistent/listings.json").expect_err("io error");
        assert!(err.to_string().contains("/nonexistent/listings.json"));
    }

    #[test]
    fn superseded_refresh_is_discarded() {
        let store = CatalogStore::new(vec![listing("seed").build()]);

        let slow = store.begin_refresh();
        let fast = store.begin_refresh();
        assert!(store.commit(fast, vec![listing("fast").build()]));
        assert!(!store.commit(slow, vec![listing("slow").build()]));

        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id.0, "fast");
    }

    #[test]
    fn readers_keep_their_snapshot_across_commits() {
        let store = CatalogStore::new(vec![listing("before").build()]);
        let held = store.snapshot();

        let ticket = store.begin_refresh();
        assert!(store.is_current(ticket));
        assert!(store.commit(ticket, vec![listing("after").build()]));

        assert_eq!(held[0].id.0, "before");
        assert_eq!(store.snapshot()[0].id.0, "after");
    }

    #[test]
    fn refresh_from_bundled_source_commits() {
        let store = CatalogStore::new(Vec::new());
        let committed = store
            .refresh_from(&CatalogSource::Bundled)
            .expect("bundled source loads");
        assert!(committed);
        assert!(!store.snapshot().is_empty());
    }
}
