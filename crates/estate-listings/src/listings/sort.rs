use super::domain::PropertyRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    PriceHigh,
    PriceLow,
    AreaHigh,
    AreaLow,
}

impl SortKey {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Newest,
            Self::Oldest,
            Self::PriceHigh,
            Self::PriceLow,
            Self::AreaHigh,
            Self::AreaLow,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::PriceHigh => "price-high",
            Self::PriceLow => "price-low",
            Self::AreaHigh => "area-high",
            Self::AreaLow => "area-low",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest First",
            Self::Oldest => "Oldest First",
            Self::PriceHigh => "Price: High to Low",
            Self::PriceLow => "Price: Low to High",
            Self::AreaHigh => "Size: Largest First",
            Self::AreaLow => "Size: Smallest First",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let value = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(value))
    }

    fn compare(self, left: &PropertyRecord, right: &PropertyRecord) -> Ordering {
        match self {
            Self::Newest => right.created_at.cmp(&left.created_at),
            Self::Oldest => left.created_at.cmp(&right.created_at),
            Self::PriceHigh => right.price.total_cmp(&left.price),
            Self::PriceLow => left.price.total_cmp(&right.price),
            Self::AreaHigh => right.details.area.total_cmp(&left.details.area),
            Self::AreaLow => left.details.area.total_cmp(&right.details.area),
        }
    }
}

/// Returns the records ordered by `key` without touching the input.
///
/// `sort_by` is a stable merge sort, so records comparing equal keep the
/// relative order they arrived in.
pub fn sort_properties<'a, I>(records: I, key: SortKey) -> Vec<&'a PropertyRecord>
where
    I: IntoIterator<Item = &'a PropertyRecord>,
{
    let mut ordered: Vec<&'a PropertyRecord> = records.into_iter().collect();
    ordered.sort_by(|left, right| key.compare(left, right));
    ordered
}
