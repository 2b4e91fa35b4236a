use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(pub String);

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListingStatus {
    Active,
    Sold,
    Pending,
    OffMarket,
}

impl ListingStatus {
    pub const fn ordered() -> [Self; 4] {
        [Self::Active, Self::Sold, Self::Pending, Self::OffMarket]
    }

    /// Wire value used in JSON and query strings.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Sold => "sold",
            Self::Pending => "pending",
            Self::OffMarket => "off-market",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Sold => "Sold",
            Self::Pending => "Pending",
            Self::OffMarket => "Off Market",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let value = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    House,
    Apartment,
    Villa,
    Penthouse,
    Estate,
    Condo,
}

impl PropertyType {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::House,
            Self::Apartment,
            Self::Villa,
            Self::Penthouse,
            Self::Estate,
            Self::Condo,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::House => "house",
            Self::Apartment => "apartment",
            Self::Villa => "villa",
            Self::Penthouse => "penthouse",
            Self::Estate => "estate",
            Self::Condo => "condo",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::House => "House",
            Self::Apartment => "Apartment",
            Self::Villa => "Villa",
            Self::Penthouse => "Penthouse",
            Self::Estate => "Estate",
            Self::Condo => "Condo",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let value = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaUnit {
    #[default]
    Sqft,
    Sqm,
}

impl AreaUnit {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sqft => "sq ft",
            Self::Sqm => "m²",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyLocation {
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    #[serde(default)]
    pub zip_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDetails {
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub area: f64,
    #[serde(default)]
    pub area_unit: AreaUnit,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lot_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_built: Option<u16>,
    pub property_type: PropertyType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingAgent {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Default for ListingAgent {
    fn default() -> Self {
        Self {
            name: "Luxury Properties Team".to_string(),
            email: "info@luxuryproperties.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            company: "Luxury Properties International".to_string(),
            image: None,
        }
    }
}

/// One listing as published by the catalog. The search pipeline only ever
/// borrows these; nothing downstream mutates a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    pub id: PropertyId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub location: PropertyLocation,
    pub details: PropertyDetails,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub status: ListingStatus,
    #[serde(default)]
    pub listing_agent: ListingAgent,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virtual_tour: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_plan: Option<String>,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl PropertyRecord {
    /// True when `feature` appears verbatim in either the feature or amenity list.
    pub fn offers(&self, feature: &str) -> bool {
        self.features
            .iter()
            .chain(self.amenities.iter())
            .any(|candidate| candidate == feature)
    }
}
