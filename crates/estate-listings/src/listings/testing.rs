use super::domain::{
    AreaUnit, ListingAgent, ListingStatus, PropertyDetails, PropertyId, PropertyLocation,
    PropertyRecord, PropertyType,
};
use chrono::{DateTime, Utc};

pub(crate) fn listing(id: &str) -> ListingBuilder {
    ListingBuilder::new(id)
}

pub(crate) struct ListingBuilder {
    record: PropertyRecord,
}

impl ListingBuilder {
    pub(crate) fn new(id: &str) -> Self {
        Self {
            record: PropertyRecord {
                id: PropertyId(id.to_string()),
                title: format!("Listing {id}"),
                description: String::new(),
                price: 1_000_000.0,
                currency: "USD".to_string(),
                location: PropertyLocation {
                    address: "1 Main Street".to_string(),
                    city: "Springfield".to_string(),
                    state: "Illinois".to_string(),
                    country: "United States".to_string(),
                    zip_code: "62701".to_string(),
                    coordinates: None,
                },
                details: PropertyDetails {
                    bedrooms: 3,
                    bathrooms: 2,
                    area: 2000.0,
                    area_unit: AreaUnit::Sqft,
                    lot_size: None,
                    year_built: None,
                    property_type: PropertyType::House,
                },
                features: Vec::new(),
                amenities: Vec::new(),
                status: ListingStatus::Active,
                listing_agent: ListingAgent::default(),
                created_at: parse_instant("2024-01-01T00:00:00Z"),
                updated_at: None,
                featured: false,
                virtual_tour: None,
                floor_plan: None,
            },
        }
    }

    pub(crate) fn title(mut self, title: &str) -> Self {
        self.record.title = title.to_string();
        self
    }

    pub(crate) fn price(mut self, price: f64) -> Self {
        self.record.price = price;
        self
    }

    pub(crate) fn currency(mut self, currency: &str) -> Self {
        self.record.currency = currency.to_string();
        self
    }

    pub(crate) fn city(mut self, city: &str) -> Self {
        self.record.location.city = city.to_string();
        self
    }

    pub(crate) fn state(mut self, state: &str) -> Self {
        self.record.location.state = state.to_string();
        self
    }

    pub(crate) fn address(mut self, address: &str) -> Self {
        self.record.location.address = address.to_string();
        self
    }

    pub(crate) fn country(mut self, country: &str) -> Self {
        self.record.location.country = country.to_string();
        self
    }

    pub(crate) fn rooms(mut self, bedrooms: u32, bathrooms: u32) -> Self {
        self.record.details.bedrooms = bedrooms;
        self.record.details.bathrooms = bathrooms;
        self
    }

    pub(crate) fn area(mut self, area: f64) -> Self {
        self.record.details.area = area;
        self
    }

    pub(crate) fn kind(mut self, kind: PropertyType) -> Self {
        self.record.details.property_type = kind;
        self
    }

    pub(crate) fn features(mut self, features: &[&str]) -> Self {
        self.record.features = features.iter().map(|value| value.to_string()).collect();
        self
    }

    pub(crate) fn amenities(mut self, amenities: &[&str]) -> Self {
        self.record.amenities = amenities.iter().map(|value| value.to_string()).collect();
        self
    }

    pub(crate) fn status(mut self, status: ListingStatus) -> Self {
        self.record.status = status;
        self
    }

    pub(crate) fn created(mut self, instant: &str) -> Self {
        self.record.created_at = parse_instant(instant);
        self
    }

    pub(crate) fn featured(mut self) -> Self {
        self.record.featured = true;
        self
    }

    pub(crate) fn build(self) -> PropertyRecord {
        self.record
    }
}

fn parse_instant(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .expect("valid RFC 3339 timestamp")
        .with_timezone(&Utc)
}
