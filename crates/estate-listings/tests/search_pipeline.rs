use estate_listings::listings::{
    filter_properties, from_query_string, paginate, search, sort_properties, to_query_string,
    FilterCriteria, ListingCatalog, ListingStatus, PageRequest, PropertyRecord, PropertyType,
    SearchRequest, SortKey, StatusFilter, DEFAULT_PAGE_SIZE,
};
use serde_json::json;

fn record(id: &str, price: f64, status: &str, created_at: &str) -> PropertyRecord {
    serde_json::from_value(json!({
        "id": id,
        "title": format!("Residence {id}"),
        "price": price,
        "currency": "USD",
        "location": {
            "address": format!("{id} Harbor Road"),
            "city": "Newport",
            "state": "Rhode Island",
            "country": "United States"
        },
        "details": {
            "bedrooms": 4,
            "bathrooms": 3,
            "area": 3200,
            "propertyType": "house"
        },
        "features": ["Fireplace"],
        "amenities": [],
        "status": status,
        "createdAt": created_at
    }))
    .expect("valid listing json")
}

fn ids(records: &[PropertyRecord]) -> Vec<&str> {
    records.iter().map(|record| record.id.0.as_str()).collect()
}

fn fifteen_active_listings() -> Vec<PropertyRecord> {
    let prices = [
        500_000.0,
        750_000.0,
        999_999.0,
        1_000_000.0,
        1_250_000.0,
        2_000_000.0,
        3_500_000.0,
        4_999_999.0,
        5_000_000.0,
        5_000_001.0,
        7_500_000.0,
        9_000_000.0,
        12_000_000.0,
        15_000_000.0,
        20_000_000.0,
    ];
    prices
        .iter()
        .enumerate()
        .map(|(idx, price)| {
            record(
                &format!("p{idx:02}"),
                *price,
                "active",
                &format!("2024-01-{:02}T12:00:00Z", idx + 1),
            )
        })
        .collect()
}

#[test]
fn price_range_keeps_only_inclusive_matches() {
    let records = fifteen_active_listings();
    let request = SearchRequest {
        criteria: FilterCriteria {
            min_price: Some(1_000_000.0),
            max_price: Some(5_000_000.0),
            ..FilterCriteria::default()
        },
        sort: SortKey::PriceLow,
        page: PageRequest::default(),
    };

    let results = search(&records, &request);
    assert_eq!(results.total, 6);
    assert!(results
        .items
        .iter()
        .all(|record| (1_000_000.0..=5_000_000.0).contains(&record.price)));
    assert_eq!(results.items.first().map(|record| record.price), Some(1_000_000.0));
    assert_eq!(results.items.last().map(|record| record.price), Some(5_000_000.0));
}

#[test]
fn price_low_sort_orders_millions_ascending() {
    let records = vec![
        record("three", 3_000_000.0, "active", "2024-01-01T00:00:00Z"),
        record("one", 1_000_000.0, "active", "2024-01-02T00:00:00Z"),
        record("two", 2_000_000.0, "active", "2024-01-03T00:00:00Z"),
    ];
    let sorted: Vec<PropertyRecord> = sort_properties(&records, SortKey::PriceLow)
        .into_iter()
        .cloned()
        .collect();
    assert_eq!(ids(&sorted), vec!["one", "two", "three"]);
}

#[test]
fn third_page_of_thirty_matches_holds_six_items() {
    let records: Vec<PropertyRecord> = (1..=30)
        .map(|idx| {
            record(
                &format!("r{idx:02}"),
                1_000_000.0,
                "active",
                "2024-02-01T00:00:00Z",
            )
        })
        .collect();
    let request = SearchRequest {
        page: PageRequest::new(3, DEFAULT_PAGE_SIZE),
        ..SearchRequest::default()
    };

    let results = search(&records, &request);
    assert_eq!(results.total_pages, 3);
    assert_eq!(
        ids(&results.items),
        vec!["r25", "r26", "r27", "r28", "r29", "r30"]
    );
}

#[test]
fn empty_criteria_default_to_active_listings() {
    let records = vec![
        record("listed", 2_000_000.0, "active", "2024-01-01T00:00:00Z"),
        record("closed", 2_000_000.0, "sold", "2024-01-02T00:00:00Z"),
    ];
    let results = search(&records, &SearchRequest::default());
    assert_eq!(ids(&results.items), vec!["listed"]);
}

#[test]
fn feature_filter_matches_amenities() {
    let mut with_amenity = record("amenity", 3_000_000.0, "active", "2024-01-01T00:00:00Z");
    with_amenity.amenities = vec!["Ocean Views".to_string()];
    let records = vec![
        with_amenity,
        record("plain", 3_000_000.0, "active", "2024-01-02T00:00:00Z"),
    ];
    let criteria = FilterCriteria {
        features: vec!["Ocean Views".to_string()],
        ..FilterCriteria::default()
    };
    let kept: Vec<PropertyRecord> = filter_properties(&records, &criteria)
        .into_iter()
        .cloned()
        .collect();
    assert_eq!(ids(&kept), vec!["amenity"]);
}

#[test]
fn page_past_the_end_is_empty() {
    let records: Vec<PropertyRecord> = (1..=30)
        .map(|idx| record(&idx.to_string(), 1_000_000.0, "active", "2024-02-01T00:00:00Z"))
        .collect();
    let request = SearchRequest {
        page: PageRequest::new(99, DEFAULT_PAGE_SIZE),
        ..SearchRequest::default()
    };
    let results = search(&records, &request);
    assert!(results.items.is_empty());
    assert_eq!(results.total_pages, 3);
    assert_eq!(results.total, 30);
}

#[test]
fn pages_concatenate_back_to_the_sorted_sequence() {
    let records = ListingCatalog::bundled().expect("bundled listings parse");
    let criteria = FilterCriteria {
        status: StatusFilter::Any,
        ..FilterCriteria::default()
    };
    let sorted: Vec<PropertyRecord> =
        sort_properties(filter_properties(&records, &criteria), SortKey::AreaHigh)
            .into_iter()
            .cloned()
            .collect();

    for page_size in [1, 2, 4, 7, 12] {
        let total_pages = PageRequest::first(page_size).total_pages(sorted.len());
        let rebuilt: Vec<PropertyRecord> = (1..=total_pages)
            .flat_map(|page| paginate(&sorted, PageRequest::new(page, page_size)).items)
            .collect();
        assert_eq!(rebuilt, sorted, "page size {page_size}");
    }
}

#[test]
fn bundled_catalog_search_narrows_by_location_and_type() {
    let records = ListingCatalog::bundled().expect("bundled listings parse");
    let criteria = from_query_string("location=alpes-maritimes&type=villa&sort=price-high");
    let request = SearchRequest {
        criteria,
        sort: SortKey::PriceHigh,
        page: PageRequest::default(),
    };

    let results = search(&records, &request);
    assert!(results.total >= 2);
    assert!(results.items.iter().all(|record| {
        record.details.property_type == PropertyType::Villa
            && record.status == ListingStatus::Active
    }));
    assert!(results
        .items
        .windows(2)
        .all(|pair| pair[0].price >= pair[1].price));
}

#[test]
fn criteria_round_trip_through_the_address_bar() {
    let criteria = FilterCriteria {
        location: Some("Monaco".to_string()),
        property_type: Some(PropertyType::Apartment),
        min_price: Some(2_500_000.0),
        max_price: Some(10_000_000.0),
        bedrooms: Some(2),
        bathrooms: Some(1),
        min_area: Some(120.0),
        max_area: None,
        features: vec!["Sea Views".to_string()],
        status: StatusFilter::Only(ListingStatus::Pending),
    };
    let encoded = to_query_string(&criteria);
    assert!(!encoded.contains("maxArea"));
    assert_eq!(from_query_string(&encoded), criteria);
}
