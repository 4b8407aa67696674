//! Whole-pipeline scenario: three suppliers, one hotel, reconciled output.

use hotelier_tests::*;

const ACME_BODY: &str = r#"[{
    "Id": "iJhz",
    "DestinationId": 5432,
    "Name": "Beach Villa",
    "Description": "   ",
    "Address": " 8 Sentosa Gateway, Beach Villas ",
    "Country": "SG",
    "Latitude": 1.264751,
    "Longitude": 103.824006,
    "Facilities": ["Pool", "BusinessCenter"]
}]"#;

const PATAGONIA_BODY: &str = r#"[{
    "id": "iJhz",
    "destination": 5432,
    "name": null,
    "info": "Surrounded by tropical gardens, these upscale villas feature sundecks and pool views.",
    "address": "8 Sentosa Gateway, Beach Villas",
    "amenities": ["Pool"],
    "images": {
        "rooms": [
            {"url": "https://d2ey9sqrvkqdfs.cloudfront.net/0qZF/2.jpg", "description": "Double room"}
        ]
    }
}]"#;

const PAPERFLIES_BODY: &str = r#"[{
    "hotel_id": "iJhz",
    "destination_id": 5432,
    "description": "Surrounded by tropical gardens.",
    "location": {"country": "Singapore"},
    "amenities": {
        "general": ["business center", "BusinessCenter", "Pool ", "pool"],
        "room": ["tv"]
    },
    "images": {
        "rooms": [
            {"link": "https://d2ey9sqrvkqdfs.cloudfront.net/0qZF/2.jpg", "caption": "Twin room"},
            {"link": "https://d2ey9sqrvkqdfs.cloudfront.net/0qZF/4.jpg", "caption": "Bathroom"}
        ]
    },
    "booking_conditions": ["All children are welcome.", "Pets are not allowed."]
}]"#;

fn routed_client() -> Arc<dyn HttpClient> {
    Arc::new(
        RoutedHttpClient::new()
            .with_route("acme", ACME_BODY)
            .with_route("patagonia", PATAGONIA_BODY)
            .with_route("paperflies", PAPERFLIES_BODY),
    )
}

#[tokio::test]
async fn three_suppliers_reconcile_into_one_record() {
    let sources = default_sources(routed_client(), 10_000);
    let catalogue = collect_catalogue(&sources).await.expect("collection succeeds");

    assert_eq!(catalogue.len(), 1);
    let hotels = catalogue.find(&[HotelId::parse("iJhz").expect("valid id")], &[5432]);
    assert_eq!(hotels.len(), 1);
    let hotel = &hotels[0];

    // supplier 1's name survives; its blank description does not
    assert_eq!(hotel.name.as_deref(), Some("Beach Villa"));
    assert_eq!(
        hotel.description.as_deref(),
        Some("Surrounded by tropical gardens, these upscale villas feature sundecks and pool views.")
    );

    // "Singapore" beats "SG" (longer), coordinates are first-present-wins
    assert_eq!(hotel.location.country.as_deref(), Some("Singapore"));
    assert_eq!(hotel.location.lat, Some(1.264751));

    // case- and spacing-variant duplicates collapse to one token each
    assert_eq!(hotel.amenities.general, vec!["pool", "business center"]);
    assert_eq!(hotel.amenities.room, vec!["tv"]);

    // duplicate room-image link collapses, first-seen description kept,
    // sequence sorted by link
    assert_eq!(
        hotel.images.rooms,
        vec![
            Image::from_parts(
                Some(String::from("https://d2ey9sqrvkqdfs.cloudfront.net/0qZF/2.jpg")),
                Some(String::from("Double room")),
            ),
            Image::from_parts(
                Some(String::from("https://d2ey9sqrvkqdfs.cloudfront.net/0qZF/4.jpg")),
                Some(String::from("Bathroom")),
            ),
        ]
    );

    assert_eq!(hotel.booking_conditions.len(), 2);
}

#[tokio::test]
async fn reconciled_output_serializes_with_canonical_field_names() {
    let sources = default_sources(routed_client(), 10_000);
    let catalogue = collect_catalogue(&sources).await.expect("collection succeeds");
    let hotels = catalogue.find(&[], &[]);

    let value = serde_json::to_value(&hotels).expect("serializes");
    let record = &value[0];

    assert_eq!(record["id"], "iJhz");
    assert_eq!(record["destination_id"], 5432);
    assert_eq!(record["name"], "Beach Villa");
    assert_eq!(record["location"]["country"], "Singapore");
    // absent scalars serialize as null
    assert!(record["location"]["city"].is_null());
    assert!(record["amenities"]["general"].is_array());
    assert!(record["images"]["rooms"].is_array());
    assert!(record["booking_conditions"].is_array());
    // paperflies sent no coordinates and acme did: merged lat is present
    assert_eq!(record["location"]["lat"], 1.264751);
}

#[tokio::test]
async fn destination_filter_spans_the_reconciled_catalogue() {
    let sources = default_sources(routed_client(), 10_000);
    let catalogue = collect_catalogue(&sources).await.expect("collection succeeds");

    assert_eq!(catalogue.find(&[], &[5432]).len(), 1);
    assert!(catalogue.find(&[], &[1122]).is_empty());
}
