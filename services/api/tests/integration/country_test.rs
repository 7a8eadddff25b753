use orbx_api::domain::types::{Country, CountryFilter};
use orbx_api::gateway::EntityGateway;
use orbx_api::gateway::dispatch::Outcome;
use orbx_api::gateway::normalize::CountryPayload;
use orbx_core::error::AppError;
use orbx_domain::population::Population;
use orbx_testing::fixture::Fixture;

use crate::helpers::{MemoryDb, city_payload, continent_payload, country_payload, text};

async fn seed_continent(db: &MemoryDb, name: &str) -> i32 {
    match EntityGateway::new(db.continents())
        .create(continent_payload(name))
        .await
        .unwrap()
    {
        Outcome::Created(c) => c.id,
        other => panic!("expected Created, got {other:?}"),
    }
}

fn created(outcome: Outcome<Country>) -> Country {
    match outcome {
        Outcome::Created(c) => c,
        other => panic!("expected Created, got {other:?}"),
    }
}

#[tokio::test]
async fn should_create_country_from_fixture_with_flag_url_alias() {
    let db = MemoryDb::new();
    let asia = seed_continent(&db, "Asia").await;
    let gateway = EntityGateway::new(db.countries());
    let mut payload: CountryPayload =
        serde_json::from_value(Fixture::load("tests/fixtures/japan.json")).unwrap();
    payload.continent_id = text(&asia.to_string());

    let japan = created(gateway.create(payload).await.unwrap());

    assert_eq!(japan.iso_code, "JP");
    assert_eq!(japan.population, Population::from(125_700_000u64));
    assert_eq!(japan.area, Some(377_975.0));
    assert_eq!(japan.image_url, "https://flags.example/jp.svg");
    assert_eq!(japan.continent_id, asia);
}

#[tokio::test]
async fn should_include_continent_when_reading() {
    let db = MemoryDb::new();
    let asia = seed_continent(&db, "Asia").await;
    let gateway = EntityGateway::new(db.countries());
    let japan = created(
        gateway
            .create(country_payload("Japan", "JP", asia))
            .await
            .unwrap(),
    );

    let Outcome::Found(found) = gateway.get(&japan.id.to_string()).await.unwrap() else {
        panic!("expected Found");
    };

    assert_eq!(found.continent.map(|c| c.name).as_deref(), Some("Asia"));
}

#[tokio::test]
async fn should_filter_countries_by_continent_ordered_by_name() {
    let db = MemoryDb::new();
    let asia = seed_continent(&db, "Asia").await;
    let europe = seed_continent(&db, "Europe").await;
    let gateway = EntityGateway::new(db.countries());
    for (name, iso, continent) in [
        ("Vietnam", "VN", asia),
        ("France", "FR", europe),
        ("Japan", "JP", asia),
    ] {
        gateway
            .create(country_payload(name, iso, continent))
            .await
            .unwrap();
    }

    let Outcome::Found(rows) = gateway
        .list(CountryFilter {
            continent_id: Some(asia),
        })
        .await
        .unwrap()
    else {
        panic!("expected Found");
    };

    let names: Vec<_> = rows.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Japan", "Vietnam"]);
}

#[tokio::test]
async fn should_conflict_on_duplicate_iso_code() {
    let db = MemoryDb::new();
    let asia = seed_continent(&db, "Asia").await;
    let gateway = EntityGateway::new(db.countries());
    gateway
        .create(country_payload("Japan", "JP", asia))
        .await
        .unwrap();

    let err = gateway
        .create(country_payload("Nippon", "JP", asia))
        .await
        .unwrap_err();

    assert!(
        matches!(err, AppError::Conflict(ref m) if m == "a country with this ISO code already exists"),
        "got {err:?}"
    );
}

#[tokio::test]
async fn should_return_not_found_for_missing_continent() {
    let db = MemoryDb::new();
    let gateway = EntityGateway::new(db.countries());

    let err = gateway
        .create(country_payload("Atlantis", "AT", 77))
        .await
        .unwrap_err();

    assert!(
        matches!(err, AppError::NotFound(ref m) if m == "referenced parent does not exist"),
        "got {err:?}"
    );
}

#[tokio::test]
async fn should_require_continent_reference_before_persistence() {
    let db = MemoryDb::broken();
    let gateway = EntityGateway::new(db.countries());

    let err = gateway
        .create(CountryPayload {
            continent_id: text("zero"),
            ..country_payload("Japan", "JP", 1)
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation(ref m) if m == "parent reference required"));
    assert_eq!(db.calls(), 0);
}

#[tokio::test]
async fn should_replace_optional_fields_on_update() {
    let db = MemoryDb::new();
    let asia = seed_continent(&db, "Asia").await;
    let gateway = EntityGateway::new(db.countries());
    let japan = created(
        gateway
            .create(CountryPayload {
                area: text("377975"),
                capital: text("Tokyo"),
                ..country_payload("Japan", "JP", asia)
            })
            .await
            .unwrap(),
    );

    let Outcome::Updated(updated) = gateway
        .update(&japan.id.to_string(), country_payload("Japan", "JP", asia))
        .await
        .unwrap()
    else {
        panic!("expected Updated");
    };

    assert_eq!(updated.area, None);
    assert_eq!(updated.capital, "");
}

#[tokio::test]
async fn should_refuse_deleting_country_with_cities() {
    let db = MemoryDb::new();
    let asia = seed_continent(&db, "Asia").await;
    let countries = EntityGateway::new(db.countries());
    let japan = created(
        countries
            .create(country_payload("Japan", "JP", asia))
            .await
            .unwrap(),
    );
    EntityGateway::new(db.cities())
        .create(city_payload("Osaka", japan.id))
        .await
        .unwrap();

    let err = countries.delete(&japan.id.to_string()).await.unwrap_err();

    assert!(
        matches!(err, AppError::Conflict(ref m) if m == "cannot delete country: dependent entities exist"),
        "got {err:?}"
    );
}
