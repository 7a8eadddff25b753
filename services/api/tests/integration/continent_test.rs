use orbx_api::domain::types::Continent;
use orbx_api::gateway::EntityGateway;
use orbx_api::gateway::dispatch::Outcome;
use orbx_api::gateway::normalize::ContinentPayload;
use orbx_core::error::AppError;
use orbx_domain::population::Population;
use orbx_testing::fixture::Fixture;

use crate::helpers::{MemoryDb, continent_payload, country_payload, text};

fn created(outcome: Outcome<Continent>) -> Continent {
    match outcome {
        Outcome::Created(c) => c,
        other => panic!("expected Created, got {other:?}"),
    }
}

// ── create ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_create_continent_from_fixture() {
    let db = MemoryDb::new();
    let gateway = EntityGateway::new(db.continents());
    let payload: ContinentPayload =
        serde_json::from_value(Fixture::load("tests/fixtures/europe.json")).unwrap();

    let europe = created(gateway.create(payload).await.unwrap());

    assert_eq!(europe.name, "Europe");
    assert_eq!(europe.area, 10_180_000.0);
    assert_eq!(europe.population, Population::from(746_419_440u64));
    assert_eq!(europe.image_url, "https://images.example/europe.jpg");
}

#[tokio::test]
async fn should_keep_population_beyond_thirty_digits_exact() {
    let db = MemoryDb::new();
    let gateway = EntityGateway::new(db.continents());
    let digits = "1000000000000000000000000000001";

    let outcome = gateway
        .create(ContinentPayload {
            population: text(digits),
            ..continent_payload("Pangaea")
        })
        .await
        .unwrap();

    assert_eq!(created(outcome).population.to_string(), digits);
}

#[tokio::test]
async fn should_accept_population_beyond_forty_digits() {
    let db = MemoryDb::new();
    let gateway = EntityGateway::new(db.continents());
    let digits = format!("1{}", "0".repeat(45));

    let outcome = gateway
        .create(ContinentPayload {
            population: text(&digits),
            ..continent_payload("Panthalassa")
        })
        .await
        .unwrap();

    assert_eq!(created(outcome).population.to_string(), digits);
}

#[tokio::test]
async fn should_default_area_to_zero_for_continent() {
    let db = MemoryDb::new();
    let gateway = EntityGateway::new(db.continents());
    let asia = created(gateway.create(continent_payload("Asia")).await.unwrap());
    assert_eq!(asia.area, 0.0);
    assert_eq!(asia.population, Population::zero());
}

#[tokio::test]
async fn should_conflict_on_duplicate_name() {
    let db = MemoryDb::new();
    let gateway = EntityGateway::new(db.continents());
    gateway.create(continent_payload("Asia")).await.unwrap();

    let err = gateway.create(continent_payload("Asia")).await.unwrap_err();

    assert!(
        matches!(err, AppError::Conflict(ref m) if m == "a continent with this name already exists"),
        "got {err:?}"
    );
}

#[tokio::test]
async fn should_settle_racing_creates_with_exactly_one_conflict() {
    let db = MemoryDb::new();
    let gateway = EntityGateway::new(db.continents());

    let (first, second) = tokio::join!(
        gateway.create(continent_payload("Africa")),
        gateway.create(continent_payload("Africa")),
    );

    let results = [first, second];
    let successes = results.iter().filter(|r| r.is_ok()).count();
    let conflicts = results
        .iter()
        .filter(|r| matches!(r, Err(AppError::Conflict(_))))
        .count();
    assert_eq!((successes, conflicts), (1, 1));
    assert_eq!(db.tables.lock().unwrap().continents.len(), 1);
}

// ── validation happens before persistence ────────────────────────────────────

#[tokio::test]
async fn should_reject_invalid_area_without_touching_store() {
    let db = MemoryDb::broken();
    let gateway = EntityGateway::new(db.continents());

    let err = gateway
        .create(ContinentPayload {
            area: text("abc"),
            ..continent_payload("Asia")
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation(ref m) if m == "invalid area"));
    assert_eq!(db.calls(), 0);
}

#[tokio::test]
async fn should_reject_malformed_id_without_touching_store() {
    let db = MemoryDb::broken();
    let gateway = EntityGateway::new(db.continents());

    for raw in ["abc", "0", "-1"] {
        let err = gateway.get(raw).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m == "invalid id"));
        let err = gateway.delete(raw).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
    assert_eq!(db.calls(), 0);
}

#[tokio::test]
async fn should_surface_store_fault_as_internal() {
    let db = MemoryDb::broken();
    let gateway = EntityGateway::new(db.continents());

    let err = gateway.create(continent_payload("Asia")).await.unwrap_err();

    assert_eq!(err.kind(), "INTERNAL");
    assert_eq!(err.to_string(), "internal error");
}

// ── read ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_list_continents_ordered_by_name() {
    let db = MemoryDb::new();
    let gateway = EntityGateway::new(db.continents());
    for name in ["Oceania", "Africa", "Europe"] {
        gateway.create(continent_payload(name)).await.unwrap();
    }

    let Outcome::Found(rows) = gateway.list(()).await.unwrap() else {
        panic!("expected Found");
    };
    let names: Vec<_> = rows.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Africa", "Europe", "Oceania"]);
}

#[tokio::test]
async fn should_return_not_found_for_missing_id() {
    let db = MemoryDb::new();
    let gateway = EntityGateway::new(db.continents());
    let err = gateway.get("42").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(ref m) if m == "continent not found"));
}

// ── update / delete ──────────────────────────────────────────────────────────

#[tokio::test]
async fn should_replace_all_fields_on_update() {
    let db = MemoryDb::new();
    let gateway = EntityGateway::new(db.continents());
    let asia = created(
        gateway
            .create(ContinentPayload {
                area: text("44579000"),
                image_url: text("https://images.example/asia.jpg"),
                ..continent_payload("Asia")
            })
            .await
            .unwrap(),
    );

    let outcome = gateway
        .update(&asia.id.to_string(), continent_payload("Asia Minor"))
        .await
        .unwrap();

    let Outcome::Updated(updated) = outcome else {
        panic!("expected Updated");
    };
    assert_eq!(updated.name, "Asia Minor");
    assert_eq!(updated.area, 0.0);
    assert_eq!(updated.image_url, "");
}

#[tokio::test]
async fn should_return_not_found_when_updating_or_deleting_missing_id() {
    let db = MemoryDb::new();
    let gateway = EntityGateway::new(db.continents());

    let err = gateway
        .update("999", continent_payload("Nowhere"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)), "got {err:?}");

    let err = gateway.delete("999").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)), "got {err:?}");
}

#[tokio::test]
async fn should_refuse_deleting_continent_with_countries() {
    let db = MemoryDb::new();
    let continents = EntityGateway::new(db.continents());
    let countries = EntityGateway::new(db.countries());
    let asia = created(continents.create(continent_payload("Asia")).await.unwrap());
    countries
        .create(country_payload("Japan", "JP", asia.id))
        .await
        .unwrap();

    let err = continents.delete(&asia.id.to_string()).await.unwrap_err();

    assert!(
        matches!(err, AppError::Conflict(ref m) if m == "cannot delete continent: dependent entities exist"),
        "got {err:?}"
    );
    assert!(db.tables.lock().unwrap().continents.contains_key(&asia.id));
}

#[tokio::test]
async fn should_delete_continent_without_countries() {
    let db = MemoryDb::new();
    let gateway = EntityGateway::new(db.continents());
    let asia = created(gateway.create(continent_payload("Asia")).await.unwrap());

    let outcome = gateway.delete(&asia.id.to_string()).await.unwrap();

    assert_eq!(outcome, Outcome::Deleted);
    let err = gateway.get(&asia.id.to_string()).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}
