use std::collections::HashMap;

use anyhow::Context as _;
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Set, ColumnTrait, DatabaseConnection,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, SqlErr,
};

use orbx_api_schema::{cities, continents, countries, users};
use orbx_domain::entity::EntityKind;
use orbx_domain::population::Population;
use orbx_domain::user::UserRole;

use crate::domain::repository::{EntityRepository, UserRepository};
use crate::domain::types::{
    City, CityDraft, CityFilter, Continent, ContinentDraft, Country, CountryDraft, CountryFilter,
    NewUser, User,
};
use crate::error::StoreError;

// ── Failure tagging ───────────────────────────────────────────────────────────

/// Tag a driver error. Constraint violations and missing rows become typed
/// tags; everything else keeps the driver error with `action` as context.
fn classify(err: DbErr, action: &'static str) -> StoreError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => return StoreError::UniqueViolation,
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            return StoreError::ReferenceViolation;
        }
        _ => {}
    }
    match err {
        DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => StoreError::NotFound,
        other => StoreError::Other(anyhow::Error::new(other).context(action)),
    }
}

// ── Population <-> NUMERIC(40, 0) ─────────────────────────────────────────────

fn population_to_decimal(population: &Population) -> BigDecimal {
    BigDecimal::new(BigInt::from(population.as_biguint().clone()), 0)
}

fn population_from_decimal(value: BigDecimal) -> Result<Population, StoreError> {
    let (digits, _) = value.with_scale(0).into_bigint_and_exponent();
    digits
        .to_biguint()
        .map(Population::from)
        .context("negative population stored")
        .map_err(StoreError::from)
}

// ── Continent repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbContinentRepository {
    pub db: DatabaseConnection,
}

impl EntityRepository for DbContinentRepository {
    const KIND: EntityKind = EntityKind::Continent;

    type Record = Continent;
    type Draft = ContinentDraft;
    type Filter = ();

    async fn find_many(&self, _filter: ()) -> Result<Vec<Continent>, StoreError> {
        let models = continents::Entity::find()
            .order_by_asc(continents::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| classify(e, "list continents"))?;
        models.into_iter().map(continent_from_model).collect()
    }

    async fn find_unique(&self, id: i32) -> Result<Option<Continent>, StoreError> {
        continents::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| classify(e, "find continent"))?
            .map(continent_from_model)
            .transpose()
    }

    async fn create(&self, draft: ContinentDraft) -> Result<Continent, StoreError> {
        let model = continent_active_model(NotSet, draft)
            .insert(&self.db)
            .await
            .map_err(|e| classify(e, "create continent"))?;
        continent_from_model(model)
    }

    async fn update(&self, id: i32, draft: ContinentDraft) -> Result<Continent, StoreError> {
        let model = continent_active_model(Set(id), draft)
            .update(&self.db)
            .await
            .map_err(|e| classify(e, "update continent"))?;
        continent_from_model(model)
    }

    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        let result = continents::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| classify(e, "delete continent"))?;
        deleted(result.rows_affected)
    }

    async fn count(&self) -> Result<u64, StoreError> {
        continents::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| classify(e, "count continents"))
    }
}

fn continent_active_model(
    id: sea_orm::ActiveValue<i32>,
    draft: ContinentDraft,
) -> continents::ActiveModel {
    continents::ActiveModel {
        id,
        name: Set(draft.name),
        area: Set(draft.area),
        population: Set(population_to_decimal(&draft.population)),
        image_url: Set(draft.image_url),
    }
}

fn continent_from_model(model: continents::Model) -> Result<Continent, StoreError> {
    Ok(Continent {
        id: model.id,
        name: model.name,
        area: model.area,
        population: population_from_decimal(model.population)?,
        image_url: model.image_url,
    })
}

// ── Country repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCountryRepository {
    pub db: DatabaseConnection,
}

impl EntityRepository for DbCountryRepository {
    const KIND: EntityKind = EntityKind::Country;

    type Record = Country;
    type Draft = CountryDraft;
    type Filter = CountryFilter;

    async fn find_many(&self, filter: CountryFilter) -> Result<Vec<Country>, StoreError> {
        let mut query = countries::Entity::find().find_also_related(continents::Entity);
        if let Some(continent_id) = filter.continent_id {
            query = query.filter(countries::Column::ContinentId.eq(continent_id));
        }
        let rows = query
            .order_by_asc(countries::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| classify(e, "list countries"))?;
        rows.into_iter()
            .map(|(country, continent)| country_from_model(country, continent))
            .collect()
    }

    async fn find_unique(&self, id: i32) -> Result<Option<Country>, StoreError> {
        countries::Entity::find_by_id(id)
            .find_also_related(continents::Entity)
            .one(&self.db)
            .await
            .map_err(|e| classify(e, "find country"))?
            .map(|(country, continent)| country_from_model(country, continent))
            .transpose()
    }

    async fn create(&self, draft: CountryDraft) -> Result<Country, StoreError> {
        let model = country_active_model(NotSet, draft)
            .insert(&self.db)
            .await
            .map_err(|e| classify(e, "create country"))?;
        country_from_model(model, None)
    }

    async fn update(&self, id: i32, draft: CountryDraft) -> Result<Country, StoreError> {
        let model = country_active_model(Set(id), draft)
            .update(&self.db)
            .await
            .map_err(|e| classify(e, "update country"))?;
        country_from_model(model, None)
    }

    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        let result = countries::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| classify(e, "delete country"))?;
        deleted(result.rows_affected)
    }

    async fn count(&self) -> Result<u64, StoreError> {
        countries::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| classify(e, "count countries"))
    }
}

fn country_active_model(
    id: sea_orm::ActiveValue<i32>,
    draft: CountryDraft,
) -> countries::ActiveModel {
    countries::ActiveModel {
        id,
        name: Set(draft.name),
        iso_code: Set(draft.iso_code),
        capital: Set(draft.capital),
        population: Set(population_to_decimal(&draft.population)),
        area: Set(draft.area),
        language: Set(draft.language),
        currency: Set(draft.currency),
        calling_code: Set(draft.calling_code),
        image_url: Set(draft.image_url),
        continent_id: Set(draft.continent_id),
    }
}

fn country_from_model(
    model: countries::Model,
    continent: Option<continents::Model>,
) -> Result<Country, StoreError> {
    Ok(Country {
        id: model.id,
        name: model.name,
        iso_code: model.iso_code,
        capital: model.capital,
        population: population_from_decimal(model.population)?,
        area: model.area,
        language: model.language,
        currency: model.currency,
        calling_code: model.calling_code,
        image_url: model.image_url,
        continent_id: model.continent_id,
        continent: continent.map(continent_from_model).transpose()?,
    })
}

// ── City repository ───────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCityRepository {
    pub db: DatabaseConnection,
}

impl DbCityRepository {
    /// Cities joined with their country, then continents fetched for the
    /// distinct continent ids in one follow-up query.
    async fn load(
        &self,
        query: sea_orm::SelectTwo<cities::Entity, countries::Entity>,
    ) -> Result<Vec<City>, StoreError> {
        let rows = query
            .all(&self.db)
            .await
            .map_err(|e| classify(e, "list cities"))?;

        let mut continent_ids: Vec<i32> = rows
            .iter()
            .filter_map(|(_, country)| country.as_ref().map(|c| c.continent_id))
            .collect();
        continent_ids.sort_unstable();
        continent_ids.dedup();

        let continents_by_id: HashMap<i32, continents::Model> = if continent_ids.is_empty() {
            HashMap::new()
        } else {
            continents::Entity::find()
                .filter(continents::Column::Id.is_in(continent_ids))
                .all(&self.db)
                .await
                .map_err(|e| classify(e, "load continents for cities"))?
                .into_iter()
                .map(|m| (m.id, m))
                .collect()
        };

        rows.into_iter()
            .map(|(city, country)| {
                let country = country
                    .map(|c| {
                        let continent = continents_by_id.get(&c.continent_id).cloned();
                        country_from_model(c, continent)
                    })
                    .transpose()?;
                city_from_model(city, country)
            })
            .collect()
    }
}

impl EntityRepository for DbCityRepository {
    const KIND: EntityKind = EntityKind::City;

    type Record = City;
    type Draft = CityDraft;
    type Filter = CityFilter;

    async fn find_many(&self, filter: CityFilter) -> Result<Vec<City>, StoreError> {
        let query = cities::Entity::find().find_also_related(countries::Entity);
        let query = match filter {
            CityFilter::All => query,
            CityFilter::Country(id) => query.filter(cities::Column::CountryId.eq(id)),
            CityFilter::Continent(id) => query.filter(countries::Column::ContinentId.eq(id)),
        };
        self.load(query.order_by_asc(cities::Column::Name)).await
    }

    async fn find_unique(&self, id: i32) -> Result<Option<City>, StoreError> {
        let query = cities::Entity::find()
            .find_also_related(countries::Entity)
            .filter(cities::Column::Id.eq(id));
        Ok(self.load(query).await?.into_iter().next())
    }

    async fn create(&self, draft: CityDraft) -> Result<City, StoreError> {
        let model = city_active_model(NotSet, draft)
            .insert(&self.db)
            .await
            .map_err(|e| classify(e, "create city"))?;
        city_from_model(model, None)
    }

    async fn update(&self, id: i32, draft: CityDraft) -> Result<City, StoreError> {
        let model = city_active_model(Set(id), draft)
            .update(&self.db)
            .await
            .map_err(|e| classify(e, "update city"))?;
        city_from_model(model, None)
    }

    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        let result = cities::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| classify(e, "delete city"))?;
        deleted(result.rows_affected)
    }

    async fn count(&self) -> Result<u64, StoreError> {
        cities::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| classify(e, "count cities"))
    }
}

fn city_active_model(id: sea_orm::ActiveValue<i32>, draft: CityDraft) -> cities::ActiveModel {
    cities::ActiveModel {
        id,
        name: Set(draft.name),
        latitude: Set(draft.latitude),
        longitude: Set(draft.longitude),
        population: Set(population_to_decimal(&draft.population)),
        area: Set(draft.area),
        timezone: Set(draft.timezone),
        language: Set(draft.language),
        image_url: Set(draft.image_url),
        country_id: Set(draft.country_id),
    }
}

fn city_from_model(model: cities::Model, country: Option<Country>) -> Result<City, StoreError> {
    Ok(City {
        id: model.id,
        name: model.name,
        latitude: model.latitude,
        longitude: model.longitude,
        population: population_from_decimal(model.population)?,
        area: model.area,
        timezone: model.timezone,
        language: model.language,
        image_url: model.image_url,
        country_id: model.country_id,
        country,
    })
}

fn deleted(rows_affected: u64) -> Result<(), StoreError> {
    if rows_affected == 0 {
        Err(StoreError::NotFound)
    } else {
        Ok(())
    }
}

// ── User repository ───────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| classify(e, "find user by email"))?
            .map(user_from_model)
            .transpose()
    }

    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let model = users::ActiveModel {
            id: NotSet,
            name: Set(user.name),
            email: Set(user.email),
            password: Set(user.password_hash),
            role: Set(user.role.as_str().to_owned()),
        }
        .insert(&self.db)
        .await
        .map_err(|e| classify(e, "create user"))?;
        user_from_model(model)
    }

    async fn count(&self) -> Result<u64, StoreError> {
        users::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| classify(e, "count users"))
    }
}

fn user_from_model(model: users::Model) -> Result<User, StoreError> {
    let role = model
        .role
        .parse::<UserRole>()
        .with_context(|| format!("user {} has unknown role", model.id))?;
    Ok(User {
        id: model.id,
        name: model.name,
        email: model.email,
        password_hash: model.password,
        role,
    })
}
