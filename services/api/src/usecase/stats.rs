use orbx_core::error::AppError;
use orbx_domain::entity::EntityKind;

use crate::domain::repository::{EntityRepository, UserRepository};
use crate::domain::types::DashboardCounts;
use crate::gateway::translate::{Operation, translate};

pub struct DashboardUseCase<A, B, C, U>
where
    A: EntityRepository,
    B: EntityRepository,
    C: EntityRepository,
    U: UserRepository,
{
    pub continents: A,
    pub countries: B,
    pub cities: C,
    pub users: U,
}

impl<A, B, C, U> DashboardUseCase<A, B, C, U>
where
    A: EntityRepository,
    B: EntityRepository,
    C: EntityRepository,
    U: UserRepository,
{
    /// The four counts run concurrently; any failure fails the whole request.
    pub async fn execute(&self) -> Result<DashboardCounts, AppError> {
        let (continents, countries, cities, users) = tokio::join!(
            self.continents.count(),
            self.countries.count(),
            self.cities.count(),
            self.users.count(),
        );
        Ok(DashboardCounts {
            continents: continents.map_err(|e| translate(A::KIND, Operation::Read, e))?,
            countries: countries.map_err(|e| translate(B::KIND, Operation::Read, e))?,
            cities: cities.map_err(|e| translate(C::KIND, Operation::Read, e))?,
            users: users.map_err(|e| translate(EntityKind::User, Operation::Read, e))?,
        })
    }
}
