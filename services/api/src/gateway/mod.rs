//! Entity mutation gateway shared by every CRUD endpoint.
//!
//! Order of work per request: parse the path id, normalize the payload, make
//! exactly one repository call, then classify the result. Nothing reaches the
//! repository unless the id and every field are valid.

pub mod dispatch;
pub mod normalize;
pub mod translate;

use orbx_core::error::AppError;

use crate::domain::repository::EntityRepository;

use self::dispatch::{Outcome, parse_id};
use self::normalize::Normalize;
use self::translate::{Operation, translate};

pub struct EntityGateway<R: EntityRepository> {
    pub repo: R,
}

impl<R: EntityRepository> EntityGateway<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn list(&self, filter: R::Filter) -> Result<Outcome<Vec<R::Record>>, AppError> {
        self.repo
            .find_many(filter)
            .await
            .map(Outcome::Found)
            .map_err(|e| translate(R::KIND, Operation::Read, e))
    }

    pub async fn get(&self, raw_id: &str) -> Result<Outcome<R::Record>, AppError> {
        let id = parse_id(raw_id)?;
        self.repo
            .find_unique(id)
            .await
            .map_err(|e| translate(R::KIND, Operation::Read, e))?
            .map(Outcome::Found)
            .ok_or_else(|| AppError::NotFound(format!("{} not found", R::KIND)))
    }

    pub async fn create<P>(&self, payload: P) -> Result<Outcome<R::Record>, AppError>
    where
        P: Normalize<Draft = R::Draft>,
    {
        let draft = payload.normalize()?;
        self.repo
            .create(draft)
            .await
            .map(Outcome::Created)
            .map_err(|e| translate(R::KIND, Operation::Create, e))
    }

    pub async fn update<P>(&self, raw_id: &str, payload: P) -> Result<Outcome<R::Record>, AppError>
    where
        P: Normalize<Draft = R::Draft>,
    {
        let id = parse_id(raw_id)?;
        let draft = payload.normalize()?;
        self.repo
            .update(id, draft)
            .await
            .map(Outcome::Updated)
            .map_err(|e| translate(R::KIND, Operation::Update, e))
    }

    pub async fn delete(&self, raw_id: &str) -> Result<Outcome<R::Record>, AppError> {
        let id = parse_id(raw_id)?;
        self.repo
            .delete(id)
            .await
            .map(|()| Outcome::Deleted)
            .map_err(|e| translate(R::KIND, Operation::Delete, e))
    }
}
