use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "countries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub iso_code: String,
    pub capital: String,
    #[sea_orm(column_type = "Decimal(None)")]
    pub population: BigDecimal,
    pub area: Option<f64>,
    pub language: String,
    pub currency: String,
    pub calling_code: String,
    pub image_url: String,
    pub continent_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::continents::Entity",
        from = "Column::ContinentId",
        to = "super::continents::Column::Id",
        on_delete = "Restrict"
    )]
    Continent,
    #[sea_orm(has_many = "super::cities::Entity")]
    Cities,
}

impl Related<super::continents::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Continent.def()
    }
}

impl Related<super::cities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cities.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
