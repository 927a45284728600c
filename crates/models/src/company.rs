use sea_orm::{entity::prelude::*, ActiveModelTrait, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, invoice, validation::require_text};

/// A company is addressed by its client-chosen `code`, which never changes
/// after creation.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "companies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub code: String,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Invoices }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Invoices => Entity::has_many(invoice::Entity).into(),
        }
    }
}

impl Related<invoice::Entity> for Entity {
    fn to() -> RelationDef { Relation::Invoices.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Validated payload for a new company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCompany {
    pub code: String,
    pub name: String,
    pub description: String,
}

impl NewCompany {
    pub fn validate(code: Option<String>, name: Option<String>, description: Option<String>) -> Result<Self, ModelError> {
        Ok(Self {
            code: require_text(code)?,
            name: require_text(name)?,
            description: require_text(description)?,
        })
    }
}

/// Validated replacement for the mutable company fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyChanges {
    pub name: String,
    pub description: String,
}

impl CompanyChanges {
    pub fn validate(name: Option<String>, description: Option<String>) -> Result<Self, ModelError> {
        Ok(Self { name: require_text(name)?, description: require_text(description)? })
    }
}

pub async fn create<C: ConnectionTrait>(db: &C, new: NewCompany) -> Result<Model, ModelError> {
    let am = ActiveModel {
        code: Set(new.code),
        name: Set(new.name),
        description: Set(new.description),
    };
    am.insert(db).await.map_err(ModelError::from_db)
}

/// Apply `changes` to an existing row. `code` is left as it was.
pub async fn apply_changes<C: ConnectionTrait>(db: &C, existing: Model, changes: CompanyChanges) -> Result<Model, ModelError> {
    let mut am: ActiveModel = existing.into();
    am.name = Set(changes.name);
    am.description = Set(changes.description);
    am.update(db).await.map_err(ModelError::from_db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_company_requires_every_field() {
        let ok = NewCompany::validate(Some("testco".into()), Some("Test Company".into()), Some("Writer of Tests".into())).unwrap();
        assert_eq!(ok.code, "testco");

        assert!(NewCompany::validate(None, Some("n".into()), Some("d".into())).is_err());
        assert!(NewCompany::validate(Some("c".into()), Some("".into()), Some("d".into())).is_err());
        assert!(NewCompany::validate(Some("c".into()), Some("n".into()), None).is_err());
    }

    #[test]
    fn changes_require_name_and_description() {
        assert!(CompanyChanges::validate(Some("n".into()), Some("d".into())).is_ok());
        assert!(CompanyChanges::validate(Some("n".into()), None).is_err());
        assert!(CompanyChanges::validate(None, Some("d".into())).is_err());
    }

    #[test]
    fn serializes_as_three_fields() {
        let m = Model { code: "testco".into(), name: "Test Company".into(), description: "Writer of Tests".into() };
        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(v, serde_json::json!({"code": "testco", "name": "Test Company", "description": "Writer of Tests"}));
    }
}
