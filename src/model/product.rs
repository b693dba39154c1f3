use crate::error::{AppError, Entity};
use crate::service::{Record, RequestValidator};
use crate::sql::{PgBindValue, Table};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const PRODUCTS: Table = Table {
    name: "products",
    pk: "id",
    columns: &["user_id", "name", "price"],
};

const USER_ID_FIELD: &str = "user ID";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub price: i64,
}

impl Record for Product {
    const ENTITY: Entity = Entity::Product;
    const TABLE: &'static Table = &PRODUCTS;
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub user_id: i64,
    pub name: String,
    pub price: i64,
}

impl NewProduct {
    pub fn into_columns(self) -> Vec<(&'static str, PgBindValue)> {
        vec![
            ("user_id", self.user_id.into()),
            ("name", self.name.into()),
            ("price", self.price.into()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub user_id: Option<i64>,
    pub name: Option<String>,
    pub price: Option<i64>,
}

impl ProductPatch {
    pub fn apply(&self, product: &mut Product) {
        if let Some(user_id) = self.user_id {
            product.user_id = user_id;
        }
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
    }

    pub fn into_columns(self) -> Vec<(&'static str, PgBindValue)> {
        let mut out: Vec<(&'static str, PgBindValue)> = Vec::new();
        if let Some(user_id) = self.user_id {
            out.push(("user_id", user_id.into()));
        }
        if let Some(name) = self.name {
            out.push(("name", name.into()));
        }
        if let Some(price) = self.price {
            out.push(("price", price.into()));
        }
        out
    }
}

/// Raw form fields of `/product/create` and `/product/update/:id`.
///
/// The owner id is parsed on its own so the handler can look the owner up
/// before the remaining fields are validated.
#[derive(Debug, Default, Deserialize)]
pub struct ProductForm {
    pub user_id: Option<String>,
    pub name: Option<String>,
    pub price: Option<String>,
}

impl ProductForm {
    pub fn owner_id(&self) -> Result<i64, AppError> {
        RequestValidator::required_int(USER_ID_FIELD, self.user_id.as_deref())
    }

    /// `None` when the update does not move the product to another owner.
    pub fn new_owner_id(&self) -> Result<Option<i64>, AppError> {
        RequestValidator::optional_int(USER_ID_FIELD, self.user_id.as_deref())
    }

    /// `user_id` must already have been checked against the users table.
    pub fn into_new_product(self, user_id: i64) -> Result<NewProduct, AppError> {
        let price = RequestValidator::required_int("price", self.price.as_deref())?;
        Ok(NewProduct {
            user_id,
            name: self.name.unwrap_or_default(),
            price,
        })
    }

    pub fn into_patch(self, user_id: Option<i64>) -> Result<ProductPatch, AppError> {
        Ok(ProductPatch {
            user_id,
            price: RequestValidator::optional_int("price", self.price.as_deref())?,
            name: RequestValidator::optional_text(self.name),
        })
    }
}
