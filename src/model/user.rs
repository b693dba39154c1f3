use crate::error::{AppError, Entity};
use crate::service::{Record, RequestValidator};
use crate::sql::{PgBindValue, Table};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const USERS: Table = Table {
    name: "users",
    pk: "id",
    columns: &["name", "email", "gender", "age"],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub gender: String,
    pub age: i64,
}

impl Record for User {
    const ENTITY: Entity = Entity::User;
    const TABLE: &'static Table = &USERS;
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub gender: String,
    pub age: i64,
}

impl NewUser {
    pub fn into_columns(self) -> Vec<(&'static str, PgBindValue)> {
        vec![
            ("name", self.name.into()),
            ("email", self.email.into()),
            ("gender", self.gender.into()),
            ("age", self.age.into()),
        ]
    }
}

/// Sparse patch: `None` leaves the stored value alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub gender: Option<String>,
    pub age: Option<i64>,
}

impl UserPatch {
    pub fn apply(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(gender) = &self.gender {
            user.gender = gender.clone();
        }
        if let Some(age) = self.age {
            user.age = age;
        }
    }

    pub fn into_columns(self) -> Vec<(&'static str, PgBindValue)> {
        let mut out: Vec<(&'static str, PgBindValue)> = Vec::new();
        if let Some(name) = self.name {
            out.push(("name", name.into()));
        }
        if let Some(email) = self.email {
            out.push(("email", email.into()));
        }
        if let Some(gender) = self.gender {
            out.push(("gender", gender.into()));
        }
        if let Some(age) = self.age {
            out.push(("age", age.into()));
        }
        out
    }
}

/// Raw form fields of `/user/create` and `/user/update/:id`.
#[derive(Debug, Default, Deserialize)]
pub struct UserForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub gender: Option<String>,
    pub age: Option<String>,
}

impl UserForm {
    /// Missing text fields insert as empty strings; `age` must be an integer.
    pub fn into_new_user(self) -> Result<NewUser, AppError> {
        let age = RequestValidator::required_int("age", self.age.as_deref())?;
        Ok(NewUser {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            gender: self.gender.unwrap_or_default(),
            age,
        })
    }

    pub fn into_patch(self) -> Result<UserPatch, AppError> {
        Ok(UserPatch {
            age: RequestValidator::optional_int("age", self.age.as_deref())?,
            name: RequestValidator::optional_text(self.name),
            email: RequestValidator::optional_text(self.email),
            gender: RequestValidator::optional_text(self.gender),
        })
    }
}
