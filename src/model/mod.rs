//! Row types, their insert/patch shapes, and the form structs requests parse into.

mod product;
mod user;

pub use product::*;
pub use user::*;
