// src/data/columns.rs
//! Header names of the European housing-affordability CSV. The dataset is
//! published with Hungarian column labels, so the raw headers live here once
//! and everything else refers to them by role.

pub const CITY: &str = "Város";
pub const YEAR: &str = "Év";
pub const AGE_GROUP: &str = "Korosztály";
pub const PROPERTY_TYPE: &str = "Ingatlantípus";
pub const RENT: &str = "Bérleti díj (€/hó)";
pub const INCOME: &str = "Jövedelem (€/hó)";
pub const HOUSING_RATIO: &str = "Lakhatási arány (%)";
pub const DWELLING_SIZE: &str = "Lakásméret (m²)";
