use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One cached top-company row. The id is assigned by the store on insert,
/// never by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub verified: Option<bool>,
    pub num_reviews: Option<i64>,
    pub kununu_score: Option<f64>,
    pub salary_satisfaction: Option<f64>,
    pub recommendation_rate: Option<f64>,
    pub kununu_url: Option<String>,
    pub country_code: Option<String>,
    pub city: Option<String>,
}

/// Insert shape for the store. Only `name` is required; every review
/// metric is optional at the storage layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCompany {
    pub name: String,
    pub verified: Option<bool>,
    pub num_reviews: Option<i64>,
    pub kununu_score: Option<f64>,
    pub salary_satisfaction: Option<f64>,
    pub recommendation_rate: Option<f64>,
    pub kununu_url: Option<String>,
    pub country_code: Option<String>,
    pub city: Option<String>,
}

impl NewCompany {
    pub fn named(name: &str) -> Self {
        NewCompany {
            name: name.to_string(),
            verified: None,
            num_reviews: None,
            kununu_score: None,
            salary_satisfaction: None,
            recommendation_rate: None,
            kununu_url: None,
            country_code: None,
            city: None,
        }
    }
}
