use serde::{Deserialize, Serialize};
use time::Date;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::common::date::iso_date;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActorDto {
    #[schema(example = 1)]
    pub id: Option<i64>,
    #[validate(
        required(message = "First name is required"),
        length(min = 1, message = "First name must not be empty")
    )]
    #[schema(example = "Leonardo")]
    pub first_name: Option<String>,
    #[validate(
        required(message = "Last name is required"),
        length(min = 1, message = "Last name must not be empty")
    )]
    #[schema(example = "DiCaprio")]
    pub last_name: Option<String>,
    #[serde(default, with = "iso_date::option")]
    #[validate(required(message = "Birth date is required"))]
    #[schema(value_type = Option<String>, format = Date, example = "1974-11-11")]
    pub birth_date: Option<Date>,
    #[validate(
        required(message = "Nationality is required"),
        length(min = 1, message = "Nationality must not be empty")
    )]
    #[schema(example = "American")]
    pub nationality: Option<String>,
}

fn default_page_size() -> u32 {
    10
}

fn default_sort() -> String {
    "id".to_string()
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ActorListParams {
    /// Zero-based page index
    #[serde(default)]
    pub page: u32,
    /// Page size (1 to 1000)
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = 1000, message = "Page size must be between 1 and 1000"))]
    pub size: u32,
    /// Sort field (id, firstName, lastName, birthDate, nationality)
    #[serde(default = "default_sort")]
    pub sort: String,
    /// Sort direction (asc or desc)
    pub direction: Option<String>,
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ActorSearchParams {
    /// Actor name (partial match)
    pub name: String,
    #[serde(default)]
    pub page: u32,
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = 1000, message = "Page size must be between 1 and 1000"))]
    pub size: u32,
}
