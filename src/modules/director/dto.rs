use serde::{Deserialize, Serialize};
use time::Date;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::common::date::iso_date;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DirectorDto {
    #[schema(example = 1)]
    pub id: Option<i64>,
    #[validate(
        required(message = "First name is required"),
        length(min = 1, message = "First name must not be empty")
    )]
    #[schema(example = "Christopher")]
    pub first_name: Option<String>,
    #[validate(
        required(message = "Last name is required"),
        length(min = 1, message = "Last name must not be empty")
    )]
    #[schema(example = "Nolan")]
    pub last_name: Option<String>,
    #[serde(default, with = "iso_date::option")]
    #[validate(required(message = "Birth date is required"))]
    #[schema(value_type = Option<String>, format = Date, example = "1970-07-30")]
    pub birth_date: Option<Date>,
    #[validate(
        required(message = "Nationality is required"),
        length(min = 1, message = "Nationality must not be empty")
    )]
    #[schema(example = "British-American")]
    pub nationality: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DirectorSearchParams {
    /// Director name (partial match)
    pub name: String,
}
