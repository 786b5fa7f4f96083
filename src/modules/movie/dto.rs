use serde::{Deserialize, Serialize};
use time::Date;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::model::Genre;
use crate::common::date::iso_date;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieDto {
    #[schema(example = 1)]
    pub id: Option<i64>,
    #[validate(
        required(message = "Title is required"),
        length(min = 1, message = "Title must not be empty")
    )]
    #[schema(example = "The Shawshank Redemption")]
    pub title: Option<String>,
    #[validate(required(message = "Genre is required"))]
    #[schema(example = "DRAMA")]
    pub genre: Option<Genre>,
    #[serde(default, with = "iso_date::option")]
    #[validate(required(message = "Release date is required"))]
    #[schema(value_type = Option<String>, format = Date, example = "1994-09-23")]
    pub release_date: Option<Date>,
    #[validate(
        required(message = "Duration is required"),
        range(min = 1, message = "Duration must be at least 1 minute")
    )]
    #[schema(example = 142)]
    pub duration_minutes: Option<i32>,
    #[schema(example = 1)]
    pub director_id: Option<i64>,
    /// Filled in from the linked director; ignored on input.
    #[schema(read_only, example = "Frank Darabont")]
    pub director_name: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MovieSearchParams {
    /// Movie title (partial match)
    pub title: Option<String>,
    /// Movie genre (exact match, case-insensitive)
    pub genre: Option<String>,
}
