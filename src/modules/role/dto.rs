use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoleDto {
    #[schema(example = 1)]
    pub id: Option<i64>,
    #[validate(
        required(message = "Character name is required"),
        length(min = 1, message = "Character name must not be empty")
    )]
    #[schema(example = "Dom Cobb")]
    pub character_name: Option<String>,
    #[validate(required(message = "Movie ID is required"))]
    #[schema(example = 1)]
    pub movie_id: Option<i64>,
    #[schema(read_only, example = "Inception")]
    pub movie_title: Option<String>,
    #[validate(required(message = "Actor ID is required"))]
    #[schema(example = 1)]
    pub actor_id: Option<i64>,
    #[schema(read_only, example = "Leonardo DiCaprio")]
    pub actor_name: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RoleSearchParams {
    /// Character name (partial match)
    #[serde(rename = "characterName")]
    pub character_name: String,
}
