use utoipa::OpenApi;
use crate::common::response::ErrorResponse;
use crate::modules::actor::dto::ActorDto;
use crate::modules::director::dto::DirectorDto;
use crate::modules::movie::dto::MovieDto;
use crate::modules::movie::model::Genre;
use crate::modules::role::dto::RoleDto;

#[derive(OpenApi)]
#[openapi(
    info(title = "Movie Catalog API", description = "Movies, directors, actors and the roles that link them"),
    paths(
        crate::modules::actor::handler::list_actors,
        crate::modules::actor::handler::get_actor,
        crate::modules::actor::handler::search_actors,
        crate::modules::actor::handler::create_actor,
        crate::modules::actor::handler::update_actor,
        crate::modules::actor::handler::delete_actor,
        crate::modules::director::handler::list_directors,
        crate::modules::director::handler::get_director,
        crate::modules::director::handler::search_directors,
        crate::modules::director::handler::create_director,
        crate::modules::director::handler::update_director,
        crate::modules::director::handler::delete_director,
        crate::modules::movie::handler::list_movies,
        crate::modules::movie::handler::get_movie,
        crate::modules::movie::handler::search_movies,
        crate::modules::movie::handler::create_movie,
        crate::modules::movie::handler::update_movie,
        crate::modules::movie::handler::patch_movie,
        crate::modules::movie::handler::delete_movie,
        crate::modules::role::handler::list_roles,
        crate::modules::role::handler::get_role,
        crate::modules::role::handler::list_roles_by_movie,
        crate::modules::role::handler::list_roles_by_actor,
        crate::modules::role::handler::search_roles,
        crate::modules::role::handler::create_role,
        crate::modules::role::handler::update_role,
        crate::modules::role::handler::delete_role,
    ),
    components(
        schemas(ActorDto, DirectorDto, MovieDto, RoleDto, Genre, ErrorResponse)
    ),
    tags(
        (name = "Actors", description = "Actor management"),
        (name = "Directors", description = "Director management"),
        (name = "Movies", description = "Movie management"),
        (name = "Roles", description = "Casting of actors in movies")
    )
)]
pub struct ApiDoc;
