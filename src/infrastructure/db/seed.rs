use anyhow::Result;
use time::macros::date;
use tracing::info;

use crate::modules::actor::model::NewActor;
use crate::modules::director::model::NewDirector;
use crate::modules::movie::model::{Genre, MovieRef, NewMovie};
use crate::modules::role::model::NewRole;
use crate::state::AppState;

/// Loads the sample catalog unless directors already exist.
pub async fn seed_catalog(state: &AppState) -> Result<()> {
    if !state.directors.find_all().await?.is_empty() {
        info!("Catalog already populated, skipping seed");
        return Ok(());
    }

    let nolan = state
        .directors
        .insert(NewDirector {
            first_name: "Christopher".to_string(),
            last_name: "Nolan".to_string(),
            birth_date: date!(1970 - 07 - 30),
            nationality: "British-American".to_string(),
        })
        .await?;
    let tarantino = state
        .directors
        .insert(NewDirector {
            first_name: "Quentin".to_string(),
            last_name: "Tarantino".to_string(),
            birth_date: date!(1963 - 03 - 27),
            nationality: "American".to_string(),
        })
        .await?;

    let dicaprio = state
        .actors
        .insert(NewActor {
            first_name: "Leonardo".to_string(),
            last_name: "DiCaprio".to_string(),
            birth_date: date!(1974 - 11 - 11),
            nationality: "American".to_string(),
        })
        .await?;
    let bale = state
        .actors
        .insert(NewActor {
            first_name: "Christian".to_string(),
            last_name: "Bale".to_string(),
            birth_date: date!(1974 - 01 - 30),
            nationality: "British".to_string(),
        })
        .await?;
    let jackson = state
        .actors
        .insert(NewActor {
            first_name: "Samuel L.".to_string(),
            last_name: "Jackson".to_string(),
            birth_date: date!(1948 - 12 - 21),
            nationality: "American".to_string(),
        })
        .await?;

    let inception = state
        .movies
        .insert(NewMovie {
            title: "Inception".to_string(),
            genre: Genre::SciFi,
            release_date: date!(2010 - 07 - 16),
            duration_minutes: 148,
            director: Some(nolan.clone()),
        })
        .await?;
    let dark_knight = state
        .movies
        .insert(NewMovie {
            title: "The Dark Knight".to_string(),
            genre: Genre::Action,
            release_date: date!(2008 - 07 - 18),
            duration_minutes: 152,
            director: Some(nolan),
        })
        .await?;
    let pulp_fiction = state
        .movies
        .insert(NewMovie {
            title: "Pulp Fiction".to_string(),
            genre: Genre::Crime,
            release_date: date!(1994 - 10 - 14),
            duration_minutes: 154,
            director: Some(tarantino),
        })
        .await?;

    let castings = [
        ("Dom Cobb", &inception, dicaprio),
        ("Bruce Wayne / Batman", &dark_knight, bale),
        ("Jules Winnfield", &pulp_fiction, jackson),
    ];
    for (character_name, movie, actor) in castings {
        state
            .roles
            .insert(NewRole {
                character_name: character_name.to_string(),
                movie: MovieRef::from(movie),
                actor,
            })
            .await?;
    }

    info!(directors = 2, actors = 3, movies = 3, roles = 3, "Sample catalog seeded");
    Ok(())
}
