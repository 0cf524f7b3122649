//! Service-layer CRUD tests
//!
//! Exercises Query/Mutation directly against in-memory SQLite, including
//! the derived scientist<->planet relationship across the mission join
//! and the file-backed connect path.

use sea_orm::{Database, DbConn, ModelTrait};

use mission_control::cli::connect;
use mission_control::entity::planet;
use mission_control::migration::{Migrator, MigratorTrait};
use mission_control::service::{Mutation, Query};
use mission_control::validation::{NewMission, NewScientist, ScientistPatch};

// =============================================================================
// Helper Functions
// =============================================================================

async fn setup() -> DbConn {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

fn ada() -> NewScientist {
    NewScientist {
        name: "Ada".to_string(),
        field_of_study: "CS".to_string(),
    }
}

// =============================================================================
// Scientist CRUD
// =============================================================================

#[tokio::test]
async fn test_create_and_find_scientist() {
    let db = setup().await;

    let created = Mutation::create_scientist(&db, ada()).await.unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(created.name, "Ada");

    let found = Query::find_scientist_by_id(&db, 1).await.unwrap().unwrap();
    assert_eq!(found, created);

    assert!(Query::find_scientist_by_id(&db, 2).await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_scientist_applies_only_patched_fields() {
    let db = setup().await;
    let scientist = Mutation::create_scientist(&db, ada()).await.unwrap();

    let patch = ScientistPatch {
        name: None,
        field_of_study: Some("Mathematics".to_string()),
    };
    let updated = Mutation::update_scientist(&db, scientist, patch)
        .await
        .unwrap();

    assert_eq!(updated.name, "Ada");
    assert_eq!(updated.field_of_study, "Mathematics");
}

#[tokio::test]
async fn test_delete_scientist_reports_cascaded_mission_count() {
    let db = setup().await;
    let scientist = Mutation::create_scientist(&db, ada()).await.unwrap();

    for planet_id in [1, 2] {
        Mutation::create_mission(
            &db,
            NewMission {
                name: format!("M{planet_id}"),
                scientist_id: scientist.id,
                planet_id,
            },
        )
        .await
        .unwrap();
    }

    let removed = Mutation::delete_scientist(&db, scientist.id).await.unwrap();
    assert_eq!(removed, 2);

    assert!(Query::find_scientist_by_id(&db, scientist.id)
        .await
        .unwrap()
        .is_none());
    assert!(Query::scientist_missions(&db, scientist.id)
        .await
        .unwrap()
        .is_empty());
}

// =============================================================================
// Missions and the derived relationship
// =============================================================================

#[tokio::test]
async fn test_scientist_missions_pairs_each_with_its_planet() {
    let db = setup().await;
    let scientist = Mutation::create_scientist(&db, ada()).await.unwrap();

    Mutation::create_mission(
        &db,
        NewMission {
            name: "To Mars".to_string(),
            scientist_id: scientist.id,
            planet_id: 1,
        },
    )
    .await
    .unwrap();

    let missions = Query::scientist_missions(&db, scientist.id).await.unwrap();
    assert_eq!(missions.len(), 1);

    let (mission, planet) = &missions[0];
    assert_eq!(mission.name, "To Mars");
    assert_eq!(planet.as_ref().unwrap().name.as_deref(), Some("Mars"));
}

#[tokio::test]
async fn test_planet_missions_is_symmetric() {
    let db = setup().await;
    let ada = Mutation::create_scientist(&db, ada()).await.unwrap();
    let grace = Mutation::create_scientist(
        &db,
        NewScientist {
            name: "Grace".to_string(),
            field_of_study: "CS".to_string(),
        },
    )
    .await
    .unwrap();

    for scientist_id in [ada.id, grace.id] {
        Mutation::create_mission(
            &db,
            NewMission {
                name: format!("crew-{scientist_id}"),
                scientist_id,
                planet_id: 1,
            },
        )
        .await
        .unwrap();
    }

    let missions = Query::planet_missions(&db, 1).await.unwrap();
    assert_eq!(missions.len(), 2);
    let crew: Vec<String> = missions
        .iter()
        .map(|(_, s)| s.as_ref().unwrap().name.clone())
        .collect();
    assert_eq!(crew, vec!["Ada".to_string(), "Grace".to_string()]);
}

#[tokio::test]
async fn test_scientist_planets_via_mission_join() {
    let db = setup().await;
    let scientist = Mutation::create_scientist(&db, ada()).await.unwrap();

    for planet_id in [1, 3] {
        Mutation::create_mission(
            &db,
            NewMission {
                name: format!("M{planet_id}"),
                scientist_id: scientist.id,
                planet_id,
            },
        )
        .await
        .unwrap();
    }

    // The association goes through the missions table.
    let planets = scientist
        .find_related(planet::Entity)
        .all(&db)
        .await
        .unwrap();
    assert_eq!(planets.len(), 2);
    let names: Vec<_> = planets.iter().filter_map(|p| p.name.clone()).collect();
    assert!(names.contains(&"Mars".to_string()));
    assert!(names.contains(&"Proxima Centauri b".to_string()));
}

// =============================================================================
// Connection and seeding
// =============================================================================

#[tokio::test]
async fn test_connect_migrates_and_seeds_a_fresh_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mission_control.db");
    let url = format!("sqlite://{}?mode=rwc", path.display());

    let db = connect(&url).await.unwrap();
    let planets = Query::list_planets(&db).await.unwrap();
    assert_eq!(planets.len(), 3);
    assert!(path.exists());
}

#[tokio::test]
async fn test_migrations_are_idempotent() {
    let db = setup().await;
    // Running up again applies nothing and fails nothing.
    Migrator::up(&db, None).await.unwrap();
    assert_eq!(Query::list_planets(&db).await.unwrap().len(), 3);
}
