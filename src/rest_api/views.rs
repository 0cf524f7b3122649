//! # Serialization Views
//!
//! Per-view projection structs for transport. The entity graph is cyclic
//! (planet -> mission -> scientist -> mission -> planet ...), so instead
//! of a recursive serializer with exclusion rules, each view is an
//! explicit struct that simply has no field for the back-reference:
//!
//! - a mission nested under a scientist carries its planet but not its
//!   scientist, and that planet carries no missions list;
//! - symmetric for missions nested under a planet;
//! - list views carry no missions at all.
//!
//! Cycle truncation is therefore a property of the types, not of any
//! runtime traversal.

use serde::Serialize;

use crate::entity::{mission, planet, scientist};

/// Planet without its missions. Used in list views and wherever a planet
/// is embedded under something that already came through a mission.
#[derive(Debug, Clone, Serialize)]
pub struct PlanetSummary {
    pub id: i32,
    pub name: Option<String>,
    pub distance_from_earth: Option<i64>,
    pub nearest_star: Option<String>,
}

impl From<planet::Model> for PlanetSummary {
    fn from(planet: planet::Model) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            distance_from_earth: planet.distance_from_earth,
            nearest_star: planet.nearest_star,
        }
    }
}

/// Scientist without their missions.
#[derive(Debug, Clone, Serialize)]
pub struct ScientistSummary {
    pub id: i32,
    pub name: String,
    pub field_of_study: String,
}

impl From<scientist::Model> for ScientistSummary {
    fn from(scientist: scientist::Model) -> Self {
        Self {
            id: scientist.id,
            name: scientist.name,
            field_of_study: scientist.field_of_study,
        }
    }
}

/// A mission as it appears inside a `ScientistDetail`: the planet is
/// embedded, the scientist back-reference is omitted.
#[derive(Debug, Clone, Serialize)]
pub struct ScientistMission {
    pub id: i32,
    pub name: String,
    pub scientist_id: i32,
    pub planet_id: i32,
    pub planet: Option<PlanetSummary>,
}

impl From<(mission::Model, Option<planet::Model>)> for ScientistMission {
    fn from((mission, planet): (mission::Model, Option<planet::Model>)) -> Self {
        Self {
            id: mission.id,
            name: mission.name,
            scientist_id: mission.scientist_id,
            planet_id: mission.planet_id,
            planet: planet.map(PlanetSummary::from),
        }
    }
}

/// Full scientist representation: own fields plus missions with their
/// planets.
#[derive(Debug, Clone, Serialize)]
pub struct ScientistDetail {
    pub id: i32,
    pub name: String,
    pub field_of_study: String,
    pub missions: Vec<ScientistMission>,
}

impl ScientistDetail {
    pub fn new(
        scientist: scientist::Model,
        missions: Vec<(mission::Model, Option<planet::Model>)>,
    ) -> Self {
        Self {
            id: scientist.id,
            name: scientist.name,
            field_of_study: scientist.field_of_study,
            missions: missions.into_iter().map(ScientistMission::from).collect(),
        }
    }
}

/// A freshly created mission with both parties embedded, each without
/// their reciprocal missions list.
#[derive(Debug, Clone, Serialize)]
pub struct MissionWithParties {
    pub id: i32,
    pub name: String,
    pub scientist_id: i32,
    pub planet_id: i32,
    pub scientist: ScientistSummary,
    pub planet: PlanetSummary,
}

impl MissionWithParties {
    pub fn new(
        mission: mission::Model,
        scientist: scientist::Model,
        planet: planet::Model,
    ) -> Self {
        Self {
            id: mission.id,
            name: mission.name,
            scientist_id: mission.scientist_id,
            planet_id: mission.planet_id,
            scientist: ScientistSummary::from(scientist),
            planet: PlanetSummary::from(planet),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planet() -> planet::Model {
        planet::Model {
            id: 1,
            name: Some("Mars".to_string()),
            distance_from_earth: Some(225_000_000),
            nearest_star: Some("Sun".to_string()),
        }
    }

    fn scientist() -> scientist::Model {
        scientist::Model {
            id: 1,
            name: "Ada".to_string(),
            field_of_study: "CS".to_string(),
        }
    }

    fn mission() -> mission::Model {
        mission::Model {
            id: 7,
            name: "M1".to_string(),
            scientist_id: 1,
            planet_id: 1,
        }
    }

    #[test]
    fn test_summaries_have_no_missions_key() {
        let planet = serde_json::to_value(PlanetSummary::from(planet())).unwrap();
        assert!(planet.get("missions").is_none());

        let scientist = serde_json::to_value(ScientistSummary::from(scientist())).unwrap();
        assert!(scientist.get("missions").is_none());
    }

    #[test]
    fn test_scientist_mission_omits_scientist_backref() {
        let view = ScientistMission::from((mission(), Some(planet())));
        let json = serde_json::to_value(view).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["planet"]["name"], "Mars");
        // The back-reference must not exist at any depth.
        assert!(json.get("scientist").is_none());
        assert!(json["planet"].get("missions").is_none());
    }

    #[test]
    fn test_scientist_detail_shape() {
        let detail = ScientistDetail::new(scientist(), vec![(mission(), Some(planet()))]);
        let json = serde_json::to_value(detail).unwrap();

        assert_eq!(json["name"], "Ada");
        assert_eq!(json["missions"][0]["planet_id"], 1);
        assert!(json["missions"][0].get("scientist").is_none());
    }

    #[test]
    fn test_mission_with_parties_truncates_both_sides() {
        let view = MissionWithParties::new(mission(), scientist(), planet());
        let json = serde_json::to_value(view).unwrap();

        assert_eq!(json["scientist"]["name"], "Ada");
        assert_eq!(json["planet"]["nearest_star"], "Sun");
        assert!(json["scientist"].get("missions").is_none());
        assert!(json["planet"].get("missions").is_none());
    }
}
