//! Fixed checklist shown to assessors, in display order.

use super::domain::{AnswerDomain, AnswerSet};

/// Checklist keys as they appear in persisted answer snapshots.
pub mod keys {
    pub const WALL_CRACKS: &str = "wallCracks";
    pub const COLUMN_TILT: &str = "columnTilt";
    pub const UNEVEN_FLOOR: &str = "unevenFloor";
    pub const ROOF_LEAK: &str = "roofLeak";
    pub const LOOSE_CEILING: &str = "looseCeiling";
    pub const EXPOSED_REBAR: &str = "exposedRebar";
    pub const STUCK_FRAMES: &str = "stuckFrames";
    pub const WATER_DAMAGE: &str = "waterDamage";
    pub const ELECTRICAL: &str = "electrical";
    pub const HEAVY_OBJECTS: &str = "heavyObjects";
    pub const NEAR_TREES: &str = "nearTrees";
    pub const BLOCKED_EXIT: &str = "blockedExit";
    pub const VENTILATION: &str = "ventilation";
    pub const OVERCAPACITY: &str = "overcapacity";
    pub const FOUNDATION: &str = "foundation";
    pub const CREAKING: &str = "creaking";
    pub const GROUND_SHIFT: &str = "groundShift";
    pub const FLOOD_HISTORY: &str = "floodHistory";
    pub const EVAC_AREA: &str = "evacArea";
}

/// One inspection question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckItem {
    pub key: &'static str,
    pub label: &'static str,
    pub help: Option<&'static str>,
    pub domain: AnswerDomain,
}

const fn severity(key: &'static str, label: &'static str) -> CheckItem {
    CheckItem {
        key,
        label,
        help: None,
        domain: AnswerDomain::Severity,
    }
}

const fn adequacy(key: &'static str, label: &'static str) -> CheckItem {
    CheckItem {
        key,
        label,
        help: None,
        domain: AnswerDomain::Adequacy,
    }
}

static CHECK_ITEMS: [CheckItem; 19] = [
    CheckItem {
        key: keys::WALL_CRACKS,
        label: "Visible wall cracks",
        help: Some("Hairline vs large diagonal/through cracks"),
        domain: AnswerDomain::Severity,
    },
    severity(keys::COLUMN_TILT, "Tilted columns / beam deformation"),
    severity(keys::UNEVEN_FLOOR, "Uneven or sunken floor"),
    severity(keys::ROOF_LEAK, "Roof leaks / ceiling stains"),
    severity(keys::LOOSE_CEILING, "Loose ceiling panels / falling debris risk"),
    severity(keys::EXPOSED_REBAR, "Exposed rusty reinforcement / spalling"),
    severity(keys::STUCK_FRAMES, "Doors/windows stuck / misaligned frames"),
    severity(keys::WATER_DAMAGE, "Dampness, persistent water damage"),
    severity(keys::ELECTRICAL, "Exposed electrical cables/sockets"),
    severity(keys::HEAVY_OBJECTS, "Heavy items (cabinets/AC) not secured"),
    severity(keys::NEAR_TREES, "Large tree within ~5m of building"),
    severity(keys::BLOCKED_EXIT, "Blocked emergency exits / pathways"),
    adequacy(keys::VENTILATION, "Adequate ventilation?"),
    severity(keys::OVERCAPACITY, "Overcapacity (too many occupants)"),
    severity(keys::FOUNDATION, "Foundation settlement signs (gaps/tilt)"),
    severity(keys::CREAKING, "Unusual loud creaking under load"),
    severity(
        keys::GROUND_SHIFT,
        "Ground shifting / uneven soil around the building",
    ),
    severity(keys::FLOOD_HISTORY, "Flooding history in last 12 months"),
    adequacy(keys::EVAC_AREA, "Clear evacuation area available?"),
];

/// All checklist items in display order.
pub fn items() -> &'static [CheckItem] {
    &CHECK_ITEMS
}

pub fn item(key: &str) -> Option<&'static CheckItem> {
    CHECK_ITEMS.iter().find(|item| item.key == key)
}

pub fn domain_of(key: &str) -> Option<AnswerDomain> {
    item(key).map(|item| item.domain)
}

/// Answer set with every item at its no-issue value, used to seed a new assessment.
pub fn default_answers() -> AnswerSet {
    CHECK_ITEMS
        .iter()
        .map(|item| (item.key.to_string(), item.domain.no_issue()))
        .collect()
}
