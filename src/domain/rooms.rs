//! Interior room specifications.
//!
//! A room is a tagged union on `type`: every room shares the same
//! measurements and surface toggles, and some room types carry extra
//! features that only make sense for them (a vanity in a bathroom, cabinets
//! in a kitchen).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::quantity::{Count, Measure};

/// Ceiling height assumed when none is given.
pub const DEFAULT_CEILING_HEIGHT_FT: Decimal = dec!(8);

/// One interior space to paint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RoomSpec {
    #[serde(alias = "bedroom")]
    Bedroom(RoomBasics),
    #[serde(alias = "bathroom")]
    Bathroom(Bathroom),
    #[serde(alias = "livingRoom", alias = "Living Room")]
    LivingRoom(FormalRoom),
    #[serde(alias = "diningRoom", alias = "Dining Room")]
    DiningRoom(FormalRoom),
    #[serde(alias = "kitchen")]
    Kitchen(Kitchen),
    #[serde(alias = "hallway")]
    Hallway(Passage),
    #[serde(alias = "entryway")]
    Entryway(Passage),
    #[serde(alias = "office")]
    Office(RoomBasics),
}

impl RoomSpec {
    /// Measurements and surface toggles shared by every room type.
    pub fn basics(&self) -> &RoomBasics {
        match self {
            Self::Bedroom(room) | Self::Office(room) => room,
            Self::Bathroom(bath) => &bath.room,
            Self::LivingRoom(formal) | Self::DiningRoom(formal) => &formal.room,
            Self::Kitchen(kitchen) => &kitchen.room,
            Self::Hallway(passage) | Self::Entryway(passage) => &passage.room,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Bedroom(_) => "Bedroom",
            Self::Bathroom(_) => "Bathroom",
            Self::LivingRoom(_) => "Living Room",
            Self::DiningRoom(_) => "Dining Room",
            Self::Kitchen(_) => "Kitchen",
            Self::Hallway(_) => "Hallway",
            Self::Entryway(_) => "Entryway",
            Self::Office(_) => "Office",
        }
    }
}

/// Fields every room has
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomBasics {
    #[serde(default)]
    pub length: Measure,
    #[serde(default)]
    pub width: Measure,
    /// Zero or absent means the default 8 ft.
    #[serde(default)]
    pub ceiling_height: Measure,
    #[serde(default)]
    pub paint_walls: bool,
    #[serde(default)]
    pub paint_ceiling: bool,
    #[serde(default)]
    pub paint_trim: bool,
    #[serde(default)]
    pub paint_doors_check: bool,
    #[serde(default)]
    pub doors: Count,
    #[serde(default)]
    pub closet_doors: Count,
}

impl RoomBasics {
    /// Ceiling height in feet, with the default applied.
    pub fn effective_ceiling_height(&self) -> Decimal {
        if self.ceiling_height.is_zero() {
            DEFAULT_CEILING_HEIGHT_FT
        } else {
            self.ceiling_height.value()
        }
    }

    pub fn perimeter(&self) -> Decimal {
        (self.length.value() + self.width.value()) * dec!(2)
    }

    pub fn floor_area(&self) -> Decimal {
        self.length.value() * self.width.value()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bathroom {
    #[serde(flatten)]
    pub room: RoomBasics,
    #[serde(default)]
    pub paint_vanity: bool,
    #[serde(default)]
    pub vanity_doors: Count,
    #[serde(default)]
    pub vanity_drawers: Count,
    #[serde(default)]
    pub use_mold_resistant_paint: bool,
}

/// Living and dining rooms
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormalRoom {
    #[serde(flatten)]
    pub room: RoomBasics,
    #[serde(default)]
    pub paint_crown_molding: bool,
    #[serde(default)]
    pub paint_fireplace_mantel: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kitchen {
    #[serde(flatten)]
    pub room: RoomBasics,
    #[serde(default)]
    pub paint_cabinets: bool,
    #[serde(default)]
    pub cabinet_doors: Count,
    #[serde(default)]
    pub cabinet_drawers: Count,
}

/// Hallways and entryways
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Passage {
    #[serde(flatten)]
    pub room: RoomBasics,
    #[serde(default)]
    pub paint_stairwell: bool,
}
