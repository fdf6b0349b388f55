//! Quantity aggregation: rooms and exterior surfaces to area, hours and
//! fixed add-on dollars.

use rust_decimal::Decimal;
use serde::Serialize;
use std::ops::AddAssign;

use super::pricing::{InteriorAddonCosts, PricingConfig};
use crate::domain::{EstimateRequest, ExteriorSpec, RoomSpec};

/// Aggregate quantities for a set of specs
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quantities {
    pub paintable_sqft: Decimal,
    pub painting_hours: Decimal,
    /// Before the prep condition multiplier
    pub prep_hours: Decimal,
    pub addon_cogs: Decimal,
    /// Number of specs that contributed
    pub items: usize,
}

impl AddAssign for Quantities {
    fn add_assign(&mut self, rhs: Self) {
        self.paintable_sqft += rhs.paintable_sqft;
        self.painting_hours += rhs.painting_hours;
        self.prep_hours += rhs.prep_hours;
        self.addon_cogs += rhs.addon_cogs;
        self.items += rhs.items;
    }
}

/// Sum the quantities of every spec the project type lets through.
///
/// A missing or unrecognized project type lets nothing through.
pub fn aggregate(request: &EstimateRequest, pricing: &PricingConfig) -> Quantities {
    let mut totals = Quantities::default();

    if request.project_type.is_some_and(|p| p.includes_interior()) {
        for room in &request.rooms {
            totals += room_quantities(room, pricing);
        }
    }

    if request.project_type.is_some_and(|p| p.includes_exterior()) {
        for item in &request.exterior_items {
            totals += exterior_quantities(item, pricing);
        }
    }

    totals
}

pub fn room_quantities(room: &RoomSpec, pricing: &PricingConfig) -> Quantities {
    let basics = room.basics();
    let height = basics.effective_ceiling_height();

    let mut sqft = Decimal::ZERO;
    if basics.paint_walls {
        sqft += basics.perimeter() * height;
    }
    if basics.paint_ceiling {
        sqft += basics.floor_area();
    }

    // High ceilings slow the painting down; they do not add area
    let mut painting_hours = sqft * pricing.coats * pricing.ceiling_multiplier(height)
        / pricing.painting_sqft_per_hour;
    if basics.paint_trim {
        painting_hours += basics.perimeter() / pricing.interior_trim_lft_per_hour;
    }

    Quantities {
        paintable_sqft: sqft,
        painting_hours,
        prep_hours: pricing.base_prep_hours_per_room,
        addon_cogs: room_addon_cogs(room, &pricing.interior_addons),
        items: 1,
    }
}

fn room_addon_cogs(room: &RoomSpec, costs: &InteriorAddonCosts) -> Decimal {
    let basics = room.basics();

    let mut total = Decimal::ZERO;
    if basics.paint_doors_check {
        total += basics.doors.value() * costs.door;
        total += basics.closet_doors.value() * costs.closet_door;
    }

    total += match room {
        RoomSpec::Bedroom(_) | RoomSpec::Office(_) => Decimal::ZERO,
        RoomSpec::Bathroom(bath) => {
            let vanity_pieces = bath.vanity_doors.value() + bath.vanity_drawers.value();
            flat(bath.use_mold_resistant_paint, costs.mold_resistant)
                + flat(bath.paint_vanity, vanity_pieces * costs.vanity_piece)
        }
        RoomSpec::LivingRoom(formal) | RoomSpec::DiningRoom(formal) => {
            flat(formal.paint_crown_molding, costs.crown_molding)
                + flat(formal.paint_fireplace_mantel, costs.fireplace_mantel)
        }
        RoomSpec::Kitchen(kitchen) => {
            let cabinet_pieces = kitchen.cabinet_doors.value() + kitchen.cabinet_drawers.value();
            flat(kitchen.paint_cabinets, cabinet_pieces * costs.cabinet_piece)
        }
        RoomSpec::Hallway(passage) | RoomSpec::Entryway(passage) => {
            flat(passage.paint_stairwell, costs.stairwell)
        }
    };

    total
}

pub fn exterior_quantities(item: &ExteriorSpec, pricing: &PricingConfig) -> Quantities {
    let sqft = item.sqft.value();

    let mut painting_hours = sqft
        * pricing.coats
        * pricing.siding_multiplier(item.siding)
        * pricing.story_multiplier(item.stories)
        / pricing.painting_sqft_per_hour;
    painting_hours += item.trim_lft.value() / pricing.exterior_trim_lft_per_hour;

    let costs = &pricing.exterior_addons;
    let addon_cogs = item.doors.value() * costs.door
        + item.shutters.value() * costs.shutter
        + item.window_frames.value() * costs.window_frame
        + item.gutter_lft.value() * costs.gutter_per_lft
        + item.deck_sqft.value() * costs.deck_stain_per_sqft;

    Quantities {
        paintable_sqft: sqft,
        painting_hours,
        prep_hours: pricing.base_prep_hours_exterior,
        addon_cogs,
        items: 1,
    }
}

fn flat(selected: bool, cost: Decimal) -> Decimal {
    if selected {
        cost
    } else {
        Decimal::ZERO
    }
}
