//! Pricing table for the estimator.
//!
//! One immutable `PricingConfig` is built at startup (built-in defaults or a
//! JSON override file), wrapped in an `Arc` and handed to both the aggregator
//! and the synthesizer. `GET /pricing` serves the same instance.

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::domain::{PaintQuality, PrepCondition, Siding, Stories};

#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),

    #[error("{0} must not be negative")]
    Negative(&'static str),

    #[error("lowMultiplier must not exceed highMultiplier")]
    InvertedRange,

    #[error("conditionMultipliers must satisfy good <= fair <= poor")]
    UnorderedConditions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaintCosts {
    pub good: Decimal,
    pub better: Decimal,
    pub best: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionMultipliers {
    pub good: Decimal,
    pub fair: Decimal,
    pub poor: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidingMultipliers {
    pub vinyl: Decimal,
    pub wood: Decimal,
    pub stucco: Decimal,
    pub brick: Decimal,
    pub metal: Decimal,
    pub fiber_cement: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryMultipliers {
    pub one: Decimal,
    pub two: Decimal,
    pub three: Decimal,
}

/// Fixed dollar costs for interior line items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteriorAddonCosts {
    pub door: Decimal,
    pub closet_door: Decimal,
    /// Flat, once per bathroom
    pub mold_resistant: Decimal,
    pub vanity_piece: Decimal,
    pub crown_molding: Decimal,
    pub fireplace_mantel: Decimal,
    pub stairwell: Decimal,
    pub cabinet_piece: Decimal,
}

/// Fixed dollar costs for exterior line items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExteriorAddonCosts {
    pub door: Decimal,
    pub shutter: Decimal,
    pub window_frame: Decimal,
    pub gutter_per_lft: Decimal,
    pub deck_stain_per_sqft: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingConfig {
    pub hourly_labor_cost: Decimal,
    pub paint_cost_per_gallon: PaintCosts,
    /// Fraction of paint cost added for supplies (0.15 = 15%)
    pub supplies_percentage: Decimal,
    pub painting_sqft_per_hour: Decimal,
    pub coverage_sqft_per_gallon: Decimal,
    pub coats: Decimal,
    pub base_prep_hours_per_room: Decimal,
    pub base_prep_hours_exterior: Decimal,
    pub interior_trim_lft_per_hour: Decimal,
    pub exterior_trim_lft_per_hour: Decimal,
    pub condition_multipliers: ConditionMultipliers,
    /// Ceilings strictly above this height get the high-ceiling multiplier
    pub high_ceiling_threshold_ft: Decimal,
    pub high_ceiling_multiplier: Decimal,
    pub siding_multipliers: SidingMultipliers,
    pub story_multipliers: StoryMultipliers,
    pub interior_addons: InteriorAddonCosts,
    pub exterior_addons: ExteriorAddonCosts,
    pub profit_markup: Decimal,
    pub low_multiplier: Decimal,
    pub high_multiplier: Decimal,
    pub rounding_increment: Decimal,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            hourly_labor_cost: dec!(40),
            paint_cost_per_gallon: PaintCosts {
                good: dec!(30),
                better: dec!(40),
                best: dec!(55),
            },
            supplies_percentage: dec!(0.15),
            painting_sqft_per_hour: dec!(175),
            coverage_sqft_per_gallon: dec!(350),
            coats: dec!(2),
            base_prep_hours_per_room: dec!(2.0),
            base_prep_hours_exterior: dec!(4.0),
            interior_trim_lft_per_hour: dec!(40),
            exterior_trim_lft_per_hour: dec!(30),
            condition_multipliers: ConditionMultipliers {
                good: dec!(1.0),
                fair: dec!(1.5),
                poor: dec!(2.5),
            },
            high_ceiling_threshold_ft: dec!(10),
            high_ceiling_multiplier: dec!(1.20),
            siding_multipliers: SidingMultipliers {
                vinyl: dec!(1.0),
                wood: dec!(1.2),
                stucco: dec!(1.3),
                brick: dec!(1.4),
                metal: dec!(1.1),
                fiber_cement: dec!(1.15),
            },
            story_multipliers: StoryMultipliers {
                one: dec!(1.0),
                two: dec!(1.25),
                three: dec!(1.5),
            },
            interior_addons: InteriorAddonCosts {
                door: dec!(50),
                closet_door: dec!(40),
                mold_resistant: dec!(50),
                vanity_piece: dec!(25),
                crown_molding: dec!(150),
                fireplace_mantel: dec!(100),
                stairwell: dec!(200),
                cabinet_piece: dec!(60),
            },
            exterior_addons: ExteriorAddonCosts {
                door: dec!(75),
                shutter: dec!(40),
                window_frame: dec!(35),
                gutter_per_lft: dec!(2.50),
                deck_stain_per_sqft: dec!(1.50),
            },
            profit_markup: dec!(2.0),
            low_multiplier: dec!(0.95),
            high_multiplier: dec!(1.20),
            rounding_increment: dec!(25),
        }
    }
}

impl PricingConfig {
    /// Load a complete pricing table from a JSON file and validate it.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read pricing config {}", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid pricing config {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Rejected pricing config {}", path.display()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), PricingError> {
        let positive = [
            ("hourlyLaborCost", self.hourly_labor_cost),
            ("paintingSqftPerHour", self.painting_sqft_per_hour),
            ("coverageSqftPerGallon", self.coverage_sqft_per_gallon),
            ("coats", self.coats),
            ("interiorTrimLftPerHour", self.interior_trim_lft_per_hour),
            ("exteriorTrimLftPerHour", self.exterior_trim_lft_per_hour),
            ("profitMarkup", self.profit_markup),
            ("lowMultiplier", self.low_multiplier),
            ("highMultiplier", self.high_multiplier),
            ("roundingIncrement", self.rounding_increment),
        ];
        if let Some((name, _)) = positive.iter().find(|(_, v)| *v <= Decimal::ZERO) {
            return Err(PricingError::NotPositive(*name));
        }

        let non_negative = [
            ("paintCostPerGallon.good", self.paint_cost_per_gallon.good),
            ("paintCostPerGallon.better", self.paint_cost_per_gallon.better),
            ("paintCostPerGallon.best", self.paint_cost_per_gallon.best),
            ("suppliesPercentage", self.supplies_percentage),
            ("basePrepHoursPerRoom", self.base_prep_hours_per_room),
            ("basePrepHoursExterior", self.base_prep_hours_exterior),
            ("highCeilingMultiplier", self.high_ceiling_multiplier),
            ("conditionMultipliers.good", self.condition_multipliers.good),
            ("conditionMultipliers.fair", self.condition_multipliers.fair),
            ("conditionMultipliers.poor", self.condition_multipliers.poor),
            ("sidingMultipliers.vinyl", self.siding_multipliers.vinyl),
            ("sidingMultipliers.wood", self.siding_multipliers.wood),
            ("sidingMultipliers.stucco", self.siding_multipliers.stucco),
            ("sidingMultipliers.brick", self.siding_multipliers.brick),
            ("sidingMultipliers.metal", self.siding_multipliers.metal),
            ("sidingMultipliers.fiberCement", self.siding_multipliers.fiber_cement),
            ("storyMultipliers.one", self.story_multipliers.one),
            ("storyMultipliers.two", self.story_multipliers.two),
            ("storyMultipliers.three", self.story_multipliers.three),
            ("interiorAddons.door", self.interior_addons.door),
            ("interiorAddons.closetDoor", self.interior_addons.closet_door),
            ("interiorAddons.moldResistant", self.interior_addons.mold_resistant),
            ("interiorAddons.vanityPiece", self.interior_addons.vanity_piece),
            ("interiorAddons.crownMolding", self.interior_addons.crown_molding),
            ("interiorAddons.fireplaceMantel", self.interior_addons.fireplace_mantel),
            ("interiorAddons.stairwell", self.interior_addons.stairwell),
            ("interiorAddons.cabinetPiece", self.interior_addons.cabinet_piece),
            ("exteriorAddons.door", self.exterior_addons.door),
            ("exteriorAddons.shutter", self.exterior_addons.shutter),
            ("exteriorAddons.windowFrame", self.exterior_addons.window_frame),
            ("exteriorAddons.gutterPerLft", self.exterior_addons.gutter_per_lft),
            ("exteriorAddons.deckStainPerSqft", self.exterior_addons.deck_stain_per_sqft),
        ];
        if let Some((name, _)) = non_negative.iter().find(|(_, v)| v.is_sign_negative()) {
            return Err(PricingError::Negative(*name));
        }

        if self.low_multiplier > self.high_multiplier {
            return Err(PricingError::InvertedRange);
        }

        let conditions = &self.condition_multipliers;
        if conditions.good > conditions.fair || conditions.fair > conditions.poor {
            return Err(PricingError::UnorderedConditions);
        }

        Ok(())
    }

    /// Prep labor multiplier. No selection or an unrecognized one is 1.0.
    pub fn condition_multiplier(&self, prep: Option<PrepCondition>) -> Decimal {
        match prep {
            Some(PrepCondition::Good) => self.condition_multipliers.good,
            Some(PrepCondition::Fair) => self.condition_multipliers.fair,
            Some(PrepCondition::Poor) => self.condition_multipliers.poor,
            Some(PrepCondition::Unknown) | None => Decimal::ONE,
        }
    }

    /// Cost per gallon for a tier, `None` when no usable tier is selected.
    pub fn paint_cost(&self, quality: Option<PaintQuality>) -> Option<Decimal> {
        match quality? {
            PaintQuality::Good => Some(self.paint_cost_per_gallon.good),
            PaintQuality::Better => Some(self.paint_cost_per_gallon.better),
            PaintQuality::Best => Some(self.paint_cost_per_gallon.best),
            PaintQuality::Unknown => None,
        }
    }

    pub fn siding_multiplier(&self, siding: Siding) -> Decimal {
        let m = &self.siding_multipliers;
        match siding {
            Siding::Vinyl => m.vinyl,
            Siding::Wood => m.wood,
            Siding::Stucco => m.stucco,
            Siding::Brick => m.brick,
            Siding::Metal => m.metal,
            Siding::FiberCement => m.fiber_cement,
            Siding::Unknown => Decimal::ONE,
        }
    }

    pub fn story_multiplier(&self, stories: Stories) -> Decimal {
        match stories {
            Stories::One => self.story_multipliers.one,
            Stories::Two => self.story_multipliers.two,
            Stories::Three => self.story_multipliers.three,
            Stories::Unknown => Decimal::ONE,
        }
    }

    pub fn ceiling_multiplier(&self, ceiling_height: Decimal) -> Decimal {
        if ceiling_height > self.high_ceiling_threshold_ft {
            self.high_ceiling_multiplier
        } else {
            Decimal::ONE
        }
    }
}
