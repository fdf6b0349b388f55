//! Cost synthesis: aggregate quantities to COGS, price and display range.

use rust_decimal::prelude::*;
use serde::Serialize;

use super::aggregate::{aggregate, Quantities};
use super::pricing::PricingConfig;
use crate::domain::{EstimateRequest, EstimateResult, PaintQuality, PrepCondition};

/// Every intermediate figure behind a displayed range
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub quantities: Quantities,
    /// Prep hours after the condition multiplier
    pub prep_hours: Decimal,
    pub labor_hours: Decimal,
    pub labor_cogs: Decimal,
    pub gallons: Decimal,
    pub material_cogs: Decimal,
    pub addon_cogs: Decimal,
    pub total_cogs: Decimal,
    pub price: Decimal,
    pub range: EstimateResult,
}

pub fn synthesize(
    quantities: &Quantities,
    prep: Option<PrepCondition>,
    quality: Option<PaintQuality>,
    pricing: &PricingConfig,
) -> CostBreakdown {
    let prep_hours = quantities.prep_hours * pricing.condition_multiplier(prep);
    let labor_hours = quantities.painting_hours + prep_hours;
    let labor_cogs = labor_hours * pricing.hourly_labor_cost;

    let (gallons, material_cogs) = match pricing.paint_cost(quality) {
        Some(cost_per_gallon) => {
            let gallons =
                (quantities.paintable_sqft * pricing.coats / pricing.coverage_sqft_per_gallon).ceil();
            let material = gallons * cost_per_gallon * (Decimal::ONE + pricing.supplies_percentage);
            (gallons, material)
        }
        None => (Decimal::ZERO, Decimal::ZERO),
    };

    let total_cogs = labor_cogs + material_cogs + quantities.addon_cogs;
    let price = total_cogs * pricing.profit_markup;

    let range = EstimateResult {
        low: round_to_increment(price * pricing.low_multiplier, pricing.rounding_increment),
        high: round_to_increment(price * pricing.high_multiplier, pricing.rounding_increment),
    };

    CostBreakdown {
        quantities: *quantities,
        prep_hours,
        labor_hours,
        labor_cogs,
        gallons,
        material_cogs,
        addon_cogs: quantities.addon_cogs,
        total_cogs,
        price,
        range,
    }
}

/// Round half-up to the nearest multiple of `increment`, in whole dollars.
pub fn round_to_increment(amount: Decimal, increment: Decimal) -> i64 {
    let steps = (amount.max(Decimal::ZERO) / increment)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    (steps * increment).trunc().to_i64().unwrap_or(i64::MAX)
}

/// Full breakdown for a request, `None` when no spec made it through the
/// project type gate.
pub fn evaluate(request: &EstimateRequest, pricing: &PricingConfig) -> Option<CostBreakdown> {
    let quantities = aggregate(request, pricing);
    if quantities.items == 0 {
        return None;
    }

    Some(synthesize(
        &quantities,
        request.selected_prep,
        request.selected_paint_quality,
        pricing,
    ))
}

/// Price range for a request. Nothing to price yields `{0, 0}`.
pub fn estimate(request: &EstimateRequest, pricing: &PricingConfig) -> EstimateResult {
    match evaluate(request, pricing) {
        Some(breakdown) => {
            tracing::debug!(
                items = breakdown.quantities.items,
                sqft = %breakdown.quantities.paintable_sqft,
                labor_hours = %breakdown.labor_hours.round_dp(2),
                gallons = %breakdown.gallons,
                total_cogs = %breakdown.total_cogs.round_dp(2),
                low = breakdown.range.low,
                high = breakdown.range.high,
                "Estimate computed"
            );
            breakdown.range
        }
        None => EstimateResult::NOT_READY,
    }
}
