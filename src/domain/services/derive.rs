use crate::domain::models::customization::CustomizationOverride;
use crate::domain::models::resort::ResortRecord;
use crate::domain::models::view::{DerivedFields, SnowReport, TerrainInfo};
use crate::domain::services::profile;

/// Reported fresh snowfall over the last 24 hours, in cm. The upstream
/// report feed does not reach this service, so the figure is fixed.
pub const FRESH_SNOWFALL_24H_CM: u32 = 15;

const MIN_TEMPERATURE_C: f64 = -15.0;

/// Computes the presentation-only fields for a resort. Pure; any field
/// present on an active override takes precedence over the catalog value.
pub fn compute_derived(
    record: &ResortRecord,
    overlay: Option<&CustomizationOverride>,
) -> DerivedFields {
    let overlay = overlay.filter(|o| o.is_customized);
    let snow_depth = overlay
        .and_then(|o| o.snow_depth)
        .unwrap_or(record.snow_depth);

    let temperature = overlay
        .and_then(|o| o.temperature)
        .unwrap_or_else(|| temperature_for_depth(snow_depth));

    let extras = profile::extras(&record.id);

    DerivedFields {
        temperature,
        snow_report: snow_report(snow_depth),
        terrain: TerrainInfo {
            skiable: extras.skiable,
            longest_run: extras.longest_run.to_string(),
            base_elevation: extras.base_elevation,
            summit_elevation: extras.summit_elevation,
        },
        highlights: extras.highlights.iter().map(|h| h.to_string()).collect(),
    }
}

/// Estimated air temperature from the snow base, clamped at -15°C.
pub fn temperature_for_depth(snow_depth: u32) -> f64 {
    MIN_TEMPERATURE_C.max(-3.0 - snow_depth as f64 / 25.0)
}

pub fn snow_report(snow_depth: u32) -> SnowReport {
    SnowReport {
        // 70% of the summit depth, rounded down. Integer math keeps the
        // figure exact where 0.7 * depth would land just below a whole cm.
        base: snow_depth * 7 / 10,
        summit: snow_depth,
        fresh24h: FRESH_SNOWFALL_24H_CM,
        season: snow_depth + 105,
    }
}
