use crate::domain::models::customization::{
    CustomizationOverride, DEFAULT_BADGE_STYLE, DEFAULT_HERO_IMAGE, DEFAULT_OVERLAY_GRADIENT,
    DEFAULT_TEXT_COLOR,
};
use crate::domain::models::resort::ResortRecord;
use crate::domain::models::view::{ComposedView, DerivedFields, ResolvedStyle, SelectionSummary};
use crate::domain::services::derive;

/// Merges catalog, override and derived data into the render-ready view.
///
/// The merge is field-level, never whole-record replacement: each display
/// field takes the override value when present, otherwise the catalog
/// value, otherwise a derived default. An override that is absent or not
/// marked active leaves the catalog data untouched. Pure and idempotent;
/// the result is recomputed per request and never persisted.
pub fn compose(
    record: &ResortRecord,
    overlay: Option<&CustomizationOverride>,
    derived: &DerivedFields,
) -> ComposedView {
    let overlay = overlay.filter(|o| o.is_customized);

    let pick = |field: Option<&String>, fallback: &str| {
        field.cloned().unwrap_or_else(|| fallback.to_string())
    };

    let image = pick(overlay.and_then(|o| o.image.as_ref()), &record.image);
    let style = resolve_style(overlay, &image);

    ComposedView {
        id: record.id.clone(),
        name: pick(overlay.and_then(|o| o.name.as_ref()), &record.name),
        location: pick(overlay.and_then(|o| o.location.as_ref()), &record.location),
        region: pick(overlay.and_then(|o| o.region.as_ref()), &record.region),
        description: pick(overlay.and_then(|o| o.description.as_ref()), &record.description),
        image,
        lifts: record.lifts,
        runs: record.runs,
        vertical: record.vertical,
        price: record.price.clone(),
        difficulty: record.difficulty,
        amenities: record.amenities.clone(),
        rating: record.rating,
        reviews: record.reviews,
        season: record.season.clone(),
        snow_depth: overlay.and_then(|o| o.snow_depth).unwrap_or(record.snow_depth),
        temperature: derived.temperature,
        snow_report: derived.snow_report,
        terrain: derived.terrain.clone(),
        highlights: derived.highlights.clone(),
        operating_hours: record.operating_hours.clone(),
        contact_info: record.contact_info.clone(),
        pricing: record.pricing,
        is_open: record.is_open,
        weather_condition: record.weather_condition.clone(),
        risk_level: record.risk_level,
        style,
        is_customized: overlay.is_some(),
    }
}

/// The minimal selection result handed to picker callbacks.
pub fn selection_summary(record: &ResortRecord) -> SelectionSummary {
    SelectionSummary {
        id: record.id.clone(),
        name: record.name.clone(),
        location: record.location.clone(),
        is_open: record.is_open,
        temperature: derive::temperature_for_depth(record.snow_depth),
        weather_condition: record.weather_condition.clone(),
    }
}

fn resolve_style(overlay: Option<&CustomizationOverride>, effective_image: &str) -> ResolvedStyle {
    let hints = overlay.map(|o| &o.customization);
    let pick = |field: Option<&String>, fallback: &str| {
        field.cloned().unwrap_or_else(|| fallback.to_string())
    };

    let hero_fallback = if effective_image.is_empty() { DEFAULT_HERO_IMAGE } else { effective_image };
    ResolvedStyle {
        hero_image: pick(hints.and_then(|h| h.hero_image.as_ref()), hero_fallback),
        overlay_gradient: pick(hints.and_then(|h| h.overlay_gradient.as_ref()), DEFAULT_OVERLAY_GRADIENT),
        text_color: pick(hints.and_then(|h| h.text_color.as_ref()), DEFAULT_TEXT_COLOR),
        badge_style: pick(hints.and_then(|h| h.badge_style.as_ref()), DEFAULT_BADGE_STYLE),
    }
}
