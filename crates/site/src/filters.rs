//! Template filters shared across the site's pages.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Renders a numeric rating as whole-star glyphs, capped at five.
///
/// Usage in templates: `{{ testimonial.rating|stars }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn stars(rating: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let count = rating.to_string().parse::<usize>().unwrap_or(0);
    Ok("★".repeat(count.min(5)))
}

/// Content hash baked into the stylesheet filename, computed by the
/// build script from `static/css/main.css`.
///
/// Usage in templates: `{{ ""|css_hash }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn css_hash(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<&'static str> {
    Ok(env!("CSS_HASH"))
}

/// Current year, for the footer copyright line.
///
/// Usage in templates: `{{ ""|current_year }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}
