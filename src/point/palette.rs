//! Process-wide palette of colors accepted by [`AdvancedPoint`].
//!
//! The palette starts with [`BUILTIN_COLORS`]. Colors appended through
//! [`add_color`] stay available to every later construction until
//! [`reset_palette`] is called.
//!
//! [`AdvancedPoint`]: super::AdvancedPoint

use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Colors every palette starts with.
pub const BUILTIN_COLORS: [&str; 7] = ["red", "green", "blue", "pink", "orange", "black", "white"];

#[cfg(feature = "std")]
static ADDED: std::sync::Mutex<Vec<String>> = std::sync::Mutex::new(Vec::new());

#[cfg(all(not(feature = "std"), feature = "alloc"))]
static ADDED: spin::Mutex<Vec<String>> = spin::Mutex::new(Vec::new());

#[cfg(feature = "std")]
fn added() -> std::sync::MutexGuard<'static, Vec<String>> {
    ADDED
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn added() -> spin::MutexGuard<'static, Vec<String>> {
    ADDED.lock()
}

/// Returns whether `color` is in the palette.
#[must_use]
pub fn is_known_color(color: &str) -> bool {
    BUILTIN_COLORS.contains(&color) || added().iter().any(|c| c == color)
}

/// Appends `color` to the palette.
///
/// Returns `false` if the color was already known.
pub fn add_color(color: &str) -> bool {
    if BUILTIN_COLORS.contains(&color) {
        return false;
    }

    let mut colors = added();
    if colors.iter().any(|c| c == color) {
        return false;
    }

    colors.push(color.to_string());
    drop(colors);
    log::debug!("added color {color} to the palette");
    true
}

/// Returns every color in the palette, built-ins first.
#[must_use]
pub fn palette() -> Vec<String> {
    BUILTIN_COLORS
        .iter()
        .map(|c| (*c).to_string())
        .chain(added().iter().cloned())
        .collect()
}

/// Drops every added color, leaving only [`BUILTIN_COLORS`].
pub fn reset_palette() {
    added().clear();
}
