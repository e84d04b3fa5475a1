//! Palette reset test, kept in its own binary so no other test sees the
//! palette change under it.

use deckhand::AdvancedPoint;
use deckhand::point::{BUILTIN_COLORS, add_color, palette, reset_palette};

#[test]
fn reset_restores_builtin_colors() {
    add_color("amber");
    add_color("cyan");
    assert_eq!(palette().len(), BUILTIN_COLORS.len() + 2);

    reset_palette();
    assert_eq!(palette(), BUILTIN_COLORS);
    assert!(AdvancedPoint::new(0.0, 0.0, "cyan").is_err());
    assert!(AdvancedPoint::new(0.0, 0.0, "white").is_ok());
}
