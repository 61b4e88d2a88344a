//! Viewport clamping for the pointer-anchored context menu.
//!
//! The menu's bounding box is estimated from a fixed width and a fixed
//! per-row height rather than measured after layout; entries are assumed
//! uniform-height by contract.

/// Fixed estimated menu width, in CSS pixels.
pub const MENU_WIDTH: i32 = 220;
/// Fixed estimated per-entry row height, in CSS pixels.
pub const MENU_ROW_HEIGHT: i32 = 32;
/// Minimum gap kept between the menu and the viewport edges.
pub const VIEWPORT_MARGIN: i32 = 8;

/// Viewport dimensions at the time the menu opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportSize {
    /// Viewport width in CSS pixels.
    pub width: i32,
    /// Viewport height in CSS pixels.
    pub height: i32,
}

/// Top-left corner the context menu is rendered at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuPosition {
    /// Clamped x coordinate.
    pub x: i32,
    /// Clamped y coordinate.
    pub y: i32,
}

/// Estimated menu height for `entry_count` uniform rows.
pub fn estimated_menu_height(entry_count: usize) -> i32 {
    entry_count as i32 * MENU_ROW_HEIGHT
}

/// Clamps the pointer coordinates so the estimated menu box never
/// overflows the viewport.
pub fn clamp_menu_position(
    x: i32,
    y: i32,
    entry_count: usize,
    viewport: ViewportSize,
) -> MenuPosition {
    let height = estimated_menu_height(entry_count);
    let max_x = (viewport.width - MENU_WIDTH - VIEWPORT_MARGIN).max(VIEWPORT_MARGIN);
    let max_y = (viewport.height - height - VIEWPORT_MARGIN).max(VIEWPORT_MARGIN);
    MenuPosition {
        x: x.clamp(VIEWPORT_MARGIN, max_x),
        y: y.clamp(VIEWPORT_MARGIN, max_y),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const VIEWPORT: ViewportSize = ViewportSize {
        width: 1000,
        height: 800,
    };

    #[test]
    fn pointer_near_bottom_right_corner_is_clamped() {
        let position = clamp_menu_position(950, 780, 5, VIEWPORT);
        assert_eq!(position, MenuPosition { x: 772, y: 632 });
    }

    #[test]
    fn pointer_well_inside_the_viewport_is_untouched() {
        let position = clamp_menu_position(100, 120, 5, VIEWPORT);
        assert_eq!(position, MenuPosition { x: 100, y: 120 });
    }

    #[test]
    fn menu_taller_than_the_viewport_pins_to_the_top_margin() {
        let position = clamp_menu_position(10, 700, 40, VIEWPORT);
        assert_eq!(position.y, VIEWPORT_MARGIN);
    }
}
