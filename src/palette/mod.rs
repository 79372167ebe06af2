//! Color palette remapping
//!
//! Colors are addressed by a *logical* index chosen so that arithmetic on it
//! ("this color minus 2") stays visually close. [`to_physical`] turns a
//! logical index into the terminal's 256-color index.

mod table;

pub use table::TABLE_LEN;

use table::PHYSICAL;

/// A logical color index.
///
/// Signed so offsets like `named::BLUE - 2` never underflow; out-of-range
/// values are clamped by [`to_physical`].
pub type ColorIndex = i32;

/// Highest logical index that passes through unchanged.
pub const PASSTHROUGH_MAX: ColorIndex = 16;

/// Highest logical index with a table entry.
pub const LOGICAL_MAX: ColorIndex = 255;

/// Map a logical color index onto the ANSI 256-color palette.
///
/// Indices `<= 16` are the reserved system colors and are returned as-is
/// (negative input clamps to 0). Anything above 255 clamps to the last entry.
pub fn to_physical(logical: ColorIndex) -> u8 {
    if logical <= PASSTHROUGH_MAX {
        return logical.max(0) as u8;
    }
    let offset = (logical.min(LOGICAL_MAX) - PASSTHROUGH_MAX - 1) as usize;
    PHYSICAL[offset]
}

/// Inverse of [`to_physical`]: the logical index that renders as `physical`.
///
/// Evaluated at compile time for the named colors. Physical indices that
/// are not in the table (only 16, plain black) map to themselves.
pub const fn logical_for(physical: u8) -> ColorIndex {
    if physical as ColorIndex <= PASSTHROUGH_MAX {
        return physical as ColorIndex;
    }
    let mut i = 0;
    while i < TABLE_LEN {
        if PHYSICAL[i] == physical {
            return i as ColorIndex + PASSTHROUGH_MAX + 1;
        }
        i += 1;
    }
    physical as ColorIndex
}

/// Named colors, expressed as logical indices.
pub mod named {
    use super::{logical_for, ColorIndex};

    pub const DARK_BLUE: ColorIndex = logical_for(17);
    pub const BLUE: ColorIndex = logical_for(21);
    pub const DARK_GREEN: ColorIndex = logical_for(22);
    pub const LIGHT_BLUE: ColorIndex = logical_for(27);
    pub const OLIVE_GREEN: ColorIndex = logical_for(34);
    pub const GREEN: ColorIndex = logical_for(46);
    pub const CYAN: ColorIndex = logical_for(51);
    pub const PURPLE: ColorIndex = logical_for(53);
    pub const DARK_ORANGE: ColorIndex = logical_for(130);
    pub const DARK_YELLOW: ColorIndex = logical_for(142);
    pub const LIME: ColorIndex = logical_for(154);
    pub const DARK_RED: ColorIndex = logical_for(160);
    pub const RED: ColorIndex = logical_for(196);
    pub const PINK: ColorIndex = logical_for(201);
    pub const ORANGE: ColorIndex = logical_for(208);
    pub const YELLOW: ColorIndex = logical_for(220);
    pub const BRIGHT_YELLOW: ColorIndex = logical_for(229);
    pub const DARK_GRAY: ColorIndex = logical_for(234);
    pub const MEDIUM_GRAY: ColorIndex = logical_for(240);
    pub const GRAY: ColorIndex = logical_for(250);
    pub const WHITE: ColorIndex = logical_for(255);
}
