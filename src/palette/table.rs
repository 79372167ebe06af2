//! Logical-to-physical lookup table.
//!
//! Entry `i` holds the physical 256-color index for logical index `i + 17`.
//! The 6x6x6 cube (minus black) is ordered by brightness level, then hue,
//! then saturation, so neighbouring logical indices differ only slightly.
//! The grayscale ramp closes the table.

/// Number of entries (logical 17..=255).
pub const TABLE_LEN: usize = 239;

pub(crate) const PHYSICAL: [u8; TABLE_LEN] = [
    52, 58, 22, 23, 17, 53, 59, 88, 95, 94, 100, 101, //
    64, 28, 65, 29, 30, 66, 24, 18, 60, 54, 90, 96, //
    89, 102, 124, 131, 138, 130, 137, 136, 142, 143, 144, 106, //
    107, 70, 34, 71, 108, 35, 72, 36, 37, 73, 109, 31, //
    67, 25, 19, 61, 103, 55, 97, 91, 127, 133, 139, 126, //
    132, 125, 145, 160, 167, 174, 181, 166, 173, 180, 172, 179, //
    178, 184, 185, 186, 187, 148, 149, 112, 150, 113, 76, 40, //
    77, 114, 151, 41, 78, 42, 115, 79, 43, 44, 80, 116, //
    152, 38, 74, 32, 110, 68, 26, 20, 62, 104, 146, 56, //
    98, 92, 140, 134, 128, 164, 170, 176, 182, 163, 169, 162, //
    175, 168, 161, 188, 196, 203, 210, 217, 224, 202, 209, 216, //
    208, 215, 223, 214, 222, 221, 220, 226, 227, 228, 229, 230, //
    190, 191, 192, 154, 155, 193, 118, 156, 119, 82, 46, 83, //
    120, 157, 194, 47, 84, 121, 48, 85, 158, 49, 122, 86, //
    50, 51, 87, 123, 159, 195, 45, 81, 117, 39, 75, 153, //
    33, 111, 69, 27, 21, 63, 105, 147, 189, 57, 99, 141, //
    93, 135, 183, 129, 177, 171, 165, 201, 207, 213, 219, 225, //
    200, 206, 212, 199, 205, 218, 198, 211, 204, 197, 231, 232, //
    233, 234, 235, 236, 237, 238, 239, 240, 241, 242, 243, 244, //
    245, 246, 247, 248, 249, 250, 251, 252, 253, 254, 255,
];
