//! Fixed color palette cycled by plane index

/// The 15 plane colors: black, the six pure/combined primaries, white,
/// then seven half-intensity variants.
pub const PALETTE: [[u8; 3]; 15] = [
    [0, 0, 0],
    [255, 0, 0],
    [0, 255, 0],
    [0, 0, 255],
    [255, 255, 0],
    [255, 0, 255],
    [0, 255, 255],
    [255, 255, 255],
    [127, 0, 0],
    [0, 127, 0],
    [0, 0, 127],
    [127, 127, 0],
    [127, 0, 127],
    [0, 127, 127],
    [127, 127, 127],
];

/// Color for the plane at `plane_index`, cycling through the palette.
pub fn color_for(plane_index: usize) -> [u8; 3] {
    PALETTE[plane_index % PALETTE.len()]
}
