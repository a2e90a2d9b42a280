use crate::foundation::core::Sex;

/// Number of sprite rows that carry shoes.
pub const SHOE_ROWS: usize = 21;

/// Visible shoe height per row in the female overrides.
pub const FEMALE_SHOE_HEIGHTS: [u32; SHOE_ROWS] = [
    15, 16, 14, 13, 12, 16, 16, 15, 16, 10, 13, 13, 13, 14, 14, 11, 14, 14, 14, 16, 13,
];

/// Visible shoe height per row in the male overrides.
pub const MALE_SHOE_HEIGHTS: [u32; SHOE_ROWS] = [
    11, 16, 15, 14, 13, 16, 16, 14, 16, 12, 14, 14, 15, 15, 16, 13, 15, 16, 16, 16, 15,
];

/// Per-row shoe heights for `sex`.
pub fn shoe_heights(sex: Sex) -> &'static [u32; SHOE_ROWS] {
    match sex {
        Sex::Male => &MALE_SHOE_HEIGHTS,
        Sex::Female => &FEMALE_SHOE_HEIGHTS,
    }
}
