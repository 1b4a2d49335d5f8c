//! Per-operation bounds used by request validation.

/// Earliest release year accepted when creating a movie.
pub const DEFAULT_CREATE_MIN_YEAR: i32 = 1850;
/// Earliest release year accepted when updating a movie.
pub const DEFAULT_UPDATE_MIN_YEAR: i32 = 1888;

/// Release-year floors for create and update.
///
/// The two floors differ by default; both are carried here so the divergence is
/// visible in one place and can be aligned through configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct YearLimits {
    pub create_min: i32,
    pub update_min: i32,
}

impl Default for YearLimits {
    fn default() -> Self {
        Self {
            create_min: DEFAULT_CREATE_MIN_YEAR,
            update_min: DEFAULT_UPDATE_MIN_YEAR,
        }
    }
}
