use serde::{Deserialize, Serialize};

pub const COURSE_HOLES: usize = 18;
pub const PAR_MIN: i32 = 3;
pub const PAR_MAX: i32 = 5;
pub const SLOPE_MIN: i32 = 55;
pub const SLOPE_MAX: i32 = 155;
pub const STANDARD_SLOPE: i32 = 113;

/// Fixed palette for tee box colors; a course may use each color once.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TeeColor {
    Black,
    Gold,
    Blue,
    White,
    Green,
    Yellow,
    Red,
    Orange,
}

impl TeeColor {
    pub const PALETTE: [TeeColor; 8] = [
        TeeColor::Black,
        TeeColor::Gold,
        TeeColor::Blue,
        TeeColor::White,
        TeeColor::Green,
        TeeColor::Yellow,
        TeeColor::Red,
        TeeColor::Orange,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TeeColor::Black => "black",
            TeeColor::Gold => "gold",
            TeeColor::Blue => "blue",
            TeeColor::White => "white",
            TeeColor::Green => "green",
            TeeColor::Yellow => "yellow",
            TeeColor::Red => "red",
            TeeColor::Orange => "orange",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HoleInfo {
    pub number: i32,
    /// Expected strokes, 3 through 5.
    pub par: i32,
    /// Stroke index, unique across the 18 holes, 1 through 18.
    pub index: i32,
    pub range_yards: i32,
    pub range_meters: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TeeBox {
    pub id: String,
    pub color: TeeColor,
    pub men_slope: i32,
    pub women_slope: i32,
}

/// Course record used by course authoring. Persisted as a whole document,
/// unversioned; edits overwrite the previous value.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GolfCourse {
    pub course_id: String,
    pub name: String,
    pub holes: Vec<HoleInfo>,
    pub tee_boxes: Vec<TeeBox>,
}

impl GolfCourse {
    /// Course par is always derived from the holes, never stored.
    #[must_use]
    pub fn par(&self) -> i32 {
        crate::course::calculate_total_par(&self.holes).total
    }
}
