//! Hex coordinate system for the umpire board (cube coordinates)
//!
//! Cells are named by letter-number labels such as `C4`. The letter is the
//! cube `q` column (`A` = 0) and the number is the cube `s` component plus
//! one, so `A1` is the origin and `r` is derived as `-q - s`.

use std::fmt;
use std::str::FromStr;

use glam::Vec2;
use nom::character::complete::{digit1, satisfy};
use nom::combinator::all_consuming;
use nom::{IResult, Parser};
use serde::{Deserialize, Serialize};

use crate::battle::constants::BOARD_COLUMNS;
use crate::core::error::{Result, UmpireError};

/// Largest row number a label may carry; keeps every cube component in `i32`
pub const MAX_ROW: i64 = (i32::MAX - BOARD_COLUMNS) as i64;

/// Cube hex coordinate
///
/// Only triples with `q + r + s == 0` name a cell. Fields are public so that
/// rendering code can build candidates freely; `is_valid` checks the
/// constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CubeCoord {
    pub q: i32,
    pub r: i32,
    pub s: i32,
}

impl CubeCoord {
    pub fn new(q: i32, r: i32, s: i32) -> Self {
        Self { q, r, s }
    }

    pub fn is_valid(&self) -> bool {
        self.q as i64 + self.r as i64 + self.s as i64 == 0
    }

    /// Manhattan distance in hex space
    pub fn distance(&self, other: &Self) -> u32 {
        let dq = (self.q as i64 - other.q as i64).unsigned_abs();
        let dr = (self.r as i64 - other.r as i64).unsigned_abs();
        let ds = (self.s as i64 - other.s as i64).unsigned_abs();
        ((dq + dr + ds) / 2) as u32
    }

    /// Get all 6 neighboring cube coordinates
    pub fn neighbors(&self) -> [CubeCoord; 6] {
        [
            CubeCoord::new(self.q + 1, self.r - 1, self.s),
            CubeCoord::new(self.q + 1, self.r, self.s - 1),
            CubeCoord::new(self.q, self.r + 1, self.s - 1),
            CubeCoord::new(self.q - 1, self.r + 1, self.s),
            CubeCoord::new(self.q - 1, self.r, self.s + 1),
            CubeCoord::new(self.q, self.r - 1, self.s + 1),
        ]
    }
}

/// A validated board label such as `C4`
///
/// Serialized as its string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexLabel {
    /// Column index, 0 for `A`
    column: u8,
    /// 1-based row number
    row: u32,
}

/// Split a label into its column letter and row digits
fn label_parts(input: &str) -> IResult<&str, (char, &str)> {
    all_consuming((satisfy(|c: char| c.is_ascii_uppercase()), digit1)).parse(input)
}

impl HexLabel {
    /// Parse a label; must match `[A-Z][1-9][0-9]*`
    pub fn parse(label: &str) -> Result<Self> {
        let invalid = || UmpireError::InvalidLabel(label.to_string());

        let (_, (column, digits)) = label_parts(label).map_err(|_| invalid())?;
        if digits.starts_with('0') {
            return Err(invalid());
        }
        let row: i64 = digits.parse().map_err(|_| invalid())?;
        if row > MAX_ROW {
            return Err(invalid());
        }

        Ok(Self {
            column: column as u8 - b'A',
            row: row as u32,
        })
    }

    /// Build the label naming a cube coordinate
    pub fn from_cube(cube: CubeCoord) -> Result<Self> {
        let invalid = UmpireError::InvalidCube {
            q: cube.q,
            r: cube.r,
            s: cube.s,
        };

        if !cube.is_valid()
            || !(0..BOARD_COLUMNS).contains(&cube.q)
            || cube.s < 0
            || cube.s as i64 >= MAX_ROW
        {
            return Err(invalid);
        }

        Ok(Self {
            column: cube.q as u8,
            row: cube.s as u32 + 1,
        })
    }

    pub fn cube(&self) -> CubeCoord {
        let q = self.column as i32;
        let s = self.row as i32 - 1;
        CubeCoord::new(q, -q - s, s)
    }

    /// Column letter
    pub fn column(&self) -> char {
        (b'A' + self.column) as char
    }

    pub fn row(&self) -> u32 {
        self.row
    }

    pub fn distance(&self, other: &Self) -> u32 {
        self.cube().distance(&other.cube())
    }
}

impl fmt::Display for HexLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("{}{}", self.column(), self.row))
    }
}

impl FromStr for HexLabel {
    type Err = UmpireError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexLabel {
    type Error = UmpireError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<HexLabel> for String {
    fn from(label: HexLabel) -> Self {
        label.to_string()
    }
}

/// Convert a label string to cube coordinates
pub fn label_to_cube(label: &str) -> Result<CubeCoord> {
    HexLabel::parse(label).map(|l| l.cube())
}

/// Convert cube coordinates back to a label
pub fn cube_to_label(cube: CubeCoord) -> Result<HexLabel> {
    HexLabel::from_cube(cube)
}

/// Hex distance between two labelled cells
pub fn distance(a: &HexLabel, b: &HexLabel) -> u32 {
    a.distance(b)
}

/// Round half toward positive infinity, so `-0.5` goes to `0`
fn round_half_up(x: f32) -> f32 {
    (x + 0.5).floor()
}

/// Round fractional axial coordinates to the nearest valid cube
///
/// Ties on a hex edge round toward positive infinity before the largest
/// error is corrected.
pub fn hex_round(q: f32, r: f32) -> CubeCoord {
    let s = -q - r;
    let mut rq = round_half_up(q);
    let mut rr = round_half_up(r);
    let mut rs = round_half_up(s);

    let q_diff = (rq - q).abs();
    let r_diff = (rr - r).abs();
    let s_diff = (rs - s).abs();

    if q_diff > r_diff && q_diff > s_diff {
        rq = -rr - rs;
    } else if r_diff > s_diff {
        rr = -rq - rs;
    } else {
        rs = -rq - rr;
    }

    CubeCoord::new(rq as i32, rr as i32, rs as i32)
}

/// Centre of a hex in pixel space (flat-top, `A1` at the origin)
pub fn cube_to_pixel(cube: CubeCoord, hex_size: f32) -> Vec2 {
    let sqrt3 = 3.0_f32.sqrt();
    let q = cube.q as f32;
    let r = cube.r as f32;
    Vec2::new(
        hex_size * (3.0 / 2.0 * q),
        hex_size * (sqrt3 / 2.0 * q + sqrt3 * r),
    )
}

/// Nearest hex to a pixel-space point
pub fn pixel_to_cube(point: Vec2, hex_size: f32) -> CubeCoord {
    let sqrt3 = 3.0_f32.sqrt();
    let q = (point.x * 2.0 / 3.0) / hex_size;
    let r = (-point.x / 3.0 + sqrt3 / 3.0 * point.y) / hex_size;
    hex_round(q, r)
}

/// Label of the hex under a pixel-space point
///
/// Fails with `InvalidCube` for points outside the labelled quadrant.
pub fn pixel_to_label(point: Vec2, hex_size: f32) -> Result<HexLabel> {
    cube_to_label(pixel_to_cube(point, hex_size))
}
