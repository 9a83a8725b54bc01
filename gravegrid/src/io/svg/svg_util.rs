use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::{Result, ensure};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use svg::node::element::path::Data;
use svg::node::element::{Circle, Path};

use crate::geometry::primitives::{Point, SPolygon};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgTheme,
    ///Draw the clearance circle around every grave
    #[serde(default = "default_true")]
    pub clearance_circles: bool,
    ///Print the placement index on top of every grave
    #[serde(default = "default_true")]
    pub labels: bool,
    ///Draw the compass indicator next to the yard
    #[serde(default = "default_true")]
    pub indicator: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgTheme::default(),
            clearance_circles: true,
            labels: true,
            indicator: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgTheme {
    pub stroke_width_multiplier: f64,
    pub yard_fill: Color,
    pub obstacle_fill: Color,
    pub grave_fill: Color,
    pub label_color: Color,
    pub clearance_stroke: Color,
    pub indicator_color: Color,
}

impl Default for SvgTheme {
    fn default() -> Self {
        SvgTheme::CEMETERY
    }
}

impl SvgTheme {
    pub const CEMETERY: SvgTheme = SvgTheme {
        stroke_width_multiplier: 2.0,
        yard_fill: Color(0x90, 0xEE, 0x90),       // LIGHT GREEN
        obstacle_fill: Color(0xA5, 0x2A, 0x2A),   // BROWN
        grave_fill: Color(0x80, 0x80, 0x80),      // GRAY
        label_color: Color(0xFF, 0xFF, 0xFF),     // WHITE
        clearance_stroke: Color(0x00, 0xFF, 0xFF), // CYAN
        indicator_color: Color(0x00, 0x00, 0xFF), // BLUE
    };

    pub const GRAY: SvgTheme = SvgTheme {
        stroke_width_multiplier: 2.5,
        yard_fill: Color(0xD3, 0xD3, 0xD3),
        obstacle_fill: Color(0x2D, 0x2D, 0x2D),
        grave_fill: Color(0x7A, 0x7A, 0x7A),
        label_color: Color(0xFF, 0xFF, 0xFF),
        clearance_stroke: Color(0x63, 0x63, 0x63),
        indicator_color: Color(0x00, 0x00, 0x00),
    };
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(u8, u8, u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        ensure!(
            hex.len() == 6 && hex.is_ascii(),
            "invalid color, expected #RRGGBB: {s}"
        );
        let r = u8::from_str_radix(&hex[0..2], 16)?;
        let g = u8::from_str_radix(&hex[2..4], 16)?;
        let b = u8::from_str_radix(&hex[4..6], 16)?;
        Ok(Color(r, g, b))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// SVG path parameters are single precision
pub fn svg_point(Point(x, y): Point) -> (f32, f32) {
    (x as f32, y as f32)
}

pub fn simple_polygon_data(s_poly: &SPolygon) -> Data {
    let mut data = Data::new().move_to(svg_point(s_poly.vertex(0)));
    for i in 1..s_poly.n_vertices() {
        data = data.line_to(svg_point(s_poly.vertex(i)));
    }
    data.close()
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}

pub fn circle(circle: &crate::geometry::primitives::Circle, params: &[(&str, &str)]) -> Circle {
    let mut circle = Circle::new()
        .set("cx", circle.center.0)
        .set("cy", circle.center.1)
        .set("r", circle.radius);
    for param in params {
        circle = circle.set(param.0, param.1)
    }
    circle
}
