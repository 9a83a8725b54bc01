use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Group, Text, Title};

use crate::entities::{PlacementResult, Yard};
use crate::geometry::Transformation;
use crate::geometry::geo_traits::{Shape, Transformable};
use crate::geometry::primitives::{Point, Rect};
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::{SvgDrawOptions, svg_point};

/// Length of the compass arrows
const INDICATOR_LENGTH: f64 = 3.0;
/// Distance between the top right corner of the yard and the base of the compass
const INDICATOR_OFFSET: f64 = 5.0;

const COMPASS: [(&str, (f64, f64)); 4] = [
    ("N", (0.0, 1.0)),
    ("E", (1.0, 0.0)),
    ("S", (0.0, -1.0)),
    ("W", (-1.0, 0.0)),
];

/// Renders the yard, its obstacles and the placed graves.
///
/// Geometry is drawn in a y-up frame (flipped into SVG's y-down frame), text is drawn upright.
/// The compass indicator is rotated clockwise by `indicator_angle` degrees.
pub fn result_to_svg(
    yard: &Yard,
    result: &PlacementResult,
    options: SvgDrawOptions,
    indicator_angle: f64,
    title: &str,
) -> Document {
    let theme = &options.theme;
    let yard_bbox = yard.region.bbox();

    let indicator_corner = Point(
        yard_bbox.x_max + INDICATOR_OFFSET,
        yard_bbox.y_max + INDICATOR_OFFSET,
    );
    let content_bbox = match options.indicator {
        true => {
            let reach = INDICATOR_LENGTH + 2.0;
            let indicator_bbox = Rect {
                x_min: indicator_corner.0 - reach,
                y_min: indicator_corner.1 - reach,
                x_max: indicator_corner.0 + reach,
                y_max: indicator_corner.1 + reach,
            };
            Rect::bounding_rect(yard_bbox, indicator_bbox)
        }
        false => yard_bbox,
    };
    let vbox = content_bbox.scale(1.10);

    let stroke_width = f64::min(vbox.width(), vbox.height()) * 0.001 * theme.stroke_width_multiplier;
    let font_size = f64::min(yard_bbox.width(), yard_bbox.height()) * 0.025;

    //geometry group, mirrored so that y points up
    let mut geometry = Group::new()
        .set("id", "geometry")
        .set("transform", "scale(1,-1)");
    //text group, coordinates are mirrored manually so that text stays upright
    let mut text = Group::new()
        .set("id", "labels")
        .set("font-family", "monospace")
        .set("text-anchor", "middle")
        .set("dominant-baseline", "central");

    geometry = geometry.add(
        svg_util::data_to_path(
            svg_util::simple_polygon_data(&yard.region),
            &[
                ("fill", &*format!("{}", theme.yard_fill)),
                ("stroke", "black"),
                ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
            ],
        )
        .add(Title::new(format!(
            "yard, area: {:.3}, bbox: [x_min: {:.3}, y_min: {:.3}, x_max: {:.3}, y_max: {:.3}]",
            yard.area(),
            yard_bbox.x_min,
            yard_bbox.y_min,
            yard_bbox.x_max,
            yard_bbox.y_max
        ))),
    );

    let mut obstacles = Group::new().set("id", "obstacles");
    for (i, obstacle) in yard.obstacles.iter().enumerate() {
        obstacles = obstacles.add(
            svg_util::data_to_path(
                svg_util::simple_polygon_data(obstacle),
                &[
                    ("fill", &*format!("{}", theme.obstacle_fill)),
                    ("stroke", "black"),
                    ("stroke-width", &*format!("{}", stroke_width)),
                ],
            )
            .add(Title::new(format!("obstacle {i}"))),
        );
    }
    geometry = geometry.add(obstacles);

    let mut graves = Group::new().set("id", "graves");
    let mut clearances = Group::new().set("id", "clearance_circles");
    for grave in result {
        graves = graves.add(
            svg_util::data_to_path(
                svg_util::simple_polygon_data(&grave.shape),
                &[
                    ("fill", &*format!("{}", theme.grave_fill)),
                    ("stroke", "black"),
                    ("stroke-width", &*format!("{}", stroke_width)),
                ],
            )
            .add(Title::new(format!(
                "grave #{}, cell: {:?}, anchor: ({:.3}, {:.3})",
                grave.index + 1,
                grave.cell,
                grave.anchor.0,
                grave.anchor.1
            ))),
        );
        if options.clearance_circles {
            clearances = clearances.add(svg_util::circle(
                &grave.clearance,
                &[
                    ("fill", "none"),
                    ("stroke", &*format!("{}", theme.clearance_stroke)),
                    ("stroke-width", &*format!("{}", stroke_width)),
                    ("stroke-dasharray", &*format!("{} {}", 4.0 * stroke_width, 2.0 * stroke_width)),
                ],
            ));
        }
        if options.labels {
            let Point(cx, cy) = grave.shape.centroid();
            text = text.add(
                Text::new(format!("{}", grave.index + 1))
                    .set("x", cx)
                    .set("y", -cy)
                    .set("font-size", 0.5 * f64::min(result.spec.width(), result.spec.height()))
                    .set("fill", format!("{}", theme.label_color)),
            );
        }
    }
    geometry = geometry.add(graves).add(clearances);

    if options.indicator {
        let rotation = Transformation::from_cw_degrees(indicator_angle);
        let Point(ox, oy) = indicator_corner;
        let mut indicator = Group::new().set("id", "indicator");
        for (label, direction) in COMPASS {
            let Point(dx, dy) = Point::from(direction).transform_clone(&rotation);
            let tip = Point(ox + dx * INDICATOR_LENGTH, oy + dy * INDICATOR_LENGTH);
            indicator = indicator.add(svg_util::data_to_path(
                arrow_data(indicator_corner, tip),
                &[
                    ("fill", &*format!("{}", theme.indicator_color)),
                    ("stroke", &*format!("{}", theme.indicator_color)),
                    ("stroke-width", &*format!("{}", stroke_width)),
                ],
            ));
            let label_pos = Point(
                ox + dx * (INDICATOR_LENGTH + 1.0),
                oy + dy * (INDICATOR_LENGTH + 1.0),
            );
            text = text.add(
                Text::new(label)
                    .set("x", label_pos.0)
                    .set("y", -label_pos.1)
                    .set("font-size", 1.0)
                    .set("fill", format!("{}", theme.indicator_color)),
            );
        }
        geometry = geometry.add(indicator);
    }

    let label = {
        let label_content = format!(
            "graves facing {}° | indicator angle: {}° | graves: {} | density: {:.3}% | {}",
            result.spec.rotation(),
            indicator_angle,
            result.len(),
            result.density(yard) * 100.0,
            title,
        );
        Text::new(label_content)
            .set("x", yard_bbox.x_min)
            .set("y", -yard_bbox.y_max - 0.5 * font_size)
            .set("font-size", font_size)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    Document::new()
        .set(
            "viewBox",
            (
                vbox.x_min,
                -vbox.y_max - 2.0 * font_size,
                vbox.width(),
                vbox.height() + 2.0 * font_size,
            ),
        )
        .add(geometry)
        .add(text)
        .add(label)
}

/// Shaft from `base` to `tip` with a triangular head
fn arrow_data(base: Point, tip: Point) -> Data {
    let (dx, dy) = (tip.0 - base.0, tip.1 - base.1);
    let length = dx.hypot(dy);
    let (ux, uy) = (dx / length, dy / length);
    let (head_length, head_width) = (0.3 * length, 0.25 * length);
    let neck = Point(tip.0 - ux * head_length, tip.1 - uy * head_length);
    let left = Point(neck.0 - uy * head_width / 2.0, neck.1 + ux * head_width / 2.0);
    let right = Point(neck.0 + uy * head_width / 2.0, neck.1 - ux * head_width / 2.0);

    Data::new()
        .move_to(svg_point(base))
        .line_to(svg_point(neck))
        .move_to(svg_point(left))
        .line_to(svg_point(tip))
        .line_to(svg_point(right))
        .close()
}
