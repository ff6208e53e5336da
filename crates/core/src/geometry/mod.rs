//! Layout of the circular diagram and the linear banner.
//!
//! The ring places unit 0 at twelve o'clock and advances counter-clockwise.
//! Angles are in degrees in SVG space, where -90 points up. The whole ring is
//! rotated so that the active meter's first unit sits at the top.

use crate::{
    config::{BannerConfig, DiagramConfig},
    model::{Circle, Meter},
    resolver::ResolvedFoot,
};

/// Which theme colour a unit segment is filled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentFill {
    /// Units in even-numbered feet.
    Primary,
    /// Units in odd-numbered feet.
    Accent,
    /// Units not covered by the active meter.
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnitSegment {
    pub index: usize,
    /// Symbol as drawn, reversed so it reads right to left (`0//` -> `//0`).
    pub label: String,
    pub start_angle: f32,
    pub end_angle: f32,
    pub path: String,
    pub label_pos: (f32, f32),
    /// Foot of the active meter this unit belongs to.
    pub group: Option<usize>,
    pub fill: SegmentFill,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FootArc {
    pub index: usize,
    pub label: String,
    pub path: String,
    pub label_pos: (f32, f32),
    pub mid_angle: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MeterMarker {
    pub meter_id: String,
    pub label: String,
    pub angle: f32,
    /// Point on the ring where the connector starts.
    pub anchor: (f32, f32),
    pub position: (f32, f32),
    pub active: bool,
}

/// Everything needed to draw one circle with one active meter.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleDiagram {
    pub angle_per_unit: f32,
    /// Rotation applied to the ring, in degrees.
    pub rotation: f32,
    pub segments: Vec<UnitSegment>,
    pub feet: Vec<FootArc>,
    pub markers: Vec<MeterMarker>,
    /// Unit shown in the hub at the centre of the ring.
    pub start_unit: String,
}

/// Reverses a unit symbol for right-to-left display.
pub fn display_unit(unit: &str) -> String {
    unit.chars().rev().collect()
}

fn point(angle_deg: f32, radius: f32) -> (f32, f32) {
    let rad = angle_deg.to_radians();
    (rad.cos() * radius, rad.sin() * radius)
}

/// Annular sector between two angles, drawn counter-clockwise from `start`.
pub fn sector_path(start_angle: f32, end_angle: f32, outer: f32, inner: f32) -> String {
    let (x1, y1) = point(start_angle, outer);
    let (x2, y2) = point(end_angle, outer);
    let (x3, y3) = point(end_angle, inner);
    let (x4, y4) = point(start_angle, inner);
    let large_arc = u8::from((start_angle - end_angle).abs() > 180.0);
    format!(
        "M {x1:.3} {y1:.3} A {outer} {outer} 0 {large_arc} 0 {x2:.3} {y2:.3} \
         L {x3:.3} {y3:.3} A {inner} {inner} 0 {large_arc} 1 {x4:.3} {y4:.3} Z"
    )
}

/// Foot index covering the unit `relative` positions after the meter start.
fn group_of(relative: usize, sizes: &[usize]) -> Option<usize> {
    let mut accumulated = 0;
    for (index, &size) in sizes.iter().enumerate() {
        if relative >= accumulated && relative < accumulated + size {
            return Some(index);
        }
        accumulated += size;
    }
    None
}

impl CircleDiagram {
    /// Lays out `circle` with `meter` active. `pattern` is the meter's
    /// resolved feet, in order.
    pub fn layout(
        circle: &Circle,
        meter: &Meter,
        pattern: &[ResolvedFoot],
        config: &DiagramConfig,
    ) -> Self {
        let sequence = &circle.atomic_sequence;
        let total = sequence.len().max(1);
        let angle_per_unit = 360.0 / total as f32;
        let offset = meter.start_offset % total;
        let rotation = offset as f32 * angle_per_unit;
        let mid_radius = (config.radius + config.inner_radius) / 2.0;

        let segments = sequence
            .iter()
            .enumerate()
            .map(|(index, unit)| {
                let start_angle = -90.0 - index as f32 * angle_per_unit;
                let end_angle = start_angle - angle_per_unit;
                let relative = (index + total - offset) % total;
                let group = group_of(relative, &meter.parsing_instructions);
                let fill = match group {
                    Some(g) if g % 2 == 0 => SegmentFill::Primary,
                    Some(_) => SegmentFill::Accent,
                    None => SegmentFill::None,
                };
                UnitSegment {
                    index,
                    label: display_unit(unit),
                    start_angle,
                    end_angle,
                    path: sector_path(start_angle, end_angle, config.radius, config.inner_radius),
                    label_pos: point(start_angle - angle_per_unit / 2.0, mid_radius),
                    group,
                    fill,
                }
            })
            .collect();

        let mut consumed = 0;
        let feet = pattern
            .iter()
            .zip(&meter.parsing_instructions)
            .enumerate()
            .map(|(index, (foot, &size))| {
                let start_index = (offset + consumed) % total;
                consumed += size;
                let start_angle = -90.0 - start_index as f32 * angle_per_unit;
                let sweep = size as f32 * angle_per_unit;
                let mid_angle = start_angle - sweep / 2.0;
                FootArc {
                    index,
                    label: foot.tafila.merged.clone(),
                    path: sector_path(
                        start_angle,
                        start_angle - sweep,
                        config.radius,
                        config.inner_radius,
                    ),
                    label_pos: point(mid_angle, config.radius + config.label_gap),
                    mid_angle,
                }
            })
            .collect();

        let markers = circle
            .meters
            .iter()
            .map(|other| {
                let angle = -90.0 - (other.start_offset % total) as f32 * angle_per_unit;
                MeterMarker {
                    meter_id: other.id.clone(),
                    label: other.name.clone(),
                    angle,
                    anchor: point(angle, config.radius),
                    position: point(angle, config.marker_radius),
                    active: other.id == meter.id,
                }
            })
            .collect();

        Self {
            angle_per_unit,
            rotation,
            segments,
            feet,
            markers,
            start_unit: circle
                .unit_at(meter.start_offset)
                .map(display_unit)
                .unwrap_or_default(),
        }
    }
}

/// Horizontal extent of one foot in the banner, measured from the right edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BannerBox {
    pub right: u32,
    pub width: u32,
}

/// Layout of the linear, right-to-left banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerLayout {
    pub unit_width: u32,
    pub pattern_width: u32,
    /// Meter offset reduced into the sequence.
    pub normalized_offset: usize,
    pub shift: u32,
    pub boxes: Vec<BannerBox>,
}

impl BannerLayout {
    pub fn new(circle_len: usize, meter: &Meter, config: &BannerConfig) -> Self {
        let unit_width = config.unit_width;
        let to_px = |units: usize| u32::try_from(units).unwrap_or(u32::MAX).saturating_mul(unit_width);
        let normalized_offset = if circle_len == 0 {
            0
        } else {
            meter.start_offset % circle_len
        };

        let mut cursor = 0;
        let boxes = meter
            .parsing_instructions
            .iter()
            .map(|&size| {
                let right = to_px(cursor);
                cursor += size;
                BannerBox {
                    right,
                    width: to_px(size),
                }
            })
            .collect();

        Self {
            unit_width,
            pattern_width: to_px(meter.total_units()),
            normalized_offset,
            shift: to_px(normalized_offset),
            boxes,
        }
    }
}
