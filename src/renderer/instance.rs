//! Instance data for drawing rectangles and ellipses

use bytemuck::{Pod, Zeroable};

use crate::Color;
use crate::sim::Rect;

/// Shape drawn for an instance
pub const SHAPE_RECT: u32 = 0;
pub const SHAPE_ELLIPSE: u32 = 1;

/// One drawable entity, laid out for direct buffer upload
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct RectInstance {
    pub position: [f32; 2],
    pub size: [f32; 2],
    pub color: [f32; 4],
    pub shape: u32,
}

impl RectInstance {
    pub fn new(rect: &Rect, color: Color, shape: u32) -> Self {
        Self {
            position: [rect.x, rect.y],
            size: [rect.width, rect.height],
            color: color.to_rgba_f32(),
            shape,
        }
    }
}

/// Raw bytes of an instance list
pub fn as_bytes(instances: &[RectInstance]) -> &[u8] {
    bytemuck::cast_slice(instances)
}
