use serde::{Deserialize, Serialize};

/// Furthest a customer may live from the restaurant, in blocks, on either axis.
pub const MAX_BLOCKS: i32 = 10;

/// Offset from the restaurant in blocks. The restaurant sits at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BlockPoint {
    pub x: i32,
    pub y: i32,
}

impl BlockPoint {
    pub const ORIGIN: BlockPoint = BlockPoint { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn is_origin(&self) -> bool {
        *self == Self::ORIGIN
    }

    pub fn within_range(&self) -> bool {
        let range = -MAX_BLOCKS..=MAX_BLOCKS;
        range.contains(&self.x) && range.contains(&self.y)
    }
}

pub fn manhattan_blocks(a: &BlockPoint, b: &BlockPoint) -> f64 {
    let dx = a.x.abs_diff(b.x);
    let dy = a.y.abs_diff(b.y);

    f64::from(dx) + f64::from(dy)
}

pub fn euclidean_blocks(a: &BlockPoint, b: &BlockPoint) -> f64 {
    let dx = f64::from(a.x) - f64::from(b.x);
    let dy = f64::from(a.y) - f64::from(b.y);

    dx.hypot(dy)
}
