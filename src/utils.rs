use crate::types::Point;

/// Angle in radians of the ray from `origin` towards `toward`, in screen space
pub fn angle_between(origin: Point, toward: Point) -> f64 {
    (toward.y - origin.y).atan2(toward.x - origin.x)
}

/// Point at `length` from `origin` along `angle` (radians, screen space)
pub fn polar_offset(origin: Point, angle: f64, length: f64) -> Point {
    Point {
        x: origin.x + length * angle.cos(),
        y: origin.y + length * angle.sin(),
    }
}

/// Convert from radians to degrees
pub fn rad_to_deg(radians: f64) -> f64 {
    radians.to_degrees()
}
