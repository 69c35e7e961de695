use crate::core::actions::chaos_game::ports::random_source::RandomSource;
use crate::core::data::point::Point;
use crate::core::data::triangle::Triangle;

/// Uniform sample over the triangle's area.
///
/// `s1 = sqrt(r1)` corrects the area distortion of naive barycentric weights,
/// which would otherwise bunch samples around `V0`.
pub fn random_point_in_triangle<R: RandomSource + ?Sized>(triangle: &Triangle, rng: &mut R) -> Point {
    let r1 = rng.next_unit();
    let r2 = rng.next_unit();
    let s1 = r1.sqrt();
    let [v0, v1, v2] = *triangle.vertices();

    v0 * (1.0 - s1) + v1 * (s1 * (1.0 - r2)) + v2 * (s1 * r2)
}

/// One chaos-game move: halfway from `current` towards a uniformly chosen
/// vertex.
pub fn step<R: RandomSource + ?Sized>(current: Point, triangle: &Triangle, rng: &mut R) -> Point {
    let vertices = triangle.vertices();
    let chosen = vertices[rng.next_index(vertices.len())];

    current.midpoint(chosen)
}
