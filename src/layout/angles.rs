/// Generates the vertex angle sequence for a regular polygon, in degrees.
///
/// Produces `n + 1` angles with uniform step `360/n`: the closing entry
/// repeats the first vertex one full turn later so downstream consumers can
/// close the outline. With `flat_bottom` the whole sequence is offset by
/// `180 - 3*(180 - step)/2`, which lands the lowest polygon edge horizontal.
#[must_use]
pub fn vertex_angles(n: u32, flat_bottom: bool) -> Vec<f64> {
    let step = 360.0 / f64::from(n);
    let offset = if flat_bottom {
        180.0 - 3.0 * ((180.0 - step) / 2.0)
    } else {
        0.0
    };
    (0..=n).map(|i| offset + f64::from(i) * step).collect()
}
