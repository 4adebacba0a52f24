//! The fixed-size sensor view a policy observes.

use std::fmt;

/// Number of sensing rays (the 8 compass headings).
pub const SENSOR_RAYS: usize = 8;

/// Length of the flattened sensor vector: one food flag and one
/// obstruction flag per ray.
pub const SENSOR_LEN: usize = SENSOR_RAYS * 2;

/// A rotated, per-direction food/obstruction view of the board.
///
/// Layout: `values[2 * ray]` is the food flag and `values[2 * ray + 1]`
/// the obstruction flag for the ray at clockwise offset `ray` from the
/// agent's forward direction. Ray 0 is always "straight ahead" — the
/// extraction layer rotates the raw compass scan by the agent's heading
/// so a single policy generalizes across orientations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SensorView {
    values: [f32; SENSOR_LEN],
}

impl SensorView {
    /// Wrap a pre-rotated flat vector.
    pub const fn new(values: [f32; SENSOR_LEN]) -> Self {
        Self { values }
    }

    /// The flat vector, suitable as network input.
    pub fn as_array(&self) -> &[f32; SENSOR_LEN] {
        &self.values
    }

    /// Food flag for the ray `ray` positions clockwise of forward.
    ///
    /// # Panics
    ///
    /// Panics if `ray >= SENSOR_RAYS`.
    pub fn food(&self, ray: usize) -> bool {
        self.values[2 * ray] != 0.0
    }

    /// Obstruction flag for the ray `ray` positions clockwise of forward.
    ///
    /// # Panics
    ///
    /// Panics if `ray >= SENSOR_RAYS`.
    pub fn blocked(&self, ray: usize) -> bool {
        self.values[2 * ray + 1] != 0.0
    }
}

impl Default for SensorView {
    fn default() -> Self {
        Self {
            values: [0.0; SENSOR_LEN],
        }
    }
}

impl fmt::Display for SensorView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ray in 0..SENSOR_RAYS {
            if ray > 0 {
                write!(f, " ")?;
            }
            write!(
                f,
                "{}{}",
                if self.food(ray) { 'F' } else { '.' },
                if self.blocked(ray) { 'X' } else { '.' },
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_view_is_clear() {
        let v = SensorView::default();
        for ray in 0..SENSOR_RAYS {
            assert!(!v.food(ray));
            assert!(!v.blocked(ray));
        }
    }

    #[test]
    fn flags_index_interleaved_pairs() {
        let mut values = [0.0; SENSOR_LEN];
        values[0] = 1.0; // food ahead
        values[5] = 1.0; // blocked at ray 2
        let v = SensorView::new(values);
        assert!(v.food(0));
        assert!(!v.blocked(0));
        assert!(v.blocked(2));
        assert!(!v.food(2));
    }

    #[test]
    fn display_marks_flags() {
        let mut values = [0.0; SENSOR_LEN];
        values[0] = 1.0;
        values[1] = 1.0;
        let v = SensorView::new(values);
        assert!(v.to_string().starts_with("FX"));
    }
}
