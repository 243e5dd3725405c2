use error::TrackError;
use util::practically_zero;

/// Turns a running total of distance travelled into a lap number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LapCounter {
    lap_length: f32,
}

impl LapCounter {
    pub fn new(lap_length: f32) -> Result<LapCounter, TrackError> {
        if practically_zero(lap_length) || !lap_length.is_finite() {
            return Err(TrackError::DegenerateLoop);
        }
        Ok(LapCounter { lap_length })
    }

    pub fn lap_length(&self) -> f32 {
        self.lap_length
    }

    /// The lap that `distance` is on, counting from lap 0.
    ///
    /// The caller keeps `distance` growing from zero; going backwards past
    /// the start line gives negative laps.
    pub fn current_lap(&self, distance: f32) -> i64 {
        (distance / self.lap_length).floor() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_laps() {
        let counter = LapCounter::new(40.).unwrap();
        assert_eq!(counter.current_lap(0.), 0);
        assert_eq!(counter.current_lap(39.9), 0);
        assert_eq!(counter.current_lap(40.), 1);
        assert_eq!(counter.current_lap(41.), 1);
        assert_eq!(counter.current_lap(125.), 3);
        assert_eq!(counter.current_lap(-1.), -1);
    }

    #[test]
    fn test_monotonic() {
        let counter = LapCounter::new(7.3).unwrap();
        let mut last = 0;
        for i in 0..1000 {
            let lap = counter.current_lap(i as f32 * 0.11);
            assert!(lap >= last);
            last = lap;
        }
        assert_eq!(last, 15);
    }

    #[test]
    fn test_needs_length() {
        match LapCounter::new(0.) {
            Err(TrackError::DegenerateLoop) => (),
            other => panic!("expected a degenerate loop, got {:?}", other),
        }
    }
}
