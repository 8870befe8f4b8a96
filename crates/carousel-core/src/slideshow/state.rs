/// Which way the slide track moves during a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Track slides left: `[current, next]`
    #[default]
    Forward,
    /// Track slides right: `[next, current]`
    Backward,
}

impl Direction {
    /// Plain numeric comparison of the two indices.
    ///
    /// Wrapping from the last slide to the first therefore animates backward.
    pub fn between(current: usize, target: usize) -> Self {
        if target > current {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    /// Track offset at the start and end of the animation, in percent of one slide width
    pub fn track_span(self) -> (f64, f64) {
        match self {
            Direction::Forward => (0.0, -100.0),
            Direction::Backward => (-100.0, 0.0),
        }
    }
}

/// Sub-state of an in-flight transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    /// Both slides are placed at the start offset; nothing moves yet
    Armed,
    /// The surface animates the track towards the end offset
    Animating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    Idle,
    Armed {
        target: usize,
        direction: Direction,
        frames_left: u8,
    },
    Animating {
        target: usize,
        direction: Direction,
    },
}

impl Phase {
    pub(crate) fn pending(&self) -> Option<(usize, Direction)> {
        match *self {
            Phase::Idle => None,
            Phase::Armed {
                target, direction, ..
            }
            | Phase::Animating { target, direction } => Some((target, direction)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_is_numeric() {
        assert_eq!(Direction::between(0, 2), Direction::Forward);
        assert_eq!(Direction::between(2, 0), Direction::Backward);
        assert_eq!(Direction::between(1, 0), Direction::Backward);
    }

    #[test]
    fn test_track_span() {
        assert_eq!(Direction::Forward.track_span(), (0.0, -100.0));
        assert_eq!(Direction::Backward.track_span(), (-100.0, 0.0));
    }
}
