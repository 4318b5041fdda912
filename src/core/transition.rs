use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Tuning for the bar reordering animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionConfig {
    /// Total tween duration in seconds. Zero disables animation entirely.
    pub duration_seconds: f64,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_seconds: 0.8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct SlotTween {
    from: f64,
    to: f64,
}

/// Caller-stepped tween of per-bar slot positions, keyed by bar name.
///
/// The host drives time through [`SlotTransition::step`]; there is no wall
/// clock inside the crate, so animation is deterministic and testable.
/// Starting a new transition while one is active should seed it from
/// [`SlotTransition::positions`] so bars continue from where they are on
/// screen instead of jumping.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotTransition {
    tweens: IndexMap<String, SlotTween>,
    duration_seconds: f64,
    elapsed_seconds: f64,
}

impl SlotTransition {
    /// Builds a transition between two keyed position sets.
    ///
    /// Returns `None` when nothing moves or the duration is not positive, so
    /// callers skip the animation path entirely in those cases. Names missing
    /// from `from` start at their target (they appear in place).
    #[must_use]
    pub fn between(
        from: &IndexMap<String, f64>,
        to: &IndexMap<String, f64>,
        duration_seconds: f64,
    ) -> Option<Self> {
        if !duration_seconds.is_finite() || duration_seconds <= 0.0 {
            return None;
        }

        let mut tweens = IndexMap::with_capacity(to.len());
        let mut moved = false;
        for (name, &target) in to {
            let start = from.get(name).copied().unwrap_or(target);
            if (start - target).abs() > f64::EPSILON {
                moved = true;
            }
            tweens.insert(
                name.clone(),
                SlotTween {
                    from: start,
                    to: target,
                },
            );
        }

        if !moved {
            return None;
        }

        Some(Self {
            tweens,
            duration_seconds,
            elapsed_seconds: 0.0,
        })
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed_seconds >= self.duration_seconds
    }

    /// Normalized progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        (self.elapsed_seconds / self.duration_seconds).clamp(0.0, 1.0)
    }

    /// Advances the tween. Returns `true` while the transition is still active.
    pub fn step(&mut self, delta_seconds: f64) -> bool {
        if delta_seconds.is_finite() && delta_seconds > 0.0 {
            self.elapsed_seconds += delta_seconds;
        }
        !self.is_finished()
    }

    /// Completes the transition immediately; positions land on their targets.
    pub fn cancel(&mut self) {
        self.elapsed_seconds = self.duration_seconds;
    }

    /// Current eased position for one bar.
    #[must_use]
    pub fn position_of(&self, name: &str) -> Option<f64> {
        let eased = ease_cubic_in_out(self.progress());
        self.tweens
            .get(name)
            .map(|tween| tween.from + (tween.to - tween.from) * eased)
    }

    /// Current eased positions for all bars, in target-key order.
    #[must_use]
    pub fn positions(&self) -> IndexMap<String, f64> {
        let eased = ease_cubic_in_out(self.progress());
        self.tweens
            .iter()
            .map(|(name, tween)| {
                (
                    name.clone(),
                    tween.from + (tween.to - tween.from) * eased,
                )
            })
            .collect()
    }
}

/// Symmetric cubic easing: accelerate to the midpoint, decelerate out.
fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = 2.0 * t - 2.0;
        0.5 * u * u * u + 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyed(pairs: &[(&str, f64)]) -> IndexMap<String, f64> {
        pairs
            .iter()
            .map(|(name, x)| ((*name).to_owned(), *x))
            .collect()
    }

    #[test]
    fn easing_is_anchored_and_symmetric() {
        assert!((ease_cubic_in_out(0.0) - 0.0).abs() <= 1e-12);
        assert!((ease_cubic_in_out(0.5) - 0.5).abs() <= 1e-12);
        assert!((ease_cubic_in_out(1.0) - 1.0).abs() <= 1e-12);
        let early = ease_cubic_in_out(0.25);
        let late = ease_cubic_in_out(0.75);
        assert!((early + late - 1.0).abs() <= 1e-12);
    }

    #[test]
    fn identical_positions_produce_no_transition() {
        let at = keyed(&[("a", 10.0), ("b", 50.0)]);
        assert!(SlotTransition::between(&at, &at, 0.8).is_none());
    }

    #[test]
    fn zero_duration_produces_no_transition() {
        let from = keyed(&[("a", 10.0)]);
        let to = keyed(&[("a", 90.0)]);
        assert!(SlotTransition::between(&from, &to, 0.0).is_none());
    }

    #[test]
    fn step_reaches_targets_exactly_at_duration() {
        let from = keyed(&[("a", 0.0), ("b", 100.0)]);
        let to = keyed(&[("a", 100.0), ("b", 0.0)]);
        let mut transition = SlotTransition::between(&from, &to, 0.8).expect("moves");

        assert!(transition.step(0.4));
        let midway = transition.position_of("a").expect("tracked bar");
        assert!((midway - 50.0).abs() <= 1e-9);

        assert!(!transition.step(0.4));
        assert!(transition.is_finished());
        let landed = transition.position_of("a").expect("tracked bar");
        assert!((landed - 100.0).abs() <= 1e-12);
    }

    #[test]
    fn cancel_lands_on_targets() {
        let from = keyed(&[("a", 0.0)]);
        let to = keyed(&[("a", 40.0)]);
        let mut transition = SlotTransition::between(&from, &to, 0.8).expect("moves");
        transition.step(0.1);
        transition.cancel();
        assert!(transition.is_finished());
        let landed = transition.position_of("a").expect("tracked bar");
        assert!((landed - 40.0).abs() <= 1e-12);
    }

    #[test]
    fn unknown_start_names_appear_in_place() {
        let from = keyed(&[("a", 0.0)]);
        let to = keyed(&[("a", 40.0), ("b", 80.0)]);
        let transition = SlotTransition::between(&from, &to, 0.8).expect("moves");
        let landed = transition.position_of("b").expect("tracked bar");
        assert!((landed - 80.0).abs() <= 1e-12);
    }
}
