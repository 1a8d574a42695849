//! Shuffled colony layouts.
//!
//! A layout holds `round_half_even(x * size)` Jumpers and the rest
//! Waiters, in a random order. The order comes from a ChaCha8 RNG seeded
//! from `seed XOR round`, so replaying a run with the same colony config
//! reproduces every frame exactly.

use std::fmt;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rookery_core::{clamp_proportion, RoundId, Strategy};
use smallvec::SmallVec;

use crate::config::{ColonyConfig, LayoutError};

// Colonies up to 64 penguins stay inline.
type Members = SmallVec<[Strategy; 64]>;

/// Number of Jumpers drawn for proportion `x` in a colony of `size`.
///
/// `x` is clamped into `[0, 1]` first; ties round to even, so
/// `x = 0.125` in a colony of 4 draws zero Jumpers.
pub fn jumper_count(x: f64, size: usize) -> usize {
    let n = (clamp_proportion(x) * size as f64).round_ties_even();
    (n as usize).min(size)
}

/// A concrete arrangement of the colony for one displayed state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColonyLayout {
    members: Members,
    row_width: usize,
}

impl ColonyLayout {
    /// Lay out proportion `x` using the supplied RNG for the shuffle.
    pub fn arrange<R: Rng + ?Sized>(
        x: f64,
        config: &ColonyConfig,
        rng: &mut R,
    ) -> Result<Self, LayoutError> {
        config.validate()?;
        if x.is_nan() {
            return Err(LayoutError::InvalidProportion { value: x });
        }

        let jumpers = jumper_count(x, config.size);
        let mut members: Members = SmallVec::with_capacity(config.size);
        members.extend(std::iter::repeat_n(Strategy::Jumper, jumpers));
        members.extend(std::iter::repeat_n(
            Strategy::Waiter,
            config.size - jumpers,
        ));
        members.shuffle(rng);

        Ok(Self {
            members,
            row_width: config.row_width,
        })
    }

    /// Lay out proportion `x` for `round`, deterministically.
    pub fn for_round(x: f64, config: &ColonyConfig, round: RoundId) -> Result<Self, LayoutError> {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed ^ u64::from(round.0));
        Self::arrange(x, config, &mut rng)
    }

    /// Every member in display order.
    pub fn members(&self) -> &[Strategy] {
        &self.members
    }

    /// Members split into rows of the configured width; the last row may
    /// be shorter.
    pub fn rows(&self) -> impl Iterator<Item = &[Strategy]> + '_ {
        self.members.chunks(self.row_width)
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.members.len().div_ceil(self.row_width)
    }

    /// Colony size.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always `false`; an empty colony is rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Number of members playing `strategy`.
    pub fn count(&self, strategy: Strategy) -> usize {
        self.members.iter().filter(|&&s| s == strategy).count()
    }

    /// Number of Jumpers.
    pub fn jumpers(&self) -> usize {
        self.count(Strategy::Jumper)
    }

    /// Number of Waiters.
    pub fn waiters(&self) -> usize {
        self.count(Strategy::Waiter)
    }

    /// Fraction of the drawn colony that are Jumpers.
    pub fn drawn_proportion(&self) -> f64 {
        self.jumpers() as f64 / self.len() as f64
    }
}

impl fmt::Display for ColonyLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for s in row {
                write!(f, "{}", s.glyph())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn config(size: usize, row_width: usize) -> ColonyConfig {
        ColonyConfig {
            size,
            row_width,
            seed: 7,
        }
    }

    #[test]
    fn jumper_count_rounds_half_to_even() {
        assert_eq!(jumper_count(0.125, 4), 0);
        assert_eq!(jumper_count(0.375, 4), 2);
        assert_eq!(jumper_count(0.3, 40), 12);
        assert_eq!(jumper_count(0.66298, 40), 27);
    }

    #[test]
    fn jumper_count_clamps_input() {
        assert_eq!(jumper_count(-1.0, 40), 0);
        assert_eq!(jumper_count(2.0, 40), 40);
    }

    #[test]
    fn default_colony_has_four_rows_of_ten() {
        let layout = ColonyLayout::for_round(0.3, &ColonyConfig::default(), RoundId(0)).unwrap();
        assert_eq!(layout.len(), 40);
        assert_eq!(layout.row_count(), 4);
        assert!(layout.rows().all(|r| r.len() == 10));
        assert_eq!(layout.jumpers(), 12);
        assert_eq!(layout.waiters(), 28);
    }

    #[test]
    fn ragged_last_row() {
        let layout = ColonyLayout::for_round(0.5, &config(42, 10), RoundId(3)).unwrap();
        assert_eq!(layout.row_count(), 5);
        assert_eq!(layout.rows().last().map(<[Strategy]>::len), Some(2));
    }

    #[test]
    fn same_round_same_layout() {
        let cfg = config(40, 10);
        let a = ColonyLayout::for_round(0.4, &cfg, RoundId(5)).unwrap();
        let b = ColonyLayout::for_round(0.4, &cfg, RoundId(5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_rounds_shuffle_differently() {
        let cfg = config(40, 10);
        let a = ColonyLayout::for_round(0.5, &cfg, RoundId(1)).unwrap();
        let b = ColonyLayout::for_round(0.5, &cfg, RoundId(2)).unwrap();
        assert_eq!(a.jumpers(), b.jumpers());
        assert_ne!(a.members(), b.members());
    }

    #[test]
    fn display_prints_one_line_per_row() {
        let layout = ColonyLayout::for_round(1.0, &config(6, 4), RoundId(0)).unwrap();
        assert_eq!(layout.to_string(), "JJJJ\nJJ");

        let layout = ColonyLayout::for_round(0.0, &config(3, 3), RoundId(0)).unwrap();
        assert_eq!(layout.to_string(), "www");
    }

    #[test]
    fn nan_proportion_rejected() {
        let err = ColonyLayout::for_round(f64::NAN, &config(10, 5), RoundId(0)).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidProportion { .. }));
    }

    #[test]
    fn invalid_config_rejected() {
        assert_eq!(
            ColonyLayout::for_round(0.5, &config(0, 5), RoundId(0)).unwrap_err(),
            LayoutError::EmptyColony
        );
        assert_eq!(
            ColonyLayout::for_round(0.5, &config(5, 0), RoundId(0)).unwrap_err(),
            LayoutError::ZeroRowWidth
        );
    }

    #[test]
    fn oversized_colony_is_an_error() {
        let err = ColonyLayout::for_round(0.5, &config(usize::MAX, 10), RoundId(0)).unwrap_err();
        assert_eq!(err, LayoutError::ColonyTooLarge { size: usize::MAX });
    }

    #[test]
    fn large_colony_spills_to_heap() {
        let layout = ColonyLayout::for_round(0.25, &config(200, 20), RoundId(0)).unwrap();
        assert_eq!(layout.len(), 200);
        assert_eq!(layout.jumpers(), 50);
    }

    proptest! {
        #[test]
        fn counts_track_proportion(
            x in 0.0f64..=1.0,
            size in 1usize..300,
            width in 1usize..20,
            round in 0u32..100,
        ) {
            let cfg = ColonyConfig { size, row_width: width, seed: 1 };
            let layout = ColonyLayout::for_round(x, &cfg, RoundId(round)).unwrap();
            prop_assert_eq!(layout.len(), size);
            prop_assert_eq!(layout.jumpers() + layout.waiters(), size);
            prop_assert_eq!(layout.jumpers(), jumper_count(x, size));
            // Rounding error is at most half a penguin.
            prop_assert!((layout.drawn_proportion() - x).abs() <= 0.5 / size as f64 + 1e-12);
            prop_assert_eq!(layout.rows().map(<[Strategy]>::len).sum::<usize>(), size);
        }
    }
}
