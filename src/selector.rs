//! Target selection strategies.

use alloc::collections::VecDeque;
use rand::Rng;

use crate::common::SelectorError;
use crate::coord::Coordinate;

/// Interface implemented by anything that picks the next shot.
pub trait TargetSelector {
    /// Produce the next coordinate to fire at. May block on external input.
    fn select_target(&mut self) -> Result<Coordinate, SelectorError>;
}

impl<S: TargetSelector + ?Sized> TargetSelector for &mut S {
    fn select_target(&mut self) -> Result<Coordinate, SelectorError> {
        (**self).select_target()
    }
}

impl<S: TargetSelector + ?Sized> TargetSelector for alloc::boxed::Box<S> {
    fn select_target(&mut self) -> Result<Coordinate, SelectorError> {
        (**self).select_target()
    }
}

/// Uniformly random in-bounds targets. Repeats are possible and are left to
/// the board to classify.
pub struct RandomSelector<R: Rng> {
    grid_size: usize,
    rng: R,
}

impl<R: Rng> RandomSelector<R> {
    /// Targets are drawn from `0..grid_size` on both axes. Sizes beyond what a
    /// [`Coordinate`] can address are capped at `i32::MAX`.
    pub fn new(grid_size: usize, rng: R) -> Self {
        let grid_size = grid_size.min(usize::try_from(i32::MAX).unwrap_or(usize::MAX));
        Self { grid_size, rng }
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }
}

impl<R: Rng> TargetSelector for RandomSelector<R> {
    fn select_target(&mut self) -> Result<Coordinate, SelectorError> {
        if self.grid_size == 0 {
            return Err(SelectorError::Exhausted);
        }
        let row = self.rng.random_range(0..self.grid_size);
        let col = self.rng.random_range(0..self.grid_size);
        Ok(Coordinate::from_grid(row, col))
    }
}

/// Replays a fixed sequence of targets, then reports exhaustion.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSelector {
    targets: VecDeque<Coordinate>,
}

impl ScriptedSelector {
    pub fn new<I, C>(targets: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Coordinate>,
    {
        Self {
            targets: targets.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.targets.len()
    }
}

impl TargetSelector for ScriptedSelector {
    fn select_target(&mut self) -> Result<Coordinate, SelectorError> {
        self.targets.pop_front().ok_or(SelectorError::Exhausted)
    }
}
