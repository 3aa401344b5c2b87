//! Seams the game session depends on

use std::fmt::Debug;

/// Source of secret targets, one draw per round
///
/// Implementations should return a value in `[1, range_max]`; the session
/// clamps anything outside that interval.
pub trait TargetSource: Debug + Send {
    fn draw(&mut self, range_max: u32) -> u32;
}

impl<T: TargetSource + ?Sized> TargetSource for Box<T> {
    fn draw(&mut self, range_max: u32) -> u32 {
        (**self).draw(range_max)
    }
}
