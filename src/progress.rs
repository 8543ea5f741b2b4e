use crate::consts::MAX_PROGRESS;

/// Progress value clamped to [`MAX_PROGRESS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Progress(u8);

impl Progress {
    pub fn new(value: u8) -> Self {
        Self(value.min(MAX_PROGRESS))
    }

    pub fn complete() -> Self {
        Self(MAX_PROGRESS)
    }

    /// Advance by `by`, saturating at the scale bound.
    pub fn advance(&mut self, by: u8) {
        self.advance_toward(by, MAX_PROGRESS);
    }

    /// Advance by `by`, saturating at a configured `cap`. The cap itself
    /// never exceeds the scale bound.
    pub fn advance_toward(&mut self, by: u8, cap: u8) {
        let cap = cap.min(MAX_PROGRESS);
        self.0 = self.0.saturating_add(by).min(cap);
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn is_complete(self) -> bool {
        self.0 == MAX_PROGRESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_cap() {
        assert_eq!(Progress::new(250).get(), MAX_PROGRESS);
        assert_eq!(Progress::new(42).get(), 42);
    }

    #[test]
    fn advance_saturates_at_cap() {
        let mut p = Progress::new(90);
        p.advance(30);
        assert_eq!(p.get(), MAX_PROGRESS);
        assert!(p.is_complete());
        p.advance(1);
        assert_eq!(p.get(), MAX_PROGRESS);
    }

    #[test]
    fn advance_toward_respects_configured_cap() {
        let mut p = Progress::new(40);
        p.advance_toward(30, 50);
        assert_eq!(p.get(), 50);
        p.advance_toward(30, 50);
        assert_eq!(p.get(), 50);
    }

    #[test]
    fn advance_toward_cap_never_exceeds_scale_bound() {
        let mut p = Progress::default();
        p.advance_toward(u8::MAX, 200);
        assert_eq!(p.get(), MAX_PROGRESS);
    }

    #[test]
    fn default_is_not_complete() {
        let p = Progress::default();
        assert_eq!(p.get(), 0);
        assert!(!p.is_complete());
        assert_eq!(Progress::complete().get(), MAX_PROGRESS);
    }
}
