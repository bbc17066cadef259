//! First-order signal filters for display values.
//!
//! These only shape what is drawn: they never feed back into telemetry.
//! NaN is the "no sample yet" marker throughout, so a filter seeded with NaN
//! passes its first real input straight through.

/// Exponential low-pass step: `prev + a * (x - prev)`. Returns `x` if `prev` is NaN.
#[inline]
pub fn low_pass(
    prev: f32,
    x: f32,
    a: f32,
) -> f32 {
    if prev.is_nan() { x } else { prev + a * (x - prev) }
}

/// Keep the last good value when the new one is NaN.
#[inline]
pub fn keep_or(
    last: f32,
    now: f32,
) -> f32 {
    if now.is_nan() { last } else { now }
}

/// Circular low-pass on `[0, 360)`, taking the short way around.
pub fn smooth_heading(
    prev: f32,
    now: f32,
    a: f32,
) -> f32 {
    if prev.is_nan() {
        return now;
    }
    let mut diff = now - prev;
    if diff > 180.0 {
        diff -= 360.0;
    }
    if diff < -180.0 {
        diff += 360.0;
    }
    let out = libm::fmodf(prev + diff * a, 360.0);
    if out < 0.0 { out + 360.0 } else { out }
}

/// Stateful exponential smoother with output clamped to `[lo, hi]`.
#[derive(Debug, Clone, Copy)]
pub struct ExpSmoother {
    value: f32,
    alpha: f32,
    lo: f32,
    hi: f32,
}

impl ExpSmoother {
    /// Start at `initial`; `alpha` is clamped to `[0, 1]`.
    pub fn new(
        initial: f32,
        alpha: f32,
        lo: f32,
        hi: f32,
    ) -> Self {
        let mut s = Self { value: initial, alpha: crate::geometry::clamp01(alpha), lo, hi };
        s.value = s.clamp(initial);
        s
    }

    /// Move one step toward `target` and return the new value.
    pub fn update(
        &mut self,
        target: f32,
    ) -> f32 {
        if target.is_nan() {
            return self.value;
        }
        self.value = self.clamp(low_pass(self.value, target, self.alpha));
        self.value
    }

    pub fn value(&self) -> f32 { self.value }

    fn clamp(
        &self,
        v: f32,
    ) -> f32 {
        // max/min so a NaN state settles on `lo`
        v.max(self.lo).min(self.hi)
    }
}

/// Stateful [`smooth_heading`] filter. Starts empty (NaN).
#[derive(Debug, Clone, Copy)]
pub struct HeadingSmoother {
    value: f32,
    alpha: f32,
}

impl HeadingSmoother {
    pub const fn new(alpha: f32) -> Self { Self { value: f32::NAN, alpha } }

    /// Feed a raw heading. NaN inputs keep the previous heading.
    pub fn update(
        &mut self,
        heading: f32,
    ) -> f32 {
        if !heading.is_nan() {
            self.value = smooth_heading(self.value, heading, self.alpha);
        }
        self.value
    }

    /// Current heading, or NaN before the first sample.
    pub fn value(&self) -> f32 { self.value }
}

// =============================================================================
// Unit Tests
// =============================================================================
