/// Easing curves applied to a tween's normalized progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    QuadOut,
    #[default]
    CubicOut,
    BackOut,
}

impl Easing {
    /// Map progress `t` in \[0, 1\] to eased progress. Endpoints are exact.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::BackOut => {
                const C1: f32 = 1.70158;
                const C3: f32 = C1 + 1.0;
                let u = t - 1.0;
                1.0 + C3 * u.powi(3) + C1 * u.powi(2)
            }
        }
    }
}

/// What happened to an animated value during one `advance` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TweenEvent {
    Idle,
    Running,
    /// Reported exactly once, on the frame the tween reaches its end value.
    Completed,
}

#[derive(Clone, Copy, Debug)]
struct Tween {
    from: f32,
    to: f32,
    elapsed: f32,
    duration: f32,
    easing: Easing,
}

/// A scalar property that owns at most one running tween.
///
/// Starting a tween while another is running replaces it, continuing from the
/// current value. That gives property-level cancellation without any registry.
#[derive(Clone, Copy, Debug)]
pub struct Animated {
    value: f32,
    tween: Option<Tween>,
}

impl Animated {
    pub fn new(value: f32) -> Self {
        Self { value, tween: None }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// The value this property is heading to (its current value when idle).
    pub fn target(&self) -> f32 {
        self.tween.map(|t| t.to).unwrap_or(self.value)
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Jump to `value`, dropping any running tween.
    pub fn set(&mut self, value: f32) {
        self.value = value;
        self.tween = None;
    }

    pub fn animate_to(&mut self, to: f32, duration_sec: f32, easing: Easing) {
        if duration_sec <= 0.0 {
            self.set(to);
            return;
        }
        self.tween = Some(Tween {
            from: self.value,
            to,
            elapsed: 0.0,
            duration: duration_sec,
            easing,
        });
    }

    pub fn advance(&mut self, dt_sec: f32) -> TweenEvent {
        let Some(tw) = self.tween.as_mut() else {
            return TweenEvent::Idle;
        };
        tw.elapsed += dt_sec.max(0.0);
        if tw.elapsed >= tw.duration {
            self.value = tw.to;
            self.tween = None;
            return TweenEvent::Completed;
        }
        let k = tw.easing.apply(tw.elapsed / tw.duration);
        self.value = tw.from + (tw.to - tw.from) * k;
        TweenEvent::Running
    }
}

impl Default for Animated {
    fn default() -> Self {
        Self::new(0.0)
    }
}
