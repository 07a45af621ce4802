//! Visual contract of a reveal block: opacity and transform over time.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Where the block starts before it is revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealDirection {
    /// Rises from below.
    #[default]
    Up,
    /// Slides in from the left.
    Left,
    /// Slides in from the right.
    Right,
    /// Grows from slightly smaller.
    Scale,
}

/// Magnitudes of the initial transforms and the transition length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealMotion {
    pub offset: f32,
    pub scale: f32,
    pub duration: Duration,
}

impl Default for RevealMotion {
    fn default() -> Self {
        Self {
            offset: 30.0,
            scale: 0.92,
            duration: Duration::from_millis(700),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translate_x: f32,
    pub translate_y: f32,
    pub scale: f32,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
    };

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Linear blend towards identity. `t = 0` is `self`, `t = 1` is identity.
    fn settle(&self, t: f32) -> Transform {
        let keep = 1.0 - t;
        Transform {
            translate_x: self.translate_x * keep,
            translate_y: self.translate_y * keep,
            scale: self.scale + (1.0 - self.scale) * t,
        }
    }

    pub fn to_css(&self) -> String {
        if self.is_identity() {
            return "none".to_string();
        }
        let mut parts = Vec::new();
        if self.translate_x != 0.0 {
            parts.push(format!("translateX({}px)", self.translate_x));
        }
        if self.translate_y != 0.0 {
            parts.push(format!("translateY({}px)", self.translate_y));
        }
        if self.scale != 1.0 {
            parts.push(format!("scale({})", self.scale));
        }
        parts.join(" ")
    }
}

impl RevealDirection {
    pub fn initial_transform(self, motion: &RevealMotion) -> Transform {
        match self {
            Self::Up => Transform {
                translate_y: motion.offset,
                ..Transform::IDENTITY
            },
            Self::Left => Transform {
                translate_x: -motion.offset,
                ..Transform::IDENTITY
            },
            Self::Right => Transform {
                translate_x: motion.offset,
                ..Transform::IDENTITY
            },
            Self::Scale => Transform {
                scale: motion.scale,
                ..Transform::IDENTITY
            },
        }
    }
}

/// Cubic ease-out on `[0, 1]`.
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub opacity: f32,
    pub transform: Transform,
}

impl RevealStyle {
    pub fn hidden(direction: RevealDirection, motion: &RevealMotion) -> Self {
        Self {
            opacity: 0.0,
            transform: direction.initial_transform(motion),
        }
    }

    pub fn visible() -> Self {
        Self {
            opacity: 1.0,
            transform: Transform::IDENTITY,
        }
    }

    /// Style `elapsed` after the reveal started.
    pub fn transitioning(
        direction: RevealDirection,
        motion: &RevealMotion,
        elapsed: Duration,
    ) -> Self {
        if motion.duration.is_zero() || elapsed >= motion.duration {
            return Self::visible();
        }
        let progress = ease_out(elapsed.as_secs_f32() / motion.duration.as_secs_f32());
        Self {
            opacity: progress,
            transform: direction.initial_transform(motion).settle(progress),
        }
    }

    pub fn is_settled(&self) -> bool {
        self.opacity >= 1.0 && self.transform.is_identity()
    }
}
