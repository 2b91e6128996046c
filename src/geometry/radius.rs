use serde::Deserialize;

/// Periodic radius function `r(t)` applied around each sweep ring.
///
/// `t` is the ring angle in radians, `[0, 2π)`. The returned value multiplies
/// the profile point's distance to the axis.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RadiusProfile {
    /// Lobed cross-section: `base + amplitude · tanh(sharpness · sin(lobes · t))`.
    Ripple {
        base: f64,
        amplitude: f64,
        sharpness: f64,
        lobes: f64,
    },
    /// Plain circular cross-section.
    Constant { radius: f64 },
}

impl Default for RadiusProfile {
    fn default() -> Self {
        RadiusProfile::Ripple {
            base: 3.0,
            amplitude: 0.25,
            sharpness: 4.0,
            lobes: 12.0,
        }
    }
}

impl RadiusProfile {
    /// Evaluate the radius at angle `t`.
    pub fn radius(&self, t: f64) -> f64 {
        match *self {
            RadiusProfile::Ripple {
                base,
                amplitude,
                sharpness,
                lobes,
            } => base + amplitude * (sharpness * (lobes * t).sin()).tanh(),
            RadiusProfile::Constant { radius } => radius,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RadiusProfile::Ripple { .. } => "ripple",
            RadiusProfile::Constant { .. } => "constant",
        }
    }
}
