use thiserror::Error;

/// An implementation of a time-decaying value
pub trait Decay {
    /// Calculate value at time `t`
    fn evaluate(&self, t: f32) -> f32;
}

/// Rejected decay parameters
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecayError {
    #[error("`{name}` must be in the interval [0, 1], got {value}")]
    OutOfUnitInterval { name: &'static str, value: f32 },
}

fn validate_unit(name: &'static str, value: f32) -> Result<(), DecayError> {
    (0.0..=1.0)
        .contains(&value)
        .then_some(())
        .ok_or(DecayError::OutOfUnitInterval { name, value })
}

/// A constant value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Constant {
    value: f32,
}

impl Constant {
    pub fn new(value: f32) -> Self {
        Self { value }
    }
}

impl Decay for Constant {
    fn evaluate(&self, _t: f32) -> f32 {
        self.value
    }
}

/// v(t) = v<sub>i</sub> * r<sup>t</sup>
///
/// Equivalent to multiplying the value by `r` once per unit of time. There is no
/// floor other than the limit of the repeated multiplication.
#[derive(Debug, Clone, PartialEq)]
pub struct Multiplicative {
    rate: f32,
    vi: f32,
}

impl Multiplicative {
    /// **Errors** if `rate` or `vi` lies outside `[0,1]`
    pub fn new(rate: f32, vi: f32) -> Result<Self, DecayError> {
        validate_unit("rate", rate)?;
        validate_unit("vi", vi)?;
        Ok(Self { rate, vi })
    }
}

impl Default for Multiplicative {
    /// Starts fully exploratory and shrinks by 1% per step
    fn default() -> Self {
        Self {
            rate: 0.99,
            vi: 1.0,
        }
    }
}

impl Decay for Multiplicative {
    fn evaluate(&self, t: f32) -> f32 {
        let &Self { rate, vi } = self;
        vi * rate.powf(t)
    }
}
