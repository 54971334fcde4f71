//! Slider: a float-range leaf widget built from staged range bounds.

use std::any::Any;

use crate::widget::{Builder, Widget};

/// A leaf widget selecting a value from a float range.
#[derive(Debug, Clone)]
pub struct Slider {
    min: f32,
    max: f32,
    step: f32,
    value: f32,
    style: String,
}

impl Default for Slider {
    fn default() -> Self {
        Self::from_builder(&Builder::new())
    }
}

impl Slider {
    /// Build from staged range bounds; the initial value is clamped into
    /// the range.
    pub fn from_builder(builder: &Builder) -> Self {
        let min = builder.min();
        let max = builder.max().max(min);
        Self {
            min,
            max,
            step: builder.step(),
            value: builder.value().clamp(min, max),
            style: builder.style().to_string(),
        }
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn style(&self) -> &str {
        &self.style
    }

    /// Set the current value, clamped into the range.
    pub fn set_value(&mut self, value: f32) {
        self.value = value.clamp(self.min, self.max);
    }
}

impl Widget for Slider {
    fn widget_type(&self) -> &str {
        "Slider"
    }

    fn summary(&self) -> Option<String> {
        Some(format!("{} in {}..{}", self.value, self.min, self.max))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_builder_clamps_value() {
        let builder = Builder::new().with_range(0.0, 10.0, 0.5);
        let slider = Slider::from_builder(&builder);
        assert_eq!(slider.min(), 0.0);
        assert_eq!(slider.max(), 10.0);
        assert_eq!(slider.step(), 0.5);
        assert_eq!(slider.value(), 0.0);
    }

    #[test]
    fn set_value_clamps() {
        let mut slider = Slider::from_builder(&Builder::new().with_range(0.0, 5.0, 1.0));
        slider.set_value(99.0);
        assert_eq!(slider.value(), 5.0);
        slider.set_value(-1.0);
        assert_eq!(slider.value(), 0.0);
    }

    #[test]
    fn degenerate_range_is_repaired() {
        let slider = Slider::from_builder(&Builder::new().with_range(10.0, 2.0, 1.0));
        assert!(slider.max() >= slider.min());
    }
}
