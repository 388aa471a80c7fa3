use crate::types::{Color, Padding};

/// Visual configuration of a scrollbar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollbarStyle {
    /// Cross-axis size of the track.
    pub track_thickness: f32,
    /// Cross-axis size of the thumb, centered within the track.
    pub thumb_thickness: f32,
    pub track_padding: Padding,
    pub track_color: Color,
    pub thumb_color: Color,
}

impl Default for ScrollbarStyle {
    fn default() -> Self {
        Self {
            track_thickness: 6.0,
            thumb_thickness: 6.0,
            track_padding: Padding::default(),
            track_color: Color::rgba(255, 255, 255, 0.15),
            thumb_color: Color::rgb(153, 153, 153),
        }
    }
}

impl ScrollbarStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same thickness for track and thumb.
    pub fn thickness(self, thickness: f32) -> Self {
        self.track_thickness(thickness).thumb_thickness(thickness)
    }

    pub fn track_thickness(mut self, thickness: f32) -> Self {
        self.track_thickness = thickness.max(0.0);
        self
    }

    pub fn thumb_thickness(mut self, thickness: f32) -> Self {
        self.thumb_thickness = thickness.max(0.0);
        self
    }

    pub fn track_padding(mut self, padding: Padding) -> Self {
        self.track_padding = padding;
        self
    }

    pub fn track_color(mut self, color: Color) -> Self {
        self.track_color = color;
        self
    }

    pub fn thumb_color(mut self, color: Color) -> Self {
        self.thumb_color = color;
        self
    }
}
