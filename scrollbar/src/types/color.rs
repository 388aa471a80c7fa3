use palette::{IntoColor, Oklch, Srgb};

/// Fill color of a track or thumb.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32, a: f32 },
    Rgba { r: u8, g: u8, b: u8, a: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(255, 255, 255)
    }
}

impl Color {
    pub const fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h, a: 1.0 }
    }

    pub const fn oklcha(l: f32, c: f32, h: f32, a: f32) -> Self {
        Self::Oklch { l, c, h, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgba { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self::Rgba { r, g, b, a }
    }

    /// Same color with its alpha replaced.
    pub fn with_alpha(self, alpha: f32) -> Self {
        let alpha = alpha.clamp(0.0, 1.0);
        match self {
            Self::Oklch { l, c, h, .. } => Self::Oklch { l, c, h, a: alpha },
            Self::Rgba { r, g, b, .. } => Self::Rgba { r, g, b, a: alpha },
        }
    }

    pub fn alpha(&self) -> f32 {
        match self {
            Self::Oklch { a, .. } | Self::Rgba { a, .. } => *a,
        }
    }

    pub fn to_rgb(&self) -> Rgb {
        match self {
            Self::Rgba { r, g, b, .. } => Rgb::new(*r, *g, *b),
            Self::Oklch { l, c, h, .. } => {
                let srgb: Srgb = Oklch::new(*l, *c, *h).into_color();
                let (r, g, b) = srgb.into_format::<u8>().into_components();
                Rgb::new(r, g, b)
            }
        }
    }

    /// `(l, c, h, a)` components, converting from sRGB when needed.
    pub fn to_oklch(&self) -> (f32, f32, f32, f32) {
        match self {
            Self::Oklch { l, c, h, a } => (*l, *c, *h, *a),
            Self::Rgba { r, g, b, a } => {
                let srgb = Srgb::new(*r as f32 / 255.0, *g as f32 / 255.0, *b as f32 / 255.0);
                let oklch: Oklch = srgb.into_color();
                (oklch.l, oklch.chroma, oklch.hue.into_positive_degrees(), *a)
            }
        }
    }

    /// Interpolate towards `to` in OKLCH space, taking the shortest hue path.
    pub fn lerp(&self, to: &Color, t: f32) -> Color {
        let (from_l, from_c, from_h, from_a) = self.to_oklch();
        let (to_l, to_c, to_h, to_a) = to.to_oklch();

        let l = from_l + (to_l - from_l) * t;
        let c = from_c + (to_c - from_c) * t;
        let a = from_a + (to_a - from_a) * t;

        let mut dh = to_h - from_h;
        if dh > 180.0 {
            dh -= 360.0;
        } else if dh < -180.0 {
            dh += 360.0;
        }
        let h = (from_h + dh * t).rem_euclid(360.0);

        Color::oklcha(l, c, h, a)
    }
}
