//! Sprite layers and tinting.
//!
//! The simulation never touches pixels. A [`SpriteList`] is an ordered stack
//! of logical asset keys (bottom to top) with per-layer tint and alpha, plus a
//! z-index that the render collaborator uses to order entities. Higher
//! z-index values are drawn later (on top).

use bevy_ecs::prelude::Component;
use smallvec::{SmallVec, smallvec};

/// RGB colour modulation applied to a sprite layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Tint {
    pub const WHITE: Tint = Tint::new(255, 255, 255);
    pub const RED: Tint = Tint::new(255, 0, 0);
    pub const YELLOW: Tint = Tint::new(255, 255, 0);
    pub const CYAN: Tint = Tint::new(0, 255, 255);
    pub const ORANGE: Tint = Tint::new(255, 165, 0);
    pub const GREY: Tint = Tint::new(150, 140, 130);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert from HSV. `hue` is in degrees, `saturation` and `value` in `[0, 1]`.
    pub fn from_hsv(hue: f32, saturation: f32, value: f32) -> Self {
        let h = hue.rem_euclid(360.0) / 60.0;
        let s = saturation.clamp(0.0, 1.0);
        let v = value.clamp(0.0, 1.0);
        let c = v * s;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let m = v - c;
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let to_u8 = |f: f32| ((f + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::new(to_u8(r), to_u8(g), to_u8(b))
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self::WHITE
    }
}

/// One visual layer of an entity.
#[derive(Clone, Debug, PartialEq)]
pub struct SpriteLayer {
    /// Logical asset key, resolved by the asset collaborator.
    pub key: &'static str,
    pub tint: Tint,
    /// Opacity in `[0, 1]`.
    pub alpha: f32,
}

impl SpriteLayer {
    pub fn new(key: &'static str) -> Self {
        Self {
            key,
            tint: Tint::WHITE,
            alpha: 1.0,
        }
    }

    pub fn with_tint(mut self, tint: Tint) -> Self {
        self.tint = tint;
        self
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }
}

/// Ordered sprite stack (index 0 is drawn first) plus a draw-order z-index.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct SpriteList {
    pub layers: SmallVec<[SpriteLayer; 2]>,
    pub z_index: i32,
}

impl SpriteList {
    pub fn single(layer: SpriteLayer) -> Self {
        Self {
            layers: smallvec![layer],
            z_index: 0,
        }
    }

    pub fn with_layer(mut self, layer: SpriteLayer) -> Self {
        self.layers.push(layer);
        self
    }

    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Set the alpha of the base (bottom) layer, if any.
    pub fn set_base_alpha(&mut self, alpha: f32) {
        if let Some(base) = self.layers.first_mut() {
            base.set_alpha(alpha);
        }
    }

    pub fn base_alpha(&self) -> Option<f32> {
        self.layers.first().map(|l| l.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsv_primary_hues() {
        assert_eq!(Tint::from_hsv(0.0, 1.0, 1.0), Tint::RED);
        assert_eq!(Tint::from_hsv(120.0, 1.0, 1.0), Tint::new(0, 255, 0));
        assert_eq!(Tint::from_hsv(240.0, 1.0, 1.0), Tint::new(0, 0, 255));
    }

    #[test]
    fn hsv_zero_saturation_is_grey() {
        let t = Tint::from_hsv(200.0, 0.0, 0.5);
        assert_eq!(t.r, t.g);
        assert_eq!(t.g, t.b);
    }

    #[test]
    fn base_alpha_only_touches_first_layer() {
        let mut s = SpriteList::single(SpriteLayer::new("upgrade_base"))
            .with_layer(SpriteLayer::new("up_arrow"));
        s.set_base_alpha(0.5);
        assert_eq!(s.layers[0].alpha, 0.5);
        assert_eq!(s.layers[1].alpha, 1.0);
    }

    #[test]
    fn alpha_is_clamped() {
        let mut layer = SpriteLayer::new("player");
        layer.set_alpha(3.0);
        assert_eq!(layer.alpha, 1.0);
        layer.set_alpha(-1.0);
        assert_eq!(layer.alpha, 0.0);
    }
}
