//! Theme records: the unit stored in the registry.

use bitflags::bitflags;

use crate::power::PowerProvider;

bitflags! {
    /// Presentation toggles for an enchantment carrying a theme.
    ///
    /// Purely descriptive; the rendering layer decides what each flag looks
    /// like on screen.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct EffectFlags: u8 {
        /// Tinted item glint.
        const GLINT     = 1 << 0;
        /// Ambient particles around the enchanted object.
        const PARTICLES = 1 << 1;
        /// Periodic color pulse.
        const PULSE     = 1 << 2;
    }
}

/// Optional presentation descriptor attached to a theme.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThemeEffects {
    /// Which presentation effects are active.
    #[cfg_attr(feature = "serde", serde(default))]
    pub flags: EffectFlags,
    /// Particle identifier used when [`EffectFlags::PARTICLES`] is set.
    #[cfg_attr(feature = "serde", serde(default))]
    pub particle: Option<String>,
    /// Pulse period in ticks when [`EffectFlags::PULSE`] is set.
    #[cfg_attr(feature = "serde", serde(default))]
    pub pulse_period: Option<u32>,
}

/// A named, colorable bundle of power providers plus presentation effects.
///
/// Identity is the external [`crate::ThemeKey`] assigned at load time by the
/// registry, not stored on the record. Themes are constructed fresh on every
/// content reload, immutable once constructed, and discarded wholesale on
/// the next reload.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnchantmentTheme {
    /// Name shown to players.
    pub display_name: String,
    /// Packed RGB color code (`0xRRGGBB`), if the theme tints anything.
    #[cfg_attr(feature = "serde", serde(default))]
    pub color: Option<u32>,
    /// Power providers in declared order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub providers: Vec<PowerProvider>,
    /// Optional presentation descriptor.
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: Option<ThemeEffects>,
}

impl EnchantmentTheme {
    /// Creates a bare theme with no color, providers or effects.
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            color: None,
            providers: Vec::new(),
            effects: None,
        }
    }

    /// Sets the color code (builder pattern).
    #[must_use]
    pub fn with_color(mut self, color: u32) -> Self {
        self.color = Some(color);
        self
    }

    /// Adds a power provider (builder pattern).
    #[must_use]
    pub fn with_provider(mut self, provider: PowerProvider) -> Self {
        self.providers.push(provider);
        self
    }

    /// Sets the presentation effects (builder pattern).
    #[must_use]
    pub fn with_effects(mut self, effects: ThemeEffects) -> Self {
        self.effects = Some(effects);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::power::ObjectMatcher;

    #[test]
    fn test_builder_accumulates_providers_in_order() {
        let theme = EnchantmentTheme::new("Arcane")
            .with_color(0x7f00ff)
            .with_provider(PowerProvider::new(ObjectMatcher::object("candle"), 1))
            .with_provider(PowerProvider::new(ObjectMatcher::object("bookshelf"), 2));

        assert_eq!(theme.color, Some(0x7f00ff));
        assert_eq!(theme.providers.len(), 2);
        assert_eq!(theme.providers[0].base_power, 1);
        assert_eq!(theme.providers[1].base_power, 2);
    }

    #[test]
    fn test_effect_flags_compose() {
        let flags = EffectFlags::GLINT | EffectFlags::PULSE;
        assert!(flags.contains(EffectFlags::GLINT));
        assert!(!flags.contains(EffectFlags::PARTICLES));
    }
}
