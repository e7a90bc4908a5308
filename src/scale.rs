//! Time-scale registry.
//!
//! A [`TimeScale`] names a fixed ratio relative to one second and carries the
//! canonical short label used when printing durations (`n` for nano, `µ` for
//! micro, the empty string for plain seconds, ...). The set of scales is
//! closed: every variant has a label via an exhaustive `match`, so a scale
//! without a registry entry cannot exist, and referring to a scale that was
//! compiled out (see the `calendar-units` feature) is a compile error rather
//! than a runtime one.

/// A time scale, expressed as a ratio relative to one second.
///
/// The default scale is [`TimeScale::Milli`].
///
/// The calendar scales (`Minute`, `Hour`, `Day`) are gated behind the
/// default-enabled `calendar-units` cargo feature. They collide semantically
/// with pure powers of ten in some contexts (`Hour` shares the `h` label with
/// `Hecto`); compiling with `default-features = false` removes the variants
/// entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeScale {
    /// 10⁻¹⁸ s
    Atto,
    /// 10⁻¹⁵ s
    Femto,
    /// 10⁻¹² s
    Pico,
    /// 10⁻⁹ s
    Nano,
    /// 10⁻⁶ s
    Micro,
    /// 10⁻³ s
    #[default]
    Milli,
    /// 10⁻² s
    Centi,
    /// 10⁻¹ s
    Deci,
    /// 1 s
    Unit,
    /// 10¹ s
    Deca,
    /// 10² s
    Hecto,
    /// 10³ s
    Kilo,
    /// 10⁶ s
    Mega,
    /// 10⁹ s
    Giga,
    /// 10¹² s
    Tera,
    /// 10¹⁵ s
    Peta,
    /// 10¹⁸ s
    Exa,
    /// 60 s
    #[cfg(feature = "calendar-units")]
    Minute,
    /// 3600 s
    #[cfg(feature = "calendar-units")]
    Hour,
    /// 86400 s
    #[cfg(feature = "calendar-units")]
    Day,
}

impl TimeScale {
    /// Canonical short label for this scale.
    ///
    /// Labels follow the SI prefixes; the base scale has an empty label so
    /// that rendering `<value><label>s` reads `12.5s`.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Atto => "a",
            Self::Femto => "f",
            Self::Pico => "p",
            Self::Nano => "n",
            Self::Micro => "µ",
            Self::Milli => "m",
            Self::Centi => "c",
            Self::Deci => "d",
            Self::Unit => "",
            Self::Deca => "da",
            Self::Hecto => "h",
            Self::Kilo => "k",
            Self::Mega => "M",
            Self::Giga => "G",
            Self::Tera => "T",
            Self::Peta => "P",
            Self::Exa => "E",
            #[cfg(feature = "calendar-units")]
            Self::Minute => "min",
            #[cfg(feature = "calendar-units")]
            Self::Hour => "h",
            #[cfg(feature = "calendar-units")]
            Self::Day => "day",
        }
    }

    /// The ratio of this scale to one second, as `(numerator, denominator)`.
    ///
    /// One unit of this scale equals `numerator / denominator` seconds:
    /// `Nano` is `(1, 10⁹)`, `Minute` is `(60, 1)`.
    pub const fn ratio(self) -> (u64, u64) {
        match self {
            Self::Atto => (1, 1_000_000_000_000_000_000),
            Self::Femto => (1, 1_000_000_000_000_000),
            Self::Pico => (1, 1_000_000_000_000),
            Self::Nano => (1, 1_000_000_000),
            Self::Micro => (1, 1_000_000),
            Self::Milli => (1, 1_000),
            Self::Centi => (1, 100),
            Self::Deci => (1, 10),
            Self::Unit => (1, 1),
            Self::Deca => (10, 1),
            Self::Hecto => (100, 1),
            Self::Kilo => (1_000, 1),
            Self::Mega => (1_000_000, 1),
            Self::Giga => (1_000_000_000, 1),
            Self::Tera => (1_000_000_000_000, 1),
            Self::Peta => (1_000_000_000_000_000, 1),
            Self::Exa => (1_000_000_000_000_000_000, 1),
            #[cfg(feature = "calendar-units")]
            Self::Minute => (60, 1),
            #[cfg(feature = "calendar-units")]
            Self::Hour => (3_600, 1),
            #[cfg(feature = "calendar-units")]
            Self::Day => (86_400, 1),
        }
    }

    /// How many units of this scale fit in one second.
    pub fn units_per_second(self) -> f64 {
        let (num, den) = self.ratio();
        den as f64 / num as f64
    }

    /// Convert a raw duration in seconds into this scale's unit.
    pub fn from_secs(self, secs: f64) -> f64 {
        secs * self.units_per_second()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_registry_table() {
        assert_eq!(TimeScale::Atto.label(), "a");
        assert_eq!(TimeScale::Femto.label(), "f");
        assert_eq!(TimeScale::Pico.label(), "p");
        assert_eq!(TimeScale::Nano.label(), "n");
        assert_eq!(TimeScale::Micro.label(), "µ");
        assert_eq!(TimeScale::Milli.label(), "m");
        assert_eq!(TimeScale::Centi.label(), "c");
        assert_eq!(TimeScale::Deci.label(), "d");
        assert_eq!(TimeScale::Unit.label(), "");
        assert_eq!(TimeScale::Deca.label(), "da");
        assert_eq!(TimeScale::Hecto.label(), "h");
        assert_eq!(TimeScale::Kilo.label(), "k");
        assert_eq!(TimeScale::Mega.label(), "M");
        assert_eq!(TimeScale::Giga.label(), "G");
        assert_eq!(TimeScale::Tera.label(), "T");
        assert_eq!(TimeScale::Peta.label(), "P");
        assert_eq!(TimeScale::Exa.label(), "E");
    }

    #[cfg(feature = "calendar-units")]
    #[test]
    fn calendar_labels() {
        assert_eq!(TimeScale::Minute.label(), "min");
        assert_eq!(TimeScale::Hour.label(), "h");
        assert_eq!(TimeScale::Day.label(), "day");
    }

    #[test]
    fn default_scale_is_milli() {
        assert_eq!(TimeScale::default(), TimeScale::Milli);
    }

    #[test]
    fn conversion_scales_by_ratio() {
        assert_eq!(TimeScale::Milli.from_secs(1.0), 1_000.0);
        assert_eq!(TimeScale::Nano.from_secs(1.0), 1e9);
        assert_eq!(TimeScale::Unit.from_secs(2.5), 2.5);
        assert_eq!(TimeScale::Kilo.from_secs(2_000.0), 2.0);
    }

    #[cfg(feature = "calendar-units")]
    #[test]
    fn calendar_conversion() {
        assert_eq!(TimeScale::Minute.from_secs(120.0), 2.0);
        assert_eq!(TimeScale::Hour.from_secs(1_800.0), 0.5);
        assert_eq!(TimeScale::Day.from_secs(86_400.0), 1.0);
    }
}
