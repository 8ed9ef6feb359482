//! Power providers and the bonus arithmetic applied on top of them.
//!
//! A [`PowerProvider`] maps a set (or tag) of world objects to a base power
//! contribution; its [`PowerBonus`] list is folded over the running total in
//! declared order. All arithmetic is integer-only and deterministic: the only
//! order-sensitive step is the bonus list itself, which is ordered by the
//! source data, never by discovery order.

use std::collections::BTreeSet;

use crate::id::{ObjectId, TagId};
use crate::oracle::TagOracle;

/// Selects which world objects feed a provider.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObjectMatcher {
    /// An explicit set of object identifiers.
    Objects(BTreeSet<ObjectId>),
    /// Every object covered by a tag; membership is answered by the host's
    /// tag table through [`TagOracle`].
    Tag(TagId),
}

impl ObjectMatcher {
    /// Convenience constructor for a single-object matcher.
    pub fn object(id: impl Into<ObjectId>) -> Self {
        Self::Objects(BTreeSet::from([id.into()]))
    }

    /// Convenience constructor for a tag matcher.
    pub fn tag(id: impl Into<TagId>) -> Self {
        Self::Tag(id.into())
    }

    /// Returns true if `object` satisfies this matcher.
    pub fn matches(&self, object: &ObjectId, tags: &dyn TagOracle) -> bool {
        match self {
            Self::Objects(objects) => objects.contains(object),
            Self::Tag(tag) => tags.tag_contains(tag, object),
        }
    }
}

/// Predicate gating a bonus.
///
/// Conditions read the aggregated [`MatchContext`], never a single
/// occurrence: evaluating per occurrence would make the result depend on
/// snapshot iteration order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BonusCondition {
    /// Applies unconditionally.
    Always,
    /// Total matched occurrence count is at least the given number.
    CountAtLeast(u32),
    /// Some matched occurrence carries the named property.
    Property(String),
}

impl BonusCondition {
    /// Evaluates the predicate against the aggregated match context.
    pub fn is_met(&self, ctx: &MatchContext) -> bool {
        match self {
            Self::Always => true,
            Self::CountAtLeast(min) => ctx.count >= *min,
            Self::Property(name) => ctx.properties.contains(name),
        }
    }
}

/// Adjustment a bonus makes to the provider's running total.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BonusEffect {
    /// Adds a constant.
    Flat(i32),
    /// Adds `value × matched_count`.
    PerOccurrence(i32),
    /// Adds `value × (matched_count − 1)`; contributes nothing when fewer
    /// than two occurrences matched.
    PerExtraOccurrence(i32),
    /// Integer-percent scaling: `total × (100 + percent) / 100`.
    /// `Scale(50)` is ×1.5, `Scale(-20)` is ×0.8.
    Scale(i32),
}

impl BonusEffect {
    fn apply(&self, total: i64, ctx: &MatchContext) -> i64 {
        match self {
            Self::Flat(value) => total + i64::from(*value),
            Self::PerOccurrence(value) => total + i64::from(*value) * i64::from(ctx.count),
            Self::PerExtraOccurrence(value) => {
                total + i64::from(*value) * i64::from(ctx.count.saturating_sub(1))
            }
            Self::Scale(percent) => total * (100 + i64::from(*percent)) / 100,
        }
    }
}

/// A single conditional modifier applied on top of a provider's base power.
///
/// Immutable and defined entirely by loaded data; identity is structural
/// equality only.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerBonus {
    pub condition: BonusCondition,
    pub effect: BonusEffect,
}

impl PowerBonus {
    /// Creates a bonus from a condition and an effect.
    pub fn new(condition: BonusCondition, effect: BonusEffect) -> Self {
        Self { condition, effect }
    }

    /// Creates an unconditional bonus.
    pub fn always(effect: BonusEffect) -> Self {
        Self::new(BonusCondition::Always, effect)
    }
}

/// Aggregated view of the snapshot occurrences matched by one provider.
///
/// `count` is the sum of matched occurrence counts; `properties` is the
/// union of the matched occurrences' property sets.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchContext {
    pub count: u32,
    pub properties: BTreeSet<String>,
}

impl MatchContext {
    /// Creates a context with the given count and no properties.
    pub fn new(count: u32) -> Self {
        Self {
            count,
            properties: BTreeSet::new(),
        }
    }

    /// Attaches properties to this context (builder pattern).
    #[must_use]
    pub fn with_properties(mut self, properties: impl IntoIterator<Item = String>) -> Self {
        self.properties.extend(properties);
        self
    }
}

/// Associates a set of world objects with a base power and an ordered list
/// of bonuses.
///
/// # Evaluation
///
/// With zero matched occurrences the provider contributes nothing and its
/// bonuses are skipped. Otherwise the running total starts at
/// `base_power × matched_count` and each bonus whose condition holds is
/// applied in list order, each observing the total produced by the bonuses
/// before it. The final contribution is floored at zero.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerProvider {
    pub matcher: ObjectMatcher,
    pub base_power: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bonuses: Vec<PowerBonus>,
}

impl PowerProvider {
    /// Creates a provider with no bonuses.
    pub fn new(matcher: ObjectMatcher, base_power: u32) -> Self {
        Self {
            matcher,
            base_power,
            bonuses: Vec::new(),
        }
    }

    /// Adds a bonus to the end of the evaluation order (builder pattern).
    #[must_use]
    pub fn with_bonus(mut self, bonus: PowerBonus) -> Self {
        self.bonuses.push(bonus);
        self
    }

    /// Computes this provider's contribution for the matched occurrences.
    pub fn evaluate(&self, ctx: &MatchContext) -> u32 {
        if ctx.count == 0 {
            return 0;
        }

        let mut total = i64::from(self.base_power) * i64::from(ctx.count);
        for bonus in &self.bonuses {
            if bonus.condition.is_met(ctx) {
                total = bonus.effect.apply(total, ctx);
            }
        }

        // Theme totals are non-negative integers; a bonus may drive the
        // running total below zero mid-fold, the contribution may not.
        total.clamp(0, i64::from(u32::MAX)) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bookshelf_provider(base_power: u32) -> PowerProvider {
        PowerProvider::new(ObjectMatcher::object("oak_bookshelf"), base_power)
    }

    #[test]
    fn test_base_power_scales_with_occurrence_count() {
        let provider = bookshelf_provider(1);
        assert_eq!(provider.evaluate(&MatchContext::new(5)), 5);
    }

    #[test]
    fn test_zero_matches_contribute_nothing() {
        let provider = bookshelf_provider(3)
            .with_bonus(PowerBonus::always(BonusEffect::Flat(100)));
        assert_eq!(provider.evaluate(&MatchContext::new(0)), 0);
    }

    #[test]
    fn test_per_extra_occurrence_bonus() {
        // base 2 over 3 occurrences, then +1 per occurrence beyond the
        // first: 2*3 + 1*2 = 8.
        let provider = bookshelf_provider(2)
            .with_bonus(PowerBonus::always(BonusEffect::PerExtraOccurrence(1)));
        assert_eq!(provider.evaluate(&MatchContext::new(3)), 8);
    }

    #[test]
    fn test_bonus_order_is_observable() {
        let flat_then_scale = bookshelf_provider(2)
            .with_bonus(PowerBonus::always(BonusEffect::Flat(4)))
            .with_bonus(PowerBonus::always(BonusEffect::Scale(50)));
        let scale_then_flat = bookshelf_provider(2)
            .with_bonus(PowerBonus::always(BonusEffect::Scale(50)))
            .with_bonus(PowerBonus::always(BonusEffect::Flat(4)));

        let ctx = MatchContext::new(1);
        // (2 + 4) * 1.5 = 9 vs 2 * 1.5 + 4 = 7
        assert_eq!(flat_then_scale.evaluate(&ctx), 9);
        assert_eq!(scale_then_flat.evaluate(&ctx), 7);
    }

    #[test]
    fn test_count_condition_gates_bonus() {
        let provider = bookshelf_provider(1).with_bonus(PowerBonus::new(
            BonusCondition::CountAtLeast(4),
            BonusEffect::Flat(10),
        ));
        assert_eq!(provider.evaluate(&MatchContext::new(3)), 3);
        assert_eq!(provider.evaluate(&MatchContext::new(4)), 14);
    }

    #[test]
    fn test_property_condition_reads_aggregated_context() {
        let provider = bookshelf_provider(1).with_bonus(PowerBonus::new(
            BonusCondition::Property("enchanted".to_owned()),
            BonusEffect::PerOccurrence(2),
        ));

        let plain = MatchContext::new(2);
        let enchanted = MatchContext::new(2).with_properties(["enchanted".to_owned()]);
        assert_eq!(provider.evaluate(&plain), 2);
        assert_eq!(provider.evaluate(&enchanted), 6);
    }

    #[test]
    fn test_contribution_floors_at_zero() {
        let provider = bookshelf_provider(1)
            .with_bonus(PowerBonus::always(BonusEffect::Flat(-50)));
        assert_eq!(provider.evaluate(&MatchContext::new(2)), 0);
    }
}
