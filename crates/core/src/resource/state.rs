use std::ops::RangeInclusive;

use tracing::debug;

use super::kind::ResourceKind;

/// Quantity and production counters for one resource.
///
/// Adjustments never fail: values that would leave the valid range are
/// clamped to the nearest bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceState {
    kind: ResourceKind,
    quantity: i32,
    production_factor: i32,
}

impl ResourceState {
    /// Fresh counters for `kind` (both zero).
    pub fn new(kind: ResourceKind) -> Self {
        Self {
            kind,
            quantity: 0,
            production_factor: 0,
        }
    }

    /// Which resource these counters belong to.
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Card title for the resource.
    pub fn title(&self) -> &'static str {
        self.kind.title()
    }

    /// Amount currently banked.
    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    /// Amount gained each generation.
    pub fn production_factor(&self) -> i32 {
        self.production_factor
    }

    /// Closed production interval for this resource.
    pub fn range(&self) -> RangeInclusive<i32> {
        self.kind.production_range()
    }

    /// Lower production bound.
    pub fn minimum_production(&self) -> i32 {
        self.kind.minimum_production()
    }

    /// Upper production bound.
    pub fn maximum_production(&self) -> i32 {
        self.kind.maximum_production()
    }

    /// Shift the production factor by `delta`, saturating at the kind's bounds.
    pub fn adjust_production(&mut self, delta: i32) {
        self.production_factor = self
            .production_factor
            .saturating_add(delta)
            .clamp(self.minimum_production(), self.maximum_production());
        debug!(kind = %self.kind, delta, production = self.production_factor, "production adjusted");
    }

    /// Shift the quantity by `delta`, never dropping below zero.
    pub fn adjust_quantity(&mut self, delta: i32) {
        self.quantity = self
            .quantity
            .saturating_add(delta)
            .max(self.kind.minimum_quantity());
        debug!(kind = %self.kind, delta, quantity = self.quantity, "quantity adjusted");
    }

    /// Return both counters to zero.
    pub fn reset(&mut self) {
        self.quantity = 0;
        self.production_factor = 0;
        debug!(kind = %self.kind, "resource reset");
    }

    /// Label shown on the card, e.g. `Quantity: 3`.
    pub fn quantity_label(&self) -> String {
        format!("Quantity: {}", self.quantity)
    }

    /// Label shown on the card, e.g. `Production: -2`.
    pub fn production_label(&self) -> String {
        format!("Production: {}", self.production_factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_clamps_to_floor() {
        for kind in ResourceKind::ALL {
            let mut state = ResourceState::new(kind);
            state.adjust_production(-1000);
            assert_eq!(state.production_factor(), state.minimum_production());
        }
    }

    #[test]
    fn production_clamps_to_ceiling() {
        for kind in ResourceKind::ALL {
            let mut state = ResourceState::new(kind);
            state.adjust_production(1000);
            assert_eq!(state.production_factor(), state.maximum_production());
        }
    }

    #[test]
    fn production_stays_in_range_on_extreme_deltas() {
        let mut state = ResourceState::new(ResourceKind::MegaCredit);
        state.adjust_production(i32::MAX);
        assert_eq!(state.production_factor(), 30);
        state.adjust_production(i32::MIN);
        assert_eq!(state.production_factor(), -10);
        assert!(state.range().contains(&state.production_factor()));
    }

    #[test]
    fn quantity_never_goes_negative() {
        let mut state = ResourceState::new(ResourceKind::Plant);
        state.adjust_quantity(2);
        state.adjust_quantity(-5);
        assert_eq!(state.quantity(), 0);
    }

    #[test]
    fn quantity_has_no_upper_bound() {
        let mut state = ResourceState::new(ResourceKind::Heat);
        state.adjust_quantity(250);
        state.adjust_quantity(250);
        assert_eq!(state.quantity(), 500);
    }

    #[test]
    fn reset_zeroes_both_counters() {
        let mut state = ResourceState::new(ResourceKind::MegaCredit);
        state.adjust_quantity(42);
        state.adjust_production(-7);
        state.reset();
        assert_eq!(state.quantity(), 0);
        assert_eq!(state.production_factor(), 0);
    }

    #[test]
    fn labels_show_current_values() {
        let mut state = ResourceState::new(ResourceKind::MegaCredit);
        state.adjust_quantity(12);
        state.adjust_production(-3);
        assert_eq!(state.quantity_label(), "Quantity: 12");
        assert_eq!(state.production_label(), "Production: -3");
        assert_eq!(state.title(), "MegaCredit");
    }
}
