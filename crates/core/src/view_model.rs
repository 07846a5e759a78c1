//! The resource collection backing the six resource cards.

use crate::resource::{ResourceKind, ResourceState};

/// Title shown above the board counters.
pub const TITLE: &str = "Terraforming Board";

/// All six resource counters, stored in board order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceCollection {
    resources: [ResourceState; 6],
}

impl Default for ResourceCollection {
    fn default() -> Self {
        Self {
            resources: ResourceKind::ALL.map(ResourceState::new),
        }
    }
}

impl ResourceCollection {
    /// Every resource at quantity 0, production 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// The six resources in board order (MegaCredit first, Heat last).
    pub fn all_resources(&self) -> impl ExactSizeIterator<Item = &ResourceState> {
        self.resources.iter()
    }

    /// Counters for `kind`.
    pub fn resource(&self, kind: ResourceKind) -> &ResourceState {
        &self.resources[kind.index()]
    }

    /// Mutable counters for `kind`.
    pub fn resource_mut(&mut self, kind: ResourceKind) -> &mut ResourceState {
        &mut self.resources[kind.index()]
    }

    /// Zero every resource.
    pub fn reset_all(&mut self) {
        for resource in &mut self.resources {
            resource.reset();
        }
    }

    /// Header label for a generation number.
    pub fn display_generation(value: i32) -> String {
        format!("Generation: {value}")
    }

    /// Header label for a terraform value.
    pub fn display_terraform(value: i32) -> String {
        format!("Terraform: {value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holds_six_resources_in_board_order() {
        let collection = ResourceCollection::new();
        let kinds: Vec<_> = collection.all_resources().map(ResourceState::kind).collect();
        assert_eq!(collection.all_resources().len(), 6);
        assert_eq!(kinds, ResourceKind::ALL);
    }

    #[test]
    fn lookup_returns_matching_kind() {
        let mut collection = ResourceCollection::new();
        for kind in ResourceKind::ALL {
            assert_eq!(collection.resource(kind).kind(), kind);
            assert_eq!(collection.resource_mut(kind).kind(), kind);
        }
    }

    #[test]
    fn mutations_through_lookup_are_visible_in_scan() {
        let mut collection = ResourceCollection::new();
        collection.resource_mut(ResourceKind::Titan).adjust_quantity(3);

        let titan = collection
            .all_resources()
            .find(|resource| resource.kind() == ResourceKind::Titan)
            .map(ResourceState::quantity);
        assert_eq!(titan, Some(3));
        assert_eq!(collection.resource(ResourceKind::Steel).quantity(), 0);
    }

    #[test]
    fn reset_all_zeroes_every_resource() {
        let mut collection = ResourceCollection::new();
        for (step, kind) in ResourceKind::ALL.into_iter().enumerate() {
            let resource = collection.resource_mut(kind);
            resource.adjust_quantity(step as i32 + 1);
            resource.adjust_production(step as i32 + 1);
        }

        collection.reset_all();

        for resource in collection.all_resources() {
            assert_eq!(resource.quantity(), 0);
            assert_eq!(resource.production_factor(), 0);
        }
    }

    #[test]
    fn formats_header_labels() {
        assert_eq!(ResourceCollection::display_generation(7), "Generation: 7");
        assert_eq!(ResourceCollection::display_terraform(34), "Terraform: 34");
    }
}
