use std::{fmt, ops::RangeInclusive};

/// Highest production factor any resource can reach.
pub const MAXIMUM_PRODUCTION: i32 = 30;

/// Lowest quantity any resource can hold.
pub const MINIMUM_QUANTITY: i32 = 0;

/// One of the six resources printed on the player board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Money. The only resource whose production may go negative.
    MegaCredit,
    /// Steel.
    Steel,
    /// Titanium.
    Titan,
    /// Plants.
    Plant,
    /// Energy.
    Energy,
    /// Heat.
    Heat,
}

struct KindInfo {
    title: &'static str,
    minimum_production: i32,
}

const KIND_TABLE: [KindInfo; 6] = [
    KindInfo {
        title: "MegaCredit",
        minimum_production: -10,
    },
    KindInfo {
        title: "Steel",
        minimum_production: 0,
    },
    KindInfo {
        title: "Titan",
        minimum_production: 0,
    },
    KindInfo {
        title: "Plant",
        minimum_production: 0,
    },
    KindInfo {
        title: "Energy",
        minimum_production: 0,
    },
    KindInfo {
        title: "Heat",
        minimum_production: 0,
    },
];

impl ResourceKind {
    /// Every kind in board order.
    pub const ALL: [ResourceKind; 6] = [
        ResourceKind::MegaCredit,
        ResourceKind::Steel,
        ResourceKind::Titan,
        ResourceKind::Plant,
        ResourceKind::Energy,
        ResourceKind::Heat,
    ];

    /// Position of the kind in [`ResourceKind::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    fn info(self) -> &'static KindInfo {
        &KIND_TABLE[self.index()]
    }

    /// User-facing name shown on the resource card.
    pub fn title(self) -> &'static str {
        self.info().title
    }

    /// Lower production bound for this kind.
    pub fn minimum_production(self) -> i32 {
        self.info().minimum_production
    }

    /// Upper production bound for this kind.
    pub fn maximum_production(self) -> i32 {
        MAXIMUM_PRODUCTION
    }

    /// Closed interval the production factor is clamped to.
    pub fn production_range(self) -> RangeInclusive<i32> {
        self.minimum_production()..=self.maximum_production()
    }

    /// Floor applied to quantity adjustments.
    pub fn minimum_quantity(self) -> i32 {
        MINIMUM_QUANTITY
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn megacredit_production_can_go_negative() {
        assert_eq!(ResourceKind::MegaCredit.minimum_production(), -10);
    }

    #[test]
    fn other_kinds_have_zero_minimum_production() {
        for kind in ResourceKind::ALL
            .into_iter()
            .filter(|kind| *kind != ResourceKind::MegaCredit)
        {
            assert_eq!(kind.minimum_production(), 0, "{kind}");
        }
    }

    #[test]
    fn every_kind_caps_production_at_thirty() {
        for kind in ResourceKind::ALL {
            assert_eq!(kind.maximum_production(), 30, "{kind}");
            assert_eq!(*kind.production_range().end(), 30);
        }
    }

    #[test]
    fn table_order_matches_declaration() {
        let titles: Vec<_> = ResourceKind::ALL.iter().map(|kind| kind.title()).collect();
        assert_eq!(
            titles,
            ["MegaCredit", "Steel", "Titan", "Plant", "Energy", "Heat"]
        );
        for (idx, kind) in ResourceKind::ALL.into_iter().enumerate() {
            assert_eq!(kind.index(), idx);
        }
    }

    #[test]
    fn quantity_floor_is_zero_for_all_kinds() {
        for kind in ResourceKind::ALL {
            assert_eq!(kind.minimum_quantity(), 0);
        }
    }
}
