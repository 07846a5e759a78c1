use crate::resource::ResourceKind;

/// Discrete user action coming from the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A resource card was tapped; it becomes the selected card.
    Tap(ResourceKind),
    /// Change the banked amount of a resource.
    AdjustQuantity { kind: ResourceKind, delta: i32 },
    /// Change the production factor of a resource.
    AdjustProduction { kind: ResourceKind, delta: i32 },
    /// Move the generation marker forward by one.
    AdvanceGeneration,
    /// Place the terraform marker on a value.
    SetTerraform(i32),
    /// Clear every resource and the board counters.
    Reset,
}
