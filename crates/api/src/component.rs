use crate::models::component::{ComponentName, ViewResult};

/// A reusable, named UI-rendering unit with an associated template.
pub trait ViewComponent: Send + Sync {
    /// Name the host uses to request this component.
    fn name(&self) -> ComponentName;

    /// Produce the render directive. Must be free of side effects.
    fn invoke(&self) -> ViewResult;
}
