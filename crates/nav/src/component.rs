use navkit_api::{ComponentName, ViewComponent, ViewResult};

/// Navigation fragment. Takes no input and always renders its default
/// template, `Shared/Components/Nav/Default.html`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavComponent;

impl NavComponent {
    /// `NavComponent` with its `Component` suffix dropped.
    pub const NAME: &'static str = "Nav";

    pub fn new() -> Self {
        Self
    }
}

impl ViewComponent for NavComponent {
    fn name(&self) -> ComponentName {
        ComponentName::from_static(Self::NAME)
    }

    fn invoke(&self) -> ViewResult {
        ViewResult::default_view(self.name())
    }
}
