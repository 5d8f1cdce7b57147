//! Client-side route changes requested by auth flows.

use std::rc::Rc;

use leptos_router::NavigateOptions;

/// Route of the sign-in page.
pub const LOGIN_ROUTE: &str = "/auth/login";

/// Something that can move the app to another client-side route.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Leptos router navigation.
#[derive(Clone)]
pub struct RouterNavigator(Rc<dyn Fn(&str, NavigateOptions)>);

impl RouterNavigator {
    pub fn new(navigate: impl Fn(&str, NavigateOptions) + 'static) -> Self {
        Self(Rc::new(navigate))
    }

    /// Wrap `use_navigate()`. Must be called under `<Router>`.
    pub fn from_router() -> Self {
        Self::new(leptos_router::hooks::use_navigate())
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, path: &str) {
        (self.0)(path, NavigateOptions::default());
    }
}
