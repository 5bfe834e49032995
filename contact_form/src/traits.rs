use crate::validity::ValidityState;

/// A form control as the page exposes it
pub trait InputElement: Sync {
    fn value(&self) -> &str;

    fn validity(&self) -> ValidityState;
}

/// Lookup of form controls by element id
pub trait FormDocument: Sync {
    fn get_element_by_id(&self, id: &str) -> Option<&dyn InputElement>;
}

/// The user facing side of the page
pub trait Page: Send + Sync {
    /// Blocking notification, returns once the user dismissed it
    fn alert(&self, message: &str);

    fn reload(&self);
}
