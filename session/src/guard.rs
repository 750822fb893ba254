//! Scoped "form disabled" state for in-flight submits.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

/// Disables a form on acquisition and re-enables it when dropped.
///
/// The setter receives `true` once on [`FormGuard::acquire`] and `false`
/// once on drop, whichever path leaves the scope.
pub struct FormGuard<F: FnMut(bool)> {
    set_disabled: F,
}

impl<F: FnMut(bool)> FormGuard<F> {
    #[must_use = "the form is re-enabled as soon as the guard is dropped"]
    pub fn acquire(mut set_disabled: F) -> Self {
        set_disabled(true);
        Self { set_disabled }
    }
}

impl<F: FnMut(bool)> Drop for FormGuard<F> {
    fn drop(&mut self) {
        (self.set_disabled)(false);
    }
}
