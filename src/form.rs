//! Dirty-tracked form controls used by the editing dialogs.

/// A single form value with the baseline it was loaded from.
#[derive(Debug, Clone, PartialEq)]
pub struct FormControl<T> {
    initial: T,
    value: T,
}

impl<T: Clone + PartialEq> FormControl<T> {
    pub fn new(initial: T) -> Self {
        Self {
            value: initial.clone(),
            initial,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// Mutable access for widgets that edit in place.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    pub fn set_value(&mut self, value: T) {
        self.value = value;
    }

    pub fn is_dirty(&self) -> bool {
        self.value != self.initial
    }

    /// Restore the baseline value.
    pub fn reset(&mut self) {
        self.value = self.initial.clone();
    }

    /// Make the current value the new baseline (after a successful save).
    pub fn commit(&mut self) {
        self.initial = self.value.clone();
    }

    /// Replace both baseline and value.
    pub fn rebase(&mut self, value: T) {
        self.initial = value.clone();
        self.value = value;
    }
}

/// Submission is allowed when something changed and nothing is in flight.
pub fn can_submit(any_dirty: bool, pending: bool) -> bool {
    any_dirty && !pending
}
