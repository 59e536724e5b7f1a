//! Detail/editor overlay state machine.
//!
//! DESIGN
//! ======
//! hidden -> visible(view-only | editable) -> (confirmed | cancelled) -> hidden.
//! The machine only tracks visibility and the record under inspection; form
//! payloads and network submission live in the owning page, so view-only
//! mode can never mutate anything.

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

/// Modal overlay state for one screen's detail/editor dialog.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Overlay<T> {
    /// No dialog is shown.
    #[default]
    Hidden,
    /// Read-only detail view of a record.
    Viewing(T),
    /// Editable form; `None` means a create form with no source record.
    Editing(Option<T>),
}

impl<T: Clone> Overlay<T> {
    /// Open the read-only detail view for `record`.
    pub fn open_view(&mut self, record: T) {
        *self = Self::Viewing(record);
    }

    /// Open the editor pre-filled from `record`.
    pub fn open_edit(&mut self, record: T) {
        *self = Self::Editing(Some(record));
    }

    /// Open an empty create form.
    pub fn open_create(&mut self) {
        *self = Self::Editing(None);
    }

    /// Exit transition: the user confirmed. Returns the record that was
    /// open (if any) and hides the overlay.
    pub fn confirmed(&mut self) -> Option<T> {
        let record = self.record();
        *self = Self::Hidden;
        record
    }

    /// Exit transition: the user cancelled. Any edits are discarded by the
    /// owning page; the machine just hides.
    pub fn cancelled(&mut self) {
        *self = Self::Hidden;
    }

    /// `true` unless hidden.
    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// `true` in read-only mode.
    #[must_use]
    pub fn is_viewing(&self) -> bool {
        matches!(self, Self::Viewing(_))
    }

    /// `true` in editable mode (including create).
    #[must_use]
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }

    /// The record currently under inspection, if the overlay has one.
    #[must_use]
    pub fn record(&self) -> Option<T> {
        match self {
            Self::Hidden | Self::Editing(None) => None,
            Self::Viewing(record) | Self::Editing(Some(record)) => Some(record.clone()),
        }
    }
}
