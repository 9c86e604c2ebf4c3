//! Config form actions

/// Actions for the configuration form popup
#[derive(Debug, Clone)]
pub enum FormAction {
    /// Open the form with empty fields (create)
    OpenBlank,
    /// Open the form prefilled from the configuration with this id (edit)
    OpenEdit(i64),
    /// Close the form without saving
    Close,
    /// Append a character to the focused field
    Input(char),
    /// Delete the last character of the focused field
    Backspace,
    /// Focus the next field
    NextField,
    /// Focus the previous field
    PrevField,
    /// Toggle the operation kind between dump and restore
    ToggleKind,
    /// Validate the draft and request a save
    Submit,
}
