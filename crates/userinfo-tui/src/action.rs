//! Units of work queued on the UI loop.

/// Application-level actions, processed one at a time in send order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Present the user information dialog and print the result.
    ShowDialog,

    /// Stop the loop once the queue reaches this action.
    Quit,
}
