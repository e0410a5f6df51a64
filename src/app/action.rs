#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hand the current selection to the completion callback.
    Confirm,
    /// Re-read the config file and start over with its pages.
    Reload,
    Quit,
}
