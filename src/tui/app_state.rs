/// Transient feedback shown in the footer after a copy attempt. Cleared on
/// the next non-copy keypress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum CopyStatus {
    Idle,
    Copied,
    Failed,
}
