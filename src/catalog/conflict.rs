//! Overwrite policy for keys that already hold a value.

use super::{Entry, Language};

/// Asks whether an existing value may be overwritten.
pub trait ConfirmOverwrite {
    /// `current` is a leaf or a whole subtree; `incoming` is the source text
    /// that will be stored (or translated).
    fn confirm_overwrite(
        &mut self,
        language: &Language,
        path: &str,
        current: &Entry,
        incoming: &str,
    ) -> bool;
}

/// What to do when an add hits a path that already holds a value or a subtree.
///
/// - `Force`: always overwrite.
/// - `Interactive`: ask per conflicting key, overwrite only on yes.
/// - `Skip`: keep the existing value without asking.
pub enum ConflictPolicy<'a> {
    Force,
    Interactive(&'a mut dyn ConfirmOverwrite),
    Skip,
}

impl ConflictPolicy<'_> {
    pub fn should_overwrite(
        &mut self,
        language: &Language,
        path: &str,
        current: &Entry,
        incoming: &str,
    ) -> bool {
        match self {
            ConflictPolicy::Force => true,
            ConflictPolicy::Interactive(confirm) => {
                confirm.confirm_overwrite(language, path, current, incoming)
            }
            ConflictPolicy::Skip => false,
        }
    }
}
