//! Ordered set difference between two member lists.

use std::collections::HashSet;

use crate::types::Login;

/// Return the logins of `source` that do not appear in `target`.
///
/// Source order is preserved, duplicates included. Comparison is exact,
/// case-sensitive string equality.
pub fn find_missing(source: &[Login], target: &[Login]) -> Vec<Login> {
    let present: HashSet<&Login> = target.iter().collect();
    source
        .iter()
        .filter(|login| !present.contains(login))
        .cloned()
        .collect()
}
