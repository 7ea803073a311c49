//! Backend directory deduplication.
//!
//! Two backends are duplicates when their paths are textually identical, or
//! when both probe to the same filesystem identity. The first occurrence is
//! kept; every later duplicate is removed and reported.

use std::path::PathBuf;

use super::backend::BackendDirectory;
use super::identity::IdentityProbe;

/// A backend that was dropped because an earlier entry names the same directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateDirectory {
    /// The earlier entry that survives.
    pub kept: PathBuf,
    /// The later entry that was excluded from the list.
    pub removed: PathBuf,
}

impl std::fmt::Display for DuplicateDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Duplicate directories: {} {}\n\t{} was excluded from dirlist",
            self.removed.display(),
            self.kept.display(),
            self.removed.display()
        )
    }
}

/// Whether `later` names the same directory as `earlier`.
fn is_duplicate(
    earlier: &BackendDirectory,
    later: &BackendDirectory,
    probe: &dyn IdentityProbe,
) -> bool {
    if earlier.same_text(later) {
        return true;
    }

    // A failed probe never matches; only identical text can catch it.
    match (later.identity(probe), earlier.identity(probe)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Remove duplicate backends in place, keeping the first occurrence.
///
/// Each candidate is compared against every earlier survivor. When a
/// candidate is removed, the entry that slides into its slot is checked from
/// scratch before the scan moves on. Survivor order is unchanged.
///
/// Returns one [`DuplicateDirectory`] per removed entry, in removal order.
pub fn dedupe_backends(
    backends: &mut Vec<BackendDirectory>,
    probe: &dyn IdentityProbe,
) -> Vec<DuplicateDirectory> {
    let mut duplicates = Vec::new();
    let mut i = 1;

    while i < backends.len() {
        let earlier = (0..i).find(|&j| is_duplicate(&backends[j], &backends[i], probe));

        match earlier {
            Some(j) => {
                let removed = backends.remove(i);
                let duplicate = DuplicateDirectory {
                    kept: backends[j].path().to_path_buf(),
                    removed: removed.into_path(),
                };
                tracing::warn!(
                    kept = %duplicate.kept.display(),
                    removed = %duplicate.removed.display(),
                    "duplicate directory excluded from dirlist"
                );
                duplicates.push(duplicate);
            }
            None => i += 1,
        }
    }

    duplicates
}
