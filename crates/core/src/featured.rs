//! Featured-project exclusivity.
//!
//! At most one project carries the featured flag. Changing the flag is
//! planned here as an ordered list of [`FlagWrite`]s; the repository applies
//! the whole plan inside one transaction so readers never observe zero or
//! two featured projects mid-update.

use crate::types::DbId;

/// PostgreSQL advisory lock ID held while the featured flag is moved.
/// Serializes concurrent featured changes so each sees the previous one.
pub const FEATURED_LOCK_ID: i64 = 731_406_218;

/// A single `is_featured` write against one project row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagWrite {
    pub project_id: DbId,
    pub is_featured: bool,
}

impl FlagWrite {
    fn clear(project_id: DbId) -> Self {
        Self {
            project_id,
            is_featured: false,
        }
    }

    fn set(project_id: DbId) -> Self {
        Self {
            project_id,
            is_featured: true,
        }
    }
}

/// Plan the writes needed to move the featured flag.
///
/// - `featured = true`: clear `current` when it is a different project, then
///   set `target`. Setting an already-featured target is a no-op in effect.
/// - `featured = false`: clear `target` only; other rows are never touched.
///
/// Clears always precede sets so the partial unique index on the flag is
/// never violated mid-transaction.
pub fn plan_featured_change(current: Option<DbId>, target: DbId, featured: bool) -> Vec<FlagWrite> {
    if !featured {
        return vec![FlagWrite::clear(target)];
    }

    let mut writes = Vec::with_capacity(2);
    if let Some(current_id) = current {
        if current_id != target {
            writes.push(FlagWrite::clear(current_id));
        }
    }
    writes.push(FlagWrite::set(target));
    writes
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    /// In-memory stand-in for the projects table: id -> is_featured.
    fn apply(table: &mut BTreeMap<DbId, bool>, target: DbId, featured: bool) {
        let current = table
            .iter()
            .find(|(_, flag)| **flag)
            .map(|(id, _)| *id);
        for write in plan_featured_change(current, target, featured) {
            table.insert(write.project_id, write.is_featured);
        }
    }

    fn featured_ids(table: &BTreeMap<DbId, bool>) -> Vec<DbId> {
        table
            .iter()
            .filter(|(_, flag)| **flag)
            .map(|(id, _)| *id)
            .collect()
    }

    #[test]
    fn switching_featured_clears_previous() {
        // A (1) featured, B (2) not.
        let mut table = BTreeMap::from([(1, true), (2, false)]);
        apply(&mut table, 2, true);
        assert!(!table[&1]);
        assert!(table[&2]);
    }

    #[test]
    fn featuring_twice_is_idempotent() {
        let mut table = BTreeMap::from([(1, false), (2, false), (3, false)]);
        apply(&mut table, 3, true);
        apply(&mut table, 3, true);
        assert_eq!(featured_ids(&table), vec![3]);
    }

    #[test]
    fn plan_for_already_featured_target_only_sets() {
        let plan = plan_featured_change(Some(7), 7, true);
        assert_eq!(plan, vec![FlagWrite::set(7)]);
    }

    #[test]
    fn plan_with_no_current_only_sets() {
        let plan = plan_featured_change(None, 4, true);
        assert_eq!(plan, vec![FlagWrite::set(4)]);
    }

    #[test]
    fn plan_clears_before_setting() {
        let plan = plan_featured_change(Some(1), 2, true);
        assert_eq!(plan, vec![FlagWrite::clear(1), FlagWrite::set(2)]);
    }

    #[test]
    fn unfeaturing_touches_only_target() {
        let plan = plan_featured_change(Some(1), 2, false);
        assert_eq!(plan, vec![FlagWrite::clear(2)]);

        let mut table = BTreeMap::from([(1, true), (2, false)]);
        apply(&mut table, 2, false);
        assert_eq!(featured_ids(&table), vec![1]);
    }

    #[test]
    fn at_most_one_featured_after_every_call() {
        // Exhaustively walk every sequence of three calls over three projects
        // with both flag values.
        let ops: Vec<(DbId, bool)> = (1..=3)
            .flat_map(|id| [(id, true), (id, false)])
            .collect();

        for a in &ops {
            for b in &ops {
                for c in &ops {
                    let mut table = BTreeMap::from([(1, false), (2, false), (3, false)]);
                    for (target, featured) in [a, b, c] {
                        apply(&mut table, *target, *featured);
                        let featured_now = featured_ids(&table);
                        assert!(
                            featured_now.len() <= 1,
                            "sequence {a:?} {b:?} {c:?} left {featured_now:?} featured"
                        );
                        if *featured {
                            assert_eq!(featured_now, vec![*target]);
                        }
                    }
                }
            }
        }
    }
}
