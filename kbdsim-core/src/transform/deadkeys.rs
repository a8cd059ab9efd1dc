//! Transform-table merging
//!
//! The cross-platform table is the base; a platform's own entries override
//! individual trigger/base pairs without discarding unrelated base entries.

use crate::types::{DeadkeyTable, TransformTable};

pub(crate) fn merge_tables(
    base: Option<&TransformTable>,
    platform: Option<&TransformTable>,
) -> DeadkeyTable {
    let mut table = DeadkeyTable::default();
    for source in [base, platform].into_iter().flatten() {
        for (trigger, combos) in source {
            for (base_output, composed) in combos {
                table.insert(trigger.clone(), base_output.clone(), composed.clone());
            }
        }
    }
    table
}
