//! Helpers over status histories

use spectrum_core::AssessmentRecord;

/// Sort by year and fill every missing year inside the recorded span by carrying
/// the previous status forward.
///
/// Records that already exist are kept as-is; inserted years carry no
/// assessment date. Duplicate years keep the later entry.
pub fn fill_gaps(history: &[AssessmentRecord]) -> Vec<AssessmentRecord> {
    let mut sorted: Vec<AssessmentRecord> = history.to_vec();
    sorted.sort_by_key(|record| record.year);

    let mut filled: Vec<AssessmentRecord> = Vec::with_capacity(sorted.len());
    for record in sorted {
        match filled.last().map(|previous| (previous.year, previous.status)) {
            Some((year, _)) if year == record.year => {
                filled.pop();
            }
            Some((previous_year, carried)) => {
                for year in (previous_year + 1)..record.year {
                    filled.push(AssessmentRecord::new(year, carried));
                }
            }
            None => {}
        }
        filled.push(record);
    }
    filled
}

/// True when no year is skipped or repeated and years ascend
pub fn is_dense(history: &[AssessmentRecord]) -> bool {
    history.windows(2).all(|pair| pair[1].year == pair[0].year + 1)
}

/// True when severity never decreases from one record to the next
pub fn is_non_improving(history: &[AssessmentRecord]) -> bool {
    history
        .windows(2)
        .all(|pair| pair[0].status.severity_index() <= pair[1].status.severity_index())
}
