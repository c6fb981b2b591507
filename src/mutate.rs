use std::fmt::Display;

use crate::range::Range;

/// One generated variant, ready to be written as a FASTA record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutatedRecord {
    pub id: String,
    pub description: String,
    pub sequence: String,
}

impl MutatedRecord {
    /// `n` is the replacement's 1-based position within its range.
    pub fn new(n: usize, range: impl Display, mutation: &str, sequence: String) -> Self {
        Self {
            id: n.to_string(),
            description: format!("Mutated WT Range {} with {}", range, mutation),
            sequence,
        }
    }
}

/// Replace bases `start..=end` (1-based) of `full` with `mutation`.
///
/// # Panics
///
/// If `range` does not satisfy `1 <= start <= end <= full.len()`, which
/// holds for every `Range` returned by `parse_range` on `full.len()`.
pub fn splice(full: &str, range: Range, mutation: &str) -> String {
    let (start, end) = range.to_zero_based();
    let capacity = (full.len() + mutation.len()).saturating_sub(range.width());
    let mut out = String::with_capacity(capacity);
    out.push_str(&full[..start]);
    out.push_str(mutation);
    out.push_str(&full[end..]);
    out
}

/// Apply every replacement to every range, ranges outermost.
pub fn mutate_sequences(full: &str, ranges: &[Range], mutations: &[String]) -> Vec<MutatedRecord> {
    let mut records = Vec::with_capacity(ranges.len() * mutations.len());
    for &range in ranges {
        for (count, mutation) in mutations.iter().enumerate() {
            let sequence = splice(full, range, mutation);
            log::debug!(
                "range {} with {}: {} bp -> {} bp",
                range,
                mutation,
                full.len(),
                sequence.len()
            );
            records.push(MutatedRecord::new(count + 1, range, mutation, sequence));
        }
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    const WT: &str = "ATGCTGATGATGTAA";

    fn r(start: usize, end: usize) -> Range {
        Range { start, end }
    }

    #[test]
    fn splice_replaces_prefix() {
        assert_eq!(splice(WT, r(1, 6), "TGC"), "TGCATGATGTAA");
    }

    #[test]
    fn splice_inside_sequence() {
        assert_eq!(splice(WT, r(3, 6), "TGC"), "ATTGCATGATGTAA");
    }

    #[test]
    fn splice_through_end() {
        assert_eq!(splice(WT, r(6, 15), "ATG"), "ATGCTATG");
    }

    #[test]
    #[should_panic]
    fn splice_panics_past_sequence_end() {
        splice("ATGC", r(2, 9), "A");
    }

    #[test]
    fn record_fields() {
        let record = MutatedRecord::new(3, "1-5", "AGCTGC", "ATGAGCTGCTAA".to_string());
        assert_eq!(record.id, "3");
        assert_eq!(record.sequence, "ATGAGCTGCTAA");
        assert_eq!(record.description, "Mutated WT Range 1-5 with AGCTGC");
    }

    #[test]
    fn record_uses_range_display() {
        let record = MutatedRecord::new(1, r(1, 6), "TGC", String::new());
        assert_eq!(record.description, "Mutated WT Range (1, 6) with TGC");
    }

    #[test]
    fn cross_product_counter_restarts_per_range() {
        let ranges = [r(1, 6), r(6, 15)];
        let mutations = vec!["TGC".to_string(), "ATG".to_string()];
        let records = mutate_sequences(WT, &ranges, &mutations);

        let ids: Vec<&str> = records.iter().map(|rec| rec.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "1", "2"]);

        let descriptions: Vec<&str> = records.iter().map(|rec| rec.description.as_str()).collect();
        assert_eq!(
            descriptions,
            [
                "Mutated WT Range (1, 6) with TGC",
                "Mutated WT Range (1, 6) with ATG",
                "Mutated WT Range (6, 15) with TGC",
                "Mutated WT Range (6, 15) with ATG",
            ]
        );
        assert_eq!(records[0].sequence, "TGCATGATGTAA");
        assert_eq!(records[3].sequence, "ATGCTATG");
    }
}
