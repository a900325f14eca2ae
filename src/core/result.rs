use serde::{Deserialize, Serialize};

use crate::matching::mismatch::{recalculate_mismatches, ValidationError};

/// A single ipcress hit: one primer pair amplifying one target sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpcressResult {
    /// Experiment label (the primer set id in the ipcress input file)
    pub experiment_name: String,

    /// Primer labels used for this product, e.g. "A B"
    pub primers: String,

    /// Full description of the matched target, kept verbatim
    pub target: String,

    /// Match quality fragment, e.g. "19/20 14/15"
    pub matches: String,

    /// Product description, e.g. "502 bp (range 2-10000)"
    pub product: String,

    /// Result type reported by ipcress ("forward", "revcomp", "single_A", ...)
    pub result_type: String,

    /// Target bases aligned under the forward primer
    pub forward_matching_sequence: String,

    /// Target bases aligned under the reverse primer
    pub reverse_matching_sequence: String,

    /// Forward primer as printed in the alignment
    pub forward_primer_sequence: String,

    /// Reverse primer as printed in the alignment
    pub reverse_primer_sequence: String,

    /// Product length in base pairs
    pub length: u64,

    /// 1-based start of the product on the target
    pub start: u64,

    /// Forward primer mismatches as reported by ipcress
    pub forward_mismatches: u32,

    /// Reverse primer mismatches as reported by ipcress
    pub reverse_mismatches: u32,
}

impl IpcressResult {
    /// Return a copy whose mismatch counts are recomputed from the alignments,
    /// ignoring the counts ipcress reported.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if a sequence/primer pair differs in length
    /// or contains characters outside the nucleotide alphabet.
    pub fn with_recalculated_mismatches(mut self) -> Result<Self, ValidationError> {
        let (forward, reverse) = recalculate_mismatches(&self)?;
        self.forward_mismatches = forward;
        self.reverse_mismatches = reverse;
        Ok(self)
    }
}

/// Results of one ipcress report, in the order they appear in the report.
/// Duplicate hits are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultCollection(Vec<IpcressResult>);

impl ResultCollection {
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, result: IpcressResult) {
        self.0.push(result);
    }

    /// Recompute mismatch counts for every result.
    ///
    /// # Errors
    ///
    /// Fails on the first result whose alignments cannot be compared; no
    /// partially updated collection is returned.
    pub fn with_recalculated_mismatches(self) -> Result<Self, ValidationError> {
        self.0
            .into_iter()
            .map(IpcressResult::with_recalculated_mismatches)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<IpcressResult> {
        self.0
    }
}

impl std::ops::Deref for ResultCollection {
    type Target = [IpcressResult];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<IpcressResult>> for ResultCollection {
    fn from(results: Vec<IpcressResult>) -> Self {
        Self(results)
    }
}

impl IntoIterator for ResultCollection {
    type Item = IpcressResult;
    type IntoIter = std::vec::IntoIter<IpcressResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultCollection {
    type Item = &'a IpcressResult;
    type IntoIter = std::slice::Iter<'a, IpcressResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// The forward hit from the ipcress documentation example
    pub(crate) fn sample_result() -> IpcressResult {
        IpcressResult {
            experiment_name: "AE12_pmid21856836_16S".to_string(),
            primers: "A B".to_string(),
            target: "gi|335929284|gb|JN048683.1|:filter(unmasked) Methanocella conradii HZ254 16S ribosomal RNA gene, partial sequence".to_string(),
            matches: "19/20 14/15".to_string(),
            product: "502 bp (range 2-10000)".to_string(),
            result_type: "forward".to_string(),
            forward_matching_sequence: "AAACTTAAAGGAATTGGCGG".to_string(),
            reverse_matching_sequence: "CGTGTGTGGCGGGCA".to_string(),
            forward_primer_sequence: "AAACTYAAAKGAATTGRCGG".to_string(),
            reverse_primer_sequence: "CRTGTGTGGCGGGCA".to_string(),
            length: 502,
            start: 826,
            forward_mismatches: 1,
            reverse_mismatches: 1,
        }
    }

    #[test]
    fn test_with_recalculated_mismatches_leaves_original() {
        let original = sample_result();
        let updated = original.clone().with_recalculated_mismatches().unwrap();

        assert_eq!(original.forward_mismatches, 1);
        assert_eq!(original.reverse_mismatches, 1);
        assert_eq!(updated.forward_mismatches, 0);
        assert_eq!(updated.reverse_mismatches, 0);
        assert_eq!(updated.length, original.length);
    }

    #[test]
    fn test_collection_preserves_order_and_duplicates() {
        let mut second = sample_result();
        second.start = 900;

        let mut results = ResultCollection::new();
        results.push(sample_result());
        results.push(second);
        results.push(sample_result());

        assert_eq!(results.len(), 3);
        assert_eq!(results[0], results[2]);
        assert_eq!(results[1].start, 900);
    }

    #[test]
    fn test_collection_recalculation_fails_whole() {
        let mut broken = sample_result();
        broken.reverse_primer_sequence.push('A');

        let results = ResultCollection::from(vec![sample_result(), broken]);
        assert!(results.with_recalculated_mismatches().is_err());
    }

    #[test]
    fn test_collection_serializes_as_array() {
        let results = ResultCollection::from(vec![sample_result()]);
        let json = serde_json::to_value(&results).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["length"], 502);
        assert_eq!(json[0]["experiment_name"], "AE12_pmid21856836_16S");
    }
}
