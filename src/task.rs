#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// What should rs_genalign do?
pub enum AlignTask {
    /// Find the alignment cost only. No backtrace.
    Distance,
    #[default]
    /// Find the alignment cost and reconstruct the gapped alignment.
    Path,
}
