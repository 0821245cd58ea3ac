#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Which part of the table to fill?
pub enum AlignMode {
    #[default]
    /// Full table.
    /// * `O(n·m)` time and memory.
    /// * Always finds the optimal alignment.
    Unrestricted,
    /// Only cells within the band tolerance `d` of the main diagonal.
    /// * `O(n·k)` time and memory with `k = 2d + 1`.
    /// * Gives up when the sequence lengths differ by `d` or more.
    ///
    /// ### Example
    /// `ATGCATGC` and `ATGATGC` with `d = 3`
    /// * Lengths differ by 1, the band reaches the far corner.
    /// * Cost equals the unrestricted cost.
    Banded,
}

impl From<bool> for AlignMode {
    /// `true` selects [`AlignMode::Banded`].
    fn from(banded: bool) -> Self {
        if banded {
            AlignMode::Banded
        } else {
            AlignMode::Unrestricted
        }
    }
}
