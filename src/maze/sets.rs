/// Set labels for the columns of the row under construction.
///
/// Two columns with the same label are already joined by passages carved in
/// this row or above. Labels are only compared for equality within one row, so
/// their absolute values carry no meaning across rows.
pub struct RowSets {
    labels: Box<[u32]>,
    /// Scratch space marking labels in use, indexed by label value.
    taken: Box<[bool]>,
}

impl RowSets {
    /// Label `0` means "not yet assigned" and never survives a call to [`RowSets::renew`].
    pub fn new(width: usize) -> Self {
        RowSets {
            labels: vec![0; width].into_boxed_slice(),
            taken: vec![false; width + 1].into_boxed_slice(),
        }
    }

    pub fn width(&self) -> usize {
        self.labels.len()
    }

    pub fn labels(&self) -> &[u32] {
        &self.labels
    }

    /// Starts a new row: columns for which `carried` returns true keep their
    /// label, every other column gets a label no other column holds.
    ///
    /// Fresh labels come from a counter starting at 1 that skips labels still
    /// held by carried columns. At most `width` distinct labels exist at once,
    /// so every label stays within `1..=width`.
    pub fn renew(&mut self, carried: impl Fn(usize) -> bool) {
        self.taken.fill(false);
        for col in 0..self.labels.len() {
            if carried(col) {
                self.taken[self.labels[col] as usize] = true;
            }
        }

        let mut next = 1;
        for col in 0..self.labels.len() {
            if carried(col) {
                continue;
            }
            while self.taken[next] {
                next += 1;
            }
            self.labels[col] = next as u32;
            self.taken[next] = true;
            next += 1;
        }
    }

    pub fn same_set(&self, a: usize, b: usize) -> bool {
        self.labels[a] == self.labels[b]
    }

    /// Joins the set of `absorb` into the set of `keep`: every column carrying
    /// `absorb`'s label is relabelled with `keep`'s label.
    pub fn merge(&mut self, keep: usize, absorb: usize) {
        let (into, from) = (self.labels[keep], self.labels[absorb]);
        if into == from {
            return;
        }
        self.labels
            .iter_mut()
            .filter(|label| **label == from)
            .for_each(|label| *label = into);
    }

    /// Columns sharing a set with `col`, `col` included.
    pub fn members(&self, col: usize) -> impl Iterator<Item = usize> + '_ {
        let label = self.labels[col];
        self.labels
            .iter()
            .enumerate()
            .filter(move |&(_, &l)| l == label)
            .map(|(c, _)| c)
    }

    /// Number of distinct sets in the row.
    pub fn set_count(&self) -> usize {
        self.labels
            .iter()
            .enumerate()
            .filter(|&(col, label)| !self.labels[..col].contains(label))
            .count()
    }
}
