use bitflags::bitflags;

bitflags! {
    /// Open passages leading out of a single maze cell.
    ///
    /// A flag is only ever added. Both cells sharing an edge get the matching
    /// flag at the same time (`DOWN` above pairs with `UP` below, `RIGHT` pairs
    /// with `LEFT` on the neighbour).
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Cell: u8 {
        const UP = 1;
        const DOWN = 2;
        const LEFT = 4;
        const RIGHT = 8;
    }
}

impl Cell {
    /// A cell with every wall standing.
    pub const CLOSED: Cell = Cell::empty();
}
