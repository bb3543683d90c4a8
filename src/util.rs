/// Which child slot of a node we're talking about. Most of the rebalancing code is written once
/// in terms of a `Side` and its [`opposite`][Side::opposite] instead of twice as mirror images.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    pub(crate) fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}
