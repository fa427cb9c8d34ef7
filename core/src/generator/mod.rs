use crate::*;
pub use random::*;

mod random;

/// Strategy deciding where the mines go once the first cell is picked.
pub trait MinePlacement {
    fn place(self, config: GameConfig, exclude: Coord2) -> MineLayout;
}

/// A pre-authored layout is placed as is, `exclude` is not honored.
impl MinePlacement for MineLayout {
    fn place(self, config: GameConfig, exclude: Coord2) -> MineLayout {
        if self.size() != config.size() {
            log::warn!(
                "Layout size {:?} does not match configured size {:?}",
                self.size(),
                config.size()
            );
        }
        if self.contains_mine(exclude) {
            log::debug!("Fixed layout has a mine under the first cell {:?}", exclude);
        }
        self
    }
}
