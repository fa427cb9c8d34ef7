use super::*;

/// Uniform placement over every cell except the excluded one.
///
/// Each mine samples a random cell, on collision it walks forward in row-major order (wrapping at the end of the
/// board) until it finds a free cell. This always terminates and always places the requested count as long as there is
/// room for it.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomPlacement {
    seed: u64,
}

impl RandomPlacement {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinePlacement for RandomPlacement {
    fn place(self, config: GameConfig, exclude: Coord2) -> MineLayout {
        use rand::prelude::*;

        let (width, height) = config.size();
        let total_cells = usize::from(config.total_cells());
        let mut layout = MineLayout::empty(config.size());
        if total_cells == 0 {
            log::warn!("Cannot place mines on an empty {}x{} board", width, height);
            return layout;
        }

        let excluded = (exclude.0 < width && exclude.1 < height).then(|| flat_index(exclude, width));
        let capacity = config.total_cells() - CellCount::from(excluded.is_some());

        let mut mines = config.mines;
        if mines > capacity {
            log::warn!(
                "Cannot keep the first cell safe with {} mines, placing {} instead",
                mines,
                capacity
            );
            mines = capacity;
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        for _ in 0..mines {
            let mut index = rng.random_range(0..total_cells);
            while Some(index) == excluded || layout.contains_mine(from_flat_index(index, width)) {
                index = (index + 1) % total_cells;
            }
            layout.place_mine(from_flat_index(index, width));
        }

        // double check mine count
        if layout.mine_count() != mines {
            log::warn!(
                "Generated layout count mismatch, actual: {}, requested: {}",
                layout.mine_count(),
                mines
            );
        }
        log::debug!(
            "Placed {} mines on {}x{} with seed {}, first cell {:?}",
            layout.mine_count(),
            width,
            height,
            self.seed,
            exclude
        );
        layout
    }
}
