//! Block layout generation

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::rect::Rect;
use super::state::{Block, BlockKind};
use crate::consts::{BLOCK_GAP, BLOCK_HEIGHT, BLOCK_TOP_OFFSET, BLOCK_WIDTH};
use crate::settings::Settings;

/// Chance (percent) of an iron block
const IRON_CHANCE: u32 = 6;
/// Chance (percent) of a concrete block, on top of iron
const CONCRETE_CHANCE: u32 = 24;

/// Build the block grid, row by row from the top, horizontally centred
///
/// Kinds are drawn from a generator seeded with `settings.seed`, so a seed
/// always yields the same level.
pub fn generate_blocks(settings: &Settings) -> Vec<Block> {
    let cols = settings.block_cols;
    let rows = settings.block_rows;
    let row_width = cols as f32 * (BLOCK_WIDTH + BLOCK_GAP) - BLOCK_GAP;
    let left = ((settings.window_width - row_width) / 2.0).max(0.0);

    let mut rng = Pcg32::seed_from_u64(settings.seed);
    let mut blocks = Vec::with_capacity(rows as usize * cols as usize);

    for row in 0..rows {
        for col in 0..cols {
            let rect = Rect::new(
                left + col as f32 * (BLOCK_WIDTH + BLOCK_GAP),
                BLOCK_TOP_OFFSET + row as f32 * (BLOCK_HEIGHT + BLOCK_GAP),
                BLOCK_WIDTH,
                BLOCK_HEIGHT,
            );
            let kind = if settings.classic_layout {
                BlockKind::Plain
            } else {
                determine_block_kind(&mut rng)
            };
            blocks.push(Block::new(rect, kind));
        }
    }

    log::debug!(
        "Generated {} blocks ({} iron)",
        blocks.len(),
        blocks.iter().filter(|b| !b.counts_for_clear()).count()
    );
    blocks
}

fn determine_block_kind(rng: &mut Pcg32) -> BlockKind {
    let roll = rng.random_range(0..100);
    if roll < IRON_CHANCE {
        BlockKind::Iron
    } else if roll < IRON_CHANCE + CONCRETE_CHANCE {
        BlockKind::Concrete {
            hardness: rng.random_range(1..=2),
        }
    } else {
        BlockKind::Plain
    }
}
