//! Which texture of a model's ordered set lands on each cube face.
//!
//! Small sets collapse faces the way natural materials are usually drawn:
//! one texture for everything, top/bottom against sides, or top/bottom,
//! ends and sides. Six or more gives every face its own slot.

use crate::direction::Direction;

/// Largest number of distinct slots any row uses.
pub const MAX_DISTINCT_SLOTS: usize = 6;

// Rows keyed by texture count (1..=5, then 6+), columns in Direction ordinal
// order: down, up, north, south, west, east.
const SLOT_ROWS: [[u8; 6]; MAX_DISTINCT_SLOTS] = [
    [0, 0, 0, 0, 0, 0],
    [0, 0, 1, 1, 1, 1],
    [0, 0, 1, 1, 2, 2],
    [0, 0, 1, 2, 3, 3],
    // Five keeps down/up/north/south on their own ordinals and shares the last slot.
    [0, 1, 2, 3, 4, 4],
    [0, 1, 2, 3, 4, 5],
];

/// The slot row for one texture count, looked up once per bake.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SlotTable {
    texture_count: usize,
    row: [u8; 6],
}

impl SlotTable {
    /// A count of zero uses the single-texture row; callers are expected to
    /// have rejected empty sets already.
    pub fn for_count(texture_count: usize) -> SlotTable {
        let row_ix = texture_count.clamp(1, MAX_DISTINCT_SLOTS) - 1;
        SlotTable {
            texture_count,
            row: SLOT_ROWS[row_ix],
        }
    }

    #[inline]
    pub fn slot(&self, direction: Direction) -> usize {
        self.row[direction.index()] as usize
    }

    #[inline]
    pub fn texture_count(&self) -> usize {
        self.texture_count
    }

    /// Number of slots this row actually references.
    pub fn distinct_slots(&self) -> usize {
        self.row.iter().copied().max().map_or(0, |m| m as usize + 1)
    }
}

/// Texture slot for `direction` on a model with `texture_count` textures.
#[inline]
pub fn assign(direction: Direction, texture_count: usize) -> usize {
    SlotTable::for_count(texture_count).slot(direction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::*;

    fn row(count: usize) -> Vec<usize> {
        Direction::ALL.iter().map(|&d| assign(d, count)).collect()
    }

    #[test]
    fn single_texture_everywhere() {
        assert_eq!(row(1), vec![0; 6]);
    }

    #[test]
    fn two_textures_split_ends_from_sides() {
        assert_eq!(assign(Up, 2), 0);
        assert_eq!(assign(Down, 2), 0);
        for d in [North, South, West, East] {
            assert_eq!(assign(d, 2), 1);
        }
    }

    #[test]
    fn three_textures_pair_by_axis() {
        assert_eq!(row(3), vec![0, 0, 1, 1, 2, 2]);
    }

    #[test]
    fn four_textures_split_north_and_south() {
        assert_eq!(assign(North, 4), 1);
        assert_eq!(assign(South, 4), 2);
        assert_eq!(assign(East, 4), 3);
        assert_eq!(assign(West, 4), 3);
    }

    #[test]
    fn five_textures_keep_first_four_ordinals() {
        assert_eq!(row(5), vec![0, 1, 2, 3, 4, 4]);
    }

    #[test]
    fn six_or_more_use_ordinals() {
        assert_eq!(row(6), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(row(9), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn zero_count_falls_back_to_first_slot() {
        assert_eq!(row(0), vec![0; 6]);
        assert_eq!(SlotTable::for_count(0).texture_count(), 0);
    }

    #[test]
    fn distinct_slots_match_count() {
        for count in 1..=8 {
            let t = SlotTable::for_count(count);
            assert_eq!(t.distinct_slots(), count.min(MAX_DISTINCT_SLOTS));
        }
    }
}
