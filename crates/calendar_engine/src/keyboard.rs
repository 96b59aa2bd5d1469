//! Pure keyboard focus mapping for the day, month and year grids.
//!
//! [`navigate`] only computes indices. Moving the displayed page when an outcome leaves the grid is
//! the controller's job.

use crate::model::{DAY_GRID_CELLS, YEAR_BLOCK_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    Enter,
    Space,
    Escape,
}

impl NavKey {
    /// Maps a DOM `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        let key = match key {
            "ArrowLeft" | "Left" => Self::Left,
            "ArrowRight" | "Right" => Self::Right,
            "ArrowUp" | "Up" => Self::Up,
            "ArrowDown" | "Down" => Self::Down,
            "Home" => Self::Home,
            "End" => Self::End,
            "PageUp" => Self::PageUp,
            "PageDown" => Self::PageDown,
            "Enter" => Self::Enter,
            " " | "Spacebar" => Self::Space,
            "Escape" | "Esc" => Self::Escape,
            _ => return None,
        };
        Some(key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub len: usize,
    pub columns: usize,
}

pub const DAY_GRID: GridLayout = GridLayout {
    len: DAY_GRID_CELLS,
    columns: 7,
};

pub const MONTH_GRID: GridLayout = GridLayout { len: 12, columns: 3 };

pub const YEAR_GRID: GridLayout = GridLayout {
    len: YEAR_BLOCK_SIZE as usize,
    columns: 4,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Move focus within the current page.
    Focus(usize),
    /// Movement left the page backwards; the index is the wrapped position on the previous page.
    PreviousPage(usize),
    /// Movement left the page forwards; the index is the wrapped position on the next page.
    NextPage(usize),
    /// Commit the focused cell as a selection.
    Commit(usize),
    /// Abandon keyboard navigation and restore the pre-navigation anchor.
    Cancel,
    Ignored,
}

fn is_enabled(enabled: &[bool], index: usize) -> bool {
    enabled.get(index).copied().unwrap_or(true)
}

fn step(index: usize, delta: isize, layout: GridLayout) -> KeyOutcome {
    let len = layout.len as isize;
    let target = index as isize + delta;
    if target < 0 {
        KeyOutcome::PreviousPage((target + len).rem_euclid(len) as usize)
    } else if target >= len {
        KeyOutcome::NextPage((target - len).rem_euclid(len) as usize)
    } else {
        KeyOutcome::Focus(target as usize)
    }
}

/// Maps a key press on cell `index` to a focus outcome.
///
/// `enabled` flags each cell; an empty slice treats every cell as enabled. Home and End skip
/// disabled cells, and Enter/Space on a disabled cell is ignored.
pub fn navigate(key: NavKey, index: usize, layout: GridLayout, enabled: &[bool]) -> KeyOutcome {
    if layout.len == 0 {
        return KeyOutcome::Ignored;
    }
    let index = index.min(layout.len - 1);
    let columns = layout.columns as isize;
    match key {
        NavKey::Left => step(index, -1, layout),
        NavKey::Right => step(index, 1, layout),
        NavKey::Up => step(index, -columns, layout),
        NavKey::Down => step(index, columns, layout),
        NavKey::PageUp => KeyOutcome::PreviousPage(index),
        NavKey::PageDown => KeyOutcome::NextPage(index),
        NavKey::Home => (0..layout.len)
            .find(|candidate| is_enabled(enabled, *candidate))
            .map_or(KeyOutcome::Ignored, KeyOutcome::Focus),
        NavKey::End => (0..layout.len)
            .rev()
            .find(|candidate| is_enabled(enabled, *candidate))
            .map_or(KeyOutcome::Ignored, KeyOutcome::Focus),
        NavKey::Enter | NavKey::Space if is_enabled(enabled, index) => KeyOutcome::Commit(index),
        NavKey::Enter | NavKey::Space => KeyOutcome::Ignored,
        NavKey::Escape => KeyOutcome::Cancel,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn key_names_map_to_navigation_keys() {
        assert_eq!(NavKey::from_key("ArrowLeft"), Some(NavKey::Left));
        assert_eq!(NavKey::from_key(" "), Some(NavKey::Space));
        assert_eq!(NavKey::from_key("Esc"), Some(NavKey::Escape));
        assert_eq!(NavKey::from_key("a"), None);
    }

    #[test]
    fn arrows_move_within_day_grid() {
        assert_eq!(navigate(NavKey::Right, 10, DAY_GRID, &[]), KeyOutcome::Focus(11));
        assert_eq!(navigate(NavKey::Down, 10, DAY_GRID, &[]), KeyOutcome::Focus(17));
        assert_eq!(navigate(NavKey::Up, 10, DAY_GRID, &[]), KeyOutcome::Focus(3));
    }

    #[test]
    fn arrows_wrap_to_adjacent_pages() {
        assert_eq!(navigate(NavKey::Left, 0, DAY_GRID, &[]), KeyOutcome::PreviousPage(41));
        assert_eq!(navigate(NavKey::Up, 3, DAY_GRID, &[]), KeyOutcome::PreviousPage(38));
        assert_eq!(navigate(NavKey::Right, 41, DAY_GRID, &[]), KeyOutcome::NextPage(0));
        assert_eq!(navigate(NavKey::Down, 40, DAY_GRID, &[]), KeyOutcome::NextPage(5));
    }

    #[test]
    fn month_grid_uses_three_columns() {
        assert_eq!(navigate(NavKey::Down, 4, MONTH_GRID, &[]), KeyOutcome::Focus(7));
        assert_eq!(navigate(NavKey::Up, 1, MONTH_GRID, &[]), KeyOutcome::PreviousPage(10));
        assert_eq!(navigate(NavKey::Down, 11, MONTH_GRID, &[]), KeyOutcome::NextPage(2));
    }

    #[test]
    fn year_grid_wraps_across_blocks() {
        assert_eq!(navigate(NavKey::Right, 19, YEAR_GRID, &[]), KeyOutcome::NextPage(0));
        assert_eq!(navigate(NavKey::Up, 2, YEAR_GRID, &[]), KeyOutcome::PreviousPage(18));
        assert_eq!(navigate(NavKey::Down, 17, YEAR_GRID, &[]), KeyOutcome::NextPage(1));
    }

    #[test]
    fn home_and_end_skip_disabled_cells() {
        let mut enabled = vec![true; DAY_GRID_CELLS];
        enabled[0] = false;
        enabled[1] = false;
        enabled[41] = false;
        assert_eq!(navigate(NavKey::Home, 20, DAY_GRID, &enabled), KeyOutcome::Focus(2));
        assert_eq!(navigate(NavKey::End, 20, DAY_GRID, &enabled), KeyOutcome::Focus(40));
        assert_eq!(
            navigate(NavKey::Home, 20, DAY_GRID, &[false; DAY_GRID_CELLS]),
            KeyOutcome::Ignored
        );
    }

    #[test]
    fn commit_and_cancel() {
        let mut enabled = vec![true; 12];
        enabled[5] = false;
        assert_eq!(navigate(NavKey::Enter, 4, MONTH_GRID, &enabled), KeyOutcome::Commit(4));
        assert_eq!(navigate(NavKey::Space, 5, MONTH_GRID, &enabled), KeyOutcome::Ignored);
        assert_eq!(navigate(NavKey::Escape, 5, MONTH_GRID, &enabled), KeyOutcome::Cancel);
        assert_eq!(navigate(NavKey::PageUp, 5, MONTH_GRID, &enabled), KeyOutcome::PreviousPage(5));
    }
}
