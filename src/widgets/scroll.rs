//! Scroll window for lists and grids.

/// First visible row after the cursor moved.
///
/// The window stays put while the cursor is inside it. When the cursor
/// leaves it, the window recentres on the cursor, clamped so it never runs
/// past the last row.
pub(super) fn follow_cursor(cursor: usize, scroll: usize, visible: usize, len: usize) -> usize {
    if visible == 0 || len <= visible {
        return 0;
    }
    let max_scroll = len - visible;
    let scroll = scroll.min(max_scroll);
    if (scroll..scroll + visible).contains(&cursor) {
        return scroll;
    }
    cursor.saturating_sub(visible / 2).min(max_scroll)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_everything_fits() {
        assert_eq!(follow_cursor(4, 0, 10, 5), 0);
        assert_eq!(follow_cursor(4, 3, 10, 5), 0);
    }

    #[test]
    fn test_stays_while_inside() {
        assert_eq!(follow_cursor(3, 2, 4, 20), 2);
        assert_eq!(follow_cursor(5, 2, 4, 20), 2);
    }

    #[test]
    fn test_recentres_when_leaving() {
        // window [2, 6), cursor moves to 6
        assert_eq!(follow_cursor(6, 2, 4, 20), 4);
        // cursor moves above the window
        assert_eq!(follow_cursor(1, 2, 4, 20), 0);
    }

    #[test]
    fn test_clamped_at_end() {
        assert_eq!(follow_cursor(19, 0, 4, 20), 16);
        // stale scroll past the end after the list shrank
        assert_eq!(follow_cursor(5, 8, 4, 8), 4);
    }

    #[test]
    fn test_no_visible_rows() {
        assert_eq!(follow_cursor(3, 1, 0, 10), 0);
    }
}
