use ratatui::layout::Rect;

use crate::ui::viewport::Extent;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 2.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).1
}

/// On-screen part of a section scrolled by `scroll` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placed {
    pub area: Rect,
    /// Rows of the section cut off above the body.
    pub skip: u16,
}

pub fn place_section(body: Rect, scroll: u16, extent: Extent) -> Option<Placed> {
    let top = i32::from(extent.top) - i32::from(scroll);
    let bottom = top + i32::from(extent.height);
    let visible_top = top.max(0);
    let visible_bottom = bottom.min(i32::from(body.height));
    if visible_bottom <= visible_top {
        return None;
    }
    Some(Placed {
        area: Rect {
            x: body.x,
            y: body.y + visible_top as u16,
            width: body.width,
            height: (visible_bottom - visible_top) as u16,
        },
        skip: (visible_top - top) as u16,
    })
}

/// Card track inside the categories section: below the two title rows,
/// above the dots row.
pub fn categories_track(section: Rect) -> Rect {
    let top = section.y + 2.min(section.height);
    let bottom = (section.y + section.height).saturating_sub(1).max(top);
    Rect {
        x: section.x + 1.min(section.width),
        y: top,
        width: section.width.saturating_sub(2),
        height: bottom - top,
    }
}

/// Column where the "Products" menu label starts in the header.
pub const PRODUCTS_LABEL_X: u16 = 20;

/// Dropdown anchored under the header's products label.
pub fn dropdown_rect(header: Rect, screen: Rect, entries: usize) -> Rect {
    let x = (header.x + PRODUCTS_LABEL_X).min(screen.right().saturating_sub(1));
    let y = header.bottom().min(screen.bottom());
    let width = 32.min(screen.right().saturating_sub(x));
    let wanted = (entries.max(1) as u16).saturating_add(2);
    let height = wanted.min(screen.bottom().saturating_sub(y));
    Rect {
        x,
        y,
        width,
        height,
    }
}

pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body() -> Rect {
        Rect {
            x: 0,
            y: 3,
            width: 80,
            height: 20,
        }
    }

    #[test]
    fn section_fully_visible() {
        let placed = place_section(body(), 0, Extent { top: 2, height: 5 }).unwrap();
        assert_eq!(placed.area.y, 5);
        assert_eq!(placed.area.height, 5);
        assert_eq!(placed.skip, 0);
    }

    #[test]
    fn section_clipped_at_top() {
        let placed = place_section(body(), 4, Extent { top: 2, height: 5 }).unwrap();
        assert_eq!(placed.area.y, 3);
        assert_eq!(placed.area.height, 3);
        assert_eq!(placed.skip, 2);
    }

    #[test]
    fn section_below_body_is_hidden() {
        let below = Extent { top: 20, height: 5 };
        assert!(place_section(body(), 0, below).is_none());
    }

    #[test]
    fn dropdown_stays_on_screen() {
        let screen = Rect {
            x: 0,
            y: 0,
            width: 30,
            height: 6,
        };
        let header = Rect {
            x: 0,
            y: 0,
            width: 30,
            height: 3,
        };
        let rect = dropdown_rect(header, screen, 10);
        assert!(rect.right() <= screen.right());
        assert!(rect.bottom() <= screen.bottom());
    }
}
