use crate::consts;
use ratatui::layout::{Flex, Layout, Rect, Size};

/// Return a rectangle of size `size` centered within `area`, clamped to
/// `area` if it does not fit.
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [middle] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [middle] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(middle);
    middle
}

pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    center_rect(buffer_area, consts::DISPLAY_SIZE)
}
