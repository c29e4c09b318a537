//! 布局辅助函数

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// 表单卡片的固定高度（行）
pub const CARD_HEIGHT: u16 = 24;

/// 在给定区域内居中卡片：宽度按百分比，高度固定（区域不足时收缩）
pub fn centered_card(percent_x: u16, height: u16, r: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(r.height))])
        .flex(Flex::Center)
        .areas(r);

    let [card] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);

    card
}
