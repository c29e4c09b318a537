//! 通用 UI 组件
//!
//! 输入框、按钮、结果卡片等通用组件

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::config::Rgb;

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.0, rgb.1, rgb.2)
    }
}

/// [组件] 带占位符的输入框
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    placeholder: &str,
    value: &str,
    is_focused: bool,
    active_color: Color,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(active_color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let text = if value.is_empty() {
        Line::styled(placeholder, Style::default().fg(Color::DarkGray))
    } else {
        Line::raw(value)
    };

    let input = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style),
    );
    frame.render_widget(input, area);

    if is_focused {
        let offset = u16::try_from(value.chars().count()).unwrap_or(u16::MAX);
        let x = area
            .x
            .saturating_add(1)
            .saturating_add(offset)
            .min(area.right().saturating_sub(2));
        frame.set_cursor_position((x, area.y + 1));
    }
}

/// [组件] 按钮
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, is_focused: bool, color: Color) {
    let style = if is_focused {
        Style::default()
            .fg(Color::White)
            .bg(color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    };

    let button = Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        );
    frame.render_widget(button, area);
}
