//! 视图层模块
//!
//! 包含主渲染入口和表单各部分的视图

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::state::{App, Focus};
use crate::models::BmiResult;
use components::{render_button, render_input_widget};
use layouts::{CARD_HEIGHT, centered_card};

const TITLE_COLOR: Color = Color::Rgb(0x2C, 0x3E, 0x50);
const CLEAR_COLOR: Color = Color::Rgb(0x7F, 0x8C, 0x8D);
const RESULT_TEXT_COLOR: Color = Color::Rgb(0x34, 0x49, 0x5E);

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App) {
    let [body, help] =
        Layout::vertical([Constraint::Min(CARD_HEIGHT), Constraint::Length(1)]).areas(frame.area());

    let card = centered_card(60, CARD_HEIGHT, body);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let [title, mass, height, calculate, clear, message, result] = Layout::vertical([
        Constraint::Length(2), // 标题
        Constraint::Length(3), // 体重
        Constraint::Length(3), // 身高
        Constraint::Length(3), // 计算按钮
        Constraint::Length(3), // 清空按钮
        Constraint::Length(2), // 错误信息
        Constraint::Min(0),    // 结果卡片
    ])
    .areas(inner);

    render_title(frame, title);

    let accent: Color = app.palette.accent.into();
    render_input_widget(
        frame,
        mass,
        "Mass (kg)",
        &app.mass_input,
        app.focus == Focus::Mass,
        accent,
    );
    render_input_widget(
        frame,
        height,
        "Height (m)",
        &app.height_input,
        app.focus == Focus::Height,
        accent,
    );
    render_button(
        frame,
        calculate,
        "Calculate BMI",
        app.focus == Focus::CalculateButton,
        accent,
    );
    render_button(
        frame,
        clear,
        "Clear",
        app.focus == Focus::ClearButton,
        CLEAR_COLOR,
    );

    if let Some(error) = &app.error {
        render_error(frame, app, error, message);
    }
    if let Some(bmi) = &app.result {
        render_result(frame, app, bmi, result);
    }

    render_help(frame, help);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("💪 BMI Calculator")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(TITLE_COLOR)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(title, area);
}

fn render_error(frame: &mut Frame, app: &App, error: &str, area: Rect) {
    let message = Paragraph::new(error)
        .alignment(Alignment::Center)
        .style(Style::default().fg(app.palette.error.into()))
        .wrap(Wrap { trim: true });
    frame.render_widget(message, area);
}

fn render_result(frame: &mut Frame, app: &App, bmi: &BmiResult, area: Rect) {
    let color: Color = app.palette.category_color(bmi.category).into();

    let lines = vec![
        Line::styled(
            format!("BMI: {:.2}", bmi.index),
            Style::default()
                .fg(RESULT_TEXT_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            bmi.category.label(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ];

    let card = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(color)),
    );
    frame.render_widget(card, area);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new("[Tab/↑↓] Move  [Enter] Calculate / press button  [Esc] Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(help, area);
}
