//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::domain::{CharacterDetails, DetailValue};
use crate::model::state::Modal;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 标签列宽度
const LABEL_WIDTH: usize = 14;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::CharacterDetail { .. } => {
            if let Some(details) = app.modal.details() {
                render_detail(frame, &details);
            }
        }
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 弹窗外框
fn popup_block(title: &str) -> Block<'_> {
    let c = colors();
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.highlight))
        .style(Style::default().bg(c.bg).fg(c.fg))
}

/// 渲染人物详情
fn render_detail(frame: &mut Frame, details: &CharacterDetails) {
    let texts = t();

    let rows = [
        (texts.detail.height, &details.height),
        (texts.detail.mass, &details.mass),
        (texts.detail.birth_year, &details.birth_year),
        (texts.detail.date_added, &details.date_added),
        (texts.detail.appears_in, &details.appearances),
    ];

    let mut lines = vec![Line::from("")];
    for (label, value) in rows {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {label:<LABEL_WIDTH$}"),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            value_span(value),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Esc", Styles::hint_key()),
        Span::raw(" "),
        Span::styled(texts.common.close, Styles::hint_desc()),
    ]).alignment(Alignment::Right));

    // 内容行 + 上下边框
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let area = centered_rect(44, height, frame.area());

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(popup_block(&details.name)),
        area,
    );
}

fn value_span(value: &DetailValue) -> Span<'static> {
    match value.as_deref() {
        Some(v) => Span::raw(v.to_string()),
        None => Span::styled(
            t().common.missing,
            Styles::muted().add_modifier(Modifier::ITALIC),
        ),
    }
}

/// 渲染快捷键帮助
fn render_help(frame: &mut Frame) {
    let help = &t().help;

    let mut lines = vec![Line::from("")];
    for (keys, desc) in help.entries {
        lines.push(Line::from(vec![
            Span::styled(format!("  {keys:<14}"), Styles::hint_key()),
            Span::raw(*desc),
        ]));
    }
    lines.push(Line::from(""));

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let area = centered_rect(56, height, frame.area());

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(popup_block(help.title)), area);
}
