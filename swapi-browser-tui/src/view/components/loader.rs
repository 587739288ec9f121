//! 加载动画

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::colors;

use super::modal::centered_rect;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// 在 `area` 中央绘制加载提示
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let index = usize::try_from(app.tick % SPINNER.len() as u64).unwrap_or(0);
    let text = format!("{} {}", SPINNER[index], t().common.loading);

    let popup = centered_rect(24, 3, area);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(Line::styled(text, Style::default().fg(c.highlight)))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(c.highlight))
                    .style(Style::default().bg(c.bg)),
            ),
        popup,
    );
}
