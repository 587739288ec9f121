//! 分页控件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染 `◀ Previous  [ N ]  Next ▶`，不可用的一侧置灰
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let state = &app.pagination;

    let control = |label: String, enabled: bool| {
        if enabled {
            Span::styled(
                label,
                Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(label, Styles::muted().add_modifier(Modifier::DIM))
        }
    };

    let line = Line::from(vec![
        control(format!("◀ {}", texts.common.previous), state.can_go_previous()),
        Span::raw("   "),
        Span::styled(
            format!("[ {} ]", state.page),
            Style::default()
                .bg(c.selected_bg)
                .fg(c.selected_fg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        control(format!("{} ▶", texts.common.next), state.can_go_next()),
    ]);

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
