//! 底部状态栏组件

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::state::NotificationLevel;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
///
/// 有通知时通知排在最左侧并占据所需宽度，快捷键提示只使用剩余空间。
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = hint_line(app);

    let Some(notification) = notification_line(app) else {
        frame.render_widget(Paragraph::new(hints).style(Styles::statusbar()), area);
        return;
    };

    let width = u16::try_from(notification.width()).unwrap_or(u16::MAX);
    let [notification_area, hints_area] =
        Layout::horizontal([Constraint::Length(width), Constraint::Min(0)]).areas(area);

    frame.render_widget(
        Paragraph::new(notification).style(Styles::statusbar()),
        notification_area,
    );
    frame.render_widget(Paragraph::new(hints).style(Styles::statusbar()), hints_area);
}

/// 最新通知（含尚未显示的通知数），以分隔符结尾
fn notification_line(app: &App) -> Option<Line<'static>> {
    let notification = app.notifications.latest()?;
    let style = match notification.level {
        NotificationLevel::Error => Style::default()
            .fg(colors().error)
            .add_modifier(Modifier::BOLD),
        NotificationLevel::Info => Style::default().fg(Color::Yellow),
    };

    let mut spans = vec![
        Span::raw(" "),
        Span::styled(notification.message.clone(), style),
    ];
    let pending = app.notifications.len() - 1;
    if pending > 0 {
        spans.push(Span::styled(format!(" (+{pending})"), Styles::hint_desc()));
    }
    spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));

    Some(Line::from(spans))
}

/// 快捷键提示
fn hint_line(app: &App) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (key, desc)) in get_hints(app).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(desc, Styles::hint_desc()));
    }
    Line::from(spans)
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let hints = &t().hints;

    if app.modal.is_detail_visible() {
        return vec![("Esc/Enter", hints.close), ("Ctrl+C", hints.quit)];
    }
    if app.modal.is_open() {
        return vec![("Esc", hints.close), ("Ctrl+C", hints.quit)];
    }

    vec![
        ("←↓↑→", hints.select),
        ("Enter", hints.open),
        ("n/p", hints.page),
        ("Alt+r", hints.refresh),
        ("?", hints.help),
        ("q", hints.quit),
    ]
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::model::App;
    use crate::view::test_util::render_lines;

    #[test]
    fn shows_latest_notification() {
        let mut app = App::new(Duration::from_secs(5));
        app.notifications.push_error("Failed to load page 3: HTTP 500");

        let lines = render_lines(&app, 120, 10);
        let status = lines.last().cloned().unwrap_or_default();
        assert!(status.contains("Failed to load page 3: HTTP 500"));
        assert!(status.contains("Refresh"));
    }

    #[test]
    fn notification_fits_default_width() {
        let mut app = App::new(Duration::from_secs(5));
        app.notifications.push_error("Failed to load page 3: HTTP 500");

        let lines = render_lines(&app, 80, 24);
        let status = lines.last().cloned().unwrap_or_default();
        assert!(
            status.contains("Failed to load page 3: HTTP 500"),
            "status bar: {status:?}"
        );
        // 提示被挤到通知之后
        assert!(status.find("Failed") < status.find("Select"));
    }

    #[test]
    fn long_notification_wins_over_hints() {
        let mut app = App::new(Duration::from_secs(5));
        let reason = "Network error: error sending request for url (https://swapi.dev/api/people/?page=2)";
        app.notifications.push_error(reason);

        let lines = render_lines(&app, 80, 24);
        let status = lines.last().cloned().unwrap_or_default();
        assert!(status.starts_with(" Network error: error sending request"), "{status:?}");
    }

    #[test]
    fn counts_older_notifications() {
        let mut app = App::new(Duration::from_secs(5));
        app.notifications.push_info("one");
        app.notifications.push_info("two");
        app.notifications.push_info("three");

        let lines = render_lines(&app, 120, 10);
        let status = lines.last().cloned().unwrap_or_default();
        assert!(status.contains("three (+2)"));
        assert!(!status.contains("one"));
    }

    #[test]
    fn modal_hints() {
        let mut app = App::new(Duration::from_secs(5));
        app.modal.show_help();

        let lines = render_lines(&app, 120, 30);
        let status = lines.last().cloned().unwrap_or_default();
        assert!(status.contains("Esc"));
        assert!(!status.contains("Refresh"));
    }
}
