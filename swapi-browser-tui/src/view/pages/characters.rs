//! 人物卡片网格

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::state::LoadPhase;
use crate::model::App;
use crate::util::truncate_to_width;
use crate::view::theme::{colors, Styles};

/// 每张卡片的高度（含边框）
const CARD_HEIGHT: u16 = 3;

/// 渲染人物卡片网格
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    if app.pagination.records.is_empty() {
        // 首次加载前与加载中由加载动画占位
        if app.pagination.phase == LoadPhase::Loaded {
            render_empty(frame, area);
        }
        return;
    }
    render_grid(app, frame, area);
}

/// 渲染空状态
fn render_empty(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::styled(t().grid.empty, Styles::muted()),
    ];
    frame.render_widget(Paragraph::new(content).alignment(Alignment::Center), area);
}

/// 渲染卡片
fn render_grid(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let records = &app.pagination.records;
    let selected = app.pagination.selected;

    let columns = app.grid_columns().max(1);
    let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
    let first_row = first_visible_row(selected / columns, visible_rows);

    let card_width = area.width / u16::try_from(columns).unwrap_or(1);
    if card_width < 3 {
        return;
    }

    for (index, character) in records.iter().enumerate().skip(first_row * columns) {
        let row = index / columns - first_row;
        if row >= visible_rows {
            break;
        }
        let column = index % columns;

        // 行列数都受终端尺寸约束，不会溢出 u16
        let x = area.x + card_width * u16::try_from(column).unwrap_or(0);
        let y = area.y + CARD_HEIGHT * u16::try_from(row).unwrap_or(0);
        let height = CARD_HEIGHT.min(area.bottom().saturating_sub(y));
        let card = Rect::new(x, y, card_width, height);

        let is_selected = index == selected;
        let (border_style, text_style) = if is_selected {
            (Styles::border_focused(), Styles::selected())
        } else {
            (Styles::border(), Style::default().fg(c.fg))
        };

        let name = truncate_to_width(
            character.display_name(),
            usize::from(card_width.saturating_sub(2)),
        );
        let paragraph = Paragraph::new(Line::styled(name, text_style))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );
        frame.render_widget(paragraph, card);
    }
}

/// 使选中行保持可见的首行
fn first_visible_row(selected_row: usize, visible_rows: usize) -> usize {
    (selected_row + 1).saturating_sub(visible_rows)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use swapi_browser_client::Character;

    use super::*;
    use crate::model::Viewport;
    use crate::view::test_util::{contains, render_lines};

    fn loaded(names: &[&str], width: u16, height: u16) -> App {
        let mut app = App::new(Duration::from_secs(5));
        app.viewport = Viewport::new(width, height);
        let generation = app.pagination.begin_load();
        app.pagination.finish_load(
            generation,
            names
                .iter()
                .map(|n| Character {
                    name: Some((*n).to_string()),
                    ..Character::default()
                })
                .collect(),
        );
        app
    }

    #[test]
    fn cards_show_names() {
        let app = loaded(&["Luke Skywalker", "C-3PO", "R2-D2"], 100, 30);
        let lines = render_lines(&app, 100, 30);
        assert!(contains(&lines, "Luke Skywalker"));
        assert!(contains(&lines, "C-3PO"));
        assert!(contains(&lines, "R2-D2"));
    }

    #[test]
    fn cards_fill_columns() {
        let app = loaded(&["Luke", "Leia", "Han"], 100, 30);
        let lines = render_lines(&app, 100, 30);
        // 3 列时同一行
        assert!(lines
            .iter()
            .any(|l| l.contains("Luke") && l.contains("Leia") && l.contains("Han")));
    }

    #[test]
    fn empty_page_message() {
        let app = loaded(&[], 80, 24);
        let lines = render_lines(&app, 80, 24);
        assert!(contains(&lines, "No characters on this page"));
    }

    #[test]
    fn selection_scrolls_into_view() {
        let names: Vec<String> = (0..10).map(|i| format!("Person {i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        // 40 列 → 单列；12 行只够显示少量卡片
        let mut app = loaded(&refs, 40, 12);
        app.pagination.select_last();

        let lines = render_lines(&app, 40, 12);
        assert!(contains(&lines, "Person 9"));
        assert!(!contains(&lines, "Person 0"));
    }

    #[test]
    fn first_visible_row_keeps_selection() {
        assert_eq!(first_visible_row(0, 3), 0);
        assert_eq!(first_visible_row(2, 3), 0);
        assert_eq!(first_visible_row(3, 3), 1);
        assert_eq!(first_visible_row(9, 1), 9);
    }
}
