//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;

use super::components;
use super::pages;
use super::theme::{colors, Styles};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 四层布局：标题栏 + 卡片网格 + 分页控件 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(3),    // 卡片网格
            Constraint::Length(1), // 分页控件
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    let title_area = main_layout[0];
    let content_area = main_layout[1];
    let pagination_area = main_layout[2];
    let status_area = main_layout[3];

    render_title_bar(frame, title_area);
    render_content(app, frame, content_area);
    components::pagination::render(app, frame, pagination_area);
    components::statusbar::render(app, frame, status_area);

    // 加载动画叠加在网格上
    if app.pagination.is_loading() {
        components::loader::render(app, frame, content_area);
    }

    // 渲染弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(format!(" {}", t().common.app_name))
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 渲染卡片网格区域
fn render_content(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", t().grid.title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border());

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    pages::characters::render(app, frame, inner_area);
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use swapi_browser_client::Character;

    use crate::model::App;
    use crate::view::test_util::{contains, render_lines};

    #[test]
    fn title_and_frame() {
        let app = App::new(Duration::from_secs(5));
        let lines = render_lines(&app, 80, 24);
        assert!(lines[0].contains("Star Wars Characters"));
        assert!(contains(&lines, " Characters "));
    }

    #[test]
    fn loader_overlays_while_loading() {
        let mut app = App::new(Duration::from_secs(5));
        app.pagination.begin_load();
        let lines = render_lines(&app, 80, 24);
        assert!(contains(&lines, "Loading..."));
    }

    #[test]
    fn no_loader_once_loaded() {
        let mut app = App::new(Duration::from_secs(5));
        let generation = app.pagination.begin_load();
        app.pagination.finish_load(
            generation,
            vec![Character {
                name: Some("Leia Organa".to_string()),
                ..Character::default()
            }],
        );
        let lines = render_lines(&app, 80, 24);
        assert!(!contains(&lines, "Loading..."));
        assert!(contains(&lines, "Leia Organa"));
    }
}
