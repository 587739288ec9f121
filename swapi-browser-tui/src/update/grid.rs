//! 卡片网格更新逻辑

use crate::message::GridMessage;
use crate::model::App;

/// 处理卡片网格消息
pub fn update(app: &mut App, msg: GridMessage) {
    match msg {
        GridMessage::Move(direction) => {
            let columns = app.grid_columns();
            app.pagination.move_selection(direction, columns);
        }
        GridMessage::First => app.pagination.select_first(),
        GridMessage::Last => app.pagination.select_last(),
        GridMessage::Activate => {
            if let Some(character) = app.pagination.selected_record().cloned() {
                app.modal.show_detail(character);
            }
        }
    }
}
