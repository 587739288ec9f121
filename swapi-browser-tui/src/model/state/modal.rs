//! 弹窗状态

use swapi_browser_client::Character;

use crate::model::domain::CharacterDetails;

/// 弹窗类型
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// 人物详情
    CharacterDetail { character: Box<Character> },
    /// 快捷键帮助
    Help,
}

/// 弹窗状态
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 打开人物详情
    pub fn show_detail(&mut self, character: Character) {
        self.active = Some(Modal::CharacterDetail {
            character: Box::new(character),
        });
    }

    /// 打开帮助
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    /// 关闭弹窗（同时清空选中的人物）
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有弹窗打开
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 详情弹窗是否可见
    pub fn is_detail_visible(&self) -> bool {
        matches!(self.active, Some(Modal::CharacterDetail { .. }))
    }

    /// 详情弹窗中的人物
    pub fn selected_character(&self) -> Option<&Character> {
        match &self.active {
            Some(Modal::CharacterDetail { character }) => Some(character),
            _ => None,
        }
    }

    /// 详情弹窗的展示字段
    pub fn details(&self) -> Option<CharacterDetails> {
        self.selected_character().map(CharacterDetails::from)
    }
}
