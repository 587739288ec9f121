//! 翻页状态

use swapi_browser_client::{Character, PageNumber, PAGE_SIZE};

use crate::message::Direction;

/// 加载阶段
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPhase {
    /// 尚未发出任何请求
    #[default]
    Idle,
    /// 等待第 `generation` 次请求的结果
    Loading { generation: u64 },
    /// 最近一次请求已完成（成功或失败）
    Loaded,
}

/// 翻页状态
#[derive(Debug, Default)]
pub struct PaginationState {
    /// 当前页码
    pub page: PageNumber,
    /// 当前页的人物（加载期间保留上一页的记录）
    pub records: Vec<Character>,
    /// 加载阶段
    pub phase: LoadPhase,
    /// 选中卡片的索引
    pub selected: usize,
    /// 最近一次请求的代数
    generation: u64,
}

impl PaginationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 最近一次请求的代数
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// 是否正在加载
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, LoadPhase::Loading { .. })
    }

    /// 进入加载阶段，返回本次请求的代数
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.phase = LoadPhase::Loading {
            generation: self.generation,
        };
        self.generation
    }

    /// 接收请求结果
    ///
    /// 仅当 `generation` 是正在等待的那一次时才生效，返回是否被采用。
    pub fn finish_load(&mut self, generation: u64, records: Vec<Character>) -> bool {
        if self.phase != (LoadPhase::Loading { generation }) {
            return false;
        }
        self.records = records;
        self.selected = 0;
        self.phase = LoadPhase::Loaded;
        true
    }

    /// Next 是否可用：本页恰好满 10 条
    pub fn can_go_next(&self) -> bool {
        self.records.len() == PAGE_SIZE
    }

    /// Previous 是否可用：不在第 1 页
    pub fn can_go_previous(&self) -> bool {
        !self.page.is_first()
    }

    /// 翻到下一页，返回是否翻页
    pub fn go_next(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.page = self.page.next();
        true
    }

    /// 翻到上一页，返回是否翻页
    pub fn go_previous(&mut self) -> bool {
        match self.page.previous() {
            Some(page) => {
                self.page = page;
                true
            }
            None => false,
        }
    }

    /// 在 `columns` 列的网格中移动选择光标
    pub fn move_selection(&mut self, direction: Direction, columns: usize) {
        let len = self.records.len();
        if len == 0 {
            return;
        }
        let columns = columns.max(1);
        let current = self.selected.min(len - 1);
        let column = current % columns;

        self.selected = match direction {
            Direction::Left if column > 0 => current - 1,
            Direction::Right if column + 1 < columns && current + 1 < len => current + 1,
            Direction::Up if current >= columns => current - columns,
            Direction::Down if current + columns < len => current + columns,
            // 下一行不满时落到最后一张卡片
            Direction::Down if current / columns < (len - 1) / columns => len - 1,
            _ => current,
        };
    }

    /// 选择第一张卡片
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一张卡片
    pub fn select_last(&mut self) {
        self.selected = self.records.len().saturating_sub(1);
    }

    /// 当前选中的人物
    pub fn selected_record(&self) -> Option<&Character> {
        self.records.get(self.selected)
    }
}
