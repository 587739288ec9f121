//! 卡片网格消息类型

/// 光标移动方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// 卡片网格相关消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridMessage {
    /// 移动选择光标
    Move(Direction),

    /// 跳到第一张卡片
    First,

    /// 跳到最后一张卡片
    Last,

    /// 打开选中卡片的详情
    Activate,
}
