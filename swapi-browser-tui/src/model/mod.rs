//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含数据结构与针对自身的小型状态转换，不做 I/O。
//! 所有状态变更都由 Update 层触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod viewport;       // 终端尺寸与网格列数
//!
//!         pub mod domain;     // 领域投影（人物详情的展示字段）
//!         pub mod state;      // 翻页、弹窗、通知状态
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/app.rs 中定义：
//!
//!         pub struct App {
//!             pub should_quit: bool,                  // 退出标志
//!             pub pagination: PaginationState,        // 当前页、记录、加载阶段、选中卡片
//!             pub modal: ModalState,                  // 详情 / 帮助弹窗
//!             pub notifications: NotificationState,   // 状态栏通知
//!             pub viewport: Viewport,                 // 终端尺寸
//!             pub tick: u64,                          // 主循环计数（驱动加载动画）
//!         }
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、翻页状态（PaginationState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     LoadPhase 状态机：
//!
//!         Idle ──begin_load()──▶ Loading { generation } ──finish_load(g)──▶ Loaded
//!                                     ▲                                       │
//!                                     └────────── begin_load() ◀──────────────┘
//!
//!     每次 begin_load() 都会产生新的 generation。
//!     finish_load() 只接受与当前 Loading 代数一致的结果，
//!     过期的结果被丢弃，因此旧请求永远无法覆盖新状态。
//!
//!     翻页规则：
//!         - Next      仅当本页记录数恰好为 10 时可用
//!         - Previous  仅当页码大于 1 时可用（PageNumber 本身保证 ≥ 1）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、弹窗状态（ModalState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     active: Option<Modal>
//!         - None                              无弹窗
//!         - Some(Modal::CharacterDetail{..})  人物详情（持有被选中的记录）
//!         - Some(Modal::Help)                 快捷键帮助
//!
//!     show_detail(record) 打开详情，close() 关闭并清空选中记录。
//!     详情的展示字段由 domain::CharacterDetails::from(&Character) 计算，
//!     不会修改原记录。
//!

mod app;
mod viewport;

pub mod domain;
pub mod state;

pub use app::App;
pub use viewport::Viewport;
