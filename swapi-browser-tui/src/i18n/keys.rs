//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `detail.*` / `help.*`**
//! 3. **跨组件复用归 `common.*`**
//! 4. **键盘提示归 `hints.*`**

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本
    pub common: CommonTexts,
    /// 状态栏快捷键提示
    pub hints: HintTexts,
    /// 卡片网格
    pub grid: GridTexts,
    /// 人物详情弹窗
    pub detail: DetailTexts,
    /// 帮助弹窗
    pub help: HelpTexts,
    /// 通知
    pub notification: NotificationTexts,
}

/// 通用文本
pub struct CommonTexts {
    pub app_name: &'static str,
    pub loading: &'static str,
    /// 缺失字段的占位标记
    pub missing: &'static str,
    pub close: &'static str,
    pub previous: &'static str,
    pub next: &'static str,
}

/// 状态栏快捷键提示（按键 + 动作）
pub struct HintTexts {
    pub select: &'static str,
    pub open: &'static str,
    pub page: &'static str,
    pub refresh: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
    pub close: &'static str,
}

/// 卡片网格文本
pub struct GridTexts {
    pub title: &'static str,
    pub empty: &'static str,
}

/// 人物详情弹窗文本
pub struct DetailTexts {
    pub height: &'static str,
    pub mass: &'static str,
    pub birth_year: &'static str,
    pub date_added: &'static str,
    pub appears_in: &'static str,
}

/// 帮助弹窗文本
pub struct HelpTexts {
    pub title: &'static str,
    /// (按键, 说明)
    pub entries: &'static [(&'static str, &'static str)],
}

/// 通知文本
pub struct NotificationTexts {
    /// 含 `{page}` 占位符
    pub fetch_failed: &'static str,
    /// 含 `{page}` 占位符
    pub last_page: &'static str,
    /// 含 `{reason}` 占位符
    pub config_fallback: &'static str,
    /// 含 `{reason}` 占位符
    pub logging_disabled: &'static str,
}
