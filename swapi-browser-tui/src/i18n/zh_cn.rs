//! 简体中文翻译 (zh-CN)

use super::keys::{
    CommonTexts, DetailTexts, GridTexts, HelpTexts, HintTexts, NotificationTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "星球大战人物",
        loading: "加载中...",
        missing: "（缺失）",
        close: "关闭",
        previous: "上一页",
        next: "下一页",
    },

    hints: HintTexts {
        select: "选择",
        open: "详情",
        page: "翻页",
        refresh: "刷新",
        help: "帮助",
        quit: "退出",
        close: "关闭",
    },

    grid: GridTexts {
        title: "人物",
        empty: "本页没有人物",
    },

    detail: DetailTexts {
        height: "身高",
        mass: "体重",
        birth_year: "出生年份",
        date_added: "收录日期",
        appears_in: "出场次数",
    },

    help: HelpTexts {
        title: "快捷键",
        entries: &[
            ("←↓↑→ / hjkl", "移动选择"),
            ("Home / End", "第一张 / 最后一张"),
            ("Enter", "查看人物详情"),
            ("n / PgDn", "下一页"),
            ("p / PgUp", "上一页"),
            ("Alt+r", "重新加载当前页"),
            ("? / Alt+h", "显示帮助"),
            ("Esc", "关闭弹窗 / 通知"),
            ("q / Ctrl+C", "退出"),
        ],
    },

    notification: NotificationTexts {
        fetch_failed: "第 {page} 页加载失败",
        last_page: "第 {page} 页是最后一页",
        config_fallback: "已使用默认配置：{reason}",
        logging_disabled: "日志已禁用：{reason}",
    },
};
