//! 英文翻译 (en-US)

use super::keys::{
    CommonTexts, DetailTexts, GridTexts, HelpTexts, HintTexts, NotificationTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Star Wars Characters",
        loading: "Loading...",
        missing: "(missing)",
        close: "Close",
        previous: "Previous",
        next: "Next",
    },

    hints: HintTexts {
        select: "Select",
        open: "Details",
        page: "Page",
        refresh: "Refresh",
        help: "Help",
        quit: "Quit",
        close: "Close",
    },

    grid: GridTexts {
        title: "Characters",
        empty: "No characters on this page",
    },

    detail: DetailTexts {
        height: "Height",
        mass: "Mass",
        birth_year: "Birth Year",
        date_added: "Date Added",
        appears_in: "Appears in",
    },

    help: HelpTexts {
        title: "Keyboard Shortcuts",
        entries: &[
            ("←↓↑→ / hjkl", "Move selection"),
            ("Home / End", "First / last card"),
            ("Enter", "Show character details"),
            ("n / PgDn", "Next page"),
            ("p / PgUp", "Previous page"),
            ("Alt+r", "Reload current page"),
            ("? / Alt+h", "This help"),
            ("Esc", "Close popup / dismiss notification"),
            ("q / Ctrl+C", "Quit"),
        ],
    },

    notification: NotificationTexts {
        fetch_failed: "Failed to load page {page}",
        last_page: "Page {page} is the last page",
        config_fallback: "Using default config: {reason}",
        logging_disabled: "Logging disabled: {reason}",
    },
};
