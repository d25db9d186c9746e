//! 英文翻译 (en-US)

use super::keys::{
    ActionTexts, CommonTexts, FormTexts, HintTexts, KeyNames, LevelTexts, ModalTexts, PanelTexts,
    StatusTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Region Picker",
        confirm: "Confirm",
        close: "Close",
        quit: "Quit",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            arrows_ud: "↑↓",
            clear: "Ctrl+U",
            help: "F1",
            quit: "Ctrl+C",
        },
        actions: ActionTexts {
            next_field: "Next field",
            move_up_down: "Move",
            select: "Select",
            open: "Open",
            close_panel: "Close",
            clear: "Clear",
            submit: "Submit",
            help: "Help",
        },
    },

    // ========================================================================
    // 层级
    // ========================================================================
    levels: LevelTexts {
        province: "Province",
        regency: "Regency / City",
        district: "District",
        village: "Village",
    },

    // ========================================================================
    // 表单
    // ========================================================================
    form: FormTexts {
        title: "Location",
        placeholder: "Search {level}...",
        waiting_for_parent: "Select {level} first",
        submit: "Submit",
        location: "Selected",
        nothing_selected: "Nothing selected yet",
    },

    // ========================================================================
    // 结果面板
    // ========================================================================
    panel: PanelTexts {
        title: "{level} results",
        closed: "Press Enter or start typing to search",
        query_too_short: "Type at least {min} characters",
        missing_parent: "Select a {level} first",
        loading: "Loading...",
        empty: "No matching regions",
        error: "Search failed",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        help_title: "Help",
        help_lines: &[
            ("Tab / Shift+Tab", "Move between fields"),
            ("Type", "Search the focused level"),
            ("↑ / ↓", "Move through results"),
            ("Enter", "Select the highlighted region"),
            ("Esc", "Close the result panel"),
            ("Ctrl+U", "Clear the field and every level below it"),
            ("Alt+X", "Clear the whole form"),
            ("Alt+S", "Submit"),
            ("Alt+L", "Switch language"),
            ("Ctrl+C", "Quit without submitting"),
        ],
        summary_title: "Confirm location",
        summary_hint: "Enter to submit, Esc to keep editing",
        error_title: "Error",
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status: StatusTexts {
        selected: "{level} selected",
        descendants_reset: "{level} and below were reset",
        incomplete: "Please select a {level}",
        cleared: "Form cleared",
        seeded: "Loaded saved location",
        seed_failed: "Could not load saved location",
        language_changed: "Language: English",
    },
};
