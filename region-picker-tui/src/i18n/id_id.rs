//! 印尼语翻译 (id-ID)

use super::keys::{
    ActionTexts, CommonTexts, FormTexts, HintTexts, KeyNames, LevelTexts, ModalTexts, PanelTexts,
    StatusTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Pemilih Wilayah",
        confirm: "Konfirmasi",
        close: "Tutup",
        quit: "Keluar",
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
            next_field: "Kolom berikut",
            move_up_down: "Pindah",
            select: "Pilih",
            open: "Buka",
            close_panel: "Tutup",
            clear: "Hapus",
            submit: "Kirim",
            help: "Bantuan",
        },
    },

    // ========================================================================
    // 层级
    // ========================================================================
    levels: LevelTexts {
        province: "Provinsi",
        regency: "Kabupaten / Kota",
        district: "Kecamatan",
        village: "Kelurahan / Desa",
    },

    // ========================================================================
    // 表单
    // ========================================================================
    form: FormTexts {
        title: "Lokasi",
        placeholder: "Cari {level}...",
        waiting_for_parent: "Pilih {level} terlebih dahulu",
        submit: "Kirim",
        location: "Terpilih",
        nothing_selected: "Belum ada yang dipilih",
    },

    // ========================================================================
    // 结果面板
    // ========================================================================
    panel: PanelTexts {
        title: "Hasil {level}",
        closed: "Tekan Enter atau mulai mengetik untuk mencari",
        query_too_short: "Ketik minimal {min} karakter",
        missing_parent: "Pilih {level} terlebih dahulu",
        loading: "Memuat...",
        empty: "Wilayah tidak ditemukan",
        error: "Pencarian gagal",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        help_title: "Bantuan",
        help_lines: &[
            ("Tab / Shift+Tab", "Pindah antar kolom"),
            ("Ketik", "Cari pada tingkat yang aktif"),
            ("↑ / ↓", "Telusuri hasil"),
            ("Enter", "Pilih wilayah yang disorot"),
            ("Esc", "Tutup panel hasil"),
            ("Ctrl+U", "Hapus kolom ini dan semua tingkat di bawahnya"),
            ("Alt+X", "Kosongkan formulir"),
            ("Alt+S", "Kirim"),
            ("Alt+L", "Ganti bahasa"),
            ("Ctrl+C", "Keluar tanpa mengirim"),
        ],
        summary_title: "Konfirmasi lokasi",
        summary_hint: "Enter untuk mengirim, Esc untuk kembali mengubah",
        error_title: "Galat",
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status: StatusTexts {
        selected: "{level} dipilih",
        descendants_reset: "{level} dan tingkat di bawahnya dikosongkan",
        incomplete: "Silakan pilih {level}",
        cleared: "Formulir dikosongkan",
        seeded: "Lokasi tersimpan dimuat",
        seed_failed: "Gagal memuat lokasi tersimpan",
        language_changed: "Bahasa: Indonesia",
    },
};
