#[cfg(test)]
mod integration_tests {

    use crate::{flags, normalize, Config, MemoryStore, Normalizer, SettingsStore};

    #[test]
    fn paste_scenario_spacing_and_linebreaks() {
        let cfg = Config {
            auto_add_linebreaks: true,
            add_space_between_chinese_and_english: true,
            ..Config::default()
        };
        let out = normalize("  hello   你好world. ", &cfg).unwrap();
        assert_eq!(out, "hello 你好 world.\n");
    }

    #[test]
    fn paste_scenario_all_flags() {
        let cfg = Config {
            auto_copy: true,
            clean_all_linebreaks: true,
            auto_add_linebreaks: true,
            remove_spaces_between_chinese: true,
            add_space_between_chinese_and_english: true,
            use_full_width_punctuation_marks: true,
        };
        let out = normalize("第一句。 第二句hello.", &cfg).unwrap();
        assert_eq!(out, "第一句。\n第二句 hello。\n");
    }

    #[test]
    fn default_config_still_cleans() {
        // With every flag off, the always-on stages still run.
        let out = normalize("  nor- malize   it’s\u{F06E} done ", &Config::default()).unwrap();
        assert_eq!(out, "normalize it's done ");
    }

    #[test]
    fn clean_linebreaks_yields_single_paragraph() {
        let cfg = Config {
            clean_all_linebreaks: true,
            ..Config::default()
        };
        let out = normalize("段落一\n\n段落二\n段落三", &cfg).unwrap();
        assert!(!out.contains('\n'));
    }

    #[test]
    fn punctuation_conversion_runs_before_url_decode() {
        // Inherited ordering: full-width conversion rewrites the dots and
        // the scheme colon before the decode stage sees the token, so an
        // `http:` URL no longer matches and keeps its escapes.
        let cfg = Config {
            use_full_width_punctuation_marks: true,
            ..Config::default()
        };
        let out = normalize("http://x.com/a%20b", &cfg).unwrap();
        assert_eq!(out, "http：//x。com/a%20b");

        // A `www` token still matches and decodes.
        let out = normalize("www.x.com/a%20b", &cfg).unwrap();
        assert_eq!(out, "www。x。com/a b");
    }

    #[test]
    fn settings_round_trip_drives_pipeline() {
        let mut store = MemoryStore::new();
        store.set(flags::ADD_SPACE_BETWEEN_CHINESE_AND_ENGLISH, true);

        let ui_defaults = Config::default();
        let cfg = Config::load_or_init(&mut store, ui_defaults);
        assert!(cfg.add_space_between_chinese_and_english);

        let out = Normalizer::standard(cfg).normalize("abc中文").unwrap();
        assert_eq!(out, "abc 中文");
    }

    #[test]
    fn corrupt_blob_falls_back_to_ui_state() {
        let ui_state = Config {
            auto_copy: true,
            ..Config::default()
        };
        let cfg = Config::from_json("{{{").unwrap_or(ui_state);
        assert_eq!(cfg, ui_state);
    }
}
