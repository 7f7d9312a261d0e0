//! Persistence Bridge Tests
//!
//! Exercised against MemoryStore.

#[cfg(test)]
mod tests {
    use crate::config::{StorageKeys, TASKS_KEY, THEME_KEY};
    use crate::domain::{DomainError, Task, Theme};
    use crate::repository::{KeyValueStore, MemoryStore, PersistenceBridge};
    use crate::test_support::init_logging;

    fn bridge(store: MemoryStore) -> PersistenceBridge<MemoryStore> {
        init_logging();
        PersistenceBridge::new(store, StorageKeys::default())
    }

    #[test]
    fn test_missing_keys_are_absent() {
        let bridge = bridge(MemoryStore::new());
        assert_eq!(bridge.load_tasks(), None);
        assert_eq!(bridge.load_tasks_checked(), Ok(None));
        assert_eq!(bridge.load_theme(), None);
    }

    #[test]
    fn test_tasks_round_trip() {
        let mut bridge = bridge(MemoryStore::new());
        let tasks = vec![
            Task::new(3, "C"),
            Task::new(1, "A"),
            Task::new(2, "B").with_completed(true),
        ];
        bridge.save_tasks(&tasks);
        assert_eq!(bridge.load_tasks(), Some(tasks));
    }

    #[test]
    fn test_empty_list_round_trips_as_present() {
        let mut bridge = bridge(MemoryStore::new());
        bridge.save_tasks(&[]);
        assert_eq!(bridge.load_tasks(), Some(Vec::new()));
    }

    #[test]
    fn test_stored_layout_matches_wire_format() {
        let mut bridge = bridge(MemoryStore::new());
        bridge.save_tasks(&[Task::new(7, "Walk")]);
        bridge.save_theme(Theme::Dark);

        let store = bridge.storage();
        assert_eq!(
            store.get(TASKS_KEY).unwrap().as_deref(),
            Some(r#"[{"id":7,"text":"Walk","completed":false}]"#)
        );
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let store = MemoryStore::new().with_entry(TASKS_KEY, "{not json");
        let bridge = bridge(store);
        assert_eq!(bridge.load_tasks(), None);
        assert!(matches!(bridge.load_tasks_checked(), Err(DomainError::Corrupt(_))));
    }

    #[test]
    fn test_wrong_shape_is_rejected() {
        let store = MemoryStore::new().with_entry(TASKS_KEY, r#"[{"id":"x","text":"A"}]"#);
        assert_eq!(bridge(store).load_tasks(), None);
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let raw = r#"[{"id":1,"text":"A","completed":false},{"id":1,"text":"B","completed":true}]"#;
        let store = MemoryStore::new().with_entry(TASKS_KEY, raw);
        let err = bridge(store).load_tasks_checked().unwrap_err();
        assert_eq!(err, DomainError::Corrupt("duplicate task id 1 (2 records)".to_string()));
    }

    #[test]
    fn test_ids_beyond_safe_integer_are_rejected() {
        let raw = r#"[{"id":18446744073709551615,"text":"A","completed":false}]"#;
        let store = MemoryStore::new().with_entry(TASKS_KEY, raw);
        let bridge = bridge(store);
        assert_eq!(bridge.load_tasks(), None);
        assert_eq!(
            bridge.load_tasks_checked(),
            Err(DomainError::Corrupt(
                "task id 18446744073709551615 is out of range (1 records)".to_string()
            ))
        );
    }

    #[test]
    fn test_largest_safe_id_is_accepted() {
        let raw = r#"[{"id":9007199254740991,"text":"A","completed":false}]"#;
        let store = MemoryStore::new().with_entry(TASKS_KEY, raw);
        assert_eq!(bridge(store).load_tasks(), Some(vec![Task::new(9_007_199_254_740_991, "A")]));
    }

    #[test]
    fn test_rejected_list_stays_stored_until_next_save() {
        let raw = r#"[{"id":1,"text":"A","completed":false},{"id":2,"text":"","completed":false},{"id":3,"text":"C","completed":true}]"#;
        let mut bridge = bridge(MemoryStore::new().with_entry(TASKS_KEY, raw));
        let err = bridge.load_tasks_checked().unwrap_err();
        assert_eq!(err, DomainError::Corrupt("task 2 has blank text (3 records)".to_string()));

        assert_eq!(bridge.load_tasks(), None);
        assert_eq!(bridge.storage().get(TASKS_KEY).unwrap().as_deref(), Some(raw));

        bridge.save_tasks(&[Task::new(4, "D")]);
        assert_eq!(bridge.load_tasks(), Some(vec![Task::new(4, "D")]));
    }

    #[test]
    fn test_blank_text_is_rejected() {
        let raw = r#"[{"id":1,"text":"   ","completed":false}]"#;
        let store = MemoryStore::new().with_entry(TASKS_KEY, raw);
        assert_eq!(bridge(store).load_tasks(), None);
    }

    #[test]
    fn test_theme_forms() {
        let bare = MemoryStore::new().with_entry(THEME_KEY, "dark");
        assert_eq!(bridge(bare).load_theme(), Some(Theme::Dark));

        let quoted = MemoryStore::new().with_entry(THEME_KEY, "\"light\"");
        assert_eq!(bridge(quoted).load_theme(), Some(Theme::Light));

        let unknown = MemoryStore::new().with_entry(THEME_KEY, "sepia");
        assert_eq!(bridge(unknown).load_theme(), None);
    }

    #[test]
    fn test_write_failure_switches_to_memory_only() {
        let mut bridge = bridge(MemoryStore::with_quota(40));
        bridge.save_theme(Theme::Dark);
        assert!(!bridge.is_memory_only());

        let big = vec![Task::new(1, "x".repeat(64))];
        bridge.save_tasks(&big);
        assert!(bridge.is_memory_only());
        assert_eq!(bridge.storage().get(TASKS_KEY).unwrap(), None);

        // later writes are skipped even when they would fit
        bridge.save_theme(Theme::Light);
        assert_eq!(bridge.storage().get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_custom_keys() {
        let keys = StorageKeys {
            tasks: "t".to_string(),
            theme: "th".to_string(),
        };
        let mut bridge = PersistenceBridge::new(MemoryStore::new(), keys);
        bridge.save_tasks(&[Task::new(2, "B")]);
        assert!(bridge.storage().get("t").unwrap().is_some());
        assert_eq!(bridge.storage().get(TASKS_KEY).unwrap(), None);
    }
}
