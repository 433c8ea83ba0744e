#[cfg(test)]
mod tests {
    use sleeptrack::db::{db::Db, migrations::get_db_version, migrations::SCHEMA_VERSION, sessions::Sessions};
    use sleeptrack::libs::session::{SleepSession, UNRATED};
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct SessionsTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl TestContext for SessionsTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("sleep_history.db");
            SessionsTestContext {
                _temp_dir: temp_dir,
                db_path,
            }
        }
    }

    #[test_context(SessionsTestContext)]
    #[test]
    fn test_insert_assigns_increasing_ids(ctx: &mut SessionsTestContext) {
        let sessions = Sessions::new(Db::open(&ctx.db_path).unwrap());

        let first = sessions.insert(&SleepSession::new(100)).unwrap();
        let second = sessions.insert(&SleepSession::new(200)).unwrap();
        assert!(second > first);

        let stored = sessions.get_by_id(first).unwrap().unwrap();
        assert_eq!(stored.id, Some(first));
        assert_eq!(stored.start_time_milli, 100);
        assert_eq!(stored.end_time_milli, 100);
        assert_eq!(stored.sleep_quality, UNRATED);
    }

    #[test_context(SessionsTestContext)]
    #[test]
    fn test_get_all_is_newest_first(ctx: &mut SessionsTestContext) {
        let sessions = Sessions::new(Db::open(&ctx.db_path).unwrap());

        for start in [300, 100, 200] {
            sessions.insert(&SleepSession::new(start)).unwrap();
        }

        let all = sessions.get_all().unwrap();
        let ids: Vec<i64> = all.iter().filter_map(|s| s.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(ids, sorted);
        // Ordering follows ids, not start times.
        assert_eq!(all[0].start_time_milli, 200);
        assert_eq!(sessions.get_most_recent().unwrap().unwrap().id, all[0].id);
    }

    #[test_context(SessionsTestContext)]
    #[test]
    fn test_update_overwrites_row(ctx: &mut SessionsTestContext) {
        let sessions = Sessions::new(Db::open(&ctx.db_path).unwrap());
        let id = sessions.insert(&SleepSession::new(100)).unwrap();

        let mut night = sessions.get_by_id(id).unwrap().unwrap();
        night.end_time_milli = 500;
        night.sleep_quality = 3;
        assert_eq!(sessions.update(id, &night).unwrap(), 1);

        let stored = sessions.get_by_id(id).unwrap().unwrap();
        assert_eq!(stored, night);
        assert!(!stored.is_in_progress());
        assert!(stored.is_rated());

        assert_eq!(sessions.update(id + 100, &night).unwrap(), 0);
    }

    #[test_context(SessionsTestContext)]
    #[test]
    fn test_clear_keeps_table_and_id_counter(ctx: &mut SessionsTestContext) {
        let sessions = Sessions::new(Db::open(&ctx.db_path).unwrap());
        sessions.insert(&SleepSession::new(100)).unwrap();
        let last = sessions.insert(&SleepSession::new(200)).unwrap();

        assert_eq!(sessions.clear().unwrap(), 2);
        assert!(sessions.get_all().unwrap().is_empty());
        assert!(sessions.get_most_recent().unwrap().is_none());

        let next = sessions.insert(&SleepSession::new(300)).unwrap();
        assert!(next > last);
    }

    #[test_context(SessionsTestContext)]
    #[test]
    fn test_explicit_id_is_kept_and_must_be_unique(ctx: &mut SessionsTestContext) {
        let sessions = Sessions::new(Db::open(&ctx.db_path).unwrap());
        let mut night = SleepSession::new(100);
        night.id = Some(42);

        assert_eq!(sessions.insert(&night).unwrap(), 42);
        assert!(sessions.insert(&night).is_err());
    }

    #[test_context(SessionsTestContext)]
    #[test]
    fn test_data_survives_reopen(ctx: &mut SessionsTestContext) {
        let id = {
            let sessions = Sessions::new(Db::open(&ctx.db_path).unwrap());
            sessions.insert(&SleepSession::new(100)).unwrap()
        };

        let db = Db::open(&ctx.db_path).unwrap();
        assert_eq!(get_db_version(&db.conn).unwrap(), SCHEMA_VERSION);
        let sessions = Sessions::new(db);
        assert_eq!(sessions.get_by_id(id).unwrap().unwrap().start_time_milli, 100);
    }

    #[test_context(SessionsTestContext)]
    #[test]
    fn test_schema_version_change_wipes_data(ctx: &mut SessionsTestContext) {
        {
            let db = Db::open(&ctx.db_path).unwrap();
            db.conn
                .execute(
                    "INSERT INTO daily_sleep_quality_table (start_time_milli, end_time_milli) VALUES (1, 1)",
                    [],
                )
                .unwrap();
            db.conn.execute_batch(&format!("PRAGMA user_version = {}", SCHEMA_VERSION + 1)).unwrap();
        }

        let sessions = Sessions::new(Db::open(&ctx.db_path).unwrap());
        assert!(sessions.get_all().unwrap().is_empty());
    }
}
