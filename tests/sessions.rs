#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use timetrack::db::activities::Activities;
    use timetrack::db::sessions::Sessions;
    use timetrack::libs::config::DbConfig;
    use timetrack::libs::tracker;

    struct SessionTestContext {
        _temp_dir: TempDir,
        config: DbConfig,
    }

    impl TestContext for SessionTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let config = DbConfig::in_dir(temp_dir.path());
            tracker::create_tables(&config).unwrap();
            tracker::add_activity(&config, "reading").unwrap();
            SessionTestContext {
                _temp_dir: temp_dir,
                config,
            }
        }
    }

    fn at(hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap().and_hms_opt(hour, min, 0).unwrap()
    }

    fn sessions(config: &DbConfig) -> Vec<timetrack::db::sessions::Session> {
        Sessions::new(config).unwrap().list().unwrap()
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_start_unknown_activity(ctx: &mut SessionTestContext) {
        let started = tracker::start_session(&ctx.config, "ghost").unwrap();

        assert!(started.is_none());
        assert!(sessions(&ctx.config).is_empty());
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_stop_unknown_activity(ctx: &mut SessionTestContext) {
        tracker::start_session_at(&ctx.config, "reading", at(9, 0)).unwrap();

        assert!(tracker::stop_session(&ctx.config, "ghost").unwrap().is_none());
        assert!(sessions(&ctx.config)[0].end.is_none());
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_start_opens_one_session(ctx: &mut SessionTestContext) {
        let started = tracker::start_session(&ctx.config, "reading").unwrap();

        let rows = sessions(&ctx.config);
        assert_eq!(rows.len(), 1);
        assert_eq!(Some(rows[0].start), started);
        assert!(rows[0].end.is_none());

        let activity = Activities::new(&ctx.config).unwrap().get_by_name("reading").unwrap().unwrap();
        assert_eq!(rows[0].activity_id, Some(activity.id));
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_stop_closes_open_session(ctx: &mut SessionTestContext) {
        let started = tracker::start_session(&ctx.config, "reading").unwrap().unwrap();
        let stopped = tracker::stop_session(&ctx.config, "reading").unwrap().unwrap();

        assert!(stopped >= started);
        let rows = sessions(&ctx.config);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].start, started);
        assert_eq!(rows[0].end, Some(stopped));
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_stop_without_open_session(ctx: &mut SessionTestContext) {
        tracker::start_session_at(&ctx.config, "reading", at(9, 0)).unwrap();
        tracker::stop_session_at(&ctx.config, "reading", at(10, 0)).unwrap();
        let before = sessions(&ctx.config);

        // Nothing is open, yet a timestamp still comes back.
        let stopped = tracker::stop_session_at(&ctx.config, "reading", at(11, 0)).unwrap();

        assert_eq!(stopped, Some(at(11, 0)));
        assert_eq!(sessions(&ctx.config), before);
        assert_eq!(before[0].end, Some(at(10, 0)));
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_stop_on_idle_activity_touches_no_rows(ctx: &mut SessionTestContext) {
        let mut repo = Sessions::new(&ctx.config).unwrap();
        let id = repo.activity_id("reading").unwrap().unwrap();

        assert_eq!(repo.stop(id, at(9, 0)).unwrap(), 0);
        assert!(repo.list().unwrap().is_empty());
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_double_start_leaves_two_open_sessions(ctx: &mut SessionTestContext) {
        tracker::start_session_at(&ctx.config, "reading", at(9, 0)).unwrap();
        tracker::start_session_at(&ctx.config, "reading", at(9, 30)).unwrap();

        let rows = sessions(&ctx.config);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|s| s.end.is_none()));

        // Stop closes every open session of the activity.
        let mut repo = Sessions::new(&ctx.config).unwrap();
        let id = repo.activity_id("reading").unwrap().unwrap();
        assert_eq!(repo.stop(id, at(10, 0)).unwrap(), 2);
        assert!(repo.list().unwrap().iter().all(|s| s.end == Some(at(10, 0))));
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_stop_only_affects_named_activity(ctx: &mut SessionTestContext) {
        tracker::add_activity(&ctx.config, "writing").unwrap();
        tracker::start_session_at(&ctx.config, "reading", at(9, 0)).unwrap();
        tracker::start_session_at(&ctx.config, "writing", at(9, 0)).unwrap();

        tracker::stop_session_at(&ctx.config, "reading", at(10, 0)).unwrap();

        let history = tracker::view_history(&ctx.config).unwrap();
        let writing = history.iter().find(|r| r.activity == "writing").unwrap();
        let reading = history.iter().find(|r| r.activity == "reading").unwrap();
        assert!(writing.end.is_none());
        assert_eq!(reading.end, Some(at(10, 0)));
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_delete_leaves_dangling_sessions(ctx: &mut SessionTestContext) {
        let activity_id = Sessions::new(&ctx.config).unwrap().activity_id("reading").unwrap().unwrap();
        tracker::start_session_at(&ctx.config, "reading", at(9, 0)).unwrap();
        tracker::stop_session_at(&ctx.config, "reading", at(10, 0)).unwrap();

        tracker::delete_activity(&ctx.config, "reading").unwrap();

        // The session row survives and still points at the removed id.
        let rows = sessions(&ctx.config);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].activity_id, Some(activity_id));
        assert!(Activities::new(&ctx.config).unwrap().get_by_name("reading").unwrap().is_none());

        // The join no longer sees it.
        assert!(tracker::view_history(&ctx.config).unwrap().is_empty());
        assert!(tracker::generate_report(&ctx.config).unwrap().is_empty());
    }
}
