use super::*;
use std::collections::HashSet;
use std::io::Cursor;

fn kernel(i: usize) -> KernelIndex {
    KernelIndex::new(i).unwrap()
}

/// Tuples in a hashable form, for order-independent comparison.
fn tuples(store: &ProfileStore) -> HashSet<(String, ContentType, u64, KernelIndex)> {
    store
        .list()
        .map(|p| (p.name().to_string(), p.content_type(), p.alpha().to_bits(), p.kernel()))
        .collect()
}

fn sample_store() -> ProfileStore {
    let mut store = ProfileStore::default();
    store.add_profile("archive", ContentType::Text, 1.0).unwrap();
    store.add_profile("fast", ContentType::Text, 0.0).unwrap();
    store.add_profile("web", ContentType::Html, 0.8).unwrap();
    store.add_profile("sheets", ContentType::Excl, 0.3).unwrap();
    store
}

mod store {
    use super::*;

    #[test]
    fn test_add_profile_freezes_the_selected_kernel() {
        let mut store = ProfileStore::default();
        let profile = store.add_profile("archive", ContentType::Text, 1.0).unwrap();
        assert_eq!(profile.kernel(), kernel(7));
        assert_eq!(store.get_kernel("archive").unwrap(), kernel(7));
    }

    #[test]
    fn test_name_collision_overwrites() {
        let mut store = ProfileStore::default();
        store.add_profile("p", ContentType::Text, 1.0).unwrap();
        store.add_profile("p", ContentType::Text, 0.0).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get_kernel("p").unwrap(), kernel(10));
        assert_eq!(store.get("p").unwrap().alpha(), 0.0);
    }

    #[test]
    fn test_missing_profile_is_an_error() {
        let store = ProfileStore::default();
        assert!(matches!(
            store.get_kernel("nope"),
            Err(EasyCompressError::ProfileNotFound(ref n)) if n == "nope"
        ));
    }

    #[test]
    fn test_selection_errors_leave_the_store_untouched() {
        let mut store = ProfileStore::default();
        assert!(matches!(
            store.add_profile("bad", ContentType::Text, 1.5),
            Err(EasyCompressError::AlphaOutOfRange(_))
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_unpersistable_names_are_rejected() {
        let mut store = ProfileStore::default();
        for name in ["", "a,b", "two\nlines", " web ", "web\t", " "] {
            assert!(matches!(
                store.add_profile(name, ContentType::Text, 0.5),
                Err(EasyCompressError::InvalidProfileName(_))
            ));
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_list_is_in_name_order() {
        let store = sample_store();
        let names: Vec<&str> = store.list().map(CompressionProfile::name).collect();
        assert_eq!(names, vec!["archive", "fast", "sheets", "web"]);
    }

    #[test]
    fn test_remove() {
        let mut store = sample_store();
        assert!(store.remove("fast").is_some());
        assert!(store.remove("fast").is_none());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_display_lists_every_profile() {
        let mut store = ProfileStore::default();
        store.add_profile("MyProfile", ContentType::Text, 1.0).unwrap();
        assert_eq!(
            store.to_string(),
            "Profile Name: MyProfile, File Type: text, Alpha: 1, Kernel: 7\n"
        );
    }
}

mod persistence {
    use super::*;

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.csv");
        let store = sample_store();
        store.save(&path).unwrap();

        let (reloaded, report) = ProfileStore::from_file(&path, MetricsCatalog::builtin()).unwrap();
        assert!(report.is_clean());
        assert_eq!(report.applied, 4);
        assert_eq!(tuples(&reloaded), tuples(&store));
    }

    #[test]
    fn test_names_that_survive_the_field_trim_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.csv");

        let mut store = ProfileStore::default();
        assert!(matches!(
            store.add_profile(" web ", ContentType::Html, 0.8),
            Err(EasyCompressError::InvalidProfileName(_))
        ));
        store.add_profile("my web", ContentType::Html, 0.8).unwrap();
        store.save(&path).unwrap();

        let (reloaded, report) = ProfileStore::from_file(&path, MetricsCatalog::builtin()).unwrap();
        assert!(report.is_clean());
        assert_eq!(tuples(&reloaded), tuples(&store));
    }

    #[test]
    fn test_saved_format_is_plain_records() {
        let mut store = ProfileStore::default();
        store.add_profile("archive", ContentType::Text, 1.0).unwrap();
        store.add_profile("balanced", ContentType::Csrc, 0.25).unwrap();
        let mut buf = Vec::new();
        store.write_to(&mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "archive,text,1,7");
        assert!(lines[1].starts_with("balanced,Csrc,0.25,"));
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.csv");
        std::fs::write(&path, "stale,text,0.5,1\nstale2,text,0.5,1\n").unwrap();

        let mut store = ProfileStore::default();
        store.add_profile("fresh", ContentType::Man, 0.5).unwrap();
        store.save(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 1);
        assert!(contents.starts_with("fresh,man,0.5,"));
    }

    #[test]
    fn test_one_malformed_row_is_skipped_and_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.csv");
        std::fs::write(&path, "good1,text,1,7\nbroken,text,0.5\ngood2,html,0.8,3\n").unwrap();

        let mut store = ProfileStore::default();
        let report = store.load(&path).unwrap();

        assert_eq!(report.applied, 2);
        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(report.diagnostics[0].line_number, 2);
        assert_eq!(report.diagnostics[0].line, "broken,text,0.5");
        assert_eq!(store.len(), 2);
        assert!(store.get("broken").is_none());
        assert!(matches!(
            report.diagnostics[0].to_error(),
            EasyCompressError::MalformedProfileRow { line: 2, .. }
        ));
    }

    #[test]
    fn test_non_utf8_row_is_skipped_and_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.csv");
        std::fs::write(&path, b"good1,text,1,7\nbad\xff,text,0.5,3\ngood2,html,0.8,3\n").unwrap();

        let mut store = ProfileStore::default();
        let report = store.load(&path).unwrap();

        assert_eq!(report.applied, 2);
        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(report.diagnostics[0].line_number, 2);
        assert!(report.diagnostics[0].reason.contains("UTF-8"));
        assert_eq!(store.get_kernel("good1").unwrap(), kernel(7));
        assert_eq!(store.get_kernel("good2").unwrap(), kernel(3));
    }

    #[test]
    fn test_read_from_checks_encoding_per_row() {
        let mut store = ProfileStore::default();
        let report = store
            .read_from(Cursor::new(&b"\xfe\xff\nok,fax,1,9\r\n"[..]))
            .unwrap();
        assert_eq!(report.applied, 1);
        assert_eq!(report.diagnostics[0].line_number, 1);
        assert_eq!(store.get_kernel("ok").unwrap(), kernel(9));
    }

    #[test]
    fn test_loaded_kernel_is_taken_verbatim() {
        // alpha = 1 on text would select kernel 7; the file says 2.
        let mut store = ProfileStore::default();
        let report = store
            .read_from(Cursor::new("legacy,text,1,2\n"))
            .unwrap();
        assert!(report.is_clean());
        assert_eq!(store.get_kernel("legacy").unwrap(), kernel(2));
    }

    #[test]
    fn test_unparsable_fields_are_row_errors() {
        let input = "\
a,text,abc,1
b,text,0.5,x
c,text,0.5,12
d,text,1.5,1
e,binary,0.5,1
,text,0.5,1
f,text,0.5,1,extra
ok,poem,0.5,4
";
        let mut store = ProfileStore::default();
        let report = store.read_from(Cursor::new(input)).unwrap();

        assert_eq!(report.applied, 1);
        let lines: Vec<usize> = report.diagnostics.iter().map(|d| d.line_number).collect();
        assert_eq!(lines, vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(store.get_kernel("ok").unwrap(), kernel(4));
    }

    #[test]
    fn test_blank_lines_and_whitespace_are_tolerated() {
        let input = "\r\n  spaced , text , 0.5 , 6 \r\n\n";
        let mut store = ProfileStore::default();
        let report = store.read_from(Cursor::new(input)).unwrap();
        assert!(report.is_clean());
        assert_eq!(report.applied, 1);
        let profile = store.get("spaced").unwrap();
        assert_eq!(profile.content_type(), ContentType::Text);
        assert_eq!(profile.alpha(), 0.5);
        assert_eq!(profile.kernel(), kernel(6));
    }

    #[test]
    fn test_load_overwrites_by_name_and_keeps_others() {
        let mut store = sample_store();
        let report = store.read_from(Cursor::new("fast,text,0.1,3\n")).unwrap();
        assert_eq!(report.applied, 1);
        assert_eq!(store.len(), 4);
        assert_eq!(store.get_kernel("fast").unwrap(), kernel(3));
        assert_eq!(store.get_kernel("archive").unwrap(), kernel(7));
    }

    #[test]
    fn test_missing_source_is_fatal_and_store_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = sample_store();
        let before = tuples(&store);
        let result = store.load(dir.path().join("missing.csv"));
        assert!(matches!(
            result,
            Err(EasyCompressError::PersistenceReadError { .. })
        ));
        assert_eq!(tuples(&store), before);
    }

    #[test]
    fn test_unwritable_destination_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let store = sample_store();
        let result = store.save(dir.path().join("no_such_dir").join("profiles.csv"));
        assert!(matches!(
            result,
            Err(EasyCompressError::PersistenceWriteError { .. })
        ));
    }
}
