#[cfg(test)]
mod tests {
    use chrono::Utc;
    use kvs_database::dashboard::{color_for_type, DashboardStats};
    use kvs_database::storage::sample_records;
    use kvs_database::{
        kilobytes_lenient, FileCategory, FileRecord, FileSize, SizeUnit, ValidationError,
    };

    fn named(name: &str, size: &str) -> FileRecord {
        FileRecord {
            id: name.to_string(),
            name: name.to_string(),
            file_type: None,
            size: size.to_string(),
            last_modified: Some(Utc::now()),
            external_link: String::new(),
        }
    }

    #[test]
    fn test_sample_record_stats() {
        let stats = DashboardStats::compute(&sample_records(Utc::now()));

        assert_eq!(stats.total_files, 3);
        // 2.4 MB + 156 KB + 89 KB
        assert!((stats.total_size_kb - 2702.6).abs() < 1e-9);
        assert_eq!(stats.total_size_label(), "2.64 MB");
        assert_eq!(
            stats.file_types,
            vec![("pdf".to_string(), 1), ("sql".to_string(), 1), ("json".to_string(), 1)]
        );
    }

    #[test]
    fn test_histogram_keys_by_lowercase_extension() {
        let files = vec![
            named("a.PDF", "1 KB"),
            named("b.pdf", "1 KB"),
            named("archive.tar.gz", "1 KB"),
            named("README", "1 KB"),
            named("", "1 KB"),
        ];

        let stats = DashboardStats::compute(&files);

        assert_eq!(
            stats.file_types,
            vec![
                ("pdf".to_string(), 2),
                ("gz".to_string(), 1),
                ("readme".to_string(), 1),
                ("unknown".to_string(), 1),
            ]
        );
        assert_eq!(stats.distinct_types(), 4);
    }

    #[test]
    fn test_empty_collection() {
        let stats = DashboardStats::compute(&[]);

        assert_eq!(stats.total_files, 0);
        assert_eq!(stats.total_size_label(), "0.00 MB");
        assert!(stats.chart_slices().is_empty());
    }

    #[test]
    fn test_chart_slices_colors_and_shares() {
        let files = vec![
            named("a.pdf", "1 KB"),
            named("b.pdf", "1 KB"),
            named("c.txt", "1 KB"),
            named("d.csv", "1 KB"),
        ];

        let slices = DashboardStats::compute(&files).chart_slices();

        assert_eq!(slices.len(), 3);
        assert_eq!(slices[0].color, "rgba(239, 68, 68, 0.8)");
        assert!((slices[0].share - 0.5).abs() < 1e-9);
        // Unmapped types take the palette entry for their position
        assert_eq!(slices[1].color, "rgba(16, 185, 129, 0.8)");
        assert_eq!(slices[2].color, "rgba(249, 115, 22, 0.8)");
        assert_eq!(color_for_type("other", 8), "rgba(59, 130, 246, 0.8)");
        assert_eq!(color_for_type("SQL", 0), "rgba(20, 184, 166, 0.8)");
    }

    #[test]
    fn test_lenient_size_reading() {
        assert!((kilobytes_lenient("2.4 MB") - 2457.6).abs() < 1e-9);
        assert_eq!(kilobytes_lenient("156 KB"), 156.0);
        assert_eq!(kilobytes_lenient("12"), 12.0);
        assert_eq!(kilobytes_lenient("12abc GB"), 12.0);
        assert_eq!(kilobytes_lenient("3 mb"), 3.0);
        assert_eq!(kilobytes_lenient("huge"), 0.0);
        assert_eq!(kilobytes_lenient("1e3 KB"), 1000.0);
        assert_eq!(kilobytes_lenient("2.5E-1 MB"), 256.0);
        assert_eq!(kilobytes_lenient("2e KB"), 2.0);
        assert_eq!(kilobytes_lenient(""), 0.0);
    }

    #[test]
    fn test_strict_size_grammar() {
        let size = FileSize::parse("2.4 mb").expect("valid size");
        assert_eq!(size.unit, SizeUnit::Mb);
        assert!((size.kilobytes() - 2457.6).abs() < 1e-9);
        assert_eq!(FileSize::parse("10KB").unwrap().to_string(), "10 KB");
        assert_eq!(FileSize::normalize(" 1.50 kb ").unwrap(), "1.50 KB");

        for bad in ["10", "ten KB", "10 GB", "-1 KB", "1.2.3 KB", ""] {
            assert_eq!(
                FileSize::parse(bad),
                Err(ValidationError::InvalidSize(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_dropped_file_label() {
        assert_eq!(FileSize::label_for_bytes(1536), "1.50 KB");
        assert_eq!(FileSize::label_for_bytes(0), "0.00 KB");
    }

    #[test]
    fn test_categories() {
        assert_eq!(FileCategory::from_type(Some("PDF")), FileCategory::Document);
        assert_eq!(FileCategory::from_type(Some("png")), FileCategory::Image);
        assert_eq!(FileCategory::from_type(Some("7z")), FileCategory::Archive);
        assert_eq!(FileCategory::from_type(Some("sql")), FileCategory::Code);
        assert_eq!(FileCategory::from_type(Some("mp4")), FileCategory::Other);
        assert_eq!(FileCategory::from_type(None), FileCategory::Other);
    }
}
