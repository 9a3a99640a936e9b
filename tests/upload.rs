#[cfg(test)]
mod tests {
    use chrono::Utc;
    use kvs_database::manager::{self, NoticeVariant, Selection, ViewMode};
    use kvs_database::storage::{open_seeded, FileStore, MemorySlots, DEFAULT_SLOT_KEY};
    use kvs_database::upload::{self, rejection_notice, UploadForm};
    use kvs_database::{AppError, ValidationError};

    fn filled_form() -> UploadForm {
        UploadForm {
            name: "report.pdf".to_string(),
            size: "1.2 mb".to_string(),
            file_type: "pdf".to_string(),
            external_link: "https://terabox.com/s/report".to_string(),
        }
    }

    #[test]
    fn test_from_dropped_prefills_fields() {
        let form = UploadForm::from_dropped("photo.JPG", 2048);

        assert_eq!(form.name, "photo.JPG");
        assert_eq!(form.size, "2.00 KB");
        assert_eq!(form.file_type, "JPG");
        assert!(form.external_link.is_empty());
        assert_eq!(UploadForm::from_dropped("", 0).file_type, "unknown");
    }

    #[test]
    fn test_dropped_name_with_trailing_dot_is_unknown_type() {
        let mut form = UploadForm::from_dropped("notes.", 512);
        assert_eq!(form.file_type, "unknown");

        form.external_link = "https://terabox.com/s/notes".to_string();
        let record = form.submit(Utc::now()).expect("pre-filled form should submit");
        assert_eq!(record.file_type.as_deref(), Some("unknown"));
    }

    #[test]
    fn test_submit_requires_every_field() {
        let mut form = filled_form();
        form.external_link = "   ".to_string();

        let err = form.submit(Utc::now()).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("link"));

        let notice = rejection_notice(&err);
        assert_eq!(notice.title, "Missing Information");
        assert_eq!(notice.variant, NoticeVariant::Destructive);
    }

    #[test]
    fn test_submit_rejects_bad_size() {
        let mut form = filled_form();
        form.size = "big".to_string();

        assert!(matches!(form.submit(Utc::now()), Err(ValidationError::InvalidSize(_))));
    }

    #[test]
    fn test_submit_builds_record() {
        let now = Utc::now();
        let record = filled_form().submit(now).expect("valid form");

        assert_eq!(record.name, "report.pdf");
        assert_eq!(record.size, "1.2 MB");
        assert_eq!(record.file_type.as_deref(), Some("pdf"));
        assert_eq!(record.last_modified, Some(now));
        assert!(!record.id.is_empty());
        assert_ne!(record.id, filled_form().submit(now).unwrap().id);
    }

    #[tokio::test]
    async fn test_upload_adds_and_clears_form() {
        let (mut store, _) = FileStore::open(MemorySlots::new(), DEFAULT_SLOT_KEY).await.unwrap();
        let mut form = filled_form();

        let (record, notice) = upload::upload(&mut store, &mut form).await.expect("upload failed");

        assert_eq!(notice.title, "File Uploaded");
        assert_eq!(store.load(), &[record]);
        assert_eq!(form, UploadForm::default());
    }

    #[tokio::test]
    async fn test_invalid_upload_changes_nothing() {
        let (mut store, _, _) = open_seeded(MemorySlots::new(), DEFAULT_SLOT_KEY).await.unwrap();
        let before = store.load().to_vec();
        let mut form = filled_form();
        form.name.clear();

        let result = upload::upload(&mut store, &mut form).await;

        assert!(matches!(result, Err(AppError::Validation(ValidationError::MissingField("name")))));
        assert_eq!(store.load(), before.as_slice());
        assert_eq!(form.file_type, "pdf");
    }

    #[tokio::test]
    async fn test_search_selection_and_delete() {
        let (mut store, _, _) = open_seeded(MemorySlots::new(), DEFAULT_SLOT_KEY).await.unwrap();

        let hits = manager::search(store.load(), "DATA");
        let names: Vec<_> = hits.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Database Schema.sql", "User Data.json"]);
        assert_eq!(manager::search(store.load(), "").len(), 3);

        let mut selection = Selection::default();
        let first = store.load()[0].clone();
        selection.toggle(&first);
        assert_eq!(selection.selected(), Some("1"));
        selection.toggle(&first);
        assert_eq!(selection.selected(), None);
        selection.toggle(&first);

        let notice = manager::delete(&mut store, &mut selection, "1").await.unwrap();
        assert_eq!(notice.title, "File Deleted");
        assert_eq!(selection.selected(), None);
        assert!(store.get("1").is_none());
    }

    #[test]
    fn test_download_notice_names_file() {
        let record = filled_form().submit(Utc::now()).unwrap();

        let notice = manager::download(&record);

        assert_eq!(notice.title, "Download Initiated");
        assert!(notice.description.contains("report.pdf"));
    }

    #[test]
    fn test_view_mode_parsing() {
        assert_eq!("LIST".parse::<ViewMode>(), Ok(ViewMode::List));
        assert_eq!(ViewMode::default(), ViewMode::Grid);
        assert!("table".parse::<ViewMode>().is_err());
    }
}
