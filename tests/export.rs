#[cfg(test)]
mod tests {
    use std::fs;
    use taskdeck::libs::date::Date;
    use taskdeck::libs::export::{ExportFormat, Exporter};
    use taskdeck::libs::task_list::TaskList;
    use tempfile::TempDir;

    fn sample_list() -> TaskList {
        let mut list = TaskList::new();
        list.add("Pay bills", Date::new(4, 4, 2024));
        list.add("Mow lawn", Date::new(5, 1, 2024));
        list.complete(2);
        list
    }

    #[test]
    fn test_csv_export() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tasks.csv");

        let list = sample_list();
        let exporter = Exporter::new(ExportFormat::Csv, Some(path.clone()));
        exporter.export(list.tasks()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Position,Name,Due Date,Completed");
        assert_eq!(lines[1], "1,Pay bills,04/04/2024,false");
        assert_eq!(lines[2], "2,Mow lawn,05/01/2024,true");
    }

    #[test]
    fn test_json_export() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tasks.json");

        let list = sample_list();
        let exporter = Exporter::new(ExportFormat::Json, Some(path.clone()));
        exporter.export(list.tasks()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let records: serde_json::Value = serde_json::from_str(&contents).unwrap();

        let records = records.as_array().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["position"], 1);
        assert_eq!(records[0]["name"], "Pay bills");
        assert_eq!(records[0]["due_date"], "04/04/2024");
        assert_eq!(records[0]["completed"], false);
        assert_eq!(records[1]["position"], 2);
        assert_eq!(records[1]["completed"], true);
    }

    #[test]
    fn test_default_output_path_extension() {
        let exporter = Exporter::new(ExportFormat::Json, None);
        let name = exporter.output_path().to_string_lossy().into_owned();
        assert!(name.starts_with("taskdeck_export_"));
        assert!(name.ends_with(".json"));
    }
}
