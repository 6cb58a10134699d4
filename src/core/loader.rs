use std::fs::File;
use std::io;
use std::path::Path;

use log::{debug, info};

use crate::types::{LaunchRecord, LaunchTable, LoadError, LoadResult};

/// Columns that must be present in the header row
pub const REQUIRED_COLUMNS: [&str; 4] = [
    "Launch Site",
    "Payload Mass (kg)",
    "class",
    "Booster Version Category",
];

/// Load the launch table from a CSV file. Either the whole table loads or
/// nothing does.
pub fn load(path: &Path) -> LoadResult<LaunchTable> {
    let file = File::open(path).map_err(|source| LoadError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    let table = from_reader(file).map_err(|err| match err {
        // Read failures after open are still access problems for this path
        LoadError::FileAccess { source, .. } => LoadError::FileAccess {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;
    let bounds = table.bounds();
    info!(
        "Loaded {} launch records from {} (payload {}..={} kg)",
        table.len(),
        path.display(),
        bounds.min,
        bounds.max
    );
    Ok(table)
}

/// Decode a launch table from any CSV source.
pub fn from_reader<R: io::Read>(reader: R) -> LoadResult<LaunchTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers().map_err(csv_to_load_error)?.clone();
    let missing = missing_columns(&headers);
    if !missing.is_empty() {
        return Err(LoadError::Schema { missing });
    }
    debug!("CSV header: {:?}", headers);

    let mut records = Vec::new();
    let mut row = csv::StringRecord::new();
    while csv_reader.read_record(&mut row).map_err(csv_to_load_error)? {
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        let record: LaunchRecord = row
            .deserialize(Some(&headers))
            .map_err(|err| LoadError::Record {
                line,
                reason: err.to_string(),
            })?;
        if record.payload_mass_kg.is_nan() || record.payload_mass_kg < 0.0 {
            return Err(LoadError::Record {
                line,
                reason: format!(
                    "payload mass must be non-negative, got {}",
                    record.payload_mass_kg
                ),
            });
        }
        records.push(record);
    }

    LaunchTable::from_records(records).ok_or(LoadError::Empty)
}

/// Required columns absent from `headers`, in declaration order.
pub fn missing_columns(headers: &csv::StringRecord) -> Vec<String> {
    REQUIRED_COLUMNS
        .iter()
        .filter(|column| !headers.iter().any(|h| h == **column))
        .map(|column| column.to_string())
        .collect()
}

/// True when the file at `path` is a CSV whose header carries every
/// required column. Rows are not read.
pub fn has_launch_header(path: &Path) -> bool {
    let Ok(mut reader) = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
    else {
        return false;
    };
    match reader.headers() {
        Ok(headers) => missing_columns(headers).is_empty(),
        Err(_) => false,
    }
}

fn csv_to_load_error(err: csv::Error) -> LoadError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    match err.into_kind() {
        csv::ErrorKind::Io(source) => LoadError::FileAccess {
            path: Default::default(),
            source,
        },
        csv::ErrorKind::Deserialize { err, .. } => LoadError::Record {
            line,
            reason: err.to_string(),
        },
        other => LoadError::Record {
            line,
            reason: format!("{other:?}"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OutcomeClass;

    const HEADER: &str =
        "Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category\n";

    #[test]
    fn extra_columns_are_ignored() {
        let csv = format!(
            "{HEADER}1,CCAFS LC-40,0,0,F9 v1.0  B0003,v1.0\n2,CCAFS LC-40,1,525,F9 v1.0  B0005,v1.0\n"
        );
        let table = from_reader(csv.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.records()[1],
            LaunchRecord::new("CCAFS LC-40", 525.0, OutcomeClass::Success, "v1.0")
        );
    }

    #[test]
    fn missing_columns_are_all_reported() {
        let csv = "Launch Site,Payload Mass (kg)\nKSC LC-39A,2490\n";
        match from_reader(csv.as_bytes()) {
            Err(LoadError::Schema { missing }) => {
                assert_eq!(missing, vec!["class", "Booster Version Category"])
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn bad_class_is_a_record_error() {
        let csv = format!("{HEADER}1,KSC LC-39A,3,2490,F9 FT B1031.1,FT\n");
        assert!(matches!(
            from_reader(csv.as_bytes()),
            Err(LoadError::Record { line: 2, .. })
        ));
    }

    #[test]
    fn negative_payload_is_rejected() {
        let csv = format!("{HEADER}1,KSC LC-39A,1,-5,F9 FT B1031.1,FT\n");
        assert!(matches!(
            from_reader(csv.as_bytes()),
            Err(LoadError::Record { line: 2, .. })
        ));
    }

    #[test]
    fn header_only_is_empty() {
        assert!(matches!(
            from_reader(HEADER.as_bytes()),
            Err(LoadError::Empty)
        ));
    }

    #[test]
    fn missing_file_is_access_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.csv");
        match load(&path) {
            Err(LoadError::FileAccess { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected access error, got {other:?}"),
        }
    }

    #[test]
    fn header_check_reads_only_the_first_row() {
        let dir = tempfile::tempdir().unwrap();
        let launches = dir.path().join("launches.csv");
        std::fs::write(&launches, format!("{HEADER}1,KSC LC-39A,7,oops,x,FT\n")).unwrap();
        let other = dir.path().join("weather.csv");
        std::fs::write(&other, "date,wind\n2020-01-01,12\n").unwrap();

        assert!(has_launch_header(&launches));
        assert!(!has_launch_header(&other));
        assert!(!has_launch_header(&dir.path().join("absent.csv")));
    }
}
