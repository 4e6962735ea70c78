use csv::{ReaderBuilder, Trim};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::ingest::{IngestError, IngestResult};
use crate::record::{CumulativeLaunches, RawLaunch};

/// Header whitespace is trimmed (the dataset names its cost column
/// ` Rocket`); cell contents are left as-is for the derivation stages.
fn read_rows<T, R>(reader: R) -> IngestResult<Vec<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut rdr = ReaderBuilder::new().trim(Trim::Headers).from_reader(reader);
    let rows = rdr.deserialize().collect::<Result<Vec<T>, csv::Error>>()?;
    Ok(rows)
}

fn open(path: &Path) -> IngestResult<File> {
    File::open(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })
}

pub fn read_launches<R: Read>(reader: R) -> IngestResult<Vec<RawLaunch>> {
    read_rows(reader)
}

pub fn load_launches<P: AsRef<Path>>(path: P) -> IngestResult<Vec<RawLaunch>> {
    let path = path.as_ref();
    let rows = read_launches(open(path)?)?;
    log::info!("loaded {} launch rows from {}", rows.len(), path.display());
    Ok(rows)
}

pub fn read_cumulative<R: Read>(reader: R) -> IngestResult<Vec<CumulativeLaunches>> {
    read_rows(reader)
}

pub fn load_cumulative<P: AsRef<Path>>(path: P) -> IngestResult<Vec<CumulativeLaunches>> {
    let path = path.as_ref();
    let rows = read_cumulative(open(path)?)?;
    log::info!("loaded {} cumulative rows from {}", rows.len(), path.display());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const LAUNCHES: &str = "\
Unnamed: 0,Unnamed: 0.1,Company Name,Location,Datum,Detail,Status Rocket, Rocket,Status Mission
0,0,SpaceX,\"LC-39A, Kennedy Space Center, Florida, USA\",\"Fri Aug 07, 2020 05:12 UTC\",Falcon 9 Block 5 | Starlink V1 L9 & BlackSky,StatusActive,\"50.0 \",Success
1,1,RVSN USSR,\"Site 1/5, Baikonur Cosmodrome, Kazakhstan\",\"Fri Oct 04, 1957 19:28 UTC\",Sputnik 8K71PS | Sputnik-1,StatusRetired,,Success
";

    #[test]
    fn launches_are_addressed_by_column_name() {
        let rows = read_launches(LAUNCHES.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].company_name, "SpaceX");
        assert_eq!(rows[0].rocket.as_deref(), Some("50.0 "));
        assert_eq!(rows[0].datum, "Fri Aug 07, 2020 05:12 UTC");
        assert_eq!(rows[1].rocket, None);
        assert_eq!(rows[1].status_rocket, "StatusRetired");
    }

    #[test]
    fn missing_column_is_a_decode_error() {
        let broken = "Company Name,Location\nSpaceX,\"Florida, USA\"\n";
        assert!(matches!(
            read_launches(broken.as_bytes()),
            Err(IngestError::Csv(_))
        ));
    }

    #[test]
    fn cumulative_table_loads_from_file() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"Country,Year,Cummulative_Launches\nUSA,1958,23\nKazakhstan,1958,5\n")
            .unwrap();
        let path = temp.into_temp_path();
        let rows = load_cumulative(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].country, "USA");
        assert_eq!(rows[0].cumulative_launches, 23);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_launches("/definitely/not/here.csv").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.csv"));
    }
}
