//! CSV reference data loader.
//!
//! Reads `Members.csv`, `Surveys.csv`, `Statuses.csv` and
//! `Participation.csv` from one directory and assembles the snapshot.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::reference::{Member, Participation, ReferenceData, Status, Survey};
use crate::ports::{LoadError, ReferenceDataLoader};

use super::csv_records::{MemberRecord, ParticipationRecord, StatusRecord, SurveyRecord};

pub const MEMBERS_FILE: &str = "Members.csv";
pub const SURVEYS_FILE: &str = "Surveys.csv";
pub const STATUSES_FILE: &str = "Statuses.csv";
pub const PARTICIPATION_FILE: &str = "Participation.csv";

/// Loads the reference datasets from CSV files in a base directory
#[derive(Debug, Clone)]
pub struct CsvReferenceLoader {
    base_path: PathBuf,
}

impl CsvReferenceLoader {
    /// Create a loader reading from `base_path`
    ///
    /// # Example
    /// ```ignore
    /// let loader = CsvReferenceLoader::new("./data");
    /// let snapshot = loader.load().await?;
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Read one file and deserialize every row into `R`
    async fn read_records<R>(&self, file: &str) -> Result<Vec<R>, LoadError>
    where
        R: DeserializeOwned,
    {
        let path = self.base_path.join(file);
        let content = fs::read_to_string(&path).await.map_err(|e| LoadError::Io {
            file: path.display().to_string(),
            message: e.to_string(),
        })?;

        let records = parse_records(&content).map_err(|e| LoadError::Parse {
            file: path.display().to_string(),
            message: e.to_string(),
        })?;

        tracing::debug!(file = %path.display(), rows = records.len(), "Read reference file");
        Ok(records)
    }
}

fn parse_records<R: DeserializeOwned>(content: &str) -> Result<Vec<R>, csv::Error> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes())
        .deserialize()
        .collect()
}

#[async_trait]
impl ReferenceDataLoader for CsvReferenceLoader {
    async fn load(&self) -> Result<ReferenceData, LoadError> {
        let members: Vec<MemberRecord> = self.read_records(MEMBERS_FILE).await?;
        let surveys: Vec<SurveyRecord> = self.read_records(SURVEYS_FILE).await?;
        let statuses: Vec<StatusRecord> = self.read_records(STATUSES_FILE).await?;
        let participations: Vec<ParticipationRecord> =
            self.read_records(PARTICIPATION_FILE).await?;

        let data = ReferenceData::new(
            members.into_iter().map(Member::from).collect(),
            surveys.into_iter().map(Survey::from).collect(),
            statuses.into_iter().map(Status::from).collect(),
            participations.into_iter().map(Participation::from).collect(),
        )?;

        tracing::info!(
            members = data.member_count(),
            surveys = data.survey_count(),
            statuses = data.status_count(),
            participations = data.participation_count(),
            "Reference data loaded from {}",
            self.base_path.display()
        );

        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{MemberId, StatusId, SurveyId};
    use tempfile::TempDir;

    fn write_dataset(dir: &Path) {
        std::fs::write(
            dir.join(MEMBERS_FILE),
            "Member Id,Full name,E-mail address,Is Active\n\
             1,John Doe,john.doe@example.com,1\n\
             2,Jane Smith,jane.smith@example.com,0\n",
        )
        .unwrap();
        std::fs::write(
            dir.join(SURVEYS_FILE),
            "Survey Id,Name,Expected completes,Completion points,Filtered points\n\
             1,Survey 01,30,5,2\n",
        )
        .unwrap();
        std::fs::write(
            dir.join(STATUSES_FILE),
            "Status Id,Name\n1,Not asked\n2,Rejected\n3,Filtered\n4,Completed\n",
        )
        .unwrap();
        std::fs::write(
            dir.join(PARTICIPATION_FILE),
            "Member Id,Survey Id,Status,Length\n1,1,4,12\n2,1,3,\n",
        )
        .unwrap();
    }

    #[tokio::test]
    async fn loads_all_datasets() {
        let temp_dir = TempDir::new().unwrap();
        write_dataset(temp_dir.path());

        let data = CsvReferenceLoader::new(temp_dir.path()).load().await.unwrap();

        assert_eq!(data.member_count(), 2);
        assert_eq!(data.survey_count(), 1);
        assert_eq!(data.status_count(), 4);
        assert_eq!(data.participation_count(), 2);
        assert!(!data.member(MemberId::new(2)).unwrap().active);
        assert_eq!(data.status_id("Completed"), Some(StatusId::new(4)));
        assert_eq!(data.participations()[1].length, None);
        assert_eq!(data.participations()[0].survey_id, SurveyId::new(1));
    }

    #[tokio::test]
    async fn missing_file_names_the_file() {
        let temp_dir = TempDir::new().unwrap();
        write_dataset(temp_dir.path());
        std::fs::remove_file(temp_dir.path().join(STATUSES_FILE)).unwrap();

        let err = CsvReferenceLoader::new(temp_dir.path()).load().await.unwrap_err();

        match err {
            LoadError::Io { file, .. } => assert!(file.ends_with(STATUSES_FILE)),
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn malformed_row_is_a_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        write_dataset(temp_dir.path());
        std::fs::write(
            temp_dir.path().join(PARTICIPATION_FILE),
            "Member Id,Survey Id,Status,Length\n1,one,4,12\n",
        )
        .unwrap();

        let err = CsvReferenceLoader::new(temp_dir.path()).load().await.unwrap_err();

        match err {
            LoadError::Parse { file, .. } => assert!(file.ends_with(PARTICIPATION_FILE)),
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn duplicate_ids_fail_the_load() {
        let temp_dir = TempDir::new().unwrap();
        write_dataset(temp_dir.path());
        std::fs::write(
            temp_dir.path().join(SURVEYS_FILE),
            "Survey Id,Name,Expected completes,Completion points,Filtered points\n\
             1,Survey 01,30,5,2\n\
             1,Survey 01 again,30,5,2\n",
        )
        .unwrap();

        let err = CsvReferenceLoader::new(temp_dir.path()).load().await.unwrap_err();

        assert!(matches!(err, LoadError::Snapshot(_)));
    }
}
