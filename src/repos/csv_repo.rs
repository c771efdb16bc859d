use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Error};
use chrono::NaiveDate;

use crate::{models::category::category_slug, utils::consts::TRENDING_DATE_FORMAT};

pub struct CsvRepository {
    output_dir: PathBuf,
}

impl CsvRepository {
    pub fn new(output_dir: PathBuf) -> CsvRepository {
        CsvRepository { output_dir }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Writes all rows, header included, replacing a file written earlier the same day.
    pub fn write(
        &self,
        date: NaiveDate,
        country_code: &str,
        category_name: Option<&str>,
        country_data: &[String],
    ) -> Result<PathBuf, Error> {
        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!(
                "Could not create output directory {}",
                self.output_dir.display()
            )
        })?;

        let path = self
            .output_dir
            .join(file_name(date, country_code, category_name));

        let mut content = String::new();
        for row in country_data {
            content.push_str(row);
            content.push('\n');
        }

        fs::write(&path, content).with_context(|| format!("Could not write {}", path.display()))?;

        Ok(path)
    }
}

pub fn file_name(date: NaiveDate, country_code: &str, category_name: Option<&str>) -> String {
    let category_suffix = category_name
        .map(|name| format!("_{}", category_slug(name)))
        .unwrap_or_default();

    format!(
        "{}_{}{}_videos.csv",
        date.format(TRENDING_DATE_FORMAT),
        country_code,
        category_suffix
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    #[test]
    fn file_name_without_category() {
        assert_eq!(file_name(date(), "US", None), "2024-05-01_US_videos.csv");
    }

    #[test]
    fn file_name_with_category() {
        assert_eq!(
            file_name(date(), "GB", Some("News & Politics")),
            "2024-05-01_GB_News_and_Politics_videos.csv"
        );
    }

    #[test]
    fn header_only_file_is_written() {
        let temp_dir = TempDir::new().unwrap();
        let repo = CsvRepository::new(temp_dir.path().join("nested").join("output"));

        let path = repo
            .write(date(), "US", None, &["\"video_id\",\"title\"".to_string()])
            .unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "\"video_id\",\"title\"\n");
    }

    #[test]
    fn existing_file_is_overwritten() {
        let temp_dir = TempDir::new().unwrap();
        let repo = CsvRepository::new(temp_dir.path().to_path_buf());

        let rows = vec!["h".to_string(), "1".to_string(), "2".to_string()];
        repo.write(date(), "DE", Some("Music"), &rows).unwrap();
        let path = repo.write(date(), "DE", Some("Music"), &rows[..2]).unwrap();

        assert_eq!(
            path,
            temp_dir.path().join("2024-05-01_DE_Music_videos.csv")
        );
        assert_eq!(fs::read_to_string(path).unwrap(), "h\n1\n");
    }

    #[test]
    fn unwritable_output_dir_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let repo = CsvRepository::new(blocker.join("output"));
        assert!(repo.write(date(), "US", None, &[]).is_err());
    }
}
