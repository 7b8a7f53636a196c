use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, FixtureError, IoError};

/// One day directory of fixtures, two levels below the data root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayDir {
    pub year: String,
    pub day: String,
    pub path: PathBuf,
}

impl DayDir {
    /// Target solution file for this day: `<source_dir>/yr<year>/day<N>.rs`.
    ///
    /// The day directory name is parsed as an integer and re-stringified, so
    /// `07` targets `day7.rs`.
    pub fn solution_file(&self, source_dir: &Path) -> Result<PathBuf, FixtureError> {
        let day: u32 = self
            .day
            .parse()
            .map_err(|_| FixtureError::invalid_day_directory(&self.path))?;
        Ok(source_dir
            .join(format!("yr{}", self.year))
            .join(format!("day{day}.rs")))
    }
}

/// Collects every `<data_dir>/<year>/<day>` directory, sorted by year then
/// day name so a run processes days in a deterministic order.
pub fn walk_data_dirs(data_dir: &Path) -> Result<Vec<DayDir>, Error> {
    if !data_dir.is_dir() {
        return Err(IoError::directory_not_found(data_dir).into());
    }

    let mut days = Vec::new();
    for entry in WalkDir::new(data_dir)
        .min_depth(2)
        .max_depth(2)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| IoError::DirectoryScanError {
            path: data_dir.to_path_buf(),
            source: e,
        })?;

        if !entry.file_type().is_dir() {
            continue;
        }

        let day = entry.file_name().to_string_lossy().into_owned();
        let year = entry
            .path()
            .parent()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        tracing::debug!(year, day, "found day directory");
        days.push(DayDir {
            year,
            day,
            path: entry.into_path(),
        });
    }

    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_walk_finds_day_directories_sorted() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("2018/9")).unwrap();
        fs::create_dir_all(root.join("2017/13")).unwrap();
        fs::create_dir_all(root.join("2017/2")).unwrap();

        let days = walk_data_dirs(root).unwrap();
        let names: Vec<(String, String)> = days
            .into_iter()
            .map(|d| (d.year, d.day))
            .collect();

        assert_eq!(
            names,
            vec![
                ("2017".to_string(), "13".to_string()),
                ("2017".to_string(), "2".to_string()),
                ("2018".to_string(), "9".to_string()),
            ]
        );
    }

    #[test]
    fn test_walk_ignores_files_at_day_depth() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("2017/13")).unwrap();
        fs::write(root.join("2017/notes.txt"), "not a day").unwrap();

        let days = walk_data_dirs(root).unwrap();
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].day, "13");
    }

    #[test]
    fn test_walk_missing_root_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("no-such-dir");
        assert!(walk_data_dirs(&missing).is_err());
    }

    #[test]
    fn test_solution_file_strips_leading_zeros() {
        let day = DayDir {
            year: "2017".to_string(),
            day: "07".to_string(),
            path: PathBuf::from("/data/2017/07"),
        };
        assert_eq!(
            day.solution_file(Path::new("src")).unwrap(),
            PathBuf::from("src/yr2017/day7.rs")
        );
    }

    #[test]
    fn test_solution_file_rejects_non_numeric_day() {
        let day = DayDir {
            year: "2017".to_string(),
            day: "extras".to_string(),
            path: PathBuf::from("/data/2017/extras"),
        };
        assert!(matches!(
            day.solution_file(Path::new("src")),
            Err(FixtureError::InvalidDayDirectory { .. })
        ));
    }
}
