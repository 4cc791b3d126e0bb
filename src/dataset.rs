//! Named bivariate data sets and where they come from.

use std::cmp;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{Error, Result};
use crate::stats::bivariate::Data;

const MAX_FILE_STEM_LEN: usize = 64;

/// A named pair of `x`/`y` sequences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Identifier used in titles and file names
    pub name: String,
    /// Independent variable
    pub x: Vec<f64>,
    /// Dependent variable
    pub y: Vec<f64>,
}

impl Dataset {
    /// Creates a data set from its parts. The sequences are validated lazily, by [`Dataset::data`].
    pub fn new<S: Into<String>>(name: S, x: Vec<f64>, y: Vec<f64>) -> Dataset {
        Dataset {
            name: name.into(),
            x,
            y,
        }
    }

    /// The four data sets of the Anscombe Quartet
    pub fn anscombe_quartet() -> Vec<Dataset> {
        let x = vec![10., 8., 13., 9., 11., 14., 6., 4., 12., 7., 5.];

        vec![
            Dataset::new(
                "I",
                x.clone(),
                vec![
                    8.04, 6.95, 7.58, 8.81, 8.33, 9.96, 7.24, 4.26, 10.84, 4.82, 5.68,
                ],
            ),
            Dataset::new(
                "II",
                x.clone(),
                vec![9.14, 8.14, 8.74, 8.77, 9.26, 8.1, 6.13, 3.1, 9.13, 7.26, 4.74],
            ),
            Dataset::new(
                "III",
                x,
                vec![
                    7.46, 6.77, 12.74, 7.11, 7.81, 8.84, 6.08, 5.39, 8.15, 6.42, 5.73,
                ],
            ),
            Dataset::new(
                "IV",
                vec![8., 8., 8., 8., 8., 8., 8., 19., 8., 8., 8.],
                vec![6.58, 5.76, 7.71, 8.84, 8.47, 7.04, 5.25, 12.5, 5.56, 7.91, 6.89],
            ),
        ]
    }

    /// Validated view over the sequences
    ///
    /// # Errors
    ///
    /// Fails with `ShapeMismatch` or `NonFiniteInput`, see [`Data::new`].
    pub fn data(&self) -> Result<Data<'_, f64, f64>> {
        Data::new(&self.x, &self.y)
    }

    /// Title of the data set's figure
    pub fn title(&self) -> String {
        format!("Anscombe Dataset {}", self.name)
    }

    /// File name (without extension) of the data set's figure, `anscombe_<name>`
    pub fn file_stem(&self) -> String {
        make_filename_safe(&format!("anscombe_{}", self.name))
    }
}

fn truncate_to_character_boundary(s: &mut String, max_len: usize) {
    let mut boundary = cmp::min(max_len, s.len());
    while !s.is_char_boundary(boundary) {
        boundary -= 1;
    }
    s.truncate(boundary);
}

/// Replaces the characters that are reserved in file names and bounds the length
pub fn make_filename_safe(string: &str) -> String {
    let mut string = string.replace(
        &['?', '"', '/', '\\', '*', '<', '>', ':', '|', '^', ' '][..],
        "_",
    );

    truncate_to_character_boundary(&mut string, MAX_FILE_STEM_LEN);

    string
}

/// Reads a JSON array of data sets, e.g.
///
/// ```json
/// [{ "name": "I", "x": [10, 8, 13], "y": [8.04, 6.95, 7.58] }]
/// ```
pub fn load(path: &Path) -> Result<Vec<Dataset>> {
    let file = File::open(path).map_err(|inner| Error::AccessError {
        inner,
        path: path.to_owned(),
    })?;
    let datasets: Vec<Dataset> =
        serde_json::from_reader(BufReader::new(file)).map_err(|inner| Error::SerdeError {
            inner,
            path: path.to_owned(),
        })?;

    info!("Loaded {} data sets from {:?}", datasets.len(), path);

    Ok(datasets)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn quartet_has_four_data_sets_of_eleven_points() {
        let quartet = Dataset::anscombe_quartet();

        let names: Vec<_> = quartet.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["I", "II", "III", "IV"]);
        for dataset in &quartet {
            assert_eq!(dataset.x.len(), 11);
            assert_eq!(dataset.y.len(), 11);
            assert!(dataset.data().is_ok());
        }
    }

    #[test]
    fn file_stem_is_prefixed_and_safe() {
        let dataset = Dataset::new("IV", vec![], vec![]);
        assert_eq!(dataset.file_stem(), "anscombe_IV");

        let dataset = Dataset::new("a/b: c?", vec![], vec![]);
        assert_eq!(dataset.file_stem(), "anscombe_a_b__c_");
    }

    #[test]
    fn make_filename_safe_respects_character_boundaries() {
        let input = "✓✓✓✓✓✓✓✓✓✓✓✓✓✓✓✓✓✓✓✓✓✓✓✓✓✓✓✓✓✓✓✓✓✓";
        let safe = make_filename_safe(input);
        assert!(safe.len() <= MAX_FILE_STEM_LEN);
        assert!(input.starts_with(&safe));
    }

    #[test]
    fn loads_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name": "line", "x": [1, 2, 3], "y": [2.5, 4.5, 6.5]}}]"#
        )
        .unwrap();

        let datasets = load(file.path()).unwrap();
        assert_eq!(
            datasets,
            vec![Dataset::new("line", vec![1., 2., 3.], vec![2.5, 4.5, 6.5])]
        );
    }

    #[test]
    fn load_reports_missing_files_and_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(load(&missing), Err(Error::AccessError { .. })));

        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"name": "not an array"}}"#).unwrap();
        assert!(matches!(load(file.path()), Err(Error::SerdeError { .. })));
    }
}
