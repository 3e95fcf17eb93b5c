//! CSV output format for the missable series
//!
//! One row per planning window, for spreadsheet charts

use crate::solver::SeriesPoint;

/// CSV series output formatter
#[derive(Debug, Default)]
pub struct CsvSeriesOutput {
    points: Vec<SeriesPoint>,
}

impl CsvSeriesOutput {
    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = String::from("window,missable\n");

        for point in &self.points {
            output.push_str(&point.window.to_string());
            output.push(',');
            output.push_str(&point.missable.to_string());
            output.push('\n');
        }

        output
    }
}

impl FromIterator<SeriesPoint> for CsvSeriesOutput {
    fn from_iter<I: IntoIterator<Item = SeriesPoint>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
