use crate::api::{
    enums::diagnostic::Diagnostic,
    ranked_report::RankedReport,
    traits::{HasSource, HasSpread},
};
use std::io::{self, Write};

/// Header row of the CSV report; names and order of the columns.
pub const CSV_HEADER: &str = "filename,bufferLength,randomCompressedRatio,compressedRatio,spread";

/// Writes a ranked report as CSV, header first, one row per record in ranked order.
///
/// # Arguments
///
/// * `report` - The report to write.
/// * `writer` - Destination of the CSV text.
///
/// # Remarks
///
/// Ratios are written in their shortest round-trip representation.
/// Sources are written verbatim; file names containing commas are not quoted.
pub fn write_csv<W: Write>(report: &RankedReport, mut writer: W) -> io::Result<()> {
    writeln!(writer, "{}", CSV_HEADER)?;
    for record in report {
        writeln!(
            writer,
            "{},{},{},{},{}",
            record.source(),
            record.buffer_length(),
            record.random_compressed_ratio(),
            record.compressed_ratio(),
            record.spread()
        )?;
    }
    writer.flush()
}

/// Writes one line per diagnostic.
///
/// This is meant for a channel separate from the CSV report, such as stderr.
pub fn write_diagnostics<W: Write>(diagnostics: &[Diagnostic], mut writer: W) -> io::Result<()> {
    for diagnostic in diagnostics {
        writeln!(writer, "{}", diagnostic)?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::result_record::ResultRecord;
    use core::num::NonZeroUsize;

    #[test]
    fn writes_header_and_rows_in_ranked_order() {
        let report = RankedReport::rank(vec![
            ResultRecord::from_lengths(
                "ordered.txt".to_string(),
                NonZeroUsize::new(4).unwrap(),
                1,
                3,
            ),
            ResultRecord::from_lengths(
                "noise.txt".to_string(),
                NonZeroUsize::new(8).unwrap(),
                4,
                4,
            ),
        ]);

        let mut output = Vec::new();
        write_csv(&report, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            [
                CSV_HEADER,
                "noise.txt,8,0.5,0.5,0",
                "ordered.txt,4,0.75,0.25,-0.5",
            ]
        );
    }

    #[test]
    fn empty_report_writes_only_header() {
        let mut output = Vec::new();
        write_csv(&RankedReport::default(), &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), format!("{}\n", CSV_HEADER));
    }

    #[test]
    fn writes_one_line_per_diagnostic() {
        let diagnostics = vec![
            Diagnostic::EmptyInput {
                input: "a.txt".to_string(),
            },
            Diagnostic::EmptyInput {
                input: "b.txt".to_string(),
            },
        ];

        let mut output = Vec::new();
        write_diagnostics(&diagnostics, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("a.txt"));
        assert!(lines[1].starts_with("b.txt"));
    }
}
