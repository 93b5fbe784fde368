//! Plain-text p-value input.
//!
//! Reads tab/space-delimited files either as a named column under a
//! header line, or as bare values separated by whitespace or commas.
//! Blank lines and lines starting with '#' are skipped.

use std::path::Path;

use anyhow::{bail, Context, Result};

/// Read p-values from a file.
///
/// # Arguments
/// - `path`: Path to the text file
/// - `column`: Header name of the p-value column; `None` reads every
///   value in the file
pub fn read_pvalue_file(path: &Path, column: Option<&str>) -> Result<Vec<f64>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read p-value file: {}", path.display()))?;
    match column {
        Some(name) => parse_pvalue_column(&contents, name),
        None => parse_pvalue_list(&contents),
    }
}

fn data_lines(contents: &str) -> impl Iterator<Item = (usize, &str)> {
    contents
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

fn parse_value(token: &str, line_num: usize) -> Result<f64> {
    token
        .parse::<f64>()
        .with_context(|| format!("Line {}: invalid p-value '{}'", line_num, token))
}

/// Parse bare values separated by whitespace or commas.
pub fn parse_pvalue_list(contents: &str) -> Result<Vec<f64>> {
    let mut values = Vec::new();
    for (line_num, line) in data_lines(contents) {
        for token in line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            values.push(parse_value(token, line_num)?);
        }
    }
    Ok(values)
}

/// Parse the column named `column` from a file with a header line.
pub fn parse_pvalue_column(contents: &str, column: &str) -> Result<Vec<f64>> {
    let mut lines = data_lines(contents);
    let (_, header_line) = lines
        .next()
        .ok_or_else(|| anyhow::anyhow!("Empty p-value file"))?;

    // Detect delimiter
    let tab_delimited = header_line.contains('\t');
    let split = |line: &'_ str| -> Vec<String> {
        if tab_delimited {
            line.split('\t').map(|s| s.trim().to_string()).collect()
        } else {
            line.split_whitespace().map(str::to_string).collect()
        }
    };

    let headers = split(header_line);
    let idx = headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| anyhow::anyhow!("Column '{}' not found in header", column))?;

    let mut values = Vec::new();
    for (line_num, line) in lines {
        let fields = split(line);
        if fields.len() <= idx {
            bail!(
                "Line {} has too few fields (expected at least {})",
                line_num,
                idx + 1
            );
        }
        values.push(parse_value(&fields[idx], line_num)?);
    }
    Ok(values)
}
