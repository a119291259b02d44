//! The plain-text cost-matrix instance format (§6.1): a vertex count
//! followed by that many whitespace-delimited rows, `-1` marking an absent
//! edge.

use std::fs;
use std::path::Path;

use tsp_common::{CostMatrix, InputError};

/// Read a [`CostMatrix`] from an instance file.
///
/// ```text
/// <N>
/// <cost> <cost> ... <cost>     (N values)
/// ...                           (N rows)
/// ```
pub fn read_matrix(path: &Path) -> Result<CostMatrix, InputError> {
    let contents = fs::read_to_string(path)?;
    let matrix = parse_matrix(&contents)?;
    log::debug!("read {}x{} cost matrix from {}", matrix.n(), matrix.n(), path.display());
    Ok(matrix)
}

fn parse_matrix(contents: &str) -> Result<CostMatrix, InputError> {
    let mut lines = contents.lines().map(str::trim).filter(|line| !line.is_empty());

    let n_line = lines
        .next()
        .ok_or_else(|| InputError::BadData("missing vertex count".into()))?;
    let n: usize = n_line
        .parse()
        .map_err(|_| InputError::BadData(format!("vertex count is not an integer: {n_line:?}")))?;
    if n == 0 {
        return Err(InputError::BadData("vertex count must be at least 1".into()));
    }

    let mut data = Vec::with_capacity(n);
    for row_idx in 0..n {
        let line = lines
            .next()
            .ok_or_else(|| InputError::BadData(format!("missing row {row_idx}")))?;
        let row: Vec<i64> = line
            .split_whitespace()
            .map(|tok| {
                tok.parse()
                    .map_err(|_| InputError::BadData(format!("bad cost token {tok:?} in row {row_idx}")))
            })
            .collect::<Result<_, _>>()?;
        if row.len() != n {
            return Err(InputError::BadData(format!(
                "row {row_idx} has {} values, expected {n}",
                row.len()
            )));
        }
        data.push(row);
    }

    CostMatrix::new(data).ok_or_else(|| InputError::BadData("matrix is not square".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_a_well_formed_matrix() {
        let text = "4\n-1 10 15 20\n10 -1 35 25\n15 35 -1 30\n20 25 30 -1\n";
        let m = parse_matrix(text).unwrap();
        assert_eq!(m.n(), 4);
        assert_eq!(m.cost(0, 1), Some(10));
        assert_eq!(m.cost(0, 0), None);
    }

    #[test]
    fn rejects_short_row() {
        let text = "3\n-1 1 2\n3 -1\n5 6 -1\n";
        assert!(matches!(parse_matrix(text), Err(InputError::BadData(_))));
    }

    #[test]
    fn rejects_zero_vertex_count() {
        let text = "0\n";
        assert!(matches!(parse_matrix(text), Err(InputError::BadData(_))));
    }

    #[test]
    fn rejects_non_numeric_token() {
        let text = "2\n-1 x\n1 -1\n";
        assert!(matches!(parse_matrix(text), Err(InputError::BadData(_))));
    }

    #[test]
    fn reads_from_a_real_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "2\n-1 5\n5 -1\n").unwrap();
        let m = read_matrix(file.path()).unwrap();
        assert_eq!(m.cost(0, 1), Some(5));
    }

    #[test]
    fn missing_file_is_a_bad_read() {
        let result = read_matrix(Path::new("/nonexistent/instance.txt"));
        assert!(matches!(result, Err(InputError::BadRead(_))));
    }
}
