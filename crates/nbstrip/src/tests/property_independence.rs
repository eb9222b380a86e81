use quickcheck::QuickCheck;

use super::test_count;
use crate::{CellKind, ReduceOptions, SourceBlock, reduce, strip};

/// Property: reducing a sequence of code cells gives each cell exactly what
/// stripping it alone would.
#[test]
fn cells_are_stripped_independently_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(cells: Vec<String>) -> bool {
        let expected: Vec<(usize, String)> = cells
            .iter()
            .enumerate()
            .filter(|(_, text)| !text.trim().is_empty())
            .map(|(index, text)| (index, strip(text)))
            .filter(|(_, text)| !text.trim().is_empty())
            .collect();

        let blocks = cells
            .iter()
            .map(|text| SourceBlock::new(CellKind::Code, text.as_str()));
        match reduce(blocks, &ReduceOptions::default()) {
            Ok(reduced) => {
                let actual: Vec<(usize, String)> = reduced
                    .cells
                    .into_iter()
                    .map(|cell| (cell.index, cell.text))
                    .collect();
                actual == expected
            }
            Err(_) => cells.iter().all(|text| text.trim().is_empty()),
        }
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<String>) -> bool);
}

#[test]
fn open_docstring_in_first_cell_does_not_swallow_second() {
    let first = "'''\nnever closed";
    let second = "x = 1";
    let blocks = vec![
        SourceBlock::new(CellKind::Code, first),
        SourceBlock::new(CellKind::Code, second),
    ];
    let reduced = reduce(blocks, &ReduceOptions::default()).unwrap();
    let texts: Vec<_> = reduced.cells.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, [second]);
    assert_eq!(strip(&format!("{first}\n{second}")), "");
}
