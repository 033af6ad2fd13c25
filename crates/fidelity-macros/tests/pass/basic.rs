use fidelity_macros::Scores;

#[derive(Debug, Clone, Copy, Scores)]
pub struct ErrorScores {
    pub rmse: f64,
    pub mae: f64,
}

fn main() {
    let s = ErrorScores { rmse: 1.0, mae: 0.5 };
    let mut table = ErrorScoresTable::with_capacity(4);
    table.push(&s);
    table.push(&ErrorScores::nan());
    assert_eq!(table.len(), 2);
    assert!(!table.is_empty());
    assert_eq!(ErrorScores::field_names(), &["rmse", "mae"]);
    assert_eq!(ErrorScores::labels(), &["rmse", "mae"]);
    assert_eq!(s.values(), vec![1.0, 0.5]);
    assert_eq!(table.column("mae").unwrap()[0], 0.5);
    assert!(table.row(1).unwrap().rmse.is_nan());
    assert!(table.row(2).is_none());
}
