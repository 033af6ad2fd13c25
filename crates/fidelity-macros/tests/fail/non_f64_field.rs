use fidelity_macros::Scores;

#[derive(Debug, Scores)]
pub struct BadScores {
    pub mfm: f64,
    pub bins: usize,
}

fn main() {}
