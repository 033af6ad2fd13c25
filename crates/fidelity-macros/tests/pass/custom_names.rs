use fidelity_macros::Scores;

#[derive(Debug, Clone, Copy, Scores)]
#[scores(table_name = "SkillTable")]
pub struct Skill {
    #[score(label = "NSE")]
    pub nse: f64,
    #[score(label = "exp(-NMAEp)")]
    pub exp_neg_nmaep: f64,
}

fn main() {
    let s = Skill { nse: 0.8, exp_neg_nmaep: 0.9 };
    let mut table = SkillTable::with_capacity(1);
    table.push(&s);
    assert_eq!(Skill::labels(), &["NSE", "exp(-NMAEp)"]);
    assert_eq!(Skill::field_names(), &["nse", "exp_neg_nmaep"]);
    assert_eq!(s.get("NSE"), Some(0.8));
    assert_eq!(s.get("nse"), None);
    assert_eq!(table.column("exp(-NMAEp)"), Some(&[0.9][..]));
}
