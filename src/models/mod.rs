mod question;
mod rank;

pub use question::{Answer, Question};
pub use rank::{RankEntry, RankTable};
