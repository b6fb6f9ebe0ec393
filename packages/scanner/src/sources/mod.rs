// One module per external source. The parsing mechanics follow the markup of
// the site each module targets; only the JobSource contract is shared.

pub mod ats;
pub mod chalair;
pub mod clair_group;
pub mod jetfly;
pub mod la_compagnie;
pub mod luxaviation;
pub mod netjets;
pub mod oyonnair;
pub mod pan_europeenne;
pub mod pcc;
pub mod platoon;
