mod design_matrix;
mod ledger_row;
mod question_set;
mod response;
mod tally;
mod utility;

pub use design_matrix::{ChoiceDesignMatrix, ChoiceRow};
pub use ledger_row::LedgerRow;
pub use question_set::{QuestionSet, SurveyDesign};
pub use response::Response;
pub use tally::{Tally, TallyEntry};
pub use utility::UtilityReport;
