pub mod gathering;
pub mod question_item;
pub mod round;
pub mod timing;

pub use gathering::{DataGatheringResult, FetchOutcome, SearchHit, SearchOutcome, StatusCounts};
pub use question_item::QuestionItem;
pub use round::RoundOutcome;
pub use timing::{Stage, TimingMetrics};
