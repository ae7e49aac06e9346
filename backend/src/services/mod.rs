//! Service layer: the fetch → normalize → smooth → assemble pipeline.
//!
//! The leaf transforms (`normalize`, `smoothing`, `view_model`) are pure.
//! The view services (`day`, `trends`, `competition`) drive them from an
//! [`AudienceApi`](crate::client::AudienceApi), and `view_state`/`session`
//! turn outcomes into what a view displays.

pub mod competition;
pub mod day;
pub mod error;
pub mod format;
pub mod normalize;
pub mod session;
pub mod smoothing;
pub mod trends;
pub mod view_model;
pub mod view_state;


pub use competition::{load_competition, CompetitionView, StationRow};
pub use day::{load_day_overview, load_days, DayOverview, DaySelection, ProgramRow};
pub use error::{ServiceError, ServiceResult};
pub use normalize::resolve_trend_value;
pub use session::{RequestTicket, ViewSession};
pub use smoothing::{moving_average, DEFAULT_WINDOW};
pub use trends::{
    find_program, load_program_history, load_program_trend, ProgramHistory, ProgramTrend,
    TrendRequest, TrendSummary,
};
pub use view_model::{assemble, smooth_and_assemble};
pub use view_state::{ViewData, ViewState};
