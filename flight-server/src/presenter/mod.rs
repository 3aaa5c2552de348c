//! Itinerary presentation.
//!
//! Pure, stateless transformation functions that turn raw itineraries
//! into flat display-ready records (formatted times, durations, layover
//! summaries, stop labels, eco strings), plus the one stateful piece:
//! the pagination window over the result list.

mod format;
mod pager;
mod summary;

pub use format::{format_clock_time, format_duration, layover_duration, render_duration};
pub use pager::{ITEMS_PER_PAGE, Pager, paginate};
pub use summary::{ItinerarySummary, SegmentDetail, layover_summary, stop_label, summarize, summarize_all};
