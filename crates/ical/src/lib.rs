//! # annum-ical
//!
//! iCalendar (RFC 5545) serialization of labeled date groups and moon
//! phases. All events are all-day; dates are written as `VALUE=DATE`.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["DateGroups"] -->|"render_group()"| C["VEVENT text"]
//!     B["PhaseEvent"] -->|"render_phase_event()"| C
//!     C -->|"assemble_document()"| D["CalendarDocument"]
//!     D -->|"write()"| E[".ics file"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use annum_calendar::{CalendarDate, RecurrenceRule};
//! use annum_ical::{EventStamp, LineEnding, Renderer, SeededUids, assemble_document};
//!
//! let mut renderer = Renderer::new(EventStamp::default(), LineEnding::Lf, SeededUids::new(1));
//! let epiphany = CalendarDate::new(2000, 1, 6).unwrap();
//! let event = renderer.render_recurring_event("Epiphanie", epiphany, &RecurrenceRule::yearly());
//! let doc = assemble_document(&renderer.open_marker(), [event], &renderer.close_marker());
//! assert!(doc.as_str().contains("RRULE:FREQ=YEARLY;"));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `render` | Event records and document markers |
//! | `document` | Document assembly and atomic file output |
//! | `stamp` | Constant event metadata and line endings |
//! | `uid` | Random and seeded UID sources |
//! | `error` | Error types |

mod document;
mod error;
mod render;
mod stamp;
mod uid;

pub use document::{CalendarDocument, assemble_document};
pub use error::IcalError;
pub use render::{RDATES_PER_LINE, Renderer};
pub use stamp::{EventStamp, LineEnding};
pub use uid::{RandomUids, SeededUids, UidSource};
