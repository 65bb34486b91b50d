//! # annum-holidays
//!
//! Public holiday data per jurisdiction and the classifier that turns it
//! into recurring and irregular date groups.
//!
//! ```mermaid
//! graph LR
//!     A["provider_for(code)"] --> B["dyn HolidayProvider"]
//!     B -->|"holidays(range)"| C["Vec<(CalendarDate, String)>"]
//!     C -->|"classify()"| D["DateGroups"]
//! ```
//!
//! | Module | Description |
//! |--------|-------------|
//! | `provider` | `HolidayProvider` trait and jurisdiction lookup |
//! | `fr`, `gb`, `de`, `jp` | Jurisdiction adapters |
//! | `classify` | Recurring / irregular classification |
//! | `error` | Error types |

mod classify;
mod de;
mod error;
mod fr;
mod gb;
mod jp;
mod provider;
mod table;

pub use classify::classify;
pub use de::GermanyBavariaHolidays;
pub use error::HolidayError;
pub use fr::FranceHolidays;
pub use gb::UnitedKingdomHolidays;
pub use jp::JapanHolidays;
pub use provider::{HolidayProvider, jurisdictions, provider_for};
