pub mod computed;
pub mod seat;
pub mod section;
pub mod venue;

pub use computed::{ComputedSection, ComputedVenue};
pub use seat::Seat;
pub use section::{SectionConfig, SectionKind};
pub use venue::{StageType, ValidationError, VenueConfig};
