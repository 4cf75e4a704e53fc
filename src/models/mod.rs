pub mod entity_id;
pub mod fleet_status;
pub mod checklist;
pub mod autofill;

pub use entity_id::EntityId;
pub use fleet_status::{parse_status_records, StatusRecord, FleetState, RowClass, ReasonsView};
pub use checklist::{ChecklistCategory, ChecklistItem, ChecklistResult, ItemState, CategoriesResponse};
pub use autofill::{AutofillData, AutofillResponse};
