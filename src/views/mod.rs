pub mod fleet_table;
pub mod checklist_form;
pub mod autofill_panel;

pub use fleet_table::{paint_record, render_reasons};
pub use checklist_form::{render_checklist, update_answers, update_summary, focus_observation, set_odometer, Dispatch};
pub use autofill_panel::render_autofill;
