pub mod fleet_status_viewmodel;
pub mod checklist_viewmodel;

pub use fleet_status_viewmodel::FleetStatusViewModel;
pub use checklist_viewmodel::ChecklistViewModel;
