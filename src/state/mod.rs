// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod checklist_state;

pub use reactivity::*;
pub use checklist_state::*;
