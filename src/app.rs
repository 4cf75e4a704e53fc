// ============================================================================
// APP - Monta los componentes presentes en la página actual
// ============================================================================
// La misma build WASM se carga en la lista de camiones y en el formulario de
// inspección; cada componente se activa solo si su ancla existe en el DOM.
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use crate::dom::{get_element_by_id, query_selector};
use crate::utils::{CHECKLIST_CONTAINER_ID, TRAILER_ROW_ATTR, VEHICLE_ROW_ATTR};
use crate::viewmodels::{ChecklistViewModel, FleetStatusViewModel};

pub struct App {
    has_fleet_table: bool,
    checklist: Option<Rc<ChecklistViewModel>>,
}

impl App {
    /// Detectar qué componentes tiene la página
    pub fn new() -> Result<Self, JsValue> {
        let has_fleet_table = query_selector(&format!("tr[{}], tr[{}]", VEHICLE_ROW_ATTR, TRAILER_ROW_ATTR))?.is_some();
        let checklist = get_element_by_id(CHECKLIST_CONTAINER_ID).map(ChecklistViewModel::new);

        Ok(Self {
            has_fleet_table,
            checklist,
        })
    }

    /// Lanzar sincronización de flota y conectar el formulario
    pub fn mount(&self) -> Result<(), JsValue> {
        if self.has_fleet_table {
            log::info!("🚜 [APP] Tabla de flota detectada, sincronizando estados...");
            FleetStatusViewModel::new().start();
        }

        if let Some(checklist) = &self.checklist {
            checklist.bind()?;
        }

        if !self.has_fleet_table && self.checklist.is_none() {
            log::debug!("[APP] Página sin componentes de mantenciones");
        }
        Ok(())
    }

    pub fn checklist(&self) -> Option<&Rc<ChecklistViewModel>> {
        self.checklist.as_ref()
    }
}
