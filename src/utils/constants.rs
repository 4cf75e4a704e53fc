// ============================================================================
// CONSTANTES DEL DOM - Contrato con las plantillas Django
// ============================================================================

// --- Tabla de flota (core/camion_list.html) ---
pub const VEHICLE_ROW_ATTR: &str = "data-camion-id";
pub const TRAILER_ROW_ATTR: &str = "data-remolque-id";
pub const VEHICLE_REASONS_CELL: &str = ".motivos";
pub const TRAILER_REASONS_CELL: &str = ".motivos-remolque";

// --- Formulario de inspección (mantenciones/crear_inspeccion.html) ---
pub const INSPECTION_TYPE_SELECT_ID: &str = "id_tipo_inspeccion";
pub const VEHICLE_SELECT_ID: &str = "id_vehiculo";
pub const ODOMETER_INPUT_ID: &str = "id_km_registro";
pub const CHECKLIST_CONTAINER_ID: &str = "categorias-checklist";
pub const RESULTS_INPUT_ID: &str = "resultados-checklist";
pub const AUTOFILL_PANEL_ID: &str = "datos-autocompletados";
pub const TRAILER_SECTION_ID: &str = "seccion-remolque";
pub const PLACE_INPUT_ID: &str = "lugar-inspeccion";
pub const DRIVER_INPUT_ID: &str = "conductor-nombre";
pub const TRAILER_PLATE_INPUT_ID: &str = "remolque-patente";

// --- Elementos generados por el checklist ---
pub const PROGRESS_BAR_ID: &str = "checklist-progress";
pub const PROGRESS_TEXT_ID: &str = "porcentaje-txt";
pub const ITEM_RADIO_CLASS: &str = "item-radio";
pub const ITEM_OBSERVATION_CLASS: &str = "item-observacion";
pub const ITEM_ID_ATTR: &str = "data-item-id";

/// Borde del campo de observación cuando el ítem quedó en R o M
pub const OBSERVATION_BORDER_ALERT: &str = "2px solid #dc3545";
pub const OBSERVATION_BORDER_NORMAL: &str = "1px solid #ced4da";

/// Id del cuerpo de una categoría (`cat-body-{id}`)
pub fn category_body_id(category_id: &str) -> String {
    format!("cat-body-{}", category_id)
}

/// Id de un radio (`b_12`, `r_12`, `m_12`)
pub fn radio_id(code: &str, item_id: &str) -> String {
    format!("{}_{}", code.to_lowercase(), item_id)
}
