// ============================================================================
// AUTOFILL PANEL VIEW - Datos de solo lectura del camión seleccionado
// ============================================================================

use wasm_bindgen::prelude::*;
use crate::dom::{get_element_by_id, get_input_by_id, set_display};
use crate::models::AutofillData;
use crate::utils::*;

/// Rellenar lugar/conductor, mostrar el bloque y la sección de remolque si corresponde.
/// Elementos ausentes en la plantilla se ignoran.
pub fn render_autofill(datos: &AutofillData) -> Result<(), JsValue> {
    if let Some(place) = get_input_by_id(PLACE_INPUT_ID) {
        place.set_value(datos.place());
    }
    if let Some(driver) = get_input_by_id(DRIVER_INPUT_ID) {
        driver.set_value(datos.driver_name());
    }
    if let Some(panel) = get_element_by_id(AUTOFILL_PANEL_ID) {
        set_display(&panel, "flex")?;
    }

    let trailer_section = get_element_by_id(TRAILER_SECTION_ID);
    match datos.trailer_plate() {
        Some(plate) => {
            if let Some(input) = get_input_by_id(TRAILER_PLATE_INPUT_ID) {
                input.set_value(plate);
            }
            if let Some(section) = &trailer_section {
                set_display(section, "block")?;
            }
        }
        None => {
            if let Some(section) = &trailer_section {
                set_display(section, "none")?;
            }
        }
    }
    Ok(())
}
