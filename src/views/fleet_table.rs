// ============================================================================
// FLEET TABLE VIEW - Semáforo de la tabla de camiones/remolques
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{add_class, attr_selector, clear_children, query_selector, query_selector_in, remove_classes, set_attribute, ElementBuilder};
use crate::models::fleet_status::{ReasonsView, StatusRecord, NO_REASONS_PLACEHOLDER, RECOGNIZED_STATE_CLASSES};
use crate::utils::{TRAILER_REASONS_CELL, TRAILER_ROW_ATTR, VEHICLE_REASONS_CELL, VEHICLE_ROW_ATTR};

/// Pintar tracto y (si corresponde) remolque de un registro.
/// Filas que no existen en la página se ignoran.
pub fn paint_record(record: &StatusRecord) -> Result<(), JsValue> {
    let vehicle_selector = attr_selector("tr", VEHICLE_ROW_ATTR, record.id_camion.as_str());
    match query_selector(&vehicle_selector)? {
        Some(row) => paint_row(&row, Some(record.vehicle_class()), VEHICLE_REASONS_CELL, &record.vehicle_reasons())?,
        None => log::debug!("[FLOTA] Sin fila para camión {}", record.id_camion),
    }

    if let Some(id_remolque) = &record.id_remolque {
        let trailer_selector = attr_selector("tr", TRAILER_ROW_ATTR, id_remolque.as_str());
        if let Some(row) = query_selector(&trailer_selector)? {
            let trailer_class = record.trailer_class();
            paint_row(&row, trailer_class.as_deref(), TRAILER_REASONS_CELL, &record.trailer_reasons())?;
        }
    }

    Ok(())
}

/// Limpiar clases de estado, aplicar la nueva y rellenar la celda de motivos
fn paint_row(row: &Element, state_class: Option<&str>, reasons_selector: &str, reasons: &ReasonsView) -> Result<(), JsValue> {
    remove_classes(row, RECOGNIZED_STATE_CLASSES)?;
    if let Some(class) = state_class {
        add_class(row, class)?;
    }

    if let Some(cell) = query_selector_in(row, reasons_selector)? {
        render_reasons(&cell, reasons)?;
    }
    Ok(())
}

/// Reemplazar el contenido de la celda por la lista de motivos o el placeholder
pub fn render_reasons(cell: &Element, reasons: &ReasonsView) -> Result<(), JsValue> {
    clear_children(cell);
    match reasons {
        ReasonsView::Placeholder => {
            cell.set_text_content(Some(NO_REASONS_PLACEHOLDER));
        }
        ReasonsView::List(items) => {
            let list = ElementBuilder::new("ul")?.build();
            set_attribute(&list, "style", "margin:0; padding-left:15px;")?;
            for reason in items {
                let li = ElementBuilder::new("li")?.text(reason).build();
                list.append_child(&li)?;
            }
            cell.append_child(&list)?;
        }
    }
    Ok(())
}
