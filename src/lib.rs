// ============================================================================
// FLOTA MANTENCIONES WEB - FRONTEND MVVM (RUST PURO → WASM)
// ============================================================================
// - Views: Funciones que proyectan estado sobre el DOM de las plantillas
// - ViewModels: Estado + Lógica UI
// - Services: SOLO comunicación API
// - State: Máquina de estados del checklist con Rc<RefCell>
// - Models: Estructuras compartidas con el backend Django
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod viewmodels;
pub mod state;
pub mod dom;
pub mod views;
pub mod utils;
pub mod app;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_logger::Config;
use crate::app::App;
use crate::config::CONFIG;

// Instancia global de App (un solo hilo, vive lo que vive la página)
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if CONFIG.enable_logging {
        wasm_logger::init(Config::new(CONFIG.log_level()));
    }
    log::info!("🚛 Flota Mantenciones - Rust + WASM");

    // El script puede cargarse antes de que el DOM esté listo
    let document = dom::document().ok_or_else(|| JsValue::from_str("No document"))?;
    if document.ready_state() == "loading" {
        let closure = Closure::once(move || {
            if let Err(e) = start_app() {
                log::error!("❌ [APP] Error iniciando: {:?}", e);
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())?;
        // Listener global registrado una sola vez
        closure.forget();
        Ok(())
    } else {
        start_app()
    }
}

fn start_app() -> Result<(), JsValue> {
    let app = App::new()?;
    app.mount()?;
    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });
    Ok(())
}

/// Botón "✓ TODO OK" desde HTML: `onclick="marcarCategoriaBuena('3')"`
#[wasm_bindgen(js_name = marcarCategoriaBuena)]
pub fn mark_category_good(category_id: &str) {
    with_checklist(|checklist| checklist.mark_category_good(category_id));
}

/// Llenado global de desarrollo: todo Bueno + odómetro de prueba
#[wasm_bindgen(js_name = llenarTodo)]
pub fn fill_all_for_testing() {
    with_checklist(|checklist| checklist.fill_all_for_testing());
}

fn with_checklist<F>(action: F)
where
    F: FnOnce(&viewmodels::ChecklistViewModel),
{
    // Clonar el Rc y soltar el borrow de APP antes de tocar el DOM
    let checklist = APP.with(|cell| cell.borrow().as_ref().and_then(|app| app.checklist().cloned()));
    match checklist {
        Some(checklist) => action(&checklist),
        None => log::warn!("⚠️ [APP] No hay checklist en esta página"),
    }
}
