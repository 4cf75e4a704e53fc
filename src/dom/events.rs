// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// Los listeners en elementos del DOM mueren con el elemento: al re-renderizar
// las categorías (clear_children) los closures anteriores quedan inalcanzables,
// por eso closure.forget() es seguro aquí. Listeners globales se registran una
// sola vez en el arranque.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event, MouseEvent};

fn listen<E, F>(element: &Element, event_type: &str, handler: F) -> Result<(), JsValue>
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    element.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Click handler
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    listen(element, "click", handler)
}

/// Change handler (radios, selects, inputs al perder foco)
pub fn on_change<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    listen(element, "change", handler)
}

/// Input handler (cada tecla en campos de texto)
pub fn on_input<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    listen(element, "input", handler)
}
