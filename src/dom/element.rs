// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, Window};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Obtener input por ID (None si no existe o no es <input>)
pub fn get_input_by_id(id: &str) -> Option<HtmlInputElement> {
    get_element_by_id(id)?.dyn_into::<HtmlInputElement>().ok()
}

/// Crear elemento
pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

/// Agregar clase
pub fn add_class(element: &Element, class: &str) -> Result<(), JsValue> {
    element.class_list().add_1(class)
}

/// Remover varias clases de una vez
pub fn remove_classes(element: &Element, classes: &[&str]) -> Result<(), JsValue> {
    let list = element.class_list();
    for class in classes {
        list.remove_1(class)?;
    }
    Ok(())
}

/// Verificar si tiene clase
pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

/// Establecer text content
pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Vaciar un contenedor (los listeners de los hijos mueren con ellos)
pub fn clear_children(element: &Element) {
    element.set_inner_html("");
}

/// Agregar hijo
pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

/// Establecer atributo
pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// Establecer una propiedad de estilo inline
pub fn set_style(element: &Element, property: &str, value: &str) -> Result<(), JsValue> {
    element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| JsValue::from_str("Element is not an HtmlElement"))?
        .style()
        .set_property(property, value)
}

/// Mostrar/ocultar con display
pub fn set_display(element: &Element, display: &str) -> Result<(), JsValue> {
    set_style(element, "display", display)
}

/// Query selector dentro del document
pub fn query_selector(selector: &str) -> Result<Option<Element>, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))?
        .query_selector(selector)
}

/// Query selector dentro de un elemento
pub fn query_selector_in(parent: &Element, selector: &str) -> Result<Option<Element>, JsValue> {
    parent.query_selector(selector)
}

/// Query selector all dentro de un elemento, como Vec
pub fn query_selector_all_in(parent: &Element, selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = parent.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Selector `tag[attr="value"]` con el valor escapado
pub fn attr_selector(tag: &str, attr: &str, value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("{}[{}=\"{}\"]", tag, attr, escaped)
}
