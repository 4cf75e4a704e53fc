// ============================================================================
// ELEMENT BUILDER - Builder pattern para crear elementos fácilmente
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{create_element, set_text_content, append_child, set_attribute};

pub struct ElementBuilder {
    element: Element,
}

impl ElementBuilder {
    /// Crear nuevo builder para un elemento
    pub fn new(tag: &str) -> Result<Self, JsValue> {
        Ok(Self {
            element: create_element(tag)?,
        })
    }

    /// Establecer class name (reemplaza todas las clases)
    pub fn class(self, class: &str) -> Self {
        self.element.set_class_name(class);
        self
    }

    /// Establecer ID
    pub fn id(self, id: &str) -> Result<Self, JsValue> {
        set_attribute(&self.element, "id", id)?;
        Ok(self)
    }

    /// Establecer text content (nunca HTML)
    pub fn text(self, text: &str) -> Self {
        set_text_content(&self.element, text);
        self
    }

    /// Agregar hijo
    pub fn child(self, child: Element) -> Result<Self, JsValue> {
        append_child(&self.element, &child)?;
        Ok(self)
    }

    /// Agregar varios hijos
    pub fn children(self, children: Vec<Element>) -> Result<Self, JsValue> {
        for child in &children {
            append_child(&self.element, child)?;
        }
        Ok(self)
    }

    /// Establecer atributo
    pub fn attr(self, name: &str, value: &str) -> Result<Self, JsValue> {
        set_attribute(&self.element, name, value)?;
        Ok(self)
    }

    /// Construir y retornar elemento
    pub fn build(self) -> Element {
        self.element
    }
}
