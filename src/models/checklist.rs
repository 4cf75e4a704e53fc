use serde::{Deserialize, Serialize};
use crate::models::EntityId;

/// Punto de inspección
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: EntityId,
    #[serde(rename = "nombre")]
    pub name: String,
}

/// Grupo de ítems (una tarjeta del formulario)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChecklistCategory {
    pub id: EntityId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(default)]
    pub items: Vec<ChecklistItem>,
}

/// Respuesta de `/mantenciones/api/categorias/{tipo}/`
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CategoriesResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub categorias: Vec<ChecklistCategory>,
}

/// Resultado B-R-M de un ítem
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemState {
    #[serde(rename = "B")]
    Good,
    #[serde(rename = "R")]
    Regular,
    #[serde(rename = "M")]
    Bad,
}

impl ItemState {
    pub const ALL: [ItemState; 3] = [ItemState::Good, ItemState::Regular, ItemState::Bad];

    /// Valor del radio (y del JSON enviado)
    pub fn code(self) -> &'static str {
        match self {
            ItemState::Good => "B",
            ItemState::Regular => "R",
            ItemState::Bad => "M",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "B" => Some(ItemState::Good),
            "R" => Some(ItemState::Regular),
            "M" => Some(ItemState::Bad),
            _ => None,
        }
    }

    /// Regular y Malo exigen documentar la falla
    pub fn needs_observation(self) -> bool {
        matches!(self, ItemState::Regular | ItemState::Bad)
    }

    /// Clase bootstrap del botón
    pub fn button_class(self) -> &'static str {
        match self {
            ItemState::Good => "btn btn-outline-success",
            ItemState::Regular => "btn btn-outline-warning",
            ItemState::Bad => "btn btn-outline-danger",
        }
    }
}

/// Entrada del JSON que recibe el campo oculto del formulario
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChecklistResult {
    pub item_id: EntityId,
    pub estado: ItemState,
    pub observacion: String,
}

/// Serializa la lista de resultados para el input oculto
pub fn serialize_results(results: &[ChecklistResult]) -> Result<String, String> {
    serde_json::to_string(results).map_err(|e| format!("Error serializando checklist: {}", e))
}
