use serde::{Deserialize, Serialize};

/// Valor que el backend usa cuando un dato no existe
pub const NOT_AVAILABLE: &str = "N/A";

/// Datos autocompletados desde el camión seleccionado.
/// El backend envía muchas más claves (documentos, marca, ...) que aquí se ignoran.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AutofillData {
    #[serde(default)]
    pub lugar_inspeccion: Option<String>,
    #[serde(default)]
    pub conductor_nombre: Option<String>,
    #[serde(default)]
    pub tiene_remolque: bool,
    #[serde(default)]
    pub remolque_patente: Option<String>,
}

impl AutofillData {
    pub fn place(&self) -> &str {
        display_or_na(self.lugar_inspeccion.as_deref())
    }

    pub fn driver_name(&self) -> &str {
        display_or_na(self.conductor_nombre.as_deref())
    }

    /// Patente del remolque, solo si tiene remolque asignado
    pub fn trailer_plate(&self) -> Option<&str> {
        if self.tiene_remolque {
            Some(self.remolque_patente.as_deref().unwrap_or(""))
        } else {
            None
        }
    }
}

fn display_or_na(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => NOT_AVAILABLE,
    }
}

/// Respuesta de `/mantenciones/api/datos-autocompletado/{id}/`
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AutofillResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub datos: Option<AutofillData>,
}
