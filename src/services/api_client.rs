// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP al backend Django
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use crate::config::CONFIG;
use crate::models::{parse_status_records, AutofillData, AutofillResponse, CategoriesResponse, ChecklistCategory, StatusRecord};

pub const FLEET_STATUS_PATH: &str = "/api/camiones/estado/";

/// `/mantenciones/api/categorias/{tipo}/`
pub fn categories_path(tipo: &str) -> String {
    format!("/mantenciones/api/categorias/{}/", path_segment(tipo))
}

/// `/mantenciones/api/datos-autocompletado/{id}/`
pub fn autofill_path(vehicle_id: &str) -> String {
    format!("/mantenciones/api/datos-autocompletado/{}/", path_segment(vehicle_id))
}

/// Un valor de <select> nunca debe poder cambiar la ruta
fn path_segment(value: &str) -> String {
    value.trim().chars().filter(|c| *c != '/' && *c != '?' && *c != '#').collect()
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone, Default)]
pub struct ApiClient;

impl ApiClient {
    pub fn new() -> Self {
        Self
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, String> {
        let url = CONFIG.endpoint(path);
        log::debug!("🌐 [API] GET {}", url);

        let response: Response = Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Estado de todos los camiones activos y su remolque asignado.
    /// Solo el arreglo externo debe ser válido; cada registro se convierte aparte.
    pub async fn get_fleet_status(&self) -> Result<Vec<StatusRecord>, String> {
        let values = self.get_json::<Vec<serde_json::Value>>(FLEET_STATUS_PATH).await?;
        let received = values.len();
        let records = parse_status_records(values);
        log::info!("🚜 [API] {} de {} registros de estado válidos", records.len(), received);
        Ok(records)
    }

    /// Categorías del checklist para un tipo de inspección
    pub async fn get_categories(&self, tipo: &str) -> Result<Vec<ChecklistCategory>, String> {
        let response = self.get_json::<CategoriesResponse>(&categories_path(tipo)).await?;
        if !response.success {
            return Err(format!("Respuesta sin success para tipo {}", tipo));
        }
        log::info!("📋 [API] {} categorías para tipo {}", response.categorias.len(), tipo);
        Ok(response.categorias)
    }

    /// Datos autocompletados del camión
    pub async fn get_autofill(&self, vehicle_id: &str) -> Result<AutofillData, String> {
        let response = self.get_json::<AutofillResponse>(&autofill_path(vehicle_id)).await?;
        match response {
            AutofillResponse { success: true, datos: Some(datos) } => Ok(datos),
            _ => Err(format!("Respuesta sin datos para vehículo {}", vehicle_id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(categories_path("DIARIA"), "/mantenciones/api/categorias/DIARIA/");
        assert_eq!(autofill_path(" 12 "), "/mantenciones/api/datos-autocompletado/12/");
    }

    #[test]
    fn test_path_segment_cannot_escape() {
        assert_eq!(categories_path("../admin/?x=1"), "/mantenciones/api/categorias/..adminx=1/");
    }
}
