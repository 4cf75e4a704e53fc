// ============================================================================
// FLEET STATUS VIEWMODEL - Semáforo de la tabla de flota
// ============================================================================
// Un solo fetch al cargar la página; cada registro pinta sus filas de forma
// independiente. Si el fetch falla la tabla queda como la dejó el servidor.
// ============================================================================

use crate::services::ApiClient;
use crate::views::paint_record;

pub struct FleetStatusViewModel {
    api_client: ApiClient,
}

impl FleetStatusViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    /// Traer estados y pintar filas. Devuelve cuántos registros se procesaron.
    pub async fn sync(&self) -> Result<usize, String> {
        let records = self.api_client.get_fleet_status().await?;
        for record in &records {
            if let Err(e) = paint_record(record) {
                log::warn!("⚠️ [FLOTA] No se pudo pintar camión {}: {:?}", record.id_camion, e);
            }
        }
        Ok(records.len())
    }

    /// Lanzar la sincronización sin bloquear el hilo de UI
    pub fn start(self) {
        wasm_bindgen_futures::spawn_local(async move {
            match self.sync().await {
                Ok(count) => log::info!("✅ [FLOTA] {} estados sincronizados", count),
                Err(e) => log::error!("❌ [FLOTA] Error al sincronizar estados: {}", e),
            }
        });
    }
}

impl Default for FleetStatusViewModel {
    fn default() -> Self {
        Self::new()
    }
}
