use serde::{Deserialize, Serialize};
use crate::models::EntityId;

/// Clases de estado que el semáforo reconoce (y limpia) en una fila.
/// Incluye los sinónimos antiguos que aún puede traer el HTML del servidor.
pub const RECOGNIZED_STATE_CLASSES: &[&str] = &[
    "estado-vencida",
    "estado-vencido",
    "estado-danger",
    "estado-critica",
    "estado-critico",
    "estado-warning",
    "estado-proximo",
    "estado-ok",
    "estado-muted",
];

/// Estado de mantención/documentación de un tracto
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FleetState {
    Ok,
    Critical,
    Expired,
}

impl FleetState {
    /// Interpreta el campo `estado` del backend. Comparación exacta:
    /// solo VENCIDA y CRITICA cambian la fila; todo lo demás (incluido null) es Ok.
    pub fn from_wire(estado: Option<&str>) -> Self {
        match estado {
            Some("VENCIDA") => FleetState::Expired,
            Some("CRITICA") => FleetState::Critical,
            _ => FleetState::Ok,
        }
    }

    /// Clase CSS de la fila, por prioridad
    pub fn row_class(self) -> RowClass {
        match self {
            FleetState::Expired => RowClass::Danger,
            FleetState::Critical => RowClass::Warning,
            FleetState::Ok => RowClass::Ok,
        }
    }
}

/// Clase visual de una fila de la tabla de flota
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowClass {
    Danger,
    Warning,
    Ok,
}

impl RowClass {
    pub fn css(self) -> &'static str {
        match self {
            RowClass::Danger => "estado-danger",
            RowClass::Warning => "estado-warning",
            RowClass::Ok => "estado-ok",
        }
    }
}

/// Registro de `/api/camiones/estado/`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusRecord {
    pub id_camion: EntityId,
    #[serde(default)]
    pub id_remolque: Option<EntityId>,
    #[serde(default)]
    pub estado: Option<String>,
    #[serde(default)]
    pub motivos: Option<Vec<String>>,
    #[serde(default)]
    pub estado_remolque_css: Option<String>,
    #[serde(default)]
    pub motivos_remolque: Option<Vec<String>>,
}

impl StatusRecord {
    pub fn state(&self) -> FleetState {
        FleetState::from_wire(self.estado.as_deref())
    }

    pub fn vehicle_class(&self) -> &'static str {
        self.state().row_class().css()
    }

    /// Clase ya calculada por el backend para el remolque, normalizada.
    /// None = no aplicar ninguna clase.
    pub fn trailer_class(&self) -> Option<String> {
        self.estado_remolque_css
            .as_deref()
            .map(normalize_trailer_class)
            .filter(|css| !css.is_empty())
    }

    pub fn vehicle_reasons(&self) -> ReasonsView {
        ReasonsView::from_reasons(self.motivos.as_deref())
    }

    pub fn trailer_reasons(&self) -> ReasonsView {
        ReasonsView::from_reasons(self.motivos_remolque.as_deref())
    }
}

/// Convierte cada elemento del arreglo por separado: un registro malformado
/// se registra y se omite sin afectar a los demás.
pub fn parse_status_records(values: Vec<serde_json::Value>) -> Vec<StatusRecord> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value::<StatusRecord>(value) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("⚠️ [FLOTA] Registro de estado #{} ignorado: {}", index, e);
                None
            }
        })
        .collect()
}

/// Pasa a minúsculas y traduce el sinónimo antiguo `estado-vencida`
pub fn normalize_trailer_class(css: &str) -> String {
    let css = css.trim().to_lowercase();
    if css == "estado-vencida" {
        RowClass::Danger.css().to_string()
    } else {
        css
    }
}

/// Texto cuando no hay motivos
pub const NO_REASONS_PLACEHOLDER: &str = "Sin observaciones";

/// Contenido de la celda de motivos
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReasonsView {
    Placeholder,
    List(Vec<String>),
}

impl ReasonsView {
    pub fn from_reasons(reasons: Option<&[String]>) -> Self {
        match reasons {
            Some(list) if !list.is_empty() => ReasonsView::List(list.to_vec()),
            _ => ReasonsView::Placeholder,
        }
    }
}
