// ============================================================================
// CHECKLIST STATE - Máquina de estados del formulario de inspección
// ============================================================================
// El DOM es solo una proyección de este modelo: nada se lee de vuelta desde
// los inputs para calcular resultados o progreso.
// ============================================================================

use std::collections::{HashMap, HashSet};
use crate::models::{AutofillData, ChecklistCategory, ChecklistResult, EntityId, ItemState};

/// Fase del formulario
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChecklistPhase {
    /// Sin categorías dibujadas
    Idle,
    /// Categorías e ítems dibujados
    Rendered,
}

/// Entradas tipadas de la máquina de estados (eventos del DOM y respuestas de red)
#[derive(Clone, Debug, PartialEq)]
pub enum ChecklistInput {
    InspectionTypeSelected(String),
    CategoriesLoaded(Vec<ChecklistCategory>),
    VehicleSelected(String),
    AutofillLoaded(AutofillData),
    ItemAnswered { item_id: EntityId, state: ItemState },
    ObservationEdited { item_id: EntityId, text: String },
    CategoryMarkedGood(EntityId),
    /// Llenado global de desarrollo: todo Bueno + odómetro de prueba
    FillAllGood { odometer: String },
}

/// Efectos que el viewmodel debe ejecutar tras una transición
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    FetchCategories(String),
    FetchAutofill(String),
    FocusObservation(EntityId),
    SetOdometer(String),
}

/// Tipo de actualización del DOM
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateType {
    /// Actualización incremental (solo elementos específicos)
    Incremental(IncrementalUpdate),
    /// Re-render completo del área de categorías (nuevo set de categorías)
    FullRender,
}

/// Tipo de actualización incremental específica
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IncrementalUpdate {
    /// Radios marcados y bordes de observación
    Answers,
    /// Campos de solo lectura y sección de remolque
    Autofill,
}

/// Resultado de aplicar una entrada
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transition {
    pub update: Option<UpdateType>,
    pub commands: Vec<Command>,
}

impl Transition {
    fn render(update: UpdateType) -> Self {
        Self { update: Some(update), commands: Vec::new() }
    }

    fn command(command: Command) -> Self {
        Self { update: None, commands: vec![command] }
    }
}

/// Estado explícito del checklist
#[derive(Clone, Debug)]
pub struct ChecklistModel {
    phase: ChecklistPhase,
    inspection_type: Option<String>,
    vehicle_id: Option<String>,
    categories: Vec<ChecklistCategory>,
    answers: HashMap<EntityId, ItemState>,
    observations: HashMap<EntityId, String>,
    autofill: Option<AutofillData>,
}

impl Default for ChecklistModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ChecklistModel {
    pub fn new() -> Self {
        Self {
            phase: ChecklistPhase::Idle,
            inspection_type: None,
            vehicle_id: None,
            categories: Vec::new(),
            answers: HashMap::new(),
            observations: HashMap::new(),
            autofill: None,
        }
    }

    pub fn inspection_type(&self) -> Option<&str> {
        self.inspection_type.as_deref()
    }

    pub fn vehicle_id(&self) -> Option<&str> {
        self.vehicle_id.as_deref()
    }

    pub fn categories(&self) -> &[ChecklistCategory] {
        &self.categories
    }

    pub fn autofill(&self) -> Option<&AutofillData> {
        self.autofill.as_ref()
    }

    pub fn answer(&self, item_id: &EntityId) -> Option<ItemState> {
        self.answers.get(item_id).copied()
    }

    pub fn observation(&self, item_id: &EntityId) -> &str {
        self.observations.get(item_id).map(String::as_str).unwrap_or("")
    }

    /// El campo de observación se destaca cuando el ítem quedó en R o M
    pub fn is_highlighted(&self, item_id: &EntityId) -> bool {
        self.answer(item_id).map(ItemState::needs_observation).unwrap_or(false)
    }

    /// Ids de ítems en orden de render, sin repetidos
    pub fn item_ids(&self) -> Vec<EntityId> {
        let mut seen = HashSet::new();
        self.categories
            .iter()
            .flat_map(|c| c.items.iter())
            .filter(|item| seen.insert(item.id.clone()))
            .map(|item| item.id.clone())
            .collect()
    }

    pub fn total_items(&self) -> usize {
        self.item_ids().len()
    }

    /// Ítems respondidos (unión por id, nunca suma de clics)
    pub fn answered_items(&self) -> usize {
        self.answers.len()
    }

    /// round(100 * respondidos / total), 0 cuando no hay ítems
    pub fn completion_percent(&self) -> u8 {
        let total = self.total_items();
        if total == 0 {
            return 0;
        }
        let ratio = self.answered_items() as f64 / total as f64;
        (ratio * 100.0).round().min(100.0) as u8
    }

    /// Un resultado por ítem respondido, en orden de render
    pub fn results(&self) -> Vec<ChecklistResult> {
        self.item_ids()
            .into_iter()
            .filter_map(|item_id| {
                let estado = self.answer(&item_id)?;
                let observacion = self.observation(&item_id).to_string();
                Some(ChecklistResult { item_id, estado, observacion })
            })
            .collect()
    }

    fn has_item(&self, item_id: &EntityId) -> bool {
        self.categories
            .iter()
            .any(|c| c.items.iter().any(|item| &item.id == item_id))
    }

    /// Único camino de respuesta: clic manual, "todo OK" de categoría y llenado global
    fn record_answer(&mut self, item_id: EntityId, state: ItemState) -> Option<Command> {
        if !self.has_item(&item_id) {
            log::debug!("⚠️ [CHECKLIST] Respuesta para ítem desconocido {}, ignorada", item_id);
            return None;
        }
        self.answers.insert(item_id.clone(), state);
        if state.needs_observation() {
            Some(Command::FocusObservation(item_id))
        } else {
            None
        }
    }

    /// Respuestas y observaciones solo existen sobre un formulario dibujado
    fn requires_rendered(input: &ChecklistInput) -> bool {
        matches!(
            input,
            ChecklistInput::ItemAnswered { .. }
                | ChecklistInput::ObservationEdited { .. }
                | ChecklistInput::CategoryMarkedGood(_)
        )
    }

    /// Aplicar una entrada y devolver qué re-renderizar y qué efectos ejecutar
    pub fn apply(&mut self, input: ChecklistInput) -> Transition {
        if self.phase == ChecklistPhase::Idle && Self::requires_rendered(&input) {
            log::debug!("⚠️ [CHECKLIST] Entrada {:?} sin categorías dibujadas, ignorada", input);
            return Transition::default();
        }
        match input {
            ChecklistInput::InspectionTypeSelected(tipo) => {
                let tipo = tipo.trim().to_string();
                if tipo.is_empty() {
                    self.inspection_type = None;
                    return Transition::default();
                }
                self.inspection_type = Some(tipo.clone());
                Transition::command(Command::FetchCategories(tipo))
            }
            ChecklistInput::CategoriesLoaded(categories) => {
                // Set nuevo: el DOM anterior se reemplaza completo y sus respuestas con él
                self.categories = categories;
                self.answers.clear();
                self.observations.clear();
                self.phase = ChecklistPhase::Rendered;
                Transition::render(UpdateType::FullRender)
            }
            ChecklistInput::VehicleSelected(vehicle_id) => {
                let vehicle_id = vehicle_id.trim().to_string();
                if vehicle_id.is_empty() {
                    self.vehicle_id = None;
                    return Transition::default();
                }
                self.vehicle_id = Some(vehicle_id.clone());
                Transition::command(Command::FetchAutofill(vehicle_id))
            }
            ChecklistInput::AutofillLoaded(datos) => {
                self.autofill = Some(datos);
                let mut transition = Transition::render(UpdateType::Incremental(IncrementalUpdate::Autofill));
                if let Some(tipo) = &self.inspection_type {
                    transition.commands.push(Command::FetchCategories(tipo.clone()));
                }
                transition
            }
            ChecklistInput::ItemAnswered { item_id, state } => {
                let mut transition = Transition::render(UpdateType::Incremental(IncrementalUpdate::Answers));
                transition.commands.extend(self.record_answer(item_id, state));
                transition
            }
            ChecklistInput::ObservationEdited { item_id, text } => {
                if !self.has_item(&item_id) {
                    return Transition::default();
                }
                self.observations.insert(item_id, text);
                // El input ya muestra el texto; solo cambia el JSON oculto
                Transition::default()
            }
            ChecklistInput::CategoryMarkedGood(category_id) => {
                let item_ids: Vec<EntityId> = match self.categories.iter().find(|c| c.id == category_id) {
                    Some(category) => category.items.iter().map(|item| item.id.clone()).collect(),
                    None => {
                        log::warn!("⚠️ [CHECKLIST] Categoría {} no existe", category_id);
                        return Transition::default();
                    }
                };
                for item_id in item_ids {
                    self.record_answer(item_id, ItemState::Good);
                }
                log::info!("✅ [CHECKLIST] Categoría {} completada como OK", category_id);
                Transition::render(UpdateType::Incremental(IncrementalUpdate::Answers))
            }
            ChecklistInput::FillAllGood { odometer } => {
                // Sin categorías solo se escribe el odómetro
                if self.phase == ChecklistPhase::Idle {
                    return Transition::command(Command::SetOdometer(odometer));
                }
                for item_id in self.item_ids() {
                    self.record_answer(item_id, ItemState::Good);
                }
                let mut transition = Transition::render(UpdateType::Incremental(IncrementalUpdate::Answers));
                transition.commands.push(Command::SetOdometer(odometer));
                transition
            }
        }
    }
}
