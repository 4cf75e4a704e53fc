// ============================================================================
// CHECKLIST VIEWMODEL - Estado + lógica UI del formulario de inspección
// ============================================================================
// Toda interacción entra como ChecklistInput por dispatch(): el modelo decide
// la transición, este viewmodel proyecta el resultado en el DOM y ejecuta los
// efectos (fetch, foco, odómetro).
// ============================================================================

use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement, HtmlSelectElement};
use crate::config::CONFIG;
use crate::dom::{get_element_by_id, on_change};
use crate::models::EntityId;
use crate::services::ApiClient;
use crate::state::{ChecklistInput, ChecklistModel, Command, IncrementalUpdate, ReactiveState, Transition, UpdateType};
use crate::utils::{INSPECTION_TYPE_SELECT_ID, VEHICLE_SELECT_ID};
use crate::views::{self, Dispatch};

pub struct ChecklistViewModel {
    model: Rc<ReactiveState<ChecklistModel>>,
    container: Element,
    api_client: ApiClient,
    weak_self: Weak<ChecklistViewModel>,
}

impl ChecklistViewModel {
    pub fn new(container: Element) -> Rc<Self> {
        let model = Rc::new(ReactiveState::new(ChecklistModel::new()));

        // Progreso y JSON oculto se recalculan en cada cambio del modelo
        let weak_model = Rc::downgrade(&model);
        model.subscribe(move || {
            if let Some(model) = weak_model.upgrade() {
                if let Err(e) = model.with(views::update_summary) {
                    log::error!("❌ [CHECKLIST] Error actualizando resumen: {:?}", e);
                }
            }
        });

        Rc::new_cyclic(|weak_self| Self {
            model,
            container,
            api_client: ApiClient::new(),
            weak_self: weak_self.clone(),
        })
    }

    /// Closure que las vistas usan para enviar entradas
    pub fn dispatcher(&self) -> Dispatch {
        let weak = self.weak_self.clone();
        Rc::new(move |input| {
            if let Some(vm) = weak.upgrade() {
                vm.dispatch(input);
            }
        })
    }

    /// Conectar los <select> de tipo de inspección y vehículo.
    /// Si la página vuelve con valores ya elegidos (error de validación), se cargan.
    pub fn bind(&self) -> Result<(), JsValue> {
        if let Some(vehicle_select) = get_element_by_id(VEHICLE_SELECT_ID) {
            let dispatch = self.dispatcher();
            on_change(&vehicle_select, move |event: Event| {
                dispatch(ChecklistInput::VehicleSelected(event_control_value(&event)));
            })?;
            if let Some(value) = control_value(&vehicle_select).filter(|v| !v.is_empty()) {
                self.dispatch(ChecklistInput::VehicleSelected(value));
            }
        } else {
            log::warn!("⚠️ [CHECKLIST] #{} no existe", VEHICLE_SELECT_ID);
        }

        if let Some(type_select) = get_element_by_id(INSPECTION_TYPE_SELECT_ID) {
            let dispatch = self.dispatcher();
            on_change(&type_select, move |event: Event| {
                dispatch(ChecklistInput::InspectionTypeSelected(event_control_value(&event)));
            })?;
            if let Some(value) = control_value(&type_select).filter(|v| !v.is_empty()) {
                self.dispatch(ChecklistInput::InspectionTypeSelected(value));
            }
        } else {
            log::warn!("⚠️ [CHECKLIST] #{} no existe", INSPECTION_TYPE_SELECT_ID);
        }

        log::info!("📋 [CHECKLIST] Formulario de inspección conectado");
        Ok(())
    }

    /// Punto único de entrada de la máquina de estados
    pub fn dispatch(&self, input: ChecklistInput) {
        let mut transition = Transition::default();
        self.model.update(|model| transition = model.apply(input));

        if let Some(update) = transition.update {
            if let Err(e) = self.project(update) {
                log::error!("❌ [CHECKLIST] Error actualizando DOM ({:?}): {:?}", update, e);
            }
        }
        for command in transition.commands {
            self.run(command);
        }
    }

    /// "✓ TODO OK" de una categoría
    pub fn mark_category_good(&self, category_id: &str) {
        self.dispatch(ChecklistInput::CategoryMarkedGood(EntityId::new(category_id)));
    }

    /// Llenado global (solo desarrollo)
    pub fn fill_all_for_testing(&self) {
        if !CONFIG.enable_dev_autofill {
            log::warn!("⚠️ [CHECKLIST] Llenado global deshabilitado (ENABLE_DEV_AUTOFILL=false)");
            return;
        }
        self.dispatch(ChecklistInput::FillAllGood {
            odometer: CONFIG.dev_km_value.clone(),
        });
    }

    fn project(&self, update: UpdateType) -> Result<(), JsValue> {
        match update {
            UpdateType::FullRender => {
                let dispatch = self.dispatcher();
                self.model.with(|model| views::render_checklist(&self.container, model, &dispatch))?;
                log::debug!("🔄 [CHECKLIST] Categorías re-renderizadas");
            }
            UpdateType::Incremental(IncrementalUpdate::Answers) => {
                self.model.with(|model| views::update_answers(&self.container, model))?;
            }
            UpdateType::Incremental(IncrementalUpdate::Autofill) => {
                let datos = self.model.with(|model| model.autofill().cloned());
                if let Some(datos) = datos {
                    views::render_autofill(&datos)?;
                }
            }
        }
        Ok(())
    }

    fn run(&self, command: Command) {
        match command {
            Command::FetchCategories(tipo) => {
                let api_client = self.api_client.clone();
                let weak = self.weak_self.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match api_client.get_categories(&tipo).await {
                        Ok(categories) => {
                            if let Some(vm) = weak.upgrade() {
                                vm.dispatch(ChecklistInput::CategoriesLoaded(categories));
                            }
                        }
                        Err(e) => log::error!("❌ [CHECKLIST] Error cargando categorías: {}", e),
                    }
                });
            }
            Command::FetchAutofill(vehicle_id) => {
                let api_client = self.api_client.clone();
                let weak = self.weak_self.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match api_client.get_autofill(&vehicle_id).await {
                        Ok(datos) => {
                            if let Some(vm) = weak.upgrade() {
                                vm.dispatch(ChecklistInput::AutofillLoaded(datos));
                            }
                        }
                        Err(e) => log::error!("❌ [CHECKLIST] Error cargando datos autocompletados: {}", e),
                    }
                });
            }
            Command::FocusObservation(item_id) => views::focus_observation(&item_id),
            Command::SetOdometer(value) => views::set_odometer(&value),
        }
    }
}

/// Valor de un <select> o <input>
fn control_value(element: &Element) -> Option<String> {
    if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        return Some(select.value());
    }
    element.dyn_ref::<HtmlInputElement>().map(|input| input.value())
}

fn event_control_value(event: &Event) -> String {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| control_value(&element))
        .unwrap_or_default()
}
