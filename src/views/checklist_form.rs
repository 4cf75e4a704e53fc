// ============================================================================
// CHECKLIST FORM VIEW - Proyección del ChecklistModel sobre el DOM
// ============================================================================
// render_checklist: re-render completo (nuevo set de categorías). Cada input
// recibe su listener al crearse, ligado al id del ítem y al estado B/R/M que
// representa; no hay reconexión posterior de listeners.
// update_answers / update_summary: actualizaciones incrementales.
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, HtmlInputElement};
use gloo_timers::callback::Timeout;
use crate::dom::{
    append_child, attr_selector, clear_children, create_element, get_element_by_id, get_input_by_id,
    on_change, on_click, on_input, query_selector, query_selector_all_in, set_attribute, set_style,
    ElementBuilder,
};
use crate::models::{ChecklistCategory, ChecklistItem, EntityId, ItemState, checklist::serialize_results};
use crate::state::{ChecklistInput, ChecklistModel};
use crate::utils::*;

/// Canal por el que la vista entrega entradas tipadas al viewmodel
pub type Dispatch = Rc<dyn Fn(ChecklistInput)>;

/// Dibujar barra de progreso + tarjetas de categorías, reemplazando lo anterior
pub fn render_checklist(container: &Element, model: &ChecklistModel, dispatch: &Dispatch) -> Result<(), JsValue> {
    clear_children(container);
    append_child(container, &render_progress(model.completion_percent())?)?;
    for category in model.categories() {
        append_child(container, &render_category(category, model, dispatch)?)?;
    }
    Ok(())
}

fn render_progress(percent: u8) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("div")?
        .class("d-flex justify-content-between align-items-center mb-1")
        .child(ElementBuilder::new("span")?.class("fw-bold small text-primary").text("PROGRESO DE REVISIÓN").build())?
        .child(
            ElementBuilder::new("span")?
                .id(PROGRESS_TEXT_ID)?
                .class("badge bg-primary")
                .text(&format!("{}%", percent))
                .build(),
        )?
        .build();

    let bar = ElementBuilder::new("div")?
        .id(PROGRESS_BAR_ID)?
        .class("progress-bar bg-success progress-bar-striped")
        .attr("role", "progressbar")?
        .attr("style", &format!("width: {}%", percent))?
        .build();

    let track = ElementBuilder::new("div")?
        .class("progress")
        .attr("style", "height: 10px;")?
        .child(bar)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("sticky-progress mb-4 rounded-bottom")
        .child(header)?
        .child(track)?
        .build())
}

fn render_category(category: &ChecklistCategory, model: &ChecklistModel, dispatch: &Dispatch) -> Result<Element, JsValue> {
    let mark_all = ElementBuilder::new("button")?
        .class("btn btn-sm btn-light py-0")
        .attr("type", "button")?
        .text("✓ TODO OK")
        .build();
    {
        let dispatch = dispatch.clone();
        let category_id = category.id.clone();
        on_click(&mark_all, move |_| {
            dispatch(ChecklistInput::CategoryMarkedGood(category_id.clone()));
        })?;
    }

    let header = ElementBuilder::new("div")?
        .class("card-header bg-primary text-white d-flex justify-content-between align-items-center")
        .child(ElementBuilder::new("span")?.class("mb-0").text(&category.name).build())?
        .child(mark_all)?
        .build();

    let rows = category
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| render_item_row(index, item, model, dispatch))
        .collect::<Result<Vec<_>, JsValue>>()?;

    let body = ElementBuilder::new("div")?
        .id(&category_body_id(category.id.as_str()))?
        .class("card-body p-0")
        .children(rows)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("card checklist-category-card")
        .child(header)?
        .child(body)?
        .build())
}

fn render_item_row(index: usize, item: &ChecklistItem, model: &ChecklistModel, dispatch: &Dispatch) -> Result<Element, JsValue> {
    let info = ElementBuilder::new("div")?
        .class("item-info text-uppercase")
        .child(ElementBuilder::new("span")?.class("text-muted me-2").text(&format!("{}.", index + 1)).build())?
        .build();
    info.append_with_str_1(&item.name)?;

    let group = ElementBuilder::new("div")?.class("btn-group-mobile").build();
    let answer = model.answer(&item.id);
    for state in ItemState::ALL {
        let (radio, label) = render_radio(&item.id, state, answer == Some(state), dispatch)?;
        append_child(&group, &radio)?;
        append_child(&group, &label)?;
    }

    let observation = render_observation(&item.id, model, dispatch)?;

    Ok(ElementBuilder::new("div")?
        .class("checklist-row")
        .child(info)?
        .child(group)?
        .child(observation)?
        .build())
}

fn render_radio(item_id: &EntityId, state: ItemState, checked: bool, dispatch: &Dispatch) -> Result<(Element, Element), JsValue> {
    let radio_dom_id = radio_id(state.code(), item_id.as_str());
    let radio = create_element("input")?;
    set_attribute(&radio, "type", "radio")?;
    radio.set_class_name(&format!("btn-check {}", ITEM_RADIO_CLASS));
    set_attribute(&radio, "name", &format!("item_{}", item_id))?;
    set_attribute(&radio, "id", &radio_dom_id)?;
    set_attribute(&radio, "value", state.code())?;
    set_attribute(&radio, ITEM_ID_ATTR, item_id.as_str())?;
    if let Some(input) = radio.dyn_ref::<HtmlInputElement>() {
        input.set_checked(checked);
    }

    {
        let dispatch = dispatch.clone();
        let item_id = item_id.clone();
        on_change(&radio, move |_| {
            dispatch(ChecklistInput::ItemAnswered { item_id: item_id.clone(), state });
        })?;
    }

    let label = ElementBuilder::new("label")?
        .class(state.button_class())
        .attr("for", &radio_dom_id)?
        .text(state.code())
        .build();

    Ok((radio, label))
}

fn render_observation(item_id: &EntityId, model: &ChecklistModel, dispatch: &Dispatch) -> Result<Element, JsValue> {
    let observation = create_element("input")?;
    set_attribute(&observation, "type", "text")?;
    observation.set_class_name(&format!("form-control {}", ITEM_OBSERVATION_CLASS));
    set_attribute(&observation, ITEM_ID_ATTR, item_id.as_str())?;
    set_attribute(&observation, "placeholder", "Nota si hay falla...")?;
    if let Some(input) = observation.dyn_ref::<HtmlInputElement>() {
        input.set_value(model.observation(item_id));
    }
    set_style(&observation, "border", observation_border(model.is_highlighted(item_id)))?;

    let handler = {
        let dispatch = dispatch.clone();
        let item_id = item_id.clone();
        move |event: Event| {
            if let Some(text) = event_input_value(&event) {
                dispatch(ChecklistInput::ObservationEdited { item_id: item_id.clone(), text });
            }
        }
    };
    on_input(&observation, handler.clone())?;
    on_change(&observation, handler)?;

    Ok(observation)
}

fn event_input_value(event: &Event) -> Option<String> {
    event
        .target()
        .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
}

fn observation_border(highlighted: bool) -> &'static str {
    if highlighted {
        OBSERVATION_BORDER_ALERT
    } else {
        OBSERVATION_BORDER_NORMAL
    }
}

/// Sincronizar radios marcados y bordes de observación con el modelo
pub fn update_answers(container: &Element, model: &ChecklistModel) -> Result<(), JsValue> {
    for radio in query_selector_all_in(container, &format!(".{}", ITEM_RADIO_CLASS))? {
        let (Some(item_id), Some(code)) = (radio.get_attribute(ITEM_ID_ATTR), radio.get_attribute("value")) else {
            continue;
        };
        let checked = match ItemState::from_code(&code) {
            Some(state) => model.answer(&EntityId::new(item_id)) == Some(state),
            None => false,
        };
        if let Some(input) = radio.dyn_ref::<HtmlInputElement>() {
            input.set_checked(checked);
        }
    }

    for observation in query_selector_all_in(container, &format!(".{}", ITEM_OBSERVATION_CLASS))? {
        if let Some(item_id) = observation.get_attribute(ITEM_ID_ATTR) {
            let highlighted = model.is_highlighted(&EntityId::new(item_id));
            set_style(&observation, "border", observation_border(highlighted))?;
        }
    }
    Ok(())
}

/// Barra de progreso + JSON del input oculto. Se llama en cada cambio del modelo.
pub fn update_summary(model: &ChecklistModel) -> Result<(), JsValue> {
    let percent = model.completion_percent();
    if let Some(bar) = get_element_by_id(PROGRESS_BAR_ID) {
        set_style(&bar, "width", &format!("{}%", percent))?;
    }
    if let Some(text) = get_element_by_id(PROGRESS_TEXT_ID) {
        text.set_text_content(Some(&format!("{}%", percent)));
    }

    if let Some(hidden) = get_input_by_id(RESULTS_INPUT_ID) {
        let json = serialize_results(&model.results()).map_err(|e| JsValue::from_str(&e))?;
        hidden.set_value(&json);
    }
    Ok(())
}

/// Llevar el foco al campo de observación del ítem.
/// Se difiere al siguiente tick: el blur del campo anterior dispara su
/// `change` y ese handler necesita el modelo libre.
pub fn focus_observation(item_id: &EntityId) {
    let selector = attr_selector(&format!("input.{}", ITEM_OBSERVATION_CLASS), ITEM_ID_ATTR, item_id.as_str());
    Timeout::new(0, move || {
        if let Ok(Some(element)) = query_selector(&selector) {
            if let Some(input) = element.dyn_ref::<HtmlElement>() {
                let _ = input.focus();
            }
        }
    })
    .forget();
}

/// Escribir el valor del odómetro (llenado de desarrollo)
pub fn set_odometer(value: &str) {
    match get_input_by_id(ODOMETER_INPUT_ID) {
        Some(input) => input.set_value(value),
        None => log::warn!("⚠️ [CHECKLIST] #{} no existe", ODOMETER_INPUT_ID),
    }
}
