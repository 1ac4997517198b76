//! WebAssembly entry point and DOM wiring.

use crate::app::App;
use crate::css::{css_color, theme_icon_id};
use crate::error::AppError;
use crate::loader::{decode_files, file_list_to_vec};
use crate::params::UrlParams;
use dragon_core::{CanvasConfig, PointerEvent, Theme};
use kurbo::{Point, Size};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, DragEvent, Element, Event, EventTarget, File, HtmlCanvasElement, HtmlElement,
    HtmlInputElement, MouseEvent, Window,
};

const CANVAS_ID: &str = "canvas";
const LOADER_ID: &str = "imageLoader";
const THEME_ID: &str = "theme";
/// Optional `<script type="application/json">` holding a base configuration.
const CONFIG_ID: &str = "dragon-config";

impl From<AppError> for JsValue {
    fn from(err: AppError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

fn js_error(err: JsValue) -> AppError {
    AppError::Js(format!("{err:?}"))
}

/// Initialize and run the WASM application.
#[wasm_bindgen(start)]
pub fn run_wasm() -> Result<(), JsValue> {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| AppError::Js("no window".to_string()))?;
    let location = window.location();
    let params = UrlParams::from_parts(
        &location.search().unwrap_or_default(),
        &location.hash().unwrap_or_default(),
    );

    console_log::init_with_level(params.log_level())
        .map_err(|err| AppError::Js(err.to_string()))?;
    log::info!("Starting DragON (WASM)");

    let document = window
        .document()
        .ok_or_else(|| AppError::Js("no document".to_string()))?;
    let config = load_config(&document, &params);
    let canvas: HtmlCanvasElement = element(&document, CANVAS_ID)?;

    let seed = js_sys::Math::random().to_bits();
    let app = Rc::new(RefCell::new(App::new(canvas.clone(), config, seed)?));
    apply_theme(&document, &canvas, config.theme)?;

    wire_pointer(&canvas, &app)?;
    wire_file_input(&document, &app)?;
    wire_drop(&canvas, &app)?;
    wire_theme(&document, &canvas, &app)?;
    wire_resize(&window, &app)?;

    app.borrow_mut().resize(window_size(&window));
    Ok(())
}

fn element<T: JsCast>(document: &Document, id: &'static str) -> Result<T, AppError> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or(AppError::MissingElement(id))
}

/// Embedded JSON configuration, then URL overrides.
fn load_config(document: &Document, params: &UrlParams) -> CanvasConfig {
    let mut config = embedded_config(document).unwrap_or_else(|err| {
        log::warn!("Using default configuration: {err}");
        CanvasConfig::default()
    });
    params.apply(&mut config);
    config
}

fn embedded_config(document: &Document) -> Result<CanvasConfig, AppError> {
    match document
        .get_element_by_id(CONFIG_ID)
        .and_then(|el| el.text_content())
    {
        Some(json) => Ok(CanvasConfig::from_json(&json)?),
        None => Ok(CanvasConfig::default()),
    }
}

fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), AppError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_error)?;
    closure.forget();
    Ok(())
}

fn client_point(event: &MouseEvent) -> Point {
    Point::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

fn wire_pointer(canvas: &HtmlCanvasElement, app: &Rc<RefCell<App>>) -> Result<(), AppError> {
    let events: [(&str, fn(Point) -> PointerEvent); 2] = [
        ("mousedown", |position| PointerEvent::Down { position }),
        ("mousemove", |position| PointerEvent::Move { position }),
    ];
    for (name, make) in events {
        let app = app.clone();
        listen(canvas, name, move |event| {
            if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                let mut app = app.borrow_mut();
                let position = app.to_canvas(client_point(mouse));
                app.handle_pointer(make(position));
            }
        })?;
    }

    let released = app.clone();
    listen(canvas, "mouseup", move |_| {
        released.borrow_mut().handle_pointer(PointerEvent::Up);
    })?;
    let left = app.clone();
    listen(canvas, "mouseout", move |_| {
        left.borrow_mut().handle_pointer(PointerEvent::Leave);
    })
}

async fn load_files(app: Rc<RefCell<App>>, files: Vec<File>) {
    log::info!("Loading {} file(s)", files.len());
    decode_files(files, |decoded, bitmap| {
        app.borrow_mut().add_image(decoded, bitmap);
    })
    .await;
}

fn wire_file_input(document: &Document, app: &Rc<RefCell<App>>) -> Result<(), AppError> {
    let input: HtmlInputElement = element(document, LOADER_ID)?;
    let app = app.clone();
    let target = input.clone();
    listen(&target, "change", move |_| {
        let Some(files) = input.files() else { return };
        let files = file_list_to_vec(&files);
        // Reset so picking the same file again fires `change`.
        input.set_value("");
        wasm_bindgen_futures::spawn_local(load_files(app.clone(), files));
    })
}

fn wire_drop(canvas: &HtmlCanvasElement, app: &Rc<RefCell<App>>) -> Result<(), AppError> {
    listen(canvas, "dragover", |event| {
        event.prevent_default();
        event.stop_propagation();
    })?;

    let app = app.clone();
    listen(canvas, "drop", move |event| {
        event.prevent_default();
        event.stop_propagation();
        let Some(files) = event
            .dyn_ref::<DragEvent>()
            .and_then(|drag| drag.data_transfer())
            .and_then(|data| data.files())
        else {
            return;
        };
        let files = file_list_to_vec(&files);
        wasm_bindgen_futures::spawn_local(load_files(app.clone(), files));
    })
}

/// Paint the canvas background and show the matching theme icon.
fn apply_theme(
    document: &Document,
    canvas: &HtmlCanvasElement,
    theme: Theme,
) -> Result<(), AppError> {
    canvas
        .style()
        .set_property("background-color", &css_color(theme.background()))
        .map_err(js_error)?;

    let icons = document.query_selector_all(".icon").map_err(js_error)?;
    let visible = theme_icon_id(theme);
    for i in 0..icons.length() {
        if let Some(icon) = icons.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            icon.class_list()
                .toggle_with_force("hidden", icon.id() != visible)
                .map_err(js_error)?;
        }
    }
    Ok(())
}

fn wire_theme(
    document: &Document,
    canvas: &HtmlCanvasElement,
    app: &Rc<RefCell<App>>,
) -> Result<(), AppError> {
    let button: HtmlElement = element(document, THEME_ID)?;
    let document = document.clone();
    let canvas = canvas.clone();
    let app = app.clone();
    listen(&button, "click", move |_| {
        let theme = app.borrow_mut().toggle_theme();
        if let Err(err) = apply_theme(&document, &canvas, theme) {
            log::error!("Theme switch failed: {err}");
        }
    })
}

fn window_size(window: &Window) -> Size {
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Size::new(width, height)
}

fn wire_resize(window: &Window, app: &Rc<RefCell<App>>) -> Result<(), AppError> {
    let app = app.clone();
    let source = window.clone();
    listen(window, "resize", move |_| {
        app.borrow_mut().resize(window_size(&source));
    })
}
