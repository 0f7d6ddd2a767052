//! Chart Component
//!
//! Hands a [`ChartConfig`] to Chart.js on a canvas. Tooltip text, tick
//! labels and the line fill gradient are computed in Rust and attached as
//! callbacks.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Function, Object, Reflect, JSON};
use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use joina::chart::{registry, ChartConfig, TickFormat};
use joina::chart::config::LINE_FILL_FALLBACK;

type JsCallback = Closure<dyn Fn(JsValue) -> JsValue>;

/// A live Chart.js instance. Dropping it destroys the chart.
struct RenderedChart {
    chart: JsValue,
    _callbacks: Vec<JsCallback>,
}

impl Drop for RenderedChart {
    fn drop(&mut self) {
        if let Err(e) = call_method(&self.chart, "destroy", &Array::new()) {
            web_sys::console::error_1(&e);
        }
    }
}

/// Canvas holding one chart
#[component]
pub fn ChartCanvas(config: ChartConfig) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let rendered: Rc<RefCell<Option<RenderedChart>>> = Rc::new(RefCell::new(None));

    let holder = Rc::clone(&rendered);
    create_effect(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        if holder.borrow().is_some() {
            return;
        }

        match render(&canvas, &config) {
            Ok(chart) => *holder.borrow_mut() = Some(chart),
            Err(e) => web_sys::console::error_1(&e),
        }
    });

    on_cleanup(move || {
        rendered.borrow_mut().take();
    });

    view! {
        <canvas node_ref=canvas_ref class="w-full h-full" />
    }
}

/// Register the chart elements with Chart.js
pub fn register_elements() {
    let registry = registry::init();

    let result = (|| -> Result<(), JsValue> {
        let chart = chart_constructor()?;
        let elements = Array::new();
        for name in registry.elements() {
            let element = Reflect::get(&chart, &name.into())?;
            if !element.is_undefined() {
                elements.push(&element);
            }
        }
        call_method(&chart, "register", &elements)?;
        Ok(())
    })();

    if let Err(e) = result {
        web_sys::console::error_1(&e);
    }
}

fn chart_constructor() -> Result<Function, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    Reflect::get(&window, &"Chart".into())?
        .dyn_into::<Function>()
        .map_err(|_| JsValue::from_str("Chart.js is not loaded"))
}

fn render(canvas: &HtmlCanvasElement, config: &ChartConfig) -> Result<RenderedChart, JsValue> {
    registry::require(registry::get(), config.kind)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let constructor = chart_constructor()?;
    let js_config = JSON::parse(&config.to_json().to_string())?;
    let shared = Rc::new(config.clone());
    let mut callbacks = Vec::new();

    attach_tooltip(&js_config, &shared, &mut callbacks)?;

    if config.options.y_tick_format() == Some(TickFormat::Thousands) {
        let ticks = lookup(&js_config, &["options", "scales", "y", "ticks"])?;
        let cfg = Rc::clone(&shared);
        let callback: JsCallback = Closure::wrap(Box::new(move |value: JsValue| {
            JsValue::from_str(&cfg.y_tick(value.as_f64().unwrap_or(0.0)))
        }));
        Reflect::set(&ticks, &"callback".into(), callback.as_ref())?;
        callbacks.push(callback);
    }

    if let Some(stops) = config.fill_gradient() {
        let datasets = Array::from(&lookup(&js_config, &["data", "datasets"])?);
        let callback: JsCallback = Closure::wrap(Box::new(move |context: JsValue| {
            fill_gradient(&context, stops).unwrap_or_else(|_| LINE_FILL_FALLBACK.into())
        }));
        for dataset in datasets.iter() {
            Reflect::set(&dataset, &"backgroundColor".into(), callback.as_ref())?;
        }
        callbacks.push(callback);
    }

    let chart = Reflect::construct(&constructor, &Array::of2(canvas.as_ref(), &js_config))?;

    Ok(RenderedChart {
        chart,
        _callbacks: callbacks,
    })
}

fn attach_tooltip(
    js_config: &JsValue,
    config: &Rc<ChartConfig>,
    callbacks: &mut Vec<JsCallback>,
) -> Result<(), JsValue> {
    let tooltip = lookup(js_config, &["options", "plugins", "tooltip"])?;
    let hooks = Object::new();

    let cfg = Rc::clone(config);
    let label: JsCallback = Closure::wrap(Box::new(move |item: JsValue| {
        let (dataset, index) = item_position(&item);
        cfg.tooltip(dataset, index)
            .map(|text| JsValue::from_str(&text.label))
            .unwrap_or(JsValue::UNDEFINED)
    }));
    Reflect::set(&hooks, &"label".into(), label.as_ref())?;
    callbacks.push(label);

    let cfg = Rc::clone(config);
    let title: JsCallback = Closure::wrap(Box::new(move |items: JsValue| {
        let first = Array::from(&items).get(0);
        let (dataset, index) = item_position(&first);
        match cfg.tooltip(dataset, index).and_then(|text| text.title) {
            Some(title) => JsValue::from_str(&title),
            None => Reflect::get(&first, &"label".into()).unwrap_or(JsValue::UNDEFINED),
        }
    }));
    Reflect::set(&hooks, &"title".into(), title.as_ref())?;
    callbacks.push(title);

    Reflect::set(&tooltip, &"callbacks".into(), &hooks)?;
    Ok(())
}

/// Dataset and data index of a Chart.js tooltip item
fn item_position(item: &JsValue) -> (usize, usize) {
    let read = |key: &str| {
        Reflect::get(item, &key.into())
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as usize
    };
    (read("datasetIndex"), read("dataIndex"))
}

/// Vertical gradient over the chart area; the fallback color is used
/// until the chart has been laid out
fn fill_gradient(context: &JsValue, stops: &[(f64, &str)]) -> Result<JsValue, JsValue> {
    let chart = Reflect::get(context, &"chart".into())?;
    let area = Reflect::get(&chart, &"chartArea".into())?;
    if area.is_undefined() || area.is_null() {
        return Ok(LINE_FILL_FALLBACK.into());
    }

    let bottom = Reflect::get(&area, &"bottom".into())?;
    let top = Reflect::get(&area, &"top".into())?;
    let ctx = Reflect::get(&chart, &"ctx".into())?;

    let origin = JsValue::from_f64(0.0);
    let args = Array::of4(&origin, &bottom, &origin, &top);
    let gradient = call_method(&ctx, "createLinearGradient", &args)?;
    for (offset, color) in stops {
        call_method(
            &gradient,
            "addColorStop",
            &Array::of2(&(*offset).into(), &(*color).into()),
        )?;
    }

    Ok(gradient)
}

fn lookup(root: &JsValue, path: &[&str]) -> Result<JsValue, JsValue> {
    let mut current = root.clone();
    for key in path {
        current = Reflect::get(&current, &(*key).into())?;
        if current.is_undefined() {
            return Err(format!("missing chart option: {}", path.join(".")).into());
        }
    }
    Ok(current)
}

fn call_method(target: &JsValue, name: &str, args: &Array) -> Result<JsValue, JsValue> {
    let method = Reflect::get(target, &name.into())?.dyn_into::<Function>()?;
    Reflect::apply(&method, target, args)
}
