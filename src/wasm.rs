//! WebAssembly bindings for the search overlay.
//!
//! The page loads `assets/lupa.js`, which constructs one [`SiteSearch`] and
//! executes the effects every method returns. Effects cross the boundary as
//! plain JS objects tagged with a `type` field (see [`Effect`]).
//!
//! Time is passed in from `performance.now()`; `Instant` doesn't exist here.

use crate::config::SearchConfig;
use crate::error::Error;
use crate::overlay::{Effect, KeyPress, Overlay};
use crate::types::Corpus;
use serde_wasm_bindgen::{from_value, to_value};
use std::time::Duration;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = error)]
    fn console_error(s: &str);
    #[wasm_bindgen(js_namespace = console, js_name = warn)]
    fn console_warn(s: &str);
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn console_log(s: &str);
}

/// Forwards `log` records to the browser console.
struct ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[lupa] {}", record.args());
        match record.level() {
            log::Level::Error => console_error(&line),
            log::Level::Warn => console_warn(&line),
            _ => console_log(&line),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

fn install_logger() {
    // Fails if a logger is already set, which is fine.
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Warn);
    }
}

fn millis(now: f64) -> Duration {
    Duration::try_from_secs_f64(now / 1000.0).unwrap_or_default()
}

fn effects_to_js(effects: &[Effect]) -> Result<JsValue, JsValue> {
    to_value(effects).map_err(|e| e.to_string().into())
}

/// WASM-accessible overlay controller. One per page.
#[wasm_bindgen]
pub struct SiteSearch {
    overlay: Overlay,
}

#[wasm_bindgen]
impl SiteSearch {
    /// Create the controller. `config` is an optional partial config object;
    /// missing fields take their defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: Option<JsValue>) -> Result<SiteSearch, JsValue> {
        install_logger();
        let config: SearchConfig = match config {
            Some(value) if !value.is_undefined() && !value.is_null() => {
                from_value(value).map_err(|e| e.to_string())?
            }
            _ => SearchConfig::default(),
        };
        config.validate().map_err(|e| e.to_string())?;
        Ok(SiteSearch {
            overlay: Overlay::new(config),
        })
    }

    #[wasm_bindgen]
    pub fn init(&self) -> Result<JsValue, JsValue> {
        effects_to_js(&self.overlay.init())
    }

    #[wasm_bindgen]
    pub fn open(&mut self) -> Result<JsValue, JsValue> {
        effects_to_js(&self.overlay.open())
    }

    #[wasm_bindgen]
    pub fn close(&mut self) -> Result<JsValue, JsValue> {
        effects_to_js(&self.overlay.close())
    }

    #[wasm_bindgen]
    pub fn toggle(&mut self) -> Result<JsValue, JsValue> {
        effects_to_js(&self.overlay.toggle())
    }

    #[wasm_bindgen]
    pub fn destroy(&mut self) -> Result<JsValue, JsValue> {
        effects_to_js(&self.overlay.destroy())
    }

    #[wasm_bindgen]
    pub fn input(&mut self, text: &str, now: f64) -> Result<JsValue, JsValue> {
        effects_to_js(&self.overlay.input(text, millis(now)))
    }

    #[wasm_bindgen]
    pub fn tick(&mut self, now: f64) -> Result<JsValue, JsValue> {
        effects_to_js(&self.overlay.tick(millis(now)))
    }

    /// Key pressed inside the input: `{ key, ctrl, meta }`.
    #[wasm_bindgen]
    pub fn key(&mut self, press: JsValue) -> Result<JsValue, JsValue> {
        let press: KeyPress = from_value(press).map_err(|e| e.to_string())?;
        effects_to_js(&self.overlay.key(&press))
    }

    /// Key pressed anywhere on the page: `{ key, ctrl, meta }`.
    #[wasm_bindgen(js_name = globalKey)]
    pub fn global_key(&mut self, press: JsValue) -> Result<JsValue, JsValue> {
        let press: KeyPress = from_value(press).map_err(|e| e.to_string())?;
        effects_to_js(&self.overlay.global_key(&press))
    }

    /// Both files fetched. Parse errors are handled like fetch errors.
    #[wasm_bindgen(js_name = loadComplete)]
    pub fn load_complete(
        &mut self,
        index_json: &str,
        articles_json: &str,
    ) -> Result<JsValue, JsValue> {
        let parsed = Corpus::from_json(
            index_json.as_bytes(),
            articles_json.as_bytes(),
            self.overlay.config(),
        );
        let effects = match parsed {
            Ok(corpus) => self.overlay.load_succeeded(corpus),
            Err(err) => self.overlay.load_failed(&err),
        };
        effects_to_js(&effects)
    }

    #[wasm_bindgen(js_name = loadFailed)]
    pub fn load_failed(&mut self, message: &str) -> Result<JsValue, JsValue> {
        effects_to_js(&self.overlay.load_failed(&Error::Host(message.to_string())))
    }

    #[wasm_bindgen(js_name = isOpen)]
    pub fn is_open(&self) -> bool {
        self.overlay.is_open()
    }

    /// Current state name: "closed", "empty", "loading", "results", "noResults".
    #[wasm_bindgen]
    pub fn state(&self) -> Result<JsValue, JsValue> {
        to_value(&self.overlay.state()).map_err(|e| e.to_string().into())
    }
}
