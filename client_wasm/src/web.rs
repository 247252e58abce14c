//! Browser glue: DOM listeners, animation-frame driver and offline worker registration

use std::cell::RefCell;
use std::rc::Rc;

use game_core::build_scene;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent, Window};

use crate::audio::WebAudio;
use crate::canvas::{fit, CanvasSize};
use crate::frontend::Frontend;
use crate::hud::DomHud;
use crate::renderer::Renderer;
use crate::storage::LocalStore;

pub const OFFLINE_WORKER_URL: &str = "service-worker.js";

type WebFrontend = Frontend<WebAudio, LocalStore, DomHud>;

pub struct App {
    frontend: WebFrontend,
    renderer: Renderer,
    last_frame_ms: Option<f64>,
}

impl App {
    fn on_frame(&mut self, now_ms: f64) {
        let dt = self
            .last_frame_ms
            .map(|last| ((now_ms - last) / 1000.0).max(0.0))
            .unwrap_or(0.0);
        self.last_frame_ms = Some(now_ms);

        self.frontend.tick(dt as f32);

        let scene = build_scene(&self.frontend.session);
        if let Err(e) = self.renderer.draw(&scene) {
            tracing::warn!(error = %e, "frame dropped");
        }
    }

    fn on_resize(&mut self, size: CanvasSize) {
        self.renderer.resize(size);
        self.frontend.resize(size.viewport());
    }
}

fn js_error<E: Into<String>>(msg: E) -> JsValue {
    JsValue::from_str(&msg.into())
}

fn run_seed() -> u64 {
    let entropy = (js_sys::Math::random() * u32::MAX as f64) as u64;
    js_sys::Date::now().to_bits() ^ (entropy << 21)
}

#[wasm_bindgen(start)]
pub fn start() {
    crate::logging::init();
}

/// Build the game on `canvas` and start the frame loop
#[wasm_bindgen]
pub fn init_client(canvas: HtmlCanvasElement) -> js_sys::Promise {
    wasm_bindgen_futures::future_to_promise(async move {
        let window = web_sys::window().ok_or_else(|| js_error("no window"))?;
        let document = window.document().ok_or_else(|| js_error("no document"))?;

        let size = fit(&window, &canvas);
        let renderer = Renderer::new(canvas.clone(), size).await.map_err(js_error)?;

        let frontend = Frontend::new(
            size.viewport(),
            run_seed(),
            WebAudio::new(),
            LocalStore::new(&window),
            DomHud::new(&document),
        );
        let app = Rc::new(RefCell::new(App {
            frontend,
            renderer,
            last_frame_ms: None,
        }));

        attach_listeners(&window, &canvas, &app)?;
        start_frame_loop(window.clone(), app)?;
        register_offline_worker(&window);

        tracing::info!(
            width = size.css_width,
            height = size.css_height,
            dpr = size.dpr,
            "client started"
        );
        Ok(JsValue::UNDEFINED)
    })
}

fn first_touch_y(event: &TouchEvent) -> Option<f32> {
    event.touches().get(0).map(|touch| touch.client_y() as f32)
}

fn attach_listeners(
    window: &Window,
    canvas: &HtmlCanvasElement,
    app: &Rc<RefCell<App>>,
) -> Result<(), JsValue> {
    // Touch start
    {
        let app = app.clone();
        let closure = Closure::wrap(Box::new(move |evt: TouchEvent| {
            evt.prevent_default();
            if let Some(y) = first_touch_y(&evt) {
                app.borrow_mut().frontend.gesture_start(y);
            }
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Touch move
    {
        let app = app.clone();
        let closure = Closure::wrap(Box::new(move |evt: TouchEvent| {
            evt.prevent_default();
            if let Some(y) = first_touch_y(&evt) {
                app.borrow_mut().frontend.gesture_move(y, true);
            }
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Touch end
    {
        let app = app.clone();
        let closure = Closure::wrap(Box::new(move |evt: TouchEvent| {
            evt.prevent_default();
            app.borrow_mut().frontend.gesture_end();
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Mouse down
    {
        let app = app.clone();
        let closure = Closure::wrap(Box::new(move |evt: MouseEvent| {
            app.borrow_mut().frontend.gesture_start(evt.client_y() as f32);
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Mouse move, only while a button is held
    {
        let app = app.clone();
        let closure = Closure::wrap(Box::new(move |evt: MouseEvent| {
            app.borrow_mut()
                .frontend
                .gesture_move(evt.client_y() as f32, evt.buttons() != 0);
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Mouse up anywhere in the window
    {
        let app = app.clone();
        let closure = Closure::wrap(Box::new(move |_evt: MouseEvent| {
            app.borrow_mut().frontend.gesture_end();
        }) as Box<dyn FnMut(_)>);
        window.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Keyboard down
    {
        let app = app.clone();
        let closure = Closure::wrap(Box::new(move |evt: KeyboardEvent| {
            app.borrow_mut().frontend.key_down(&evt.key());
        }) as Box<dyn FnMut(_)>);
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Keyboard up
    {
        let app = app.clone();
        let closure = Closure::wrap(Box::new(move |evt: KeyboardEvent| {
            app.borrow_mut().frontend.key_up(&evt.key());
        }) as Box<dyn FnMut(_)>);
        window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Resize
    {
        let app = app.clone();
        let window_resize = window.clone();
        let canvas_resize = canvas.clone();
        let closure = Closure::wrap(Box::new(move || {
            let size = fit(&window_resize, &canvas_resize);
            app.borrow_mut().on_resize(size);
        }) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

fn start_frame_loop(window: Window, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
    let callback = Rc::new(RefCell::new(None::<Closure<dyn FnMut(f64)>>));
    let callback_clone = callback.clone();
    let window_clone = window.clone();

    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        app.borrow_mut().on_frame(now_ms);

        // Schedule next frame
        if let Some(cb) = callback_clone.borrow().as_ref() {
            if let Err(e) = window_clone.request_animation_frame(cb.as_ref().unchecked_ref()) {
                tracing::error!(?e, "requestAnimationFrame failed");
            }
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(cb) = callback.borrow().as_ref() {
        window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }

    // The closure holds a clone of `callback`, keeping itself alive
    std::mem::forget(callback);
    Ok(())
}

fn register_offline_worker(window: &Window) {
    let navigator = window.navigator();
    let supported = js_sys::Reflect::has(&navigator, &JsValue::from_str("serviceWorker")).unwrap_or(false);
    if !supported {
        tracing::info!("service workers unsupported; running online only");
        return;
    }

    let promise = navigator.service_worker().register(OFFLINE_WORKER_URL);
    wasm_bindgen_futures::spawn_local(async move {
        match wasm_bindgen_futures::JsFuture::from(promise).await {
            Ok(_) => tracing::info!(url = OFFLINE_WORKER_URL, "offline worker registered"),
            Err(e) => tracing::warn!(?e, "offline worker registration failed"),
        }
    });
}
