//! StudioDesk - Main Application Entry Point
//!
//! One window, one WebView, one wrapped site. The shell restores its
//! geometry from the encrypted preference store, attaches the navigation
//! policy to every browsing surface it creates, and keeps the tray and
//! menu in sync with the preference store. All decision logic lives in
//! `studiodesk-policy`; this binary only applies decisions.

mod autostart;
mod context;
mod ipc;
mod menu;
mod platform;
mod session;
mod single_instance;

use context::AppContext;
use ipc::IpcMessage;
use menu::{ids, AppMenu};
use muda::MenuEvent;
use single_instance::InstanceGuard;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use studiodesk_core::config::AppConfig;
use studiodesk_core::logging::{init_logging, LogConfig};
use studiodesk_core::{StudioDeskError, StudioDeskResult};
use studiodesk_policy::recovery::ERR_TIMED_OUT;
use studiodesk_policy::{
    sanitize_url_for_logging, LoadRecovery, NavigationDecision, NavigationPolicy,
};
use studiodesk_store::{keys, MachineKey, PreferenceStore, WindowBounds};
use tao::{
    dpi::{PhysicalPosition, PhysicalSize},
    event::{Event, StartCause, WindowEvent},
    event_loop::{ControlFlow, EventLoopBuilder, EventLoopProxy, EventLoopWindowTarget},
    window::{Fullscreen, Icon, Window, WindowBuilder, WindowId},
};
use tracing::{debug, error, info, warn};
use tray_icon::{TrayIcon, TrayIconBuilder, TrayIconEvent};
use wry::{PageLoadEvent, WebContext, WebView, WebViewBuilder};

const APP_NAME: &str = "StudioDesk";
const HELP_URL: &str = "https://support.google.com/youtube/";

/// Shown when the start URL cannot be loaded after the retry.
const ERROR_HTML: &str = include_str!("ui/error.html");

/// How long a top-level load may stay unsettled before it counts as failed.
const LOAD_TIMEOUT: Duration = Duration::from_secs(20);

const ZOOM_STEP: f64 = 0.1;

/// Events posted back into the event loop from handlers and worker threads.
#[derive(Debug, Clone)]
enum UserEvent {
    Menu(MenuEvent),
    Tray(TrayIconEvent),
    Ipc(IpcMessage),
    ShowWindow,
    OpenExternal(String),
    OpenPopup(String),
    LoadSettled { url: String },
    LoadTimedOut { generation: u64 },
    RetryStart,
}

fn main() {
    init_logging(LogConfig::default());
    info!("{} {} starting", APP_NAME, env!("CARGO_PKG_VERSION"));

    let config = AppConfig::default();
    if let Err(e) = std::fs::create_dir_all(&config.data_dir) {
        error!("Failed to create data directory {:?}: {}", config.data_dir, e);
    }

    let event_loop = EventLoopBuilder::<UserEvent>::with_user_event().build();
    let proxy = event_loop.create_proxy();

    // Refuse to run twice; a second launch surfaces the running window.
    let listener = match single_instance::acquire() {
        InstanceGuard::Primary(listener) => listener,
        InstanceGuard::Secondary => {
            info!("Another instance is already running, exiting");
            return;
        }
    };
    let show_proxy = proxy.clone();
    single_instance::spawn_listener(listener, move || {
        let _ = show_proxy.send_event(UserEvent::ShowWindow);
    });

    // Preference store, keyed to this machine.
    let machine_key = MachineKey::derive();
    let store = match PreferenceStore::open(config.store_path(), &machine_key) {
        Ok(store) => store,
        Err(e) => {
            error!("Cannot open preference store: {}", e);
            return;
        }
    };

    let bounds = store.window_bounds();
    let auto_start = store.preference_bool(keys::AUTO_START, false);
    let start_minimized = store.preference_bool(keys::START_MINIMIZED, false);

    let mut app_context = AppContext::new(config.clone(), NavigationPolicy::studio(), store);

    // Push the persisted auto-start preference into the OS toggle.
    match autostart::SystemLoginItem::new(APP_NAME) {
        Ok(item) => {
            if let Err(e) = autostart::reconcile(&item, auto_start) {
                warn!("Could not reconcile login item: {}", e);
            }
            app_context.login_item = Some(Box::new(item));
        }
        Err(e) => warn!("Login item unavailable: {}", e),
    }

    let context = Arc::new(Mutex::new(app_context));

    // Main window, restored to its saved geometry.
    let mut window_builder = WindowBuilder::new()
        .with_title(APP_NAME)
        .with_inner_size(PhysicalSize::new(bounds.width, bounds.height))
        .with_min_inner_size(PhysicalSize::new(config.min_width, config.min_height))
        .with_visible(false);
    if let (Some(x), Some(y)) = (bounds.x, bounds.y) {
        window_builder = window_builder.with_position(PhysicalPosition::new(x, y));
    }
    if let Some(icon) = create_window_icon() {
        window_builder = window_builder.with_window_icon(Some(icon));
    }
    let window = window_builder
        .build(&event_loop)
        .expect("Failed to create window");
    let main_window_id = window.id();

    let app_menu =
        AppMenu::build(auto_start, start_minimized).expect("Failed to build menus");
    if let Err(e) = platform::initialize_menu(&window, &app_menu.menu_bar) {
        error!("Failed to initialize menu: {}", e);
    }

    // Menu and tray events are forwarded into the event loop so everything
    // is handled in one place.
    let menu_proxy = proxy.clone();
    MenuEvent::set_event_handler(Some(move |event: MenuEvent| {
        let _ = menu_proxy.send_event(UserEvent::Menu(event));
    }));
    let tray_proxy = proxy.clone();
    TrayIconEvent::set_event_handler(Some(move |event: TrayIconEvent| {
        let _ = tray_proxy.send_event(UserEvent::Tray(event));
    }));

    // WebView over the persistent session partition.
    let mut web_context = WebContext::new(Some(config.partition_dir()));
    let allow_internal = Arc::new(AtomicBool::new(false));

    let load_proxy = proxy.clone();
    let ipc_proxy = proxy.clone();
    let bridge = ipc::bridge_script();
    let webview_builder = WebViewBuilder::with_web_context(&mut web_context)
        .with_user_agent(config.user_agent.as_str())
        .with_url(config.start_url.as_str())
        .with_initialization_script(bridge.as_str())
        .with_devtools(cfg!(debug_assertions))
        .with_clipboard(true)
        .with_background_color((31, 31, 31, 255))
        .with_navigation_handler(make_navigation_handler(
            Arc::clone(&context),
            proxy.clone(),
            Arc::clone(&allow_internal),
        ))
        .with_new_window_req_handler(make_new_window_handler(
            Arc::clone(&context),
            proxy.clone(),
        ))
        .with_on_page_load_handler(move |event, url| {
            if let PageLoadEvent::Finished = event {
                let _ = load_proxy.send_event(UserEvent::LoadSettled { url });
            }
        })
        .with_ipc_handler(move |message| {
            if let Some(parsed) = ipc::parse_message(message.body()) {
                let _ = ipc_proxy.send_event(UserEvent::Ipc(parsed));
            }
        })
        .with_download_started_handler(|url, suggested_path| {
            // Downloads are allowed, just visible in the log.
            info!(
                "Download started: {} -> {:?}",
                sanitize_url_for_logging(&url),
                suggested_path
            );
            true
        });
    let webview = attach_webview(webview_builder, &window).expect("Failed to create WebView");

    info!("WebView created over partition {:?}", config.partition_dir());

    // Watch the initial load.
    {
        let mut ctx = context.lock().unwrap();
        let generation = ctx.begin_load();
        spawn_load_watchdog(proxy.clone(), generation);
    }

    if start_minimized {
        info!("Starting minimized to tray");
    } else {
        window.set_visible(true);
        window.set_focus();
    }

    let mut popups: HashMap<WindowId, (Window, WebView)> = HashMap::new();
    let mut tray_icon: Option<TrayIcon> = None;

    event_loop.run(move |event, event_loop_target, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            // The tray must be created after the event loop is live.
            Event::NewEvents(StartCause::Init) => {
                if tray_icon.is_none() {
                    tray_icon = build_tray(&app_menu.tray_menu);
                }
            }
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                window_id,
                ..
            } => {
                if window_id == main_window_id {
                    let quitting = context.lock().map(|c| c.is_quitting).unwrap_or(true);
                    if quitting {
                        save_window_bounds(&context, &window);
                        *control_flow = ControlFlow::Exit;
                    } else {
                        info!("Hiding to tray");
                        window.set_visible(false);
                    }
                } else {
                    popups.remove(&window_id);
                }
            }
            Event::UserEvent(user_event) => match user_event {
                UserEvent::ShowWindow => show_main_window(&window),
                UserEvent::Tray(tray_event) => {
                    if let TrayIconEvent::DoubleClick { .. } = tray_event {
                        show_main_window(&window);
                    }
                }
                UserEvent::Menu(menu_event) => {
                    let id = menu_event.id().0.as_str();
                    match id {
                        ids::GO_HOME => start_home_load(&context, &webview, &proxy),
                        ids::TRAY_OPEN => show_main_window(&window),
                        ids::TOGGLE_AUTO_START => {
                            toggle_auto_start(&context, &app_menu);
                        }
                        ids::TOGGLE_START_MINIMIZED => {
                            toggle_start_minimized(&context, &app_menu);
                        }
                        ids::CLEAR_SESSION_DATA => {
                            if confirm_clear_session() {
                                clear_session_data(&context, &webview, &app_menu);
                                start_home_load(&context, &webview, &proxy);
                            }
                        }
                        ids::MINIMIZE_TO_TRAY => window.set_visible(false),
                        ids::QUIT => {
                            if let Ok(mut ctx) = context.lock() {
                                ctx.is_quitting = true;
                            }
                            save_window_bounds(&context, &window);
                            *control_flow = ControlFlow::Exit;
                        }
                        ids::RELOAD | ids::NAV_REFRESH => {
                            reload_content(&context, &webview, &proxy)
                        }
                        ids::ZOOM_IN => adjust_zoom(&context, &webview, ZOOM_STEP),
                        ids::ZOOM_OUT => adjust_zoom(&context, &webview, -ZOOM_STEP),
                        ids::ZOOM_RESET => reset_zoom(&context, &webview),
                        ids::TOGGLE_FULLSCREEN => {
                            if window.fullscreen().is_some() {
                                window.set_fullscreen(None);
                            } else {
                                window.set_fullscreen(Some(Fullscreen::Borderless(None)));
                            }
                        }
                        ids::NAV_BACK => {
                            let _ = webview.evaluate_script("history.back();");
                        }
                        ids::NAV_FORWARD => {
                            let _ = webview.evaluate_script("history.forward();");
                        }
                        ids::HELP => {
                            if let Err(e) = platform::open_external(HELP_URL) {
                                error!("Failed to open help: {}", e);
                            }
                        }
                        ids::ABOUT => show_about_dialog(),
                        _ => {}
                    }
                }
                UserEvent::Ipc(message) => match message {
                    IpcMessage::GoBack => {
                        let _ = webview.evaluate_script("history.back();");
                    }
                    IpcMessage::GoForward => {
                        let _ = webview.evaluate_script("history.forward();");
                    }
                    IpcMessage::Reload => reload_content(&context, &webview, &proxy),
                    IpcMessage::PageReady => {
                        debug!("Page ready");
                        if let Ok(mut ctx) = context.lock() {
                            ctx.settle_load();
                        }
                    }
                },
                UserEvent::OpenExternal(url) => {
                    if let Err(e) = platform::open_external(&url) {
                        error!("Failed to open external browser: {}", e);
                    }
                }
                UserEvent::OpenPopup(url) => {
                    info!("Opening popup for {}", sanitize_url_for_logging(&url));
                    match build_popup(event_loop_target, &mut web_context, &context, &proxy, &url)
                    {
                        Ok((popup_window, popup_webview)) => {
                            popups.insert(popup_window.id(), (popup_window, popup_webview));
                        }
                        Err(e) => error!("Failed to open popup: {}", e),
                    }
                }
                UserEvent::LoadSettled { url } => {
                    if let Ok(mut ctx) = context.lock() {
                        ctx.settle_load();
                        if url.starts_with("http") {
                            ctx.showing_fallback = false;
                        }
                    }
                }
                UserEvent::LoadTimedOut { generation } => {
                    handle_load_timeout(&context, &webview, &proxy, &allow_internal, generation);
                }
                UserEvent::RetryStart => {
                    let quitting = context.lock().map(|c| c.is_quitting).unwrap_or(true);
                    if !quitting {
                        info!("Retrying start URL");
                        start_home_load(&context, &webview, &proxy);
                    }
                }
            },
            _ => {}
        }
    });
}

/// Navigation interception shared by the main window and every popup.
fn make_navigation_handler(
    context: Arc<Mutex<AppContext>>,
    proxy: EventLoopProxy<UserEvent>,
    allow_internal: Arc<AtomicBool>,
) -> impl Fn(String) -> bool {
    move |url: String| {
        // The fallback page is loaded by the shell itself, not the site.
        if (url.starts_with("data:") || url == "about:blank")
            && allow_internal.swap(false, Ordering::SeqCst)
        {
            return true;
        }

        let decision = context
            .lock()
            .map(|ctx| ctx.policy.decide_navigation(&url))
            .unwrap_or(NavigationDecision::Reject);

        match decision {
            NavigationDecision::Allow => true,
            NavigationDecision::OpenExternal => {
                info!(
                    "Redirecting {} to the external browser",
                    sanitize_url_for_logging(&url)
                );
                let _ = proxy.send_event(UserEvent::OpenExternal(url));
                false
            }
            NavigationDecision::Reject => {
                warn!("Rejected navigation to {}", sanitize_url_for_logging(&url));
                false
            }
        }
    }
}

/// New-window interception: allowed popups become managed windows with the
/// same policy attached; everything else is denied or handed to the
/// external browser.
fn make_new_window_handler(
    context: Arc<Mutex<AppContext>>,
    proxy: EventLoopProxy<UserEvent>,
) -> impl Fn(String) -> bool {
    move |url: String| {
        let decision = context
            .lock()
            .map(|ctx| ctx.policy.decide_new_window(&url))
            .unwrap_or(NavigationDecision::Reject);

        match decision {
            NavigationDecision::Allow => {
                let _ = proxy.send_event(UserEvent::OpenPopup(url));
            }
            NavigationDecision::OpenExternal => {
                let _ = proxy.send_event(UserEvent::OpenExternal(url));
            }
            NavigationDecision::Reject => {
                warn!("Rejected popup for {}", sanitize_url_for_logging(&url));
            }
        }
        // The engine never opens its own windows; allowed popups are
        // re-created above so interception stays attached.
        false
    }
}

fn build_popup(
    target: &EventLoopWindowTarget<UserEvent>,
    web_context: &mut WebContext,
    context: &Arc<Mutex<AppContext>>,
    proxy: &EventLoopProxy<UserEvent>,
    url: &str,
) -> StudioDeskResult<(Window, WebView)> {
    let user_agent = context
        .lock()
        .map(|ctx| ctx.config.user_agent.clone())
        .unwrap_or_default();

    let window = WindowBuilder::new()
        .with_title(APP_NAME)
        .with_inner_size(PhysicalSize::new(1000u32, 700u32))
        .build(target)
        .map_err(|e| StudioDeskError::WebView(format!("Failed to create popup window: {}", e)))?;
    if let Some(icon) = create_window_icon() {
        window.set_window_icon(Some(icon));
    }

    let webview_builder = WebViewBuilder::with_web_context(web_context)
        .with_user_agent(user_agent.as_str())
        .with_url(url)
        .with_background_color((31, 31, 31, 255))
        .with_navigation_handler(make_navigation_handler(
            Arc::clone(context),
            proxy.clone(),
            Arc::new(AtomicBool::new(false)),
        ))
        .with_new_window_req_handler(make_new_window_handler(
            Arc::clone(context),
            proxy.clone(),
        ));
    let webview = attach_webview(webview_builder, &window)
        .map_err(|e| StudioDeskError::WebView(format!("Failed to create popup WebView: {}", e)))?;

    Ok((window, webview))
}

/// Build a WebView filling the given window. On Linux the WebView attaches
/// to the window's GTK box; elsewhere it attaches to the native handle.
fn attach_webview(builder: WebViewBuilder<'_>, window: &Window) -> wry::Result<WebView> {
    #[cfg(not(target_os = "linux"))]
    {
        builder.build(window)
    }

    #[cfg(target_os = "linux")]
    {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        builder.build_gtk(window.default_vbox().expect("window has no GTK box"))
    }
}

fn show_main_window(window: &Window) {
    window.set_visible(true);
    window.set_focus();
}

fn save_window_bounds(context: &Arc<Mutex<AppContext>>, window: &Window) {
    let size = window.inner_size();
    let position = window.outer_position().ok();
    let bounds = WindowBounds {
        x: position.map(|p| p.x),
        y: position.map(|p| p.y),
        width: size.width,
        height: size.height,
    };
    if let Ok(mut ctx) = context.lock() {
        if let Err(e) = ctx.store.set_window_bounds(bounds) {
            error!("Failed to save window bounds: {}", e);
        }
    }
}

/// Load the start URL and arm the load watchdog.
fn start_home_load(
    context: &Arc<Mutex<AppContext>>,
    webview: &WebView,
    proxy: &EventLoopProxy<UserEvent>,
) {
    let (generation, url) = {
        let mut ctx = context.lock().unwrap();
        ctx.showing_fallback = false;
        (ctx.begin_load(), ctx.config.start_url.clone())
    };
    if let Err(e) = webview.load_url(&url) {
        error!("Failed to load start URL: {}", e);
    }
    spawn_load_watchdog(proxy.clone(), generation);
}

fn spawn_load_watchdog(proxy: EventLoopProxy<UserEvent>, generation: u64) {
    std::thread::spawn(move || {
        std::thread::sleep(LOAD_TIMEOUT);
        let _ = proxy.send_event(UserEvent::LoadTimedOut { generation });
    });
}

fn handle_load_timeout(
    context: &Arc<Mutex<AppContext>>,
    webview: &WebView,
    proxy: &EventLoopProxy<UserEvent>,
    allow_internal: &Arc<AtomicBool>,
    generation: u64,
) {
    let recovery = {
        let mut ctx = match context.lock() {
            Ok(ctx) => ctx,
            Err(_) => return,
        };
        // A watchdog for a superseded or settled load is stale.
        if !ctx.load_timed_out(generation) {
            return;
        }
        ctx.recovery.on_failure(ERR_TIMED_OUT, true)
    };

    match recovery {
        LoadRecovery::Ignore => {}
        LoadRecovery::RetryAfterDelay(delay) => {
            let retry_proxy = proxy.clone();
            std::thread::spawn(move || {
                std::thread::sleep(delay);
                let _ = retry_proxy.send_event(UserEvent::RetryStart);
            });
        }
        LoadRecovery::ShowFallback => {
            if let Ok(mut ctx) = context.lock() {
                ctx.showing_fallback = true;
            }
            allow_internal.store(true, Ordering::SeqCst);
            if let Err(e) = webview.load_html(ERROR_HTML) {
                error!("Failed to show fallback page: {}", e);
            }
        }
    }
}

/// Reload the content, or re-request the start URL when the fallback page
/// is showing.
fn reload_content(
    context: &Arc<Mutex<AppContext>>,
    webview: &WebView,
    proxy: &EventLoopProxy<UserEvent>,
) {
    let showing_fallback = context
        .lock()
        .map(|ctx| ctx.showing_fallback)
        .unwrap_or(false);
    if showing_fallback {
        start_home_load(context, webview, proxy);
    } else {
        let _ = webview.evaluate_script("location.reload();");
    }
}

fn toggle_auto_start(context: &Arc<Mutex<AppContext>>, app_menu: &AppMenu) {
    let result = context
        .lock()
        .map_err(|_| StudioDeskError::store("context poisoned"))
        .and_then(|mut ctx| ctx.toggle_preference(keys::AUTO_START));

    match result {
        Ok(enabled) => {
            if let Ok(ctx) = context.lock() {
                if let Some(item) = &ctx.login_item {
                    if let Err(e) = autostart::apply(item.as_ref(), enabled) {
                        warn!("Login item toggle failed: {}", e);
                    }
                }
                let start_minimized = ctx.store.preference_bool(keys::START_MINIMIZED, false);
                app_menu.sync_checks(enabled, start_minimized);
            }
        }
        Err(e) => error!("Failed to persist preference: {}", e),
    }
}

fn toggle_start_minimized(context: &Arc<Mutex<AppContext>>, app_menu: &AppMenu) {
    let result = context
        .lock()
        .map_err(|_| StudioDeskError::store("context poisoned"))
        .and_then(|mut ctx| ctx.toggle_preference(keys::START_MINIMIZED));

    match result {
        Ok(enabled) => {
            if let Ok(ctx) = context.lock() {
                let auto_start = ctx.store.preference_bool(keys::AUTO_START, false);
                app_menu.sync_checks(auto_start, enabled);
            }
        }
        Err(e) => error!("Failed to persist preference: {}", e),
    }
}

fn confirm_clear_session() -> bool {
    let result = rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Warning)
        .set_title("Clear Session Data")
        .set_description("This will log you out and clear all saved data. Are you sure?")
        .set_buttons(rfd::MessageButtons::OkCancel)
        .show();
    matches!(result, rfd::MessageDialogResult::Ok)
}

/// Clear the engine partition and the preference store.
fn clear_session_data(
    context: &Arc<Mutex<AppContext>>,
    webview: &WebView,
    app_menu: &AppMenu,
) {
    info!("Clearing session data");
    let partition = session::EnginePartition::new(webview);
    if let Err(e) = session::clear_all(&partition) {
        error!("Failed to clear session partition: {}", e);
    }
    if let Ok(mut ctx) = context.lock() {
        if let Err(e) = ctx.store.clear_all() {
            error!("Failed to clear preference store: {}", e);
        }
    }
    app_menu.sync_checks(false, false);
}

fn adjust_zoom(context: &Arc<Mutex<AppContext>>, webview: &WebView, delta: f64) {
    if let Ok(mut ctx) = context.lock() {
        ctx.zoom = (ctx.zoom + delta).clamp(0.25, 3.0);
        let _ = webview.zoom(ctx.zoom);
    }
}

fn reset_zoom(context: &Arc<Mutex<AppContext>>, webview: &WebView) {
    if let Ok(mut ctx) = context.lock() {
        ctx.zoom = 1.0;
        let _ = webview.zoom(1.0);
    }
}

fn show_about_dialog() {
    let description = format!(
        "{} {}\n\nA dedicated desktop app for YouTube Studio with persistent sign-in.\nWebView engine: {}",
        APP_NAME,
        env!("CARGO_PKG_VERSION"),
        engine_name()
    );
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Info)
        .set_title("About StudioDesk")
        .set_description(description)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

fn engine_name() -> &'static str {
    if cfg!(target_os = "windows") {
        "WebView2"
    } else if cfg!(target_os = "macos") {
        "WKWebView"
    } else {
        "WebKitGTK"
    }
}

fn build_tray(tray_menu: &muda::Menu) -> Option<TrayIcon> {
    let mut builder = TrayIconBuilder::new()
        .with_menu(Box::new(tray_menu.clone()))
        .with_tooltip(APP_NAME);
    if let Some(icon) = create_tray_image() {
        builder = builder.with_icon(icon);
    }
    match builder.build() {
        Ok(tray) => Some(tray),
        Err(e) => {
            warn!("Tray icon unavailable: {}", e);
            None
        }
    }
}

/// Programmatic app icon: red rounded tile with a white play triangle.
fn icon_rgba(size: u32) -> Vec<u8> {
    let mut data = Vec::with_capacity((size * size * 4) as usize);
    let s = size as f32;
    let radius = s * 0.2;
    let left = s * 0.38;
    let apex = s * 0.74;
    let half_height = s * 0.19;

    for y in 0..size {
        for x in 0..size {
            let fx = x as f32;
            let fy = y as f32;

            let edge_x = fx.min(s - 1.0 - fx);
            let edge_y = fy.min(s - 1.0 - fy);
            let outside_corner = edge_x < radius && edge_y < radius && {
                let dx = radius - edge_x;
                let dy = radius - edge_y;
                dx * dx + dy * dy > radius * radius
            };

            let in_triangle = fx >= left && fx <= apex && {
                let taper = (apex - fx) / (apex - left);
                (fy - s / 2.0).abs() <= half_height * taper
            };

            if outside_corner {
                data.extend_from_slice(&[0, 0, 0, 0]);
            } else if in_triangle {
                data.extend_from_slice(&[255, 255, 255, 255]);
            } else {
                let shade = 1.0 - 0.15 * (fy / s);
                data.extend_from_slice(&[(204.0 * shade) as u8, 16, 16, 255]);
            }
        }
    }
    data
}

fn create_window_icon() -> Option<Icon> {
    const SIZE: u32 = 32;
    Icon::from_rgba(icon_rgba(SIZE), SIZE, SIZE).ok()
}

fn create_tray_image() -> Option<tray_icon::Icon> {
    const SIZE: u32 = 32;
    tray_icon::Icon::from_rgba(icon_rgba(SIZE), SIZE, SIZE).ok()
}
