// File: crates/window-demo/src/main.rs
// Summary: Interactive window over the waitlist chart: RGBA blit via winit + softbuffer, drag pans, wheel zooms, typing filters.

use anyhow::{Context, Result};
use clap::Parser;
use std::num::NonZeroU32;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use waitlist_chart::geometry::Point;
use waitlist_chart::{Chart, ChartConfig, ChartError, DataSource, LoadTicket, Record, WheelMode, ZoomEvent};
use waitlist_render_skia::SkiaRenderer;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, Event, KeyboardInput, MouseButton, MouseScrollDelta, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoopBuilder, EventLoopProxy};
use winit::window::WindowBuilder;

#[derive(Parser, Debug)]
#[command(name = "waitlist-window")]
#[command(about = "Interactive course waitlist chart (drag = pan, wheel = zoom, type = filter, F5 = reload)")]
struct Args {
    /// CSV source, URL or local path (overrides config)
    #[arg(long)]
    source: Option<String>,
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Fetch results delivered back onto the event loop.
#[derive(Debug)]
enum UserEvent {
    Loaded(LoadTicket, Result<Vec<Record>, ChartError>),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    let mut cfg = ChartConfig::load(args.config.as_deref()).context("failed to load configuration")?;
    if let Some(source) = args.source {
        cfg.data.source = source;
    }
    let mut chart = Chart::from_config(&cfg).context("invalid configuration")?;
    let source = DataSource::parse(&cfg.data.source);
    let runtime = tokio::runtime::Runtime::new().context("starting tokio runtime")?;

    let event_loop = EventLoopBuilder::<UserEvent>::with_user_event().build();
    let proxy = event_loop.create_proxy();
    let (width, height) = (chart.scene().width, chart.scene().height);
    let window = WindowBuilder::new()
        .with_title(title(""))
        .with_inner_size(PhysicalSize::new(width, height))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;

    start_load(&mut chart, &source, &runtime, &proxy);

    let renderer = SkiaRenderer::new();
    let mut size = window.inner_size();
    let mut cursor: Option<PhysicalPosition<f64>> = None;
    let mut dragging = false;

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        let plot = chart.scene().plot;
        let mut dirty = false;
        match event {
            Event::UserEvent(UserEvent::Loaded(ticket, result)) => {
                let outcome = chart.apply_load(&ticket, result);
                tracing::debug!(?outcome, "load result delivered");
                dirty = true;
            }
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    chart.teardown();
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    dirty = true;
                }
                WindowEvent::CursorMoved { position, .. } => {
                    if let (true, Some(last)) = (dragging, cursor) {
                        chart.on_zoom_event(ZoomEvent::Drag { dx: position.x - last.x, dy: position.y - last.y });
                        dirty = true;
                    }
                    cursor = Some(position);
                }
                WindowEvent::MouseInput { state, button: MouseButton::Left, .. } => {
                    dragging = state == ElementState::Pressed;
                }
                WindowEvent::MouseWheel { delta, .. } => {
                    let at = cursor
                        .map(|p| Point::new(p.x - plot.left, p.y - plot.top))
                        .unwrap_or_else(|| Point::new(plot.width() * 0.5, plot.height() * 0.5));
                    // winit reports scroll-up as positive; wheel deltas follow the DOM sign
                    let ev = match delta {
                        MouseScrollDelta::LineDelta(_, y) => ZoomEvent::Wheel { delta_y: -y as f64, mode: WheelMode::Line, at },
                        MouseScrollDelta::PixelDelta(p) => ZoomEvent::Wheel { delta_y: -p.y, mode: WheelMode::Pixel, at },
                    };
                    chart.on_zoom_event(ev);
                    dirty = true;
                }
                WindowEvent::ReceivedCharacter(c) if !c.is_control() => {
                    let mut term = chart.filter_term().to_string();
                    term.push(c);
                    set_filter(&mut chart, &window, &term);
                    dirty = true;
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { virtual_keycode: Some(key), state: ElementState::Pressed, .. },
                    ..
                } => match key {
                    VirtualKeyCode::Back => {
                        let mut term = chart.filter_term().to_string();
                        term.pop();
                        set_filter(&mut chart, &window, &term);
                        dirty = true;
                    }
                    VirtualKeyCode::Escape => {
                        set_filter(&mut chart, &window, "");
                        dirty = true;
                    }
                    VirtualKeyCode::F5 => {
                        start_load(&mut chart, &source, &runtime, &proxy);
                        dirty = true;
                    }
                    _ => {}
                },
                _ => {}
            },
            Event::RedrawRequested(_) => {
                if let Err(e) = present(&renderer, &chart, &mut surface, size) {
                    tracing::error!(error = %e, "present failed");
                }
            }
            _ => {}
        }
        if dirty {
            window.request_redraw();
        }
    });
}

fn title(term: &str) -> String {
    if term.is_empty() {
        "Course waitlist".to_string()
    } else {
        format!("Course waitlist | filter: {term}")
    }
}

fn set_filter(chart: &mut Chart, window: &winit::window::Window, term: &str) {
    chart.set_filter(term);
    window.set_title(&title(term));
}

/// Kick off a fetch on the runtime; the result comes back as a user event.
fn start_load(chart: &mut Chart, source: &DataSource, runtime: &tokio::runtime::Runtime, proxy: &EventLoopProxy<UserEvent>) {
    let ticket = chart.begin_load();
    let source = source.clone();
    let proxy = proxy.clone();
    tracing::info!(%source, generation = ticket.generation(), "loading dataset");
    runtime.spawn(async move {
        let result = source.load().await;
        if proxy.send_event(UserEvent::Loaded(ticket, result)).is_err() {
            tracing::debug!("event loop closed before load finished");
        }
    });
}

/// Render the scene and blit it top-left into the window, cropping or padding as needed.
fn present(
    renderer: &SkiaRenderer,
    chart: &Chart,
    surface: &mut softbuffer::Surface,
    size: PhysicalSize<u32>,
) -> Result<()> {
    let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
        return Ok(());
    };
    surface.resize(w, h).map_err(|e| anyhow::anyhow!("resize: {e}"))?;
    let (rgba, sw, sh, stride) = renderer.render_to_rgba8(chart.scene())?;
    let bg = chart.scene().background;
    let fill = pack(bg.r, bg.g, bg.b);

    let mut frame = surface.buffer_mut().map_err(|e| anyhow::anyhow!("buffer: {e}"))?;
    let (ww, wh) = (size.width as usize, size.height as usize);
    for y in 0..wh {
        for x in 0..ww {
            frame[y * ww + x] = if x < sw as usize && y < sh as usize {
                let i = y * stride + x * 4;
                pack(rgba[i], rgba[i + 1], rgba[i + 2])
            } else {
                fill
            };
        }
    }
    frame.present().map_err(|e| anyhow::anyhow!("present: {e}"))?;
    Ok(())
}

// softbuffer wants 0RGB
fn pack(r: u8, g: u8, b: u8) -> u32 {
    (r as u32) << 16 | (g as u32) << 8 | b as u32
}
