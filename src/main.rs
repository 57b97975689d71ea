use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Context;
use log::{error, info};
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};

use meteor_rush::app::Game;
use meteor_rush::assets::Assets;
use meteor_rush::audio::Audio;
use meteor_rush::consts::TARGET_FPS;
use meteor_rush::platform::window::{create_window, Gpu};
use meteor_rush::platform::InputState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Asset root holding images/ and audio/, next to the working directory
    let data_dir = PathBuf::from("data");
    let assets = Assets::load(&data_dir)
        .with_context(|| format!("loading assets from {}", data_dir.display()))?;
    let audio = Audio::new(&data_dir);

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    let mut game = Game::new(assets, audio, seed);

    let event_loop = EventLoop::new();
    let window = create_window(&event_loop)?;
    let gpu = Gpu::new(&window)?;
    let mut input = InputState::new();

    let frame_budget = Duration::from_secs_f64(1.0 / TARGET_FPS as f64);
    let mut last_frame = Instant::now();
    info!("starting run");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;
        match event {
            Event::WindowEvent { event, window_id } if window_id == window.id() => {
                input.handle_window_event(&event);
                if matches!(event, WindowEvent::CloseRequested) {
                    info!("close requested");
                }
            }
            Event::MainEventsCleared => {
                // Sleep off the remainder of the frame; dt still reflects
                // real elapsed time when a frame runs long
                let since = last_frame.elapsed();
                if since < frame_budget {
                    std::thread::sleep(frame_budget - since);
                }
                let dt = last_frame.elapsed().as_secs_f32();
                last_frame = Instant::now();

                game.advance(&input.tick_input(), dt);
                if !game.running() {
                    *control_flow = ControlFlow::Exit;
                    return;
                }
                window.request_redraw();
            }
            Event::RedrawRequested(window_id) if window_id == window.id() => {
                match gpu.present(game.render_frame()) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost) => gpu.reconfigure(),
                    Err(err) => error!("frame presentation failed: {err}"),
                }
            }
            _ => {}
        }
    })
}
