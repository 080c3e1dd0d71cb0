//! Interactive demo host: scratch the card with the mouse in a small window.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context as _;
use clap::Parser;
use minifb::{Key, MouseButton, MouseMode, Window, WindowOptions};

use scratchcard::{
    ClientRect, InputEvent, Point, Rgba8Premul, ScratchConfig, ScratchEngine, SurfaceSize, TimeMs,
    Typewriter, Vec2, decode_image, draw_text, text_width,
};

#[derive(Parser, Debug)]
#[command(name = "scratchcard", version)]
struct Cli {
    /// Hidden image revealed by scratching.
    #[arg(long)]
    image: PathBuf,

    /// Optional JSON config overriding the tuned defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Message typed out after the reveal.
    #[arg(long, default_value = "HAPPY VALENTINE'S DAY ♥")]
    message: String,

    /// Card width in pixels.
    #[arg(long, default_value_t = 480)]
    width: u32,

    /// Card height in pixels.
    #[arg(long, default_value_t = 480)]
    height: u32,
}

/// A live confetti particle in normalized viewport coordinates.
struct DemoParticle {
    pos: Point,
    vel: Vec2,
    born: TimeMs,
    color: u32,
}

const PALETTE: [u32; 5] = [0x00E5_3935, 0x00FB_8C00, 0x00FD_D835, 0x0043_A047, 0x001E_88E5];
const PARTICLE_TTL_MS: u64 = 2000;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let bytes = std::fs::read(&cli.image)
        .with_context(|| format!("read image '{}'", cli.image.display()))?;
    let image = decode_image(&bytes)?;

    let config = match &cli.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("read config '{}'", path.display()))?;
            ScratchConfig::from_json(&json)?
        }
        None => ScratchConfig::default(),
    };

    let size = SurfaceSize::new(cli.width, cli.height);
    let mut engine = ScratchEngine::new(image, size, config)?;
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos().into())
        .unwrap_or(0x5EED);
    engine.set_seed(seed);
    engine.set_client_rect(ClientRect::from_size(size));
    engine.on_complete(|| tracing::info!("card revealed"));

    let mut window = Window::new(
        "Scratchcard",
        size.width as usize,
        size.height as usize,
        WindowOptions::default(),
    )
    .context("open window")?;
    window.set_target_fps(60);

    let started = Instant::now();
    let mut was_down = false;
    let mut last_now = TimeMs::ZERO;
    let mut particles: Vec<DemoParticle> = Vec::new();
    let mut typewriter: Option<Typewriter> = None;
    let mut buffer = vec![0u32; size.area()];

    while window.is_open() && !window.is_key_down(Key::Escape) {
        let now = TimeMs(started.elapsed().as_millis() as u64);
        let dt = now.since(last_now) as f64 / 1000.0;
        last_now = now;

        // Mouse state -> pointer events.
        let down = window.get_mouse_down(MouseButton::Left);
        if let Some((mx, my)) = window.get_mouse_pos(MouseMode::Clamp) {
            let (client_x, client_y) = (f64::from(mx), f64::from(my));
            match (was_down, down) {
                (false, true) => engine.handle_event(&InputEvent::PointerDown { client_x, client_y }, now),
                (true, true) => engine.handle_event(&InputEvent::PointerMove { client_x, client_y }, now),
                (true, false) => engine.handle_event(&InputEvent::PointerUp, now),
                (false, false) => {}
            }
        }
        was_down = down;

        // Confetti bursts -> live particles.
        for (i, burst) in engine.tick(now).into_iter().enumerate() {
            for (j, p) in burst.particles.iter().enumerate() {
                particles.push(DemoParticle {
                    pos: burst.origin,
                    vel: p.velocity,
                    born: now,
                    color: PALETTE[(i + j) % PALETTE.len()],
                });
            }
        }
        particles.retain(|p| now.since(p.born) < PARTICLE_TTL_MS);
        for p in &mut particles {
            // Velocity is in percent-of-viewport per second; gravity pulls
            // particles back down over their lifetime.
            p.pos += p.vel * (dt / 100.0);
            p.vel.y += 60.0 * dt;
        }

        // Start the message once the reveal latches.
        if engine.is_revealed() && typewriter.is_none() {
            let mut tw = Typewriter::new(cli.message.clone(), engine.typewriter_delay_ms(), now);
            tw.set_on_complete(|| tracing::info!("message complete"));
            typewriter = Some(tw);
        }

        let mut frame = engine.frame(now)?;
        if let Some(tw) = typewriter.as_mut() {
            let text = tw.poll(now).to_owned();
            let scale = 2;
            let x = (i64::from(frame.width) - i64::from(text_width(&text, scale))) / 2;
            let y = i64::from(frame.height) - 7 * i64::from(scale) - 16;
            draw_text(
                &mut frame.rgba8,
                size,
                x,
                y,
                &text,
                Rgba8Premul::opaque(0xE5, 0x39, 0x35),
                scale,
            );
        }

        // Premultiplied RGBA over an opaque card is effectively opaque, so
        // the channels map straight into minifb's 0RGB words.
        for (dst, px) in buffer.iter_mut().zip(frame.rgba8.chunks_exact(4)) {
            *dst = (u32::from(px[0]) << 16) | (u32::from(px[1]) << 8) | u32::from(px[2]);
        }
        for p in &particles {
            draw_dot(
                &mut buffer,
                size,
                p.pos.x * f64::from(size.width),
                p.pos.y * f64::from(size.height),
                p.color,
            );
        }

        window
            .update_with_buffer(&buffer, size.width as usize, size.height as usize)
            .context("present frame")?;
    }

    Ok(())
}

fn draw_dot(buffer: &mut [u32], size: SurfaceSize, cx: f64, cy: f64, color: u32) {
    for dy in -1i64..=1 {
        for dx in -1i64..=1 {
            let x = cx as i64 + dx;
            let y = cy as i64 + dy;
            if x >= 0 && y >= 0 && x < i64::from(size.width) && y < i64::from(size.height) {
                buffer[y as usize * size.width as usize + x as usize] = color;
            }
        }
    }
}
