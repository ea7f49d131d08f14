//! Interactive viewer: walk the maze with the keyboard
//!
//! The render core produces cell planes; this shell composites them into
//! an RGBA texture each frame and scales it up with nearest filtering so
//! the 4-pixel columns and dither stay crisp.

use macroquad::prelude::*;

use retrocaster::caster::{CasterConfig, PlaneBuffer, Renderer};
use retrocaster::display::{composite, ShadeRamp, SCREEN_H, SCREEN_W};
use retrocaster::player::Player;
use retrocaster::world::{load_map, MapGrid};
use retrocaster::VERSION;

const DEFAULT_MAP: &str = "assets/maps/default.ron";

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Retrocaster v{}", VERSION),
        window_width: SCREEN_W as i32 * 3,
        window_height: SCREEN_H as i32 * 3,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let renderer = Renderer::new(CasterConfig::default());
    let ramp = ShadeRamp::new();

    let grid = match load_map(DEFAULT_MAP) {
        Ok(map) => {
            println!("Loaded map from {}", DEFAULT_MAP);
            map
        }
        Err(e) => {
            eprintln!("Failed to load {}: {}, using built-in map", DEFAULT_MAP, e);
            MapGrid::builtin()
        }
    };

    let mut player = Player::spawn(&renderer.tables().sin, 2, 2, 0);
    let mut planes = PlaneBuffer::new();
    let mut pixels = vec![0u8; SCREEN_W * SCREEN_H * 4];

    println!("=== Retrocaster ===");
    println!("WASD / arrows to move, Esc to quit");

    loop {
        if is_key_down(KeyCode::Escape) {
            break;
        }
        if is_key_down(KeyCode::Up) || is_key_down(KeyCode::W) {
            player.advance(&grid, true);
        }
        if is_key_down(KeyCode::Down) || is_key_down(KeyCode::S) {
            player.advance(&grid, false);
        }
        if is_key_down(KeyCode::Left) || is_key_down(KeyCode::A) {
            player.turn(&renderer.tables().sin, true);
        }
        if is_key_down(KeyCode::Right) || is_key_down(KeyCode::D) {
            player.turn(&renderer.tables().sin, false);
        }

        renderer.render(&grid, &player, &mut planes);
        composite(&planes, &ramp, &mut pixels);

        let texture = Texture2D::from_rgba8(SCREEN_W as u16, SCREEN_H as u16, &pixels);
        texture.set_filter(FilterMode::Nearest);

        clear_background(BLACK);

        // largest scale that fits the window without distorting aspect
        let scale = (screen_width() / SCREEN_W as f32).min(screen_height() / SCREEN_H as f32);
        let draw_w = SCREEN_W as f32 * scale;
        let draw_h = SCREEN_H as f32 * scale;
        draw_texture_ex(
            &texture,
            (screen_width() - draw_w) / 2.0,
            (screen_height() - draw_h) / 2.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(draw_w, draw_h)),
                ..Default::default()
            },
        );

        draw_text(&format!("FPS: {}", get_fps()), 10.0, 20.0, 20.0, GREEN);

        next_frame().await;
    }
}
