//! Screen renderer
//!
//! Draws whatever screen is current, then the fade overlay of an in-flight
//! transition on top. Reads state only; all mutation happens in `AppState::update`.

use macroquad::prelude::*;
use crate::app::{AppState, PICKUP_FLASH_TIME};
use crate::game::{Gameplay, PlayerStats};
use crate::game::entity::ColorTag;
use crate::screen::Screen;

/// Color of the cleared background behind every screen
pub const BACKGROUND: Color = SKYBLUE;

const PLAYER_COLOR: Color = BLUE;
const SKY_COLOR: Color = Color::new(0.16, 0.18, 0.32, 1.0);
const FLOOR_COLOR: Color = LIGHTGRAY;
const HUD_FONT: f32 = 20.0;

/// Number of floor tiles laid out ahead of the player
const FLOOR_TILES: usize = 10;
const FLOOR_TILE_SIZE: f32 = 10.0;

/// Fixed chase camera looking down the track
pub fn gameplay_camera() -> Camera3D {
    Camera3D {
        position: vec3(0.0, 2.0, 6.0),
        target: vec3(0.0, 1.0, 0.0),
        up: vec3(0.0, 1.0, 0.0),
        fovy: 45.0_f32.to_radians(),
        projection: Projection::Perspective,
        ..Default::default()
    }
}

/// Convert an entity display tag to a draw color
pub fn tag_color(tag: ColorTag) -> Color {
    Color::from_rgba(tag[0], tag[1], tag[2], 255)
}

/// Draw one full frame (without the debug panel)
pub fn draw_frame(app: &AppState) {
    clear_background(BACKGROUND);

    match app.current_screen() {
        Screen::Title => draw_title_screen(),
        Screen::Gameplay => draw_gameplay_screen(&app.gameplay, app.pickup_flash),
        Screen::GameOver => draw_game_over_screen(&app.gameplay.stats),
    }

    if app.screens.on_transition() {
        draw_transition(app.screens.fade_alpha());
    }
}

fn draw_title_screen() {
    draw_text("Endless Scroller - Press [ENTER] to Start", 100.0, 200.0, 20.0, DARKBLUE);
    draw_text("                 - Press [f] to toggle Fullscreen", 100.0, 300.0, 10.0, DARKBLUE);
}

fn draw_game_over_screen(stats: &PlayerStats) {
    draw_text("Press [ENTER] to restart ...", 100.0, 50.0, 20.0, DARKBLUE);

    let rows = [
        (format!("Final Score: {}", stats.score), DARKPURPLE),
        (format!("Total Hits: {}", stats.hits), DARKGREEN),
        (format!("Total Keystrokes: {}", stats.keystrokes), DARKBLUE),
        (format!("Total Collisions: {}", stats.collisions), RED),
        (format!("Playtime: {:.2} seconds", stats.playtime), ORANGE),
    ];
    for (i, (text, color)) in rows.iter().enumerate() {
        draw_text(text, 100.0, 100.0 + i as f32 * 30.0, 20.0, *color);
    }
}

fn draw_gameplay_screen(game: &Gameplay, pickup_flash: f32) {
    set_camera(&gameplay_camera());

    draw_sky(game);
    draw_floor(game.player.position.z);

    let edge = game.half_extent() * 2.0;
    draw_cube(game.player.position, Vec3::splat(edge), None, PLAYER_COLOR);

    for entity in game.entities.iter() {
        draw_cube(entity.position, entity.size(), None, tag_color(entity.color));
    }

    set_default_camera();
    draw_hud(&game.stats);

    if pickup_flash > 0.0 {
        draw_pickup_popup(game.collectible_reward(), pickup_flash / PICKUP_FLASH_TIME);
    }
}

fn draw_sky(game: &Gameplay) {
    draw_sphere(Vec3::ZERO, 100.0, None, SKY_COLOR);

    if game.lightning.active {
        // A new random bolt every frame makes the strike flicker
        let start = vec3(macroquad::rand::gen_range(-10, 10) as f32, 5.0, -10.0);
        let end = vec3(macroquad::rand::gen_range(-10, 10) as f32, 0.0, -10.0);
        draw_line_3d(start, end, WHITE);
    }
}

/// Floor tiles follow the player so the ground never runs out
fn draw_floor(player_z: f32) {
    for i in 0..FLOOR_TILES {
        let center = vec3(0.0, 0.0, player_z - i as f32 * FLOOR_TILE_SIZE);
        draw_plane(center, vec2(FLOOR_TILE_SIZE, FLOOR_TILE_SIZE), None, FLOOR_COLOR);
    }
}

fn draw_hud(stats: &PlayerStats) {
    let x = screen_width() - 200.0;
    let rows = [
        (format!("Score: {}", stats.score), BLACK),
        (format!("Hits: {}", stats.hits), BLACK),
        (format!("Keystrokes: {}", stats.keystrokes), BLACK),
        (format!("Collisions: {} / 3", stats.collisions), RED),
        (format!("Playtime: {:.2} s", stats.playtime), DARKGREEN),
    ];
    for (i, (text, color)) in rows.iter().enumerate() {
        // draw_text positions by baseline
        draw_text(text, x, 10.0 + HUD_FONT + i as f32 * 30.0, HUD_FONT, *color);
    }
}

/// "+points" next to the score, fading out as the timer runs down
fn draw_pickup_popup(reward: i32, fade: f32) {
    let x = screen_width() - 90.0;
    let color = Color::new(DARKGREEN.r, DARKGREEN.g, DARKGREEN.b, fade.clamp(0.0, 1.0));
    draw_text(&pickup_label(reward), x, 10.0 + HUD_FONT, HUD_FONT, color);
}

pub fn pickup_label(reward: i32) -> String {
    format!("{:+}", reward)
}

/// Black overlay at the transition's current opacity
fn draw_transition(alpha: f32) {
    draw_rectangle(0.0, 0.0, screen_width(), screen_height(), Color::new(0.0, 0.0, 0.0, alpha));
}
