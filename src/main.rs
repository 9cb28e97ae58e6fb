//! RAVINE demo
//!
//! Windowed frontend for the gameplay runtime: keyboard input, flat-color
//! rendering of the active levels and player, transition artwork cards,
//! and optional sound assets. All gameplay state lives in the library;
//! this binary only feeds it frames and draws what it finds.

use macroquad::prelude::*;
use macroquad::audio::{
    load_sound, play_sound, play_sound_once, set_sound_volume, stop_sound, PlaySoundParams, Sound,
};

use ravine::VERSION;
use ravine::audio::SoundCue;
use ravine::game::GameWorld;
use ravine::input::{Action, InputState};
use ravine::math::Vec2 as WVec2;
use ravine::world::{load_world, sample_world, WorldDef};

/// World units to screen pixels
const PIXELS_PER_UNIT: f32 = 28.0;

const WORLD_PATH: &str = "assets/world.ron";

fn window_conf() -> Conf {
    Conf {
        window_title: format!("RAVINE v{}", VERSION),
        window_width: 1280,
        window_height: 720,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

/// Optional sound assets; missing files degrade to silence
struct Sounds {
    thud: Option<Sound>,
    page: Option<Sound>,
    chime: Option<Sound>,
    rumble: Option<Sound>,
    rumble_on: bool,
}

impl Sounds {
    async fn load() -> Self {
        Self {
            thud: load_optional("assets/sfx/thud.ogg").await,
            page: load_optional("assets/sfx/page.ogg").await,
            chime: load_optional("assets/sfx/chime.ogg").await,
            rumble: load_optional("assets/sfx/rumble.ogg").await,
            rumble_on: false,
        }
    }

    fn for_cue(&self, cue: SoundCue) -> Option<&Sound> {
        match cue {
            SoundCue::BoundaryThud => self.thud.as_ref(),
            SoundCue::PageTurn => self.page.as_ref(),
            SoundCue::TransitionDone => self.chime.as_ref(),
        }
    }
}

async fn load_optional(path: &str) -> Option<Sound> {
    match load_sound(path).await {
        Ok(sound) => Some(sound),
        Err(e) => {
            println!("No sound at {} ({}), continuing silent", path, e);
            None
        }
    }
}

fn load_world_or_sample() -> WorldDef {
    match load_world(WORLD_PATH) {
        Ok(world) => {
            println!("Loaded world '{}' from {}", world.name, WORLD_PATH);
            world
        }
        Err(e) => {
            println!("No world file ({}), using built-in sample", e);
            sample_world()
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let mut def = load_world_or_sample();
    let mut game = GameWorld::new(&def);
    let mut sounds = Sounds::load().await;

    let input = InputState::new();
    let mut show_debug = false;

    loop {
        if input.action_pressed(Action::ToggleDebug) {
            show_debug = !show_debug;
        }
        if input.action_pressed(Action::Reset) {
            def = load_world_or_sample();
            game = GameWorld::new(&def);
            println!("World reset");
        }

        let frame_input = input.frame();
        game.frame(&frame_input, get_time() as f32, get_frame_time());

        play_audio(&mut game, &mut sounds);

        clear_background(Color::new(0.10, 0.10, 0.12, 1.0));
        draw_world(&game);
        if show_debug {
            draw_debug_overlay(&game);
        }
        draw_transition(&game);
        draw_hud(&game, show_debug);

        next_frame().await;
    }
}

fn play_audio(game: &mut GameWorld, sounds: &mut Sounds) {
    for cue in game.audio.drain_one_shots() {
        if let Some(sound) = sounds.for_cue(cue) {
            play_sound_once(sound);
        }
    }

    let Some(rumble) = &sounds.rumble else { return };
    if game.audio.rumble_playing() {
        if sounds.rumble_on {
            set_sound_volume(rumble, game.audio.rumble_volume());
        } else {
            play_sound(
                rumble,
                PlaySoundParams {
                    looped: true,
                    volume: game.audio.rumble_volume(),
                },
            );
            sounds.rumble_on = true;
        }
    } else if sounds.rumble_on {
        stop_sound(rumble);
        sounds.rumble_on = false;
    }
}

/// World position to screen pixels, camera at screen center
fn to_screen(world: WVec2, camera: WVec2) -> (f32, f32) {
    (
        screen_width() * 0.5 + (world.x - camera.x) * PIXELS_PER_UNIT,
        screen_height() * 0.5 - (world.y - camera.y) * PIXELS_PER_UNIT,
    )
}

fn draw_world(game: &GameWorld) {
    let camera = game.camera.position();

    for level in game.world.active_levels() {
        let [r, g, b] = level.def.tint;
        let color = Color::new(r, g, b, 1.0);
        for rect in &level.def.ground {
            let (x, y) = to_screen(WVec2::new(rect.x, rect.top()), camera);
            draw_rectangle(
                x,
                y,
                rect.w * PIXELS_PER_UNIT,
                rect.h * PIXELS_PER_UNIT,
                color,
            );
        }
    }

    let half = game.movement.settings.half_extents;
    let (px, py) = to_screen(
        WVec2::new(game.body.position.x - half.x, game.body.position.y + half.y),
        camera,
    );
    let player_color = if game.movement.is_grounded() {
        Color::new(0.92, 0.78, 0.32, 1.0)
    } else {
        Color::new(0.95, 0.62, 0.30, 1.0)
    };
    draw_rectangle(
        px,
        py,
        half.x * 2.0 * PIXELS_PER_UNIT,
        half.y * 2.0 * PIXELS_PER_UNIT,
        player_color,
    );
}

/// Boundary and shake-zone visualization (F1)
fn draw_debug_overlay(game: &GameWorld) {
    let camera = game.camera.position();
    let settings = &game.camera.settings;
    let zones = game.camera.zones();

    let vertical_line = |world_x: f32, color: Color| {
        let (x, _) = to_screen(WVec2::new(world_x, 0.0), camera);
        draw_line(x, 0.0, x, screen_height(), 2.0, color);
    };

    vertical_line(settings.left_boundary, RED);
    vertical_line(settings.right_boundary, RED);

    // Shake zones begin a quarter span in from each boundary
    let span = settings.right_boundary - settings.left_boundary;
    let disarmed = Color::new(1.0, 1.0, 0.0, 0.3);
    vertical_line(
        settings.left_boundary + span * 0.25,
        if zones.left_armed { YELLOW } else { disarmed },
    );
    vertical_line(
        settings.right_boundary - span * 0.25,
        if zones.right_armed { YELLOW } else { disarmed },
    );

    // Ground probe
    let probe = game.body.position + game.movement.settings.ground_probe_offset;
    let (cx, cy) = to_screen(probe, camera);
    let probe_color = if game.movement.is_grounded() { GREEN } else { RED };
    draw_circle_lines(
        cx,
        cy,
        game.movement.settings.ground_probe_radius * PIXELS_PER_UNIT,
        1.5,
        probe_color,
    );
}

fn draw_transition(game: &GameWorld) {
    let screen = game.transition_screen();
    if !screen.visible {
        return;
    }

    draw_rectangle(
        0.0,
        0.0,
        screen_width(),
        screen_height(),
        Color::new(0.0, 0.0, 0.0, 0.75),
    );

    let card_w = screen_width() * 0.55;
    let card_h = screen_height() * 0.55;
    let card_x = (screen_width() - card_w) * 0.5;
    let card_y = (screen_height() - card_h) * 0.5;
    draw_rectangle(card_x, card_y, card_w, card_h, Color::new(0.16, 0.15, 0.18, 1.0));
    draw_rectangle_lines(card_x, card_y, card_w, card_h, 3.0, GRAY);

    match &screen.image {
        Some(image) => {
            draw_text(image, card_x + 24.0, card_y + card_h * 0.5, 36.0, WHITE);
            draw_text(
                "[E] continue",
                card_x + 24.0,
                card_y + card_h - 24.0,
                22.0,
                LIGHTGRAY,
            );
        }
        None => {
            draw_text("...", card_x + 24.0, card_y + card_h * 0.5, 36.0, WHITE);
        }
    }
}

fn draw_hud(game: &GameWorld, show_debug: bool) {
    let active: Vec<&str> = game
        .world
        .active_levels()
        .map(|l| l.def.name.as_str())
        .collect();
    draw_text(
        &format!("RAVINE v{}  |  {}", VERSION, active.join(", ")),
        12.0,
        24.0,
        22.0,
        LIGHTGRAY,
    );
    draw_text(
        "A/D move  Space jump  E interact  F1 debug  R reset",
        12.0,
        46.0,
        18.0,
        GRAY,
    );
    if show_debug {
        draw_text(
            &format!(
                "pos ({:.1}, {:.1})  vel ({:.1}, {:.1})  rumble {:.2}  next transition {}",
                game.body.position.x,
                game.body.position.y,
                game.body.velocity.x,
                game.body.velocity.y,
                game.audio.rumble_volume(),
                game.sequencer.next_index(),
            ),
            12.0,
            68.0,
            18.0,
            GRAY,
        );
    }
}
