//! Per-phase screen composition
//!
//! Reads the game state and paints one complete frame. Nothing here mutates
//! the simulation.

use glam::Vec2;

use super::canvas::Canvas;
use super::text::{self, TEXT_SIZE};
use crate::assets::{Assets, Sprite};
use crate::consts::*;
use crate::sim::{
    Entity, GamePhase, GameState, PointerState, Rect, Score, Selection, Side, SpriteKey,
};
use crate::ui::{self, Button};

const WHITE: [u8; 4] = [255, 255, 255, 255];
const BLACK: [u8; 4] = [0, 0, 0, 255];
const YELLOW: [u8; 4] = [255, 255, 0, 255];
const SELECT_BACKGROUND: [u8; 4] = [50, 50, 50, 255];
/// Black at alpha 120, dims the menu picture
const MENU_OVERLAY: [u8; 4] = [0, 0, 0, 120];
const SELECTION_OUTLINE: f32 = 3.0;

pub const MENU_PROMPT: &str = "Press SPACE to start";
pub const SELECT_TITLE: &str = "Player 1: Left Click | Player 2: Right Click";
pub const GOAL_BANNER: &str = "Goal!";

/// Team color of a side
pub fn side_color(side: Side) -> [u8; 4] {
    match side {
        Side::Left => [0, 0, 255, 255],
        Side::Right => [255, 0, 0, 255],
    }
}

/// Painted goal posts, one per side, spanning the goal band
pub fn goal_posts() -> [(Rect, [u8; 4]); 2] {
    let (top, bottom) = crate::goal_band();
    let height = bottom - top;
    [
        (Rect::new(0.0, top, GOAL_POST_WIDTH, height), side_color(Side::Left)),
        (
            Rect::new(SCREEN_WIDTH - GOAL_POST_WIDTH, top, GOAL_POST_WIDTH, height),
            side_color(Side::Right),
        ),
    ]
}

pub fn score_line(score: &Score) -> String {
    format!(
        "{}: {}   {}: {}",
        Side::Left.name(),
        score.left,
        Side::Right.name(),
        score.right
    )
}

/// Who, if anyone, has picked `character`; player 1 wins ties for the outline
pub fn picked_by(selection: &Selection, character: usize) -> Option<Side> {
    Side::BOTH
        .into_iter()
        .find(|&side| selection.pick_of(side) == Some(character))
}

/// Paint the whole frame for the current phase
pub fn draw_frame(
    canvas: &mut Canvas<'_>,
    state: &GameState,
    assets: &Assets,
    pointer: &PointerState,
) {
    match state.phase {
        GamePhase::Menu => draw_menu(canvas, assets),
        GamePhase::SelectCharacters => draw_select(canvas, &state.selection, assets),
        GamePhase::Play => draw_play(canvas, state, assets),
        GamePhase::GameOver => draw_game_over(canvas, state.winner, assets, pointer),
    }
}

fn draw_menu(canvas: &mut Canvas<'_>, assets: &Assets) {
    canvas.blit(&assets.menu_background, Vec2::ZERO);
    canvas.fill_rect(crate::play_field(), MENU_OVERLAY);
    text::draw_centered_x(
        canvas,
        &assets.font,
        MENU_PROMPT,
        SCREEN_WIDTH / 2.0,
        SCREEN_HEIGHT * 0.75,
        TEXT_SIZE,
        WHITE,
    );
}

fn draw_select(canvas: &mut Canvas<'_>, selection: &Selection, assets: &Assets) {
    canvas.clear(SELECT_BACKGROUND);
    text::draw_centered_x(
        canvas,
        &assets.font,
        SELECT_TITLE,
        SCREEN_WIDTH / 2.0,
        50.0,
        TEXT_SIZE,
        WHITE,
    );

    for (i, portrait) in assets.characters.iter().enumerate().take(CHARACTER_COUNT) {
        let slot = ui::character_slot(i);
        canvas.blit(portrait, slot.min);
        if let Some(side) = picked_by(selection, i) {
            canvas.stroke_rect(slot, SELECTION_OUTLINE, side_color(side));
        }
    }
}

fn draw_play(canvas: &mut Canvas<'_>, state: &GameState, assets: &Assets) {
    canvas.blit(&assets.pitch_background, Vec2::ZERO);
    for (rect, color) in goal_posts() {
        canvas.fill_rect(rect, color);
    }

    if let Some(pitch) = &state.pitch {
        for player in &pitch.players {
            draw_entity(canvas, assets, player);
        }
        draw_entity(canvas, assets, &pitch.ball);
    }

    text::draw(
        canvas,
        &assets.font,
        &score_line(&state.score),
        Vec2::new(SCREEN_WIDTH / 2.0 - 150.0, 20.0),
        TEXT_SIZE,
        WHITE,
    );
    if state.goal_banner_ticks > 0 {
        text::draw_centered_x(
            canvas,
            &assets.font,
            GOAL_BANNER,
            SCREEN_WIDTH / 2.0,
            SCREEN_HEIGHT / 2.0 - 100.0,
            TEXT_SIZE,
            YELLOW,
        );
    }
}

fn draw_game_over(
    canvas: &mut Canvas<'_>,
    winner: Option<Side>,
    assets: &Assets,
    pointer: &PointerState,
) {
    let background = match winner {
        Some(Side::Left) => &assets.blue_wins,
        _ => &assets.red_wins,
    };
    canvas.blit(background, Vec2::ZERO);
    draw_button(canvas, assets, &ui::RESTART_BUTTON, pointer);
    draw_button(canvas, assets, &ui::QUIT_BUTTON, pointer);
}

fn draw_button(
    canvas: &mut Canvas<'_>,
    assets: &Assets,
    button: &Button,
    pointer: &PointerState,
) {
    canvas.fill_rect(button.rect, button.fill_color(pointer));
    let label = text::measure(&assets.font, button.label, TEXT_SIZE);
    let top = button.rect.top() + ((button.rect.size.y - label.y) / 2.0).floor();
    text::draw_centered_x(
        canvas,
        &assets.font,
        button.label,
        button.rect.center().x,
        top,
        TEXT_SIZE,
        BLACK,
    );
}

fn sprite_for(assets: &Assets, key: SpriteKey) -> &Sprite {
    match key {
        SpriteKey::Character(appearance) => assets.portrait(appearance),
        SpriteKey::Ball => &assets.ball,
    }
}

fn draw_entity<E: Entity>(canvas: &mut Canvas<'_>, assets: &Assets, entity: &E) {
    canvas.blit(sprite_for(assets, entity.sprite()), entity.bounds().min);
}
