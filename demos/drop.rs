use bouncy_discs::dynamics::{BodyColor, DropConfig, World, random_drop};
use bouncy_discs::math::Vec2;
use macroquad::prelude::*;
use ::rand::thread_rng;

fn to_color(tag: BodyColor) -> Color {
    match tag {
        BodyColor::Red => RED,
        BodyColor::Orange => ORANGE,
        BodyColor::Yellow => YELLOW,
        BodyColor::Green => GREEN,
        BodyColor::Blue => BLUE,
        BodyColor::Teal => Color::new(0.0, 0.5, 0.5, 1.0),
        BodyColor::Violet => VIOLET,
    }
}

#[macroquad::main("bouncy-discs")]
async fn main() {
    env_logger::init();

    let mut rng = thread_rng();
    let mut world = World::new(screen_width(), screen_height());
    let mut drop_config = DropConfig::default();

    // Values used when random mode is off.
    let mut fixed_radius = 30.0_f32;
    let mut fixed_restitution = 0.7_f32;

    let mut paused = false;

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        // Resizing only changes the boundary; it is read fresh each tick.
        let (w, h) = (screen_width(), screen_height());
        let boundary = world.boundary();
        if boundary.width != w || boundary.height != h {
            world.set_boundary(w, h);
        }

        if is_key_pressed(KeyCode::Up) {
            fixed_radius = (fixed_radius + 5.0).min(300.0);
        }
        if is_key_pressed(KeyCode::Down) {
            fixed_radius = (fixed_radius - 5.0).max(5.0);
        }
        if is_key_pressed(KeyCode::Right) {
            fixed_restitution = (fixed_restitution + 0.1).min(1.0);
        }
        if is_key_pressed(KeyCode::Left) {
            fixed_restitution = (fixed_restitution - 0.1).max(0.0);
        }
        if is_key_pressed(KeyCode::R) {
            drop_config.radius = match drop_config.radius {
                Some(_) => None,
                None => Some(fixed_radius),
            };
        }
        if is_key_pressed(KeyCode::B) {
            drop_config.restitution = match drop_config.restitution {
                Some(_) => None,
                None => Some(fixed_restitution),
            };
        }
        if drop_config.radius.is_some() {
            drop_config.radius = Some(fixed_radius);
        }
        if drop_config.restitution.is_some() {
            drop_config.restitution = Some(fixed_restitution);
        }

        if is_key_pressed(KeyCode::Space) || is_key_pressed(KeyCode::D) {
            let def = random_drop(&mut rng, world.boundary(), &drop_config);
            if let Err(err) = world.add_body(def) {
                log::warn!("{err}");
            }
        }

        if is_key_pressed(KeyCode::C) {
            world.clear();
        }

        if is_mouse_button_pressed(MouseButton::Left) {
            let (mx, my) = mouse_position();
            world.remove_at(Vec2::new(mx, my));
        }

        if is_key_pressed(KeyCode::K) {
            paused = !paused;
        }

        // One logical tick per frame.
        if !paused {
            world.tick();
        } else if is_key_pressed(KeyCode::N) {
            world.tick();
        }

        clear_background(WHITE);

        for (_, b) in world.bodies() {
            let (x, y, r) = (b.position.x, b.position.y, b.radius());
            draw_circle(x, y, r, to_color(b.tag));
            draw_circle_lines(x, y, r, 1.0, BLACK);
        }

        for (_, c) in world.contacts() {
            draw_circle(c.position.x, c.position.y, 3.0, DARKGRAY);
        }

        let radius_mode = match drop_config.radius {
            Some(r) => format!("{r:.0}"),
            None => "random".to_string(),
        };
        let bounce_mode = match drop_config.restitution {
            Some(e) => format!("{e:.1}"),
            None => "random".to_string(),
        };
        let overlay = format!(
            "Space/D drop | LMB delete | C clear | K pause | N step\nR radius={} (Up/Down) | B bounciness={} (Left/Right)\nbodies={} ticks={} energy={:.0}",
            radius_mode,
            bounce_mode,
            world.len(),
            world.tick_count(),
            world.total_kinetic_energy()
        );
        for (i, line) in overlay.lines().enumerate() {
            draw_text(line, 12.0, 20.0 + 18.0 * i as f32, 18.0, BLACK);
        }

        next_frame().await;
    }
}
