//! 3D visualization of a folded chain using kiss3d.

use kiss3d::prelude::*;

use twister::solver::Solution;
use twister::topology::CHAIN_LEN;

/// Returns the display color for a cube, fading from orange at the start of
/// the chain to blue at the end so the chain order is visible.
fn cube_color(cube_index: usize) -> Color {
    let t = cube_index as f32 / (CHAIN_LEN - 1) as f32;
    Color::new(1.0 - 0.8 * t, 0.6 - 0.3 * t, 0.2 + 0.8 * t, 1.0)
}

/// Represents a rendered cube in the 3D scene.
struct RenderedCube {
    /// The kiss3d scene node for this cube.
    node: SceneNode3d,
    /// The cube's position when not exploded.
    base_position: Vec3,
}

/// Builds the 3D scene for the first `visible` cubes of the chain.
///
/// Coordinate conventions:
/// - Solver coordinates use integer x, y, z in 0..=2.
/// - Rendered cubes map x->X, y->Y, z->Z in world units.
/// - The grid is centered at the origin by offsetting positions by -1.0.
fn build_scene(scene: &mut SceneNode3d, solution: &Solution, visible: usize) -> Vec<RenderedCube> {
    /// Size of each rendered cube (slightly smaller than 1.0 for visible gaps).
    const CUBE_SIZE: f32 = 0.9;
    /// Spacing between grid cells.
    const CELL_SPACING: f32 = 1.0;
    /// Offset to center the grid around the origin.
    const CENTER_OFFSET: f32 = -1.0;

    solution
        .locations()
        .take(visible)
        .enumerate()
        .map(|(cube_index, location)| {
            let base_position = Vec3::new(
                location.x as f32 * CELL_SPACING + CENTER_OFFSET,
                location.y as f32 * CELL_SPACING + CENTER_OFFSET,
                location.z as f32 * CELL_SPACING + CENTER_OFFSET,
            );
            let node = scene
                .add_cube(CUBE_SIZE, CUBE_SIZE, CUBE_SIZE)
                .set_color(cube_color(cube_index))
                .set_position(base_position);
            RenderedCube {
                node,
                base_position,
            }
        })
        .collect()
}

/// Displays the solution in an interactive 3D viewer.
pub fn display(solution: Solution) {
    pollster::block_on(display_async(solution));
}

fn window_title(visible: usize) -> String {
    format!(
        "Cubes {}/{} - [Up/Down] add/remove, [Left/Right] explode, [R] reset",
        visible, CHAIN_LEN
    )
}

async fn display_async(solution: Solution) {
    let mut visible = CHAIN_LEN;

    let mut window = Window::new(&window_title(visible)).await;

    let mut camera = OrbitCamera3d::default();
    camera.set_dist(8.0);

    let mut scene = SceneNode3d::empty();
    scene
        .add_light(Light::point(100.0))
        .set_position(Vec3::new(5.0, 5.0, 5.0));

    let mut rendered_cubes = build_scene(&mut scene, &solution, visible);

    // how far cubes spread from the grid center (0.0 = compact)
    let mut explosion_amount: f32 = 0.0;
    // change in explosion per keypress
    const EXPLOSION_SPEED: f32 = 0.05;
    // whether the scene needs to be rebuilt (after the visible count changes)
    let mut needs_rebuild = false;

    loop {
        for event in window.events().iter() {
            if let kiss3d::event::WindowEvent::Key(key, action, _) = event.value {
                use kiss3d::event::{Action, Key};
                if action == Action::Press {
                    match key {
                        Key::Right => explosion_amount += EXPLOSION_SPEED,
                        Key::Left => {
                            explosion_amount = (explosion_amount - EXPLOSION_SPEED).max(0.0)
                        }
                        Key::Up if visible < CHAIN_LEN => {
                            visible += 1;
                            needs_rebuild = true;
                        }
                        Key::Down if visible > 1 => {
                            visible -= 1;
                            needs_rebuild = true;
                        }
                        Key::R => {
                            explosion_amount = 0.0;
                            visible = CHAIN_LEN;
                            needs_rebuild = true;
                        }
                        _ => {}
                    }
                }
            }
        }

        if needs_rebuild {
            for mut cube in rendered_cubes.drain(..) {
                cube.node.remove();
            }
            rendered_cubes = build_scene(&mut scene, &solution, visible);
            window.set_title(&window_title(visible));
            needs_rebuild = false;
        }

        // cubes move straight out from the center of the grid
        for cube in &mut rendered_cubes {
            let explosion_direction = cube.base_position.normalize_or_zero();
            cube.node
                .set_position(cube.base_position + explosion_direction * explosion_amount * 2.0);
        }

        if !window.render_3d(&mut scene, &mut camera).await {
            break;
        }
    }
}
