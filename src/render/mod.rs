pub mod components;
pub mod draw;
pub mod mesh;
pub mod resources;
pub mod systems;

pub use components::*;
pub use resources::*;
use systems::*;

use bevy::prelude::*;

/// Draws the `ChartRes` engine and feeds it window input
#[derive(Default)]
pub struct BarChartPlugin;

impl Plugin for BarChartPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ChartRes>()
            .init_resource::<ChartScene>()
            .add_message::<BarPressed>()
            .add_systems(Startup, (setup_cameras, setup_unit_meshes))
            .add_systems(
                Update,
                (
                    measure_container,
                    handle_press,
                    handle_scroll_keys,
                    advance_chart,
                    rebuild_scene,
                    sync_cameras,
                    animate_bars,
                    update_tooltip,
                    update_pager,
                )
                    .chain(),
            );
    }
}
